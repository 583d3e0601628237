// HTTP request handlers
use crate::domain::filter::{Criterion, FilterState};
use crate::error::DashboardError;
use crate::infrastructure::http_response::{self, json_view};
use crate::infrastructure::view_mapper;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::Uri,
    response::Response,
};
use serde::Deserialize;
use std::sync::Arc;

/// Builds the page filter from the free-text `q` and named select values.
fn filter_state(query: &Option<String>, criteria: &[(&str, &Option<String>)]) -> FilterState {
    let mut filter = FilterState::new(query.as_deref().unwrap_or_default());
    for (name, value) in criteria {
        filter.set(name, Criterion::from_param(value.as_deref()));
    }
    filter
}

#[derive(Deserialize)]
pub struct NavigationQuery {
    pub path: Option<String>,
    pub toggle: Option<String>,
}

#[derive(Deserialize)]
pub struct ScopeQuery {
    pub state: Option<String>,
    pub district: Option<String>,
    pub block: Option<String>,
}

#[derive(Deserialize)]
pub struct BeneficiaryQuery {
    pub q: Option<String>,
    pub risk: Option<String>,
    pub facility: Option<String>,
    pub selected: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighRiskQuery {
    pub q: Option<String>,
    pub priority: Option<String>,
    pub risk_type: Option<String>,
    pub selected: Option<String>,
}

#[derive(Deserialize)]
pub struct NutritionQuery {
    pub q: Option<String>,
    pub status: Option<String>,
    pub supplement: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticsQuery {
    pub q: Option<String>,
    pub facility: Option<String>,
    pub test_type: Option<String>,
}

#[derive(Deserialize)]
pub struct IecQuery {
    pub q: Option<String>,
    #[serde(rename = "type")]
    pub material_type: Option<String>,
    pub category: Option<String>,
    pub language: Option<String>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

pub async fn navigation(Query(query): Query<NavigationQuery>) -> Response {
    json_view(view_mapper::navigation_view(
        query.path.as_deref(),
        query.toggle.as_deref(),
    ))
}

/// Overview dashboard, optionally drilled down to a state/district/block
pub async fn overview(
    Query(query): Query<ScopeQuery>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let selections: Vec<(String, String)> = [
        ("state", query.state),
        ("district", query.district),
        ("block", query.block),
    ]
    .into_iter()
    .filter_map(|(level, value)| value.map(|v| (level.to_string(), v)))
    .collect();

    json_view(view_mapper::dashboard_to_view(
        state.dashboard_service.overview(&selections),
    ))
}

pub async fn monitoring(State(state): State<Arc<AppState>>) -> Response {
    json_view(view_mapper::monitoring_to_view(
        state.dashboard_service.monitoring(),
    ))
}

pub async fn list_beneficiaries(
    Query(query): Query<BeneficiaryQuery>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let filter = filter_state(
        &query.q,
        &[("risk", &query.risk), ("facility", &query.facility)],
    );
    let page = state
        .beneficiary_service
        .search(&filter, query.selected.as_deref());

    json_view(view_mapper::beneficiary_page_to_view(page))
}

pub async fn beneficiary_profile(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, DashboardError> {
    let beneficiary = state.beneficiary_service.profile(&id)?;
    Ok(json_view(view_mapper::beneficiary_profile(beneficiary)))
}

pub async fn beneficiary_lifecycle(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, DashboardError> {
    let lifecycle = state.beneficiary_service.lifecycle(&id)?;
    Ok(json_view(view_mapper::lifecycle_to_view(lifecycle)))
}

pub async fn high_risk(
    Query(query): Query<HighRiskQuery>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let filter = filter_state(
        &query.q,
        &[("priority", &query.priority), ("riskType", &query.risk_type)],
    );
    let page = state
        .beneficiary_service
        .high_risk(&filter, query.selected.as_deref());

    json_view(view_mapper::high_risk_page_to_view(page))
}

pub async fn nutrition(
    Query(query): Query<NutritionQuery>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let filter = filter_state(
        &query.q,
        &[("status", &query.status), ("supplement", &query.supplement)],
    );
    json_view(view_mapper::nutrition_page_to_view(
        state.health_service.nutrition(&filter),
    ))
}

pub async fn diagnostics(
    Query(query): Query<DiagnosticsQuery>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let filter = filter_state(
        &query.q,
        &[("facility", &query.facility), ("testType", &query.test_type)],
    );
    json_view(view_mapper::diagnostics_page_to_view(
        state.health_service.diagnostics(&filter),
    ))
}

pub async fn iec_materials(
    Query(query): Query<IecQuery>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let filter = filter_state(
        &query.q,
        &[
            ("type", &query.material_type),
            ("category", &query.category),
            ("language", &query.language),
        ],
    );
    json_view(view_mapper::iec_page_to_view(state.iec_service.list(&filter)))
}

pub async fn publish_material(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, DashboardError> {
    let material = state.iec_service.publish(&id)?;
    Ok(json_view(material))
}

pub async fn facilities(State(state): State<Arc<AppState>>) -> Response {
    json_view(view_mapper::facilities_page_to_view(
        state.dashboard_service.facilities(),
    ))
}

pub async fn alerts(State(state): State<Arc<AppState>>) -> Response {
    json_view(view_mapper::alerts_page_to_view(state.dashboard_service.alerts()))
}

pub async fn reports(State(state): State<Arc<AppState>>) -> Response {
    json_view(state.dashboard_service.reports())
}

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> Response {
    tracing::debug!("No route for {}", uri.path());
    http_response::not_found(uri.path())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_state_from_params() {
        let filter = filter_state(
            &Some("priya".to_string()),
            &[("risk", &Some("high".to_string())), ("facility", &Some("all".to_string()))],
        );
        assert_eq!(filter.query(), "priya");
        assert_eq!(filter.criterion("risk").value(), Some("high"));
        assert!(filter.criterion("facility").is_any());
        assert!(filter.criterion("gender").is_any());
    }

    #[test]
    fn test_filter_state_defaults() {
        let filter = filter_state(&None, &[("status", &None)]);
        assert_eq!(filter.query(), "");
        assert!(filter.is_wildcard());
    }
}
