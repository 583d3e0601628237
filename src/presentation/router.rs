// Route table for the JSON page views
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    alerts, beneficiary_lifecycle, beneficiary_profile, diagnostics, facilities, health_check,
    high_risk, iec_materials, list_beneficiaries, monitoring, navigation, not_found, nutrition,
    overview, publish_material, reports,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

pub fn router(state: Arc<AppState>, compression: bool) -> Router {
    let mut router = Router::new()
        .route("/healthz", get(health_check))
        .route("/api/navigation", get(navigation))
        .route("/api/dashboard", get(overview))
        .route("/api/monitoring", get(monitoring))
        .route("/api/beneficiaries", get(list_beneficiaries))
        .route("/api/beneficiaries/:id", get(beneficiary_profile))
        .route("/api/beneficiaries/:id/lifecycle", get(beneficiary_lifecycle))
        .route("/api/high-risk", get(high_risk))
        .route("/api/nutrition", get(nutrition))
        .route("/api/diagnostics", get(diagnostics))
        .route("/api/iec-materials", get(iec_materials))
        .route("/api/iec-materials/:id/publish", post(publish_material))
        .route("/api/facilities", get(facilities))
        .route("/api/alerts", get(alerts))
        .route("/api/reports", get(reports))
        .fallback(not_found)
        .with_state(state);

    // gzip/br only when the client sends a matching Accept-Encoding
    if compression {
        router = router.layer(CompressionLayer::new());
    }

    router.layer(TraceLayer::new_for_http())
}
