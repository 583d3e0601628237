// Router-level tests for the JSON page views
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use nhm_dashboard::infrastructure::config::DashboardSettings;
use nhm_dashboard::infrastructure::sample_data::InMemorySampleRepository;
use nhm_dashboard::presentation::app_state::AppState;
use nhm_dashboard::presentation::router::router;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> Router {
    let state = AppState::new(
        Arc::new(InMemorySampleRepository::new()),
        DashboardSettings::default(),
    );
    router(Arc::new(state), false)
}

async fn send(app: Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn get(uri: &str) -> (StatusCode, Value) {
    send(app(), Method::GET, uri).await
}

fn ids(items: &Value, key: &str) -> Vec<String> {
    items
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item[key].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_health_check() {
    let response = app()
        .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"ok");
}

#[tokio::test]
async fn test_beneficiary_search_is_case_insensitive() {
    let (status, body) = get("/api/beneficiaries?q=PRIYA").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body["beneficiaries"], "id"), ["NHM001"]);
    assert_eq!(body["showing"], 1);
    assert_eq!(body["total"], 3);
    assert_eq!(body["beneficiaries"][0]["ageGender"], "28/F");
}

#[tokio::test]
async fn test_beneficiary_filters_combine() {
    let (_, body) = get("/api/beneficiaries?risk=all&facility=CHC%20Mandi").await;
    assert_eq!(ids(&body["beneficiaries"], "id"), ["NHM002"]);

    let (_, body) = get("/api/beneficiaries?risk=high&facility=CHC%20Mandi").await;
    assert!(body["beneficiaries"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_beneficiary_selection() {
    let (_, body) = get("/api/beneficiaries").await;
    assert_eq!(body["selected"]["id"], "NHM001");
    assert_eq!(body["selected"]["hemoglobinLow"], true);

    let (_, body) = get("/api/beneficiaries?q=priya&selected=NHM003").await;
    assert_eq!(body["selected"]["id"], "NHM003");
    assert_eq!(body["selected"]["bloodSugarHigh"], true);
}

#[tokio::test]
async fn test_unknown_beneficiary_is_404() {
    let (status, body) = get("/api/beneficiaries/NHM999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "beneficiary not found: NHM999");
}

#[tokio::test]
async fn test_lifecycle() {
    let (status, body) = get("/api/beneficiaries/NHM001/lifecycle").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["beneficiaryId"], "NHM001");
    assert_eq!(body["name"], "Priya Sharma");
    assert_eq!(body["events"].as_array().unwrap().len(), 5);
    assert_eq!(body["events"][0]["details"]["type"], "registration");
    assert_eq!(body["flagged"], 1);
    assert_eq!(body["nextPending"]["details"]["type"], "followup");

    // the lifecycle is reachable from the same id the profile uses
    let (status, profile) = get("/api/beneficiaries/NHM001").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["name"], body["name"]);
}

#[tokio::test]
async fn test_lifecycle_not_found() {
    let (status, body) = get("/api/beneficiaries/NHM002/lifecycle").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "lifecycle not found: NHM002");

    let (status, body) = get("/api/beneficiaries/BEN001/lifecycle").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "beneficiary not found: BEN001");
}

#[tokio::test]
async fn test_high_risk_counts_use_full_caseload() {
    let (_, body) = get("/api/high-risk?priority=critical").await;
    assert_eq!(ids(&body["cases"], "id"), ["BEN001", "BEN003"]);
    assert_eq!(body["counts"]["critical"], 2);
    assert_eq!(body["counts"]["high"], 2);
    assert_eq!(body["counts"]["medium"], 1);
    assert_eq!(body["counts"]["total"], 5);
}

#[tokio::test]
async fn test_high_risk_by_type() {
    let (_, body) = get("/api/high-risk?riskType=missed-nutrition").await;
    assert_eq!(ids(&body["cases"], "id"), ["BEN002", "BEN005"]);
    assert_eq!(body["cases"][0]["details"]["missedVisits"], 3);
    assert!(body["selected"].is_null());
}

#[tokio::test]
async fn test_nutrition_supplement_filter() {
    let (_, body) = get("/api/nutrition?supplement=not-given").await;
    assert_eq!(ids(&body["records"], "id"), ["INT002"]);

    let (_, body) = get("/api/nutrition?supplement=given").await;
    assert_eq!(ids(&body["records"], "id"), ["INT001", "INT003", "INT004"]);

    let (_, body) = get("/api/nutrition?supplement=missed").await;
    assert_eq!(ids(&body["records"], "id"), ["INT003"]);
    assert_eq!(body["counts"]["complete"], 2);
    assert_eq!(body["counts"]["total"], 4);
}

#[tokio::test]
async fn test_nutrition_search_covers_intake() {
    let (_, body) = get("/api/nutrition?q=vitamin").await;
    assert_eq!(ids(&body["records"], "id"), ["INT004"]);
}

#[tokio::test]
async fn test_diagnostics_facility_substring() {
    let (_, body) = get("/api/diagnostics?facility=Sub%20Center").await;
    assert_eq!(ids(&body["results"], "uniqueId"), ["BEN001237"]);

    let (_, body) = get("/api/diagnostics?facility=Anganwadi").await;
    assert_eq!(ids(&body["results"], "uniqueId"), ["BEN001238"]);

    let (_, body) = get("/api/diagnostics?facility=Primary%20Health%20Center&testType=all").await;
    assert_eq!(ids(&body["results"], "uniqueId"), ["BEN001234"]);

    let (_, body) = get("/api/diagnostics?testType=Hemoglobin").await;
    assert_eq!(ids(&body["results"], "id"), ["1", "3"]);
    assert_eq!(body["total"], 5);
    assert_eq!(body["showing"], 2);
    assert_eq!(body["results"][0]["trendingDown"], true);
    assert_eq!(body["results"][1]["trendingDown"], false);
}

#[tokio::test]
async fn test_iec_filters() {
    let (_, body) = get("/api/iec-materials?type=PDF").await;
    assert_eq!(ids(&body["materials"], "id"), ["1", "4"]);

    let (_, body) = get("/api/iec-materials?q=video&language=English").await;
    assert_eq!(ids(&body["materials"], "id"), ["3"]);
    assert_eq!(body["materials"][0]["status"], "Under Review");
}

#[tokio::test]
async fn test_publish_material() {
    let app = app();

    let (status, body) = send(app.clone(), Method::POST, "/api/iec-materials/3/publish").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "Published");

    let (_, body) = send(app.clone(), Method::GET, "/api/iec-materials").await;
    assert_eq!(body["counts"]["published"], 3);
    assert_eq!(body["counts"]["underReview"], 0);
    assert_eq!(body["counts"]["draft"], 1);

    let (status, _) = send(app, Method::POST, "/api/iec-materials/99/publish").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_publish_requires_post() {
    let (status, _) = get("/api/iec-materials/3/publish").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_overview_scope_drilldown() {
    let (status, body) = get("/api/dashboard?district=Kullu&block=Theog").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "NHM Health Monitoring");
    assert_eq!(body["scope"][1]["value"], "Kullu");
    assert_eq!(body["scope"][2]["value"], "Theog");
    assert_eq!(body["tiles"].as_array().unwrap().len(), 3);
    assert_eq!(body["charts"].as_array().unwrap().len(), 3);
    assert_eq!(body["charts"][0]["labels"][0], "Shimla");
    assert_eq!(body["charts"][0]["yMax"], 92.0);
}

#[tokio::test]
async fn test_monitoring_page() {
    let (_, body) = get("/api/monitoring").await;
    assert_eq!(body["title"], "Monitoring Dashboard");
    assert_eq!(body["tiles"].as_array().unwrap().len(), 4);
    assert_eq!(body["notifications"].as_array().unwrap().len(), 4);
    assert_eq!(body["districts"][0]["district"], "Shimla");
}

#[tokio::test]
async fn test_facilities_load() {
    let (_, body) = get("/api/facilities").await;
    assert_eq!(body["totalCapacity"], 930);
    assert_eq!(body["facilities"][0]["loadPercentage"], 65);
    assert_eq!(body["facilities"][1]["loadLevel"], "busy");
}

#[tokio::test]
async fn test_alerts_and_reports() {
    let (_, body) = get("/api/alerts").await;
    assert_eq!(body["counts"]["active"], 3);
    assert_eq!(body["counts"]["resolved"], 1);

    let (_, body) = get("/api/reports").await;
    assert_eq!(body.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_navigation() {
    let (_, body) = get("/api/navigation?path=/health/medicine").await;
    assert_eq!(body["current"]["page"], "nutrition-monitoring");
    assert_eq!(body["current"]["breadcrumb"][0], "Health Monitoring");
    assert!(body["routes"].as_array().unwrap().len() > 10);
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let (status, body) = get("/api/geographic").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "page not found: /api/geographic");
}

#[tokio::test]
async fn test_compression_when_accepted() {
    let state = AppState::new(
        Arc::new(InMemorySampleRepository::new()),
        DashboardSettings::default(),
    );
    let request = Request::get("/api/dashboard")
        .header(header::ACCEPT_ENCODING, "gzip")
        .body(Body::empty())
        .unwrap();
    let response = router(Arc::new(state), true).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_ENCODING], "gzip");
}
