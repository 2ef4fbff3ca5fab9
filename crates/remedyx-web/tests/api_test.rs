//! End-to-end tests against the router, driven in-process with `oneshot`.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

use remedyx_research::{Catalog, FixedEfficacy, InMemoryResultStore, Investigator, ResultStore};
use remedyx_web::{router::build_router, state::AppState};

struct TestApp {
    router: Router,
    store: Arc<InMemoryResultStore>,
}

fn app_with_efficacy(values: Vec<f64>) -> TestApp {
    let store = Arc::new(InMemoryResultStore::new());
    let state = AppState::new(
        Catalog::builtin(),
        Investigator::new(Arc::new(FixedEfficacy::new(values))),
        store.clone(),
    );
    TestApp { router: build_router(state), store }
}

fn app() -> TestApp {
    app_with_efficacy(vec![0.72, 0.55, 0.91])
}

fn json_post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(router: &Router, req: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let resp = router.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let headers = resp.headers().clone();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, headers, bytes.to_vec())
}

async fn send_json(router: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let (status, _, bytes) = send(router, req).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

// ── Search ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_search_cancer() {
    let app = app();
    let (status, body) = send_json(&app.router, json_post("/api/search", json!({"disease_name": "cancer"}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["count"], json!(1));
    let record = &body["results"][0];
    assert_eq!(record["disease_name"], "Cancer");
    assert_eq!(record["target_protein"], "p53");
    let names: Vec<&str> = record["therapeutic_compounds"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Doxorubicin", "Cisplatin", "Paclitaxel"]);
}

#[tokio::test]
async fn test_search_results_only_contain_matches() {
    let app = app();
    let (_, body) = send_json(&app.router, json_post("/api/search", json!({"disease_name": "ALZ"}))).await;
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["disease_name"], "Alzheimer's Disease");
}

#[tokio::test]
async fn test_search_no_match() {
    let app = app();
    let (status, body) = send_json(&app.router, json_post("/api/search", json!({"disease_name": "malaria"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "success": true,
            "message": "No diseases found matching your search",
            "results": [],
            "count": 0
        })
    );
}

#[tokio::test]
async fn test_search_missing_name_is_400() {
    let app = app();
    for payload in [json!({}), json!({"disease_name": "   "})] {
        let (status, body) = send_json(&app.router, json_post("/api/search", payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"success": false, "error": "Disease name is required"}));
    }
}

#[tokio::test]
async fn test_search_malformed_json_is_400() {
    let app = app();
    let req = Request::builder()
        .method("POST")
        .uri("/api/search")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send_json(&app.router, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert!(body["error"].is_string());
}

// ── Investigate ────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_investigate_json() {
    let app = app();
    let (status, body) = send_json(
        &app.router,
        json_post("/api/investigate", json!({"diseaseName": "X", "targetProtein": "Y", "sequence": "ABC"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], "Successfully analyzed X");
    let result_id = body["result_id"].as_str().unwrap();
    assert!(result_id.starts_with("result_1_"), "{result_id}");

    let result = &body["results"][0];
    assert_eq!(result["description"], "AI-generated analysis for X targeting Y");
    assert_eq!(result["pdb_uploaded"], json!(false));
    let compounds: Vec<(String, f64)> = result["therapeutic_compounds"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| (c["name"].as_str().unwrap().to_string(), c["efficacy"].as_f64().unwrap()))
        .collect();
    assert_eq!(
        compounds,
        vec![
            ("Y_antagonist_3".to_string(), 0.91),
            ("Y_inhibitor_1".to_string(), 0.72),
            ("Y_modulator_2".to_string(), 0.55),
        ]
    );
    assert_eq!(app.store.len().await, 1);
}

#[tokio::test]
async fn test_investigate_urlencoded_form() {
    let app = app();
    let req = Request::builder()
        .method("POST")
        .uri("/api/investigate")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("diseaseName=Lupus&targetProtein=TLR7&sequence=MVFPM"))
        .unwrap();
    let (status, body) = send_json(&app.router, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"][0]["therapeutic_compounds"][0]["name"], "TLR7_antagonist_3");
}

#[tokio::test]
async fn test_investigate_multipart_with_structure_file() {
    let app = app();
    let boundary = "remedyxboundary";
    let body = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"diseaseName\"\r\n\r\nX\r\n\
         --{b}\r\nContent-Disposition: form-data; name=\"targetProtein\"\r\n\r\nY\r\n\
         --{b}\r\nContent-Disposition: form-data; name=\"sequence\"\r\n\r\nABC\r\n\
         --{b}\r\nContent-Disposition: form-data; name=\"pdbFile\"; filename=\"1crn.pdb\"\r\n\
         Content-Type: chemical/x-pdb\r\n\r\nATOM      1  N   THR A   1\r\n\
         --{b}--\r\n",
        b = boundary
    );
    let req = Request::builder()
        .method("POST")
        .uri("/api/investigate")
        .header(header::CONTENT_TYPE, format!("multipart/form-data; boundary={boundary}"))
        .body(Body::from(body))
        .unwrap();

    let (status, body) = send_json(&app.router, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"][0]["pdb_uploaded"], json!(true));
    assert_eq!(body["results"][0]["sequence"], "ABC");
}

#[tokio::test]
async fn test_investigate_accepts_structure_file_over_default_body_limit() {
    let app = app();
    let boundary = "remedyxboundary";
    // ~3.2 MB of ATOM records, past axum's 2 MiB default
    let atoms = "ATOM      1  N   THR A   1      17.047  14.099   3.625  1.00 13.79           N\n".repeat(42_000);
    let mut body = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"diseaseName\"\r\n\r\nX\r\n\
         --{b}\r\nContent-Disposition: form-data; name=\"targetProtein\"\r\n\r\nY\r\n\
         --{b}\r\nContent-Disposition: form-data; name=\"sequence\"\r\n\r\nABC\r\n\
         --{b}\r\nContent-Disposition: form-data; name=\"pdbFile\"; filename=\"big.pdb\"\r\n\
         Content-Type: chemical/x-pdb\r\n\r\n",
        b = boundary
    );
    body.push_str(&atoms);
    body.push_str(&format!("\r\n--{boundary}--\r\n"));
    assert!(body.len() > 3 * 1024 * 1024);

    let req = Request::builder()
        .method("POST")
        .uri("/api/investigate")
        .header(header::CONTENT_TYPE, format!("multipart/form-data; boundary={boundary}"))
        .body(Body::from(body))
        .unwrap();

    let (status, body) = send_json(&app.router, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"][0]["pdb_uploaded"], json!(true));
    assert_eq!(app.store.len().await, 1);
}

#[tokio::test]
async fn test_investigate_without_form_reports_first_missing_field() {
    let app = app();
    let bare = Request::builder()
        .method("POST")
        .uri("/api/investigate")
        .body(Body::empty())
        .unwrap();
    let text = Request::builder()
        .method("POST")
        .uri("/api/investigate")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from("diseaseName=X"))
        .unwrap();

    for req in [bare, text] {
        let (status, body) = send_json(&app.router, req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"success": false, "error": "diseaseName is required"}));
    }
    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn test_investigate_missing_field_is_400_and_stores_nothing() {
    let app = app();
    let cases = [
        (json!({"targetProtein": "Y", "sequence": "ABC"}), "diseaseName is required"),
        (json!({"diseaseName": "X", "sequence": "ABC"}), "targetProtein is required"),
        (json!({"diseaseName": "X", "targetProtein": "Y", "sequence": ""}), "sequence is required"),
    ];
    for (payload, error) in cases {
        let (status, body) = send_json(&app.router, json_post("/api/investigate", payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"success": false, "error": error}));
    }
    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn test_investigate_ids_increment() {
    let app = app();
    let payload = json!({"diseaseName": "X", "targetProtein": "Y", "sequence": "ABC"});
    let (_, first) = send_json(&app.router, json_post("/api/investigate", payload.clone())).await;
    let (_, second) = send_json(&app.router, json_post("/api/investigate", payload)).await;
    assert!(first["result_id"].as_str().unwrap().starts_with("result_1_"));
    assert!(second["result_id"].as_str().unwrap().starts_with("result_2_"));
}

// ── Download ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_download_known_result() {
    let app = app();
    let (_, body) = send_json(
        &app.router,
        json_post("/api/investigate", json!({"diseaseName": "X", "targetProtein": "Y", "sequence": "ABC"})),
    )
    .await;
    let result_id = body["result_id"].as_str().unwrap();

    let req = Request::builder()
        .uri(format!("/api/download/{result_id}"))
        .body(Body::empty())
        .unwrap();
    let (status, headers, bytes) = send(&app.router, req).await;

    assert_eq!(status, StatusCode::OK);
    assert!(headers[header::CONTENT_TYPE].to_str().unwrap().starts_with("text/csv"));
    assert_eq!(
        headers[header::CONTENT_DISPOSITION],
        "attachment; filename=\"X_analysis_results.csv\""
    );

    let mut rdr = csv::Reader::from_reader(bytes.as_slice());
    assert_eq!(
        rdr.headers().unwrap().iter().collect::<Vec<_>>(),
        vec!["Disease Name", "Target Protein", "Compound Name", "Mechanism", "Efficacy Score", "Analysis Date"]
    );
    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(&rows[0][2], "Y_antagonist_3");
    assert_eq!(&rows[0][4], "0.91");
    assert!(rows.iter().all(|r| &r[0] == "X" && &r[1] == "Y"));
}

#[tokio::test]
async fn test_download_unknown_is_404() {
    let app = app();
    let req = Request::builder()
        .uri("/api/download/result_42_20240101_000000")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send_json(&app.router, req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"success": false, "error": "Result not found"}));
}

// ── Health ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_health() {
    let app = app();
    let req = Request::builder().uri("/api/health").body(Body::empty()).unwrap();
    let (status, body) = send_json(&app.router, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["timestamp"].is_string());
}
