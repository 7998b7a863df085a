//! End-to-end integration tests for the launch dashboard.
//!
//! These tests exercise the full pipeline: CSV on disk → dashboard context →
//! HTTP router → page interactions → replaced figures.

use std::io::Write;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use launchboard_config::AppConfig;
use launchboard_core::figure::Trace;
use launchboard_core::{DashboardContext, Interaction, OutputId};
use launchboard_gateway::{DashboardState, build_router};

const LAUNCHES: &str = "\
Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
1,CCAFS LC-40,0,0,F9 v1.0  B0003,v1.0
2,CCAFS LC-40,0,525,F9 v1.0  B0005,v1.0
3,CCAFS LC-40,0,677,F9 v1.0  B0006,v1.0
4,VAFB SLC-4E,0,500,F9 v1.1  B1003,v1.1
5,CCAFS LC-40,1,3170,F9 v1.1,v1.1
6,KSC LC-39A,1,2490,F9 FT B1031.1,FT
7,KSC LC-39A,1,5300,F9 FT B1032.1,FT
8,KSC LC-39A,0,5300,F9 FT B1034,FT
9,VAFB SLC-4E,1,9600,F9 FT B1029.1,FT
10,CCAFS SLC-40,1,3600,F9 B4 B1039.2,B4
11,CCAFS SLC-40,1,6460,F9 B5 B1046.3,B5
";

fn dataset_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(LAUNCHES.as_bytes()).unwrap();
    file
}

fn app_for(file: &tempfile::NamedTempFile) -> axum::Router {
    let mut config = AppConfig::default();
    config.dataset.path = file.path().to_path_buf();
    let context = DashboardContext::load(&config.dataset.path).unwrap();
    build_router(Arc::new(DashboardState::new(config, context)))
}

async fn json(app: axum::Router, req: Request<Body>) -> serde_json::Value {
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

async fn update(app: axum::Router, body: serde_json::Value) -> Interaction {
    let req = Request::builder()
        .method("POST")
        .uri("/v1/update")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    serde_json::from_value(json(app, req).await).unwrap()
}

#[tokio::test]
async fn page_load_then_interactions() {
    let file = dataset_file();

    // Page load: options, slider and both initial figures.
    let layout = json(
        app_for(&file),
        Request::builder()
            .uri("/v1/layout")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    let options: Vec<&str> = layout["options"]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["value"].as_str().unwrap())
        .collect();
    assert_eq!(
        options,
        vec!["ALL", "CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"]
    );
    assert_eq!(layout["slider"]["min"], 0.0);
    assert_eq!(layout["slider"]["max"], 10000.0);
    assert_eq!(layout["slider"]["marks"].as_array().unwrap().len(), 11);

    let pie = &layout["figures"][0]["figure"]["data"][0];
    assert_eq!(
        pie["labels"],
        serde_json::json!(["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"])
    );
    assert_eq!(pie["values"], serde_json::json!([1, 1, 2, 2]));

    let state = layout["initial_state"].clone();

    // Narrow the payload range: only the scatter chart is replaced.
    let narrowed = update(
        app_for(&file),
        serde_json::json!({ "state": state, "change": { "payload": { "low": 0, "high": 1000 } } }),
    )
    .await;
    assert_eq!(narrowed.outputs.len(), 1);
    assert_eq!(narrowed.outputs[0].id, OutputId::CorrelationChart);
    assert_eq!(narrowed.outputs[0].figure.point_count(), 4);

    // Pick a site: both charts are replaced and the narrowed range still applies.
    let site = update(
        app_for(&file),
        serde_json::json!({
            "state": serde_json::to_value(&narrowed.state).unwrap(),
            "change": { "site": "VAFB SLC-4E" }
        }),
    )
    .await;
    assert_eq!(site.outputs.len(), 2);
    match &site.outputs[0].figure.data[0] {
        Trace::Pie(pie) => {
            assert_eq!(pie.labels, vec!["Failure", "Success"]);
            assert_eq!(pie.values, vec![1, 1]);
        }
        other => panic!("Expected pie trace, got {other:?}"),
    }
    assert_eq!(site.outputs[1].figure.point_count(), 1);
    assert_eq!(
        site.outputs[1].figure.layout.title.text,
        "Launch Site:VAFB SLC-4E"
    );
}

#[tokio::test]
async fn scatter_colors_by_booster_category() {
    let file = dataset_file();
    let figure = json(
        app_for(&file),
        Request::builder()
            .uri("/v1/charts/correlation?site=ALL&low=0&high=10000")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    let names: Vec<&str> = figure["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["v1.0", "v1.1", "FT", "B4", "B5"]);
    assert_eq!(figure["layout"]["legend"]["title"]["text"], "Booster Category");
}

#[tokio::test]
async fn health_and_status() {
    let file = dataset_file();
    let health = json(
        app_for(&file),
        Request::builder().uri("/health").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(health["status"], "ok");

    let status = json(
        app_for(&file),
        Request::builder()
            .uri("/v1/status")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status["records"], 11);
    assert_eq!(status["sites"], 4);
}

#[tokio::test]
async fn update_requires_state_and_change() {
    let file = dataset_file();
    let body = serde_json::json!({
        "changed": "site",
        "state": { "site": "KSC LC-39A", "payload": { "low": 0, "high": 10000 } }
    });
    let req = Request::builder()
        .method("POST")
        .uri("/v1/update")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app_for(&file).oneshot(req).await.unwrap();
    assert!(response.status().is_client_error());

    let result = update(
        app_for(&file),
        serde_json::json!({
            "state": { "site": "ALL", "payload": { "low": 0, "high": 10000 } },
            "change": { "site": "KSC LC-39A" }
        }),
    )
    .await;
    assert_eq!(result.state.site.as_str(), "KSC LC-39A");
    assert_eq!(result.outputs.len(), 2);
}

#[test]
fn missing_column_fails_before_serving() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"Launch Site,class\nA,1\n").unwrap();
    assert!(DashboardContext::load(file.path()).is_err());
}
