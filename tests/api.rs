#![cfg(feature = "server")]

use actix_web::App;
use actix_web::http::StatusCode;
use actix_web::test;
use actix_web::web;
use pricer::api::history_data;
use pricer::api::routes;
use pricer::artifact::Artifact;
use pricer::artifact::Metadata;
use pricer::artifact::Regressor;
use pricer::artifact::Scaler;
use pricer::features::Field;
use pricer::Price;
use pricer::features::FeatureVector;
use pricer::history::History;
use pricer::history::Memory;
use pricer::history::Record;
use pricer::history::RecordId;
use pricer::history::StoreError;
use pricer::service::Predictor;
use serde_json::Value;
use serde_json::json;
use std::sync::Arc;

const R2: f64 = 0.8912;

/// columns deliberately not in wire order
fn predictor() -> Predictor {
    let mut columns = Field::all();
    columns.rotate_left(5);
    let artifact = Artifact::new(
        Regressor::Linear {
            coefficients: columns.iter().map(|f| 5000.0 + *f as usize as f64 * 750.0).collect(),
            intercept: 325000.0,
        },
        Scaler::Standard {
            mean: columns.iter().map(|f| (f.bounds().0 + f.bounds().1) / 2.0).collect(),
            scale: columns.iter().map(|f| f.bounds().1 - f.bounds().0).collect(),
        },
        columns.iter().map(|f| f.name().to_string()).collect(),
        Metadata::new("Random Forest".to_string(), R2, 52310.4, 38220.9, 16000),
    )
    .unwrap();
    Predictor::from(artifact)
}

fn house() -> Value {
    json!({
        "square_feet": 2400,
        "bedrooms": 4,
        "bathrooms": 3,
        "age_years": 12,
        "garage_spaces": 2,
        "lot_size_sqft": 9000,
        "floors": 2,
        "crime_rate": 1.75,
        "school_rating": 9,
        "distance_to_city_miles": 14.2,
        "has_pool": 1,
        "has_fireplace": 1,
        "has_renovated": 0,
        "neighborhood_quality": 4
    })
}

macro_rules! app {
    ($predictor:expr, $store:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($predictor))
                .app_data(history_data($store.clone()))
                .configure(routes),
        )
        .await
    };
    ($store:expr) => {
        app!(predictor(), $store)
    };
}

fn store() -> Arc<dyn History> {
    Arc::new(Memory::default())
}

/// scores every house as infinitely expensive
fn overflowing() -> Predictor {
    Predictor::from(
        Artifact::new(
            Regressor::Linear {
                coefficients: vec![f64::MAX],
                intercept: 0.0,
            },
            Scaler::Identity,
            vec!["square_feet".to_string()],
            Metadata::new("Linear Regression".to_string(), R2, 1.0, 1.0, 10),
        )
        .unwrap(),
    )
}

/// history backend whose writes always fail
struct ReadOnly;

#[async_trait::async_trait]
impl History for ReadOnly {
    async fn append(&self, _: &FeatureVector, _: Price) -> Result<RecordId, StoreError> {
        Err(StoreError::NegativeLimit(-1))
    }
    async fn list(&self, _: i64) -> Result<Vec<Record>, StoreError> {
        Ok(Vec::new())
    }
    async fn count(&self) -> Result<i64, StoreError> {
        Ok(0)
    }
}

#[actix_web::test]
async fn predict_returns_price_and_history_id() {
    let store = store();
    let app = app!(store);
    let req = test::TestRequest::post().uri("/predict/").set_json(house()).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["history_id"], json!(1));
    assert_eq!(body["data"]["model_name"], json!("Random Forest"));
    assert_eq!(body["data"]["confidence_score"], json!(R2));
    assert_eq!(body["data"]["features_used"], house());
    assert!(body["data"]["predicted_price"].as_f64().unwrap().is_finite());
    assert_eq!(store.count().await.unwrap(), 1);
}

#[actix_web::test]
async fn out_of_range_is_rejected_without_writing() {
    let store = store();
    let app = app!(store);
    for bedrooms in [0, 11] {
        let mut body = house();
        body["bedrooms"] = json!(bedrooms);
        let req = test::TestRequest::post().uri("/predict/").set_json(body).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], json!("Invalid input data"));
        assert!(body["details"]["bedrooms"].is_array());
    }
    assert_eq!(store.count().await.unwrap(), 0);
}

#[actix_web::test]
async fn scoring_failure_is_500_and_not_recorded() {
    let store = store();
    let app = app!(overflowing(), store);
    let req = test::TestRequest::post().uri("/predict/").set_json(house()).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], json!("Prediction failed"));
    assert!(body["details"].as_str().unwrap().starts_with("Prediction error: "));
    assert_eq!(store.count().await.unwrap(), 0);
}

#[actix_web::test]
async fn history_write_failure_fails_the_prediction() {
    let store: Arc<dyn History> = Arc::new(ReadOnly);
    let app = app!(store);
    let req = test::TestRequest::post().uri("/predict/").set_json(house()).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], json!("Prediction failed"));
    assert!(body.get("data").is_none());
    assert!(body.get("history_id").is_none());
}

#[actix_web::test]
async fn missing_field_and_bad_json_are_rejected() {
    let store = store();
    let app = app!(store);
    let mut body = house();
    body.as_object_mut().unwrap().remove("crime_rate");
    let req = test::TestRequest::post().uri("/predict/").set_json(body).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["details"]["crime_rate"], json!(["This field is required."]));

    let req = test::TestRequest::post()
        .uri("/predict/")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"square_feet\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["details"]["non_field_errors"].is_array());
    assert_eq!(store.count().await.unwrap(), 0);
}

#[actix_web::test]
async fn key_order_does_not_change_price() {
    let store = store();
    let app = app!(store);
    let forward = serde_json::to_string(&house()).unwrap();
    let mut pairs = house().as_object().unwrap().clone().into_iter().collect::<Vec<_>>();
    pairs.reverse();
    let reversed = format!(
        "{{{}}}",
        pairs
            .iter()
            .map(|(k, v)| format!("{:?}: {}", k, v))
            .collect::<Vec<_>>()
            .join(", ")
    );
    let mut prices = Vec::new();
    for payload in [forward, reversed] {
        let req = test::TestRequest::post()
            .uri("/predict/")
            .insert_header(("content-type", "application/json"))
            .set_payload(payload)
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        prices.push(body["data"]["predicted_price"].as_f64().unwrap());
    }
    assert_eq!(prices[0], prices[1]);
}

#[actix_web::test]
async fn history_is_newest_first_and_limited() {
    let store = store();
    let app = app!(store);
    for square_feet in [1000, 1500, 2000, 2500, 3000] {
        let mut body = house();
        body["square_feet"] = json!(square_feet);
        let req = test::TestRequest::post().uri("/predict/").set_json(body).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let req = test::TestRequest::get().uri("/history/?limit=2").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["count"], json!(2));
    assert_eq!(body["data"][0]["square_feet"], json!(3000));
    assert_eq!(body["data"][1]["square_feet"], json!(2500));
    assert_eq!(body["data"][0]["id"], json!(5));
    assert!(body["data"][0]["created_at"].is_string());
    assert!(body["data"][0]["predicted_price"].is_number());

    let req = test::TestRequest::get().uri("/history/?limit=5").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let ids = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(ids, vec![5, 4, 3, 2, 1]);

    let req = test::TestRequest::get().uri("/history/?limit=100").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["count"], json!(5));
}

#[actix_web::test]
async fn history_defaults_to_ten() {
    let store = store();
    let app = app!(store);
    for _ in 0..12 {
        let req = test::TestRequest::post().uri("/predict").set_json(house()).to_request();
        test::call_service(&app, req).await;
    }
    let req = test::TestRequest::get().uri("/history/").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["count"], json!(10));
}

#[actix_web::test]
async fn history_limit_errors() {
    let store = store();
    let app = app!(store);
    let req = test::TestRequest::get().uri("/history/?limit=ten").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], json!("Invalid limit parameter"));

    let req = test::TestRequest::get().uri("/history/?limit=1&limit=2").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], json!("Invalid limit parameter"));
    assert!(body["details"].is_string());

    let req = test::TestRequest::get().uri("/history/?limit=-1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], json!("Failed to retrieve history"));
}

#[actix_web::test]
async fn model_info_is_idempotent() {
    let store = store();
    let app = app!(store);
    let mut bodies = Vec::new();
    for _ in 0..2 {
        let req = test::TestRequest::get().uri("/model-info/").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        bodies.push(body);
    }
    assert_eq!(bodies[0], bodies[1]);
    let data = &bodies[0]["data"];
    assert_eq!(bodies[0]["success"], json!(true));
    assert_eq!(data["model_name"], json!("Random Forest"));
    assert_eq!(data["test_r2_score"], json!(R2));
    assert_eq!(data["training_samples"], json!(16000));
    assert_eq!(data["features"].as_array().unwrap().len(), Field::N);
    assert_eq!(data["features"][0], json!("lot_size_sqft"));
}

#[actix_web::test]
async fn health_reports_loaded_model() {
    let store = store();
    let app = app!(store);
    for uri in ["/health/", "/health"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({
                "status": "healthy",
                "service": "House Price Prediction API",
                "model_loaded": true
            })
        );
    }
}
