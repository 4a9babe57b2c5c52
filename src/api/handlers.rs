use super::*;
use crate::features::FeatureVector;
use crate::features::FieldErrors;
use crate::history::History;
use crate::service::Predictor;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::error::InternalError;
use actix_web::error::QueryPayloadError;
use actix_web::web;

/// Validate, score, persist. Validation failures never reach the model and
/// scoring failures never reach the history table. A history failure after
/// a successful score is still reported as a failed prediction.
pub async fn predict(
    model: web::Data<Predictor>,
    history: web::Data<dyn History>,
    body: web::Bytes,
) -> impl Responder {
    let features = match serde_json::from_slice::<serde_json::Value>(&body)
        .map_err(FieldErrors::from)
        .and_then(|ref value| FeatureVector::try_from(value))
    {
        Ok(features) => features,
        Err(errors) => {
            log::debug!("rejected prediction request: {}", errors);
            return HttpResponse::BadRequest().json(Failure::new(INVALID_INPUT, errors));
        }
    };
    let prediction = match model.predict(&features) {
        Ok(prediction) => prediction,
        Err(e) => {
            log::error!("{}", e);
            return HttpResponse::InternalServerError()
                .json(Failure::new(PREDICTION_FAILED, e.to_string()));
        }
    };
    match history
        .append(&features, prediction.predicted_price())
        .await
        .inspect_err(|e| log::error!("history append failed: {}", e))
    {
        Err(e) => HttpResponse::InternalServerError()
            .json(Failure::new(PREDICTION_FAILED, e.to_string())),
        Ok(id) => HttpResponse::Ok().json(Predicted::new(prediction, id)),
    }
}

pub async fn model_info(model: web::Data<Predictor>) -> impl Responder {
    HttpResponse::Ok().json(Described::from(model.info()))
}

pub async fn history(
    history: web::Data<dyn History>,
    query: web::Query<HistoryQuery>,
) -> impl Responder {
    let limit = match query.limit() {
        Ok(limit) => limit,
        Err(e) => return HttpResponse::BadRequest().json(Failure::new(INVALID_LIMIT, e)),
    };
    match history
        .list(limit)
        .await
        .inspect_err(|e| log::error!("history list failed: {}", e))
    {
        Err(e) => {
            HttpResponse::InternalServerError().json(Failure::new(HISTORY_FAILED, e.to_string()))
        }
        Ok(records) => HttpResponse::Ok().json(Listed::from(records)),
    }
}

/// Query strings the extractor cannot decode (repeated keys, bad escapes)
/// get the same envelope as an unparsable limit.
pub fn invalid_query(e: QueryPayloadError, _: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(Failure::new(INVALID_LIMIT, e.to_string()));
    InternalError::from_response(e, response).into()
}

pub async fn health(model: web::Data<Predictor>) -> impl Responder {
    HttpResponse::Ok().json(Health::new(model.is_loaded()))
}
