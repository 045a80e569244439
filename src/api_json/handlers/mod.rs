pub mod courses;
pub mod selection;

pub use courses::*;
pub use selection::*;

use actix_web::HttpResponse;
use serde_json::json;

use crate::error::SchedError;

/// Traduce un error del núcleo a la respuesta HTTP correspondiente.
pub fn error_response(err: &SchedError) -> HttpResponse {
    let body = json!({"error": err.to_string()});
    match err {
        SchedError::Validation(_) | SchedError::MalformedKey(_) => HttpResponse::BadRequest().json(body),
        SchedError::NotFound { .. } => HttpResponse::NotFound().json(body),
        SchedError::Load { .. } => HttpResponse::InternalServerError().json(body),
    }
}
