use actix_web::{web, HttpResponse, Responder};
use serde_json::{json, Value};
use tracing::info;

use crate::api_json::GetSchedulesRequest;
use crate::catalog::Catalog;
use crate::models::normalize_code;

/// GET /all_courses
/// Lista los códigos de asignatura distintos presentes en el catálogo.
pub async fn all_courses_handler(catalog: web::Data<Catalog>) -> impl Responder {
    HttpResponse::Ok().json(catalog.subject_codes())
}

/// POST /get_schedules
/// Devuelve todas las secciones de un código. Un código desconocido no es error: `sections` viene vacío.
pub async fn get_schedules_handler(catalog: web::Data<Catalog>, body: web::Json<Value>) -> impl Responder {
    let body_value = body.into_inner();
    info!(body = %body_value, "get_schedules");

    let req = match GetSchedulesRequest::from_value(&body_value) {
        Ok(r) => r,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": e.to_string(), "sections": []})),
    };

    let sections = catalog.filter_by_subject_code(&req.code);
    info!(code = %normalize_code(&req.code), found = sections.len(), "schedules resolved");
    HttpResponse::Ok().json(json!({"sections": sections}))
}
