use actix_web::{web, HttpResponse, Responder};
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::api_json::handlers::error_response;
use crate::api_json::{RemoveSectionRequest, SelectSectionRequest};
use crate::selection::SelectionRegistry;

/// POST /select_section
/// Agrega la sección al registro. No se revisan choques de horario aquí; eso lo hace la UI.
pub async fn select_section_handler(registry: web::Data<SelectionRegistry>, body: web::Json<Value>) -> impl Responder {
    let body_value = body.into_inner();
    info!(body = %body_value, "select_section");

    let req = match SelectSectionRequest::from_value(&body_value) {
        Ok(r) => r,
        Err(e) => return error_response(&e),
    };

    match registry.add(&req.new_code, &req.new_section) {
        Ok(section) => HttpResponse::Ok().json(json!({"success": true, "section": section})),
        Err(e) => {
            warn!(code = %req.new_code, section = %req.new_section, "selection failed: {}", e);
            error_response(&e)
        }
    }
}

/// POST /remove_section
/// Quitar algo que no estaba seleccionado también responde `success`.
pub async fn remove_section_handler(registry: web::Data<SelectionRegistry>, body: web::Json<Value>) -> impl Responder {
    let body_value = body.into_inner();
    let req = match RemoveSectionRequest::from_value(&body_value) {
        Ok(r) => r,
        Err(e) => return error_response(&e),
    };
    info!(class_id = %req.class_id, "remove_section");

    match registry.remove(&req.class_id) {
        Ok(count) => HttpResponse::Ok().json(json!({
            "success": true,
            "removed": req.class_id,
            "removed_count": count
        })),
        Err(e) => error_response(&e),
    }
}

/// GET /selected_sections
pub async fn selected_sections_handler(registry: web::Data<SelectionRegistry>) -> impl Responder {
    let sections = registry.list();
    HttpResponse::Ok().json(json!({"count": sections.len(), "sections": sections}))
}
