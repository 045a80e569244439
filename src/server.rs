use std::sync::Arc;

use actix_cors::Cors;
use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::middleware::{Condition, Logger};
use actix_web::{http::header, web, App, HttpRequest, HttpResponse, HttpServer};
use serde_json::json;
use tracing::{info, warn};

use crate::api_json::handlers::{
    all_courses_handler, get_schedules_handler, remove_section_handler, select_section_handler,
    selected_sections_handler,
};
use crate::catalog::Catalog;
use crate::config::Config;
use crate::selection::SelectionRegistry;

/// Estado compartido por todos los workers: el catálogo (sólo lectura) y el registro de selección.
#[derive(Clone)]
pub struct AppState {
    pub catalog: web::Data<Catalog>,
    pub registry: web::Data<SelectionRegistry>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        let catalog = Arc::new(catalog);
        let registry = SelectionRegistry::new(Arc::clone(&catalog));
        AppState {
            catalog: web::Data::from(catalog),
            registry: web::Data::new(registry),
        }
    }
}

// Bodies that are missing or not JSON get a JSON 400 instead of actix's plain-text one.
fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!(path = %req.path(), "rejected request body: {}", err);
    let body = if req.path() == "/get_schedules" {
        json!({"error": "No code provided", "sections": []})
    } else {
        json!({"error": "No data provided"})
    };
    InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}

/// Registra estado y rutas. Se usa tanto en `run_server` como en los tests.
pub fn configure(cfg: &mut web::ServiceConfig, state: &AppState) {
    cfg.app_data(state.catalog.clone())
        .app_data(state.registry.clone())
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .route("/all_courses", web::get().to(all_courses_handler))
        .route("/get_schedules", web::post().to(get_schedules_handler))
        .route("/select_section", web::post().to(select_section_handler))
        .route("/remove_section", web::post().to(remove_section_handler))
        .route("/selected_sections", web::get().to(selected_sections_handler));
}

pub async fn run_server(config: Config, catalog: Catalog) -> std::io::Result<()> {
    let state = AppState::new(catalog);
    let allowed_origin = config.allowed_origin.clone();
    if let Some(origin) = &allowed_origin {
        info!(origin = %origin, "CORS enabled");
    }
    info!(bind = %config.bind, workers = config.workers, "starting HTTP server");

    HttpServer::new(move || {
        let cors = match &allowed_origin {
            Some(origin) => Cors::default()
                .allowed_origin(origin)
                .allowed_methods(vec!["GET", "POST"])
                .allowed_header(header::CONTENT_TYPE),
            None => Cors::default(),
        };
        App::new()
            .wrap(Condition::new(allowed_origin.is_some(), cors))
            .wrap(Logger::default())
            .configure(|cfg| configure(cfg, &state))
    })
    .workers(config.workers)
    .bind(config.bind.as_str())?
    .run()
    .await
}
