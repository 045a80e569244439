// Biblioteca raíz del crate `schedsmart`.
// Catálogo de secciones, registro de selección y la API HTTP que los expone.
pub mod api_json;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod selection;
pub mod server;

pub use catalog::Catalog;
pub use config::Config;
pub use error::{Result, SchedError};
pub use models::{ClassId, Section};
pub use selection::SelectionRegistry;
/// Ejecuta el servidor HTTP (reexport para facilitar uso desde `main`)
pub use server::run_server;
