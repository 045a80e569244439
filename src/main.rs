// --- SchedSmart - servidor local de selección de secciones ---

use schedsmart::{run_server, Catalog, Config};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // `.env` first so RUST_LOG from it is honoured
    dotenv::dotenv().ok();
    init_tracing();

    let config = Config::from_env();
    info!("=== SchedSmart (API) ===");

    let catalog = match Catalog::load_from(&config.catalog, &config.data_dir) {
        Ok(c) => c,
        Err(e) => {
            error!("{}", e);
            return Err(std::io::Error::other(e.to_string()));
        }
    };
    info!(courses = catalog.subject_codes().len(), sections = catalog.len(), "catalog ready");
    info!("Iniciando servidor en http://{}", config.bind);

    run_server(config, catalog).await
}
