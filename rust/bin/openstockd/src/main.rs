//! `openstockd` — the OpenStock inventory server binary.
//!
//! Usage:
//!   openstockd [-c <context-name-or-path>] [--listen <addr>]
//!
//! The context name resolves to `/etc/openstock/<name>.toml`.
//! If a path with `/` or `.` is given, it's used directly. Without `-c`
//! the server runs with defaults (data under `./data`).

mod config;
mod routes;

use std::sync::Arc;

use clap::Parser;
use openstock_core::Module;
use tracing::info;

use config::ServerConfig;

/// OpenStock server.
#[derive(Parser, Debug)]
#[command(name = "openstockd", about = "OpenStock inventory server")]
struct Cli {
    /// Context name or path to config file.
    #[arg(short = 'c', long = "config")]
    config: Option<String>,

    /// Listen address.
    #[arg(long = "listen", default_value = "0.0.0.0:8080")]
    listen: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    // Load server configuration.
    let server_config = match &cli.config {
        Some(name) => {
            let config_path = ServerConfig::resolve_path(name);
            info!("Loading configuration from {}", config_path.display());
            ServerConfig::load(&config_path)?
        }
        None => ServerConfig::default(),
    };
    config::verify_config(&server_config)?;

    // Initialize storage.
    let data_dir = std::path::PathBuf::from(&server_config.storage.data_dir);
    std::fs::create_dir_all(&data_dir)?;

    let core_config = openstock_core::ServiceConfig {
        data_dir: Some(data_dir),
        listen: cli.listen.clone(),
        ..Default::default()
    };

    let sql: Arc<dyn openstock_sql::SQLStore> = Arc::new(
        openstock_sql::SqliteStore::open(&core_config.resolve_sqlite_path())
            .map_err(|e| anyhow::anyhow!("failed to open SQL store: {}", e))?,
    );

    // Initialize modules.
    let inventory_module = inventory::InventoryModule::new(
        inventory::service::InventoryService::new(Arc::clone(&sql))
            .map_err(|e| anyhow::anyhow!("failed to initialize inventory: {}", e))?,
    );
    info!("Inventory module initialized");

    let module_routes = vec![(inventory_module.name(), inventory_module.routes())];

    // Build router.
    let app = routes::build_router(module_routes);

    // Start server.
    let listener = tokio::net::TcpListener::bind(&cli.listen).await?;
    info!("OpenStock server listening on {}", cli.listen);
    axum::serve(listener, app).await?;

    Ok(())
}
