use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use kanban::config::{self, CliArgs};
use kanban::{create_app, db, run_migrations};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log filter from `RUST_LOG`, falling back to info (or debug) for this crate
fn log_filter(debug: bool) -> EnvFilter {
    let level = if debug { "debug" } else { "info" };
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("kanban={level},tower_http={level}")))
}

/// Installs the global subscriber
///
/// Human-readable logs always go to stdout. With a log directory, a daily
/// rolling JSON file is written as well; the returned guard must be held
/// until exit so buffered lines are flushed.
fn init_logging(debug: bool, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let filter = log_filter(debug);

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "kanban.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(fmt::layer().json().with_writer(writer)), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();

    guard
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads them
    dotenv::dotenv().ok();

    let args = CliArgs::parse();
    // The log directory comes from the config, so config loading logs to
    // stdout through a temporary subscriber
    let startup_logger = fmt().with_env_filter(log_filter(args.debug)).finish();
    let config = tracing::subscriber::with_default(startup_logger, || config::get_config(&args))?;

    let _log_guard = init_logging(args.debug, config.log_dir.as_deref());

    info!("Using database at {}", config.database_url);
    let pool = db::init_pool(&config.database_url)?;

    let mut conn = pool.get()?;
    run_migrations(&mut conn)?;
    drop(conn);

    let app = create_app(Arc::new(pool));

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
