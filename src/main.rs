use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use course_catalog::config::AppConfig;
use course_catalog::database::DatabaseManager;
use course_catalog::AppState;

#[derive(Parser)]
#[command(name = "course-catalog", version, about = "Courses and instructors REST API")]
struct Args {
    /// Port to listen on (overrides PORT)
    #[arg(long)]
    port: Option<u16>,

    /// PostgreSQL connection string (overrides DATABASE_URL)
    #[arg(long)]
    database_url: Option<String>,

    /// Keep all data in process memory instead of PostgreSQL
    #[arg(long)]
    in_memory: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, PORT, etc.
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    let config = course_catalog::config::config();
    init_tracing(config);

    info!("Starting Course Catalog API in {:?} mode", config.environment);

    let state = if args.in_memory {
        info!("Using in-memory store");
        AppState::in_memory()
    } else {
        let database_url = DatabaseManager::resolve_url(args.database_url, &config.database)
            .context("DATABASE_URL must be set unless --in-memory is given")?;
        let database = DatabaseManager::connect(&database_url, &config.database)
            .await
            .context("failed to connect to database")?;
        if config.database.auto_migrate {
            database.migrate().await.context("failed to create schema")?;
        }
        AppState::postgres(database)
    };

    let app = course_catalog::app(state.clone(), config);

    let port = args.port.unwrap_or(config.api.port);
    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    info!("Course Catalog API listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    if let Some(database) = &state.database {
        database.close().await;
    }
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
