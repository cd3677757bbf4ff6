//! signup-api - static JSON greeting routes and a user signup endpoint backed by SQLite

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use signup_api::api::{self, AppState};
use signup_api::commands;
use signup_api::config::{Config, LOCAL_CONFIG_FILE};
use signup_api::store::SqliteUserStore;

#[derive(Parser)]
#[command(name = "signup-api")]
#[command(about = "Static greeting routes and a user signup endpoint backed by SQLite")]
#[command(version)]
struct Cli {
    /// Path to config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Address to bind to
        #[arg(long)]
        host: Option<String>,

        /// SQLite database file
        #[arg(long)]
        database: Option<PathBuf>,
    },

    /// Create the database schema and a default config file
    Init {
        /// SQLite database file
        #[arg(long)]
        database: Option<PathBuf>,
    },

    /// Show store statistics
    Stats,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load environment before the filter reads RUST_LOG
    let _ = dotenvy::dotenv();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            format!("signup_api={},tower_http=debug", log_level).into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Serve { port, host, database } => {
            let mut config = config;
            if let Some(port) = port {
                config.http_port = port;
            }
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(database) = database {
                config.database_path = database;
            }

            serve(config).await?;
        }

        Commands::Init { database } => {
            let mut config = config;
            if let Some(database) = database {
                config.database_path = database;
            }

            let config_path = cli.config.unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE));
            let report = commands::init(&config, &config_path)?;

            println!("✓ Database ready at {}", report.database_path.display());
            if report.config_written {
                println!("✓ Config written to {}", report.config_path.display());
            } else {
                println!("  Config already present at {}", report.config_path.display());
            }
        }

        Commands::Stats => {
            let stats = commands::stats(&config).await?;

            println!("signup-api Statistics");
            println!("=====================");
            println!("Database: {}", stats.database_path.display());
            println!("Users:    {}", stats.user_count);
        }
    }

    Ok(())
}

async fn serve(config: Config) -> anyhow::Result<()> {
    let store = SqliteUserStore::open(&config.database_path)?;
    tracing::info!("Opened user database at {:?}", config.database_path);

    let state = AppState::new(Arc::new(store));
    let router = api::create_router(state, config.request_timeout());

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server is running on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Shutting down...");
        })
        .await?;

    Ok(())
}
