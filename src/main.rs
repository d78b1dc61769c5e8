// src/main.rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use larder::server::{LarderConfig, ServerConfig};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "larder")]
#[command(author, version, about = "Recipe backend with image uploads and token-protected writes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the larder database
    Init {
        /// Database path (default: /var/lib/larder/larder.db)
        #[arg(short, long, default_value = "/var/lib/larder/larder.db")]
        db_path: String,
    },
    /// Run the HTTP server
    Serve {
        /// Path to a TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Bind address (overrides config file)
        #[arg(long)]
        bind: Option<SocketAddr>,
        /// Database path (overrides config file)
        #[arg(long)]
        db_path: Option<String>,
        /// Image directory (overrides config file)
        #[arg(long)]
        image_dir: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { db_path } => {
            info!("Initializing larder database at: {}", db_path);
            larder::db::init(&db_path)?;
            println!("Database initialized successfully at: {}", db_path);
            Ok(())
        }
        Commands::Serve {
            config,
            bind,
            db_path,
            image_dir,
        } => {
            let mut server_config = match config {
                Some(path) => LarderConfig::load(&path)?.to_server_config()?,
                None => ServerConfig::default(),
            };

            if let Some(bind) = bind {
                server_config.bind_addr = bind;
            }
            if let Some(db_path) = db_path {
                server_config.db_path = db_path;
            }
            if let Some(image_dir) = image_dir {
                server_config.image_dir = image_dir;
            }

            larder::server::run_server(server_config).await
        }
    }
}
