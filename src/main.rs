// src/main.rs

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gusteau::server::{self, ServerConfig};

#[derive(Parser)]
#[command(name = "gusteau")]
#[command(author, version, about = "Cookbook service with recursive recipe summaries", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Address to bind to (overrides the config file)
        #[arg(short, long)]
        bind: Option<String>,
        /// Path to a TOML configuration file
        #[arg(short, long)]
        config: Option<String>,
    },
    /// Normalize a handwritten recipe name and print it
    Parse {
        /// The raw name to normalize
        input: String,
    },
}

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { bind, config } => {
            let mut server_config = match config {
                Some(path) => server::load_config(Path::new(&path))?.to_server_config()?,
                None => ServerConfig::default(),
            };
            if let Some(bind) = bind {
                server_config.bind_addr = bind
                    .parse()
                    .with_context(|| format!("Invalid bind address: {bind}"))?;
            }

            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::run_server(server_config))?;
        }
        Commands::Parse { input } => match gusteau::name::normalize(&input) {
            Some(name) => println!("{name}"),
            None => anyhow::bail!("Invalid recipe name: {input:?}"),
        },
    }

    Ok(())
}
