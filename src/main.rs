//! Tendrel entrypoint: catalog relevancy scoring from the command line or
//! over HTTP.

use std::fs;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use tendrel::catalog::{Catalog, EmbeddingMatrix};
use tendrel::category::{CategoryDetector, RuleSet};
use tendrel::config::Config;
use tendrel::encoder::{QueryEncoder, RemoteEncoder, StubEncoder};
use tendrel::engine::{Engine, ScorerRegistry};
use tendrel::gateway::{HandlerState, create_router_with_state};
use tendrel::report;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[command(name = "tendrel", about = "Procurement requirement vs. catalog relevancy scoring")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score one free-text requirement against the catalog.
    Query {
        /// Requirement text (joined with spaces when given as several words).
        text: Vec<String>,

        /// Matches to keep per sub-query.
        #[arg(long)]
        top: Option<usize>,

        /// Emit the raw JSON response instead of the console report.
        #[arg(long)]
        json: bool,

        /// Show all retained matches, not just the best one.
        #[arg(long)]
        verbose: bool,
    },
    /// Score every non-empty line of a file as an independent requirement.
    Batch {
        /// Input file, one requirement per line.
        file: PathBuf,

        /// Matches to keep per sub-query.
        #[arg(long)]
        top: Option<usize>,

        /// Emit a JSON array of responses instead of console reports.
        #[arg(long)]
        json: bool,

        /// Show all retained matches, not just the best one.
        #[arg(long)]
        verbose: bool,
    },
    /// Serve the scoring engine over HTTP.
    Serve,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    config.validate()?;

    match cli.command {
        Command::Query {
            text,
            top,
            json,
            verbose,
        } => {
            let query = text.join(" ");
            if query.trim().is_empty() {
                anyhow::bail!("query text must not be empty");
            }
            let top_k = top.unwrap_or(config.top_k);

            // reqwest::blocking must stay off the async runtime threads.
            let response = tokio::task::spawn_blocking(move || -> anyhow::Result<_> {
                let engine = build_engine(&config)?;
                Ok(engine.predict(&query, top_k))
            })
            .await??;

            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                println!("{}", report::render(&response, verbose));
            }
        }
        Command::Batch {
            file,
            top,
            json,
            verbose,
        } => {
            let contents = fs::read_to_string(&file)?;
            let queries: Vec<String> = contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect();
            if queries.is_empty() {
                anyhow::bail!("no queries found in {}", file.display());
            }
            let top_k = top.unwrap_or(config.top_k);

            let responses = tokio::task::spawn_blocking(move || -> anyhow::Result<_> {
                let engine = build_engine(&config)?;
                Ok(engine.predict_batch(&queries, top_k))
            })
            .await??;

            if json {
                println!("{}", serde_json::to_string_pretty(&responses)?);
            } else {
                for response in &responses {
                    println!("{}", report::render(response, verbose));
                }
            }
        }
        Command::Serve => serve(config).await?,
    }

    Ok(())
}

async fn serve(config: Config) -> anyhow::Result<()> {
    let addr: SocketAddr = config.socket_addr().parse()?;
    let default_top_k = config.top_k;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        "Tendrel starting"
    );

    let engine = tokio::task::spawn_blocking(move || build_engine(&config)).await??;
    let state = HandlerState::new(Arc::new(engine), default_top_k);
    let app = create_router_with_state(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Tendrel shutdown complete");
    Ok(())
}

/// Loads the catalog, embedding matrix, rules, and encoder described by
/// `config` and wires them into an [`Engine`].
///
/// Performs blocking I/O and may construct a blocking HTTP client, so it
/// must run outside the async runtime.
fn build_engine(config: &Config) -> anyhow::Result<Engine> {
    let catalog = Catalog::load_json(&config.catalog_path)?;
    let matrix = EmbeddingMatrix::load_npy(&config.embeddings_path)?;

    let rules = match &config.rules_path {
        Some(path) => RuleSet::from_json_file(path)?,
        None => RuleSet::builtin(),
    };

    let encoder: Arc<dyn QueryEncoder> = match &config.encoder_url {
        Some(url) => Arc::new(RemoteEncoder::new(url.clone())),
        None => {
            tracing::warn!(
                "No TENDREL_ENCODER_URL configured, running encoder in stub mode"
            );
            Arc::new(StubEncoder::new(matrix.dim()))
        }
    };

    let engine = Engine::new(
        catalog,
        matrix,
        encoder,
        CategoryDetector::new(rules),
        ScorerRegistry::default(),
    )?;

    Ok(engine)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
