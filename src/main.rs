mod cli;

use crate::cli::app::App;
use anyhow::{Context, Result};
use clap::Parser;
use scriptline::config::EngineConfig;
use scriptline::executor::Registry;
use scriptline::facade::ScriptEngine;
use scriptline::session::{HostSession, roster::AdminRoster};
use scriptline::storage::{RecordStore, StoreKind, Stores, snapshot};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "scriptline")]
#[command(about = "Run single-line command scripts against JSON record stores")]
struct Cli {
    /// Acting identity
    #[arg(long, default_value = "guest")]
    author: String,

    /// Identity to treat as admin (repeatable)
    #[arg(long = "admin")]
    admins: Vec<String>,

    /// JSON snapshot for the users store
    #[arg(long)]
    users: Option<PathBuf>,

    /// JSON snapshot for the threads store
    #[arg(long)]
    threads: Option<PathBuf>,

    /// Default inspect depth
    #[arg(long, default_value_t = 2)]
    depth: usize,

    /// Run one line and exit with its code
    #[arg(short, long)]
    command: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let stores = Stores::new(
        open_store(StoreKind::Users, cli.users.as_deref()).await?,
        open_store(StoreKind::Threads, cli.threads.as_deref()).await?,
    );

    let config = EngineConfig::new().inspect_depth(cli.depth);
    let engine = ScriptEngine::with_config(stores, Arc::clone(Registry::global()), config)
        .context("Invalid engine configuration")?;

    for admin in &cli.admins {
        AdminRoster::global()
            .grant(admin)
            .with_context(|| format!("Invalid admin identity '{}'", admin))?;
    }
    let session = HostSession::open_global(&cli.author).context("Failed to open session")?;

    let app = App::new(engine, session);
    match cli.command {
        Some(line) => {
            let code = app.execute(&line).await;
            std::process::exit(code);
        }
        None => app.run().await.context("REPL failed")?,
    }

    Ok(())
}

async fn open_store(kind: StoreKind, path: Option<&Path>) -> Result<Arc<dyn RecordStore>> {
    let store = match path {
        Some(path) => snapshot::load_store(kind.as_str(), path)
            .await
            .with_context(|| format!("Failed to load {} snapshot", kind.as_str()))?,
        None => scriptline::storage::MemoryStore::new(kind.as_str()),
    };
    Ok(Arc::new(store))
}
