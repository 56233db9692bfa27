use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use taskpad_db::Db;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "taskpad-server")]
struct Cli {
    /// Address to bind
    #[arg(long, env = "TASKPAD_BIND", default_value = "0.0.0.0")]
    bind: String,

    /// Port to listen on
    #[arg(long, env = "TASKPAD_PORT", default_value_t = 8080)]
    port: u16,

    /// Path to the SQLite database file (defaults to the XDG data dir)
    #[arg(long, env = "TASKPAD_DB")]
    db: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskpad_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let db = match &cli.db {
        Some(path) => Db::open(path)?,
        None => Db::open_default()?,
    };

    let addr = SocketAddr::new(cli.bind.parse()?, cli.port);
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("taskpad-server listening on http://{addr}");

    taskpad_server::serve(listener, db).await
}
