//! SongLedger server
//!
//! Opens the backup database once, applies migrations, and serves the API
//! until shutdown.

use clap::Parser;
use songledger_api::{router, AppState};
use songledger_core::logging::{self, Profile};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "songledger-server")]
#[command(about = "SongLedger - playlist backup and diff service", long_about = None)]
struct Cli {
    /// Path to the SQLite database file
    #[arg(long, env = "SONGLEDGER_DB", default_value = "songledger.db")]
    db: PathBuf,

    /// Address to listen on
    #[arg(long, env = "SONGLEDGER_LISTEN", default_value = "127.0.0.1:6522")]
    listen: String,

    /// Emit JSON logs instead of human-readable output
    #[arg(long, env = "SONGLEDGER_JSON_LOGS")]
    json_logs: bool,
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut conn = songledger_store::db::open(&cli.db)?;
    songledger_store::db::configure(&conn)?;
    songledger_store::migrations::apply_migrations(&mut conn)?;

    let app = router(AppState::new(conn));
    let listener = tokio::net::TcpListener::bind(&cli.listen).await?;
    tracing::info!(listen = %cli.listen, db = %cli.db.display(), "SongLedger server started");

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    logging::init(if cli.json_logs {
        Profile::Production
    } else {
        Profile::Development
    });

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
