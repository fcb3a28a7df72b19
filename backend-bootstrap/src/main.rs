use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use backend_infrastructure::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "killstats")]
#[command(about = "Kill ledger and player statistics server", long_about = None)]
struct Args {
    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Test mode: accept every request without a token
    #[arg(short, long)]
    test: bool,

    /// Port to listen on (all interfaces)
    #[arg(short, long)]
    port: Option<u16>,

    /// Path to the SQLite database
    #[arg(short, long)]
    db: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Manage access tokens
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },
}

#[derive(Subcommand, Debug)]
enum TokenAction {
    /// Register a token; a random one is generated when omitted
    Add {
        #[arg(long)]
        owner: String,
        #[arg(long)]
        token: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => AppConfig::load_from(path).await?,
        None => AppConfig::load().await?,
    };
    config.apply_cli_overrides(args.test, args.port, args.db);
    config.validate()?;

    match args.command {
        Some(Command::Token {
            action: TokenAction::Add { owner, token },
        }) => {
            let token = backend_bootstrap::add_token(config, &owner, token).await?;
            println!("{}", token.token);
            Ok(())
        }
        None => backend_bootstrap::run_standalone(config).await,
    }
}
