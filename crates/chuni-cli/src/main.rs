mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // warn unless RUST_LOG says otherwise
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("chuni=warn,chuni_net=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match &args.command {
        // Offline, no session needed
        Command::Rating { score, constant } => commands::rating::run(*score, *constant, args.json),
        command => {
            let mut client = commands::connect(&args)?;
            commands::run(&mut client, command, args.json).await
        }
    }
}
