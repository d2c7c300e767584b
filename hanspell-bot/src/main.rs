//! Binary for the spelling-check bot.

use anyhow::Result;
use clap::Parser;
use hanspell_bot::{load_config, run_bot, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config, token } => {
            let config = load_config(config, token)?;
            run_bot(config).await
        }
    }
}
