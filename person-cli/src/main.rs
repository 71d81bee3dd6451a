//! people CLI: list and look up persons in the fixed in-memory repository. Config from env and
//! optional CLI args.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use person_cli::commands::{handle_demo, handle_first, handle_get, handle_list};
use person_cli::{AppConfig, Cli, Commands};
use person_repository::InMemoryPersonRepository;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.json)
        .context("Load config from env (PEOPLE_OUTPUT, PEOPLE_LOG_FILE)")?;
    person_core::init_tracing(config.log_file.as_deref()).context("Initialize tracing")?;

    let repo = InMemoryPersonRepository::new();
    let mut out = io::stdout();

    match cli.command {
        Commands::List {
            first_name,
            names_only,
        } => {
            handle_list(
                &repo,
                &mut out,
                config.output,
                first_name.as_deref(),
                names_only,
            )
            .await?
        }
        Commands::Get { id, strict } => {
            handle_get(&repo, &mut out, config.output, id, strict).await?
        }
        Commands::First => handle_first(&repo, &mut out, config.output).await?,
        Commands::Demo => handle_demo(&repo, &mut out, config.output).await?,
    }

    out.flush()?;
    Ok(())
}
