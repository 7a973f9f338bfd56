//! researchd - researcher profile backend
//!
//! Entry point: loads `.env`, installs logging, builds the application
//! context and runs one maintenance command.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use researchd_lib::cli::{Cli, Command};
use researchd_lib::utils::logging::init_tracing;
use researchd_lib::{get_app_health, seed_database, AppContext};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // .env first so RUST_LOG and RESEARCHD_* from it are honoured
    let dotenv = dotenvy::dotenv();
    init_tracing();
    match dotenv {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => warn!(error = %e, "could not load .env file"),
    }

    // Exits with clap's usage text on bad arguments or --help
    let command = Cli::parse().selected();

    let ctx = AppContext::new().await.context("failed to initialise application context")?;

    let output = if command == Command::Seed {
        let response = seed_database(&ctx).await.context("seeding failed")?;
        serde_json::to_string_pretty(&response)?
    } else {
        let status = get_app_health(&ctx).await;
        let rendered = serde_json::to_string_pretty(&status)?;
        if !status.is_healthy {
            warn!(score = status.score, "application is unhealthy");
            print_output(&rendered);
            return Ok(ExitCode::FAILURE);
        }
        rendered
    };

    print_output(&output);
    Ok(ExitCode::SUCCESS)
}

#[allow(clippy::print_stdout)]
fn print_output(output: &str) {
    println!("{output}");
}
