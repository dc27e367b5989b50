//! Waiting list reporter binary.
//!
//! Reads its settings from the environment (and `.env`), writes `list.md`
//! plus `archive/<date>.md`, and exits non-zero on the first error.

use std::process::ExitCode;

use chrono::Local;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use waitlist::{DiscordMemberClient, WaitlistConfig, WaitlistResult, WrittenReport, run};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // .env may set RUST_LOG, so it is read before the subscriber exists
    let dotenv = dotenvy::dotenv();

    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = dotenv {
        if !e.not_found() {
            error!(error = %e, "Failed to load .env file");
            return ExitCode::FAILURE;
        }
    }

    match generate().await {
        Ok(written) => {
            info!(
                current = %written.current().display(),
                archive = %written.archive().display(),
                "Waiting list report complete"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Waiting list report failed");
            ExitCode::FAILURE
        }
    }
}

async fn generate() -> WaitlistResult<WrittenReport> {
    let config = WaitlistConfig::from_env()?;
    info!(
        guild_id = %config.guild_id(),
        limit = config.limit(),
        "Starting waiting list report"
    );

    let client = DiscordMemberClient::new(config.discord_client_config()?);
    run(&client, &config, Local::now().fixed_offset()).await
}
