use clap::Parser;
use cld::cli::{run, Cli};
use cld::credentials::CLOUDINARY_URL_ENV;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables from a .env file if it exists.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let connection = std::env::var(CLOUDINARY_URL_ENV).ok();

    let result = run(
        &cli,
        connection.as_deref(),
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    )
    .await;

    match result {
        Ok(report) => {
            tracing::info!(uploaded = report.uploaded, failed = report.failed, "Done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            let e = anyhow::Error::new(e);
            eprintln!("cld: {e:#}");
            ExitCode::FAILURE
        }
    }
}
