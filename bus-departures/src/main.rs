use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use bus_departures::app::{AppError, report, run};
use bus_departures::config::AppConfig;

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so the board on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    ExitCode::from(report(start().await))
}

async fn start() -> Result<(), AppError> {
    let config = AppConfig::from_env()?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&config, &mut out).await
}
