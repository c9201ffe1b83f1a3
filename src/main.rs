use std::process::ExitCode;

use trivia_api::config::Config;
use trivia_api::server;
use trivia_api::telemetry::init_tracing;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Load configuration (reads .env first)
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(%error, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    match server::run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "server exited with an error");
            ExitCode::FAILURE
        }
    }
}
