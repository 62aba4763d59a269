use std::process::ExitCode;

use common::utils::logging::{init_logging, LogFormat};
use dotenvy::dotenv;
use tracing::{error, info};

fn init() {
    // .env first so RUST_LOG / LOG_FORMAT / PORT from it take effect
    dotenv().ok();
    init_logging(LogFormat::from_env());
    info!(service = "api", event = "logger_init", "tracing subscriber initialized");
}

fn main() -> ExitCode {
    init();

    let cfg = match configs::load_api_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(service = "api", event = "config_invalid", error = %e, "cannot load configuration");
            return ExitCode::FAILURE;
        }
    };

    let threads = cfg.worker_threads;
    common::runtime::run_service("api", threads, async move {
        server::run(cfg).await?;
        Ok(())
    })
}
