use std::process::ExitCode;

use common::utils::logging::{init_logging, LogFormat};
use dotenvy::dotenv;
use tracing::{error, info};

fn init() {
    dotenv().ok();
    init_logging(LogFormat::from_env());
    info!(service = "frontend", event = "logger_init", "tracing subscriber initialized");
}

fn main() -> ExitCode {
    init();

    let cfg = match configs::load_frontend_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(service = "frontend", event = "config_invalid", error = %e, "cannot load configuration");
            return ExitCode::FAILURE;
        }
    };

    let threads = cfg.worker_threads;
    common::runtime::run_service("frontend", threads, frontend::run(cfg))
}
