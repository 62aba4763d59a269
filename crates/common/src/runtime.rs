//! Process lifecycle shared by the service binaries.
//!
//! Builds the Tokio runtime, installs a panic hook that logs through
//! `tracing`, runs the service future and stops on Ctrl+C.

use std::future::Future;
use std::process::ExitCode;

use tracing::{error, info};
use uuid::Uuid;

pub fn run_service<F>(service: &'static str, worker_threads: Option<usize>, fut: F) -> ExitCode
where
    F: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(
            service,
            event = "panic",
            %service_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads {
        builder.worker_threads(w);
    }
    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service, event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        service,
        event = "start",
        %service_id,
        pid,
        version,
        threads = worker_threads.unwrap_or_default(),
        "service starting"
    );

    rt.block_on(async move {
        let task = tokio::spawn(fut);
        tokio::select! {
            res = task => match res {
                Ok(Ok(())) => {
                    info!(service, event = "stop", %service_id, pid, "service stopped normally");
                    ExitCode::SUCCESS
                }
                Ok(Err(e)) => {
                    error!(service, event = "run_failed", error = %e, "service returned error");
                    ExitCode::FAILURE
                }
                Err(e) => {
                    error!(service, event = "task_join_error", error = %e, "service task join error");
                    ExitCode::FAILURE
                }
            },
            _ = tokio::signal::ctrl_c() => {
                info!(service, event = "shutdown_signal", %service_id, pid, "received Ctrl+C, shutting down");
                ExitCode::SUCCESS
            }
        }
    })
}
