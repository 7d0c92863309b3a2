use std::process::ExitCode;

use configs::AppConfig;
use tracing::{error, info};

fn main() -> ExitCode {
    // .env first so RUST_LOG / LOG_FORMAT / DATABASE_URL are visible
    dotenvy::dotenv().ok();
    common::utils::logging::init_logging_from_env();

    let cfg = match AppConfig::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(error = %format!("{e:#}"), "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    std::panic::set_hook(Box::new(|info| {
        error!(message = %info, "unhandled panic");
    }));

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(workers) = cfg.server.worker_threads {
        builder.worker_threads(workers);
    }
    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        version = env!("CARGO_PKG_VERSION"),
        bind = %cfg.server.bind_addr(),
        workers = ?cfg.server.worker_threads,
        auto_migrate = cfg.database.auto_migrate,
        "example api starting"
    );

    match rt.block_on(server::run(cfg)) {
        Ok(()) => {
            info!("example api stopped");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "example api failed");
            ExitCode::FAILURE
        }
    }
}
