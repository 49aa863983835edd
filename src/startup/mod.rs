//! Startup wiring: configuration, logging and controller construction.

pub mod config;
pub mod logging;

pub use config::AppConfig;
pub use logging::{default_log_path, LogTarget};

use std::sync::Arc;

use crate::refresh::RefreshController;
use crate::traits::Notifier;

/// Build the controller from configuration, with the given notification sink.
pub fn build_controller(config: &AppConfig, notifier: Arc<dyn Notifier>) -> Arc<RefreshController> {
    tracing::debug!(?config, "Building refresh controller");

    Arc::new(RefreshController::new(
        Arc::new(config.build_source()),
        Arc::new(config.build_location()),
        notifier,
        config.refresh_settings(),
    ))
}
