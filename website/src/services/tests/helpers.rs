//! Test helpers for website service tests

use shared::{LoggerConfig, SiteLogger};
use std::sync::Arc;
use std::time::Duration;

use crate::core::contact::{ContactForm, ContactFormData};
use crate::services::SimulatedDelivery;

pub const TEST_LATENCY: Duration = Duration::from_millis(1000);

/// Logger that records without mirroring to the console
pub fn create_test_logger() -> SiteLogger {
    SiteLogger::new(LoggerConfig::production())
}

/// Form backed by the simulated delivery, pre-filled with `data`
pub fn mount_simulated_form(logger: &SiteLogger, data: ContactFormData) -> ContactForm {
    let backend = Arc::new(SimulatedDelivery::new(TEST_LATENCY));
    ContactForm::mount_with(logger.clone(), backend, data)
}

/// Log messages in order
pub fn messages(logger: &SiteLogger) -> Vec<String> {
    logger.get_logs().into_iter().map(|entry| entry.message).collect()
}
