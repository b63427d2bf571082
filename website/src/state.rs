//! Website state shared by request handlers

use shared::SiteLogger;
use std::sync::Arc;
use std::time::Instant;

use crate::config::SiteConfig;
use crate::core::contact::{ContactForm, ContactFormData};
use crate::core::routes::RouteTable;
use crate::services::SimulatedDelivery;
use crate::traits::SubmissionBackend;

pub struct SiteState {
    pub config: SiteConfig,
    pub logger: SiteLogger,
    pub routes: &'static RouteTable,
    pub backend: Arc<dyn SubmissionBackend>,
    pub start_time: Instant,
}

impl SiteState {
    /// State with the simulated delivery backend
    pub fn new(config: SiteConfig, logger: SiteLogger) -> Self {
        let backend = Arc::new(SimulatedDelivery::new(config.submit_latency));
        Self::with_backend(config, logger, backend)
    }

    pub fn with_backend(config: SiteConfig, logger: SiteLogger, backend: Arc<dyn SubmissionBackend>) -> Self {
        Self {
            config,
            logger,
            routes: RouteTable::standard(),
            backend,
            start_time: Instant::now(),
        }
    }

    /// Mount a contact form for one request
    pub fn mount_contact_form(&self, data: ContactFormData) -> ContactForm {
        ContactForm::mount_with(self.logger.clone(), self.backend.clone(), data)
    }

    pub fn is_development(&self) -> bool {
        self.config.is_development()
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
