//! Simulated submission delivery
//!
//! There is no mail or CRM backend. A send waits for a fixed latency and
//! reports success, or the configured failure when one is set.

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use crate::config::DEFAULT_SUBMIT_LATENCY;
use crate::core::contact::ContactSubmission;
use crate::error::{WebsiteError, WebsiteResult};
use crate::traits::SubmissionBackend;

#[derive(Debug, Clone)]
pub struct SimulatedDelivery {
    latency: Duration,
    failure: Option<String>,
}

impl SimulatedDelivery {
    pub fn new(latency: Duration) -> Self {
        Self { latency, failure: None }
    }

    /// Every send fails with `reason` once the latency has passed
    pub fn failing(latency: Duration, reason: impl Into<String>) -> Self {
        Self {
            latency,
            failure: Some(reason.into()),
        }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl Default for SimulatedDelivery {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_LATENCY)
    }
}

#[async_trait]
impl SubmissionBackend for SimulatedDelivery {
    async fn deliver(&self, submission: &ContactSubmission) -> WebsiteResult<()> {
        debug!("Simulating delivery of submission {} ({:?})", submission.id, self.latency);
        tokio::time::sleep(self.latency).await;

        match &self.failure {
            Some(reason) => Err(WebsiteError::delivery(reason.clone())),
            None => Ok(()),
        }
    }
}
