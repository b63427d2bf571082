//! Service trait definitions for dependency injection
//!
//! I/O behind the site is abstracted through these traits for testability

use async_trait::async_trait;

use crate::core::contact::ContactSubmission;
use crate::error::WebsiteResult;

/// Where accepted contact form submissions go
#[mockall::automock]
#[async_trait]
pub trait SubmissionBackend: Send + Sync {
    /// Deliver one submission. Resolves once delivery has succeeded or failed.
    async fn deliver(&self, submission: &ContactSubmission) -> WebsiteResult<()>;
}
