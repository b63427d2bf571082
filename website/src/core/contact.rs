//! Contact form
//!
//! Lead-capture form state, validation and the submission protocol. A form is
//! mounted per view; the in-flight send is a task owned by the form and is
//! aborted when the form is dropped.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::json;
use shared::SiteLogger;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};
use thiserror::Error;
use tokio::task::{AbortHandle, JoinHandle};
use uuid::Uuid;

use crate::error::{WebsiteError, WebsiteResult};
use crate::traits::SubmissionBackend;

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Minimal email shape: `x@y.z` with no whitespace or extra `@`
fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Email,
    Phone,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [FormField::Name, FormField::Email, FormField::Phone, FormField::Message];

    /// Input `name` attribute
    pub fn name(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Phone => "Phone",
            FormField::Message => "Message",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }
}

/// Field-level validation failure, shown inline next to the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{} is required", .0.label())]
    RequiredField(FormField),

    #[error("Invalid {} format", .0.name())]
    InvalidFormat(FormField),
}

impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Failures keyed by field
pub type ValidationErrors = BTreeMap<FormField, ValidationError>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
}

impl ContactFormData {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::Message => &mut self.message,
        };
        *slot = value.into();
    }
}

/// Apply the form rules. Phone is never validated.
pub fn validate(data: &ContactFormData) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if data.name.trim().is_empty() {
        errors.insert(FormField::Name, ValidationError::RequiredField(FormField::Name));
    }

    if data.email.trim().is_empty() {
        errors.insert(FormField::Email, ValidationError::RequiredField(FormField::Email));
    } else if !email_pattern().is_match(&data.email) {
        errors.insert(FormField::Email, ValidationError::InvalidFormat(FormField::Email));
    }

    if data.message.trim().is_empty() {
        errors.insert(FormField::Message, ValidationError::RequiredField(FormField::Message));
    }

    errors
}

/// An accepted submission handed to the backend
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactSubmission {
    pub id: Uuid,
    pub data: ContactFormData,
    pub submitted_at: DateTime<Utc>,
}

impl ContactSubmission {
    pub fn new(data: ContactFormData) -> Self {
        Self {
            id: Uuid::new_v4(),
            data,
            submitted_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactFormState {
    pub data: ContactFormData,
    pub errors: ValidationErrors,
    pub submitting: bool,
}

/// Result of pressing submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent
    Invalid(ValidationErrors),
    /// Validation passed and the send is under way
    Accepted { submission_id: Uuid },
    /// A previous send has not finished yet
    InFlight,
}

/// How the send ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Delivered,
    Failed(String),
}

/// Clears the submitting flag however the send task ends, abort included
struct SubmittingGuard(Arc<Mutex<ContactFormState>>);

impl Drop for SubmittingGuard {
    fn drop(&mut self) {
        lock(&self.0).submitting = false;
    }
}

/// Aborts the inner send when the owning task is aborted
struct AbortOnDrop(AbortHandle);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        self.0.abort();
    }
}

fn lock(state: &Mutex<ContactFormState>) -> MutexGuard<'_, ContactFormState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A mounted contact form
pub struct ContactForm {
    state: Arc<Mutex<ContactFormState>>,
    logger: SiteLogger,
    backend: Arc<dyn SubmissionBackend>,
    pending: Option<JoinHandle<DeliveryOutcome>>,
}

impl ContactForm {
    /// Mount an empty form
    pub fn mount(logger: SiteLogger, backend: Arc<dyn SubmissionBackend>) -> Self {
        Self {
            state: Arc::new(Mutex::new(ContactFormState::default())),
            logger,
            backend,
            pending: None,
        }
    }

    /// Mount a form pre-filled with `data`
    pub fn mount_with(logger: SiteLogger, backend: Arc<dyn SubmissionBackend>, data: ContactFormData) -> Self {
        let form = Self::mount(logger, backend);
        lock(&form.state).data = data;
        form
    }

    /// User input. Editing a field clears its error.
    pub fn set_field(&self, field: FormField, value: impl Into<String>) {
        let mut state = lock(&self.state);
        state.data.set(field, value);
        state.errors.remove(&field);
    }

    pub fn data(&self) -> ContactFormData {
        lock(&self.state).data.clone()
    }

    pub fn errors(&self) -> ValidationErrors {
        lock(&self.state).errors.clone()
    }

    pub fn is_submitting(&self) -> bool {
        lock(&self.state).submitting
    }

    pub fn snapshot(&self) -> ContactFormState {
        lock(&self.state).clone()
    }

    /// Validate the current data, replacing the recorded errors
    pub fn validate(&self) -> bool {
        let mut state = lock(&self.state);
        state.errors = validate(&state.data);
        state.errors.is_empty()
    }

    /// Validate and, if valid, start sending. Must be called inside a tokio runtime.
    pub fn submit(&mut self) -> SubmitOutcome {
        let data = {
            let mut state = lock(&self.state);
            if state.submitting {
                return SubmitOutcome::InFlight;
            }

            self.logger.debug("Form submission attempted", Some(json!({ "formData": state.data })));

            state.errors = validate(&state.data);
            if !state.errors.is_empty() {
                self.logger.warn("Form validation failed", Some(json!({ "errors": state.errors })));
                return SubmitOutcome::Invalid(state.errors.clone());
            }

            state.submitting = true;
            state.data.clone()
        };

        let submission = ContactSubmission::new(data);
        let submission_id = submission.id;
        self.logger.info(
            "Submitting contact form",
            Some(json!({ "formData": submission.data, "submissionId": submission_id })),
        );

        let state = self.state.clone();
        let logger = self.logger.clone();
        let backend = self.backend.clone();
        self.pending = Some(tokio::spawn(async move {
            let _submitting = SubmittingGuard(state.clone());

            // the send runs in its own task so a panicking backend surfaces as a JoinError
            let send = tokio::spawn(async move { backend.deliver(&submission).await });
            let _cancel = AbortOnDrop(send.abort_handle());
            let result = match send.await {
                Ok(result) => result,
                Err(e) => Err(WebsiteError::from(e)),
            };

            match result {
                Ok(()) => {
                    logger.info("Form submitted successfully", None);
                    let mut state = lock(&state);
                    state.data = ContactFormData::default();
                    state.errors.clear();
                    DeliveryOutcome::Delivered
                }
                Err(e) => {
                    logger.error(
                        "Form submission failed",
                        Some(json!({ "error": e.to_string(), "submissionId": submission_id })),
                    );
                    DeliveryOutcome::Failed(e.to_string())
                }
            }
        }));

        SubmitOutcome::Accepted { submission_id }
    }

    /// Wait for the in-flight send, if any
    pub async fn wait_for_submission(&mut self) -> WebsiteResult<Option<DeliveryOutcome>> {
        match self.pending.take() {
            Some(handle) => Ok(Some(handle.await?)),
            None => Ok(None),
        }
    }

    /// Discard the form, cancelling any in-flight send
    pub fn unmount(self) {}
}

impl Drop for ContactForm {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            if !handle.is_finished() {
                self.logger.debug("Contact form unmounted with a send in flight", None);
            }
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::MockSubmissionBackend;
    use async_trait::async_trait;
    use shared::{LogLevel, LoggerConfig};

    fn form_data(name: &str, email: &str, phone: &str, message: &str) -> ContactFormData {
        ContactFormData {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            message: message.to_string(),
        }
    }

    fn delivering_backend() -> Arc<dyn SubmissionBackend> {
        let mut backend = MockSubmissionBackend::new();
        backend.expect_deliver().returning(|_| Ok(()));
        Arc::new(backend)
    }

    fn production_logger() -> SiteLogger {
        SiteLogger::new(LoggerConfig::production())
    }

    #[test]
    fn test_valid_data_has_no_errors() {
        let data = form_data("Ada", "ada@x.com", "", "Hello");

        assert!(validate(&data).is_empty());
    }

    #[test]
    fn test_empty_email_is_required_error() {
        let errors = validate(&form_data("Ada", "", "", "Hello"));

        assert_eq!(errors.get(&FormField::Email), Some(&ValidationError::RequiredField(FormField::Email)));
    }

    #[test]
    fn test_whitespace_email_is_required_error() {
        let errors = validate(&form_data("Ada", "   ", "", "Hello"));

        assert_eq!(errors.get(&FormField::Email), Some(&ValidationError::RequiredField(FormField::Email)));
    }

    #[test]
    fn test_malformed_email_is_format_error() {
        let errors = validate(&form_data("Ada", "not-an-email", "", "Hello"));

        assert_eq!(errors.get(&FormField::Email), Some(&ValidationError::InvalidFormat(FormField::Email)));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_email_shape_edge_cases() {
        let accepted = ["a@b.c", "first.last@sub.example.org"];
        let rejected = ["a@b", "a@@b.c", "a b@c.d", "@b.c", "a@.c", " a@b.c"];

        for email in accepted {
            assert!(!validate(&form_data("n", email, "", "m")).contains_key(&FormField::Email), "{email}");
        }
        for email in rejected {
            assert_eq!(
                validate(&form_data("n", email, "", "m")).get(&FormField::Email),
                Some(&ValidationError::InvalidFormat(FormField::Email)),
                "{email}"
            );
        }
    }

    #[test]
    fn test_blank_name_and_message_are_required() {
        let errors = validate(&form_data(" \t", "a@b.c", "", "\n"));

        assert_eq!(errors.len(), 2);
        assert!(errors.contains_key(&FormField::Name));
        assert!(errors.contains_key(&FormField::Message));
    }

    #[test]
    fn test_phone_is_never_validated() {
        let errors = validate(&form_data("Ada", "ada@x.com", "not a number at all", "Hello"));

        assert!(errors.is_empty());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ValidationError::RequiredField(FormField::Name).to_string(), "Name is required");
        assert_eq!(ValidationError::RequiredField(FormField::Email).to_string(), "Email is required");
        assert_eq!(ValidationError::InvalidFormat(FormField::Email).to_string(), "Invalid email format");
        assert_eq!(ValidationError::RequiredField(FormField::Message).to_string(), "Message is required");
    }

    #[test]
    fn test_errors_serialize_as_messages() {
        let errors = validate(&form_data("", "bad", "", "Hi"));
        let value = serde_json::to_value(&errors).unwrap();

        assert_eq!(value, json!({ "name": "Name is required", "email": "Invalid email format" }));
    }

    #[tokio::test]
    async fn test_invalid_submission_records_three_errors() {
        let logger = production_logger();
        let mut backend = MockSubmissionBackend::new();
        backend.expect_deliver().times(0);
        let mut form = ContactForm::mount_with(logger.clone(), Arc::new(backend), form_data("", "bad", "", ""));

        let outcome = form.submit();

        let SubmitOutcome::Invalid(errors) = outcome else {
            panic!("expected validation failure, got {outcome:?}");
        };
        assert_eq!(errors.len(), 3);
        assert_eq!(form.errors(), errors);
        assert!(!form.is_submitting());
        assert_eq!(form.wait_for_submission().await.unwrap(), None);

        let last = logger.get_logs().pop().unwrap();
        assert_eq!(last.level, LogLevel::Warn);
        assert_eq!(last.message, "Form validation failed");
        assert_eq!(last.data.unwrap()["errors"]["email"], "Invalid email format");
    }

    #[tokio::test]
    async fn test_valid_submission_resets_form() {
        let logger = production_logger();
        let mut form = ContactForm::mount(logger.clone(), delivering_backend());
        form.set_field(FormField::Name, "Ada");
        form.set_field(FormField::Email, "ada@x.com");
        form.set_field(FormField::Message, "Hello");

        let outcome = form.submit();

        assert!(matches!(outcome, SubmitOutcome::Accepted { .. }));
        assert!(form.is_submitting());

        let delivery = form.wait_for_submission().await.unwrap();

        assert_eq!(delivery, Some(DeliveryOutcome::Delivered));
        assert!(!form.is_submitting());
        assert_eq!(form.data(), ContactFormData::default());
        assert!(form.errors().is_empty());

        let messages: Vec<_> = logger.get_logs().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["Submitting contact form", "Form submitted successfully"]);
    }

    #[tokio::test]
    async fn test_failed_delivery_keeps_data_and_clears_flag() {
        let logger = production_logger();
        let mut backend = MockSubmissionBackend::new();
        backend
            .expect_deliver()
            .times(1)
            .returning(|_| Err(WebsiteError::delivery("mail relay offline")));
        let data = form_data("Ada", "ada@x.com", "555", "Hello");
        let mut form = ContactForm::mount_with(logger.clone(), Arc::new(backend), data.clone());

        form.submit();
        let delivery = form.wait_for_submission().await.unwrap();

        assert!(matches!(delivery, Some(DeliveryOutcome::Failed(ref reason)) if reason.contains("mail relay offline")));
        assert!(!form.is_submitting());
        assert_eq!(form.data(), data);

        let last = logger.get_logs().pop().unwrap();
        assert_eq!(last.level, LogLevel::Error);
        assert_eq!(last.message, "Form submission failed");
    }

    struct CrashingBackend;

    #[async_trait]
    impl SubmissionBackend for CrashingBackend {
        async fn deliver(&self, _submission: &ContactSubmission) -> WebsiteResult<()> {
            panic!("relay crashed")
        }
    }

    #[tokio::test]
    async fn test_backend_panic_is_logged_as_failure() {
        let logger = production_logger();
        let data = form_data("Ada", "ada@x.com", "", "Hello");
        let mut form = ContactForm::mount_with(logger.clone(), Arc::new(CrashingBackend), data.clone());

        form.submit();
        let delivery = form.wait_for_submission().await.unwrap();

        assert!(matches!(delivery, Some(DeliveryOutcome::Failed(ref reason)) if reason.contains("panicked")));
        assert!(!form.is_submitting());
        assert_eq!(form.data(), data);

        let last = logger.get_logs().pop().unwrap();
        assert_eq!(last.level, LogLevel::Error);
        assert_eq!(last.message, "Form submission failed");
        assert!(last.data.unwrap()["error"].as_str().unwrap().starts_with("Submission task failed"));
    }

    #[tokio::test]
    async fn test_second_submit_while_in_flight_is_refused() {
        let mut backend = MockSubmissionBackend::new();
        backend.expect_deliver().times(1).returning(|_| Ok(()));
        let mut form = ContactForm::mount_with(
            production_logger(),
            Arc::new(backend),
            form_data("Ada", "ada@x.com", "", "Hello"),
        );

        assert!(matches!(form.submit(), SubmitOutcome::Accepted { .. }));
        assert_eq!(form.submit(), SubmitOutcome::InFlight);

        form.wait_for_submission().await.unwrap();
    }

    #[test]
    fn test_editing_field_clears_only_its_error() {
        let form = ContactForm::mount(production_logger(), delivering_backend());

        assert!(!form.validate());
        assert_eq!(form.errors().len(), 3);

        form.set_field(FormField::Email, "ada@");

        let errors = form.errors();
        assert!(!errors.contains_key(&FormField::Email));
        assert!(errors.contains_key(&FormField::Name));
        assert!(errors.contains_key(&FormField::Message));
    }

    #[test]
    fn test_debug_trace_only_in_development() {
        let mut mirror = shared::logger::MockConsoleMirror::new();
        mirror.expect_emit().times(2).return_const(());
        let logger = SiteLogger::with_mirror(LoggerConfig::development(), Box::new(mirror));
        let mut form = ContactForm::mount(logger.clone(), delivering_backend());

        form.submit();

        let levels: Vec<_> = logger.get_logs().into_iter().map(|e| e.level).collect();
        assert_eq!(levels, vec![LogLevel::Debug, LogLevel::Warn]);
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in FormField::ALL {
            assert_eq!(FormField::from_name(field.name()), Some(field));
        }
        assert_eq!(FormField::from_name("company"), None);
    }
}
