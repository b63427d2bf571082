//! Tests for the simulated submission delivery

use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

use super::fixtures::{invalid_form_data, test_submission, valid_form_data};
use super::helpers::{TEST_LATENCY, create_test_logger, messages, mount_simulated_form};
use crate::core::contact::{ContactForm, DeliveryOutcome, SubmitOutcome};
use crate::error::WebsiteError;
use crate::services::SimulatedDelivery;
use crate::traits::SubmissionBackend;

mod simulated_delivery_tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_delivery_waits_for_latency() {
        let delivery = SimulatedDelivery::new(TEST_LATENCY);
        let started = Instant::now();

        delivery.deliver(&test_submission()).await.unwrap();

        assert!(started.elapsed() >= TEST_LATENCY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failing_delivery_reports_reason() {
        let delivery = SimulatedDelivery::failing(Duration::from_millis(10), "relay offline");

        let result = delivery.deliver(&test_submission()).await;

        assert!(matches!(result, Err(WebsiteError::DeliveryFailed { ref reason }) if reason == "relay offline"));
    }

    #[test]
    fn test_default_latency_is_one_second() {
        assert_eq!(SimulatedDelivery::default().latency(), Duration::from_millis(1000));
    }
}

mod contact_form_tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_invalid_form_never_submits() {
        let logger = create_test_logger();
        let mut form = mount_simulated_form(&logger, invalid_form_data());

        let outcome = form.submit();

        assert!(matches!(outcome, SubmitOutcome::Invalid(ref errors) if errors.len() == 3));
        assert!(!form.is_submitting());
        assert_eq!(messages(&logger), vec!["Form validation failed"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_submitting_holds_for_latency_then_resets() {
        let logger = create_test_logger();
        let mut form = mount_simulated_form(&logger, valid_form_data());

        form.submit();
        tokio::time::sleep(TEST_LATENCY / 2).await;

        assert!(form.is_submitting());
        assert_eq!(form.data(), valid_form_data());

        let delivery = form.wait_for_submission().await.unwrap();

        assert_eq!(delivery, Some(DeliveryOutcome::Delivered));
        assert!(!form.is_submitting());
        assert!(form.data().name.is_empty());
        assert!(form.errors().is_empty());
        assert_eq!(messages(&logger), vec!["Submitting contact form", "Form submitted successfully"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_submission_log_carries_id_and_data() {
        let logger = create_test_logger();
        let mut form = mount_simulated_form(&logger, valid_form_data());

        let SubmitOutcome::Accepted { submission_id } = form.submit() else {
            panic!("valid form should be accepted");
        };

        let entry = logger.get_logs().pop().unwrap();
        let data = entry.data.unwrap();
        assert_eq!(data["submissionId"], submission_id.to_string());
        assert_eq!(data["formData"]["email"], "ada@x.com");

        form.wait_for_submission().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmount_cancels_pending_send() {
        let logger = create_test_logger();
        let mut form = mount_simulated_form(&logger, valid_form_data());

        form.submit();
        form.unmount();
        tokio::time::sleep(TEST_LATENCY * 2).await;

        assert_eq!(messages(&logger), vec!["Submitting contact form"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_send_clears_submitting() {
        let logger = create_test_logger();
        let backend = Arc::new(SimulatedDelivery::failing(TEST_LATENCY, "relay offline"));
        let mut form = ContactForm::mount_with(logger.clone(), backend, valid_form_data());

        form.submit();
        let delivery = form.wait_for_submission().await.unwrap();

        assert!(matches!(delivery, Some(DeliveryOutcome::Failed(_))));
        assert!(!form.is_submitting());
        assert_eq!(form.data(), valid_form_data());
        assert_eq!(messages(&logger).last().map(String::as_str), Some("Form submission failed"));
    }
}
