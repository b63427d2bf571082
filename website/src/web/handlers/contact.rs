//! Contact form submission
//!
//! Each request mounts its own form, submits it and waits for the send. If
//! the client goes away the request future is dropped, the form with it, and
//! the pending send is aborted.

use axum::Json;
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde_json::json;
use shared::logging::log_success;
use shared::{Location, site_warn};
use std::sync::Arc;
use uuid::Uuid;

use crate::core::contact::{ContactFormData, DeliveryOutcome, SubmitOutcome, ValidationErrors};
use crate::core::routes::Route;
use crate::error::{WebsiteError, WebsiteResult};
use crate::state::SiteState;
use crate::views::{ContactFormView, FormNotice, render_route};
use crate::web::navigator::navigate_to;

const COMPONENT: &str = "contact";

/// Where a delivered form post sends the browser
pub const SENT_TARGET: &str = "/contact?sent=true";

/// How one submission ended
#[derive(Debug)]
pub enum Submission {
    Invalid {
        data: ContactFormData,
        errors: ValidationErrors,
    },
    Delivered {
        id: Uuid,
    },
    Failed {
        data: ContactFormData,
        reason: String,
    },
}

/// Run the submission protocol for `data` on a freshly mounted form
pub async fn submit(state: &SiteState, data: ContactFormData) -> WebsiteResult<Submission> {
    let mut form = state.mount_contact_form(data);

    let id = match form.submit() {
        SubmitOutcome::Invalid(errors) => {
            return Ok(Submission::Invalid {
                data: form.data(),
                errors,
            });
        }
        SubmitOutcome::InFlight => return Err(WebsiteError::delivery("a submission is already in flight")),
        SubmitOutcome::Accepted { submission_id } => submission_id,
    };

    match form.wait_for_submission().await? {
        Some(DeliveryOutcome::Delivered) => {
            log_success(COMPONENT, &format!("contact submission {id} delivered"));
            Ok(Submission::Delivered { id })
        }
        Some(DeliveryOutcome::Failed(reason)) => {
            site_warn!(COMPONENT, "Contact submission {} failed: {}", id, reason);
            Ok(Submission::Failed {
                data: form.data(),
                reason,
            })
        }
        None => Err(WebsiteError::delivery("submission finished without an outcome")),
    }
}

fn contact_page(
    state: &SiteState,
    status: StatusCode,
    data: &ContactFormData,
    errors: &ValidationErrors,
    notice: FormNotice<'_>,
) -> Response {
    let form = ContactFormView::new(data, errors).with_notice(notice);
    (status, Html(render_route(&state.logger, Route::Contact, &contact_location(), &form))).into_response()
}

fn contact_location() -> Location {
    Location {
        path: Route::Contact.path(),
        query: Vec::new(),
    }
}

/// `POST /contact` from the HTML form
pub async fn submit_form(State(state): State<Arc<SiteState>>, Form(data): Form<ContactFormData>) -> Response {
    match submit(&state, data).await {
        Ok(Submission::Invalid { data, errors }) => {
            contact_page(&state, StatusCode::UNPROCESSABLE_ENTITY, &data, &errors, FormNotice::None)
        }
        Ok(Submission::Delivered { .. }) => navigate_to(SENT_TARGET).into_response(),
        Ok(Submission::Failed { data, reason }) => contact_page(
            &state,
            StatusCode::SERVICE_UNAVAILABLE,
            &data,
            &ValidationErrors::new(),
            FormNotice::Failed(&reason),
        ),
        Err(e) => e.into_response(),
    }
}

/// `POST /api/contact` with a JSON body
pub async fn submit_json(State(state): State<Arc<SiteState>>, Json(data): Json<ContactFormData>) -> Response {
    match submit(&state, data).await {
        Ok(Submission::Invalid { errors, .. }) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "status": "invalid", "errors": errors })),
        )
            .into_response(),
        Ok(Submission::Delivered { id }) => Json(json!({ "status": "sent", "submissionId": id })).into_response(),
        Ok(Submission::Failed { reason, .. }) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "failed", "error": reason })),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}
