//! Page rendering through the route table

use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use shared::Location;
use std::sync::Arc;
use tracing::debug;

use crate::core::contact::{ContactFormData, ValidationErrors};
use crate::core::routes::Route;
use crate::error::WebsiteError;
use crate::state::SiteState;
use crate::views::{ContactFormView, FormNotice, render_not_found, render_route};

/// Any path not claimed by another route. Unknown paths get the not-found
/// page; known pages answer GET and HEAD only.
pub async fn render_page(State(state): State<Arc<SiteState>>, method: Method, uri: Uri) -> Response {
    let target = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
    let location = Location::parse(target).unwrap_or_else(|_| Location {
        path: uri.path().to_string(),
        query: Vec::new(),
    });

    let Some(route) = state.routes.resolve(&location.path) else {
        debug!("No route for {}", location.path);
        return (StatusCode::NOT_FOUND, Html(render_not_found(&location))).into_response();
    };

    if method != Method::GET && method != Method::HEAD {
        return WebsiteError::MethodNotAllowed {
            method: method.to_string(),
            path: location.path,
        }
        .into_response();
    }

    let data = ContactFormData::default();
    let errors = ValidationErrors::new();
    let notice = match (route, location.query_param("sent")) {
        (Route::Contact, Some("true")) => FormNotice::Sent,
        _ => FormNotice::None,
    };
    let form = ContactFormView::new(&data, &errors).with_notice(notice);

    Html(render_route(&state.logger, route, &location, &form)).into_response()
}
