//! Main website implementation
//!
//! Wires the shared state into the axum router and runs the HTTP server.

use axum::Router;
use axum::routing::{get, post};
use shared::logging::{log_shutdown, log_startup};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::{WebsiteError, WebsiteResult};
use crate::state::SiteState;
use crate::web::handlers::{api, contact, pages};

const COMPONENT: &str = "website";

#[derive(Clone)]
pub struct WebSite {
    state: Arc<SiteState>,
}

impl WebSite {
    pub fn new(state: SiteState) -> Self {
        Self { state: Arc::new(state) }
    }

    /// Build the router. Every path without its own route goes through the
    /// route table.
    pub fn build_router(&self) -> Router {
        Router::new()
            // Form posts
            .route("/contact", get(pages::render_page).post(contact::submit_form))
            .route("/api/contact", post(contact::submit_json))
            // Diagnostics
            .route("/api/logs", get(api::get_logs).delete(api::clear_logs))
            .route("/health", get(api::health_check))
            // Assets
            .nest_service("/static", ServeDir::new(&self.state.config.static_dir))
            // Pages
            .fallback(pages::render_page)
            .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()).into_inner())
            .with_state(self.state.clone())
    }

    /// Serve until ctrl-c
    pub async fn run(&self) -> WebsiteResult<()> {
        let address = self.state.config.bind_address;
        let listener = tokio::net::TcpListener::bind(address)
            .await
            .map_err(|_| WebsiteError::ServerStartupFailed {
                address: address.to_string(),
            })?;

        log_startup(
            COMPONENT,
            &format!(
                "listening on http://{} ({} mode)",
                address,
                if self.state.is_development() { "dev" } else { "prod" }
            ),
        );

        axum::serve(listener, self.build_router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }

    pub fn state(&self) -> &Arc<SiteState> {
        &self.state
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => log_shutdown(COMPONENT, "received ctrl-c"),
        Err(e) => log_shutdown(COMPONENT, &format!("signal handler failed: {e}")),
    }
}
