//! DroneVista website
//!
//! Server-rendered marketing site for a drone photography business: static
//! pages resolved through a route table, a contact form with validation and a
//! simulated send, and a headless browsing session model.

pub mod config;
pub mod core;
pub mod error;
pub mod services;
pub mod site_impl;
pub mod state;
pub mod traits;
pub mod views;
pub mod web;

// Re-export main types
pub use config::{BuildMode, SiteConfig};
pub use error::{WebsiteError, WebsiteResult};
pub use site_impl::WebSite;
pub use state::SiteState;

// Re-export trait definitions
pub use traits::SubmissionBackend;

// Re-export service implementations
pub use services::SimulatedDelivery;
