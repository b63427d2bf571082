//! Shared building blocks for the DroneVista site
//!
//! Holds the pieces every part of the site leans on: the in-memory site
//! logger, the navigation helper that couples scroll reset with route
//! transitions, and process tracing setup.

pub mod errors;
pub mod logger;
pub mod logging;
pub mod navigation;

pub use errors::*;
pub use logger::{ConsoleMirror, LogEntry, LogLevel, LoggerConfig, SiteLogger, StderrMirror};
pub use navigation::{Location, ScrollOffset, Viewport, navigate_and_scroll_top};
