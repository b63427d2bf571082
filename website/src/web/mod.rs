//! HTTP layer
//!
//! Request handlers and the redirect navigation used after a form post

pub mod handlers;
pub mod navigator;
