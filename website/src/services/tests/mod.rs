//! Service tests for the website
//!
//! Exercises the service implementations against the contact form they back.

pub mod helpers;
pub mod submission;
