//! Request handlers

pub mod api;
pub mod contact;
pub mod pages;
