//! Shared types and pure logic for the exam archive front-end.
//!
//! Everything in this crate is free of browser APIs so it can be compiled and
//! tested natively. The `frontend` crate owns the DOM, the network calls and
//! the Yew components; it delegates every decision that can be expressed as a
//! plain function to the modules below.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod forms;
pub mod grouping;
pub mod model;
pub mod requests;
pub mod sequencing;

pub use error::{ApiError, ConfigError, Result};
