//! portfolio-backend library entrypoint.
//!
//! Modules:
//! - `app`: startup, configuration, shared state
//! - `http`: Axum router and handlers
//! - `mail`: SMTP transport seam and the lettre-backed mailer
//! - `models`: typed records used across layers
//! - `util`: tracing setup

pub mod app;
pub mod http;
pub mod mail;
pub mod models;
pub mod util;
