//! Typed ITS PRO worklog API client used by the `lt` command.

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::WorklogClient;
pub use config::ApiConfig;
pub use error::{ApiError, Result};
pub use models::{WorklogOutcome, WorklogRequest};
pub use reqwest::StatusCode;
