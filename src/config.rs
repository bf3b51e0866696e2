//! Environment-backed settings, loaded once at startup.

use std::env;

use log::warn;
use worklog_api::ApiConfig;

use crate::builder::EmptyComment;
use crate::duration::ParserOptions;
use crate::error::{LogTimeError, Result};

pub const DOMAIN_VAR: &str = "ITS_PRO_DOMAIN";
pub const TOKEN_VAR: &str = "ITS_PRO_ACCESS_TOKEN";
pub const DECIMAL_DURATIONS_VAR: &str = "LOG_TIME_DECIMAL_DURATIONS";
pub const EMPTY_COMMENT_VAR: &str = "LOG_TIME_EMPTY_COMMENT";
pub const DAY_OFFSET_VAR: &str = "LOG_TIME_DAY_OFFSET";

/// Everything one invocation needs besides its arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub domain: String,
    pub token: String,
    pub parser: ParserOptions,
    pub empty_comment: EmptyComment,
    pub parse_day_offset: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            domain: String::new(),
            token: String::new(),
            parser: ParserOptions::default(),
            empty_comment: EmptyComment::default(),
            parse_day_offset: true,
        }
    }
}

impl Settings {
    /// Reads settings from the process environment. Call after `.env` has
    /// been loaded.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Missing domain or token is only warned about; the request will fail
    /// downstream.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();

        let domain = lookup(DOMAIN_VAR).unwrap_or_default();
        if domain.trim().is_empty() {
            warn!("{} is not set", DOMAIN_VAR);
        }
        let token = lookup(TOKEN_VAR).unwrap_or_default();
        if token.trim().is_empty() {
            warn!("{} is not set", TOKEN_VAR);
        }

        let allow_decimal = match lookup(DECIMAL_DURATIONS_VAR) {
            Some(value) => parse_flag(DECIMAL_DURATIONS_VAR, &value)?,
            None => defaults.parser.allow_decimal,
        };
        let empty_comment = match lookup(EMPTY_COMMENT_VAR) {
            Some(value) => EmptyComment::parse(&value).ok_or_else(|| {
                LogTimeError::Config(format!(
                    "{} must be 'marker' or 'blank', got '{}'",
                    EMPTY_COMMENT_VAR, value
                ))
            })?,
            None => defaults.empty_comment,
        };
        let parse_day_offset = match lookup(DAY_OFFSET_VAR) {
            Some(value) => parse_flag(DAY_OFFSET_VAR, &value)?,
            None => defaults.parse_day_offset,
        };

        Ok(Self {
            domain,
            token,
            parser: ParserOptions { allow_decimal },
            empty_comment,
            parse_day_offset,
        })
    }

    pub fn api_config(&self) -> ApiConfig {
        ApiConfig::for_domain(&self.domain, self.token.clone())
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(LogTimeError::Config(format!(
            "{} must be a boolean, got '{}'",
            name, other
        ))),
    }
}
