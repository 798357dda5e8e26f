use std::env;
use std::time::Duration;

use crate::error::AppError;

pub const SESSION_COOKIE: &str = "aces_sid";
const DEFAULT_MAX_AGE_SECS: u64 = 7 * 24 * 60 * 60;

/// Session lifetime and cookie attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub cookie_name: &'static str,
    pub max_age: Duration,
    pub cookie_secure: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: SESSION_COOKIE,
            max_age: Duration::from_secs(DEFAULT_MAX_AGE_SECS),
            cookie_secure: false,
        }
    }
}

impl SessionConfig {
    /// `SESSION_MAX_AGE_SECS` and `SESSION_COOKIE_SECURE`, both optional.
    pub fn from_env() -> Result<Self, AppError> {
        let mut cfg = Self::default();
        if let Ok(raw) = env::var("SESSION_MAX_AGE_SECS") {
            let secs = raw.parse::<u64>().map_err(|_| {
                AppError::config(format!("SESSION_MAX_AGE_SECS must be whole seconds, got '{raw}'"))
            })?;
            if secs == 0 {
                return Err(AppError::config("SESSION_MAX_AGE_SECS must be positive"));
            }
            cfg.max_age = Duration::from_secs(secs);
        }
        if let Ok(raw) = env::var("SESSION_COOKIE_SECURE") {
            cfg.cookie_secure = matches!(raw.trim(), "1" | "true" | "TRUE" | "yes");
        }
        Ok(cfg)
    }
}
