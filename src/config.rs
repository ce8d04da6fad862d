use crate::constants::defaults;
use crate::options::{CorsOptions, non_blank};
use once_cell::sync::Lazy;
use std::sync::Arc;

static DEFAULT_CONFIG: Lazy<Arc<CorsConfig>> =
    Lazy::new(|| Arc::new(CorsConfig::resolve(CorsOptions::default())));

/// A resolved, immutable CORS policy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsConfig {
    pub allow_credentials: bool,
    pub allow_headers: String,
    pub allow_origin: String,
    pub expose_headers: Option<String>,
    pub max_age: u64,
    pub reflect_origin: bool,
}

impl CorsConfig {
    /// Fills every unset, blank or zero option with its default. String
    /// values are stored trimmed.
    pub fn resolve(options: CorsOptions) -> Self {
        Self {
            allow_credentials: options.allow_credentials.unwrap_or(false),
            allow_headers: non_blank(&options.allow_headers)
                .unwrap_or(defaults::ALLOW_HEADERS)
                .to_string(),
            allow_origin: non_blank(&options.allow_origin)
                .unwrap_or(defaults::ALLOW_ORIGIN)
                .to_string(),
            expose_headers: non_blank(&options.expose_headers).map(str::to_string),
            max_age: options
                .max_age
                .filter(|seconds| *seconds > 0)
                .unwrap_or(defaults::MAX_AGE),
            reflect_origin: options.reflect_origin.unwrap_or(true),
        }
    }

    /// The process-wide config used by argument-less decorations.
    pub fn shared_default() -> Arc<CorsConfig> {
        Arc::clone(&DEFAULT_CONFIG)
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self::resolve(CorsOptions::default())
    }
}

impl From<CorsOptions> for CorsConfig {
    fn from(options: CorsOptions) -> Self {
        Self::resolve(options)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
