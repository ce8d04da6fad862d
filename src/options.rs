use crate::constants::defaults;
use crate::util::{is_http_token, is_serialized_origin, split_list};
use thiserror::Error;

/// Arguments of a CORS decoration. Every field left as `None` (or set to an
/// empty string, or a zero `max_age`) takes the default when resolved.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CorsOptions {
    /// `Access-Control-Allow-Credentials`; defaults to `false`.
    pub allow_credentials: Option<bool>,
    /// `Access-Control-Allow-Headers`; defaults to `"accept, content-type"`.
    pub allow_headers: Option<String>,
    /// `Access-Control-Allow-Origin` used when the request origin is not
    /// reflected; defaults to `"*"`.
    pub allow_origin: Option<String>,
    /// `Access-Control-Expose-Headers`; not sent unless set.
    pub expose_headers: Option<String>,
    /// `Access-Control-Max-Age` in seconds; defaults to 21600.
    pub max_age: Option<u64>,
    /// Echo the request `Origin` back instead of `allow_origin`; defaults to `true`.
    pub reflect_origin: Option<bool>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("allow_headers entry '{0}' is not a valid header name")]
    InvalidAllowHeader(String),
    #[error("expose_headers entry '{0}' is not a valid header name")]
    InvalidExposeHeader(String),
    #[error("allow_origin '{0}' must be \"*\", \"null\" or a scheme://host[:port] origin")]
    InvalidAllowOrigin(String),
    #[error(
        "allow_credentials requires a specific origin when reflect_origin is disabled; \"*\" is forbidden by the CORS specification"
    )]
    CredentialsRequireSpecificOrigin,
}

impl CorsOptions {
    /// Checks the options against the CORS protocol. Decoration never calls
    /// this as a gate; [`crate::CrossDomain::new`] only logs the outcome.
    ///
    /// `allow_origin` is only checked when `reflect_origin` is off, since it
    /// is never emitted otherwise.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(value) = non_blank(&self.allow_headers)
            && let Some(invalid) = split_list(value).find(|entry| !is_http_token(entry))
        {
            return Err(ValidationError::InvalidAllowHeader(invalid.to_string()));
        }

        if let Some(value) = non_blank(&self.expose_headers)
            && let Some(invalid) = split_list(value).find(|entry| !is_http_token(entry))
        {
            return Err(ValidationError::InvalidExposeHeader(invalid.to_string()));
        }

        let reflect = self.reflect_origin.unwrap_or(true);
        if reflect {
            return Ok(());
        }

        let allow_origin = non_blank(&self.allow_origin).unwrap_or(defaults::ALLOW_ORIGIN);
        if allow_origin != "*" && !is_serialized_origin(allow_origin) {
            return Err(ValidationError::InvalidAllowOrigin(allow_origin.to_string()));
        }

        if self.allow_credentials.unwrap_or(false) && allow_origin == "*" {
            return Err(ValidationError::CredentialsRequireSpecificOrigin);
        }

        Ok(())
    }
}

/// The trimmed value, or `None` when unset or blank.
pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
