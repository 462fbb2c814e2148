//! `${VAR}` expansion for string settings.

use std::borrow::Cow;
use std::env::{self, VarError};

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` in `value`.
///
/// Text without `${` is returned as is, so a marker like `$TOC` survives.
/// An unset variable without a default is an error naming `field`.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, lookup)
        .map(Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}}: {}", e.var_name, e.cause),
        })
}

/// An unset variable is an error unless the reference carries a default.
fn lookup(name: &str) -> Result<Option<String>, VarError> {
    env::var(name).map(Some)
}
