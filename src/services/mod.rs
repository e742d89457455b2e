//! Services between HTTP handlers and the gateway: required-parameter
//! validation, argument normalization and failure logging. A validation
//! failure short-circuits before any gateway call is made.

use thiserror::Error;

use crate::gateway::errors::GatewayError;

pub mod cash_flows;
pub mod funds;
pub mod returns;
pub mod shareholders;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Missing or malformed required request parameter. Client error; no
    /// remote call was attempted.
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Trims an optional parameter and drops it entirely when empty, so blank
/// query strings behave like absent ones.
pub(crate) fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_drops_blank_values() {
        assert_eq!(normalize(Some("  ".to_string())), None);
        assert_eq!(normalize(None), None);
        assert_eq!(normalize(Some(" 1 ".to_string())), Some("1".to_string()));
    }
}
