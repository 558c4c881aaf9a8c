use crate::Method;
use thiserror::Error;

/// Errors produced while building a [`Router`](crate::Router).
///
/// Lookups never fail; see [`Lookup`](crate::Lookup) for the not-found
/// and method-not-allowed outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The exact same pattern is already registered for this method.
    #[error("{method} {pattern} is already registered")]
    Conflict { method: Method, pattern: String },

    /// A param or wildcard with another name already occupies this position.
    #[error(
        "{method} {pattern}: `{name}` conflicts with `{existing}`, \
         which is already registered at the same position"
    )]
    AmbiguousParam {
        method: Method,
        pattern: String,
        name: String,
        existing: String,
    },

    /// The route template could not be parsed.
    #[error("invalid route `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("unsupported http method `{0}`")]
    UnsupportedMethod(String),
}

impl RouteError {
    pub(crate) fn invalid(pattern: &str, reason: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }
}
