//! Error types for card operations.

use thiserror::Error;

use crate::navigation::Route;

/// Result type for card operations.
pub type CardResult<T> = Result<T, CardError>;

/// Errors that can occur in card operations.
#[derive(Debug, Error)]
pub enum CardError {
    /// A value is not a member of its enumerated option set.
    #[error("Unknown {kind}: {value}")]
    UnknownOption {
        /// Which option set was consulted (e.g. "font size").
        kind: &'static str,
        /// The rejected input.
        value: String,
    },

    /// The navigator has no edge between these routes.
    #[error("No transition from {from} to {to}")]
    InvalidTransition {
        /// Route of the screen currently on top.
        from: Route,
        /// Route that was requested.
        to: Route,
    },

    /// The event has no meaning on the screen currently on top.
    #[error("{event} does not apply on {route}")]
    NotApplicable {
        /// Short name of the rejected event.
        event: &'static str,
        /// Route of the screen currently on top.
        route: Route,
    },

    /// Card serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CardError {
    pub(crate) fn unknown(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownOption {
            kind,
            value: value.into(),
        }
    }
}
