//! Error types for the property store

use crate::prelude::*;
use thiserror::Error;

/// Main error type for the property store and its runtime glue
#[derive(Debug, Clone, PartialEq, Error)]
pub enum JsError {
    /// Malformed JSON handed to the config loader or [`crate::api`]
    #[error("SyntaxError: {message}")]
    SyntaxError { message: String },

    #[error("TypeError: {message}")]
    TypeError { message: String },

    /// A broken structural invariant (tree levels, ordered list links).
    /// These should never happen in correctly-written code.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl JsError {
    pub fn type_error(message: impl Into<String>) -> Self {
        JsError::TypeError {
            message: message.into(),
        }
    }

    pub fn syntax_error(message: impl Into<String>) -> Self {
        JsError::SyntaxError {
            message: message.into(),
        }
    }

    /// Create an internal error for unexpected structural states
    pub fn internal_error(message: impl Into<String>) -> Self {
        JsError::Internal(message.into())
    }

    /// Name of the JavaScript error constructor this error maps to
    pub fn kind(&self) -> &'static str {
        match self {
            JsError::SyntaxError { .. } => "SyntaxError",
            JsError::TypeError { .. } => "TypeError",
            JsError::Internal(_) => "InternalError",
        }
    }
}
