//! Parse failures.
//!
//! There is a single error kind: the parser did not match at the current
//! position. With the `diagnostics` feature a failure carries a message;
//! without it `ParseError` is a zero-sized marker and every message
//! constructor compiles down to nothing.

use std::borrow::Cow;
use thiserror::Error;

/// Message used when a parser fails without saying why
pub const DEFAULT_MESSAGE: &str = "parsing error";

/// A parse failure at the current position
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "diagnostics", error("{message}"))]
#[cfg_attr(not(feature = "diagnostics"), error("parsing error"))]
pub struct ParseError {
    #[cfg(feature = "diagnostics")]
    message: Cow<'static, str>,
}

/// Result of applying a parser
pub type ParseResult<T> = Result<T, ParseError>;

impl ParseError {
    /// A failure carrying the default message
    pub fn new() -> Self {
        Self::with_message(DEFAULT_MESSAGE)
    }

    #[cfg(feature = "diagnostics")]
    pub fn with_message(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[cfg(not(feature = "diagnostics"))]
    pub fn with_message(_message: impl Into<Cow<'static, str>>) -> Self {
        Self {}
    }

    /// A failure whose message is only built when diagnostics are enabled
    #[cfg(feature = "diagnostics")]
    pub fn lazy(message: impl FnOnce() -> String) -> Self {
        Self::with_message(message())
    }

    #[cfg(not(feature = "diagnostics"))]
    pub fn lazy(_message: impl FnOnce() -> String) -> Self {
        Self {}
    }

    #[cfg(feature = "diagnostics")]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[cfg(not(feature = "diagnostics"))]
    pub fn message(&self) -> &str {
        DEFAULT_MESSAGE
    }
}

impl Default for ParseError {
    fn default() -> Self {
        Self::new()
    }
}
