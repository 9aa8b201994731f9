// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Error type for `traceparent` header parsing.
//!
//! There is a single failure kind at this layer: a malformed header. It covers a
//! wrong overall length, wrong field widths, non-hex characters, an unsupported
//! version and misplaced hyphens.
//!
//! # Handling
//!
//! [`TraceContext`](crate::TraceContext) never hands this error to its caller. A
//! failed parse is logged at `debug` level and the context degrades to its zero
//! state, so instrumentation can never break the host application. The explicit
//! [`TraceParent::parse`](crate::traceparent::TraceParent::parse) API is available
//! to callers who want to inspect the failure.

use thiserror::Error;

/// Error while decoding a `traceparent` header.
///
/// # Display Format
///
/// Errors are formatted as: `"Cannot {operation} traceparent: {message}"`
///
/// Example: `"Cannot parse traceparent: unsupported version"`
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("Cannot {} traceparent: {}", operation, message)]
pub struct Error {
    /// Description of what went wrong.
    ///
    /// Examples:
    /// - `"unsupported version"`
    /// - `"all-zero trace id"`
    message: &'static str,
    /// Operation that failed, currently always `"parse"`.
    operation: &'static str,
}

impl Error {
    /// Creates a parse error for a malformed incoming header.
    ///
    /// # Example
    ///
    /// ```
    /// use datadog_trace_context::error::Error;
    ///
    /// let err = Error::parse("unsupported version");
    /// assert_eq!(err.to_string(), "Cannot parse traceparent: unsupported version");
    /// ```
    #[must_use]
    pub fn parse(message: &'static str) -> Self {
        Self {
            message,
            operation: "parse",
        }
    }

    /// Static description of the failure, without the operation prefix.
    #[must_use]
    pub fn message(&self) -> &'static str {
        self.message
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = Error::parse("non-hex character");
        assert_eq!(error.to_string(), "Cannot parse traceparent: non-hex character");
    }

    #[test]
    fn test_error_message() {
        assert_eq!(Error::parse("unsupported version").message(), "unsupported version");
    }
}
