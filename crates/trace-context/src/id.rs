// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Trace and span identifiers.
//!
//! Both identifiers reserve the all-zero value to mean "absent". They render as
//! fixed-width, zero-padded, lowercase hex:
//!
//! ```text
//! TraceId  0af7651916cd43dd8448eb211c80319c   (128 bits, 32 hex chars)
//! SpanId   b9c7c989f97918e1                   (64 bits, 16 hex chars)
//! ```

use std::fmt;

use crate::error::Error;
use crate::id_generator;

/// Number of hex characters in a rendered [`TraceId`].
pub const TRACE_ID_HEX_LEN: usize = 32;

/// Number of hex characters in a rendered [`SpanId`].
pub const SPAN_ID_HEX_LEN: usize = 16;

/// 128-bit identifier shared by every span of a trace.
///
/// # Example
///
/// ```
/// use datadog_trace_context::TraceId;
///
/// let id = TraceId::from_hex("0AF7651916CD43DD8448EB211C80319C").unwrap();
/// assert_eq!(id.to_string(), "0af7651916cd43dd8448eb211c80319c");
/// assert!(!id.is_empty());
/// assert!(TraceId::EMPTY.is_empty());
/// ```
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TraceId(u128);

impl TraceId {
    /// The reserved "absent/invalid" trace id.
    pub const EMPTY: TraceId = TraceId(0);

    #[must_use]
    pub const fn from_u128(value: u128) -> Self {
        Self(value)
    }

    /// Generates a random, non-empty trace id.
    #[must_use]
    pub fn random() -> Self {
        Self(id_generator::next_trace_id())
    }

    /// Parses exactly [`TRACE_ID_HEX_LEN`] hex characters, in either case.
    pub fn from_hex(hex: &str) -> Result<Self, Error> {
        parse_fixed_hex(hex, TRACE_ID_HEX_LEN, "invalid trace id").map(Self)
    }

    #[must_use]
    pub const fn as_u128(&self) -> u128 {
        self.0
    }

    /// Whether this is the reserved all-zero value.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

/// 64-bit span identifier, used both for a span's own id and for its parent id.
///
/// # Example
///
/// ```
/// use datadog_trace_context::SpanId;
///
/// let id = SpanId::from_u64(0xff);
/// assert_eq!(id.to_string(), "00000000000000ff");
/// assert_eq!(SpanId::ZERO.as_u64(), 0);
/// ```
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpanId(u64);

impl SpanId {
    /// The reserved "absent" span id, the parent id of a root span.
    pub const ZERO: SpanId = SpanId(0);

    #[must_use]
    pub const fn from_u64(value: u64) -> Self {
        Self(value)
    }

    /// Generates a random, non-zero span id.
    #[must_use]
    pub fn random() -> Self {
        Self(id_generator::next_span_id())
    }

    /// Parses exactly [`SPAN_ID_HEX_LEN`] hex characters, in either case.
    pub fn from_hex(hex: &str) -> Result<Self, Error> {
        parse_fixed_hex(hex, SPAN_ID_HEX_LEN, "invalid span id")
            .and_then(|value| u64::try_from(value).map_err(|_| Error::parse("invalid span id")))
            .map(Self)
    }

    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for SpanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

// `from_str_radix` alone would accept a leading `+`, so every byte is checked first.
fn parse_fixed_hex(hex: &str, len: usize, message: &'static str) -> Result<u128, Error> {
    if hex.len() != len || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::parse(message));
    }

    u128::from_str_radix(hex, 16).map_err(|_| Error::parse(message))
}
