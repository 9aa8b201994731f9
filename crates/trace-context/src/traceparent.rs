// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Codec for the W3C `traceparent` header.
//!
//! # Format
//!
//! ```text
//! 00-0af7651916cd43dd8448eb211c80319c-b9c7c989f97918e1-03
//! |  |                                |                |
//! |  trace id (32 hex)                span id (16 hex) flags (2 hex)
//! version (2 hex, must be `00`)
//! ```
//!
//! Input is matched case-insensitively; output is always lowercase and
//! zero-padded to [`TRACEPARENT_LEN`] characters.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::Error;
use crate::flags::TraceFlags;
use crate::id::{SpanId, TraceId};

/// Carrier key under which the header travels.
pub const TRACEPARENT_KEY: &str = "traceparent";

/// The only protocol version this codec reads and writes.
pub const SUPPORTED_VERSION: &str = "00";

/// Length of a well-formed header.
pub const TRACEPARENT_LEN: usize = 55;

lazy_static! {
    /// `version-traceId-spanId-flags`, with nothing before or after.
    static ref TRACEPARENT_REGEX: Regex =
        Regex::new(r"(?i)^([a-f0-9]{2})-([a-f0-9]{32})-([a-f0-9]{16})-([a-f0-9]{2})$")
            .expect("failed creating regex");
}

/// The fields of one `traceparent` header.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TraceParent {
    pub trace_id: TraceId,
    /// Id of the span that sent the header.
    pub span_id: SpanId,
    /// Flags byte exactly as received.
    pub flags: TraceFlags,
}

impl TraceParent {
    /// Parses a header, rejecting anything that is not exactly a version `00` header.
    ///
    /// # Example
    ///
    /// ```
    /// use datadog_trace_context::traceparent::TraceParent;
    ///
    /// let parsed = TraceParent::parse("00-0af7651916cd43dd8448eb211c80319c-b9c7c989f97918e1-01").unwrap();
    /// assert_eq!(parsed.span_id.to_string(), "b9c7c989f97918e1");
    ///
    /// assert!(TraceParent::parse("01-0af7651916cd43dd8448eb211c80319c-b9c7c989f97918e1-01").is_err());
    /// ```
    pub fn parse(header: &str) -> Result<Self, Error> {
        if header.len() != TRACEPARENT_LEN {
            return Err(Error::parse("invalid length"));
        }

        let captures = TRACEPARENT_REGEX
            .captures(header)
            .ok_or_else(|| Error::parse("invalid format"))?;

        if &captures[1] != SUPPORTED_VERSION {
            return Err(Error::parse("unsupported version"));
        }

        let trace_id = TraceId::from_hex(&captures[2])?;
        if trace_id.is_empty() {
            return Err(Error::parse("all-zero trace id"));
        }

        let span_id = SpanId::from_hex(&captures[3])?;
        if span_id.is_zero() {
            return Err(Error::parse("all-zero span id"));
        }

        let flags = TraceFlags::from_hex(&captures[4])?;

        Ok(Self {
            trace_id,
            span_id,
            flags,
        })
    }
}

/// Writes `00-{trace_id}-{span_id}-{flags}` into `out`.
pub fn write_header<W>(
    out: &mut W,
    trace_id: TraceId,
    span_id: SpanId,
    flags: TraceFlags,
) -> fmt::Result
where
    W: fmt::Write + ?Sized,
{
    write!(out, "{SUPPORTED_VERSION}-{trace_id}-{span_id}-{flags}")
}

/// Renders a header into a new, exactly sized `String`.
#[must_use]
pub fn format_header(trace_id: TraceId, span_id: SpanId, flags: TraceFlags) -> String {
    let mut header = String::with_capacity(TRACEPARENT_LEN);
    // Writing into a `String` cannot fail.
    let _ = write_header(&mut header, trace_id, span_id, flags);
    header
}

impl fmt::Display for TraceParent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, self.trace_id, self.span_id, self.flags)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod test {
    use super::*;

    const VALID: &str = "00-0af7651916cd43dd8448eb211c80319c-b9c7c989f97918e1-03";

    #[test]
    fn test_parse_valid_header() {
        let parsed = TraceParent::parse(VALID).unwrap();
        assert_eq!(
            parsed.trace_id.as_u128(),
            0x0af7_6519_16cd_43dd_8448_eb21_1c80_319c
        );
        assert_eq!(parsed.span_id.as_u64(), 0xb9c7_c989_f979_18e1);
        assert_eq!(parsed.flags.as_byte(), 0x03);
        assert_eq!(parsed.to_string(), VALID);
    }

    #[test]
    fn test_parse_uppercase_header_renders_lowercase() {
        let parsed = TraceParent::parse(&VALID.to_uppercase()).unwrap();
        assert_eq!(parsed.to_string(), VALID);
    }

    #[test]
    fn test_parse_rejects_malformed_headers() {
        let cases = [
            ("", "invalid length"),
            ("00-0af7651916cd43dd8448eb211c80319c-b9c7c989f97918e1-3", "invalid length"),
            ("00-0af7651916cd43dd8448eb211c80319c-b9c7c989f97918e1-03-", "invalid length"),
            (" 0-0af7651916cd43dd8448eb211c80319c-b9c7c989f97918e1-03", "invalid format"),
            ("00_0af7651916cd43dd8448eb211c80319c-b9c7c989f97918e1-03", "invalid format"),
            ("00-0af7651916cd43dd8448eb211c80319cb-9c7c989f97918e1-03", "invalid format"),
            ("00-0af7651916cd43dd8448eb211c80319z-b9c7c989f97918e1-03", "invalid format"),
            ("00-0af7651916cd43dd8448eb211c80319c-b9c7c989f97918e1-0x", "invalid format"),
            ("01-0af7651916cd43dd8448eb211c80319c-b9c7c989f97918e1-03", "unsupported version"),
            ("ff-0af7651916cd43dd8448eb211c80319c-b9c7c989f97918e1-03", "unsupported version"),
            ("00-00000000000000000000000000000000-b9c7c989f97918e1-03", "all-zero trace id"),
            ("00-0af7651916cd43dd8448eb211c80319c-0000000000000000-03", "all-zero span id"),
        ];

        for (header, message) in cases {
            let err = TraceParent::parse(header).unwrap_err();
            assert_eq!(err.message(), message, "header {header:?}");
        }
    }

    #[test]
    fn test_format_header_zero_values() {
        assert_eq!(
            format_header(TraceId::EMPTY, SpanId::ZERO, TraceFlags::NONE),
            "00-00000000000000000000000000000000-0000000000000000-00"
        );
    }

    #[test]
    fn test_format_header_is_full_width() {
        let header = format_header(
            TraceId::from_u128(1),
            SpanId::from_u64(2),
            TraceFlags::from_byte(3),
        );
        assert_eq!(header.len(), TRACEPARENT_LEN);
        assert_eq!(
            header,
            "00-00000000000000000000000000000001-0000000000000002-03"
        );
    }
}
