// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! The `traceparent` flags byte.
//!
//! Two bits carry meaning:
//!
//! | bit    | name        | meaning                                              |
//! |--------|-------------|------------------------------------------------------|
//! | `0x01` | `requested` | the caller asked for this request to be traced       |
//! | `0x02` | `recorded`  | the sender recorded its span and will export it      |
//!
//! A context is sampled when either bit is set. When a child adopts flags that
//! request tracing, it records too, so `01` is propagated downstream as `03`.
//! That combination marks an incomplete trace: the ancestor did not record.
//!
//! | incoming | sampled | outgoing |
//! |----------|---------|----------|
//! | `00`     | no      | `00`     |
//! | `01`     | yes     | `03`     |
//! | `02`     | yes     | `02`     |
//! | `03`     | yes     | `03`     |

use std::fmt;

use crate::error::Error;

const REQUESTED: u8 = 0x01;
const RECORDED: u8 = 0x02;
const KNOWN_BITS: u8 = REQUESTED | RECORDED;

#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash)]
pub struct TraceFlags(u8);

impl TraceFlags {
    pub const NONE: TraceFlags = TraceFlags(0);
    pub const REQUESTED_AND_RECORDED: TraceFlags = TraceFlags(KNOWN_BITS);

    /// Wraps a raw flags byte, keeping unknown bits as they are.
    #[must_use]
    pub const fn from_byte(byte: u8) -> Self {
        Self(byte)
    }

    /// Flags of a root span: both bits follow the sampling decision.
    #[must_use]
    pub const fn for_root(sampled: bool) -> Self {
        if sampled {
            Self::REQUESTED_AND_RECORDED
        } else {
            Self::NONE
        }
    }

    /// Flags a child adopts from its parent's flags.
    ///
    /// Unknown bits are dropped, and a request to trace implies recording.
    #[must_use]
    pub const fn for_child_of(parent: TraceFlags) -> Self {
        let mut byte = parent.0 & KNOWN_BITS;
        if byte & REQUESTED != 0 {
            byte |= RECORDED;
        }
        Self(byte)
    }

    /// Parses exactly two hex characters, in either case.
    pub fn from_hex(hex: &str) -> Result<Self, Error> {
        if hex.len() != 2 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::parse("invalid trace flags"));
        }

        u8::from_str_radix(hex, 16)
            .map(Self)
            .map_err(|_| Error::parse("invalid trace flags"))
    }

    #[must_use]
    pub const fn as_byte(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn is_requested(self) -> bool {
        self.0 & REQUESTED != 0
    }

    #[must_use]
    pub const fn is_recorded(self) -> bool {
        self.0 & RECORDED != 0
    }

    /// Computed from the current bits on every call.
    #[must_use]
    pub const fn is_sampled(self) -> bool {
        self.0 & KNOWN_BITS != 0
    }

    pub fn set_recorded(&mut self, recorded: bool) {
        if recorded {
            self.0 |= RECORDED;
        } else {
            self.0 &= !RECORDED;
        }
    }
}

impl fmt::Display for TraceFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}", self.0)
    }
}
