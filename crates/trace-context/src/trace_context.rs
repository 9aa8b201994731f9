// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Mutable, reusable trace context of a single span.
//!
//! A `TraceContext` places one span in one trace. It is built either as a
//! **root** (new trace id, no parent, flags from a [`Sampler`]) or as a
//! **child** of an incoming `traceparent` header (trace id and flags adopted,
//! the sender's span id becomes the parent id, a fresh own id is generated).
//!
//! # Lifecycle
//!
//! ```text
//! TraceContext::new()        zero state
//!   ↓
//! as_root_span / as_child_of
//!   ↓
//! outgoing_trace_parent_header → downstream call
//!   ↓
//! reset_state()              zero state, ready for the next execution
//! ```
//!
//! Instances are meant to be pooled. There is no internal synchronization: a
//! context belongs to one execution at a time, and the pool owner calls
//! [`TraceContext::reset_state`] before handing it to the next one.
//!
//! # Malformed headers
//!
//! No operation here fails. An unparseable header is logged at `debug` level
//! and leaves the context in its zero state, where every accessor still
//! returns well-defined empty values.

use std::fmt;

use tracing::debug;

use crate::flags::TraceFlags;
use crate::id::{SpanId, TraceId};
use crate::sampler::Sampler;
use crate::traceparent::{self, TraceParent};

#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct TraceContext {
    trace_id: TraceId,
    id: SpanId,
    parent_id: SpanId,
    /// Current flags, changed by [`TraceContext::set_recorded`].
    flags: TraceFlags,
    /// Flags byte as first received or decided, echoed by the incoming header.
    incoming_flags: TraceFlags,
}

impl TraceContext {
    /// Creates a context in the zero state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new trace with this context as its root span.
    ///
    /// The sampler is consulted exactly once.
    ///
    /// # Example
    ///
    /// ```
    /// use datadog_trace_context::{ConstantSampler, TraceContext};
    ///
    /// let mut context = TraceContext::new();
    /// context.as_root_span(&ConstantSampler::of(true));
    ///
    /// let header = context.outgoing_trace_parent_header();
    /// assert_eq!(header.len(), 55);
    /// assert!(header.starts_with("00-"));
    /// assert!(header.ends_with("-03"));
    /// assert!(context.parent_id().is_zero());
    /// ```
    pub fn as_root_span<S>(&mut self, sampler: &S)
    where
        S: Sampler + ?Sized,
    {
        let flags = TraceFlags::for_root(sampler.decide());
        self.trace_id = TraceId::random();
        self.id = SpanId::random();
        self.parent_id = SpanId::ZERO;
        self.flags = flags;
        self.incoming_flags = flags;
    }

    /// Continues the trace described by an incoming `traceparent` header.
    ///
    /// A malformed header leaves the context in its zero state.
    ///
    /// # Example
    ///
    /// ```
    /// use datadog_trace_context::TraceContext;
    ///
    /// let mut context = TraceContext::new();
    /// context.as_child_of("00-0af7651916cd43dd8448eb211c80319c-b9c7c989f97918e1-01");
    /// assert!(context.is_sampled());
    /// assert_eq!(context.parent_id().to_string(), "b9c7c989f97918e1");
    /// assert!(context.outgoing_trace_parent_header().ends_with("-03"));
    ///
    /// context.as_child_of("not a header");
    /// assert!(context.trace_id().is_empty());
    /// assert!(!context.is_sampled());
    /// ```
    pub fn as_child_of(&mut self, header: &str) {
        match TraceParent::parse(header) {
            Ok(parent) => {
                self.trace_id = parent.trace_id;
                self.id = SpanId::random();
                self.parent_id = parent.span_id;
                self.flags = TraceFlags::for_child_of(parent.flags);
                self.incoming_flags = parent.flags;
            }
            Err(e) => {
                debug!("{e}, header: {header:?}");
                self.reset_state();
            }
        }
    }

    /// Makes this context a child of another in-process span.
    ///
    /// The parent's current flags are adopted, so a decision changed with
    /// [`TraceContext::set_recorded`] is inherited. A parent without a trace
    /// id yields the zero state.
    pub fn as_child_of_parent(&mut self, parent: &TraceContext) {
        if !parent.has_content() {
            debug!("Cannot create child of an empty trace context");
            self.reset_state();
            return;
        }

        self.trace_id = parent.trace_id;
        self.id = SpanId::random();
        self.parent_id = parent.id;
        self.flags = TraceFlags::for_child_of(parent.flags);
        self.incoming_flags = parent.flags;
    }

    /// Header to send downstream: carries this span's own id and current flags.
    #[must_use]
    pub fn outgoing_trace_parent_header(&self) -> String {
        traceparent::format_header(self.trace_id, self.id, self.flags)
    }

    /// Writes the outgoing header into `out` without allocating.
    pub fn write_outgoing_trace_parent_header<W>(&self, out: &mut W) -> fmt::Result
    where
        W: fmt::Write + ?Sized,
    {
        traceparent::write_header(out, self.trace_id, self.id, self.flags)
    }

    /// Header this context was built from: parent id and flags as received.
    ///
    /// Renders `00-00000000000000000000000000000000-0000000000000000-00` in the
    /// zero state.
    #[must_use]
    pub fn incoming_trace_parent_header(&self) -> String {
        traceparent::format_header(self.trace_id, self.parent_id, self.incoming_flags)
    }

    #[must_use]
    pub fn is_sampled(&self) -> bool {
        self.flags.is_sampled()
    }

    /// Sets or clears the recorded bit. No other field changes.
    pub fn set_recorded(&mut self, recorded: bool) {
        self.flags.set_recorded(recorded);
    }

    /// This span's own id.
    #[must_use]
    pub fn id(&self) -> SpanId {
        self.id
    }

    #[must_use]
    pub fn trace_id(&self) -> TraceId {
        self.trace_id
    }

    /// Id of the parent span, zero for a root span.
    #[must_use]
    pub fn parent_id(&self) -> SpanId {
        self.parent_id
    }

    #[must_use]
    pub fn flags(&self) -> TraceFlags {
        self.flags
    }

    /// Whether this context belongs to a trace.
    #[must_use]
    pub fn has_content(&self) -> bool {
        !self.trace_id.is_empty()
    }

    /// Whether `other` is the direct parent of this span.
    #[must_use]
    pub fn is_child_of(&self, other: &TraceContext) -> bool {
        self.has_content() && self.trace_id == other.trace_id && self.parent_id == other.id
    }

    /// Copies every field of `other` into this context.
    pub fn copy_from(&mut self, other: &TraceContext) {
        self.clone_from(other);
    }

    /// Restores the zero state so the instance can be reused.
    pub fn reset_state(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for TraceContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_outgoing_trace_parent_header(f)
    }
}
