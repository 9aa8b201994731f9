// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Reading and writing the `traceparent` header through a carrier.
//!
//! # Flow
//!
//! ```text
//! Incoming carrier (headers)
//!   ↓
//! extract → TraceContext::as_child_of
//!   ↓
//! Process request
//!   ↓
//! inject  → TraceContext::outgoing_trace_parent_header
//!   ↓
//! Outgoing carrier (headers)
//! ```
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use datadog_trace_context::propagation::{Propagator, TraceContextPropagator};
//! use datadog_trace_context::TraceContext;
//!
//! let incoming = HashMap::from([(
//!     "traceparent".to_string(),
//!     "00-0af7651916cd43dd8448eb211c80319c-b9c7c989f97918e1-03".to_string(),
//! )]);
//!
//! let mut context = TraceContext::new();
//! assert!(TraceContextPropagator.extract(&incoming, &mut context));
//!
//! let mut outgoing: HashMap<String, String> = HashMap::new();
//! TraceContextPropagator.inject(&context, &mut outgoing);
//! assert_eq!(outgoing["traceparent"], context.outgoing_trace_parent_header());
//! ```

pub mod carrier;

use tracing::trace;

use crate::propagation::carrier::{Extractor, Injector};
use crate::trace_context::TraceContext;
use crate::traceparent::TRACEPARENT_KEY;

pub trait Propagator {
    /// Makes `context` a child of the context found in `carrier`.
    ///
    /// Returns `false`, leaving `context` untouched, when the carrier holds no
    /// header for this propagator. A present but malformed header returns
    /// `true` and leaves `context` in its zero state.
    fn extract(&self, carrier: &dyn Extractor, context: &mut TraceContext) -> bool;

    /// Writes the outgoing header of `context` into `carrier`.
    fn inject(&self, context: &TraceContext, carrier: &mut dyn Injector);
}

/// W3C `traceparent` propagator.
#[derive(Clone, Copy, Debug, Default)]
pub struct TraceContextPropagator;

impl Propagator for TraceContextPropagator {
    fn extract(&self, carrier: &dyn Extractor, context: &mut TraceContext) -> bool {
        let Some(header) = carrier.get(TRACEPARENT_KEY) else {
            trace!("No `{TRACEPARENT_KEY}` found in carrier");
            return false;
        };

        context.as_child_of(header);
        true
    }

    fn inject(&self, context: &TraceContext, carrier: &mut dyn Injector) {
        if !context.has_content() {
            trace!("Not injecting `{TRACEPARENT_KEY}` for an empty trace context");
            return;
        }

        carrier.set(TRACEPARENT_KEY, context.outgoing_trace_parent_header());
    }
}
