// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! # Datadog Trace Context
//!
//! W3C `traceparent` propagation built around a mutable, reusable
//! [`TraceContext`].
//!
//! ## Overview
//!
//! A [`TraceContext`] holds the trace id, the span's own id, its parent id and
//! the sampling flags. It is created as a root span (consulting a [`Sampler`])
//! or as the child of an incoming header, serialized into the header sent
//! downstream, and reset to be reused by the next execution.
//!
//! ```
//! use datadog_trace_context::TraceContext;
//!
//! let mut context = TraceContext::new();
//! context.as_child_of("00-0af7651916cd43dd8448eb211c80319c-b9c7c989f97918e1-02");
//!
//! let outgoing = context.outgoing_trace_parent_header();
//! assert_eq!(outgoing, format!("00-0af7651916cd43dd8448eb211c80319c-{}-02", context.id()));
//!
//! context.reset_state();
//! assert_eq!(
//!     context.incoming_trace_parent_header(),
//!     "00-00000000000000000000000000000000-0000000000000000-00"
//! );
//! ```
//!
//! ## Modules
//!
//! - [`trace_context`]: the context itself
//! - [`traceparent`]: header parsing and serialization
//! - [`id`], [`flags`]: identifier and flag value types
//! - [`id_generator`]: lock-free random id generation
//! - [`sampler`]: root span sampling decision
//! - [`propagation`]: carrier-based extraction and injection
//! - [`config`]: sampling configuration

#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(unused_extern_crates)]
#![deny(unused_allocation)]
#![deny(unused_assignments)]
#![deny(unused_comparisons)]
#![allow(missing_docs)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod flags;
pub mod id;
pub mod id_generator;
pub mod propagation;
pub mod sampler;
pub mod trace_context;
pub mod traceparent;

pub use flags::TraceFlags;
pub use id::{SpanId, TraceId};
pub use sampler::{ConstantSampler, ProbabilitySampler, Sampler};
pub use trace_context::TraceContext;
