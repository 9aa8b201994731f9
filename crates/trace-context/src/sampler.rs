// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Sampling decision for root spans.
//!
//! A [`Sampler`] is consulted exactly once, when a
//! [`TraceContext`](crate::TraceContext) starts a new trace. Children inherit
//! their parent's decision and never consult it.

use rand::Rng;

pub trait Sampler {
    /// Whether the root span about to be created should be recorded.
    fn decide(&self) -> bool;
}

/// Any `Fn() -> bool` can act as a sampler.
///
/// ```
/// use datadog_trace_context::{Sampler, TraceContext};
///
/// let mut context = TraceContext::new();
/// context.as_root_span(&|| true);
/// assert!(context.is_sampled());
/// ```
impl<F> Sampler for F
where
    F: Fn() -> bool,
{
    fn decide(&self) -> bool {
        self()
    }
}

/// Always returns the same decision.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ConstantSampler(bool);

impl ConstantSampler {
    #[must_use]
    pub const fn of(sampled: bool) -> Self {
        Self(sampled)
    }
}

impl Sampler for ConstantSampler {
    fn decide(&self) -> bool {
        self.0
    }
}

/// Samples a fixed fraction of root spans.
///
/// The rate is clamped to `[0.0, 1.0]`; `NaN` is treated as `1.0`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ProbabilitySampler {
    rate: f64,
}

impl ProbabilitySampler {
    #[must_use]
    pub fn new(rate: f64) -> Self {
        let rate = if rate.is_nan() {
            1.0
        } else {
            rate.clamp(0.0, 1.0)
        };
        Self { rate }
    }

    #[must_use]
    pub fn rate(self) -> f64 {
        self.rate
    }
}

impl Sampler for ProbabilitySampler {
    fn decide(&self) -> bool {
        rand::thread_rng().gen_bool(self.rate)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_constant_sampler() {
        assert!(ConstantSampler::of(true).decide());
        assert!(!ConstantSampler::of(false).decide());
    }

    #[test]
    fn test_probability_sampler_bounds() {
        let always = ProbabilitySampler::new(1.0);
        let never = ProbabilitySampler::new(0.0);
        for _ in 0..1_000 {
            assert!(always.decide());
            assert!(!never.decide());
        }
    }

    #[test]
    fn test_probability_sampler_clamps_rate() {
        assert!((ProbabilitySampler::new(3.0).rate() - 1.0).abs() < f64::EPSILON);
        assert!(ProbabilitySampler::new(-1.0).rate().abs() < f64::EPSILON);
        assert!((ProbabilitySampler::new(f64::NAN).rate() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_probability_sampler_is_roughly_fair() {
        let sampler = ProbabilitySampler::new(0.5);
        let sampled = (0..10_000).filter(|_| sampler.decide()).count();
        assert!((4_000..6_000).contains(&sampled), "sampled {sampled}");
    }

    #[test]
    fn test_closure_sampler() {
        let sampler = || false;
        assert!(!Sampler::decide(&sampler));
    }
}
