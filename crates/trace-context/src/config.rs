// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Sampling configuration for root spans.
//!
//! # Configuration
//!
//! The sample rate can be set via:
//! - **Environment variable**: `DD_TRACE_SAMPLE_RATE=0.25`
//! - **Config file** (any serde format): `sample_rate: 0.25`
//! - **Programmatically**: `Config { sample_rate: 0.25 }`
//!
//! # Default
//!
//! Invalid values are logged and replaced by the default rate of `1.0`, so a
//! bad setting never prevents tracing from starting.

use std::env::VarError;

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::error;

use crate::sampler::{ConstantSampler, ProbabilitySampler, Sampler};

/// Environment variable holding the sample rate.
pub const SAMPLE_RATE_ENV: &str = "DD_TRACE_SAMPLE_RATE";

const DEFAULT_SAMPLE_RATE: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fraction of root spans to record, in `[0.0, 1.0]`.
    #[serde(deserialize_with = "deserialize_sample_rate")]
    pub sample_rate: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }
}

impl Config {
    /// Reads [`SAMPLE_RATE_ENV`], falling back to defaults.
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var(SAMPLE_RATE_ENV) {
            Ok(value) => Self {
                sample_rate: parse_sample_rate(&value),
            },
            Err(VarError::NotPresent) => Self::default(),
            Err(VarError::NotUnicode(value)) => {
                error!("Invalid sample rate {value:?}: not valid UTF-8, using {DEFAULT_SAMPLE_RATE}");
                Self::default()
            }
        }
    }

    /// Builds the sampler for root spans.
    ///
    /// # Example
    ///
    /// ```
    /// use datadog_trace_context::config::Config;
    /// use datadog_trace_context::Sampler;
    ///
    /// let sampler = Config { sample_rate: 0.0 }.sampler();
    /// assert!(!sampler.decide());
    /// ```
    #[must_use]
    pub fn sampler(self) -> Box<dyn Sampler + Send + Sync> {
        if self.sample_rate >= 1.0 {
            Box::new(ConstantSampler::of(true))
        } else if self.sample_rate <= 0.0 {
            Box::new(ConstantSampler::of(false))
        } else {
            Box::new(ProbabilitySampler::new(self.sample_rate))
        }
    }
}

fn parse_sample_rate(value: &str) -> f64 {
    match value.trim().parse::<f64>() {
        Ok(rate) => validate_sample_rate(rate),
        Err(e) => {
            error!("Invalid sample rate '{value}': {e}, using {DEFAULT_SAMPLE_RATE}");
            DEFAULT_SAMPLE_RATE
        }
    }
}

fn validate_sample_rate(rate: f64) -> f64 {
    if (0.0..=1.0).contains(&rate) {
        rate
    } else {
        error!("Sample rate {rate} is outside [0.0, 1.0], using {DEFAULT_SAMPLE_RATE}");
        DEFAULT_SAMPLE_RATE
    }
}

/// Accepts a number or a numeric string; anything else falls back to the default.
fn deserialize_sample_rate<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;

    match value {
        Value::Number(n) => match n.as_f64() {
            Some(rate) => Ok(validate_sample_rate(rate)),
            None => Ok(DEFAULT_SAMPLE_RATE),
        },
        Value::String(s) => Ok(parse_sample_rate(&s)),
        other => {
            error!("Expected a number for sample rate, got {other:?}");
            Ok(DEFAULT_SAMPLE_RATE)
        }
    }
}
