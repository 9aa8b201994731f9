// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Random identifier generation.
//!
//! Ids come from the calling thread's own `rand::thread_rng()`, so concurrent
//! callers never share a lock. The generator is not required to be
//! cryptographically secure, only uniform. Zero is reserved and is rerolled.

use rand::Rng;

/// Returns a uniformly distributed, non-zero 128-bit trace id.
#[must_use]
pub fn next_trace_id() -> u128 {
    non_zero(|rng| rng.gen::<u128>())
}

/// Returns a uniformly distributed, non-zero 64-bit span id.
#[must_use]
pub fn next_span_id() -> u64 {
    non_zero(|rng| rng.gen::<u64>())
}

fn non_zero<T, F>(mut generate: F) -> T
where
    T: Default + PartialEq,
    F: FnMut(&mut rand::rngs::ThreadRng) -> T,
{
    let mut rng = rand::thread_rng();
    loop {
        let id = generate(&mut rng);
        if id != T::default() {
            return id;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_non_zero_rerolls() {
        let mut calls = 0;
        let id = non_zero(|_| {
            calls += 1;
            if calls < 3 {
                0u64
            } else {
                42
            }
        });
        assert_eq!(id, 42);
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_span_ids_differ() {
        assert_ne!(next_span_id(), next_span_id());
        assert_ne!(next_trace_id(), next_trace_id());
    }
}
