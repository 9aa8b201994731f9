// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashSet;
use std::thread;

use datadog_trace_context::id_generator::{next_span_id, next_trace_id};
use datadog_trace_context::{ConstantSampler, TraceContext};

const THREADS: usize = 8;
const IDS_PER_THREAD: usize = 12_500;

#[test]
fn concurrent_span_ids_are_unique() {
    let handles: Vec<_> = (0..THREADS)
        .map(|_| thread::spawn(|| (0..IDS_PER_THREAD).map(|_| next_span_id()).collect::<Vec<_>>()))
        .collect();

    let mut seen = HashSet::with_capacity(THREADS * IDS_PER_THREAD);
    for handle in handles {
        for id in handle.join().expect("generator thread panicked") {
            assert_ne!(id, 0);
            assert!(seen.insert(id), "duplicate span id {id:016x}");
        }
    }
    assert_eq!(seen.len(), THREADS * IDS_PER_THREAD);
}

#[test]
fn concurrent_trace_ids_are_unique() {
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            thread::spawn(|| (0..IDS_PER_THREAD).map(|_| next_trace_id()).collect::<Vec<_>>())
        })
        .collect();

    let mut seen = HashSet::with_capacity(THREADS * IDS_PER_THREAD);
    for handle in handles {
        for id in handle.join().expect("generator thread panicked") {
            assert_ne!(id, 0);
            assert!(seen.insert(id), "duplicate trace id {id:032x}");
        }
    }
}

#[test]
fn one_context_per_thread() {
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            thread::spawn(|| {
                let mut context = TraceContext::new();
                (0..1_000)
                    .map(|_| {
                        context.reset_state();
                        context.as_root_span(&ConstantSampler::of(true));
                        context.trace_id()
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut seen = HashSet::new();
    for handle in handles {
        for id in handle.join().expect("context thread panicked") {
            assert!(seen.insert(id));
        }
    }
}
