/********************************************************************************
 * Copyright (c) 2026 Contributors to the Eclipse Foundation
 *
 * See the NOTICE file(s) distributed with this work for additional
 * information regarding copyright ownership.
 *
 * This program and the accompanying materials are made available under the
 * terms of the Apache License Version 2.0 which is available at
 * https://www.apache.org/licenses/LICENSE-2.0
 *
 * SPDX-License-Identifier: Apache-2.0
 ********************************************************************************/

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use saga_correlation::benchmark_support::ResolutionFixture;
use std::sync::Arc;
use std::thread;

const HIERARCHY_DEPTH: usize = 6;
const PROPERTIES_PER_LEVEL: usize = 2;
const CONCURRENT_RESOLVERS: usize = 4;
const RESOLUTIONS_PER_RESOLVER: usize = 256;

fn correlation_criterion(c: &mut Criterion) {
    let fixture = ResolutionFixture::new(HIERARCHY_DEPTH, PROPERTIES_PER_LEVEL);

    let warm = fixture.build().expect("resolution fixture should build");
    let count = fixture
        .resolve_count(&warm)
        .expect("warm-up resolution should succeed");
    assert_eq!(count, fixture.expected_count());

    let mut resolution_group = c.benchmark_group("correlation_resolution");
    resolution_group.bench_function("cache_hit", |b| {
        b.iter(|| {
            let count = fixture
                .resolve_count(&warm)
                .expect("cached resolution should succeed");
            black_box(count);
        });
    });
    resolution_group.bench_function("cold_walk", |b| {
        b.iter_batched(
            || fixture.build().expect("resolution fixture should build"),
            |correlations| {
                let count = fixture
                    .resolve_count(&correlations)
                    .expect("cold resolution should succeed");
                black_box(count);
            },
            BatchSize::SmallInput,
        );
    });
    resolution_group.finish();

    let shared = Arc::new(warm);
    let mut concurrent_group = c.benchmark_group("correlation_concurrency");
    concurrent_group.bench_function("shared_cache_hits", |b| {
        b.iter(|| {
            let handles: Vec<_> = (0..CONCURRENT_RESOLVERS)
                .map(|_| {
                    let shared = Arc::clone(&shared);
                    let most_derived = fixture.most_derived();
                    thread::spawn(move || {
                        let mut total = 0;
                        for _ in 0..RESOLUTIONS_PER_RESOLVER {
                            total += shared
                                .for_message_type(&most_derived)
                                .map(|resolved| resolved.len())
                                .unwrap_or_default();
                        }
                        total
                    })
                })
                .collect();

            for handle in handles {
                black_box(handle.join().expect("resolver thread should not panic"));
            }
        });
    });
    concurrent_group.finish();
}

criterion_group!(benches, correlation_criterion);
criterion_main!(benches);
