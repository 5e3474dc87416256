// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use lwcbench::{MemorySink, MonotonicClock, NullProbe, RunPlan, Runner, SystemAllocator};
use lwcbench_cipher::ROSTER;
use lwcbench_rand::SeededEntropySource;

fn benchmark_slot(c: &mut Criterion) {
    let mut group = c.benchmark_group("slot");
    let clock = MonotonicClock::new();

    for algorithm in ROSTER {
        let plan = RunPlan::new(1, &[algorithm]);
        let mut entropy = SeededEntropySource::new(0x5107);

        group.bench_function(algorithm.name().to_lowercase(), |b| {
            b.iter(|| {
                let mut runner = Runner::new(&SystemAllocator, &clock, &NullProbe);
                let mut sink = MemorySink::new();
                runner
                    .run(black_box(&plan), &mut entropy, &mut sink)
                    .expect("run failed");
                sink
            });
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_slot);
criterion_main!(benches);
