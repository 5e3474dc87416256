// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Benchmark runner: iterations × roster, one slot at a time.

use tracing::{debug, info, warn};
use zeroize::Zeroizing;

use lwcbench_cipher::{Algorithm, ROSTER};
use lwcbench_rand::EntropySource;

use crate::alloc::BufferAllocator;
use crate::clock::Clock;
use crate::context::Context;
use crate::error::{BenchError, ContextError};
use crate::memory::MemoryProbe;
use crate::oracle::{OracleOutcome, SelfTest};
use crate::record::RunRecord;
use crate::sink::ReportSink;

/// Iteration count and the algorithms each iteration visits, in roster order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPlan {
    iterations: usize,
    algorithms: Vec<Algorithm>,
}

impl RunPlan {
    /// Plan over the given algorithms. Order and duplicates in `algorithms`
    /// do not matter: the plan always follows [`ROSTER`].
    pub fn new(iterations: usize, algorithms: &[Algorithm]) -> Self {
        let mut algorithms = algorithms.to_vec();
        algorithms.sort_by_key(|algorithm| algorithm.roster_index());
        algorithms.dedup();

        Self {
            iterations,
            algorithms,
        }
    }

    /// Plan over the whole roster.
    pub fn full(iterations: usize) -> Self {
        Self::new(iterations, &ROSTER)
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn algorithms(&self) -> &[Algorithm] {
        &self.algorithms
    }

    /// `iterations × algorithms`, or `None` on overflow.
    pub fn slot_count(&self) -> Option<usize> {
        self.iterations.checked_mul(self.algorithms.len())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerState {
    Idle,
    ContextBuilding,
    Measuring,
    Recording,
    Done,
}

/// One cell of the result matrix.
#[derive(Debug)]
pub enum SlotOutcome {
    Measured(RunRecord),
    Skipped {
        iteration: usize,
        algorithm: Algorithm,
        error: ContextError,
    },
}

impl SlotOutcome {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            SlotOutcome::Measured(record) => record.algorithm,
            SlotOutcome::Skipped { algorithm, .. } => *algorithm,
        }
    }

    pub fn record(&self) -> Option<&RunRecord> {
        match self {
            SlotOutcome::Measured(record) => Some(record),
            SlotOutcome::Skipped { .. } => None,
        }
    }
}

/// Drives every slot of a [`RunPlan`] through setup, run, verify and teardown.
pub struct Runner<'a> {
    allocator: &'a dyn BufferAllocator,
    clock: &'a dyn Clock,
    probe: &'a dyn MemoryProbe,
    state: RunnerState,
    #[cfg(test)]
    pub(crate) trace: Vec<RunnerState>,
}

impl<'a> Runner<'a> {
    pub fn new(
        allocator: &'a dyn BufferAllocator,
        clock: &'a dyn Clock,
        probe: &'a dyn MemoryProbe,
    ) -> Self {
        Self {
            allocator,
            clock,
            probe,
            state: RunnerState::Idle,
            #[cfg(test)]
            trace: vec![RunnerState::Idle],
        }
    }

    fn transition(&mut self, next: RunnerState) {
        debug!(from = ?self.state, to = ?next, "runner state");
        self.state = next;

        #[cfg(test)]
        self.trace.push(next);
    }

    /// Runs every slot of `plan`, reporting each to `sink`, then finishes the sink.
    ///
    /// Slots whose context cannot be built are skipped and the run continues.
    /// Returns the result matrix in iteration-major, roster order.
    ///
    /// # Errors
    ///
    /// - [`BenchError::FatalAllocation`] if the result matrix cannot be
    ///   reserved. No slot runs in that case.
    /// - [`BenchError::Sink`] if the sink fails.
    pub fn run<E>(
        &mut self,
        plan: &RunPlan,
        entropy: &mut E,
        sink: &mut dyn ReportSink,
    ) -> Result<Vec<SlotOutcome>, BenchError>
    where
        E: EntropySource + ?Sized,
    {
        let slots = plan
            .slot_count()
            .ok_or(BenchError::FatalAllocation { slots: usize::MAX })?;

        let mut outcomes = Vec::new();
        outcomes
            .try_reserve_exact(slots)
            .map_err(|_| BenchError::FatalAllocation { slots })?;

        info!(
            iterations = plan.iterations(),
            algorithms = plan.algorithms().len(),
            slots,
            "benchmark starting"
        );

        for iteration in 0..plan.iterations() {
            info!(
                iteration = iteration + 1,
                millis = self.clock.millis(),
                "iteration starting"
            );

            for &algorithm in plan.algorithms() {
                let outcome = self.run_slot(iteration, algorithm, entropy, sink)?;
                outcomes.push(outcome);
            }
        }

        self.transition(RunnerState::Done);
        sink.finish()?;

        let skipped = outcomes
            .iter()
            .filter(|outcome| outcome.record().is_none())
            .count();
        info!(measured = outcomes.len() - skipped, skipped, "benchmark done");

        Ok(outcomes)
    }

    fn run_slot<E>(
        &mut self,
        iteration: usize,
        algorithm: Algorithm,
        entropy: &mut E,
        sink: &mut dyn ReportSink,
    ) -> Result<SlotOutcome, BenchError>
    where
        E: EntropySource + ?Sized,
    {
        self.transition(RunnerState::ContextBuilding);

        let context = match Context::create(algorithm, self.allocator, entropy) {
            Ok(context) => context,
            Err(error) => {
                warn!(iteration = iteration + 1, %algorithm, %error, "context setup failed, slot skipped");
                sink.report_skipped(iteration, algorithm, &error)?;
                self.transition(RunnerState::Idle);

                return Ok(SlotOutcome::Skipped {
                    iteration,
                    algorithm,
                    error,
                });
            }
        };

        self.transition(RunnerState::Measuring);

        let mut transform = algorithm.transform();
        let free_before = self.probe.free_bytes();
        let run_start = self.clock.micros();
        let outcome = SelfTest::run(transform.as_mut(), &context, self.clock);
        let run_end = self.clock.micros();
        let free_after = self.probe.free_bytes();

        self.transition(RunnerState::Recording);

        warn_on_failed_round_trip(iteration, algorithm, &outcome);

        let record = RunRecord {
            iteration,
            algorithm,
            run_start,
            encrypt_timestamp: outcome.encrypt_timestamp,
            run_end,
            memory_delta: free_before.saturating_sub(free_after),
            success: outcome.success,
            plaintext: Zeroizing::new(context.plaintext().to_vec()),
            key: Zeroizing::new(context.key().to_vec()),
            artifact: outcome.artifact,
        };

        let sink_record = record.to_sink_record(self.clock);
        debug!(
            iteration = iteration + 1,
            %algorithm,
            total_micros = sink_record.total_micros,
            memory_delta = sink_record.memory_delta_bytes,
            success = sink_record.success,
            "run recorded"
        );
        sink.report(&sink_record)?;

        context.destroy();
        self.transition(RunnerState::Idle);

        Ok(SlotOutcome::Measured(record))
    }
}

pub(crate) fn warn_on_failed_round_trip(
    iteration: usize,
    algorithm: Algorithm,
    outcome: &OracleOutcome,
) {
    if outcome.success {
        return;
    }

    let authenticated = algorithm.descriptor().kind.is_authenticated();
    match &outcome.failure {
        Some(failure) => warn!(
            iteration = iteration + 1,
            %algorithm,
            authenticated,
            %failure,
            "round trip failed"
        ),
        None => warn!(
            iteration = iteration + 1,
            %algorithm,
            authenticated,
            "round trip failed: recovered plaintext differs"
        ),
    }
}

impl core::fmt::Debug for Runner<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Runner")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
