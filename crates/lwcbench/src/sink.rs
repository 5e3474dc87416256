// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Reporting boundary and the two built-in sinks.

use std::io::Write;

use lwcbench_cipher::{Algorithm, ROSTER};

use crate::error::{ContextError, SinkError};
use crate::record::SinkRecord;

/// Consumer of benchmark results.
pub trait ReportSink {
    /// Receives one measured run.
    fn report(&mut self, record: &SinkRecord) -> Result<(), SinkError>;

    /// Receives a slot whose context could not be built.
    fn report_skipped(
        &mut self,
        iteration: usize,
        algorithm: Algorithm,
        error: &ContextError,
    ) -> Result<(), SinkError> {
        let _ = (iteration, algorithm, error);
        Ok(())
    }

    /// Called once after the last slot.
    fn finish(&mut self) -> Result<(), SinkError> {
        Ok(())
    }
}

/// A slot that produced no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkippedSlot {
    pub iteration: usize,
    pub algorithm: Algorithm,
    pub error: ContextError,
}

/// Collects everything it receives.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Vec<SinkRecord>,
    skipped: Vec<SkippedSlot>,
    finished: bool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[SinkRecord] {
        &self.records
    }

    pub fn skipped(&self) -> &[SkippedSlot] {
        &self.skipped
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl ReportSink for MemorySink {
    fn report(&mut self, record: &SinkRecord) -> Result<(), SinkError> {
        self.records.push(record.clone());
        Ok(())
    }

    fn report_skipped(
        &mut self,
        iteration: usize,
        algorithm: Algorithm,
        error: &ContextError,
    ) -> Result<(), SinkError> {
        self.skipped.push(SkippedSlot {
            iteration,
            algorithm,
            error: *error,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<(), SinkError> {
        self.finished = true;
        Ok(())
    }
}

const NAME_WIDTH: usize = 15;
const TIME_WIDTH: usize = 16;
const RAM_WIDTH: usize = 17;
const PHASE_WIDTH: usize = 11;
const RULE_WIDTH: usize = 82;

enum Row {
    Measured(SinkRecord),
    Skipped {
        algorithm: Algorithm,
        error: ContextError,
    },
}

/// Fixed-width performance table, written to `W` on [`ReportSink::finish`].
///
/// Rows follow arrival order. A per-algorithm summary with averages over the
/// measured runs follows the table unless disabled.
pub struct TableSink<W: Write> {
    writer: W,
    rows: Vec<Row>,
    summary: bool,
}

impl<W: Write> TableSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            rows: Vec::new(),
            summary: true,
        }
    }

    pub fn with_summary(mut self, summary: bool) -> Self {
        self.summary = summary;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_table(&mut self) -> std::io::Result<()> {
        let rule = "-".repeat(RULE_WIDTH);

        writeln!(self.writer, "\n--- Algorithm Performance Report ---")?;
        writeln!(self.writer, "{rule}")?;
        writeln!(
            self.writer,
            "{:<NAME_WIDTH$}| {:<TIME_WIDTH$}| {:<RAM_WIDTH$}| {:<PHASE_WIDTH$}| {:<PHASE_WIDTH$}| OK",
            "Algorithm", "Exec. Time (us)", "RAM Used (bytes)", "Enc (us)", "Dec (us)",
        )?;
        writeln!(self.writer, "{rule}")?;

        for row in &self.rows {
            match row {
                Row::Measured(record) => writeln!(
                    self.writer,
                    "{:<NAME_WIDTH$}| {:<TIME_WIDTH$}| {:<RAM_WIDTH$}| {:<PHASE_WIDTH$}| {:<PHASE_WIDTH$}| {}",
                    record.algorithm_name,
                    record.total_micros,
                    record.memory_delta_bytes,
                    record.encrypt_micros,
                    record.decrypt_micros,
                    if record.success { "yes" } else { "NO" },
                )?,
                Row::Skipped { algorithm, error } => writeln!(
                    self.writer,
                    "{:<NAME_WIDTH$}| skipped: {error}",
                    algorithm.name(),
                )?,
            }
        }

        writeln!(self.writer, "{rule}")
    }

    fn write_summary(&mut self) -> std::io::Result<()> {
        writeln!(self.writer, "\n--- Averages per Algorithm ---")?;
        writeln!(
            self.writer,
            "{:<NAME_WIDTH$}| {:<6}| {:<8}| {:<21}| {:<27}| {:<9}| Kind",
            "Algorithm", "Runs", "Skipped", "Avg. Exec. Time (us)", "Approx. Heap RAM Used (B)", "Verified",
        )?;

        for algorithm in ROSTER {
            let summary = AlgorithmSummary::collect(algorithm, &self.rows);
            if summary.runs == 0 && summary.skipped == 0 {
                continue;
            }

            let verified = format!("{}/{}", summary.verified, summary.runs);
            writeln!(
                self.writer,
                "{:<NAME_WIDTH$}| {:<6}| {:<8}| {:<21}| {:<27}| {:<9}| {}",
                algorithm.name(),
                summary.runs,
                summary.skipped,
                summary.average_micros(),
                summary.average_memory(),
                verified,
                algorithm.descriptor().kind.label(),
            )?;
        }

        Ok(())
    }
}

impl<W: Write> ReportSink for TableSink<W> {
    fn report(&mut self, record: &SinkRecord) -> Result<(), SinkError> {
        self.rows.push(Row::Measured(record.clone()));
        Ok(())
    }

    fn report_skipped(
        &mut self,
        _iteration: usize,
        algorithm: Algorithm,
        error: &ContextError,
    ) -> Result<(), SinkError> {
        self.rows.push(Row::Skipped {
            algorithm,
            error: *error,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<(), SinkError> {
        self.write_table()?;
        if self.summary {
            self.write_summary()?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> core::fmt::Debug for TableSink<W> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TableSink")
            .field("rows", &self.rows.len())
            .field("summary", &self.summary)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct AlgorithmSummary {
    pub(crate) runs: u64,
    pub(crate) skipped: u64,
    pub(crate) verified: u64,
    pub(crate) total_micros: u64,
    pub(crate) total_memory: i64,
}

impl AlgorithmSummary {
    fn collect(algorithm: Algorithm, rows: &[Row]) -> Self {
        let mut summary = Self::default();

        for row in rows {
            match row {
                Row::Measured(record) if record.algorithm_name == algorithm.name() => {
                    summary.runs += 1;
                    summary.verified += u64::from(record.success);
                    summary.total_micros = summary.total_micros.saturating_add(record.total_micros);
                    summary.total_memory = summary
                        .total_memory
                        .saturating_add(record.memory_delta_bytes as i64);
                }
                Row::Skipped { algorithm: skipped, .. } if *skipped == algorithm => {
                    summary.skipped += 1;
                }
                _ => {}
            }
        }

        summary
    }

    pub(crate) fn average_micros(&self) -> u64 {
        self.total_micros.checked_div(self.runs).unwrap_or(0)
    }

    pub(crate) fn average_memory(&self) -> i64 {
        let runs = i64::try_from(self.runs).unwrap_or(i64::MAX);
        self.total_memory.checked_div(runs).unwrap_or(0)
    }
}
