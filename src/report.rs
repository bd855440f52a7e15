//! # Benchmark reports
//!
//! A [`BenchmarkRecord`] is one timed run of the cycle count over a graph.
//! [`CsvReport`] serialises records through a [`csv::Writer`] as
//! `vertexCount,edgeCount,executionTimeMs,cycleCount` rows; the writer emits
//! the header before the first record.

use std::{
    io::Write,
    time::{Duration, Instant},
};

use serde::{Serialize, Serializer};
use tracing::info;

use crate::{cycle::count_cycles, graph::Graph, weight::EdgeWeight};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BenchmarkRecord {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub execution_time: Duration,
    pub cycle_count: usize,
}

impl BenchmarkRecord {
    /// Times [`count_cycles`] over `graph`.
    pub fn measure<W: EdgeWeight>(graph: &Graph<W>) -> Self {
        let start = Instant::now();
        let cycle_count = count_cycles(graph);
        let execution_time = start.elapsed();

        let record = BenchmarkRecord {
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            execution_time,
            cycle_count,
        };
        info!(
            vertices = record.vertex_count,
            edges = record.edge_count,
            ms = record.execution_time_ms(),
            cycles = record.cycle_count,
            "benchmark run"
        );
        record
    }

    pub fn execution_time_ms(&self) -> f64 {
        self.execution_time.as_secs_f64() * 1000.0
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CsvRow {
    vertex_count: usize,
    edge_count: usize,
    #[serde(serialize_with = "millis")]
    execution_time_ms: f64,
    cycle_count: usize,
}

impl From<&BenchmarkRecord> for CsvRow {
    fn from(record: &BenchmarkRecord) -> Self {
        CsvRow {
            vertex_count: record.vertex_count,
            edge_count: record.edge_count,
            execution_time_ms: record.execution_time_ms(),
            cycle_count: record.cycle_count,
        }
    }
}

fn millis<S: Serializer>(ms: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&format_args!("{ms:.3}"))
}

#[derive(Debug)]
pub struct CsvReport<Wr: Write> {
    writer: csv::Writer<Wr>,
}

impl<Wr: Write> CsvReport<Wr> {
    pub fn new(writer: Wr) -> Self {
        CsvReport {
            writer: csv::Writer::from_writer(writer),
        }
    }

    pub fn write_record(&mut self, record: &BenchmarkRecord) -> csv::Result<()> {
        self.writer.serialize(CsvRow::from(record))
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }

    /// Flushes and returns the underlying writer.
    pub fn into_inner(self) -> csv::Result<Wr> {
        self.writer
            .into_inner()
            .map_err(|err| err.into_error().into())
    }
}
