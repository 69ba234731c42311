use std::fmt;

use crate::benchmark::BenchmarkRecord;

/// Distributional summary over a set of per-invocation benchmark records.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateStats {
    pub samples: usize,
    pub mean_expanded: f64,
    pub min_expanded: usize,
    pub max_expanded: usize,
    pub mean_time_ms: f64,
    pub min_time_ms: f64,
    pub max_time_ms: f64,
}

impl AggregateStats {
    /// None when there is nothing to aggregate.
    pub fn from_records(records: &[BenchmarkRecord]) -> Option<Self> {
        if records.is_empty() {
            return None;
        }

        let samples = records.len();
        let total_expanded: usize = records.iter().map(|r| r.expanded_nodes).sum();
        let total_time_ms: f64 = records.iter().map(|r| r.time_ms).sum();

        let mut min_expanded = usize::MAX;
        let mut max_expanded = 0;
        let mut min_time_ms = f64::INFINITY;
        let mut max_time_ms: f64 = 0.0;
        for record in records {
            min_expanded = min_expanded.min(record.expanded_nodes);
            max_expanded = max_expanded.max(record.expanded_nodes);
            min_time_ms = min_time_ms.min(record.time_ms);
            max_time_ms = max_time_ms.max(record.time_ms);
        }

        Some(AggregateStats {
            samples,
            mean_expanded: total_expanded as f64 / samples as f64,
            min_expanded,
            max_expanded,
            mean_time_ms: total_time_ms / samples as f64,
            min_time_ms,
            max_time_ms,
        })
    }
}

impl fmt::Display for AggregateStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Search invocations: {}", self.samples)?;
        writeln!(
            f,
            "Expanded nodes - avg: {:.1}, min: {}, max: {}",
            self.mean_expanded, self.min_expanded, self.max_expanded
        )?;
        writeln!(
            f,
            "Execution time - avg: {:.2}ms, min: {:.2}ms, max: {:.2}ms",
            self.mean_time_ms, self.min_time_ms, self.max_time_ms
        )?;
        Ok(())
    }
}
