//! Statistics collection for NegaMax searches
//!
//! This module provides structures for collecting and reporting statistics
//! about a single best-move search.

use std::time::Duration;

/// Statistics collected during a NegaMax search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchStatistics {
    /// Number of nodes entered, the root included
    pub nodes: u64,

    /// Number of nodes scored with the static evaluation
    pub leaf_evaluations: u64,

    /// Number of times the remaining siblings were skipped after a beta cutoff
    pub cutoffs: u64,

    /// Ply limit the search ran with
    pub depth: usize,

    /// Value of the root position for the side to move
    pub best_value: f64,

    /// Total time spent searching
    pub total_time: Duration,
}

impl SearchStatistics {
    /// Creates a new, empty statistics object
    pub fn new() -> Self {
        SearchStatistics {
            nodes: 0,
            leaf_evaluations: 0,
            cutoffs: 0,
            depth: 0,
            best_value: f64::NEG_INFINITY,
            total_time: Duration::from_secs(0),
        }
    }

    /// Returns the number of nodes searched per second
    pub fn nodes_per_second(&self) -> f64 {
        if self.total_time.as_secs_f64() <= 0.0 {
            return 0.0;
        }
        self.nodes as f64 / self.total_time.as_secs_f64()
    }

    /// Returns a summary of the statistics as a string
    pub fn summary(&self) -> String {
        format!(
            "NegaMax Search Statistics:\n\
             - Depth: {}\n\
             - Nodes: {}\n\
             - Leaf evaluations: {}\n\
             - Beta cutoffs: {}\n\
             - Best value: {:.4}\n\
             - Total time: {:.3} seconds\n\
             - Nodes per second: {:.1}",
            self.depth,
            self.nodes,
            self.leaf_evaluations,
            self.cutoffs,
            self.best_value,
            self.total_time.as_secs_f64(),
            self.nodes_per_second()
        )
    }
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}
