//! Execution mode configuration for the segment orchestrator.
//!
//! ## Purpose
//!
//! This module defines the `ExecutionMode` enum used to select between
//! sequential and parallel segment processing at runtime. Both modes run the
//! same pipeline and produce identical output; the choice only affects how
//! segment work is scheduled.
//!
//! ## Key concepts
//!
//! * **Sequential**: Segments are sieved one after another in ascending order.
//! * **Parallel**: Segments are fanned out across a rayon worker pool and
//!   rejoined in segment order (requires the `parallel` feature).
//!
//! ## Invariants
//!
//! * The default mode is always `Sequential`.
//! * Output ordering is identical across modes.

use std::fmt::{Display, Formatter, Result};

/// Scheduling mode for segment processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// Sieve segments one at a time in ascending order.
    #[default]
    Sequential,

    /// Fan segments out across a worker pool, rejoining in segment order.
    /// Falls back to sequential execution when the `parallel` feature is
    /// disabled.
    Parallel,
}

impl ExecutionMode {
    /// Human-readable mode name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sequential => "Sequential",
            Self::Parallel => "Parallel",
        }
    }
}

impl Display for ExecutionMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.name())
    }
}
