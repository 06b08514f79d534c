//! Parsing statistics and result structures
//!
//! This module provides types for reporting how much of a raw field survived
//! parsing. Blocks that yield no recognized field are dropped by design, so
//! they are counted here rather than collected as errors.

use crate::models::StatusRecord;

/// Parsing result with extracted records and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Records extracted from the field, in block order
    pub records: Vec<StatusRecord>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Number of non-empty blocks found in the field
    pub blocks_total: usize,

    /// Number of blocks that produced a record
    pub records_parsed: usize,

    /// Number of blocks dropped because no field was recognized
    pub blocks_skipped: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            blocks_total: 0,
            records_parsed: 0,
            blocks_skipped: 0,
        }
    }

    /// Percentage of blocks that produced a record
    pub fn retention_rate(&self) -> f64 {
        if self.blocks_total == 0 {
            0.0
        } else {
            (self.records_parsed as f64 / self.blocks_total as f64) * 100.0
        }
    }

    /// Check whether every block produced a record
    pub fn is_complete(&self) -> bool {
        self.blocks_skipped == 0
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
