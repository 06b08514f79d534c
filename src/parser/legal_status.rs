//! Core legal-status parser implementation
//!
//! This module provides the parse orchestration: missing-input handling,
//! block splitting on `#`, per-block extraction, and the bookkeeping of what
//! was kept and what was dropped.

use tracing::debug;

use super::record::parse_status_block;
use super::stats::{ParseResult, ParseStats};
use crate::config::ParserConfig;
use crate::constants::BLOCK_SEPARATOR;
use crate::models::StatusRecord;

/// Parser for the legal-status history field of a patent record
///
/// The parser is a pure function of its input plus configuration: it holds
/// no state between calls and is safe to share across callers.
#[derive(Debug, Clone, Default)]
pub struct LegalStatusParser {
    config: ParserConfig,
}

impl LegalStatusParser {
    /// Create a parser with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with a custom configuration
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a raw field value into records with statistics
    ///
    /// Missing input (empty, whitespace, or a configured missing-value
    /// marker) yields an empty result; this is not an error. Blocks in which
    /// no field is recognized are dropped and counted in the statistics.
    pub fn parse(&self, raw: &str) -> ParseResult {
        let mut stats = ParseStats::new();
        let mut records = Vec::new();

        if self.config.is_missing_value(raw) {
            debug!("Field value is missing, nothing to parse");
            return ParseResult { records, stats };
        }

        for block in raw.split(BLOCK_SEPARATOR) {
            let block = block.trim();
            if block.is_empty() {
                continue;
            }
            stats.blocks_total += 1;

            let record = parse_status_block(block);
            if record.is_empty() {
                stats.blocks_skipped += 1;
                debug!("Skipped block {}: no recognized fields", stats.blocks_total);
            } else {
                records.push(record);
                stats.records_parsed += 1;
            }
        }

        debug!(
            "Parsed {} records from {} blocks ({} skipped)",
            stats.records_parsed, stats.blocks_total, stats.blocks_skipped
        );

        ParseResult { records, stats }
    }
}

/// Parse a raw field value with the default configuration
///
/// Convenience wrapper returning only the extracted records, in block order.
pub fn parse_legal_status(raw: &str) -> Vec<StatusRecord> {
    LegalStatusParser::new().parse(raw).records
}
