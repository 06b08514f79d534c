//! Per-block field extraction
//!
//! This module handles one trimmed status block: line splitting, label/value
//! recognition on the full-width colon, and dispatch into the record fields.
//! Lines that carry no separator or an unknown label are skipped.

use tracing::debug;

use super::description::extract_description_fields;
use crate::constants::{LABEL_SEPARATOR, SUBFIELD_SEPARATOR};
use crate::models::{FieldLabel, StatusRecord};

/// Extract a record from one trimmed, non-empty status block
///
/// The returned record may be fully empty when no line carried a recognized
/// label; the caller decides whether to keep it.
pub fn parse_status_block(block: &str) -> StatusRecord {
    let mut record = StatusRecord::default();

    for line in block.split('\n') {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        // Only the full-width colon separates a label from its value; the
        // half-width colon belongs to the description sub-language.
        let Some((label, value)) = line.split_once(LABEL_SEPARATOR) else {
            continue;
        };

        let label = label.trim();
        let value = value.trim().trim_end_matches(SUBFIELD_SEPARATOR);

        match label.parse::<FieldLabel>() {
            Ok(FieldLabel::AnnouncementDate) => {
                record.announcement_date = Some(value.to_string());
            }
            Ok(FieldLabel::Status) => {
                record.status = Some(value.to_string());
            }
            Ok(FieldLabel::Description) => {
                record.description = Some(value.to_string());
                extract_description_fields(value, &mut record);
            }
            Err(e) => {
                debug!("Skipping line: {}", e);
            }
        }
    }

    record
}
