//! Description sub-field extraction
//!
//! The description value is a sub-language of its own: `;`-delimited parts
//! in which six fixed markers introduce embedded data points, each ending in
//! a half-width colon. Three of the markers repeat once per holder-change
//! entry and accumulate into lists; the other three are scalars where the
//! last occurrence wins.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::constants::{SUBFIELD_SEPARATOR, markers};
use crate::error::LegalStatusError;
use crate::models::StatusRecord;

static IPC_MAIN_CLASS_RE: LazyLock<Regex> =
    LazyLock::new(|| marker_pattern(markers::IPC_MAIN_CLASS));
static CHANGE_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| marker_pattern(markers::CHANGE_ITEM));
static PRIOR_HOLDER_RE: LazyLock<Regex> = LazyLock::new(|| marker_pattern(markers::PRIOR_HOLDER));
static SUBSEQUENT_HOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| marker_pattern(markers::SUBSEQUENT_HOLDER));
static REGISTRATION_EFFECTIVE_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| marker_pattern(markers::REGISTRATION_EFFECTIVE_DATE));
static GRANT_ANNOUNCEMENT_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| marker_pattern(markers::GRANT_ANNOUNCEMENT_DATE));

/// Build the extraction pattern for one marker: the marker text followed by
/// everything up to the next `;` boundary
fn marker_pattern(marker: &str) -> Regex {
    Regex::new(&format!("{}([^;]+)", regex::escape(marker)))
        .expect("marker extraction pattern is valid")
}

/// Mine a description value for embedded sub-fields
///
/// Splits on `;` and tests each part against the six markers in priority
/// order. List-valued sub-fields append per occurrence, preserving the order
/// markers appear in the source text; scalar sub-fields overwrite so that
/// the last occurrence wins. Parts matching no marker are ignored.
pub fn extract_description_fields(description: &str, record: &mut StatusRecord) {
    for part in description.split(SUBFIELD_SEPARATOR) {
        if part.contains(markers::IPC_MAIN_CLASS) {
            if let Some(value) = capture_value(&IPC_MAIN_CLASS_RE, markers::IPC_MAIN_CLASS, part) {
                record.ipc_main_class = Some(value);
            }
        } else if part.contains(markers::CHANGE_ITEM) {
            if let Some(value) = capture_value(&CHANGE_ITEM_RE, markers::CHANGE_ITEM, part) {
                record.change_items.push(value);
            }
        } else if part.contains(markers::PRIOR_HOLDER) {
            if let Some(value) = capture_value(&PRIOR_HOLDER_RE, markers::PRIOR_HOLDER, part) {
                record.prior_holders.push(value);
            }
        } else if part.contains(markers::SUBSEQUENT_HOLDER) {
            if let Some(value) = capture_value(&SUBSEQUENT_HOLDER_RE, markers::SUBSEQUENT_HOLDER, part)
            {
                record.subsequent_holders.push(value);
            }
        } else if part.contains(markers::REGISTRATION_EFFECTIVE_DATE) {
            if let Some(value) = capture_value(
                &REGISTRATION_EFFECTIVE_DATE_RE,
                markers::REGISTRATION_EFFECTIVE_DATE,
                part,
            ) {
                record.registration_effective_date = Some(value);
            }
        } else if part.contains(markers::GRANT_ANNOUNCEMENT_DATE) {
            if let Some(value) = capture_value(
                &GRANT_ANNOUNCEMENT_DATE_RE,
                markers::GRANT_ANNOUNCEMENT_DATE,
                part,
            ) {
                record.grant_announcement_date = Some(value);
            }
        }
    }
}

/// Extract the trimmed text following a marker within one part
///
/// Returns `None` when the marker is present but nothing follows it; that
/// sub-field alone is skipped, the rest of the description still parses.
fn capture_value(re: &Regex, marker: &str, part: &str) -> Option<String> {
    match re.captures(part).and_then(|caps| caps.get(1)) {
        Some(matched) => Some(matched.as_str().trim().to_string()),
        None => {
            debug!(
                "Skipping sub-field: {}",
                LegalStatusError::EmptyMarkerValue {
                    marker: marker.to_string(),
                }
            );
            None
        }
    }
}
