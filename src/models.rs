//! Data models for legal-status extraction
//!
//! This module contains the record structure produced for each legal-status
//! event and the typed labels recognized on block lines. Every record field
//! is optional: the input format is informal and a block populates only what
//! its lines and description actually carry.

use crate::constants::labels;
use crate::error::LegalStatusError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// =============================================================================
// Status Record
// =============================================================================

/// One historical legal-status event extracted from a status block
///
/// Scalar fields are absent until the matching line or description marker is
/// found; the three list fields accumulate one entry per marker occurrence,
/// in source order. The lists are independently ordered: the format pairs
/// them by convention only, and no index correspondence is enforced.
///
/// Serialized form is a mapping containing only populated keys (absent
/// scalars and empty lists are omitted).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusRecord {
    /// Publication date token of the status announcement, kept raw
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub announcement_date: Option<String>,

    /// Status label token, kept raw
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub status: Option<String>,

    /// Verbatim description text, also mined for the sub-fields below
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,

    /// Main IPC classification code from the description (last match wins)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ipc_main_class: Option<String>,

    /// Changed items from holder-change entries, in order of appearance
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub change_items: Vec<String>,

    /// Rights holders before each change, in order of appearance
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub prior_holders: Vec<String>,

    /// Rights holders after each change, in order of appearance
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub subsequent_holders: Vec<String>,

    /// Date the registered change took effect (last match wins)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub registration_effective_date: Option<String>,

    /// Publication date of the original grant (last match wins)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub grant_announcement_date: Option<String>,
}

impl StatusRecord {
    /// Check whether no field was populated
    ///
    /// A scalar set to an empty string still counts as populated; only a
    /// record with every scalar absent and every list empty is dropped from
    /// parser output.
    pub fn is_empty(&self) -> bool {
        self.announcement_date.is_none()
            && self.status.is_none()
            && self.description.is_none()
            && self.ipc_main_class.is_none()
            && self.change_items.is_empty()
            && self.prior_holders.is_empty()
            && self.subsequent_holders.is_empty()
            && self.registration_effective_date.is_none()
            && self.grant_announcement_date.is_none()
    }
}

// =============================================================================
// Field Labels
// =============================================================================

/// Top-level field label recognized on a `label：value` block line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldLabel {
    /// 法律状态公告日
    AnnouncementDate,
    /// 法律状态
    Status,
    /// 描述信息
    Description,
}

impl FromStr for FieldLabel {
    type Err = LegalStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            labels::ANNOUNCEMENT_DATE => Ok(FieldLabel::AnnouncementDate),
            labels::STATUS => Ok(FieldLabel::Status),
            labels::DESCRIPTION => Ok(FieldLabel::Description),
            other => Err(LegalStatusError::UnrecognisedLabel {
                label: other.to_string(),
            }),
        }
    }
}
