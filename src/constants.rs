//! Constants for the legal-status field format
//!
//! This module contains the delimiter characters, field labels, and
//! description sub-field markers that define the semi-structured format,
//! plus the default missing-value markers recognized on input.

// =============================================================================
// Structural Delimiters
// =============================================================================

/// Separator between legal-status blocks in the raw field
pub const BLOCK_SEPARATOR: char = '#';

/// Full-width colon separating a field label from its value on a block line
///
/// Distinct from the half-width colon used inside description sub-field
/// markers; lines without this character carry no recognizable field.
pub const LABEL_SEPARATOR: char = '：';

/// Separator between sub-field parts inside a description value
pub const SUBFIELD_SEPARATOR: char = ';';

// =============================================================================
// Top-Level Field Labels
// =============================================================================

/// Labels recognized on `label：value` lines within a status block
pub mod labels {
    /// Publication date of the legal-status announcement
    pub const ANNOUNCEMENT_DATE: &str = "法律状态公告日";

    /// Legal-status label (e.g. granted or transferred)
    pub const STATUS: &str = "法律状态";

    /// Free-text description, itself a `;`-delimited sub-language
    pub const DESCRIPTION: &str = "描述信息";
}

// =============================================================================
// Description Sub-Field Markers
// =============================================================================

/// Markers identifying sub-fields embedded in a description value
///
/// Each marker ends in a half-width colon; the sub-value is the text between
/// the marker and the next `;` (or end of the description).
pub mod markers {
    /// Main IPC classification code
    pub const IPC_MAIN_CLASS: &str = "IPC(主分类):";

    /// Changed item in a rights-holder change entry (repeatable)
    pub const CHANGE_ITEM: &str = "变更事项:";

    /// Rights holder before the change (repeatable)
    pub const PRIOR_HOLDER: &str = "变更前权利人:";

    /// Rights holder after the change (repeatable)
    pub const SUBSEQUENT_HOLDER: &str = "变更后权利人:";

    /// Date the registered change took effect
    pub const REGISTRATION_EFFECTIVE_DATE: &str = "登记生效日:";

    /// Publication date of the original grant
    pub const GRANT_ANNOUNCEMENT_DATE: &str = "授权公告日:";
}

// =============================================================================
// Missing-Value Handling
// =============================================================================

/// Default markers treated as "no value provided" by tabular loaders
///
/// Whole-field values equal to one of these (after trimming) parse to an
/// empty record sequence, exactly like an empty string. The set is
/// overridable through [`crate::config::ParserConfig`].
pub const DEFAULT_MISSING_VALUE_MARKERS: &[&str] = &["NA", "NaN", "nan", "null", "NULL", "None"];
