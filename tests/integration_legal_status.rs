//! Integration tests for the legal-status parser public API
//!
//! These tests drive the crate the way a tabular pipeline would: hand the
//! raw field value over, take the records, serialize them onward.

use legal_status_parser::{LegalStatusParser, ParserConfig, parse_legal_status};

/// A field value as delivered by the upstream patent data source
const SAMPLE_FIELD: &str = r#"#法律状态公告日：20120926;
法律状态：授权;
描述信息：授权;

#法律状态公告日：20121219;
法律状态：专利申请权、专利权的转移;
描述信息：专利权的转移IPC(主分类):A41D   1/00;变更事项:专利权人;变更前权利人:辉能科技股份有限公司;变更后权利人:辉能科技股份有限公司;变更事项:地址;变更前权利人:中国台湾台北县五股乡五工路127号4楼;变更后权利人:中国台湾台北县五股乡五工路127号4楼;变更事项:专利权人;变更前权利人:明瑜创新股份有限公司;变更后权利人:英属开曼群岛商辉能控股股份有限公司;登记生效日:20121116;

#法律状态公告日：20220104;
法律状态：专利权有效期届满;
描述信息：专利权有效期届满IPC(主分类):A41D1/00;授权公告日:20120926;"#;

#[test]
fn test_parse_complete_field_end_to_end() {
    let result = LegalStatusParser::new().parse(SAMPLE_FIELD);

    assert_eq!(result.stats.blocks_total, 3);
    assert_eq!(result.stats.records_parsed, 3);
    assert_eq!(result.stats.blocks_skipped, 0);
    assert!(result.stats.is_complete());

    let records = &result.records;
    assert_eq!(records.len(), 3);

    assert_eq!(records[0].announcement_date.as_deref(), Some("20120926"));
    assert_eq!(records[0].status.as_deref(), Some("授权"));
    assert_eq!(records[0].description.as_deref(), Some("授权"));

    let transfer = &records[1];
    assert_eq!(transfer.status.as_deref(), Some("专利申请权、专利权的转移"));
    assert_eq!(transfer.ipc_main_class.as_deref(), Some("A41D   1/00"));
    assert_eq!(transfer.change_items.len(), 3);
    assert_eq!(transfer.prior_holders.len(), 3);
    assert_eq!(transfer.subsequent_holders.len(), 3);
    assert_eq!(transfer.change_items[1], "地址");
    assert_eq!(transfer.prior_holders[2], "明瑜创新股份有限公司");
    assert_eq!(
        transfer.subsequent_holders[2],
        "英属开曼群岛商辉能控股股份有限公司"
    );
    assert_eq!(
        transfer.registration_effective_date.as_deref(),
        Some("20121116")
    );

    assert_eq!(records[2].status.as_deref(), Some("专利权有效期届满"));
    assert_eq!(records[2].grant_announcement_date.as_deref(), Some("20120926"));
}

#[test]
fn test_missing_field_values_yield_empty_output() {
    assert!(parse_legal_status("").is_empty());
    assert!(parse_legal_status("  ").is_empty());
    assert!(parse_legal_status("NA").is_empty());
    assert!(parse_legal_status("NaN").is_empty());
}

#[test]
fn test_custom_loader_sentinel() {
    let parser =
        LegalStatusParser::with_config(ParserConfig::default().with_missing_value_markers(["\\N"]));

    assert!(parser.parse("\\N").records.is_empty());
    assert_eq!(parser.parse(SAMPLE_FIELD).records.len(), 3);
}

#[test]
fn test_serialized_records_carry_only_populated_keys() {
    let records = parse_legal_status(SAMPLE_FIELD);

    let grant = serde_json::to_value(&records[0]).unwrap();
    let grant = grant.as_object().unwrap();
    assert_eq!(grant.len(), 3);
    assert_eq!(grant["announcementDate"], "20120926");
    assert_eq!(grant["status"], "授权");
    assert_eq!(grant["description"], "授权");

    let transfer = serde_json::to_value(&records[1]).unwrap();
    let transfer = transfer.as_object().unwrap();
    assert!(transfer.contains_key("ipcMainClass"));
    assert!(transfer.contains_key("changeItems"));
    assert!(transfer.contains_key("priorHolders"));
    assert!(transfer.contains_key("subsequentHolders"));
    assert!(transfer.contains_key("registrationEffectiveDate"));
    assert!(!transfer.contains_key("grantAnnouncementDate"));

    let expiry = serde_json::to_value(&records[2]).unwrap();
    let expiry = expiry.as_object().unwrap();
    assert!(expiry.contains_key("grantAnnouncementDate"));
    assert!(!expiry.contains_key("changeItems"));
}

#[test]
fn test_reparsing_gives_identical_results() {
    let first = parse_legal_status(SAMPLE_FIELD);
    let second = parse_legal_status(SAMPLE_FIELD);
    assert_eq!(first, second);
}
