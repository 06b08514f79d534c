//! Test utilities for legal-status parser testing
//!
//! This module provides the shared sample data used across the test modules.


/// A complete three-block status history as delivered by the upstream data
/// source: a plain grant, a rights transfer with three holder-change
/// entries, and an expiry
pub fn sample_status_history() -> String {
    r#"#法律状态公告日：20120926;
法律状态：授权;
描述信息：授权;

#法律状态公告日：20121219;
法律状态：专利申请权、专利权的转移;
描述信息：专利权的转移IPC(主分类):A41D   1/00;变更事项:专利权人;变更前权利人:辉能科技股份有限公司;变更后权利人:辉能科技股份有限公司;变更事项:地址;变更前权利人:中国台湾台北县五股乡五工路127号4楼;变更后权利人:中国台湾台北县五股乡五工路127号4楼;变更事项:专利权人;变更前权利人:明瑜创新股份有限公司;变更后权利人:英属开曼群岛商辉能控股股份有限公司;登记生效日:20121116;

#法律状态公告日：20220104;
法律状态：专利权有效期届满;
描述信息：专利权有效期届满IPC(主分类):A41D1/00;授权公告日:20120926;"#
        .to_string()
}

/// The rights-transfer description from the sample history, as it reads
/// after the trailing semicolon has been stripped from the line value
pub fn transfer_description() -> String {
    "专利权的转移IPC(主分类):A41D   1/00;变更事项:专利权人;变更前权利人:辉能科技股份有限公司;变更后权利人:辉能科技股份有限公司;变更事项:地址;变更前权利人:中国台湾台北县五股乡五工路127号4楼;变更后权利人:中国台湾台北县五股乡五工路127号4楼;变更事项:专利权人;变更前权利人:明瑜创新股份有限公司;变更后权利人:英属开曼群岛商辉能控股股份有限公司;登记生效日:20121116"
        .to_string()
}
