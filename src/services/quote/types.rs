//! 行情枚举类型
//!
//! 对应 futu OpenAPI 的 KLType / AuType / SubType / Session。
//! 字符串解析容忍 `KLType.K_DAY` 这类带前缀写法，取最后一个 `.` 之后的部分。

use anyhow::{bail, Result};
use serde::Serialize;

/// 网关返回码：成功
pub const RET_OK: i32 = 0;
/// 网关返回码：失败
pub const RET_ERROR: i32 = -1;

/// 截取待解析的枚举名
fn enum_candidate(value: &str) -> Result<&str> {
    if value.is_empty() {
        bail!("枚举值不能为空");
    }
    Ok(value.rsplit('.').next().unwrap_or(value).trim())
}

/// K线周期类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum KLType {
    #[serde(rename = "K_1M")]
    K1M,
    #[serde(rename = "K_3M")]
    K3M,
    #[serde(rename = "K_5M")]
    K5M,
    #[serde(rename = "K_15M")]
    K15M,
    #[serde(rename = "K_30M")]
    K30M,
    #[serde(rename = "K_60M")]
    K60M,
    #[serde(rename = "K_DAY")]
    Day,
    #[serde(rename = "K_WEEK")]
    Week,
    #[serde(rename = "K_MON")]
    Month,
    #[serde(rename = "K_QUARTER")]
    Quarter,
    #[serde(rename = "K_YEAR")]
    Year,
}

impl KLType {
    /// 从字符串解析
    pub fn parse(value: &str) -> Result<Self> {
        let parsed = match enum_candidate(value)? {
            "K_1M" => Self::K1M,
            "K_3M" => Self::K3M,
            "K_5M" => Self::K5M,
            "K_15M" => Self::K15M,
            "K_30M" => Self::K30M,
            "K_60M" => Self::K60M,
            "K_DAY" => Self::Day,
            "K_WEEK" => Self::Week,
            "K_MON" => Self::Month,
            "K_QUARTER" => Self::Quarter,
            "K_YEAR" => Self::Year,
            _ => bail!("无效的 KLType 枚举值: '{}'", value),
        };
        Ok(parsed)
    }

    /// 网关接口使用的名称
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::K1M => "K_1M",
            Self::K3M => "K_3M",
            Self::K5M => "K_5M",
            Self::K15M => "K_15M",
            Self::K30M => "K_30M",
            Self::K60M => "K_60M",
            Self::Day => "K_DAY",
            Self::Week => "K_WEEK",
            Self::Month => "K_MON",
            Self::Quarter => "K_QUARTER",
            Self::Year => "K_YEAR",
        }
    }
}

/// 复权类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AuType {
    /// 前复权
    #[serde(rename = "QFQ")]
    Qfq,
    /// 后复权
    #[serde(rename = "HFQ")]
    Hfq,
    /// 不复权
    #[serde(rename = "NONE")]
    None,
}

impl AuType {
    /// 从字符串解析
    pub fn parse(value: &str) -> Result<Self> {
        let parsed = match enum_candidate(value)? {
            "QFQ" => Self::Qfq,
            "HFQ" => Self::Hfq,
            "NONE" => Self::None,
            _ => bail!("无效的 AuType 枚举值: '{}'", value),
        };
        Ok(parsed)
    }

    /// 网关接口使用的名称
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Qfq => "QFQ",
            Self::Hfq => "HFQ",
            Self::None => "NONE",
        }
    }
}

/// 订阅类型
///
/// 季K/年K 不支持订阅，所以没有对应成员；
/// `--ktype K_QUARTER` 会在解析订阅类型这一步失败。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SubType {
    #[serde(rename = "QUOTE")]
    Quote,
    #[serde(rename = "ORDER_BOOK")]
    OrderBook,
    #[serde(rename = "TICKER")]
    Ticker,
    #[serde(rename = "RT_DATA")]
    RtData,
    #[serde(rename = "BROKER")]
    Broker,
    #[serde(rename = "K_1M")]
    K1M,
    #[serde(rename = "K_3M")]
    K3M,
    #[serde(rename = "K_5M")]
    K5M,
    #[serde(rename = "K_15M")]
    K15M,
    #[serde(rename = "K_30M")]
    K30M,
    #[serde(rename = "K_60M")]
    K60M,
    #[serde(rename = "K_DAY")]
    KDay,
    #[serde(rename = "K_WEEK")]
    KWeek,
    #[serde(rename = "K_MON")]
    KMonth,
}

impl SubType {
    /// 从字符串解析
    pub fn parse(value: &str) -> Result<Self> {
        let parsed = match enum_candidate(value)? {
            "QUOTE" => Self::Quote,
            "ORDER_BOOK" => Self::OrderBook,
            "TICKER" => Self::Ticker,
            "RT_DATA" => Self::RtData,
            "BROKER" => Self::Broker,
            "K_1M" => Self::K1M,
            "K_3M" => Self::K3M,
            "K_5M" => Self::K5M,
            "K_15M" => Self::K15M,
            "K_30M" => Self::K30M,
            "K_60M" => Self::K60M,
            "K_DAY" => Self::KDay,
            "K_WEEK" => Self::KWeek,
            "K_MON" => Self::KMonth,
            _ => bail!("无效的 SubType 枚举值: '{}'", value),
        };
        Ok(parsed)
    }
}

/// 交易时段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Session {
    #[serde(rename = "ALL")]
    All,
    #[serde(rename = "REGULAR")]
    Regular,
    #[serde(rename = "PRE_MARKET")]
    PreMarket,
    #[serde(rename = "AFTER_HOURS")]
    AfterHours,
    #[serde(rename = "OVERNIGHT")]
    Overnight,
}

impl Session {
    /// 从字符串解析
    pub fn parse(value: &str) -> Result<Self> {
        let parsed = match enum_candidate(value)? {
            "ALL" => Self::All,
            "REGULAR" => Self::Regular,
            "PRE_MARKET" => Self::PreMarket,
            "AFTER_HOURS" => Self::AfterHours,
            "OVERNIGHT" => Self::Overnight,
            _ => bail!("无效的 Session 枚举值: '{}'", value),
        };
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_name() {
        assert_eq!(KLType::parse("K_DAY").unwrap(), KLType::Day);
        assert_eq!(AuType::parse("QFQ").unwrap(), AuType::Qfq);
        assert_eq!(Session::parse("ALL").unwrap(), Session::All);
    }

    #[test]
    fn tolerates_dotted_prefix_and_whitespace() {
        assert_eq!(KLType::parse("KLType.K_1M").unwrap(), KLType::K1M);
        assert_eq!(AuType::parse("AuType.NONE ").unwrap(), AuType::None);
        assert_eq!(SubType::parse("SubType.K_DAY").unwrap(), SubType::KDay);
    }

    #[test]
    fn rejects_empty_value() {
        let err = KLType::parse("").unwrap_err();
        assert!(err.to_string().contains("不能为空"));
    }

    #[test]
    fn unknown_name_error_reports_input_as_given() {
        let err = KLType::parse("KLType.K_2H").unwrap_err();
        assert!(err.to_string().contains("KLType.K_2H"));
    }

    #[test]
    fn quarter_bars_cannot_be_subscribed() {
        assert!(KLType::parse("K_QUARTER").is_ok());
        assert!(SubType::parse("K_QUARTER").is_err());
    }

    #[test]
    fn whitespace_only_is_invalid_not_empty() {
        // 全空白字符串不会命中空值分支，按无效枚举处理
        let err = Session::parse("   ").unwrap_err();
        assert!(err.to_string().contains("无效"));
    }

    #[test]
    fn serializes_wire_names() {
        assert_eq!(serde_json::to_string(&SubType::KDay).unwrap(), "\"K_DAY\"");
        assert_eq!(serde_json::to_string(&Session::All).unwrap(), "\"ALL\"");
    }
}
