//! K线数据模型
//!
//! 定义输出给调用方的单条 K 线记录

use serde::{Deserialize, Serialize};

/// 单条 K 线记录（OHLCV）
///
/// 字段名统一输出为 camelCase（timeKey、peRatio 等），
/// 网关侧的 snake_case 原始字段名不会出现在输出中。
/// 数值字段缺失或无法解析时输出 null。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KlineRecord {
    /// 股票代码
    pub code: Option<String>,
    /// 股票名称
    pub name: Option<String>,
    /// K线时间键
    pub time_key: Option<String>,
    /// 开盘价
    pub open: Option<f64>,
    /// 收盘价
    pub close: Option<f64>,
    /// 最高价
    pub high: Option<f64>,
    /// 最低价
    pub low: Option<f64>,
    /// 成交量
    pub volume: Option<u64>,
    /// 成交额
    pub turnover: Option<f64>,
    /// 市盈率
    pub pe_ratio: Option<f64>,
    /// 换手率
    pub turnover_rate: Option<f64>,
    /// 昨收价
    pub last_close: Option<f64>,
}
