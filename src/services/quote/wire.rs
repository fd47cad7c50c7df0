//! 网关报文模型
//!
//! OpenD 网关所有响应都是统一的 `{ret_code, ret_msg, data}` 结构

use serde::{Deserialize, Serialize};

use super::types::{Session, SubType};
use crate::models::KlineRecord;

/// 网关统一响应
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct GatewayResponse<T> {
    /// 返回码，0 表示成功
    pub ret_code: i32,
    /// 错误信息
    #[serde(default)]
    pub ret_msg: String,
    /// 业务数据
    #[serde(default)]
    pub data: Option<T>,
}

/// 连接握手请求
#[derive(Debug, Serialize)]
pub struct InitConnectRequest<'a> {
    /// 客户端标识
    pub client_id: &'a str,
    /// 客户端版本号
    pub client_ver: &'a str,
}

/// 握手响应数据
#[derive(Debug, Deserialize)]
pub struct InitConnectData {
    /// 连接标识，后续请求需回传
    pub conn_id: u64,
}

/// 订阅请求
#[derive(Debug, Serialize)]
pub struct SubscribeRequest<'a> {
    /// 订阅的股票代码列表
    pub code_list: &'a [String],
    /// 订阅类型列表
    pub sub_type_list: &'a [SubType],
    /// 是否接收推送（本工具只拉取，恒为 false）
    pub subscribe_push: bool,
    /// 交易时段
    pub session: Session,
}

/// 当前K线响应数据
#[derive(Debug, Deserialize)]
pub struct CurKlineData {
    /// K线序列
    #[serde(default)]
    pub kline_list: Vec<RawKline>,
}

/// 网关侧原始K线记录（snake_case 字段）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawKline {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub time_key: Option<String>,
    #[serde(default)]
    pub open: Option<f64>,
    #[serde(default)]
    pub close: Option<f64>,
    #[serde(default)]
    pub high: Option<f64>,
    #[serde(default)]
    pub low: Option<f64>,
    #[serde(default)]
    pub volume: Option<f64>,
    #[serde(default)]
    pub turnover: Option<f64>,
    #[serde(default)]
    pub pe_ratio: Option<f64>,
    #[serde(default)]
    pub turnover_rate: Option<f64>,
    #[serde(default)]
    pub last_close: Option<f64>,
}

impl From<RawKline> for KlineRecord {
    fn from(raw: RawKline) -> Self {
        Self {
            code: raw.code,
            name: raw.name,
            time_key: raw.time_key,
            open: finite(raw.open),
            close: finite(raw.close),
            high: finite(raw.high),
            low: finite(raw.low),
            volume: finite(raw.volume).map(|v| v as u64),
            turnover: finite(raw.turnover),
            pe_ratio: finite(raw.pe_ratio),
            turnover_rate: finite(raw.turnover_rate),
            last_close: finite(raw.last_close),
        }
    }
}

/// 无法解析的数值（NaN / Inf）按缺失处理
fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}
