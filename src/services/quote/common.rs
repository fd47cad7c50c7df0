//! 公共常量

// ==================== OpenD 网关接口路径 ====================

/// 连接握手接口
pub const OPEND_INIT_CONNECT_PATH: &str = "/api/v1/init_connect";
/// 行情订阅接口
pub const OPEND_SUBSCRIBE_PATH: &str = "/api/v1/subscribe";
/// 当前K线查询接口
pub const OPEND_CUR_KLINE_PATH: &str = "/api/v1/cur_kline";
/// 连接断开接口
pub const OPEND_DISCONNECT_PATH: &str = "/api/v1/disconnect";

/// 握手后回传连接标识的 Header 名
pub const CONN_ID_HEADER: &str = "X-Conn-Id";
