//! 行情网关错误类型

use thiserror::Error;

use super::types::RET_ERROR;

/// 行情网关调用错误
#[derive(Debug, Error)]
pub enum QuoteError {
    /// 网关返回了非 0 状态码
    #[error("{message}")]
    Gateway { code: i32, message: String },
    /// 网络请求或响应解析失败
    #[error("行情网关请求失败: {0}")]
    Transport(#[from] reqwest::Error),
    /// 网关地址不合法
    #[error("网关地址不合法: {0}")]
    InvalidAddress(#[from] url::ParseError),
    /// 响应结构不完整
    #[error("网关响应缺少 {0}")]
    MissingData(&'static str),
}

impl QuoteError {
    /// 写入信封 ret 字段的返回码；只有网关侧错误携带自己的码
    pub fn ret_code(&self) -> i32 {
        match self {
            Self::Gateway { code, .. } => *code,
            _ => RET_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gateway_error_keeps_remote_code() {
        let err = QuoteError::Gateway {
            code: 1002,
            message: "subscribe rejected".to_string(),
        };
        assert_eq!(err.ret_code(), 1002);
        assert_eq!(err.to_string(), "subscribe rejected");
    }

    #[test]
    fn local_errors_map_to_ret_error() {
        let err = QuoteError::MissingData("conn_id");
        assert_eq!(err.ret_code(), RET_ERROR);
    }
}
