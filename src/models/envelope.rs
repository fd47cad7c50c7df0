//! 输出信封模型
//!
//! 所有抓取结果统一包装为 `{ret, message, data}` 结构，
//! 失败只体现在 ret/message 字段，进程退出码恒为 0

use serde::{Deserialize, Serialize};

use crate::models::KlineRecord;
use crate::services::quote::RET_OK;

/// K线抓取结果信封
///
/// - ret: 网关返回码的文本形式，成功为 "0"
/// - message: 诊断信息，成功时为空串
/// - data: K线记录序列，失败时为空
#[derive(Debug, Serialize, Deserialize)]
pub struct QuoteEnvelope {
    /// 返回码（文本形式）
    pub ret: String,
    /// 诊断信息
    pub message: String,
    /// K线记录
    pub data: Vec<KlineRecord>,
}

impl QuoteEnvelope {
    /// 创建成功信封
    pub fn ok(data: Vec<KlineRecord>) -> Self {
        Self {
            ret: RET_OK.to_string(),
            message: String::new(),
            data,
        }
    }

    /// 创建错误信封
    ///
    /// # 参数
    /// - code: 网关返回码，本地错误统一为 -1
    /// - message: 错误信息
    pub fn error(code: i32, message: impl Into<String>) -> Self {
        Self {
            ret: code.to_string(),
            message: message.into(),
            data: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::quote::RET_ERROR;

    #[test]
    fn ok_envelope_has_zero_ret_and_empty_message() {
        let envelope = QuoteEnvelope::ok(Vec::new());
        assert_eq!(envelope.ret, "0");
        assert!(envelope.message.is_empty());
    }

    #[test]
    fn error_envelope_stringifies_code_and_clears_data() {
        let envelope = QuoteEnvelope::error(RET_ERROR, "连接失败");
        assert_eq!(envelope.ret, "-1");
        assert_eq!(envelope.message, "连接失败");
        assert!(envelope.data.is_empty());

        let remote = QuoteEnvelope::error(1002, "subscribe rejected");
        assert_eq!(remote.ret, "1002");
    }
}
