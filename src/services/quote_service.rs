//! K线抓取服务
//!
//! 完整流程：解析枚举 → 建连握手 → 订阅 → 拉取 → 字段重命名。
//! 任何一步失败都转换为错误信封返回，握手成功后的连接必然被关闭。

use crate::config::GatewayConfig;
use crate::models::{KlineRecord, QuoteEnvelope};
use crate::services::quote::{
    AuType, KLType, QuoteContext, QuoteError, Session, SubType, RET_ERROR,
};

/// K线查询参数（枚举取值保持原始字符串，由本服务解析）
#[derive(Debug, Clone)]
pub struct KlineQuery {
    /// 股票代码，如 US.AAPL
    pub code: String,
    /// K线点数
    pub num: u32,
    /// KLType 枚举名
    pub ktype: String,
    /// AuType 枚举名
    pub autype: String,
    /// Session 枚举名
    pub session: String,
}

/// 抓取单只股票的最近K线
///
/// 无论成功失败都返回信封，调用方直接序列化输出即可。
pub async fn fetch_cur_kline(config: &GatewayConfig, query: &KlineQuery) -> QuoteEnvelope {
    let kl_type = match KLType::parse(&query.ktype) {
        Ok(v) => v,
        Err(e) => return QuoteEnvelope::error(RET_ERROR, e.to_string()),
    };
    let au_type = match AuType::parse(&query.autype) {
        Ok(v) => v,
        Err(e) => return QuoteEnvelope::error(RET_ERROR, e.to_string()),
    };
    // 订阅类型与K线类型共用 --ktype 的取值
    let sub_type = match SubType::parse(&query.ktype) {
        Ok(v) => v,
        Err(e) => return QuoteEnvelope::error(RET_ERROR, e.to_string()),
    };
    let session = match Session::parse(&query.session) {
        Ok(v) => v,
        Err(e) => return QuoteEnvelope::error(RET_ERROR, e.to_string()),
    };

    let ctx = match QuoteContext::open(config).await {
        Ok(ctx) => ctx,
        Err(e) => return envelope_from(e),
    };

    let envelope = fetch_with_context(&ctx, query, kl_type, au_type, sub_type, session).await;
    ctx.close().await;
    envelope
}

async fn fetch_with_context(
    ctx: &QuoteContext,
    query: &KlineQuery,
    kl_type: KLType,
    au_type: AuType,
    sub_type: SubType,
    session: Session,
) -> QuoteEnvelope {
    let codes = [query.code.clone()];
    if let Err(e) = ctx.subscribe(&codes, &[sub_type], false, session).await {
        return envelope_from(e);
    }

    match ctx
        .get_cur_kline(&query.code, query.num, kl_type, au_type)
        .await
    {
        Ok(bars) => QuoteEnvelope::ok(bars.into_iter().map(KlineRecord::from).collect()),
        Err(e) => envelope_from(e),
    }
}

/// 网关错误转换为错误信封
fn envelope_from(error: QuoteError) -> QuoteEnvelope {
    QuoteEnvelope::error(error.ret_code(), error.to_string())
}
