//! OpenD 行情上下文
//!
//! 对应 futu OpenAPI 的 OpenQuoteContext 生命周期：
//! 握手建连取得 conn_id，订阅后拉取K线，使用完毕显式断开。

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::GatewayConfig;

use super::common::{
    CONN_ID_HEADER, OPEND_CUR_KLINE_PATH, OPEND_DISCONNECT_PATH, OPEND_INIT_CONNECT_PATH,
    OPEND_SUBSCRIBE_PATH,
};
use super::error::QuoteError;
use super::types::{AuType, KLType, Session, SubType, RET_OK};
use super::wire::{
    CurKlineData, GatewayResponse, InitConnectData, InitConnectRequest, RawKline, SubscribeRequest,
};

/// OpenD 行情上下文
pub struct QuoteContext {
    client: Client,
    base_url: Url,
    conn_id: u64,
}

impl QuoteContext {
    /// 连接 OpenD 并完成握手认证
    pub async fn open(config: &GatewayConfig) -> Result<Self, QuoteError> {
        let base_url = Url::parse(&config.base_url())?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()?;

        let request = InitConnectRequest {
            client_id: "futu-bridge",
            client_ver: env!("CARGO_PKG_VERSION"),
        };

        let url = join(&base_url, OPEND_INIT_CONNECT_PATH)?;
        log::debug!("📡 连接行情网关: {}", url);
        let response = client.post(url).json(&request).send().await?;
        let data: InitConnectData = check(response)
            .await?
            .ok_or(QuoteError::MissingData("conn_id"))?;

        log::info!("行情网关握手成功, conn_id={}", data.conn_id);
        Ok(Self {
            client,
            base_url,
            conn_id: data.conn_id,
        })
    }

    /// 订阅行情，对应 OpenQuoteContext.subscribe
    pub async fn subscribe(
        &self,
        code_list: &[String],
        sub_type_list: &[SubType],
        subscribe_push: bool,
        session: Session,
    ) -> Result<(), QuoteError> {
        let request = SubscribeRequest {
            code_list,
            sub_type_list,
            subscribe_push,
            session,
        };

        let response = self
            .client
            .post(self.endpoint(OPEND_SUBSCRIBE_PATH)?)
            .header(CONN_ID_HEADER, self.conn_id.to_string())
            .json(&request)
            .send()
            .await?;
        check::<serde_json::Value>(response).await?;
        Ok(())
    }

    /// 拉取最近 num 条K线，对应 OpenQuoteContext.get_cur_kline
    pub async fn get_cur_kline(
        &self,
        code: &str,
        num: u32,
        kl_type: KLType,
        au_type: AuType,
    ) -> Result<Vec<RawKline>, QuoteError> {
        let num = num.to_string();
        let response = self
            .client
            .get(self.endpoint(OPEND_CUR_KLINE_PATH)?)
            .header(CONN_ID_HEADER, self.conn_id.to_string())
            .query(&[
                ("code", code),
                ("num", num.as_str()),
                ("kl_type", kl_type.as_str()),
                ("au_type", au_type.as_str()),
            ])
            .send()
            .await?;

        let data = check::<CurKlineData>(response).await?;
        Ok(data.map(|d| d.kline_list).unwrap_or_default())
    }

    /// 断开连接；失败只记录日志，不向上传播
    pub async fn close(self) {
        let url = match self.endpoint(OPEND_DISCONNECT_PATH) {
            Ok(url) => url,
            Err(e) => {
                log::warn!("断开行情网关失败: {}", e);
                return;
            }
        };

        let result = self
            .client
            .post(url)
            .header(CONN_ID_HEADER, self.conn_id.to_string())
            .send()
            .await;
        if let Err(e) = result {
            log::warn!("断开行情网关失败: {}", e);
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, QuoteError> {
        join(&self.base_url, path)
    }
}

fn join(base_url: &Url, path: &str) -> Result<Url, QuoteError> {
    Ok(base_url.join(path)?)
}

/// 解析网关统一响应，非 0 返回码转换为 Gateway 错误
async fn check<T: DeserializeOwned>(response: reqwest::Response) -> Result<Option<T>, QuoteError> {
    let response = response.error_for_status()?;
    let body: GatewayResponse<T> = response.json().await?;
    if body.ret_code != RET_OK {
        return Err(QuoteError::Gateway {
            code: body.ret_code,
            message: body.ret_msg,
        });
    }
    Ok(body.data)
}
