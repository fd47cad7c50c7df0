//! 配置模块
//!
//! OpenD 行情网关的连接配置，支持从环境变量读取默认值

use std::env;

/// OpenD 主机环境变量名
pub const ENV_OPEND_HOST: &str = "FUTU_OPEND_HOST";
/// OpenD 端口环境变量名
pub const ENV_OPEND_PORT: &str = "FUTU_OPEND_PORT";

/// 网关连接配置
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// OpenD 主机地址
    pub host: String,
    /// OpenD 监听端口
    pub port: u16,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
    /// 连接超时时间（秒）
    pub connect_timeout_secs: u64,
}

// 默认值函数
fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 11111 }
fn default_timeout() -> u64 { 30 }
fn default_connect_timeout() -> u64 { 10 }

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            timeout_secs: default_timeout(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

impl GatewayConfig {
    /// 从环境变量加载配置，未设置时使用默认值
    pub fn from_env() -> Self {
        let host = env::var(ENV_OPEND_HOST).unwrap_or_else(|_| default_host());
        let port = match env::var(ENV_OPEND_PORT) {
            Ok(value) => value.parse().unwrap_or_else(|_| {
                log::warn!("{} 的值 '{}' 不是有效端口，使用默认值", ENV_OPEND_PORT, value);
                default_port()
            }),
            Err(_) => default_port(),
        };

        Self {
            host,
            port,
            ..Self::default()
        }
    }

    /// 获取网关基础地址
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
