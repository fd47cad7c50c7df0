//! Futu OpenD 行情桥接工具
//!
//! 通过 OpenD 行情网关订阅单只股票并抓取最近 K 线数据，
//! 以统一的 `{ret, message, data}` JSON 信封输出到标准输出。
//! 另附若干针对前端源码的一次性维护工具。

pub mod cli;      // 命令行参数解析
pub mod config;   // 网关连接配置
pub mod models;   // 数据模型定义
pub mod patch;    // 源码文本补丁工具
pub mod services; // 业务逻辑服务
