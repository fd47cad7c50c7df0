//! 业务逻辑服务模块
//!
//! 封装网关访问与数据转换逻辑

pub mod quote;         // OpenD 网关客户端
pub mod quote_service; // K线抓取服务
