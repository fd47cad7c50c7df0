//! futu-kline 命令行入口
//!
//! 通过 OpenD 行情网关抓取单只股票的最近K线，
//! 将 `{ret, message, data}` 信封写到标准输出。
//! 抓取失败只体现在信封字段里，进程退出码恒为 0；
//! 只有命令行用法错误以状态码 2 退出。

use std::env;
use std::io::Write;
use std::process;

use env_logger::Env;

use futu_bridge::cli::{Args, USAGE};
use futu_bridge::config::GatewayConfig;
use futu_bridge::services::quote_service::{self, KlineQuery};

#[tokio::main]
async fn main() {
    // 日志走 stderr，stdout 只输出信封
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let argv: Vec<String> = env::args().skip(1).collect();
    let args = match Args::parse_from(&argv) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", USAGE);
            process::exit(2);
        }
    };

    if args.help {
        println!("{}", USAGE);
        return;
    }

    let mut config = GatewayConfig::from_env();
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    let query = KlineQuery {
        code: args.code,
        num: args.num,
        ktype: args.ktype,
        autype: args.autype,
        session: args.session,
    };

    let envelope = quote_service::fetch_cur_kline(&config, &query).await;

    // 单个 JSON 对象，非 ASCII 字符不转义，末尾不带换行
    match serde_json::to_string(&envelope) {
        Ok(json) => print!("{}", json),
        Err(e) => print!(
            "{{\"ret\": \"-1\", \"message\": \"serialize failed: {}\", \"data\": []}}",
            e
        ),
    }
    let _ = std::io::stdout().flush();
}
