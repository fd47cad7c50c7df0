//! 命令行参数解析
//!
//! 不依赖第三方解析库，直接处理 `--flag value` 形式的参数。
//! 结构性错误（未知参数、缺少取值）由调用方打印用法并以状态码 2 退出；
//! 枚举名无法解析不属于结构性错误，由服务层转换为错误信封。

use std::str::FromStr;

/// futu-kline 用法说明
pub const USAGE: &str = "Fetch K-line data via Futu OpenD

USAGE:
    futu-kline --code <CODE> [OPTIONS]

OPTIONS:
    --code <CODE>        Stock code, e.g. US.AAPL (required)
    --num <NUM>          Number of K-line points [default: 120]
    --ktype <KTYPE>      KLType name, e.g. K_DAY [default: K_DAY]
    --autype <AUTYPE>    AuType name, e.g. QFQ [default: QFQ]
    --host <HOST>        OpenD host [default: FUTU_OPEND_HOST or 127.0.0.1]
    --port <PORT>        OpenD port [default: FUTU_OPEND_PORT or 11111]
    --session <SESSION>  Session name, e.g. ALL [default: ALL]
    -h, --help           Print help";

/// 已解析的命令行参数
#[derive(Debug, Clone)]
pub struct Args {
    /// 股票代码，如 US.AAPL
    pub code: String,
    /// K线点数
    pub num: u32,
    /// KLType 枚举名
    pub ktype: String,
    /// AuType 枚举名
    pub autype: String,
    /// 覆盖网关主机（缺省时走环境变量/默认值）
    pub host: Option<String>,
    /// 覆盖网关端口（缺省时走环境变量/默认值）
    pub port: Option<u16>,
    /// Session 枚举名
    pub session: String,
    /// 是否请求帮助
    pub help: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            code: String::new(),
            num: 120,
            ktype: "K_DAY".to_string(),
            autype: "QFQ".to_string(),
            host: None,
            port: None,
            session: "ALL".to_string(),
            help: false,
        }
    }
}

impl Args {
    /// 解析参数列表（不含程序名）
    pub fn parse_from(argv: &[String]) -> Result<Self, String> {
        let mut args = Args::default();
        let mut code: Option<String> = None;

        let mut iter = argv.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--code" => code = Some(take_value(&mut iter, "--code")?),
                "--num" => args.num = parse_number(&take_value(&mut iter, "--num")?, "--num")?,
                "--ktype" => args.ktype = take_value(&mut iter, "--ktype")?,
                "--autype" => args.autype = take_value(&mut iter, "--autype")?,
                "--host" => args.host = Some(take_value(&mut iter, "--host")?),
                "--port" => {
                    args.port = Some(parse_number(&take_value(&mut iter, "--port")?, "--port")?)
                }
                "--session" => args.session = take_value(&mut iter, "--session")?,
                "-h" | "--help" => args.help = true,
                other => return Err(format!("未知参数: '{}'", other)),
            }
        }

        if args.help {
            return Ok(args);
        }

        match code {
            Some(code) => args.code = code,
            None => return Err("缺少必需参数 --code".to_string()),
        }

        Ok(args)
    }
}

/// 取出当前参数的取值
fn take_value<'a, I>(iter: &mut I, flag: &str) -> Result<String, String>
where
    I: Iterator<Item = &'a String>,
{
    iter.next()
        .map(|v| v.to_string())
        .ok_or_else(|| format!("参数 {} 缺少取值", flag))
}

/// 解析数值型参数
fn parse_number<T: FromStr>(value: &str, flag: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("参数 {} 的取值无效: '{}'", flag, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_match_script() {
        let args = Args::parse_from(&argv(&["--code", "US.AAPL"])).unwrap();
        assert_eq!(args.code, "US.AAPL");
        assert_eq!(args.num, 120);
        assert_eq!(args.ktype, "K_DAY");
        assert_eq!(args.autype, "QFQ");
        assert_eq!(args.session, "ALL");
        assert!(args.host.is_none());
        assert!(args.port.is_none());
    }

    #[test]
    fn code_is_required() {
        assert!(Args::parse_from(&argv(&["--num", "10"])).is_err());
    }

    #[test]
    fn help_short_circuits_required_code() {
        let args = Args::parse_from(&argv(&["--help"])).unwrap();
        assert!(args.help);
    }

    #[test]
    fn rejects_unknown_flag() {
        let err = Args::parse_from(&argv(&["--code", "US.AAPL", "--bogus"])).unwrap_err();
        assert!(err.contains("--bogus"));
    }

    #[test]
    fn rejects_non_numeric_num() {
        let err = Args::parse_from(&argv(&["--code", "US.AAPL", "--num", "many"])).unwrap_err();
        assert!(err.contains("--num"));
    }

    #[test]
    fn dotted_enum_names_pass_through() {
        let args =
            Args::parse_from(&argv(&["--code", "HK.00700", "--ktype", "KLType.K_1M"])).unwrap();
        assert_eq!(args.ktype, "KLType.K_1M");
    }
}
