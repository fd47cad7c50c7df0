//! 源码文本补丁工具
//!
//! 一次性维护脚本共用的读取-替换-写回逻辑。
//! 编辑闭包返回错误时不执行写回，目标文件保持原样。

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// 替换目标文本的唯一一次出现；目标缺失时返回 None
pub fn replace_once(text: &str, old: &str, new: &str) -> Option<String> {
    if !text.contains(old) {
        return None;
    }
    Some(text.replacen(old, new, 1))
}

/// 替换目标文本的第一次出现；目标缺失时原样返回
pub fn replace_first(text: &str, old: &str, new: &str) -> String {
    text.replacen(old, new, 1)
}

/// 读取文件，应用编辑闭包，成功后写回
pub fn patch_file<P, F>(path: P, edit: F) -> Result<()>
where
    P: AsRef<Path>,
    F: FnOnce(&str) -> Result<String>,
{
    let path = path.as_ref();
    let text = fs::read_to_string(path).with_context(|| format!("读取 {} 失败", path.display()))?;
    let updated = edit(&text)?;
    fs::write(path, updated).with_context(|| format!("写入 {} 失败", path.display()))?;
    Ok(())
}
