//! 一次性维护脚本：重写股票历史对话框的副标题 span 块
//!
//! 目标文本缺失说明文件内容已经漂移，直接以非 0 状态码终止，不写回。

use std::process;

use anyhow::anyhow;

use futu_bridge::patch;

/// 目标前端源文件
const APP_VUE: &str = r"D:\finance_analyse-master\frontend\src\App.vue";

const OLD_BLOCK: &str = "          <span v-if=\"selectedStockHistory\">\n            {{ selectedStockHistory.stockCode }} \u{FFFD}\u{FFFD} {{ formatDate(selectedStockHistory.requestedAt) }}\n          </span>";
const NEW_BLOCK: &str = "          <span v-if=\"selectedStockHistory\">\n            {{ selectedStockHistory.stockCode }} · {{ formatDate(selectedStockHistory.requestedAt) }} · {{ formatAnalysisType(selectedStockHistory.analysisType) }}\n          </span>";

fn main() {
    let result = patch::patch_file(APP_VUE, |text| {
        patch::replace_once(text, OLD_BLOCK, NEW_BLOCK)
            .ok_or_else(|| anyhow!("stock dialog span block not found"))
    });

    if let Err(e) = result {
        eprintln!("{}", e);
        process::exit(1);
    }
}
