//! 一次性维护脚本：把单票提交流程切换到结构化分析接口
//!
//! 前两处替换允许缺失（可能已经改过），成功提示行必须存在，
//! 在它后面追加历史刷新调用；提示行缺失时以非 0 状态码终止，不写回。

use std::process;

use anyhow::anyhow;

use futu_bridge::patch;

/// 目标前端源文件
const APP_VUE: &str = r"D:\finance_analyse-master\frontend\src\App.vue";

const OLD_CALL: &str = "    const data = await analyzeSingleStock(code);";
const NEW_CALL: &str =
    "    const response = await analyzeStock({ stockCode: code, analysisType: 'STRUCTURED' });";

const OLD_ASSIGN: &str = "    singleStockData.value = data;";
const NEW_ASSIGN: &str =
    "    singleStockData.value = toExtractedJson(response.analysis as SingleStockApiResponse);";

/// 成功提示行（历史上被错误编码过，按现存字节原样匹配）
const SUCCESS_LINE: &str = "    ElMessage.success(`\u{FFFD}\u{47B}\u{FFFD}\u{221} ${code} \u{FFFD}\u{13D}\u{1E79}\u{FFFD}\u{FFFD}\u{FFFD}\u{FFFD}\u{FFFD}\u{FFFD}`);";
const REFRESH_CALL: &str = "\n    await refreshStockHistory();";

fn main() {
    let result = patch::patch_file(APP_VUE, |text| {
        let text = patch::replace_first(text, OLD_CALL, NEW_CALL);
        let text = patch::replace_first(&text, OLD_ASSIGN, NEW_ASSIGN);
        patch::replace_once(
            &text,
            SUCCESS_LINE,
            &format!("{}{}", SUCCESS_LINE, REFRESH_CALL),
        )
        .ok_or_else(|| anyhow!("success line not found"))
    });

    if let Err(e) = result {
        eprintln!("{}", e);
        process::exit(1);
    }
}
