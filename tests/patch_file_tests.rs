//! 补丁工具文件级测试
//!
//! 验证维护脚本依赖的两条性质：
//! 目标缺失时文件保持原样；目标存在时恰好替换一次。

use anyhow::anyhow;

use futu_bridge::patch;

const ORIGINAL: &str = "<template>\n  <div class=\"dialog\">\n    <span>AAPL - 2025-06-02</span>\n  </div>\n</template>\n";

#[test]
fn failed_patch_leaves_file_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("App.vue");
    std::fs::write(&path, ORIGINAL).unwrap();

    let result = patch::patch_file(&path, |text| {
        patch::replace_once(text, "<span>MSFT", "<span>TSLA")
            .ok_or_else(|| anyhow!("span line not found"))
    });

    assert!(result.is_err());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), ORIGINAL);
}

#[test]
fn successful_patch_replaces_exactly_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("App.vue");
    std::fs::write(&path, ORIGINAL).unwrap();

    patch::patch_file(&path, |text| {
        patch::replace_once(text, "<span>AAPL - 2025-06-02</span>", "<span>AAPL · 2025-06-02</span>")
            .ok_or_else(|| anyhow!("span line not found"))
    })
    .unwrap();

    let updated = std::fs::read_to_string(&path).unwrap();
    assert!(!updated.contains("AAPL - 2025-06-02"));
    assert_eq!(updated.matches("AAPL · 2025-06-02").count(), 1);
}

#[test]
fn optional_replacements_do_not_gate_the_required_one() {
    // update_submit_single 的形态：前两处替换允许缺失，最后一处必须命中
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("App.vue");
    let content = "setup();\n    ElMessage.success(`done`);\nteardown();\n";
    std::fs::write(&path, content).unwrap();

    patch::patch_file(&path, |text| {
        let text = patch::replace_first(text, "const data = legacyCall();", "const data = newCall();");
        patch::replace_once(
            &text,
            "    ElMessage.success(`done`);",
            "    ElMessage.success(`done`);\n    await refreshStockHistory();",
        )
        .ok_or_else(|| anyhow!("success line not found"))
    })
    .unwrap();

    let updated = std::fs::read_to_string(&path).unwrap();
    assert_eq!(updated.matches("await refreshStockHistory();").count(), 1);
}

#[test]
fn required_match_failure_discards_earlier_optional_edits() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("App.vue");
    let content = "    const data = legacyCall();\n    console.log(data);\n";
    std::fs::write(&path, content).unwrap();

    let result = patch::patch_file(&path, |text| {
        let text = patch::replace_first(text, "const data = legacyCall();", "const data = newCall();");
        patch::replace_once(&text, "    ElMessage.success(`done`);", "unused")
            .ok_or_else(|| anyhow!("success line not found"))
    });

    // 必选替换失败时，前面已命中的可选替换也不落盘
    assert!(result.is_err());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), content);
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such_file.vue");

    let result = patch::patch_file(&path, |text| Ok(text.to_string()));
    assert!(result.is_err());
}
