mod document;
mod history;

pub use document::Document;

/// 從命令列標籤解析編碼（例如 `utf-8`、`gbk`、`big5`）
pub fn encoding_for_label(label: &str) -> anyhow::Result<&'static encoding_rs::Encoding> {
    encoding_rs::Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| anyhow::anyhow!("Unknown encoding '{}'", label))
}
