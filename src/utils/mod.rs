mod logger;

pub use logger::{init_logger, LOG_FILE_NAME};

use unicode_width::UnicodeWidthChar;

/// 計算單個字符的視覺寬度
pub fn char_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(1)
}

/// 計算字符串的視覺寬度（考慮寬字元）
/// 中文字元等寬字元會正確計算為 2，ASCII 字元計算為 1
pub fn visual_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

/// Tab 展開為空格
pub fn expand_tabs(line: &str, tab_width: usize) -> String {
    line.replace('\t', &" ".repeat(tab_width))
}

/// 依視覺寬度截斷，寬字元不會被切一半
pub fn truncate_to_width(line: &str, max_width: usize) -> &str {
    let mut width = 0;
    for (idx, ch) in line.char_indices() {
        let w = char_width(ch);
        if width + w > max_width {
            return &line[..idx];
        }
        width += w;
    }
    line
}

/// 前 `col` 個字元的視覺寬度（Tab 以 `tab_width` 計）
pub fn visual_column(line: &str, col: usize, tab_width: usize) -> usize {
    line.chars()
        .take(col)
        .map(|ch| if ch == '\t' { tab_width } else { char_width(ch) })
        .sum()
}
