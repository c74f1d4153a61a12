//! 條紋行號計算（純函數）
//!
//! 可見範圍 → 需要上底色的行號。條紋只看絕對行號的奇偶，
//! 捲動時同一行的條紋狀態不會改變。

/// 可見範圍前後各多畫的行數（快速捲動時避免閃爍）
pub const STRIPE_PADDING: usize = 2;

/// 行範圍（0-based，含頭含尾）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start: start.min(end),
            end: start.max(end),
        }
    }

    pub fn contains(&self, line: usize) -> bool {
        line >= self.start && line <= self.end
    }
}

/// 把所有可見範圍合併成一個涵蓋範圍（分割視窗時中間被隱藏的行也會包含進來）
pub fn covering_range(visible: &[LineRange]) -> Option<LineRange> {
    let start = visible.iter().map(|r| r.start).min()?;
    let end = visible.iter().map(|r| r.end).max()?;
    Some(LineRange { start, end })
}

/// 涵蓋範圍加上前後緩衝，再夾在文件範圍內
pub fn padded_range(visible: &[LineRange], line_count: usize) -> Option<LineRange> {
    if line_count == 0 {
        return None;
    }

    let covering = covering_range(visible)?;
    let start = covering.start.saturating_sub(STRIPE_PADDING);
    let end = covering
        .end
        .saturating_add(STRIPE_PADDING)
        .min(line_count - 1);

    if start > end {
        return None;
    }
    Some(LineRange { start, end })
}

/// 計算需要條紋的行（偶數行），依行號遞增
pub fn striped_lines(visible: &[LineRange], line_count: usize) -> Vec<usize> {
    match padded_range(visible, line_count) {
        Some(range) => (range.start..=range.end)
            .filter(|line| line % 2 == 0)
            .collect(),
        None => Vec::new(),
    }
}
