use crate::buffer::Document;
use crate::cursor::Cursor;
use crate::palette::{rgb_color, Palette};
use crate::stripes::{LineRange, StripeLayers, ViewId};
use crate::utils::{expand_tabs, truncate_to_width, visual_column, visual_width};
use anyhow::Result;
use crossterm::{
    cursor, queue,
    style::{self, Attribute},
    terminal::{Clear, ClearType},
};
use std::io::Write;

/// 一個編輯視窗：自己的游標與捲動位置，共用同一份文件
#[derive(Debug, Clone)]
pub struct Pane {
    pub id: ViewId,
    pub cursor: Cursor,
    pub offset_row: usize, // 視窗頂部顯示的行號
    pub top: u16,          // 在螢幕上的起始列
    pub height: usize,
    pub width: usize,
}

/// 繪製時的共用設定
pub struct RenderOptions<'a> {
    pub palette: &'a Palette,
    pub show_line_numbers: bool,
    pub tab_width: usize,
}

impl Pane {
    pub fn new(id: ViewId) -> Self {
        Self {
            id,
            cursor: Cursor::new(),
            offset_row: 0,
            top: 0,
            height: 0,
            width: 0,
        }
    }

    /// 目前顯示的行範圍；視窗沒有高度或落在文件外時為空
    pub fn visible_range(&self, line_count: usize) -> Option<LineRange> {
        if self.height == 0 || self.offset_row >= line_count {
            return None;
        }
        let end = (self.offset_row + self.height - 1).min(line_count - 1);
        Some(LineRange::new(self.offset_row, end))
    }

    /// 捲動使游標保持可見
    pub fn scroll_to_cursor(&mut self) {
        if self.height == 0 {
            return;
        }
        if self.cursor.row < self.offset_row {
            self.offset_row = self.cursor.row;
        }
        if self.cursor.row >= self.offset_row + self.height {
            self.offset_row = self.cursor.row + 1 - self.height;
        }
    }

    pub fn line_number_width(doc: &Document) -> usize {
        doc.line_count().to_string().len() + 1
    }

    pub fn render<W: Write>(
        &self,
        out: &mut W,
        doc: &Document,
        stripes: Option<&StripeLayers>,
        options: &RenderOptions<'_>,
    ) -> Result<()> {
        let palette = options.palette;
        let gutter = if options.show_line_numbers {
            Self::line_number_width(doc)
        } else {
            0
        };
        let text_width = self.width.saturating_sub(gutter);

        for screen_row in 0..self.height {
            let file_row = self.offset_row + screen_row;
            let y = self.top + screen_row as u16;
            queue!(out, cursor::MoveTo(0, y))?;

            if file_row >= doc.line_count() {
                // 文件結束之後顯示波浪號
                queue!(
                    out,
                    style::SetBackgroundColor(rgb_color(palette.background)),
                    style::SetForegroundColor(rgb_color(palette.line_number)),
                    style::Print("~"),
                    Clear(ClearType::UntilNewLine),
                )?;
                continue;
            }

            // 整行上底色（包含行號區）
            queue!(
                out,
                style::SetBackgroundColor(palette.line_background(stripes, file_row))
            )?;

            if options.show_line_numbers {
                queue!(
                    out,
                    style::SetForegroundColor(rgb_color(palette.line_number)),
                    style::Print(format!("{:>width$} ", file_row + 1, width = gutter - 1)),
                )?;
            }

            let line = expand_tabs(&doc.line_text(file_row), options.tab_width);
            let shown = truncate_to_width(&line, text_width);
            let padding = text_width.saturating_sub(visual_width(shown));
            queue!(
                out,
                style::SetForegroundColor(rgb_color(palette.foreground)),
                style::Print(shown),
                style::Print(" ".repeat(padding)),
            )?;
        }

        queue!(out, style::ResetColor)?;
        Ok(())
    }

    /// 游標在螢幕上的位置
    pub fn screen_cursor(&self, doc: &Document, options: &RenderOptions<'_>) -> (u16, u16) {
        let gutter = if options.show_line_numbers {
            Self::line_number_width(doc)
        } else {
            0
        };
        let line = doc.line_text(self.cursor.row);
        let x = gutter + visual_column(&line, self.cursor.col, options.tab_width);
        let y = self.top as usize + self.cursor.row.saturating_sub(self.offset_row);
        (
            x.min(self.width.saturating_sub(1)) as u16,
            y.min(u16::MAX as usize) as u16,
        )
    }
}

/// 畫一列資訊列（分割線或狀態欄）
pub fn render_bar<W: Write>(
    out: &mut W,
    row: u16,
    width: usize,
    text: &str,
    palette: &Palette,
    emphasized: bool,
) -> Result<()> {
    let shown = truncate_to_width(text, width);
    let padding = width.saturating_sub(visual_width(shown));

    queue!(
        out,
        cursor::MoveTo(0, row),
        style::SetBackgroundColor(rgb_color(palette.status_background)),
        style::SetForegroundColor(rgb_color(palette.status_foreground)),
    )?;
    if emphasized {
        queue!(out, style::SetAttribute(Attribute::Bold))?;
    }
    queue!(
        out,
        style::Print(shown),
        style::Print(" ".repeat(padding)),
        style::SetAttribute(Attribute::Reset),
        style::ResetColor,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pane(offset_row: usize, height: usize) -> Pane {
        Pane {
            offset_row,
            height,
            width: 80,
            ..Pane::new(ViewId(0))
        }
    }

    #[test]
    fn test_visible_range() {
        assert_eq!(pane(10, 11).visible_range(100), Some(LineRange::new(10, 20)));
        // 文件比視窗短
        assert_eq!(pane(0, 30).visible_range(5), Some(LineRange::new(0, 4)));
        assert_eq!(pane(0, 0).visible_range(5), None);
        assert_eq!(pane(9, 5).visible_range(5), None);
    }

    #[test]
    fn test_scroll_to_cursor() {
        let mut p = pane(0, 10);
        p.cursor.row = 15;
        p.scroll_to_cursor();
        assert_eq!(p.offset_row, 6);

        p.cursor.row = 3;
        p.scroll_to_cursor();
        assert_eq!(p.offset_row, 3);
    }

    #[test]
    fn test_render_writes_stripe_background() {
        let doc = Document::from_text("a\nb\nc");
        let palette = Palette::for_theme(crate::stripes::ThemeKind::Dark);
        let mut layers = StripeLayers::new();
        layers.set(crate::stripes::ThemeBucket::Dark, vec![0, 2]);
        let options = RenderOptions {
            palette: &palette,
            show_line_numbers: true,
            tab_width: 4,
        };

        let mut out = Vec::new();
        pane(0, 4)
            .render(&mut out, &doc, Some(&layers), &options)
            .unwrap();
        let rendered = String::from_utf8_lossy(&out);

        let (r, g, b) = palette.stripe(crate::stripes::ThemeBucket::Dark);
        let stripe_sgr = format!("\x1b[48;2;{};{};{}m", r, g, b);
        assert_eq!(rendered.matches(&stripe_sgr).count(), 2);
        assert!(rendered.contains('~'));
    }

    #[test]
    fn test_screen_cursor_accounts_for_gutter_and_scroll() {
        let doc = Document::from_text("\tx\nsecond");
        let palette = Palette::for_theme(crate::stripes::ThemeKind::Light);
        let options = RenderOptions {
            palette: &palette,
            show_line_numbers: true,
            tab_width: 4,
        };
        let mut p = pane(0, 5);
        p.top = 3;
        p.cursor.col = 1;

        assert_eq!(p.screen_cursor(&doc, &options), (6, 3));
    }
}
