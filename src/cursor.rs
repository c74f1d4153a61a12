use crate::buffer::Document;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,         // 邏輯行號 (0-based)
    pub col: usize,         // 邏輯列號，以字元計 (0-based)
    pub desired_col: usize, // 上下移動時保持的列
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_up(&mut self, doc: &Document) {
        if self.row > 0 {
            self.row -= 1;
            self.adjust_col_to_desired(doc);
        }
    }

    pub fn move_down(&mut self, doc: &Document) {
        if self.row + 1 < doc.line_count() {
            self.row += 1;
            self.adjust_col_to_desired(doc);
        }
    }

    pub fn move_left(&mut self, doc: &Document) {
        if self.col > 0 {
            self.col -= 1;
        } else if self.row > 0 {
            // 移動到上一行末尾
            self.row -= 1;
            self.col = doc.line_len(self.row);
        }
        self.desired_col = self.col;
    }

    pub fn move_right(&mut self, doc: &Document) {
        if self.col < doc.line_len(self.row) {
            self.col += 1;
        } else if self.row + 1 < doc.line_count() {
            // 移動到下一行開頭
            self.row += 1;
            self.col = 0;
        }
        self.desired_col = self.col;
    }

    pub fn move_to_line_start(&mut self) {
        self.col = 0;
        self.desired_col = 0;
    }

    pub fn move_to_line_end(&mut self, doc: &Document) {
        self.col = doc.line_len(self.row);
        self.desired_col = self.col;
    }

    pub fn move_page_up(&mut self, doc: &Document, page_size: usize) {
        self.row = self.row.saturating_sub(page_size.max(1));
        self.adjust_col_to_desired(doc);
    }

    pub fn move_page_down(&mut self, doc: &Document, page_size: usize) {
        let max_row = doc.line_count().saturating_sub(1);
        self.row = (self.row + page_size.max(1)).min(max_row);
        self.adjust_col_to_desired(doc);
    }

    pub fn move_to_file_start(&mut self) {
        self.row = 0;
        self.move_to_line_start();
    }

    pub fn move_to_file_end(&mut self, doc: &Document) {
        self.row = doc.line_count().saturating_sub(1);
        self.move_to_line_end(doc);
    }

    /// 移到文件中的字元位置（撤銷/重做之後）
    pub fn move_to_char(&mut self, doc: &Document, char_idx: usize) {
        let char_idx = char_idx.min(doc.len_chars());
        self.row = doc.char_to_line(char_idx);
        self.col = char_idx - doc.line_to_char(self.row);
        self.desired_col = self.col;
    }

    /// 文件被其他視窗修改後，確保游標仍在文件範圍內
    pub fn clamp(&mut self, doc: &Document) {
        self.row = self.row.min(doc.line_count().saturating_sub(1));
        self.col = self.col.min(doc.line_len(self.row));
    }

    /// 獲取光標在文本中的絕對字符位置
    pub fn char_position(&self, doc: &Document) -> usize {
        doc.line_to_char(self.row) + self.col
    }

    /// 調整列位置到期望的列，確保不超出行長度
    fn adjust_col_to_desired(&mut self, doc: &Document) {
        self.col = self.desired_col.min(doc.line_len(self.row));
    }
}
