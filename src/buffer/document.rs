use anyhow::{bail, Context, Result};
use ropey::{Rope, RopeSlice};
use std::fs;
use std::path::{Path, PathBuf};

use super::history::{Edit, History};

/// 編輯中的文件（ropey 文本 + 編碼 + 歷史）
pub struct Document {
    rope: Rope,
    file_path: Option<PathBuf>,
    modified: bool,
    history: History,
    encoding: &'static encoding_rs::Encoding,
    /// 每次內容改變就遞增，供編輯器判斷是否需要發出文件變更通知
    revision: u64,
}

impl Document {
    pub fn new() -> Self {
        Self {
            rope: Rope::new(),
            file_path: None,
            modified: false,
            history: History::default(),
            encoding: encoding_rs::UTF_8,
            revision: 0,
        }
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            ..Self::new()
        }
    }

    /// 依 BOM 檢測編碼，回傳 (編碼, BOM 長度)
    fn detect_encoding(bytes: &[u8]) -> (&'static encoding_rs::Encoding, usize) {
        match encoding_rs::Encoding::for_bom(bytes) {
            Some((encoding, bom_len)) => (encoding, bom_len),
            // 無 BOM，預設 UTF-8
            None => (encoding_rs::UTF_8, 0),
        }
    }

    /// 開啟文件；文件不存在時建立空文件，存檔時才寫入
    pub fn open(path: &Path, encoding: Option<&'static encoding_rs::Encoding>) -> Result<Self> {
        if !path.exists() {
            return Ok(Self {
                file_path: Some(path.to_path_buf()),
                encoding: encoding.unwrap_or(encoding_rs::UTF_8),
                ..Self::new()
            });
        }

        let bytes =
            fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

        // 有 BOM 時 BOM 優先，否則使用指定編碼
        let (bom_encoding, bom_len) = Self::detect_encoding(&bytes);
        let encoding = match encoding {
            Some(specified) if bom_len == 0 => specified,
            _ => bom_encoding,
        };

        let (decoded, _, had_errors) = encoding.decode(&bytes[bom_len..]);
        if had_errors {
            log::warn!("Encoding errors detected in file: {}", path.display());
        }
        log::debug!(
            "opened {} as {} ({} bytes)",
            path.display(),
            encoding.name(),
            bytes.len()
        );

        Ok(Self {
            rope: Rope::from_str(&decoded),
            file_path: Some(path.to_path_buf()),
            encoding,
            ..Self::new()
        })
    }

    pub fn insert(&mut self, pos: usize, text: &str) {
        if text.is_empty() {
            return;
        }
        let edit = Edit::Insert {
            pos: pos.min(self.rope.len_chars()),
            text: text.to_string(),
        };
        self.apply(&edit);
        self.history.record(edit);
    }

    pub fn insert_char(&mut self, pos: usize, ch: char) {
        let mut tmp = [0u8; 4];
        self.insert(pos, ch.encode_utf8(&mut tmp));
    }

    pub fn remove(&mut self, start: usize, end: usize) {
        let end = end.min(self.rope.len_chars());
        if start >= end {
            return;
        }
        let edit = Edit::Remove {
            pos: start,
            text: self.rope.slice(start..end).to_string(),
        };
        self.apply(&edit);
        self.history.record(edit);
    }

    pub fn delete_char(&mut self, pos: usize) {
        self.remove(pos, pos + 1);
    }

    pub fn delete_line(&mut self, row: usize) {
        if row >= self.line_count() {
            return;
        }
        let start = self.rope.line_to_char(row);
        let end = if row + 1 < self.line_count() {
            self.rope.line_to_char(row + 1)
        } else {
            self.rope.len_chars()
        };
        // 最後一行是空行時，改為刪除前一行的換行符
        let start = if end == self.rope.len_chars() && row > 0 && start == end {
            start - 1
        } else {
            start
        };
        self.remove(start, end);
    }

    fn apply(&mut self, edit: &Edit) {
        match edit {
            Edit::Insert { pos, text } => self.rope.insert(*pos, text),
            Edit::Remove { pos, text } => {
                self.rope.remove(*pos..*pos + text.chars().count());
            }
        }
        self.modified = true;
        self.revision += 1;
    }

    /// 撤銷，回傳游標應在的字元位置
    pub fn undo(&mut self) -> Option<usize> {
        let edit = self.history.undo()?.inverse();
        self.apply(&edit);
        Some(match edit {
            Edit::Insert { pos, .. } | Edit::Remove { pos, .. } => pos,
        })
    }

    pub fn redo(&mut self) -> Option<usize> {
        let edit = self.history.redo()?;
        self.apply(&edit);
        Some(match edit {
            Edit::Insert { pos, text } => pos + text.chars().count(),
            Edit::Remove { pos, .. } => pos,
        })
    }

    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    pub fn line(&self, idx: usize) -> Option<RopeSlice<'_>> {
        if idx < self.line_count() {
            Some(self.rope.line(idx))
        } else {
            None
        }
    }

    /// 行內容（不含換行符）
    pub fn line_text(&self, idx: usize) -> String {
        self.line(idx)
            .map(|line| line.to_string().trim_end_matches(['\n', '\r']).to_string())
            .unwrap_or_default()
    }

    /// 行長度（字元數，不含換行符）
    pub fn line_len(&self, idx: usize) -> usize {
        self.line_text(idx).chars().count()
    }

    pub fn line_to_char(&self, line_idx: usize) -> usize {
        self.rope.line_to_char(line_idx.min(self.line_count()))
    }

    pub fn char_to_line(&self, char_idx: usize) -> usize {
        self.rope.char_to_line(char_idx.min(self.rope.len_chars()))
    }

    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn save(&mut self) -> Result<()> {
        let Some(path) = self.file_path.clone() else {
            bail!("No file path set");
        };
        let contents = self.rope.to_string();
        let (encoded, _, had_errors) = self.encoding.encode(&contents);
        if had_errors {
            log::warn!(
                "Encoding errors occurred while saving file: {}",
                path.display()
            );
        }
        fs::write(&path, encoded)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        self.modified = false;
        Ok(())
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn file_name(&self) -> String {
        self.file_path
            .as_ref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or("[No Name]")
            .to_string()
    }

    pub fn encoding(&self) -> &'static encoding_rs::Encoding {
        self.encoding
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_utf8_file_detection() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test_utf8.txt");
        fs::write(&file_path, "Hello, 世界!\nsecond").unwrap();

        let doc = Document::open(&file_path, None).unwrap();
        assert_eq!(doc.encoding().name(), "UTF-8");
        assert_eq!(doc.line_count(), 2);
        assert_eq!(doc.line_text(0), "Hello, 世界!");
        assert!(!doc.is_modified());
    }

    #[test]
    fn test_utf16le_bom_wins_over_specified() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test_utf16le.txt");

        let mut content = vec![0xFF, 0xFE];
        content.extend("Hello".encode_utf16().flat_map(|c| c.to_le_bytes()));
        fs::write(&file_path, content).unwrap();

        let doc = Document::open(&file_path, Some(encoding_rs::GBK)).unwrap();
        assert_eq!(doc.encoding().name(), "UTF-16LE");
        assert_eq!(doc.text(), "Hello");
    }

    #[test]
    fn test_gbk_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test_gbk.txt");
        let (encoded, _, _) = encoding_rs::GBK.encode("你好");
        fs::write(&file_path, &encoded).unwrap();

        let mut doc = Document::open(&file_path, Some(encoding_rs::GBK)).unwrap();
        assert_eq!(doc.text(), "你好");

        doc.insert(2, "!");
        doc.save().unwrap();
        let bytes = fs::read(&file_path).unwrap();
        let (decoded, _, _) = encoding_rs::GBK.decode(&bytes);
        assert_eq!(decoded, "你好!");
        assert!(!doc.is_modified());
    }

    #[test]
    fn test_missing_file_opens_empty() {
        let temp_dir = TempDir::new().unwrap();
        let doc = Document::open(&temp_dir.path().join("new.txt"), None).unwrap();
        assert_eq!(doc.line_count(), 1);
        assert_eq!(doc.file_name(), "new.txt");
    }

    #[test]
    fn test_revision_tracks_edits() {
        let mut doc = Document::from_text("abc");
        assert_eq!(doc.revision(), 0);

        doc.insert_char(3, '\n');
        doc.delete_char(0);
        assert_eq!(doc.revision(), 2);

        // 越界刪除不算修改
        doc.delete_char(100);
        assert_eq!(doc.revision(), 2);
    }

    #[test]
    fn test_undo_redo_multibyte() {
        let mut doc = Document::from_text("ab");
        doc.insert(1, "世界");
        assert_eq!(doc.text(), "a世界b");

        assert_eq!(doc.undo(), Some(1));
        assert_eq!(doc.text(), "ab");
        assert_eq!(doc.redo(), Some(3));
        assert_eq!(doc.text(), "a世界b");
        assert_eq!(doc.redo(), None);
    }

    #[test]
    fn test_delete_line() {
        let mut doc = Document::from_text("one\ntwo\nthree");
        doc.delete_line(1);
        assert_eq!(doc.text(), "one\nthree");

        doc.delete_line(1);
        assert_eq!(doc.text(), "one\n");

        assert_eq!(doc.undo(), Some(4));
        assert_eq!(doc.text(), "one\nthree");
    }
}
