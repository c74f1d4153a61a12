// 對話框模組 - 單列輸入框（指令面板）

use crate::palette::{rgb_color, Palette};
use crate::terminal::{Terminal, TerminalEvent};
use crate::utils::{truncate_to_width, visual_width};
use anyhow::Result;
use crossterm::{cursor, event::KeyCode, queue, style};
use std::io::{self, Write};

/// 按鍵處理後的結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptStep {
    Continue,
    Submit(String),
    Cancel,
}

/// 輸入框的文字狀態
#[derive(Debug, Default)]
pub struct Prompt {
    input: String,
}

impl Prompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn apply_key(&mut self, code: KeyCode) -> PromptStep {
        match code {
            KeyCode::Enter => PromptStep::Submit(std::mem::take(&mut self.input)),
            KeyCode::Esc => PromptStep::Cancel,
            KeyCode::Char(c) => {
                self.input.push(c);
                PromptStep::Continue
            }
            KeyCode::Backspace => {
                self.input.pop();
                PromptStep::Continue
            }
            _ => PromptStep::Continue,
        }
    }
}

/// 在狀態欄上方顯示輸入框，回傳輸入內容；ESC 取消回傳 None
pub fn prompt(
    prompt_text: &str,
    row: u16,
    width: usize,
    palette: &Palette,
) -> Result<Option<String>> {
    let mut state = Prompt::new();
    let mut stdout = io::stdout();

    loop {
        let display = format!(" {} {}", prompt_text, state.input());
        let shown = truncate_to_width(&display, width);
        let padding = width.saturating_sub(visual_width(shown));

        queue!(
            stdout,
            cursor::MoveTo(0, row),
            style::SetBackgroundColor(rgb_color(palette.status_foreground)),
            style::SetForegroundColor(rgb_color(palette.status_background)),
            style::Print(shown),
            style::Print(" ".repeat(padding)),
            style::ResetColor,
            cursor::MoveTo(visual_width(shown).min(width.saturating_sub(1)) as u16, row),
            cursor::Show,
        )?;
        stdout.flush()?;

        if let TerminalEvent::Key(key) = Terminal::read_event()? {
            match state.apply_key(key.code) {
                PromptStep::Continue => {}
                PromptStep::Submit(input) => return Ok(Some(input)),
                PromptStep::Cancel => return Ok(None),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_editing() {
        let mut prompt = Prompt::new();
        for c in "striping.enablx".chars() {
            assert_eq!(prompt.apply_key(KeyCode::Char(c)), PromptStep::Continue);
        }
        prompt.apply_key(KeyCode::Backspace);
        prompt.apply_key(KeyCode::Char('e'));
        assert_eq!(prompt.input(), "striping.enable");

        assert_eq!(
            prompt.apply_key(KeyCode::Enter),
            PromptStep::Submit("striping.enable".to_string())
        );
        assert_eq!(prompt.input(), "");
    }

    #[test]
    fn test_prompt_cancel() {
        let mut prompt = Prompt::new();
        prompt.apply_key(KeyCode::Char('x'));
        assert_eq!(prompt.apply_key(KeyCode::Esc), PromptStep::Cancel);
    }
}
