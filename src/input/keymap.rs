use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::handler::Command;
use crate::stripes::StripeCommand;

pub fn handle_key_event(event: KeyEvent) -> Option<Command> {
    match (event.code, event.modifiers) {
        // 基本移動
        (KeyCode::Up, KeyModifiers::NONE) => Some(Command::MoveUp),
        (KeyCode::Down, KeyModifiers::NONE) => Some(Command::MoveDown),
        (KeyCode::Left, KeyModifiers::NONE) => Some(Command::MoveLeft),
        (KeyCode::Right, KeyModifiers::NONE) => Some(Command::MoveRight),
        (KeyCode::Home, KeyModifiers::NONE) => Some(Command::MoveHome),
        (KeyCode::End, KeyModifiers::NONE) => Some(Command::MoveEnd),
        (KeyCode::PageUp, _) => Some(Command::PageUp),
        (KeyCode::PageDown, _) => Some(Command::PageDown),

        // Ctrl 快速移動
        (KeyCode::Home, KeyModifiers::CONTROL) | (KeyCode::Up, KeyModifiers::CONTROL) => {
            Some(Command::MoveToFileStart)
        }
        (KeyCode::End, KeyModifiers::CONTROL) | (KeyCode::Down, KeyModifiers::CONTROL) => {
            Some(Command::MoveToFileEnd)
        }

        // 條紋指令（放在一般字符輸入之前）
        (KeyCode::Char('e'), KeyModifiers::ALT) => Some(Command::Stripes(StripeCommand::Enable)),
        (KeyCode::Char('d'), KeyModifiers::ALT) => Some(Command::Stripes(StripeCommand::Disable)),

        // 字符輸入
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            Some(Command::Insert(c))
        }
        (KeyCode::Enter, _) => Some(Command::Newline),
        (KeyCode::Tab, KeyModifiers::NONE) => Some(Command::Insert('\t')),

        // 刪除操作
        (KeyCode::Backspace, _) => Some(Command::Backspace),
        (KeyCode::Delete, _) => Some(Command::Delete),

        // Ctrl 組合鍵
        (KeyCode::Char('s'), KeyModifiers::CONTROL) => Some(Command::Save),
        (KeyCode::Char('q'), KeyModifiers::CONTROL) => Some(Command::Quit),
        (KeyCode::Char('z'), KeyModifiers::CONTROL) => Some(Command::Undo),
        (KeyCode::Char('y'), KeyModifiers::CONTROL) => Some(Command::Redo),
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => Some(Command::DeleteLine),
        (KeyCode::Char('l'), KeyModifiers::CONTROL) => Some(Command::ToggleLineNumbers),
        (KeyCode::Char('\\'), KeyModifiers::CONTROL) => Some(Command::ToggleSplit),
        (KeyCode::Char('o'), KeyModifiers::CONTROL) => Some(Command::SwitchPane),
        (KeyCode::Char('p'), KeyModifiers::CONTROL) => Some(Command::CommandPalette),

        // 功能鍵（部分終端收不到 Ctrl+\）
        (KeyCode::F(1), _) => Some(Command::CommandPalette),
        (KeyCode::F(2), _) => Some(Command::CycleTheme),
        (KeyCode::F(4), _) => Some(Command::ToggleSplit),
        (KeyCode::F(6), _) => Some(Command::SwitchPane),

        // ESC 清除訊息
        (KeyCode::Esc, _) => Some(Command::ClearMessage),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Option<Command> {
        handle_key_event(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_stripe_shortcuts() {
        assert_eq!(
            key(KeyCode::Char('e'), KeyModifiers::ALT),
            Some(Command::Stripes(StripeCommand::Enable))
        );
        assert_eq!(
            key(KeyCode::Char('d'), KeyModifiers::ALT),
            Some(Command::Stripes(StripeCommand::Disable))
        );
        assert_eq!(
            key(KeyCode::Char('d'), KeyModifiers::CONTROL),
            Some(Command::DeleteLine)
        );
    }

    #[test]
    fn test_view_keys() {
        assert_eq!(key(KeyCode::F(2), KeyModifiers::NONE), Some(Command::CycleTheme));
        assert_eq!(
            key(KeyCode::Char('\\'), KeyModifiers::CONTROL),
            Some(Command::ToggleSplit)
        );
        assert_eq!(key(KeyCode::F(6), KeyModifiers::NONE), Some(Command::SwitchPane));
        assert_eq!(key(KeyCode::F(1), KeyModifiers::NONE), Some(Command::CommandPalette));
    }

    #[test]
    fn test_text_input() {
        assert_eq!(
            key(KeyCode::Char('A'), KeyModifiers::SHIFT),
            Some(Command::Insert('A'))
        );
        assert_eq!(key(KeyCode::Enter, KeyModifiers::NONE), Some(Command::Newline));
        assert_eq!(key(KeyCode::F(12), KeyModifiers::NONE), None);
    }
}
