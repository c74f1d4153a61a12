use crate::stripes::StripeCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    // 字符輸入
    Insert(char),
    Newline,

    // 刪除操作
    Delete,
    Backspace,
    DeleteLine,

    // 光標移動
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    MoveHome,
    MoveEnd,
    PageUp,
    PageDown,
    MoveToFileStart,
    MoveToFileEnd,

    // 文件操作
    Save,
    Quit,

    // 撤銷/重做
    Undo,
    Redo,

    // 視圖控制
    ToggleLineNumbers,
    ToggleSplit,
    SwitchPane,
    CycleTheme,

    // 指令面板與條紋指令
    CommandPalette,
    Stripes(StripeCommand),

    // 清除訊息
    ClearMessage,
}
