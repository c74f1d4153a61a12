use anyhow::Result;
use zebra::terminal::Terminal;
use zebra::{utils, Config, Editor};

const HELP: &str = "\
zebra - A minimalist terminal editor with alternating line stripes

USAGE:
  zebra [OPTIONS] [FILE]

OPTIONS:
  --theme <KIND>        Start theme: dark, light, high-contrast, high-contrast-light
  --no-stripes          Start with line stripes disabled
  --split               Open the file in two stacked panes
  --no-line-numbers     Hide line numbers
  --tab-width <N>       Tab display width (default: 4)
  --encoding <LABEL>    Read/save encoding when the file has no BOM (e.g. gbk, big5)
  --debug               Write debug logs to zebra.log in the temp directory
  -h, --help            Print help
  -V, --version         Print version

KEYBOARD SHORTCUTS:
  Ctrl+S              Save file
  Ctrl+Q              Quit (press twice if modified)
  Ctrl+Z / Ctrl+Y     Undo / Redo
  Ctrl+D              Delete current line
  Ctrl+L              Toggle line numbers
  Ctrl+\\ or F4        Split / unsplit panes
  Ctrl+O or F6        Switch active pane
  F2                  Cycle theme
  F1 or Ctrl+P        Command palette (striping.enable, striping.disable)
  Alt+E / Alt+D       Enable / disable line stripes
";

fn main() -> Result<()> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{}", HELP);
        return Ok(());
    }
    if args.contains(["-V", "--version"]) {
        println!("zebra {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = match Config::from_args(args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {:#}\n\n{}", err, HELP);
            std::process::exit(2);
        }
    };

    // 初始化日誌
    utils::init_logger(config.debug);

    // 創建並運行編輯器
    let mut editor = Editor::new(config)?;

    // 設置 panic hook 以確保終端正常恢復
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = Terminal::exit_raw_mode();
        let _ = Terminal::show_cursor();
        original_hook(panic_info);
    }));

    editor.run()?;

    Ok(())
}
