use crate::buffer::Document;
use crate::config::Config;
use crate::dialog;
use crate::input::{handle_key_event, Command};
use crate::palette::Palette;
use crate::stripes::{StripeCommand, StripeState, Striper};
use crate::terminal::{Terminal, TerminalEvent};
use crate::view::{render_bar, RenderOptions};
use crate::workspace::Workspace;
use anyhow::Result;
use std::io::{self, Write};

pub struct Editor {
    workspace: Workspace,
    striper: Striper,
    terminal: Terminal,
    config: Config,
    should_quit: bool,
    message: Option<String>,
    quit_times: u8, // 追蹤連續按 Ctrl+Q 的次數
}

impl Editor {
    pub fn new(config: Config) -> Result<Self> {
        let document = match &config.file {
            Some(path) => Document::open(path, config.encoding)?,
            None => Document::new(),
        };

        let terminal = Terminal::new()?;
        let (cols, rows) = terminal.size();
        let screen = (cols as usize, rows as usize);
        let mut workspace = Workspace::new(document, config.theme, screen);
        if config.split {
            workspace.toggle_split();
        }

        let striper = Striper::new(StripeState::new(config.stripes_enabled));

        Ok(Self {
            workspace,
            striper,
            terminal,
            config,
            should_quit: false,
            message: None,
            quit_times: 0,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        Terminal::enter_raw_mode()?;
        Terminal::clear_screen()?;

        // 開啟時先畫一次所有視窗
        let views: Vec<_> = self.workspace.panes().iter().map(|pane| pane.id).collect();
        for view in views {
            self.striper.redraw(&mut self.workspace, view);
        }

        while !self.should_quit {
            self.render()?;

            let before = self.workspace.observe();
            match Terminal::read_event()? {
                TerminalEvent::Key(key_event) => {
                    if let Some(command) = handle_key_event(key_event) {
                        self.handle_command(command)?;
                    }
                }
                TerminalEvent::Resize(cols, rows) => {
                    self.terminal.set_size(cols, rows);
                    self.workspace.resize(cols as usize, rows as usize);
                    Terminal::clear_screen()?;
                }
            }

            // 依序把狀態變化通知條紋控制器
            for event in self.workspace.changes_since(&before) {
                log::debug!("stripe event {:?}", event);
                self.striper.handle_event(&mut self.workspace, event);
            }
        }

        Terminal::exit_raw_mode()?;
        Ok(())
    }

    fn handle_command(&mut self, command: Command) -> Result<()> {
        // 任何非 Quit 的命令都重置 quit_times
        if !matches!(command, Command::Quit) {
            self.quit_times = 0;
        }

        match command {
            Command::Insert(ch) => self.insert_char(ch),
            Command::Newline => self.insert_char('\n'),

            Command::Backspace => {
                let pos = self.cursor_position();
                if pos > 0 {
                    self.workspace.document.delete_char(pos - 1);
                    self.workspace.move_cursor_to_char(pos - 1);
                }
            }
            Command::Delete => {
                let pos = self.cursor_position();
                self.workspace.document.delete_char(pos);
            }
            Command::DeleteLine => {
                let row = self.workspace.active_pane().cursor.row;
                self.workspace.document.delete_line(row);
                self.workspace.active_pane_mut().cursor.move_to_line_start();
            }

            Command::MoveUp => self.workspace.with_cursor(|c, doc, _| c.move_up(doc)),
            Command::MoveDown => self.workspace.with_cursor(|c, doc, _| c.move_down(doc)),
            Command::MoveLeft => self.workspace.with_cursor(|c, doc, _| c.move_left(doc)),
            Command::MoveRight => self.workspace.with_cursor(|c, doc, _| c.move_right(doc)),
            Command::MoveHome => self.workspace.with_cursor(|c, _, _| c.move_to_line_start()),
            Command::MoveEnd => self.workspace.with_cursor(|c, doc, _| c.move_to_line_end(doc)),
            Command::PageUp => {
                self.workspace
                    .with_cursor(|c, doc, page| c.move_page_up(doc, page));
            }
            Command::PageDown => {
                self.workspace
                    .with_cursor(|c, doc, page| c.move_page_down(doc, page));
            }
            Command::MoveToFileStart => {
                self.workspace.with_cursor(|c, _, _| c.move_to_file_start());
            }
            Command::MoveToFileEnd => {
                self.workspace.with_cursor(|c, doc, _| c.move_to_file_end(doc));
            }

            Command::Save => match self.workspace.document.save() {
                Ok(()) => self.message = Some("File saved successfully".to_string()),
                Err(err) => {
                    log::error!("save failed: {:#}", err);
                    self.message = Some(format!("Error saving file: {}", err));
                }
            },
            Command::Quit => {
                if self.workspace.document.is_modified() && self.quit_times == 0 {
                    self.message = Some(
                        "File modified. Press Ctrl+Q again to quit without saving".to_string(),
                    );
                    self.quit_times = 1;
                } else {
                    self.should_quit = true;
                }
            }

            Command::Undo => {
                if let Some(pos) = self.workspace.document.undo() {
                    self.workspace.move_cursor_to_char(pos);
                }
            }
            Command::Redo => {
                if let Some(pos) = self.workspace.document.redo() {
                    self.workspace.move_cursor_to_char(pos);
                }
            }

            Command::ToggleLineNumbers => {
                self.config.line_numbers = !self.config.line_numbers;
            }
            Command::ToggleSplit => {
                self.workspace.toggle_split();
                Terminal::clear_screen()?;
            }
            Command::SwitchPane => self.workspace.focus_next_pane(),
            Command::CycleTheme => {
                let theme = self.workspace.cycle_theme();
                self.message = Some(format!("Theme: {}", theme));
            }

            Command::CommandPalette => self.open_command_palette()?,
            Command::Stripes(command) => self.run_stripe_command(command),

            Command::ClearMessage => self.message = None,
        }

        self.workspace.clamp_cursors();
        Ok(())
    }

    fn cursor_position(&self) -> usize {
        self.workspace
            .active_pane()
            .cursor
            .char_position(&self.workspace.document)
    }

    fn insert_char(&mut self, ch: char) {
        let pos = self.cursor_position();
        self.workspace.document.insert_char(pos, ch);
        self.workspace.move_cursor_to_char(pos + 1);
    }

    fn open_command_palette(&mut self) -> Result<()> {
        let (cols, rows) = self.workspace.screen();
        let palette = Palette::for_theme(self.workspace.theme());
        let hint = StripeCommand::ALL
            .iter()
            .map(|command| command.id())
            .collect::<Vec<_>>()
            .join(" | ");
        let row = rows.saturating_sub(1) as u16;

        let Some(input) = dialog::prompt(&format!("Command ({}):", hint), row, cols, &palette)?
        else {
            return Ok(());
        };

        match StripeCommand::from_id(&input) {
            Some(command) => self.run_stripe_command(command),
            None if input.trim().is_empty() => {}
            None => self.message = Some(format!("Unknown command: {}", input.trim())),
        }
        Ok(())
    }

    fn run_stripe_command(&mut self, command: StripeCommand) {
        self.striper.execute(&mut self.workspace, command);
        self.message = Some(command.title().to_string());
    }

    fn render(&self) -> Result<()> {
        let mut stdout = io::stdout();
        let palette = Palette::for_theme(self.workspace.theme());
        let options = RenderOptions {
            palette: &palette,
            show_line_numbers: self.config.line_numbers,
            tab_width: self.config.tab_width,
        };
        let doc = &self.workspace.document;
        let (cols, rows) = self.workspace.screen();

        Terminal::hide_cursor()?;

        for (idx, pane) in self.workspace.panes().iter().enumerate() {
            pane.render(
                &mut stdout,
                doc,
                self.workspace.stripes_for(pane.id),
                &options,
            )?;

            // 上方視窗與下方視窗之間的分隔線
            if idx + 1 < self.workspace.panes().len() {
                let marker = if idx == self.workspace.active_index() {
                    "*"
                } else {
                    " "
                };
                let text = format!(" {} {} (pane {})", marker, doc.file_name(), pane.id.0);
                render_bar(
                    &mut stdout,
                    pane.top + pane.height as u16,
                    cols,
                    &text,
                    &palette,
                    false,
                )?;
            }
        }

        self.render_status_bar(&mut stdout, rows, cols, &palette)?;

        let (x, y) = self.workspace.active_pane().screen_cursor(doc, &options);
        Terminal::set_cursor_position(x, y)?;
        Terminal::show_cursor()?;
        stdout.flush()?;
        Ok(())
    }

    fn render_status_bar<W: Write>(
        &self,
        out: &mut W,
        rows: usize,
        cols: usize,
        palette: &Palette,
    ) -> Result<()> {
        let doc = &self.workspace.document;
        let modified = if doc.is_modified() { " [modified]" } else { "" };
        let filename = doc.file_name();

        let status = match &self.message {
            Some(msg) => format!(" {}{} - {}", filename, modified, msg),
            None => format!(
                " {}{}  Line {}/{}  {}  {}  Theme:{}  Stripes:{}  F1:Commands",
                filename,
                modified,
                self.workspace.active_pane().cursor.row + 1,
                doc.line_count(),
                doc.encoding().name(),
                if self.workspace.is_split() { "Split" } else { "" },
                self.workspace.theme(),
                if self.striper.is_enabled() { "on" } else { "off" },
            ),
        };

        render_bar(
            out,
            rows.saturating_sub(1) as u16,
            cols,
            &status,
            palette,
            self.message.is_some(),
        )
    }
}
