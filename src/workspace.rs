//! 編輯器的文件、視窗與條紋存放區
//!
//! `Workspace` 實作條紋控制器需要的宿主能力，並且負責比對
//! 指令前後的狀態，產生要送給控制器的通知。

use crate::buffer::Document;
use crate::cursor::Cursor;
use crate::stripes::{
    DecorationSink, LineRange, StripeEvent, StripeLayers, ThemeBucket, ThemeKind, ThemeSource,
    ViewId, ViewSnapshot, ViewSource,
};
use crate::view::Pane;
use std::collections::HashMap;

/// 最多同時開兩個視窗（上下分割）
pub const MAX_PANES: usize = 2;

pub struct Workspace {
    pub document: Document,
    panes: Vec<Pane>,
    active: usize,
    stripes: HashMap<ViewId, StripeLayers>,
    theme: ThemeKind,
    next_view_id: usize,
    screen: (usize, usize), // (cols, rows)
}

/// 指令執行前的狀態快照
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    revision: u64,
    active: Option<ViewId>,
    visible: Vec<(ViewId, Option<LineRange>)>,
    theme: ThemeKind,
}

impl Workspace {
    pub fn new(document: Document, theme: ThemeKind, screen: (usize, usize)) -> Self {
        let mut workspace = Self {
            document,
            panes: Vec::new(),
            active: 0,
            stripes: HashMap::new(),
            theme,
            next_view_id: 0,
            screen,
        };
        workspace.open_pane();
        workspace.layout();
        workspace
    }

    fn open_pane(&mut self) -> ViewId {
        let id = ViewId(self.next_view_id);
        self.next_view_id += 1;
        self.panes.push(Pane::new(id));
        id
    }

    /// 依螢幕大小重新分配視窗高度；最後一列保留給狀態欄，分割時中間有一列分隔線
    pub fn layout(&mut self) {
        let (cols, rows) = self.screen;
        let text_rows = rows.saturating_sub(1);

        match self.panes.as_mut_slice() {
            [single] => {
                single.top = 0;
                single.height = text_rows;
                single.width = cols;
            }
            [upper, lower] => {
                let upper_height = text_rows.saturating_sub(1) / 2;
                upper.top = 0;
                upper.height = upper_height;
                upper.width = cols;
                lower.top = (upper_height + 1) as u16;
                lower.height = text_rows.saturating_sub(upper_height + 1);
                lower.width = cols;
            }
            _ => {}
        }

        for pane in &mut self.panes {
            pane.scroll_to_cursor();
        }
    }

    pub fn resize(&mut self, cols: usize, rows: usize) {
        self.screen = (cols, rows);
        self.layout();
    }

    pub fn screen(&self) -> (usize, usize) {
        self.screen
    }

    /// 開啟或關閉分割視窗
    pub fn toggle_split(&mut self) {
        if self.panes.len() < MAX_PANES {
            let mut copy = self.active_pane().clone();
            copy.id = self.open_pane();
            copy.top = 0;
            if let Some(pane) = self.panes.last_mut() {
                *pane = copy;
            }
            self.active = self.panes.len() - 1;
        } else {
            let closed = self.panes.remove(self.active);
            self.stripes.remove(&closed.id);
            self.active = 0;
        }
        self.layout();
    }

    pub fn is_split(&self) -> bool {
        self.panes.len() > 1
    }

    pub fn focus_next_pane(&mut self) {
        self.active = (self.active + 1) % self.panes.len();
    }

    pub fn panes(&self) -> &[Pane] {
        &self.panes
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_pane(&self) -> &Pane {
        &self.panes[self.active]
    }

    pub fn active_pane_mut(&mut self) -> &mut Pane {
        &mut self.panes[self.active]
    }

    /// 移動目前視窗的游標並捲動，`action` 的第三個參數是頁高
    pub fn with_cursor<F>(&mut self, action: F)
    where
        F: FnOnce(&mut Cursor, &Document, usize),
    {
        let pane = &mut self.panes[self.active];
        action(&mut pane.cursor, &self.document, pane.height);
        pane.scroll_to_cursor();
    }

    pub fn move_cursor_to_char(&mut self, char_idx: usize) {
        self.with_cursor(|cursor, doc, _| cursor.move_to_char(doc, char_idx));
    }

    /// 修改文件後讓所有視窗的游標都回到文件範圍內
    pub fn clamp_cursors(&mut self) {
        for pane in &mut self.panes {
            pane.cursor.clamp(&self.document);
            pane.scroll_to_cursor();
        }
    }

    pub fn theme(&self) -> ThemeKind {
        self.theme
    }

    pub fn cycle_theme(&mut self) -> ThemeKind {
        self.theme = self.theme.next();
        self.theme
    }

    pub fn stripes_for(&self, view: ViewId) -> Option<&StripeLayers> {
        self.stripes.get(&view)
    }

    pub fn observe(&self) -> Observation {
        let line_count = self.document.line_count();
        Observation {
            revision: self.document.revision(),
            active: self.active_view(),
            visible: self
                .panes
                .iter()
                .map(|pane| (pane.id, pane.visible_range(line_count)))
                .collect(),
            theme: self.theme,
        }
    }

    /// 比對指令前後的狀態，依序產生通知
    pub fn changes_since(&self, before: &Observation) -> Vec<StripeEvent> {
        let after = self.observe();
        let mut events = Vec::new();

        if after.theme != before.theme {
            events.push(StripeEvent::ThemeChanged);
        }
        if after.revision != before.revision {
            events.push(StripeEvent::DocumentChanged);
        }
        for (view, range) in &after.visible {
            let previous = before
                .visible
                .iter()
                .find(|(id, _)| id == view)
                .map(|(_, range)| *range);
            if previous != Some(*range) {
                events.push(StripeEvent::VisibleRangeChanged(*view));
            }
        }
        if after.active != before.active {
            events.push(StripeEvent::ActiveViewChanged(after.active));
        }

        events
    }
}

impl ViewSource for Workspace {
    fn active_view(&self) -> Option<ViewId> {
        self.panes.get(self.active).map(|pane| pane.id)
    }

    fn views(&self) -> Vec<ViewId> {
        self.panes.iter().map(|pane| pane.id).collect()
    }

    fn view_snapshot(&self, view: ViewId) -> Option<ViewSnapshot> {
        let pane = self.panes.iter().find(|pane| pane.id == view)?;
        let line_count = self.document.line_count();
        Some(ViewSnapshot {
            visible: pane.visible_range(line_count).into_iter().collect(),
            line_count,
        })
    }
}

impl ThemeSource for Workspace {
    fn theme_kind(&self) -> ThemeKind {
        self.theme
    }
}

impl DecorationSink for Workspace {
    fn set_stripes(&mut self, view: ViewId, bucket: ThemeBucket, lines: Vec<usize>) {
        // 已關閉的視窗不保留條紋
        if !self.panes.iter().any(|pane| pane.id == view) {
            return;
        }
        self.stripes.entry(view).or_default().set(bucket, lines);
    }
}
