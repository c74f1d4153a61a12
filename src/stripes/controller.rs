//! 條紋控制器：把宿主事件轉成條紋重繪

use super::command::StripeCommand;
use super::host::{StripeHost, ViewId};
use super::range::striped_lines;
use super::theme::ThemeBucket;

/// 控制器的兩個旗標，生命週期與外掛啟用期間相同
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripeState {
    pub enabled: bool,
    /// 主題切換後，上一組條紋可能是錯的主題，需要清除一次
    pub theme_dirty: bool,
}

impl StripeState {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            theme_dirty: false,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Default for StripeState {
    fn default() -> Self {
        Self::new(true)
    }
}

/// 宿主送來的通知
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripeEvent {
    /// 文件內容被修改
    DocumentChanged,
    /// 某個視圖（不一定是目前視圖）的可見範圍改變
    VisibleRangeChanged(ViewId),
    /// 切換目前視圖，None 表示沒有開啟的視圖
    ActiveViewChanged(Option<ViewId>),
    ThemeChanged,
}

#[derive(Debug, Clone, Default)]
pub struct Striper {
    state: StripeState,
}

impl Striper {
    pub fn new(state: StripeState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> StripeState {
        self.state
    }

    pub fn is_enabled(&self) -> bool {
        self.state.enabled
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// 讓視圖的條紋與目前狀態一致（完整取代，可重複呼叫）
    pub fn redraw<H: StripeHost>(&mut self, host: &mut H, view: ViewId) {
        let Some(snapshot) = host.view_snapshot(view) else {
            log::debug!("redraw skipped: view {:?} is gone", view);
            return;
        };

        if !self.state.enabled {
            Self::clear_all(host, view);
            return;
        }

        self.clear_stale(host, view);

        let bucket = host.theme_kind().bucket();
        let lines = striped_lines(&snapshot.visible, snapshot.line_count);
        log::trace!(
            "redraw {:?}: {} striped lines in {:?} set",
            view,
            lines.len(),
            bucket
        );
        host.set_stripes(view, bucket, lines);
    }

    /// 清除兩組條紋
    pub fn clear_all<H: StripeHost>(host: &mut H, view: ViewId) {
        for bucket in ThemeBucket::ALL {
            host.set_stripes(view, bucket, Vec::new());
        }
    }

    /// 主題變更過才清除非目前主題的那組，並重置旗標
    fn clear_stale<H: StripeHost>(&mut self, host: &mut H, view: ViewId) {
        if !self.state.theme_dirty {
            return;
        }
        let stale = host.theme_kind().bucket().other();
        log::debug!("clearing stale {:?} stripes on {:?}", stale, view);
        host.set_stripes(view, stale, Vec::new());
        self.state.theme_dirty = false;
    }

    pub fn enable<H: StripeHost>(&mut self, host: &mut H) {
        self.state.enabled = true;
        self.redraw_active(host);
    }

    pub fn disable<H: StripeHost>(&mut self, host: &mut H) {
        self.state.enabled = false;
        self.redraw_active(host);
    }

    pub fn execute<H: StripeHost>(&mut self, host: &mut H, command: StripeCommand) {
        log::debug!("command {}", command.id());
        match command {
            StripeCommand::Enable => self.enable(host),
            StripeCommand::Disable => self.disable(host),
        }
    }

    pub fn handle_event<H: StripeHost>(&mut self, host: &mut H, event: StripeEvent) {
        match event {
            StripeEvent::DocumentChanged => self.redraw_active(host),
            StripeEvent::VisibleRangeChanged(view) => self.redraw(host, view),
            StripeEvent::ActiveViewChanged(Some(view)) => self.redraw(host, view),
            StripeEvent::ActiveViewChanged(None) => {}
            StripeEvent::ThemeChanged => {
                self.state.theme_dirty = true;
                // 立即清掉所有視圖的舊主題條紋，不等下一次捲動或編輯
                // 沒有視圖時保留旗標，由下一次重繪清除
                let views = host.views();
                if !views.is_empty() {
                    let stale = host.theme_kind().bucket().other();
                    for view in views {
                        log::debug!("clearing stale {:?} stripes on {:?}", stale, view);
                        host.set_stripes(view, stale, Vec::new());
                    }
                    self.state.theme_dirty = false;
                }
            }
        }
    }

    fn redraw_active<H: StripeHost>(&mut self, host: &mut H) {
        if let Some(view) = host.active_view() {
            self.redraw(host, view);
        }
    }
}
