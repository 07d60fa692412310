//! 应用主状态结构

use trip_planner_core::presenter::EventPresenter;
use trip_planner_core::types::{EventId, PendingChange};
use trip_planner_core::EventBoard;

use super::{FormCursor, TerminalSurface};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 事件列表（presenter 与记录集合）
    pub board: EventBoard<TerminalSurface>,

    /// 列表中选中的行
    pub selected: usize,

    /// 编辑表单的光标
    pub cursor: FormCursor,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 待发送的存储请求，由主循环交给 StoreBridge
    pub outbox: Vec<PendingChange>,

    /// 已发送、尚未返回的请求数
    pub in_flight: usize,
}

impl App {
    /// 创建新的应用实例
    pub fn new(board: EventBoard<TerminalSurface>) -> Self {
        Self {
            should_quit: false,
            board,
            selected: 0,
            cursor: FormCursor::default(),
            status_message: None,
            outbox: Vec::new(),
            in_flight: 0,
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// 当前选中的 presenter
    pub fn selected_presenter(&self) -> Option<&EventPresenter> {
        self.board.presenters().get(self.selected)
    }

    pub fn selected_id(&self) -> Option<EventId> {
        self.selected_presenter().map(|p| p.id().clone())
    }

    /// 正在编辑的事件
    pub fn editing_id(&self) -> Option<EventId> {
        self.board.editing().map(|p| p.id().clone())
    }

    /// 选中指定事件；不在列表中时保持原位置
    pub fn select_id(&mut self, id: &EventId) {
        if let Some(index) = self.board.presenters().iter().position(|p| p.id() == id) {
            self.selected = index;
        }
        self.clamp_selection();
    }

    /// 列表变短后修正选中位置
    pub fn clamp_selection(&mut self) {
        let len = self.board.presenters().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    /// 放入一个存储请求
    pub fn enqueue(&mut self, change: PendingChange) {
        self.outbox.push(change);
    }
}
