//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use trip_planner_core::types::FilterType;

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, FormMessage, ListMessage};
use crate::model::{App, FormField};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        _ => AppMessage::Noop, // 终端窗口大小改变等，下一轮自动重绘
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 全局快捷键
    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // Esc 是取消信号，交给当前持有者处理
    if DefaultKeymap::CANCEL.matches(&key) {
        return AppMessage::Cancel;
    }

    // 有打开的表单时，按键作用于表单
    if app.board.editing().is_some() {
        handle_form_keys(key, app.cursor.field)
    } else {
        handle_list_keys(key)
    }
}

/// 处理列表的按键
fn handle_list_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::EDIT.matches(&key) {
        return AppMessage::List(ListMessage::Edit);
    }
    if DefaultKeymap::FAVORITE.matches(&key) {
        return AppMessage::List(ListMessage::ToggleFavorite);
    }
    if DefaultKeymap::SORT.matches(&key) {
        return AppMessage::List(ListMessage::NextSort);
    }
    if DefaultKeymap::DELETE.matches(&key) {
        return AppMessage::List(ListMessage::Delete);
    }

    match key.code {
        // ↑ 或 k: 上一项
        KeyCode::Up | KeyCode::Char('k') => AppMessage::List(ListMessage::SelectPrevious),
        // ↓ 或 j: 下一项
        KeyCode::Down | KeyCode::Char('j') => AppMessage::List(ListMessage::SelectNext),
        // Home: 跳到第一项
        KeyCode::Home => AppMessage::List(ListMessage::SelectFirst),
        // End: 跳到最后一项
        KeyCode::End => AppMessage::List(ListMessage::SelectLast),
        // 1-4: 选择过滤器
        KeyCode::Char(ch @ '1'..='4') => {
            let index = ch as usize - '1' as usize;
            AppMessage::List(ListMessage::SelectFilter(FilterType::ALL[index]))
        }
        _ => AppMessage::Noop,
    }
}

/// 处理编辑表单的按键
fn handle_form_keys(key: KeyEvent, field: FormField) -> AppMessage {
    if DefaultKeymap::SUBMIT.matches(&key) {
        return AppMessage::Form(FormMessage::Submit);
    }
    if DefaultKeymap::FORM_RESET.matches(&key) {
        return AppMessage::Form(FormMessage::Reset);
    }
    if DefaultKeymap::DELETE.matches(&key) {
        return AppMessage::Form(FormMessage::Delete);
    }
    // 空格在附加服务字段上是勾选，其他字段是普通输入
    if field == FormField::Offers && DefaultKeymap::TOGGLE_OFFER.matches(&key) {
        return AppMessage::Form(FormMessage::ToggleOffer);
    }

    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    match key.code {
        // Tab / ↓: 下一个字段
        KeyCode::Tab | KeyCode::Down => AppMessage::Form(FormMessage::NextField),

        // Shift+Tab / ↑: 上一个字段
        KeyCode::BackTab | KeyCode::Up => AppMessage::Form(FormMessage::PrevField),

        // ← →: 切换当前字段的值，Shift 加大步长
        KeyCode::Left if shift => AppMessage::Form(FormMessage::PrevLarge),
        KeyCode::Right if shift => AppMessage::Form(FormMessage::NextLarge),
        KeyCode::Left => AppMessage::Form(FormMessage::Prev),
        KeyCode::Right => AppMessage::Form(FormMessage::Next),

        // Backspace: 删除字符
        KeyCode::Backspace => AppMessage::Form(FormMessage::Backspace),

        // 字符输入
        KeyCode::Char(ch) if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT => {
            AppMessage::Form(FormMessage::Input(ch))
        }

        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    use crate::test_utils::test_app;
    use crate::update::update;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn key(code: KeyCode) -> Event {
        press(code, KeyModifiers::NONE)
    }

    #[test]
    fn list_keys_map_to_list_messages() {
        let app = test_app();
        assert!(matches!(
            handle_event(key(KeyCode::Enter), &app),
            AppMessage::List(ListMessage::Edit)
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Char('f')), &app),
            AppMessage::List(ListMessage::ToggleFavorite)
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Char('3')), &app),
            AppMessage::List(ListMessage::SelectFilter(FilterType::Present))
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Char('q')), &app),
            AppMessage::Quit
        ));
    }

    #[test]
    fn escape_is_always_cancel() {
        let mut app = test_app();
        assert!(matches!(handle_event(key(KeyCode::Esc), &app), AppMessage::Cancel));

        update(&mut app, AppMessage::List(ListMessage::Edit));
        assert!(matches!(handle_event(key(KeyCode::Esc), &app), AppMessage::Cancel));
    }

    #[test]
    fn form_keys_route_to_form() {
        let mut app = test_app();
        update(&mut app, AppMessage::List(ListMessage::Edit));

        assert!(matches!(
            handle_event(key(KeyCode::Enter), &app),
            AppMessage::Form(FormMessage::Submit)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('r'), KeyModifiers::CONTROL), &app),
            AppMessage::Form(FormMessage::Reset)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Right, KeyModifiers::SHIFT), &app),
            AppMessage::Form(FormMessage::NextLarge)
        ));
        // 表单中 q 是普通输入
        assert!(matches!(
            handle_event(key(KeyCode::Char('q')), &app),
            AppMessage::Form(FormMessage::Input('q'))
        ));
    }

    #[test]
    fn space_toggles_only_on_offers_field() {
        let mut app = test_app();
        update(&mut app, AppMessage::List(ListMessage::Edit));
        assert!(matches!(
            handle_event(key(KeyCode::Char(' ')), &app),
            AppMessage::Form(FormMessage::Input(' '))
        ));

        app.cursor.field = FormField::Offers;
        assert!(matches!(
            handle_event(key(KeyCode::Char(' ')), &app),
            AppMessage::Form(FormMessage::ToggleOffer)
        ));
    }

    #[test]
    fn release_events_are_ignored() {
        let app = test_app();
        let event = Event::Key(KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert!(matches!(handle_event(event, &app), AppMessage::Noop));
    }
}
