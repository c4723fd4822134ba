//! 键盘/鼠标事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action，映射取决于当前标签

use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};

use super::actions::Action;
use super::state::App;
use crate::models::Tab;

/// 根据当前标签和按键获取对应的 Action
pub fn get_action(tab: Tab, key: KeyCode) -> Option<Action> {
    // 所有标签通用
    let global = match key {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(c @ '1'..='4') => {
            Tab::from_index(c as usize - '1' as usize).map(Action::SelectTab)
        }
        KeyCode::Tab | KeyCode::Char('l') | KeyCode::Right => Some(Action::NextTab),
        KeyCode::BackTab | KeyCode::Char('h') | KeyCode::Left => Some(Action::PrevTab),
        KeyCode::PageDown | KeyCode::Char(' ') => Some(Action::PageDown),
        KeyCode::PageUp => Some(Action::PageUp),
        _ => None,
    };
    if global.is_some() {
        return global;
    }

    match tab {
        Tab::Home => match key {
            KeyCode::Enter | KeyCode::Char('r') => Some(Action::ExploreResearch),
            KeyCode::Char('c') => Some(Action::OpenCurriculumVitae),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollUp),
            _ => None,
        },
        Tab::Research => match key {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollUp),
            _ => None,
        },
        Tab::Photography => match key {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::SelectPhotoNext),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::SelectPhotoPrev),
            _ => None,
        },
        Tab::Contact => match key {
            KeyCode::Enter | KeyCode::Char('m') => Some(Action::ShowEmailLink),
            _ => None,
        },
    }
}

/// 处理按键事件
pub fn handle_key_event(app: &mut App, key: KeyCode) -> bool {
    match get_action(app.active_tab, key) {
        Some(action) => app.dispatch(action),
        None => false,
    }
}

/// 处理鼠标事件：左键点击和滚轮
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) -> bool {
    let action = match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.action_at(mouse.column, mouse.row),
        MouseEventKind::ScrollDown => Some(Action::ScrollDown),
        MouseEventKind::ScrollUp => Some(Action::ScrollUp),
        _ => None,
    };
    match action {
        Some(action) => app.dispatch(action),
        None => false,
    }
}
