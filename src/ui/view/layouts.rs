//! 布局计算

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::models::Tab;

/// 导航栏标签之间的间距
pub const TAB_GAP: u16 = 3;
pub const SHORT_TAB_GAP: u16 = 2;

/// 计算居中区域
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// 导航栏中的一个标签
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabLabel {
    pub tab: Tab,
    pub text: &'static str,
    pub area: Rect,
}

/// 计算导航栏各标签的位置（靠右对齐）
///
/// 全名放不下时改用缩写；缩写仍放不下时从左侧丢弃标签，留下的标签总是完整的。
pub fn tab_label_areas(area: Rect) -> Vec<TabLabel> {
    let full = place_from_right(area, Tab::label, TAB_GAP);
    if full.len() == Tab::ALL.len() {
        return full;
    }
    place_from_right(area, Tab::short_label, SHORT_TAB_GAP)
}

fn place_from_right(area: Rect, text_of: fn(Tab) -> &'static str, gap: u16) -> Vec<TabLabel> {
    let mut right = area.right();
    let mut labels = Vec::with_capacity(Tab::ALL.len());

    for tab in Tab::ALL.into_iter().rev() {
        let text = text_of(tab);
        let width = text.len() as u16;
        if right < area.x + width {
            break;
        }
        let x = right - width;
        labels.push(TabLabel {
            tab,
            text,
            area: Rect::new(x, area.y, width, area.height.min(1)),
        });
        right = x.saturating_sub(gap);
    }

    labels.reverse();
    labels
}
