//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及点击区域

use ratatui::layout::{Position, Rect};

use super::actions::Action;
use crate::models::{Photo, Portfolio, Tab};

/// 应用状态
pub struct App {
    pub portfolio: &'static Portfolio,
    pub active_tab: Tab,
    pub selected_photo: usize,
    pub message: Option<String>,
    pub scroll: [u16; 4],        // 每个标签的滚动偏移
    pub scroll_limit: u16,       // 上一帧内容可滚动的最大偏移
    pub viewport_height: u16,    // 上一帧内容区高度
    pub hit_areas: Vec<HitArea>, // 上一帧记录的可点击区域
}

/// 可点击区域
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitArea {
    pub area: Rect,
    pub action: Action,
}

impl App {
    /// 创建新的应用实例
    pub fn new(portfolio: &'static Portfolio, start_tab: Tab) -> Self {
        Self {
            portfolio,
            active_tab: start_tab,
            selected_photo: 0,
            message: None,
            scroll: [0; 4],
            scroll_limit: 0,
            viewport_height: 0,
            hit_areas: Vec::new(),
        }
    }

    /// 获取当前高亮的照片
    pub fn highlighted_photo(&self) -> Option<&'static Photo> {
        self.portfolio.photos.get(self.selected_photo)
    }

    /// 当前标签的滚动偏移
    pub fn scroll_offset(&self) -> u16 {
        self.scroll[self.active_tab.index()]
    }

    /// 记录本帧的可滚动范围，并把偏移限制在范围内
    pub fn set_scroll_bounds(&mut self, content_height: u16, viewport_height: u16) {
        self.viewport_height = viewport_height;
        self.scroll_limit = content_height.saturating_sub(viewport_height);
        let offset = &mut self.scroll[self.active_tab.index()];
        *offset = (*offset).min(self.scroll_limit);
    }

    /// 查找包含该坐标的点击区域
    pub fn action_at(&self, column: u16, row: u16) -> Option<Action> {
        let position = Position::new(column, row);
        self.hit_areas
            .iter()
            .find(|hit| hit.area.contains(position))
            .map(|hit| hit.action)
    }
}
