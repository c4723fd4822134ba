//! 业务逻辑处理 (Update/Dispatch)
//!
//! 所有状态转换都是全函数，不会失败

use tracing::debug;

use super::actions::Action;
use super::state::App;
use crate::models::Tab;

impl App {
    /// 核心逻辑分发，返回 true 表示退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,

            Action::SelectTab(tab) => self.select_tab(tab),
            Action::NextTab => self.select_tab(self.active_tab.next()),
            Action::PrevTab => self.select_tab(self.active_tab.prev()),

            Action::ScrollUp => self.scroll_by(-1),
            Action::ScrollDown => self.scroll_by(1),
            Action::PageUp => self.scroll_by(-self.page_size()),
            Action::PageDown => self.scroll_by(self.page_size()),

            Action::ExploreResearch => self.select_tab(Tab::Research),
            Action::OpenCurriculumVitae => self.open_curriculum_vitae(),

            Action::SelectPhotoPrev => self.move_photo_up(),
            Action::SelectPhotoNext => self.move_photo_down(),

            Action::ShowEmailLink => {
                self.message = Some(format!("Write to {}", self.portfolio.profile.mailto()));
            }
        }
        false
    }

    // ============ 标签 ============

    /// 切换标签
    pub fn select_tab(&mut self, tab: Tab) {
        if tab != self.active_tab {
            debug!(from = ?self.active_tab, to = ?tab, "tab switched");
        }
        self.active_tab = tab;
        self.message = None;
    }

    // ============ 滚动 ============

    /// 翻页时保留一行上下文
    fn page_size(&self) -> i32 {
        i32::from(self.viewport_height.saturating_sub(1).max(1))
    }

    /// 滚动当前标签，限制在上一帧记录的范围内
    pub fn scroll_by(&mut self, delta: i32) {
        let limit = i32::from(self.scroll_limit);
        let offset = &mut self.scroll[self.active_tab.index()];
        *offset = (i32::from(*offset) + delta).clamp(0, limit) as u16;
    }

    // ============ 首页 ============

    /// 简历按钮没有目标，只给出提示
    pub fn open_curriculum_vitae(&mut self) {
        debug!("curriculum vitae requested");
        self.message = Some("Curriculum vitae available on request".to_string());
    }

    // ============ 摄影 ============

    pub fn move_photo_up(&mut self) {
        if self.selected_photo > 0 {
            self.selected_photo -= 1;
        }
    }

    pub fn move_photo_down(&mut self) {
        if self.selected_photo + 1 < self.portfolio.photos.len() {
            self.selected_photo += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Portfolio;

    fn app() -> App {
        App::new(Portfolio::builtin(), Tab::Home)
    }

    #[test]
    fn test_select_every_tab() {
        let mut app = app();
        for tab in Tab::ALL {
            assert!(!app.dispatch(Action::SelectTab(tab)));
            assert_eq!(app.active_tab, tab);
        }
    }

    #[test]
    fn test_cycle_tabs() {
        let mut app = app();
        app.dispatch(Action::PrevTab);
        assert_eq!(app.active_tab, Tab::Contact);
        app.dispatch(Action::NextTab);
        app.dispatch(Action::NextTab);
        assert_eq!(app.active_tab, Tab::Research);
    }

    #[test]
    fn test_explore_research() {
        let mut app = app();
        app.dispatch(Action::ExploreResearch);
        assert_eq!(app.active_tab, Tab::Research);
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        assert!(app.dispatch(Action::Quit));
        assert_eq!(app.active_tab, Tab::Home);
    }

    #[test]
    fn test_photo_selection_clamps() {
        let mut app = app();
        app.dispatch(Action::SelectPhotoPrev);
        assert_eq!(app.selected_photo, 0);

        for _ in 0..10 {
            app.dispatch(Action::SelectPhotoNext);
        }
        assert_eq!(app.selected_photo, 2);
        assert_eq!(app.highlighted_photo().map(|p| p.title), Some("Vector Study"));
    }

    #[test]
    fn test_scroll_clamps_to_last_frame() {
        let mut app = app();
        app.dispatch(Action::ScrollUp);
        assert_eq!(app.scroll_offset(), 0);

        // 尚未渲染，没有可滚动范围
        app.dispatch(Action::ScrollDown);
        assert_eq!(app.scroll_offset(), 0);

        app.set_scroll_bounds(30, 10);
        app.dispatch(Action::ScrollDown);
        assert_eq!(app.scroll_offset(), 1);
        app.dispatch(Action::PageDown);
        assert_eq!(app.scroll_offset(), 10);
        app.dispatch(Action::PageDown);
        app.dispatch(Action::PageDown);
        assert_eq!(app.scroll_offset(), 20);
        app.dispatch(Action::PageUp);
        assert_eq!(app.scroll_offset(), 11);
    }

    #[test]
    fn test_scroll_is_per_tab() {
        let mut app = app();
        app.set_scroll_bounds(30, 10);
        app.dispatch(Action::PageDown);
        assert_eq!(app.scroll_offset(), 9);

        app.dispatch(Action::SelectTab(Tab::Research));
        assert_eq!(app.scroll_offset(), 0);
        app.dispatch(Action::SelectTab(Tab::Home));
        assert_eq!(app.scroll_offset(), 9);

        // 窗口变大后偏移被收回
        app.set_scroll_bounds(30, 25);
        assert_eq!(app.scroll_offset(), 5);
    }

    #[test]
    fn test_message_cleared_on_tab_switch() {
        let mut app = app();
        app.dispatch(Action::OpenCurriculumVitae);
        assert!(app.message.is_some());
        assert_eq!(app.active_tab, Tab::Home);

        app.dispatch(Action::SelectTab(Tab::Contact));
        assert_eq!(app.message, None);

        app.dispatch(Action::ShowEmailLink);
        assert_eq!(
            app.message.as_deref(),
            Some("Write to mailto:perpetual.tetteh@example.com")
        );
    }
}
