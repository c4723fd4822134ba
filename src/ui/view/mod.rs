//! 视图层模块
//!
//! 包含主渲染入口、导航栏、页脚和帮助栏

pub mod components;
pub mod layouts;
pub mod sections;
pub mod theme;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::actions::Action;
use super::state::{App, HitArea};
use crate::models::Tab;
use layouts::tab_label_areas;
use theme::Theme;

/// 叶子标记
pub const LEAF: &str = "🍃";

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let theme = Theme::earthy();
    app.hit_areas.clear();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 导航
            Constraint::Min(10),   // 内容
            Constraint::Length(3), // 页脚
            Constraint::Length(1), // 帮助
        ])
        .split(frame.area());

    render_nav(frame, app, &theme, chunks[0]);

    let main = chunks[1].inner(Margin::new(2, 1));
    match app.active_tab {
        Tab::Home => sections::render_home(frame, app, &theme, main),
        Tab::Research => sections::render_research(frame, app, &theme, main),
        Tab::Photography => sections::render_photography(frame, app, &theme, main),
        Tab::Contact => sections::render_contact(frame, app, &theme, main),
    }

    render_footer(frame, app, &theme, chunks[2]);
    render_help(frame, app, &theme, chunks[3]);
}

fn render_nav(frame: &mut Frame, app: &mut App, theme: &Theme, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_type(BorderType::Plain)
        .border_style(theme.border_style());
    let inner = block.inner(area).inner(Margin::new(2, 0));
    frame.render_widget(block, area);

    let row = Rect {
        y: inner.y + inner.height.saturating_sub(1),
        height: inner.height.min(1),
        ..inner
    };

    // 品牌名只占标签左侧的空间
    let labels = tab_label_areas(row);
    let brand_right = labels.first().map_or(row.right(), |label| label.area.x.saturating_sub(1));
    let brand_area = Rect {
        width: brand_right.saturating_sub(row.x),
        ..row
    };
    let brand = Line::from(vec![
        Span::raw(format!("{} ", LEAF)),
        Span::styled(app.portfolio.profile.name, theme.heading_style()),
    ]);
    frame.render_widget(Paragraph::new(brand), brand_area);

    for label in labels {
        let text = Paragraph::new(label.text).style(theme.tab_style(label.tab == app.active_tab));
        frame.render_widget(text, label.area);
        app.hit_areas.push(HitArea {
            area: label.area,
            action: Action::SelectTab(label.tab),
        });
    }
}

fn render_footer(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let block = Block::default().style(Style::default().bg(theme.deep));
    let inner = block.inner(area).inner(Margin::new(2, 1));
    frame.render_widget(block, area);

    let name = Line::from(vec![
        Span::raw(format!("{} ", LEAF)),
        Span::styled(
            app.portfolio.profile.name,
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(name), inner);

    let tagline = Paragraph::new("RESEARCHER PORTFOLIO 2026")
        .style(Style::default().fg(theme.muted))
        .alignment(Alignment::Right);
    frame.render_widget(tagline, inner);
}

fn render_help(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let help_text = match app.active_tab {
        Tab::Home => {
            "[1-4] sections  [←/→] prev/next  [j/k] scroll  [Enter] explore research  [c] CV  [q] quit"
        }
        Tab::Research => "[1-4] sections  [←/→] prev/next  [j/k/PgUp/PgDn] scroll  [q] quit",
        Tab::Photography => "[1-4] sections  [←/→] prev/next  [j/k] select photo  [q] quit",
        Tab::Contact => "[1-4] sections  [←/→] prev/next  [Enter] mail link  [q] quit",
    };

    let message = app.message.as_deref().unwrap_or("");
    let text = if message.is_empty() {
        help_text.to_string()
    } else {
        format!("{}  |  {}", help_text, message)
    };

    let help = Paragraph::new(text).style(theme.muted_style());
    frame.render_widget(help, area.inner(Margin::new(2, 0)));
}


#[cfg(test)]
mod tests {
    use super::test_support::{count, draw, draw_sized, rows};
    use super::*;
    use crate::models::Portfolio;
    use crate::ui::input::handle_mouse_event;
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use pretty_assertions::assert_eq;

    /// 每个标签独有的文字
    fn marker(tab: Tab) -> &'static str {
        match tab {
            Tab::Home => "Redefined.",
            Tab::Research => "RESEARCH THESIS",
            Tab::Photography => "The Scientific Lens",
            Tab::Contact => "Let's Collaborate",
        }
    }

    fn assert_only_section(rows: &[String], visible: Tab) {
        for tab in Tab::ALL {
            let expected = usize::from(tab == visible);
            assert_eq!(count(rows, marker(tab)), expected, "marker of {:?}", tab);
        }
    }

    fn click_tab(app: &mut App, tab: Tab) {
        let hit = app
            .hit_areas
            .iter()
            .find(|hit| hit.action == Action::SelectTab(tab))
            .copied()
            .unwrap();
        let event = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: hit.area.x + hit.area.width / 2,
            row: hit.area.y,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse_event(app, event);
    }

    #[test]
    fn test_each_tab_shows_only_its_section() {
        for (width, height) in [(120, 40), (80, 24)] {
            for tab in Tab::ALL {
                let mut app = App::new(Portfolio::builtin(), tab);
                let buffer = draw_sized(&mut app, width, height);
                assert_only_section(&rows(&buffer), tab);
            }
        }
    }

    /// 一直向下滚到底，收集每一帧的文字
    fn scroll_to_end(app: &mut App, width: u16, height: u16) -> Vec<String> {
        let mut seen = Vec::new();
        loop {
            seen.extend(rows(&draw_sized(app, width, height)));
            if app.scroll_offset() == app.scroll_limit {
                return seen;
            }
            app.dispatch(Action::ScrollDown);
        }
    }

    #[test]
    fn test_small_terminal_scrolls_to_every_line() {
        let cases = [
            (
                Tab::Home,
                &["insecticides.", "volatiles.", "chemistry.", "preservation."][..],
            ),
            (Tab::Research, &["Materials", "development.", "repellents."][..]),
        ];

        for (tab, words) in cases {
            let mut app = App::new(Portfolio::builtin(), tab);
            let first = rows(&draw_sized(&mut app, 80, 24));
            assert!(app.scroll_limit > 0, "{tab:?} should overflow 80x24");
            assert!(
                words.iter().any(|word| count(&first, word) == 0),
                "{tab:?} fits without scrolling"
            );

            let seen = scroll_to_end(&mut app, 80, 24);
            for word in words {
                assert!(count(&seen, word) > 0, "{word} never shown on {tab:?}");
            }

            // 已到底，继续滚动不变
            let limit = app.scroll_limit;
            app.dispatch(Action::ScrollDown);
            app.dispatch(Action::PageDown);
            draw_sized(&mut app, 80, 24);
            assert_eq!(app.scroll_offset(), limit);
        }
    }

    #[test]
    fn test_large_terminal_does_not_scroll() {
        for tab in [Tab::Home, Tab::Research] {
            let mut app = App::new(Portfolio::builtin(), tab);
            draw(&mut app);
            assert_eq!(app.scroll_limit, 0, "{tab:?}");
            app.dispatch(Action::ScrollDown);
            assert_eq!(app.scroll_offset(), 0);
        }
    }

    #[test]
    fn test_narrow_nav_keeps_labels_clear_of_brand() {
        for width in [40, 30] {
            let mut app = App::new(Portfolio::builtin(), Tab::Home);
            let buffer = draw_sized(&mut app, width, 24);

            let tabs: Vec<&HitArea> = app
                .hit_areas
                .iter()
                .filter(|hit| matches!(hit.action, Action::SelectTab(_)))
                .collect();
            assert_eq!(tabs.len(), 4, "width {width}");

            for hit in tabs {
                let Action::SelectTab(tab) = hit.action else {
                    unreachable!()
                };
                assert_eq!(buffer[(hit.area.x, hit.area.y)].symbol(), tab.short_label());
                // 标签左侧一格留空
                assert_eq!(buffer[(hit.area.x - 1, hit.area.y)].symbol(), " ");
            }

            click_tab(&mut app, Tab::Contact);
            assert_eq!(app.active_tab, Tab::Contact);
        }
    }

    #[test]
    fn test_clicking_tab_labels_switches_section() {
        let mut app = App::new(Portfolio::builtin(), Tab::Home);
        draw(&mut app);

        for tab in [Tab::Contact, Tab::Photography, Tab::Research, Tab::Home] {
            click_tab(&mut app, tab);
            assert_eq!(app.active_tab, tab);
            let buffer = draw(&mut app);
            assert_only_section(&rows(&buffer), tab);
        }
    }

    #[test]
    fn test_nav_labels_always_present() {
        for tab in Tab::ALL {
            let mut app = App::new(Portfolio::builtin(), tab);
            let rows = rows(&draw(&mut app));
            assert!(rows[1].contains("Perpetual Tetteh"));
            for label in Tab::ALL.map(Tab::label) {
                assert!(rows[1].contains(label), "{label} missing from nav");
            }
        }
    }

    #[test]
    fn test_active_tab_is_highlighted() {
        let mut app = App::new(Portfolio::builtin(), Tab::Photography);
        let buffer = draw(&mut app);
        let theme = Theme::earthy();

        for hit in &app.hit_areas {
            let Action::SelectTab(tab) = hit.action else {
                continue;
            };
            let cell = &buffer[(hit.area.x, hit.area.y)];
            if tab == Tab::Photography {
                assert_eq!(cell.fg, theme.primary);
                assert!(cell.modifier.contains(Modifier::UNDERLINED));
            } else {
                assert_eq!(cell.fg, theme.muted);
            }
        }
    }

    #[test]
    fn test_footer_and_message() {
        let mut app = App::new(Portfolio::builtin(), Tab::Contact);
        app.dispatch(Action::ShowEmailLink);
        let rows = rows(&draw(&mut app));

        assert!(rows[test_support::HEIGHT as usize - 3].contains("RESEARCHER PORTFOLIO 2026"));
        assert!(rows[test_support::HEIGHT as usize - 1].contains("Write to mailto:"));
    }
}
