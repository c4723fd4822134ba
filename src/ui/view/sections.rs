//! 四个页面的渲染
//!
//! 每个函数只画自己的区域，内容全部来自静态数据

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Padding, Paragraph, Scrollbar, ScrollbarOrientation,
        ScrollbarState, Wrap,
    },
};

use super::components::{
    button_label, join_columns, pill_lines, render_panel, wrap_text, wrapped_lines,
};
use super::layouts::centered_rect;
use super::theme::Theme;
use crate::models::{FocusArea, Portfolio, ResearchSummary};
use crate::ui::actions::Action;
use crate::ui::state::{App, HitArea};

/// 头像剪影
const AVATAR: [&str; 5] = ["▄███▄", "█████", " ▀█▀ ", "▄█████▄", "███████"];
const AVATAR_WIDTH: usize = 16;
const HERO_GAP: usize = 3;

/// 低于这些宽度时去掉头像、卡片改为纵向排列
const WIDE_HERO: usize = 60;
const WIDE_CARDS: usize = 90;

const BUTTON_GAP: usize = 2;
const CARD_GAP: usize = 2;
const QUOTE_PAD: usize = 3;

/// 页面内按钮：所在行、列、宽度
struct Button {
    row: usize,
    column: usize,
    width: usize,
    action: Action,
}

// ============ 滚动 ============

/// 为滚动条留出最右一列
fn content_area(area: Rect) -> Rect {
    Rect {
        width: area.width.saturating_sub(1),
        ..area
    }
}

/// 按当前标签的偏移渲染整页文字，返回实际偏移
fn render_scrolled(frame: &mut Frame, app: &mut App, lines: Vec<Line<'static>>, area: Rect) -> u16 {
    let content = content_area(area);
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    app.set_scroll_bounds(height, content.height);
    let offset = app.scroll_offset();

    frame.render_widget(Paragraph::new(lines).scroll((offset, 0)), content);

    if app.scroll_limit > 0 {
        let mut state = ScrollbarState::new(usize::from(app.scroll_limit)).position(usize::from(offset));
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area,
            &mut state,
        );
    }
    offset
}

/// 内容行在屏幕上的 y，滚出视口时为 None
fn visible_row(row: usize, offset: u16, area: Rect) -> Option<u16> {
    let row = u16::try_from(row).ok()?.checked_sub(offset)?;
    (row < area.height).then_some(area.y + row)
}

// ============ 首页 ============

pub fn render_home(frame: &mut Frame, app: &mut App, theme: &Theme, area: Rect) {
    let width = usize::from(content_area(area).width);
    let (mut lines, buttons) = hero_lines(app.portfolio, theme, width);
    lines.push(Line::default());
    lines.extend(focus_card_lines(app.portfolio.focus_areas, theme, width));

    let offset = render_scrolled(frame, app, lines, area);

    // 按钮随内容滚动，移出视口后不可点击
    let content = content_area(area);
    for button in buttons {
        let Some(y) = visible_row(button.row, offset, content) else {
            continue;
        };
        let x = content.x + u16::try_from(button.column).unwrap_or(u16::MAX).min(content.width);
        let width = u16::try_from(button.width).unwrap_or(u16::MAX).min(content.right() - x);
        app.hit_areas.push(HitArea {
            area: Rect::new(x, y, width, 1),
            action: button.action,
        });
    }
}

fn avatar_lines(theme: &Theme) -> Vec<Line<'static>> {
    let inner = AVATAR_WIDTH - 2;
    let rule = "─".repeat(inner);

    let mut lines = vec![Line::from(Span::styled(
        format!("╭{}╮", rule),
        theme.border_style(),
    ))];
    for row in std::iter::once("").chain(AVATAR).chain(std::iter::once("")) {
        lines.push(Line::from(vec![
            Span::styled("│", theme.border_style()),
            Span::styled(
                format!("{:^inner$}", row),
                Style::default().fg(theme.primary),
            ),
            Span::styled("│", theme.border_style()),
        ]));
    }
    lines.push(Line::from(Span::styled(
        format!("╰{}╯", rule),
        theme.border_style(),
    )));
    lines
}

/// 介绍文字和按钮；宽屏时左侧加头像
fn hero_lines(portfolio: &Portfolio, theme: &Theme, width: usize) -> (Vec<Line<'static>>, Vec<Button>) {
    let wide = width >= WIDE_HERO;
    let text_width = if wide {
        width - AVATAR_WIDTH - HERO_GAP
    } else {
        width
    };
    let profile = &portfolio.profile;
    let headline = &portfolio.headline;

    let mut lines = wrapped_lines(
        profile.title,
        text_width,
        Style::default()
            .fg(theme.secondary)
            .add_modifier(Modifier::BOLD),
    );
    lines.extend(wrapped_lines(profile.affiliation, text_width, theme.muted_style()));
    lines.push(Line::default());
    lines.extend(wrapped_lines(headline.lead, text_width, theme.heading_style()));
    lines.extend(wrapped_lines(
        headline.emphasis,
        text_width,
        Style::default()
            .fg(theme.secondary)
            .add_modifier(Modifier::BOLD | Modifier::ITALIC),
    ));
    lines.push(Line::default());
    lines.extend(wrapped_lines(profile.bio, text_width, theme.body_style()));
    lines.push(Line::default());

    // 按钮，放不下一行时上下排列
    let explore = button_label("Explore Research ›");
    let cv = button_label("Curriculum Vitae");
    let explore_width = explore.chars().count();
    let cv_width = cv.chars().count();
    let mut buttons = vec![Button {
        row: lines.len(),
        column: 0,
        width: explore_width,
        action: Action::ExploreResearch,
    }];

    if explore_width + BUTTON_GAP + cv_width <= text_width {
        buttons.push(Button {
            row: lines.len(),
            column: explore_width + BUTTON_GAP,
            width: cv_width,
            action: Action::OpenCurriculumVitae,
        });
        lines.push(Line::from(vec![
            Span::styled(explore, theme.button_style()),
            Span::raw(" ".repeat(BUTTON_GAP)),
            Span::styled(cv, theme.outline_button_style()),
        ]));
    } else {
        lines.push(Line::from(Span::styled(explore, theme.button_style())));
        buttons.push(Button {
            row: lines.len(),
            column: 0,
            width: cv_width,
            action: Action::OpenCurriculumVitae,
        });
        lines.push(Line::from(Span::styled(cv, theme.outline_button_style())));
    }

    if !wide {
        return (lines, buttons);
    }

    let offset = AVATAR_WIDTH + HERO_GAP;
    for button in &mut buttons {
        button.column += offset;
    }
    let lines = join_columns(
        vec![(AVATAR_WIDTH, avatar_lines(theme)), (text_width, lines)],
        HERO_GAP,
    );
    (lines, buttons)
}

fn card_lines(card: &FocusArea, theme: &Theme, width: usize) -> Vec<Line<'static>> {
    let title_style = Style::default()
        .fg(theme.accent(card.accent))
        .add_modifier(Modifier::BOLD);
    let mut lines = wrapped_lines(card.title, width, title_style);
    lines.push(Line::from(Span::styled("─".repeat(width), theme.border_style())));
    lines.extend(wrapped_lines(card.blurb, width, theme.muted_style()));
    lines
}

/// 首页三张卡片，宽屏并排，窄屏纵向
fn focus_card_lines(cards: &[FocusArea], theme: &Theme, width: usize) -> Vec<Line<'static>> {
    if cards.is_empty() {
        return Vec::new();
    }

    if width >= WIDE_CARDS {
        let column = (width - CARD_GAP * (cards.len() - 1)) / cards.len();
        let columns = cards
            .iter()
            .map(|card| (column, card_lines(card, theme, column)))
            .collect();
        return join_columns(columns, CARD_GAP);
    }

    let mut lines = Vec::new();
    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.extend(card_lines(card, theme, width));
    }
    lines
}

// ============ 研究 ============

pub fn render_research(frame: &mut Frame, app: &mut App, theme: &Theme, area: Rect) {
    let inner = render_panel(frame, area, theme.border_style());
    let inner = Rect::new(
        inner.x + 2,
        inner.y + 1,
        inner.width.saturating_sub(3),
        inner.height.saturating_sub(1),
    );

    let width = usize::from(content_area(inner).width);
    let lines = research_lines(&app.portfolio.research, theme, width);
    render_scrolled(frame, app, lines, inner);
}

fn research_lines(research: &ResearchSummary, theme: &Theme, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled("──── ", Style::default().fg(theme.secondary)),
            Span::styled(
                "RESEARCH THESIS",
                Style::default()
                    .fg(theme.secondary)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::default(),
    ];
    lines.extend(wrapped_lines(research.title, width, theme.heading_style()));
    lines.push(Line::default());
    lines.extend(wrapped_lines(research.abstract_text, width, theme.body_style()));
    lines.push(Line::default());
    lines.extend(pill_lines(research.skills, width, theme.pill_style()));
    lines.push(Line::default());

    // 引言：深绿底色块
    let quote_width = width.saturating_sub(QUOTE_PAD * 2);
    let band = || Line::from(Span::styled(" ".repeat(width), theme.quote_style()));
    lines.push(band());
    for row in wrap_text(&format!("“{}”", research.key_finding), quote_width) {
        let pad = " ".repeat(QUOTE_PAD);
        lines.push(Line::from(Span::styled(
            format!("{pad}{row:<quote_width$}{pad}"),
            theme.quote_style(),
        )));
    }
    lines.push(band());
    lines
}

// ============ 摄影 ============

pub fn render_photography(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题
            Constraint::Length(2), // 副标题
            Constraint::Length(1),
            Constraint::Min(8), // 照片
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new("The Scientific Lens")
            .style(theme.heading_style())
            .alignment(Alignment::Center),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(
            "Visual stories from field expeditions and laboratory insights across Ghana.",
        )
        .style(theme.muted_style())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true }),
        chunks[1],
    );

    let photos = app.portfolio.photos;
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, photos.len() as u32); photos.len()])
        .spacing(2)
        .split(chunks[3]);

    let highlighted = app.highlighted_photo().map(|p| p.id);
    for (photo, column) in photos.iter().zip(columns.iter()) {
        let is_selected = highlighted == Some(photo.id);
        let border_style = if is_selected {
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            theme.border_style()
        };

        let card = Paragraph::new(vec![
            Line::from(Span::styled(photo.title, theme.heading_style())),
            Line::from(Span::styled(
                photo.category.to_uppercase(),
                Style::default().fg(theme.highlight),
            )),
            Line::default(),
            Line::from(Span::styled(photo.url, theme.muted_style())),
        ])
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(if is_selected {
                    BorderType::Thick
                } else {
                    BorderType::Rounded
                })
                .border_style(border_style)
                .padding(Padding::horizontal(1)),
        );
        frame.render_widget(card, *column);
    }
}

// ============ 联系 ============

pub fn render_contact(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let profile = &app.portfolio.profile;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题
            Constraint::Length(2), // 副标题
            Constraint::Length(1),
            Constraint::Min(9), // 卡片
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new("Let's Collaborate")
            .style(theme.heading_style())
            .alignment(Alignment::Center),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(
            "Interested in vector ecology, soil health, or conservation photography? \
             Let's start a conversation.",
        )
        .style(theme.muted_style())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true }),
        chunks[1],
    );

    let card_area = centered_rect(70, 100, chunks[3]);
    let card_area = Rect {
        height: card_area.height.min(9),
        ..card_area
    };
    let inner = render_panel(frame, card_area, theme.border_style());

    let separator = "─".repeat((inner.width as usize).saturating_sub(8));
    let card = Paragraph::new(vec![
        Line::default(),
        Line::from(vec![
            Span::styled("✉  ", theme.link_style()),
            Span::styled(profile.email, theme.link_style()),
        ]),
        Line::from(Span::styled(profile.mailto(), theme.muted_style())),
        Line::default(),
        Line::from(Span::styled(separator, theme.border_style())),
        Line::default(),
        Line::from(vec![
            Span::styled("[in] LinkedIn", theme.muted_style()),
            Span::raw("      "),
            Span::styled("[gh] GitHub", theme.muted_style()),
        ]),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(card, inner);
}
