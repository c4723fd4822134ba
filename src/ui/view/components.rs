//! 通用 UI 组件
//!
//! 面板、换行、并排拼接、标签胶囊、按钮等通用组件

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders},
};

/// 标签胶囊之间的间距
const PILL_GAP: usize = 2;

/// [组件] 圆角面板，返回内部区域
pub fn render_panel(frame: &mut Frame, area: Rect, border_style: Style) -> Rect {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// 按钮文字，例如 " Explore Research › "
pub fn button_label(text: &str) -> String {
    format!(" {} ", text)
}

/// 胶囊文字（大写，两侧加括号）
pub fn pill_label(text: &str) -> String {
    format!("( {} )", text.to_uppercase())
}

/// 贪心按词换行，超长单词按宽度硬切
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut used = 0;

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();
        if used > 0 && used + 1 + chars.len() > width {
            lines.push(std::mem::take(&mut current));
            used = 0;
        }
        if used > 0 {
            current.push(' ');
            used += 1;
        }
        while used + chars.len() > width {
            let head: String = chars.drain(..width - used).collect();
            current.push_str(&head);
            lines.push(std::mem::take(&mut current));
            used = 0;
        }
        current.extend(chars.iter());
        used += chars.len();
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// 换行后每行套同一样式
pub fn wrapped_lines(text: &str, width: usize, style: Style) -> Vec<Line<'static>> {
    wrap_text(text, width)
        .into_iter()
        .map(|row| Line::from(Span::styled(row, style)))
        .collect()
}

/// 把几列文字并排拼成行，每列补齐到自己的宽度
pub fn join_columns(columns: Vec<(usize, Vec<Line<'static>>)>, gap: usize) -> Vec<Line<'static>> {
    let height = columns.iter().map(|(_, lines)| lines.len()).max().unwrap_or(0);
    let last = columns.len().saturating_sub(1);

    (0..height)
        .map(|row| {
            let mut spans = Vec::new();
            for (i, (width, lines)) in columns.iter().enumerate() {
                let line = lines.get(row).cloned().unwrap_or_default();
                let pad = width.saturating_sub(line.width());
                spans.extend(line.spans);
                if i < last {
                    spans.push(Span::raw(" ".repeat(pad + gap)));
                }
            }
            Line::from(spans)
        })
        .collect()
}

/// 把胶囊按宽度排成多行，单个胶囊不会被拆开
pub fn pill_lines(items: &[&str], width: usize, style: Style) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut used = 0;

    for item in items {
        let label = pill_label(item);
        let len = label.chars().count();
        let needed = if current.is_empty() { len } else { len + PILL_GAP };

        if !current.is_empty() && used + needed > width {
            lines.push(Line::from(std::mem::take(&mut current)));
            used = 0;
        }
        if !current.is_empty() {
            current.push(Span::raw(" ".repeat(PILL_GAP)));
            used += PILL_GAP;
        }
        current.push(Span::styled(label, style));
        used += len;
    }

    if !current.is_empty() {
        lines.push(Line::from(current));
    }
    lines
}
