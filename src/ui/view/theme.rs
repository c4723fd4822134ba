//! 配色
//!
//! 大地色系：翠绿为主色，琥珀为辅色

use ratatui::style::{Color, Modifier, Style};

use crate::models::Accent;

pub struct Theme {
    /// 主色（翠绿）
    pub primary: Color,
    /// 辅色（琥珀）
    pub secondary: Color,
    /// 正文
    pub text: Color,
    /// 弱化文字
    pub muted: Color,
    /// 边框（浅琥珀）
    pub border: Color,
    /// 深绿底色（引言、页脚）
    pub deep: Color,
    /// 深绿底上的浅绿文字
    pub highlight: Color,
}

impl Theme {
    pub fn earthy() -> Self {
        Self {
            primary: Color::Rgb(4, 120, 87),
            secondary: Color::Rgb(146, 64, 14),
            text: Color::Rgb(71, 85, 105),
            muted: Color::Rgb(120, 113, 108),
            border: Color::Rgb(217, 119, 6),
            deep: Color::Rgb(2, 44, 34),
            highlight: Color::Rgb(110, 231, 183),
        }
    }

    pub fn accent(&self, accent: Accent) -> Color {
        match accent {
            Accent::Primary => self.primary,
            Accent::Secondary => self.secondary,
        }
    }

    pub fn heading_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn body_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// 导航栏标签
    pub fn tab_style(&self, is_active: bool) -> Style {
        if is_active {
            Style::default()
                .fg(self.primary)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(self.muted)
        }
    }

    /// 实心按钮
    pub fn button_style(&self) -> Style {
        Style::default()
            .fg(Color::White)
            .bg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// 描边按钮
    pub fn outline_button_style(&self) -> Style {
        Style::default()
            .fg(self.secondary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn pill_style(&self) -> Style {
        Style::default()
            .fg(self.secondary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn quote_style(&self) -> Style {
        Style::default()
            .fg(self.highlight)
            .bg(self.deep)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn link_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::earthy()
    }
}
