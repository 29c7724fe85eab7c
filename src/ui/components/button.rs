//! Button component for TUI

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Color of a selected button without an accent
const SELECTED_COLOR: Color = Color::Cyan;

#[derive(Debug, Clone, Copy)]
pub struct ButtonProps<'a> {
    pub label: &'a str,
    pub is_selected: bool,
    pub is_enabled: bool,
    /// Text color; selection uses it for the border as well
    pub accent: Option<Color>,
    /// Busy buttons show their label dimmed with a trailing ellipsis
    pub is_busy: bool,
}

impl<'a> ButtonProps<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            is_selected: false,
            is_enabled: true,
            accent: None,
            is_busy: false,
        }
    }
}

fn border_style(props: &ButtonProps<'_>) -> Style {
    if props.is_selected {
        Style::default().fg(props.accent.unwrap_or(SELECTED_COLOR))
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn text_style(props: &ButtonProps<'_>) -> Style {
    if props.is_busy || !props.is_enabled {
        Style::default().fg(Color::DarkGray)
    } else if props.is_selected {
        Style::default()
            .fg(props.accent.unwrap_or(SELECTED_COLOR))
            .add_modifier(Modifier::BOLD)
    } else {
        props
            .accent
            .map(|color| Style::default().fg(color))
            .unwrap_or_default()
    }
}

fn content(props: &ButtonProps<'_>) -> String {
    if props.is_busy {
        format!(" {}... ", props.label)
    } else {
        format!(" {} ", props.label)
    }
}

/// Render a bordered button
pub fn render_button(frame: &mut Frame, area: Rect, props: ButtonProps<'_>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(&props));
    let paragraph = Paragraph::new(content(&props))
        .style(text_style(&props))
        .block(block);
    frame.render_widget(paragraph, area);
}
