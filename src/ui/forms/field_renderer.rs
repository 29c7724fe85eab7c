//! Field rendering utilities for forms

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Text-like field to draw
pub struct FieldProps<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub is_active: bool,
    pub is_multiline: bool,
    /// Current validation messages; empty means valid
    pub errors: &'a [String],
}

/// Border color for a field given focus and validity
fn border_color(is_active: bool, has_errors: bool) -> Color {
    match (is_active, has_errors) {
        (_, true) => Color::Red,
        (true, false) => Color::Cyan,
        (false, false) => Color::DarkGray,
    }
}

/// Draw a form field with its validation messages in the bottom border
pub fn draw_field(frame: &mut Frame, area: Rect, props: FieldProps) {
    let FieldProps {
        label,
        value,
        is_active,
        is_multiline,
        errors,
    } = props;

    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = if value.is_empty() && !is_active {
        "(empty)"
    } else {
        value
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = if is_multiline {
        let mut lines: Vec<Line> = display_value
            .split('\n')
            .map(|l| Line::from(l.to_string()))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_value, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let mut block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(is_active, !errors.is_empty())));

    if !errors.is_empty() {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {} ", errors.join("; ")),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}
