//! Checkbox component

use crate::state::CheckboxView;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Indent applied by the margin modifier
const MARGIN: &str = "  ";

/// Build the single line drawn for a checkbox
pub fn checkbox_line(view: &CheckboxView, is_focused: bool) -> Line<'static> {
    let mark = if view.checked { "[x]" } else { "[ ]" };
    let mark_style = if is_focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else if view.checked {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let label_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let mut spans = Vec::with_capacity(4);
    if view.classes().contains(&CheckboxView::MARGIN_CLASS) {
        spans.push(Span::raw(MARGIN));
    }
    spans.push(Span::styled(mark, mark_style));
    spans.push(Span::raw(" "));
    spans.push(Span::styled(view.label.clone(), label_style));
    Line::from(spans)
}

/// Render a checkbox into a one-row area
pub fn render_checkbox(frame: &mut Frame, area: Rect, view: &CheckboxView, is_focused: bool) {
    frame.render_widget(Paragraph::new(checkbox_line(view, is_focused)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CheckboxArgs, InputCheckbox};
    use pretty_assertions::assert_eq;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_unchecked_line() {
        let view = InputCheckbox::new().render(&CheckboxArgs::new().label("IoT"));
        assert_eq!(text(&checkbox_line(&view, false)), "[ ] IoT");
    }

    #[test]
    fn test_checked_line() {
        let view = InputCheckbox::new().render(&CheckboxArgs::new().label("IoT").checked(&true));
        assert_eq!(text(&checkbox_line(&view, false)), "[x] IoT");
    }

    #[test]
    fn test_margin_indents() {
        let checkbox = InputCheckbox::new();
        let plain = checkbox.render(&CheckboxArgs::new().label("IoT"));
        let spaced = checkbox.render(&CheckboxArgs::new().label("IoT").has_margin(true));
        assert!(!text(&checkbox_line(&plain, false)).starts_with(MARGIN));
        assert!(text(&checkbox_line(&spaced, false)).starts_with(MARGIN));
    }
}
