//! Drawer demo rendering

use crate::app::App;
use crate::state::{DrawerSize, Placement};
use crate::ui::components::{render_button, ButtonProps, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Area covered by the drawer at the given slide progress
pub fn drawer_area(area: Rect, placement: Placement, size: DrawerSize, progress: f32) -> Rect {
    let axis = if placement.is_horizontal() {
        area.width
    } else {
        area.height
    };
    let full = axis as u32 * size.percent() as u32 / 100;
    let visible = (full as f32 * progress.clamp(0.0, 1.0)).round() as u16;

    match placement {
        Placement::Left => Rect {
            width: visible,
            ..area
        },
        Placement::Right => Rect {
            x: area.x + area.width.saturating_sub(visible),
            width: visible,
            ..area
        },
        Placement::Top => Rect {
            height: visible,
            ..area
        },
        Placement::Bottom => Rect {
            y: area.y + area.height.saturating_sub(visible),
            height: visible,
            ..area
        },
    }
}

/// Draw the drawer demo view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let drawer = &app.state.drawer;

    let option = |name: &'static str, value: &'static str| {
        Line::from(vec![
            Span::styled(format!("{name:<11}"), Style::default().fg(Color::DarkGray)),
            Span::styled(value, Style::default().fg(Color::Cyan)),
        ])
    };

    let content = vec![
        option("Open", if drawer.is_open { "yes" } else { "no" }),
        option("Placement", drawer.placement.as_str()),
        option("Size", drawer.size.as_str()),
        option("Loading", if drawer.is_loading { "yes" } else { "no" }),
        Line::from(""),
        Line::from(Span::styled(
            "Press o to open the drawer, then Enter to save.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let panel = Paragraph::new(content).block(
        Block::default()
            .title(" Drawer ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(panel, area);

    if drawer.is_open {
        let overlay = drawer_area(area, drawer.placement, drawer.size, drawer.slide_progress());
        if overlay.width > 2 && overlay.height > 2 {
            draw_overlay(frame, overlay, app);
        }
    }
}

fn draw_overlay(frame: &mut Frame, area: Rect, app: &App) {
    let drawer = &app.state.drawer;
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(
            " Edit settings ",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(BUTTON_HEIGHT)])
        .split(inner);

    let body = if drawer.is_loading {
        "Saving changes..."
    } else {
        "Drawer content goes here."
    };
    frame.render_widget(
        Paragraph::new(body).style(Style::default().fg(Color::Gray)),
        chunks[0],
    );

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(14), Constraint::Length(12)])
        .split(chunks[1]);

    render_button(
        frame,
        buttons[0],
        ButtonProps {
            is_selected: true,
            is_enabled: !drawer.is_loading,
            accent: Some(Color::Green),
            is_busy: drawer.is_loading,
            ..ButtonProps::new("Save")
        },
    );
    render_button(
        frame,
        buttons[1],
        ButtonProps {
            accent: Some(Color::Gray),
            ..ButtonProps::new("Close")
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const AREA: Rect = Rect {
        x: 10,
        y: 5,
        width: 100,
        height: 40,
    };

    #[test]
    fn test_right_drawer_hugs_right_edge() {
        let rect = drawer_area(AREA, Placement::Right, DrawerSize::Md, 1.0);
        assert_eq!(rect.width, 45);
        assert_eq!(rect.x + rect.width, AREA.x + AREA.width);
        assert_eq!(rect.height, AREA.height);
    }

    #[test]
    fn test_left_drawer_starts_at_origin() {
        let rect = drawer_area(AREA, Placement::Left, DrawerSize::Sm, 1.0);
        assert_eq!(rect.x, AREA.x);
        assert_eq!(rect.width, 30);
    }

    #[test]
    fn test_bottom_drawer_uses_height() {
        let rect = drawer_area(AREA, Placement::Bottom, DrawerSize::Lg, 1.0);
        assert_eq!(rect.height, 26);
        assert_eq!(rect.y + rect.height, AREA.y + AREA.height);
        assert_eq!(rect.width, AREA.width);
    }

    #[test]
    fn test_progress_scales_visible_part() {
        let rect = drawer_area(AREA, Placement::Top, DrawerSize::Md, 0.5);
        assert_eq!(rect.height, 9);
        assert_eq!(drawer_area(AREA, Placement::Top, DrawerSize::Md, 0.0).height, 0);
    }
}
