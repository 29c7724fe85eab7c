//! Example form rendering

use super::field_renderer::{draw_field, FieldProps};
use crate::app::App;
use crate::state::{
    CheckboxArgs, CheckboxView, ControlledValue, FieldKey, FormExampleState, FormFocus, ACCOUNT_TYPES,
    INTEREST_OPTIONS,
};
use crate::ui::components::render_checkbox;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Height of the bio field, driven by the size toggles
fn bio_height(form: &FormExampleState) -> u16 {
    if form.flag(FieldKey::IsSmall) {
        3
    } else if form.flag(FieldKey::IsLarge) {
        8
    } else {
        5
    }
}

/// Rows needed by the interests group, including its border
fn interests_height(form: &FormExampleState) -> u16 {
    if form.flag(FieldKey::IsInline) {
        3
    } else {
        INTEREST_OPTIONS.len() as u16 + 2
    }
}

/// Display label for the selected account type
fn account_type_label(value: &str) -> String {
    let label = ACCOUNT_TYPES
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, label)| *label)
        .unwrap_or(value);
    format!("◂ {label} ▸")
}

/// Draw the example form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let focus = form.focus();

    let block = Block::default()
        .title(" Form Example ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                     // First name
            Constraint::Length(3),                     // Email
            Constraint::Length(3),                     // Account type
            Constraint::Length(bio_height(form)),      // Bio
            Constraint::Length(interests_height(form)), // Interests
            Constraint::Length(1),                     // Newsletter
            Constraint::Length(1),                     // Terms
            Constraint::Length(1),                     // Layout toggles
            Constraint::Length(1),                     // Focused input id
            Constraint::Min(0),
        ])
        .split(inner);

    let first_name_errors = form.first_name_errors();
    draw_field(
        frame,
        chunks[0],
        FieldProps {
            label: "First name",
            value: form.first_name(),
            is_active: focus == FormFocus::Field(FieldKey::FirstName),
            is_multiline: false,
            errors: &first_name_errors,
        },
    );

    let email_errors = form.email_errors();
    draw_field(
        frame,
        chunks[1],
        FieldProps {
            label: "Email",
            value: form.email(),
            is_active: focus == FormFocus::Field(FieldKey::Email),
            is_multiline: false,
            errors: &email_errors,
        },
    );

    let account_type_errors = form.account_type_errors();
    let account_type = account_type_label(form.account_type());
    draw_field(
        frame,
        chunks[2],
        FieldProps {
            label: "Account type",
            value: &account_type,
            is_active: focus == FormFocus::Field(FieldKey::AccountType),
            is_multiline: false,
            errors: &account_type_errors,
        },
    );

    draw_field(
        frame,
        chunks[3],
        FieldProps {
            label: "Bio",
            value: form.bio(),
            is_active: focus == FormFocus::Field(FieldKey::Bio),
            is_multiline: true,
            errors: &[],
        },
    );

    draw_interests(frame, chunks[4], app);

    let newsletter = app.state.checkboxes.newsletter.render(&CheckboxArgs {
        checked: app.state.newsletter.as_ref().map(ControlledValue::new),
        ..CheckboxArgs::new()
            .label("Send me the newsletter")
            .name("newsletter")
            .has_margin(app.checkbox_margin)
    });
    render_checkbox(frame, chunks[5], &newsletter, focus == FormFocus::Newsletter);

    let terms = app.state.checkboxes.terms.render(&CheckboxArgs {
        checked: app.state.terms.as_ref().map(ControlledValue::new),
        ..CheckboxArgs::new()
            .label("Accept terms (read only)")
            .name("terms")
            .has_margin(app.checkbox_margin)
    });
    render_checkbox(frame, chunks[6], &terms, focus == FormFocus::Terms);

    draw_layout_toggles(frame, chunks[7], app);

    if let Some(view) = focused_checkbox(app) {
        let mut spans = vec![
            Span::styled("input ", Style::default().fg(Color::DarkGray)),
            Span::styled(view.input_id, Style::default().fg(Color::Gray)),
            Span::styled("  label for ", Style::default().fg(Color::DarkGray)),
            Span::styled(view.label_for, Style::default().fg(Color::Gray)),
        ];
        if let Some(name) = view.name {
            spans.push(Span::styled("  name ", Style::default().fg(Color::DarkGray)));
            spans.push(Span::styled(name, Style::default().fg(Color::Gray)));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), chunks[8]);
    }
}

/// Views of the interest checkboxes, in option order
fn interest_views(app: &App) -> Vec<CheckboxView> {
    INTEREST_OPTIONS
        .iter()
        .zip(app.state.checkboxes.interests.iter())
        .map(|(id, checkbox)| {
            let checked = app.state.form.is_interest_selected(id);
            checkbox.render(
                &CheckboxArgs::new()
                    .label(id)
                    .name("interests")
                    .checked(&checked)
                    .has_margin(app.checkbox_margin),
            )
        })
        .collect()
}

fn draw_interests(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let errors = form.interests_errors();
    let focus = form.focus();

    let border_color = if errors.is_empty() {
        Color::DarkGray
    } else {
        Color::Red
    };
    let title = if form.interests().is_empty() {
        " Interests ".to_string()
    } else {
        let selected: Vec<&str> = form.interests().iter().collect();
        format!(
            " Interests ({}): {} ",
            form.interests().len(),
            selected.join(", ")
        )
    };
    let mut block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    if !errors.is_empty() {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {} ", errors.join("; ")),
            Style::default().fg(Color::Red),
        )));
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (direction, constraint) = if form.flag(FieldKey::IsInline) {
        (Direction::Horizontal, Constraint::Length(20))
    } else {
        (Direction::Vertical, Constraint::Length(1))
    };
    let rows = Layout::default()
        .direction(direction)
        .constraints(vec![constraint; INTEREST_OPTIONS.len()])
        .split(inner);

    for (index, view) in interest_views(app).iter().enumerate() {
        render_checkbox(frame, rows[index], view, focus == FormFocus::Interest(index));
    }
}

fn draw_layout_toggles(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let toggles = [
        (FieldKey::IsSmall, "Small"),
        (FieldKey::IsLarge, "Large"),
        (FieldKey::IsInline, "Inline"),
    ];
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Length(14); toggles.len()])
        .split(area);

    for (col, (key, label)) in toggles.into_iter().enumerate() {
        if let Some(checkbox) = app.state.checkboxes.for_flag(key) {
            let checked = form.flag(key);
            let view = checkbox.render(&CheckboxArgs::new().label(label).checked(&checked));
            render_checkbox(frame, cols[col], &view, form.focus() == FormFocus::Field(key));
        }
    }
}

/// View of the checkbox under focus, if focus is on a checkbox row
fn focused_checkbox(app: &App) -> Option<CheckboxView> {
    let boxes = &app.state.checkboxes;
    match app.state.form.focus() {
        FormFocus::Interest(index) => interest_views(app).into_iter().nth(index),
        FormFocus::Newsletter => Some(boxes.newsletter.render(&CheckboxArgs::new().name("newsletter"))),
        FormFocus::Terms => Some(boxes.terms.render(&CheckboxArgs::new().name("terms"))),
        FormFocus::Field(key) => boxes
            .for_flag(key)
            .map(|checkbox| checkbox.render(&CheckboxArgs::new())),
    }
}
