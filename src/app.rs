//! Application state and core logic

use crate::config::TuiConfig;
use crate::state::{
    AppState, ChangeIntent, CheckboxArgs, ControlledValue, DrawerEvent, FieldKey, FieldValue,
    Form, FormFocus, InputCheckbox, View, INTEREST_OPTIONS,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Render form checkboxes with the margin modifier
    pub checkbox_margin: bool,
    /// Channel for scheduled drawer completions
    drawer_tx: UnboundedSender<DrawerEvent>,
    drawer_rx: UnboundedReceiver<DrawerEvent>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &TuiConfig) -> Self {
        let (drawer_tx, drawer_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(config.drawer()),
            checkbox_margin: config.checkbox_margin(),
            drawer_tx,
            drawer_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Apply any drawer completions that fired since the last tick
    pub fn poll_drawer_events(&mut self) {
        while let Ok(event) = self.drawer_rx.try_recv() {
            if self.state.drawer.handle_event(event) {
                self.state.status_message = Some("Saved".to_string());
            }
        }
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::F(1) => self.state.current_view = View::FormExample,
            KeyCode::F(2) => self.state.current_view = View::DrawerDemo,
            _ => match self.state.current_view {
                View::FormExample => self.handle_form_key(key)?,
                View::DrawerDemo => self.handle_drawer_key(key),
            },
        }
        Ok(())
    }

    /// Handle keys in the form view
    fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        let focus = self.state.form.focus();

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Esc => self.quit = true,
            KeyCode::Left if focus == FormFocus::Field(FieldKey::AccountType) => {
                self.state.form.cycle_account_type(false)
            }
            KeyCode::Right if focus == FormFocus::Field(FieldKey::AccountType) => {
                self.state.form.cycle_account_type(true)
            }
            KeyCode::Enter if focus == FormFocus::Field(FieldKey::Bio) => {
                self.state.form.input_char('\n')
            }
            KeyCode::Char(c) if focus.is_text() => self.state.form.input_char(c),
            KeyCode::Backspace if focus.is_text() => self.state.form.backspace(),
            KeyCode::Char(' ') | KeyCode::Enter => self.click_focused(focus)?,
            _ => {}
        }
        Ok(())
    }

    /// Click the checkbox row under focus
    fn click_focused(&mut self, focus: FormFocus) -> Result<()> {
        let margin = self.checkbox_margin;
        match focus {
            FormFocus::Interest(index) => {
                let id = INTEREST_OPTIONS[index];
                let checked = self.state.form.is_interest_selected(id);
                let checkbox = &self.state.checkboxes.interests[index];
                if let Some(next) = click_controlled(checkbox, Some(checked), margin) {
                    self.state.form.set_interest(id, next);
                }
            }
            FormFocus::Newsletter => {
                let checkbox = &self.state.checkboxes.newsletter;
                if let Some(next) = click_controlled(checkbox, self.state.newsletter, margin) {
                    self.state.newsletter = Some(next);
                }
            }
            FormFocus::Terms => {
                let args = CheckboxArgs {
                    checked: self.state.terms.as_ref().map(ControlledValue::new),
                    ..CheckboxArgs::new().has_margin(margin)
                };
                self.state.checkboxes.terms.click(&args, None);
                self.state.status_message = Some("Terms checkbox has no change handler".into());
            }
            FormFocus::Field(key) => {
                if let Some(checkbox) = self.state.checkboxes.for_flag(key) {
                    let checked = self.state.form.flag(key);
                    if let Some(next) = click_controlled(checkbox, Some(checked), margin) {
                        self.state.form.set_field(key, FieldValue::Flag(next))?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Handle keys in the drawer view
    fn handle_drawer_key(&mut self, key: KeyEvent) {
        let drawer = &mut self.state.drawer;

        match key.code {
            KeyCode::Char('o') => drawer.toggle_is_open(),
            KeyCode::Char('p') => drawer.placement = drawer.placement.next(),
            KeyCode::Char('s') => drawer.size = drawer.size.next(),
            KeyCode::Enter if drawer.is_open => {
                if drawer.save(self.drawer_tx.clone()) {
                    let delay_ms = drawer.save_delay().as_millis();
                    self.state.status_message = Some(format!("Saving ({delay_ms} ms)..."));
                }
            }
            KeyCode::Esc if drawer.is_open => drawer.close(),
            KeyCode::Esc => self.state.current_view = View::FormExample,
            _ => {}
        }
    }
}

/// Click a controlled checkbox and return the value the controller should
/// adopt, if the checkbox proposed one
fn click_controlled(checkbox: &InputCheckbox, checked: Option<bool>, margin: bool) -> Option<bool> {
    let args = CheckboxArgs {
        checked: checked.as_ref().map(ControlledValue::new),
        ..CheckboxArgs::new().has_margin(margin)
    };
    let mut echoed = None;
    checkbox.click(
        &args,
        Some(&mut |ChangeIntent(next): ChangeIntent<bool>| echoed = Some(next)),
    );
    echoed
}
