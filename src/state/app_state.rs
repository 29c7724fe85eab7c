//! Application state definitions

use super::controlled::InputCheckbox;
use super::drawer_state::DrawerState;
use super::forms::{FieldKey, FormExampleState, INTEREST_OPTIONS};

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    FormExample,
    DrawerDemo,
}

impl View {
    pub fn label(&self) -> &'static str {
        match self {
            Self::FormExample => "Form",
            Self::DrawerDemo => "Drawer",
        }
    }
}

/// Checkbox instances of the form view.
///
/// Instances live as long as the view so their label ids never change.
#[derive(Debug, Clone)]
pub struct FormCheckboxes {
    pub interests: [InputCheckbox; INTEREST_OPTIONS.len()],
    pub newsletter: InputCheckbox,
    pub terms: InputCheckbox,
    pub is_small: InputCheckbox,
    pub is_large: InputCheckbox,
    pub is_inline: InputCheckbox,
}

impl FormCheckboxes {
    pub fn new() -> Self {
        Self {
            interests: std::array::from_fn(|_| InputCheckbox::new()),
            newsletter: InputCheckbox::new(),
            terms: InputCheckbox::with_id("terms"),
            is_small: InputCheckbox::new(),
            is_large: InputCheckbox::new(),
            is_inline: InputCheckbox::new(),
        }
    }

    /// Checkbox bound to a flag field
    pub fn for_flag(&self, key: FieldKey) -> Option<&InputCheckbox> {
        match key {
            FieldKey::IsSmall => Some(&self.is_small),
            FieldKey::IsLarge => Some(&self.is_large),
            FieldKey::IsInline => Some(&self.is_inline),
            _ => None,
        }
    }
}

impl Default for FormCheckboxes {
    fn default() -> Self {
        Self::new()
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,
    pub form: FormExampleState,
    pub checkboxes: FormCheckboxes,
    /// Controller-owned value for the newsletter checkbox
    pub newsletter: Option<bool>,
    /// Controller-owned value for the terms checkbox, which has no handler
    pub terms: Option<bool>,
    pub drawer: DrawerState,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(drawer: DrawerState) -> Self {
        Self {
            drawer,
            ..Default::default()
        }
    }
}
