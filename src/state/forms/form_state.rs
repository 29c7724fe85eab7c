//! Form state management for the example form

use super::field::{FieldKey, FieldValue, InterestSet, LocalField};
use super::validation;
use crate::error::FormError;

/// Interest options offered by the example form
pub const INTEREST_OPTIONS: [&str; 3] = ["IoT", "Music", "Entertainment"];

/// Account types offered by the example form, as (value, label)
pub const ACCOUNT_TYPES: [(&str, &str); 4] = [
    ("", "Select an account type"),
    ("personal", "Personal"),
    ("business", "Business"),
    ("other", "Other"),
];

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Focusable rows of the example form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Field(FieldKey),
    Interest(usize),
    Newsletter,
    Terms,
}

impl FormFocus {
    pub const ORDER: [FormFocus; 12] = [
        FormFocus::Field(FieldKey::FirstName),
        FormFocus::Field(FieldKey::Email),
        FormFocus::Field(FieldKey::AccountType),
        FormFocus::Field(FieldKey::Bio),
        FormFocus::Interest(0),
        FormFocus::Interest(1),
        FormFocus::Interest(2),
        FormFocus::Newsletter,
        FormFocus::Terms,
        FormFocus::Field(FieldKey::IsSmall),
        FormFocus::Field(FieldKey::IsLarge),
        FormFocus::Field(FieldKey::IsInline),
    ];

    /// True for rows that accept typed characters
    pub fn is_text(&self) -> bool {
        matches!(
            self,
            FormFocus::Field(FieldKey::FirstName | FieldKey::Email | FieldKey::Bio)
        )
    }
}

/// Field state container for the example form.
///
/// Holds the component's own working copy of user-entered values. Readers
/// always derive validation from the current values; `revision` grows on
/// every write so a renderer can detect change cheaply.
#[derive(Debug, Clone, Default)]
pub struct FormExampleState {
    first_name: LocalField<String>,
    email: LocalField<String>,
    account_type: LocalField<String>,
    bio: LocalField<String>,
    interests: LocalField<InterestSet>,
    is_small: LocalField<bool>,
    is_large: LocalField<bool>,
    is_inline: LocalField<bool>,
    pub active_field_index: usize,
}

impl FormExampleState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of all field versions
    #[allow(dead_code)]
    pub fn revision(&self) -> u64 {
        self.first_name.version()
            + self.email.version()
            + self.account_type.version()
            + self.bio.version()
            + self.interests.version()
            + self.is_small.version()
            + self.is_large.version()
            + self.is_inline.version()
    }

    /// Replace a field's value through the string-keyed surface
    #[allow(dead_code)]
    pub fn set_field_by_name(&mut self, name: &str, value: FieldValue) -> Result<(), FormError> {
        let key: FieldKey = name.parse()?;
        self.set_field(key, value)
    }

    /// Replace a field's value, rejecting values of the wrong shape
    pub fn set_field(&mut self, key: FieldKey, value: FieldValue) -> Result<(), FormError> {
        match (key, value) {
            (FieldKey::FirstName, FieldValue::Text(v)) => self.first_name.set(v),
            (FieldKey::Email, FieldValue::Text(v)) => self.email.set(v),
            (FieldKey::AccountType, FieldValue::Text(v)) => self.account_type.set(v),
            (FieldKey::Bio, FieldValue::Text(v)) => self.bio.set(v),
            (FieldKey::Interests, FieldValue::Set(v)) => self.interests.set(v),
            (FieldKey::IsSmall, FieldValue::Flag(v)) => self.is_small.set(v),
            (FieldKey::IsLarge, FieldValue::Flag(v)) => self.is_large.set(v),
            (FieldKey::IsInline, FieldValue::Flag(v)) => self.is_inline.set(v),
            (key, value) => {
                return Err(FormError::TypeMismatch {
                    field: key,
                    expected: key.kind(),
                    actual: value.kind(),
                })
            }
        }
        tracing::debug!(field = %key, "set field");
        Ok(())
    }

    /// Current value of any field
    #[allow(dead_code)]
    pub fn field(&self, key: FieldKey) -> FieldValue {
        match key {
            FieldKey::FirstName => FieldValue::Text(self.first_name.get().clone()),
            FieldKey::Email => FieldValue::Text(self.email.get().clone()),
            FieldKey::AccountType => FieldValue::Text(self.account_type.get().clone()),
            FieldKey::Bio => FieldValue::Text(self.bio.get().clone()),
            FieldKey::Interests => FieldValue::Set(self.interests.get().clone()),
            FieldKey::IsSmall => FieldValue::Flag(*self.is_small.get()),
            FieldKey::IsLarge => FieldValue::Flag(*self.is_large.get()),
            FieldKey::IsInline => FieldValue::Flag(*self.is_inline.get()),
        }
    }

    #[allow(dead_code)]
    pub fn set_first_name(&mut self, value: impl Into<String>) {
        self.first_name.set(value.into());
    }

    #[allow(dead_code)]
    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email.set(value.into());
    }

    pub fn set_account_type(&mut self, value: impl Into<String>) {
        self.account_type.set(value.into());
    }

    #[allow(dead_code)]
    pub fn set_bio(&mut self, value: impl Into<String>) {
        self.bio.set(value.into());
    }

    /// Select or deselect an interest. Always stores a new set.
    pub fn set_interest(&mut self, id: &str, is_selected: bool) {
        let next = if is_selected {
            self.interests.get().with(id)
        } else {
            self.interests.get().without(id)
        };
        tracing::debug!(interest = id, is_selected, "set interest");
        self.interests.set(next);
    }

    pub fn first_name(&self) -> &str {
        self.first_name.get()
    }

    pub fn email(&self) -> &str {
        self.email.get()
    }

    pub fn account_type(&self) -> &str {
        self.account_type.get()
    }

    pub fn bio(&self) -> &str {
        self.bio.get()
    }

    pub fn interests(&self) -> &InterestSet {
        self.interests.get()
    }

    pub fn is_interest_selected(&self, id: &str) -> bool {
        self.interests.get().contains(id)
    }

    /// Value of a boolean field; false for non-flag keys
    pub fn flag(&self, key: FieldKey) -> bool {
        match key {
            FieldKey::IsSmall => *self.is_small.get(),
            FieldKey::IsLarge => *self.is_large.get(),
            FieldKey::IsInline => *self.is_inline.get(),
            _ => false,
        }
    }

    pub fn errors(&self, key: FieldKey) -> Vec<String> {
        validation::validate(self, key)
    }

    pub fn first_name_errors(&self) -> Vec<String> {
        self.errors(FieldKey::FirstName)
    }

    pub fn email_errors(&self) -> Vec<String> {
        self.errors(FieldKey::Email)
    }

    pub fn account_type_errors(&self) -> Vec<String> {
        self.errors(FieldKey::AccountType)
    }

    pub fn interests_errors(&self) -> Vec<String> {
        self.errors(FieldKey::Interests)
    }

    pub fn focus(&self) -> FormFocus {
        FormFocus::ORDER[self.active_field_index.min(FormFocus::ORDER.len() - 1)]
    }

    /// Append a typed character to the focused text field
    pub fn input_char(&mut self, c: char) {
        if let FormFocus::Field(key) = self.focus() {
            self.edit_text(key, |s| s.push(c));
        }
    }

    /// Remove the last character from the focused text field
    pub fn backspace(&mut self) {
        if let FormFocus::Field(key) = self.focus() {
            self.edit_text(key, |s| {
                s.pop();
            });
        }
    }

    /// Step the account type selection forward or backward
    pub fn cycle_account_type(&mut self, forward: bool) {
        let count = ACCOUNT_TYPES.len();
        let current = ACCOUNT_TYPES
            .iter()
            .position(|(value, _)| *value == self.account_type())
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % count
        } else {
            (current + count - 1) % count
        };
        self.set_account_type(ACCOUNT_TYPES[next].0);
    }

    fn edit_text(&mut self, key: FieldKey, edit: impl FnOnce(&mut String)) {
        let field = match key {
            FieldKey::FirstName => &mut self.first_name,
            FieldKey::Email => &mut self.email,
            FieldKey::Bio => &mut self.bio,
            _ => return,
        };
        let mut value = field.get().clone();
        edit(&mut value);
        field.set(value);
    }
}

impl Form for FormExampleState {
    fn field_count(&self) -> usize {
        FormFocus::ORDER.len()
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(FormFocus::ORDER.len() - 1);
    }
}
