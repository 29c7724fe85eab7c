//! Controlled inputs
//!
//! A controlled input displays a value it does not own. The controller lends
//! the value for one render or interaction through [`ControlledValue`], and
//! the component reports the value it would like instead through a
//! [`ChangeHandler`]. Nothing in this module can write through a
//! `ControlledValue`: the displayed state only changes when the controller
//! passes a new value on the next render.

use uuid::Uuid;

/// Read-only view of a value owned by the controller
#[derive(Debug, Clone, Copy)]
pub struct ControlledValue<'a, T> {
    value: &'a T,
}

impl<'a, T> ControlledValue<'a, T> {
    pub fn new(value: &'a T) -> Self {
        Self { value }
    }

    pub fn get(&self) -> &'a T {
        self.value
    }
}

/// Payload of a single proposed change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeIntent<T>(pub T);

/// Receiver of change intents from a controlled input
#[cfg_attr(test, mockall::automock)]
pub trait ChangeHandler<T: 'static> {
    fn on_change(&mut self, intent: ChangeIntent<T>);
}

impl<T: 'static, F> ChangeHandler<T> for F
where
    F: FnMut(ChangeIntent<T>),
{
    fn on_change(&mut self, intent: ChangeIntent<T>) {
        self(intent)
    }
}

/// Options passed to a checkbox on each render or interaction
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckboxArgs<'a> {
    pub label: Option<&'a str>,
    pub name: Option<&'a str>,
    pub checked: Option<ControlledValue<'a, bool>>,
    pub has_margin: Option<bool>,
}

impl<'a> CheckboxArgs<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn name(mut self, name: &'a str) -> Self {
        self.name = Some(name);
        self
    }

    pub fn checked(mut self, checked: &'a bool) -> Self {
        self.checked = Some(ControlledValue::new(checked));
        self
    }

    pub fn has_margin(mut self, has_margin: bool) -> Self {
        self.has_margin = Some(has_margin);
        self
    }

    /// Value currently on display; unset means unchecked
    pub fn is_checked(&self) -> bool {
        self.checked.is_some_and(|c| *c.get())
    }
}

/// Everything the renderer needs to draw one checkbox
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckboxView {
    pub input_id: String,
    pub label_for: String,
    pub label: String,
    pub name: Option<String>,
    pub checked: bool,
    pub has_margin: bool,
}

impl CheckboxView {
    pub const BASE_CLASS: &'static str = "input-checkbox";
    pub const MARGIN_CLASS: &'static str = "has-margin";

    pub fn classes(&self) -> Vec<&'static str> {
        let mut classes = vec![Self::BASE_CLASS];
        if self.has_margin {
            classes.push(Self::MARGIN_CLASS);
        }
        classes
    }
}

/// A checkbox instance.
///
/// The identifier pairing the input with its label is fixed at creation and
/// survives every re-render of the instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputCheckbox {
    id: String,
}

impl InputCheckbox {
    pub fn new() -> Self {
        Self {
            id: format!("input-checkbox-{}", Uuid::new_v4().simple()),
        }
    }

    /// Use a caller-supplied identifier; blank ids get a generated one
    pub fn with_id(id: impl Into<String>) -> Self {
        let id = id.into();
        if id.trim().is_empty() {
            Self::new()
        } else {
            Self { id }
        }
    }

    #[allow(dead_code)]
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn render(&self, args: &CheckboxArgs<'_>) -> CheckboxView {
        CheckboxView {
            input_id: self.id.clone(),
            label_for: self.id.clone(),
            label: args.label.unwrap_or_default().to_string(),
            name: args.name.map(str::to_string),
            checked: args.is_checked(),
            has_margin: args.has_margin.unwrap_or(false),
        }
    }

    /// Handle a click on the input or its label.
    ///
    /// The candidate is the negation of the displayed value. Without a handler
    /// the click is visual only and nothing is reported.
    pub fn click(&self, args: &CheckboxArgs<'_>, on_change: Option<&mut dyn ChangeHandler<bool>>) {
        let intent = ChangeIntent(!args.is_checked());
        match on_change {
            Some(handler) => {
                tracing::debug!(id = %self.id, checked = intent.0, "checkbox change intent");
                handler.on_change(intent);
            }
            None => tracing::trace!(id = %self.id, "checkbox clicked without handler"),
        }
    }
}

impl Default for InputCheckbox {
    fn default() -> Self {
        Self::new()
    }
}
