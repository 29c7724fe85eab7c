//! Form domain layer
//!
//! Type-safe field state and pure validation for the example form.

mod field;
mod form_state;
pub mod validation;

pub use field::{FieldKey, FieldKind, FieldValue};
pub use form_state::{Form, FormExampleState, FormFocus, ACCOUNT_TYPES, INTEREST_OPTIONS};
