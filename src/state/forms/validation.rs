//! Validation rules for the example form
//!
//! Rules are pure functions of the current field values and are evaluated on
//! every read. Nothing here is cached, so there is no stale result to clear.
//! A field is valid iff its message list is empty.

use super::field::{FieldKey, InterestSet};
use super::form_state::FormExampleState;

pub const FIRST_NAME_BLANK: &str = "First name can't be blank";
pub const EMAIL_INVALID: &str = "Email must be a valid email address";
pub const ACCOUNT_TYPE_OTHER: &str = "Other is not a real option, please select something else";
pub const INTERESTS_EMPTY: &str = "At least one option must be selected";

pub fn first_name_errors(first_name: &str) -> Vec<String> {
    if first_name.is_empty() {
        vec![FIRST_NAME_BLANK.to_string()]
    } else {
        Vec::new()
    }
}

pub fn email_errors(email: &str) -> Vec<String> {
    if !email.is_empty() && email.contains('@') {
        Vec::new()
    } else {
        vec![EMAIL_INVALID.to_string()]
    }
}

pub fn account_type_errors(account_type: &str) -> Vec<String> {
    if account_type == "other" {
        vec![ACCOUNT_TYPE_OTHER.to_string()]
    } else {
        Vec::new()
    }
}

pub fn interests_errors(interests: &InterestSet) -> Vec<String> {
    if interests.is_empty() {
        vec![INTERESTS_EMPTY.to_string()]
    } else {
        Vec::new()
    }
}

/// Error messages for `key` given the form's current values
pub fn validate(form: &FormExampleState, key: FieldKey) -> Vec<String> {
    match key {
        FieldKey::FirstName => first_name_errors(form.first_name()),
        FieldKey::Email => email_errors(form.email()),
        FieldKey::AccountType => account_type_errors(form.account_type()),
        FieldKey::Interests => interests_errors(form.interests()),
        FieldKey::Bio | FieldKey::IsSmall | FieldKey::IsLarge | FieldKey::IsInline => Vec::new(),
    }
}

/// True when every field of the form validates cleanly
pub fn is_form_valid(form: &FormExampleState) -> bool {
    FieldKey::ALL
        .into_iter()
        .all(|key| validate(form, key).is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_first_name_blank() {
        assert_eq!(first_name_errors(""), vec![FIRST_NAME_BLANK]);
        assert!(first_name_errors("Ada").is_empty());
    }

    #[test]
    fn test_first_name_whitespace_is_not_blank() {
        assert!(first_name_errors(" ").is_empty());
    }

    #[test]
    fn test_email_requires_at_sign() {
        assert_eq!(email_errors(""), vec![EMAIL_INVALID]);
        assert_eq!(email_errors("not-an-email"), vec![EMAIL_INVALID]);
        assert!(email_errors("a@b.com").is_empty());
        assert!(email_errors("@").is_empty());
    }

    #[test]
    fn test_account_type_other_is_rejected() {
        assert_eq!(account_type_errors("other"), vec![ACCOUNT_TYPE_OTHER]);
        assert!(account_type_errors("").is_empty());
        assert!(account_type_errors("business").is_empty());
        assert!(account_type_errors("Other").is_empty());
    }

    #[test]
    fn test_interests_must_be_non_empty() {
        assert_eq!(interests_errors(&InterestSet::new()), vec![INTERESTS_EMPTY]);
        assert!(interests_errors(&InterestSet::new().with("IoT")).is_empty());
    }

    #[test]
    fn test_unvalidated_fields_are_always_valid() {
        let form = FormExampleState::new();
        assert!(validate(&form, FieldKey::Bio).is_empty());
        assert!(validate(&form, FieldKey::IsSmall).is_empty());
    }

    #[test]
    fn test_validate_is_pure() {
        let form = FormExampleState::new();
        for key in FieldKey::ALL {
            assert_eq!(validate(&form, key), validate(&form, key));
        }
    }

    #[test]
    fn test_fresh_form_is_invalid() {
        assert!(!is_form_valid(&FormExampleState::new()));
    }
}
