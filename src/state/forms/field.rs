//! Form field value objects

use crate::error::FormError;
use std::fmt;
use std::str::FromStr;

/// Declared keys of the example form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    FirstName,
    Email,
    AccountType,
    Bio,
    Interests,
    IsSmall,
    IsLarge,
    IsInline,
}

impl FieldKey {
    pub const ALL: [FieldKey; 8] = [
        FieldKey::FirstName,
        FieldKey::Email,
        FieldKey::AccountType,
        FieldKey::Bio,
        FieldKey::Interests,
        FieldKey::IsSmall,
        FieldKey::IsLarge,
        FieldKey::IsInline,
    ];

    /// Name used by the string-keyed surface
    pub fn name(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::Email => "email",
            Self::AccountType => "accountType",
            Self::Bio => "bio",
            Self::Interests => "interests",
            Self::IsSmall => "isSmall",
            Self::IsLarge => "isLarge",
            Self::IsInline => "isInline",
        }
    }

    /// The single value kind this field holds for its lifetime
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::FirstName | Self::Email | Self::AccountType | Self::Bio => FieldKind::Text,
            Self::Interests => FieldKind::Set,
            Self::IsSmall | Self::IsLarge | Self::IsInline => FieldKind::Flag,
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FieldKey {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.name() == s)
            .ok_or_else(|| FormError::InvalidField(s.to_string()))
    }
}

/// Shape of a field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Flag,
    Set,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Flag => "flag",
            Self::Set => "set",
        })
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Set(InterestSet),
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Text(_) => FieldKind::Text,
            Self::Flag(_) => FieldKind::Flag,
            Self::Set(_) => FieldKind::Set,
        }
    }
}

/// A value owned and mutated by the component itself.
///
/// Every write bumps the version, so dependents can tell a replaced value from
/// an untouched one without comparing contents.
#[derive(Debug, Clone, Default)]
pub struct LocalField<T> {
    value: T,
    version: u64,
}

impl<T> LocalField<T> {
    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn set(&mut self, value: T) {
        self.value = value;
        self.version += 1;
    }

    pub fn version(&self) -> u64 {
        self.version
    }
}

/// Ordered set of selected option identifiers.
///
/// Operations return a new set rather than editing in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterestSet(Vec<String>);

impl InterestSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of this set with `id` appended, unless already present
    pub fn with(&self, id: &str) -> Self {
        if self.contains(id) {
            return self.clone();
        }
        let mut items = self.0.clone();
        items.push(id.to_string());
        Self(items)
    }

    /// Copy of this set with `id` filtered out
    pub fn without(&self, id: &str) -> Self {
        Self(self.0.iter().filter(|item| *item != id).cloned().collect())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|item| item == id)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for InterestSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), |set, item| {
            let item: String = item.into();
            set.with(&item)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    mod field_key {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_parse_declared_names() {
            for key in FieldKey::ALL {
                let parsed = assert_ok!(key.name().parse::<FieldKey>());
                assert_eq!(parsed, key);
            }
        }

        #[test]
        fn test_parse_unknown_name_is_invalid_field() {
            let err = assert_err!("lastName".parse::<FieldKey>());
            assert_eq!(err, FormError::InvalidField("lastName".to_string()));
        }

        #[test]
        fn test_parse_is_case_sensitive() {
            assert!("FirstName".parse::<FieldKey>().is_err());
        }

        #[test]
        fn test_kinds() {
            assert_eq!(FieldKey::FirstName.kind(), FieldKind::Text);
            assert_eq!(FieldKey::Bio.kind(), FieldKind::Text);
            assert_eq!(FieldKey::Interests.kind(), FieldKind::Set);
            assert_eq!(FieldKey::IsInline.kind(), FieldKind::Flag);
        }
    }

    mod local_field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_starts_at_version_zero() {
            let field = LocalField::<String>::default();
            assert_eq!(field.version(), 0);
            assert_eq!(field.get(), "");
        }

        #[test]
        fn test_set_replaces_and_bumps_version() {
            let mut field = LocalField::<bool>::default();
            field.set(true);
            field.set(true);
            assert!(*field.get());
            assert_eq!(field.version(), 2);
        }
    }

    mod interest_set {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_with_appends_in_order() {
            let set = InterestSet::new().with("IoT").with("Music");
            assert_eq!(set.iter().collect::<Vec<_>>(), vec!["IoT", "Music"]);
        }

        #[test]
        fn test_with_existing_is_noop() {
            let once = InterestSet::new().with("Music");
            let twice = once.with("Music");
            assert_eq!(once, twice);
            assert_eq!(twice.len(), 1);
        }

        #[test]
        fn test_without_is_inverse_of_with() {
            let before: InterestSet = ["IoT"].into_iter().collect();
            let after = before.with("Music").without("Music");
            assert_eq!(before, after);
        }

        #[test]
        fn test_without_absent_is_noop() {
            let set: InterestSet = ["IoT"].into_iter().collect();
            assert_eq!(set.without("Music"), set);
        }

        #[test]
        fn test_from_iter_drops_duplicates() {
            let set: InterestSet = ["IoT", "IoT", "Music"].into_iter().collect();
            assert_eq!(set.len(), 2);
        }

        #[test]
        fn test_operations_leave_original_untouched() {
            let set = InterestSet::new();
            let _ = set.with("IoT");
            assert!(set.is_empty());
        }
    }
}
