//! Known category set
//!
//! The caller maintains a closed list of category labels. Order matters: the
//! categories listing shows zero-spend categories in this order.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Maximum length of a category label
const MAX_NAME_LEN: usize = 50;

/// Categories seeded into a fresh configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultCategory {
    Groceries,
    Transport,
    Entertainment,
    Utilities,
    Health,
    Income,
    Other,
}

impl DefaultCategory {
    /// Get all default categories in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::Groceries,
            Self::Transport,
            Self::Entertainment,
            Self::Utilities,
            Self::Health,
            Self::Income,
            Self::Other,
        ]
    }

    /// Get the label for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::Groceries => "Groceries",
            Self::Transport => "Transport",
            Self::Entertainment => "Entertainment",
            Self::Utilities => "Utilities",
            Self::Health => "Health",
            Self::Income => "Income",
            Self::Other => "Other",
        }
    }
}

/// An ordered, duplicate-free set of category labels
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct CategorySet {
    names: Vec<String>,
    #[serde(skip)]
    index: HashSet<String>,
}

impl CategorySet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from labels, rejecting blanks, overlong names and duplicates
    pub fn from_names<I, S>(names: I) -> Result<Self, CategoryValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for name in names {
            set.insert(name)?;
        }
        Ok(set)
    }

    /// The default family category list
    pub fn defaults() -> Self {
        let names: Vec<String> = DefaultCategory::all()
            .iter()
            .map(|c| c.name().to_string())
            .collect();
        let index = names.iter().cloned().collect();
        Self { names, index }
    }

    /// Append a category to the end of the set
    pub fn insert(&mut self, name: impl Into<String>) -> Result<(), CategoryValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(CategoryValidationError::NameTooLong(name.chars().count()));
        }
        if self.index.contains(&name) {
            return Err(CategoryValidationError::Duplicate(name));
        }
        self.index.insert(name.clone());
        self.names.push(name);
        Ok(())
    }

    /// Check membership
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains(name)
    }

    /// Iterate labels in order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl TryFrom<Vec<String>> for CategorySet {
    type Error = CategoryValidationError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Self::from_names(names)
    }
}

impl From<CategorySet> for Vec<String> {
    fn from(set: CategorySet) -> Self {
        set.names
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
    Duplicate(String),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max {})", len, MAX_NAME_LEN)
            }
            Self::Duplicate(name) => write!(f, "Category listed twice: {}", name),
        }
    }
}

impl std::error::Error for CategoryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let set = CategorySet::defaults();
        assert_eq!(set.len(), DefaultCategory::all().len());
        assert!(set.contains("Groceries"));
        assert!(set.contains("Other"));
        assert_eq!(set.iter().next(), Some("Groceries"));
    }

    #[test]
    fn test_preserves_order() {
        let set = CategorySet::from_names(["Utilities", "Health", "Groceries"]).unwrap();
        let names: Vec<_> = set.iter().collect();
        assert_eq!(names, vec!["Utilities", "Health", "Groceries"]);
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            CategorySet::from_names(["  "]).unwrap_err(),
            CategoryValidationError::EmptyName
        );
        assert_eq!(
            CategorySet::from_names(["A", "A"]).unwrap_err(),
            CategoryValidationError::Duplicate("A".into())
        );
        assert!(matches!(
            CategorySet::from_names(["x".repeat(51)]).unwrap_err(),
            CategoryValidationError::NameTooLong(51)
        ));
    }

    #[test]
    fn test_names_are_trimmed() {
        let set = CategorySet::from_names([" Health "]).unwrap();
        assert!(set.contains("Health"));
    }

    #[test]
    fn test_serialization() {
        let set = CategorySet::from_names(["Groceries", "Transport"]).unwrap();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["Groceries","Transport"]"#);

        let back: CategorySet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
        assert!(back.contains("Transport"));

        assert!(serde_json::from_str::<CategorySet>(r#"["A","A"]"#).is_err());
    }
}
