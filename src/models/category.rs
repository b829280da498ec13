//! Expense categories
//!
//! A category is either one of the standard choices offered by the expense
//! form or, when the category mode allows it, any free-text label.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of categories offered by the expense form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardCategory {
    Food,
    Travel,
    Shopping,
    Bills,
    Health,
    Other,
}

impl StandardCategory {
    /// All standard categories, in form order
    pub fn all() -> &'static [StandardCategory] {
        &[
            Self::Food,
            Self::Travel,
            Self::Shopping,
            Self::Bills,
            Self::Health,
            Self::Other,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Travel => "Travel",
            Self::Shopping => "Shopping",
            Self::Bills => "Bills",
            Self::Health => "Health",
            Self::Other => "Other",
        }
    }

    /// Match a standard category by name, ignoring case and surrounding spaces
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for StandardCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Whether categories are restricted to [`StandardCategory`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CategoryMode {
    /// Only the standard categories are accepted (default)
    #[default]
    Fixed,
    /// Any non-empty label is accepted
    FreeText,
}

/// The category label stored on an expense record
///
/// Ordering is lexical on the label, which is the order category reports use.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Validate user input against the category mode
    ///
    /// Standard categories are always stored in their canonical spelling.
    pub fn parse(input: &str, mode: CategoryMode) -> Result<Self, CategoryParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(CategoryParseError::Empty);
        }

        if let Some(standard) = StandardCategory::parse(trimmed) {
            return Ok(standard.into());
        }

        match mode {
            CategoryMode::FreeText => Ok(Self(trimmed.to_string())),
            CategoryMode::Fixed => Err(CategoryParseError::Unknown(trimmed.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The standard category this label names, if any
    pub fn standard(&self) -> Option<StandardCategory> {
        StandardCategory::parse(&self.0)
    }
}

impl From<StandardCategory> for Category {
    fn from(standard: StandardCategory) -> Self {
        Self(standard.name().to_string())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Why a category label was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryParseError {
    Empty,
    Unknown(String),
}

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "category cannot be empty"),
            Self::Unknown(s) => {
                let names: Vec<_> = StandardCategory::all().iter().map(|c| c.name()).collect();
                write!(f, "unknown category '{}'. Valid: {}", s, names.join(", "))
            }
        }
    }
}

impl std::error::Error for CategoryParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_parse_is_case_insensitive() {
        assert_eq!(StandardCategory::parse("food"), Some(StandardCategory::Food));
        assert_eq!(StandardCategory::parse(" HEALTH "), Some(StandardCategory::Health));
        assert_eq!(StandardCategory::parse("Groceries"), None);
    }

    #[test]
    fn test_fixed_mode() {
        let cat = Category::parse("travel", CategoryMode::Fixed).unwrap();
        assert_eq!(cat.as_str(), "Travel");
        assert_eq!(cat.standard(), Some(StandardCategory::Travel));

        assert_eq!(
            Category::parse("Groceries", CategoryMode::Fixed),
            Err(CategoryParseError::Unknown("Groceries".into()))
        );
    }

    #[test]
    fn test_free_text_mode() {
        let cat = Category::parse("  Groceries ", CategoryMode::FreeText).unwrap();
        assert_eq!(cat.as_str(), "Groceries");
        assert_eq!(cat.standard(), None);

        // Standard names are still canonicalised
        let cat = Category::parse("bills", CategoryMode::FreeText).unwrap();
        assert_eq!(cat.as_str(), "Bills");
    }

    #[test]
    fn test_empty_rejected_in_both_modes() {
        assert_eq!(Category::parse("  ", CategoryMode::Fixed), Err(CategoryParseError::Empty));
        assert_eq!(Category::parse("", CategoryMode::FreeText), Err(CategoryParseError::Empty));
    }

    #[test]
    fn test_lexical_ordering() {
        let mut cats = vec![
            Category::from(StandardCategory::Travel),
            Category::from(StandardCategory::Bills),
            Category::from(StandardCategory::Food),
        ];
        cats.sort();
        let names: Vec<_> = cats.iter().map(|c| c.as_str()).collect();
        assert_eq!(names, vec!["Bills", "Food", "Travel"]);
    }

    #[test]
    fn test_mode_serialization() {
        assert_eq!(serde_json::to_string(&CategoryMode::FreeText).unwrap(), "\"free_text\"");
    }
}
