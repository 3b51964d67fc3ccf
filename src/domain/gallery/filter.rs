// SPDX-License-Identifier: MPL-2.0
//! Category filter values.

use super::item::Category;
use std::fmt;

/// Raw value of the catch-all filter button.
pub const ALL_FILTER: &str = "all";

/// Value carried by a filter button: either the catch-all or one category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FilterValue {
    /// Show every item.
    #[default]
    All,
    /// Show only items of this category.
    Category(Category),
}

impl FilterValue {
    /// Parses a raw button value. `"all"` selects the catch-all, anything
    /// else names a category.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw == ALL_FILTER {
            Self::All
        } else {
            Self::Category(Category::new(raw))
        }
    }

    /// Returns `true` if an item of `category` is visible under this filter.
    #[must_use]
    pub fn matches(&self, category: &Category) -> bool {
        match self {
            Self::All => true,
            Self::Category(selected) => selected == category,
        }
    }

    /// Returns the raw button value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_FILTER,
            Self::Category(category) => category.as_str(),
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Category> for FilterValue {
    fn from(category: Category) -> Self {
        Self::Category(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_recognizes_catch_all() {
        assert_eq!(FilterValue::parse("all"), FilterValue::All);
        assert_eq!(FilterValue::parse(" all "), FilterValue::All);
        assert_eq!(
            FilterValue::parse("nature"),
            FilterValue::Category(Category::new("nature"))
        );
    }

    #[test]
    fn all_matches_every_category() {
        let filter = FilterValue::All;
        for name in ["nature", "urban", "travel", "portraits", "anything"] {
            assert!(filter.matches(&Category::new(name)));
        }
    }

    #[test]
    fn category_filter_matches_only_itself() {
        let filter = FilterValue::parse("urban");
        assert!(filter.matches(&Category::new("urban")));
        assert!(!filter.matches(&Category::new("nature")));
        assert!(!filter.matches(&Category::new("Urban")));
    }

    #[test]
    fn as_str_returns_raw_value() {
        assert_eq!(FilterValue::All.as_str(), "all");
        assert_eq!(FilterValue::parse("travel").to_string(), "travel");
    }
}
