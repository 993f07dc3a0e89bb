//! Product categories and the category selector used to filter the catalog.

use serde::{Deserialize, Serialize};

use super::parse::ParseError;

/// Category of a gourmet product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Meats,
    Fish,
    Cheeses,
    CuredMeats,
    Wines,
    Delicatessen,
}

impl Category {
    /// Every category, in the order the category bar lists them.
    pub const ALL: [Self; 6] = [
        Self::Meats,
        Self::Fish,
        Self::Cheeses,
        Self::CuredMeats,
        Self::Wines,
        Self::Delicatessen,
    ];

    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Meats => "Meats",
            Self::Fish => "Fish",
            Self::Cheeses => "Cheeses",
            Self::CuredMeats => "Cured Meats",
            Self::Wines => "Wines",
            Self::Delicatessen => "Delicatessen",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = ParseError;

    /// Accepts the label, the snake_case name, or the shop's Spanish
    /// category name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "meats" | "carnes" => Ok(Self::Meats),
            "fish" | "pescados" => Ok(Self::Fish),
            "cheeses" | "quesos" => Ok(Self::Cheeses),
            "cured_meats" | "embutidos" => Ok(Self::CuredMeats),
            "wines" | "vinos" => Ok(Self::Wines),
            "delicatessen" => Ok(Self::Delicatessen),
            _ => Err(ParseError::new("category", s)),
        }
    }
}

/// Category selector: either every category or exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Whether a product in `category` passes this selector.
    #[must_use]
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => *selected == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Only(category) => category.fmt(f),
        }
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "todos" | "*" => Ok(Self::All),
            _ => s.parse::<Category>().map(Self::Only),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category_names() {
        assert_eq!("Meats".parse::<Category>().unwrap(), Category::Meats);
        assert_eq!("cured meats".parse::<Category>().unwrap(), Category::CuredMeats);
        assert_eq!("Embutidos".parse::<Category>().unwrap(), Category::CuredMeats);
        assert!("bread".parse::<Category>().is_err());
    }

    #[test]
    fn test_filter_all_matches_everything() {
        for category in Category::ALL {
            assert!(CategoryFilter::All.matches(category));
        }
    }

    #[test]
    fn test_filter_only_is_exact() {
        let filter = CategoryFilter::Only(Category::Fish);
        assert!(filter.matches(Category::Fish));
        assert!(!filter.matches(Category::Meats));
    }

    #[test]
    fn test_parse_filter_wildcard() {
        assert_eq!("Todos".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "wines".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Wines)
        );
    }
}
