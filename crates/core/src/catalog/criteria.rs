use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Category value that disables the category filter
pub const ALL_CATEGORIES: &str = "all";

/// Price ordering applied after filtering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "low-high")]
    Ascending,
    #[serde(rename = "high-low")]
    Descending,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::None => "none",
            SortOrder::Ascending => "low-high",
            SortOrder::Descending => "high-low",
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "none" | "default" => Ok(SortOrder::None),
            "low-high" | "asc" | "ascending" => Ok(SortOrder::Ascending),
            "high-low" | "desc" | "descending" => Ok(SortOrder::Descending),
            other => Err(format!(
                "Invalid sort order: {other}. Valid orders: none, low-high, high-low"
            )),
        }
    }
}

/// Current search, category and sort selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub search_term: String,
    pub category: String,
    pub sort_order: SortOrder,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            category: ALL_CATEGORIES.to_string(),
            sort_order: SortOrder::None,
        }
    }
}

impl FilterCriteria {
    pub fn new(
        search_term: impl Into<String>,
        category: impl Into<String>,
        sort_order: SortOrder,
    ) -> Self {
        Self {
            search_term: search_term.into(),
            category: category.into(),
            sort_order,
        }
    }
}
