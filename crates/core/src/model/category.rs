use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Errors that can occur when parsing a category name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CategoryError {
    #[error("unknown exam category: {0}")]
    Unknown(String),
}

//
// ─── CATEGORY ──────────────────────────────────────────────────────────────────
//

/// One of the fixed exam sections.
///
/// The set is closed on purpose: quotas, thresholds and scoring are keyed by
/// category, and a free-form string would let a typo silently drop a section
/// from the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Vehicle controls and handling.
    Controls,
    /// Road signs and markings.
    Signs,
    /// Traffic rules and priority.
    Rules,
    /// Cross-section items used by extended practice modes.
    Mixed,
}

impl Category {
    /// All categories, in canonical order.
    pub const ALL: [Category; 4] = [
        Category::Controls,
        Category::Signs,
        Category::Rules,
        Category::Mixed,
    ];

    /// Canonical lowercase name, as used in authored item data.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Controls => "controls",
            Category::Signs => "signs",
            Category::Rules => "rules",
            Category::Mixed => "mixed",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "controls" => Ok(Category::Controls),
            "signs" => Ok(Category::Signs),
            "rules" => Ok(Category::Rules),
            "mixed" => Ok(Category::Mixed),
            other => Err(CategoryError::Unknown(other.to_string())),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
