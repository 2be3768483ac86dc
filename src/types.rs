// src/types.rs

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Which directory entries get handed to the scanner.
///
/// Every entry is tracked for add/remove events regardless of the filter;
/// the filter only decides what is scanned.
///
/// - `Unset`: scan nothing (`--ext` given without a value).
/// - `Any`: scan every regular file (`--ext '*'`).
/// - `Suffix`: scan names ending with the suffix, e.g. `.txt`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ExtensionFilter {
    Unset,
    Any,
    Suffix(String),
}

pub const DEFAULT_EXTENSION: &str = ".txt";
pub const WILDCARD_EXTENSION: &str = "*";

impl ExtensionFilter {
    pub fn matches(&self, file_name: &str) -> bool {
        match self {
            ExtensionFilter::Unset => false,
            ExtensionFilter::Any => true,
            ExtensionFilter::Suffix(suffix) => file_name.ends_with(suffix.as_str()),
        }
    }
}

impl Default for ExtensionFilter {
    fn default() -> Self {
        ExtensionFilter::Suffix(DEFAULT_EXTENSION.to_string())
    }
}

impl From<String> for ExtensionFilter {
    fn from(s: String) -> Self {
        match s.trim() {
            "" => ExtensionFilter::Unset,
            WILDCARD_EXTENSION => ExtensionFilter::Any,
            other => ExtensionFilter::Suffix(other.to_string()),
        }
    }
}

impl FromStr for ExtensionFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ExtensionFilter::from(s.to_string()))
    }
}

impl fmt::Display for ExtensionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtensionFilter::Unset => write!(f, "<unset>"),
            ExtensionFilter::Any => write!(f, "{WILDCARD_EXTENSION}"),
            ExtensionFilter::Suffix(s) => write!(f, "{s}"),
        }
    }
}
