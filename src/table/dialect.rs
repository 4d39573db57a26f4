//! Table dialect selection
//!
//! A [`Dialect`] picks one parser/stringifier/locator triple. It is chosen
//! once per document (from the file extension or configuration) and passed
//! around by value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::locator::{MarkdownLocator, OrgLocator, TableLocator};
use super::parser::{MarkdownParser, OrgParser, TableParser};
use super::render::{MarkdownStringifier, OrgStringifier, TableStringifier};

/// Supported table dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Pipe-delimited Markdown tables with alignment markers
    #[default]
    Markdown,
    /// Org-mode tables
    Org,
}

impl Dialect {
    pub fn parser(self) -> &'static dyn TableParser {
        match self {
            Dialect::Markdown => &MarkdownParser,
            Dialect::Org => &OrgParser,
        }
    }

    pub fn stringifier(self) -> &'static dyn TableStringifier {
        match self {
            Dialect::Markdown => &MarkdownStringifier,
            Dialect::Org => &OrgStringifier,
        }
    }

    pub fn locator(self) -> &'static dyn TableLocator {
        match self {
            Dialect::Markdown => &MarkdownLocator,
            Dialect::Org => &OrgLocator,
        }
    }

    /// Detect dialect from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "md" | "markdown" | "mdown" | "mkd" => Some(Dialect::Markdown),
            "org" => Some(Dialect::Org),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Dialect::Markdown => "markdown",
            Dialect::Org => "org",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognized dialect name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown table dialect '{0}' (expected 'markdown' or 'org')")]
pub struct UnknownDialect(pub String);

impl FromStr for Dialect {
    type Err = UnknownDialect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(Dialect::Markdown),
            "org" => Ok(Dialect::Org),
            _ => Err(UnknownDialect(s.to_string())),
        }
    }
}
