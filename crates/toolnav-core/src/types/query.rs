//! The active view query
//!
//! Exactly one mode is active at a time. Switching modes is a replacement,
//! never an intersection of predicates.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::tool::ToolRecord;

/// Category and filter-button value that matches every tool
pub const ALL_SENTINEL: &str = "all";

/// Quick filter on a boolean flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuickFilter {
    /// `isFree == true`
    Free,
    /// `isNew == true`
    New,
}

impl QuickFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuickFilter::Free => "free",
            QuickFilter::New => "new",
        }
    }

    pub fn matches(&self, tool: &ToolRecord) -> bool {
        match self {
            QuickFilter::Free => tool.is_free,
            QuickFilter::New => tool.is_new,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown filter: {0}")]
pub struct QueryParseError(pub String);

impl FromStr for QuickFilter {
    type Err = QueryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free" => Ok(QuickFilter::Free),
            "new" => Ok(QuickFilter::New),
            other => Err(QueryParseError(other.to_string())),
        }
    }
}

/// Active view mode
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Query {
    #[default]
    All,
    Category(String),
    QuickFilter(QuickFilter),
    Search(String),
}

impl Query {
    /// Category query; the `"all"` sentinel maps to [`Query::All`]
    pub fn category(name: impl Into<String>) -> Self {
        let name = name.into();
        if name == ALL_SENTINEL {
            Query::All
        } else {
            Query::Category(name)
        }
    }

    /// Query for a filter-button tag (`"all"`, `"free"` or `"new"`)
    pub fn from_filter_tag(tag: &str) -> Result<Self, QueryParseError> {
        if tag == ALL_SENTINEL {
            return Ok(Query::All);
        }
        tag.parse().map(Query::QuickFilter)
    }

    /// Free-text search query
    pub fn search(text: impl Into<String>) -> Self {
        Query::Search(text.into())
    }

    /// Whether a tool satisfies this query's predicate
    pub fn matches(&self, tool: &ToolRecord) -> bool {
        match self {
            Query::All => true,
            Query::Category(category) => tool.category == *category,
            Query::QuickFilter(filter) => filter.matches(tool),
            Query::Search(text) => {
                let needle = text.to_lowercase();
                tool.name.to_lowercase().contains(&needle)
                    || tool.description.to_lowercase().contains(&needle)
                    || tool.tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
            }
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::All => write!(f, "all"),
            Query::Category(c) => write!(f, "category:{}", c),
            Query::QuickFilter(q) => write!(f, "filter:{}", q.as_str()),
            Query::Search(s) => write!(f, "search:{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ToolRecord {
        ToolRecord::new(1u64, "ChatWriter")
            .with_description("Drafts Blog posts")
            .with_category("Writing")
            .with_tags(["LLM", "copy"])
            .free()
    }

    #[test]
    fn test_category_sentinel() {
        assert_eq!(Query::category("all"), Query::All);
        assert_eq!(Query::category("Writing"), Query::Category("Writing".to_string()));
    }

    #[test]
    fn test_category_is_exact() {
        let tool = sample();
        assert!(Query::category("Writing").matches(&tool));
        assert!(!Query::category("writing").matches(&tool));
        assert!(!Query::category("Writ").matches(&tool));
    }

    #[test]
    fn test_filter_tags() {
        assert_eq!(Query::from_filter_tag("all").unwrap(), Query::All);
        assert_eq!(
            Query::from_filter_tag("free").unwrap(),
            Query::QuickFilter(QuickFilter::Free)
        );
        assert_eq!(
            Query::from_filter_tag("new").unwrap(),
            Query::QuickFilter(QuickFilter::New)
        );
        assert_eq!(
            Query::from_filter_tag("paid"),
            Err(QueryParseError("paid".to_string()))
        );
    }

    #[test]
    fn test_quick_filters() {
        let tool = sample();
        assert!(Query::QuickFilter(QuickFilter::Free).matches(&tool));
        assert!(!Query::QuickFilter(QuickFilter::New).matches(&tool));
    }

    #[test]
    fn test_search_fields_case_insensitive() {
        let tool = sample();
        // name
        assert!(Query::search("chatw").matches(&tool));
        // description
        assert!(Query::search("BLOG").matches(&tool));
        // tag
        assert!(Query::search("llm").matches(&tool));
        // category is not searched
        assert!(!Query::search("writing").matches(&tool));
        assert!(!Query::search("image").matches(&tool));
    }

    #[test]
    fn test_display() {
        assert_eq!(Query::All.to_string(), "all");
        assert_eq!(Query::QuickFilter(QuickFilter::New).to_string(), "filter:new");
        assert_eq!(Query::search("fox").to_string(), "search:fox");
    }
}
