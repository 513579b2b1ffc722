//! Tool and category records as they appear in the catalog document

use std::fmt;

use serde::{Deserialize, Serialize};

/// Icon shown when a record doesn't carry one
pub const DEFAULT_ICON: &str = "fas fa-cube";

/// Stable tool identifier
///
/// Catalog documents use either numbers or strings for ids. Both are accepted
/// and written back in the same form, so persisted favorites match the source.
/// Any JSON number is valid, including negative and fractional ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToolId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolId::Number(n) => write!(f, "{}", n),
            ToolId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<u64> for ToolId {
    fn from(id: u64) -> Self {
        ToolId::Number(id.into())
    }
}

impl From<i64> for ToolId {
    fn from(id: i64) -> Self {
        ToolId::Number(id.into())
    }
}

impl From<&str> for ToolId {
    fn from(id: &str) -> Self {
        ToolId::Text(id.to_string())
    }
}

impl From<String> for ToolId {
    fn from(id: String) -> Self {
        ToolId::Text(id)
    }
}

/// Card badge, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Free,
    New,
    Featured,
}

impl Badge {
    pub fn label(&self) -> &'static str {
        match self {
            Badge::Free => "Free",
            Badge::New => "New",
            Badge::Featured => "Featured",
        }
    }
}

/// A single tool in the catalog
///
/// Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolRecord {
    pub id: ToolId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub is_free: bool,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, rename = "isWeb3")]
    pub is_web3: bool,
}

impl ToolRecord {
    /// Create a tool with only an id and a name; everything else empty
    pub fn new(id: impl Into<ToolId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            category: String::new(),
            tags: Vec::new(),
            url: String::new(),
            icon: None,
            is_free: false,
            is_new: false,
            featured: false,
            is_web3: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn free(mut self) -> Self {
        self.is_free = true;
        self
    }

    pub fn new_release(mut self) -> Self {
        self.is_new = true;
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    pub fn web3(mut self) -> Self {
        self.is_web3 = true;
        self
    }

    /// Icon class, falling back to the generic cube
    pub fn icon(&self) -> &str {
        self.icon.as_deref().unwrap_or(DEFAULT_ICON)
    }

    pub fn badges(&self) -> Vec<Badge> {
        let mut badges = Vec::new();
        if self.is_free {
            badges.push(Badge::Free);
        }
        if self.is_new {
            badges.push(Badge::New);
        }
        if self.featured {
            badges.push(Badge::Featured);
        }
        badges
    }
}

/// A browsable category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl CategoryRecord {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            icon: None,
        }
    }

    pub fn icon(&self) -> &str {
        self.icon.as_deref().unwrap_or(DEFAULT_ICON)
    }
}

/// The catalog document: `{ "tools": [...], "categories": [...] }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub tools: Vec<ToolRecord>,
    #[serde(default)]
    pub categories: Vec<CategoryRecord>,
}

impl CatalogDocument {
    pub fn new(tools: Vec<ToolRecord>) -> Self {
        Self {
            tools,
            categories: Vec::new(),
        }
    }

    pub fn with_categories(mut self, categories: Vec<CategoryRecord>) -> Self {
        self.categories = categories;
        self
    }
}
