//! Catalog state: the full tool list plus the active query and page cursor
//!
//! The filtered sequence is always derived from the full catalog, never from
//! a previous filtered result. Pagination is a cumulative reveal: page `n`
//! shows the first `n * page_size` filtered tools.

use crate::types::{CatalogDocument, CategoryRecord, Query, ToolRecord};

pub const DEFAULT_PAGE_SIZE: usize = 8;

/// Indices of the tools matching `query`, in catalog order
pub fn filter_tools(tools: &[ToolRecord], query: &Query) -> Vec<usize> {
    tools
        .iter()
        .enumerate()
        .filter(|(_, tool)| query.matches(tool))
        .map(|(i, _)| i)
        .collect()
}

/// How many filtered tools are visible at `page` (1-based)
pub fn visible_count(filtered_len: usize, page: usize, page_size: usize) -> usize {
    page.saturating_mul(page_size).min(filtered_len)
}

#[derive(Debug, Clone)]
pub struct CatalogState {
    tools: Vec<ToolRecord>,
    categories: Vec<CategoryRecord>,
    query: Query,
    filtered: Vec<usize>,
    page: usize,
    page_size: usize,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl CatalogState {
    /// An empty catalog
    pub fn new(page_size: usize) -> Self {
        Self::from_document(CatalogDocument::default(), page_size)
    }

    /// Catalog state over a loaded document, showing everything
    pub fn from_document(document: CatalogDocument, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let filtered = (0..document.tools.len()).collect();
        Self {
            tools: document.tools,
            categories: document.categories,
            query: Query::All,
            filtered,
            page: 1,
            page_size,
        }
    }

    /// Replace the active query and go back to page 1
    pub fn set_query(&mut self, query: Query) {
        self.filtered = filter_tools(&self.tools, &query);
        self.query = query;
        self.page = 1;
    }

    /// Visible prefix of the filtered sequence
    pub fn current_page(&self) -> Vec<&ToolRecord> {
        self.filtered[..self.visible_count()]
            .iter()
            .map(|&i| &self.tools[i])
            .collect()
    }

    /// Reveal the next page; returns `false` (and does nothing) when everything is shown
    pub fn advance_page(&mut self) -> bool {
        if !self.has_more() {
            return false;
        }
        self.page += 1;
        true
    }

    pub fn has_more(&self) -> bool {
        self.page.saturating_mul(self.page_size) < self.filtered.len()
    }

    pub fn visible_count(&self) -> usize {
        visible_count(self.filtered.len(), self.page, self.page_size)
    }

    /// Number of tools matching the active query
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Whether the active query matched nothing
    pub fn is_empty_result(&self) -> bool {
        self.filtered.is_empty()
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The full catalog in load order
    pub fn tools(&self) -> &[ToolRecord] {
        &self.tools
    }

    pub fn categories(&self) -> &[CategoryRecord] {
        &self.categories
    }

    /// Web3 tools from the full catalog, regardless of the active query
    pub fn web3_tools(&self) -> Vec<&ToolRecord> {
        self.tools.iter().filter(|t| t.is_web3).collect()
    }
}
