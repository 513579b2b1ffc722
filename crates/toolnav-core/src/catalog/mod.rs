//! Catalog loading and the filtered/paginated view over it
//!
//! ```text
//! CatalogSource ──fetch()──▶ CatalogDocument ──▶ CatalogState
//!                                                  │ set_query(Query)
//!                                                  ▼
//!                                  filtered indices + page cursor
//!                                                  │ current_page()
//!                                                  ▼
//!                                          visible tool prefix
//! ```

mod error;
mod source;
mod state;

pub use error::{CatalogError, CatalogResult};
pub use source::{CatalogSource, HttpCatalogSource, FileCatalogSource, StaticCatalogSource, source_for};
pub use state::{CatalogState, filter_tools, visible_count, DEFAULT_PAGE_SIZE};
