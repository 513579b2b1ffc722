//! Core types for the tool catalog
//!
//! This module contains the shared types used by the catalog, router and navigator.

mod tool;
mod query;
mod theme;
mod notification;
mod cancellation;
mod favorites;

pub use tool::{ToolId, ToolRecord, CategoryRecord, CatalogDocument, Badge, DEFAULT_ICON};
pub use query::{Query, QuickFilter, QueryParseError, ALL_SENTINEL};
pub use theme::Theme;
pub use notification::{Notification, Severity};
pub use cancellation::CancellationToken;
pub use favorites::FavoriteSet;
