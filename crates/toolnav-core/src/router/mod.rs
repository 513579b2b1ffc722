//! Query routing
//!
//! Turns user input (filter buttons, category cards, search boxes, live
//! typing) into a single [`Query`](crate::types::Query) applied to
//! [`CatalogState`](crate::catalog::CatalogState), and keeps the recent-search
//! history.
//!
//! View mode transitions are unconditional: every action moves straight to
//! its own mode and resets the page cursor.
//!
//! ```text
//!            select_category          select_quick_filter
//!   All ◀──────────────────────▶ Category(c) ◀────────▶ QuickFilter(f)
//!    ▲                                ▲                       ▲
//!    └──────────── submit_search ─────┴──────▶ Search(s) ◀────┘
//! ```

mod history;
mod debounce;
mod query_router;

pub use history::{SearchHistory, DEFAULT_HISTORY_LIMIT};
pub use debounce::Debouncer;
pub use query_router::{QueryRouter, InputSource};
