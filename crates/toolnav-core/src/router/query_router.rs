//! Query router: input events in, one canonical query out

use std::sync::Arc;
use std::time::Duration;

use crate::catalog::CatalogState;
use crate::logging::SharedLogger;
use crate::storage::Preferences;
use crate::types::{Notification, Query, QuickFilter};
use super::debounce::Debouncer;
use super::history::SearchHistory;

/// Search boxes on the page; each is debounced on its own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    /// Search box in the header
    Global,
    /// Search box in the hero banner
    Hero,
}

pub struct QueryRouter {
    history: SearchHistory,
    debouncer: Debouncer<InputSource, String>,
    live_min_chars: usize,
    preferences: Option<Arc<Preferences>>,
    logger: SharedLogger,
}

impl QueryRouter {
    /// Router with an in-memory history that is never persisted
    pub fn new(history: SearchHistory, debounce: Duration, live_min_chars: usize, logger: SharedLogger) -> Self {
        Self {
            history,
            debouncer: Debouncer::new(debounce),
            live_min_chars,
            preferences: None,
            logger,
        }
    }

    /// Persist history through `preferences` after every change
    pub fn with_preferences(mut self, preferences: Arc<Preferences>) -> Self {
        self.preferences = Some(preferences);
        self
    }

    pub fn history(&self) -> &SearchHistory {
        &self.history
    }

    /// Explicit search (button or Enter)
    ///
    /// Blank input is ignored and leaves the current view alone. Otherwise
    /// the trimmed text is recorded in history and applied as a search, and
    /// the returned notification reports the match count.
    pub fn submit_search(&mut self, catalog: &mut CatalogState, text: &str) -> Option<Notification> {
        let text = text.trim();
        if text.is_empty() {
            self.logger.debug("[QueryRouter] Ignoring blank search");
            return None;
        }

        self.record_history(text);
        catalog.set_query(Query::search(text));

        let found = catalog.filtered_len();
        self.logger.debug(&format!("[QueryRouter] Search '{}' matched {} tools", text, found));

        Some(match found {
            0 => Notification::info(format!("No results for \"{}\"", text)),
            1 => Notification::success("Found 1 tool"),
            n => Notification::success(format!("Found {} tools", n)),
        })
    }

    /// A keystroke in a search box
    ///
    /// Only schedules work; the debounced text comes back out of
    /// [`next_live_input`](Self::next_live_input) once the box has been quiet.
    pub fn live_input(&mut self, source: InputSource, text: impl Into<String>) {
        if !self.debouncer.schedule(source, text.into()) {
            self.logger.warn("[QueryRouter] No async runtime, live input dropped");
        }
    }

    /// Wait for the next debounced keystroke and process it
    ///
    /// Returns `None` when no keystroke is pending.
    pub async fn next_live_input(&mut self) -> Option<(InputSource, String)> {
        let (source, text) = self.debouncer.next().await?;
        self.handle_live_input(&text);
        Some((source, text))
    }

    /// Process every debounced keystroke that has already fired
    pub fn process_live_input(&mut self) -> usize {
        let mut processed = 0;
        while let Some((_, text)) = self.debouncer.try_next() {
            self.handle_live_input(&text);
            processed += 1;
        }
        processed
    }

    /// Settled live input: long enough text goes into history, the view is untouched
    pub fn handle_live_input(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.chars().count() < self.live_min_chars {
            return false;
        }
        self.record_history(text);
        true
    }

    /// Drop any pending keystrokes
    pub fn cancel_live_input(&mut self) {
        self.debouncer.cancel_all();
    }

    pub fn has_pending_input(&self) -> bool {
        !self.debouncer.is_idle()
    }

    /// Category card click; `"all"` clears back to every tool
    pub fn select_category(&mut self, catalog: &mut CatalogState, category: &str) {
        self.apply(catalog, Query::category(category));
    }

    /// Filter button click; `None` is the "all" button
    pub fn select_quick_filter(&mut self, catalog: &mut CatalogState, filter: Option<QuickFilter>) {
        let query = filter.map(Query::QuickFilter).unwrap_or(Query::All);
        self.apply(catalog, query);
    }

    fn apply(&self, catalog: &mut CatalogState, query: Query) {
        self.logger.debug(&format!("[QueryRouter] {} -> {}", catalog.query(), query));
        catalog.set_query(query);
    }

    fn record_history(&mut self, text: &str) {
        self.history.record(text);
        if let Some(preferences) = &self.preferences {
            preferences.save_search_history(self.history.entries());
        }
    }
}

impl std::fmt::Debug for QueryRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryRouter")
            .field("history", &self.history)
            .field("debouncer", &self.debouncer)
            .field("live_min_chars", &self.live_min_chars)
            .finish()
    }
}
