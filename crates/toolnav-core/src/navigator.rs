//! Navigator: the single session object
//!
//! Owns the catalog state, query router, favorites and theme, and is the only
//! place that mutates them. Everything runs on the caller's task; the only
//! deferred work is the live-input debounce, which the caller drains with
//! [`Navigator::next_debounced`] or [`Navigator::process_debounced`].

use std::sync::Arc;

use tokio::sync::broadcast;

use crate::{log_debug, log_error, log_info};
use crate::catalog::{source_for, CatalogSource, CatalogState};
use crate::config::{ConfigError, ConfigResult, NavigatorConfig};
use crate::logging::{ConsoleLogger, SharedLogger};
use crate::router::{InputSource, QueryRouter, SearchHistory};
use crate::storage::{create_preference_store, PreferenceStore, Preferences};
use crate::types::{CategoryRecord, FavoriteSet, Notification, Query, QuickFilter, Theme, ToolId, ToolRecord};

const EVENT_CAPACITY: usize = 64;

pub const LOAD_FAILED_MESSAGE: &str = "Unable to load tool data, please refresh and try again";
pub const SUBMIT_TOOL_MESSAGE: &str = "Tool submission is coming soon, stay tuned!";

/// Events for collaborators outside the navigator (toasts, theming)
#[derive(Debug, Clone, PartialEq)]
pub enum NavigatorEvent {
    Notify(Notification),
    ThemeChanged(Theme),
}

/// One tool card as the renderer needs it
#[derive(Debug, Clone, PartialEq)]
pub struct ToolCard<'a> {
    pub tool: &'a ToolRecord,
    pub favorite: bool,
}

/// Everything the tool grid renders
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a> {
    pub cards: Vec<ToolCard<'a>>,
    /// Show the "load more" button
    pub has_more: bool,
    /// Show the "no results" panel instead of the grid
    pub no_results: bool,
}

pub struct Navigator {
    catalog: CatalogState,
    router: QueryRouter,
    favorites: FavoriteSet,
    theme: Theme,
    page_size: usize,
    catalog_location: String,
    preferences: Arc<Preferences>,
    events: broadcast::Sender<NavigatorEvent>,
    logger: SharedLogger,
}

impl Navigator {
    /// Create a navigator and restore persisted preferences
    ///
    /// The catalog starts empty until [`load`](Self::load) is called.
    pub fn new(config: &NavigatorConfig, store: Arc<dyn PreferenceStore>, logger: SharedLogger) -> Self {
        let preferences = Arc::new(Preferences::new(store, logger.clone()));

        let theme = preferences.load_theme();
        let favorites = preferences.load_favorites();
        let history = SearchHistory::from_entries(preferences.load_search_history(), config.history_limit);

        log_debug!(
            logger,
            "[Navigator] Restored theme={}, {} favorites, {} searches",
            theme,
            favorites.len(),
            history.len()
        );

        let router = QueryRouter::new(history, config.debounce(), config.live_history_min_chars, logger.clone())
            .with_preferences(preferences.clone());
        let (events, _) = broadcast::channel(EVENT_CAPACITY);

        Self {
            catalog: CatalogState::new(config.page_size),
            router,
            favorites,
            theme,
            page_size: config.page_size,
            catalog_location: config.catalog.clone(),
            preferences,
            events,
            logger,
        }
    }

    /// Navigator wired entirely from config
    ///
    /// Logs to the console at `log_level`, persists through the `storage`
    /// backend, and [`load_configured`](Self::load_configured) reads `catalog`.
    pub fn from_config(config: &NavigatorConfig) -> ConfigResult<Self> {
        config.validate()?;
        let store = create_preference_store(&config.storage)
            .ok_or_else(|| ConfigError::Invalid(format!("Unknown storage backend: {}", config.storage)))?;
        let logger: SharedLogger = Arc::new(ConsoleLogger::from_config(config));
        Ok(Self::new(config, store, logger))
    }

    /// Subscribe to notifications and theme changes
    pub fn subscribe(&self) -> broadcast::Receiver<NavigatorEvent> {
        self.events.subscribe()
    }

    /// Fetch the catalog and show every tool
    ///
    /// On failure the catalog stays empty and an error notification is sent.
    /// Returns the number of tools loaded.
    pub async fn load(&mut self, source: &dyn CatalogSource) -> usize {
        match source.fetch().await {
            Ok(document) => {
                self.catalog = CatalogState::from_document(document, self.page_size);
                log_info!(
                    self.logger,
                    "[Navigator] Loaded {} tools and {} categories from {}",
                    self.catalog.tools().len(),
                    self.catalog.categories().len(),
                    source.name()
                );
                self.catalog.tools().len()
            }
            Err(e) => {
                log_error!(self.logger, "[Navigator] Failed to load catalog from {}: {}", source.name(), e);
                self.catalog = CatalogState::new(self.page_size);
                self.notify(Notification::error(LOAD_FAILED_MESSAGE));
                0
            }
        }
    }

    /// Load from the configured catalog location (URL or file path)
    pub async fn load_configured(&mut self) -> usize {
        let source = source_for(&self.catalog_location);
        self.load(source.as_ref()).await
    }

    pub fn catalog_location(&self) -> &str {
        &self.catalog_location
    }

    pub fn select_category(&mut self, category: &str) {
        self.router.select_category(&mut self.catalog, category);
    }

    pub fn select_quick_filter(&mut self, filter: Option<QuickFilter>) {
        self.router.select_quick_filter(&mut self.catalog, filter);
    }

    /// Explicit search; blank text is ignored
    pub fn submit_search(&mut self, text: &str) {
        if let Some(notification) = self.router.submit_search(&mut self.catalog, text) {
            self.notify(notification);
        }
    }

    /// Keystroke in a search box (debounced)
    ///
    /// The debounce timer runs on the current tokio runtime. Outside a
    /// runtime the keystroke is dropped with a warning.
    pub fn live_input(&mut self, source: InputSource, text: impl Into<String>) {
        self.router.live_input(source, text);
    }

    /// Wait for the next debounced keystroke and handle it
    pub async fn next_debounced(&mut self) -> Option<(InputSource, String)> {
        self.router.next_live_input().await
    }

    /// Handle every debounced keystroke that is already due
    pub fn process_debounced(&mut self) -> usize {
        self.router.process_live_input()
    }

    /// "Load more": reveal the next page if there is one
    pub fn load_more(&mut self) -> bool {
        let advanced = self.catalog.advance_page();
        if advanced {
            log_debug!(self.logger, "[Navigator] Showing page {}", self.catalog.page());
        }
        advanced
    }

    /// Flip a tool's favorite flag and persist; returns the new state
    pub fn toggle_favorite(&mut self, id: &ToolId) -> bool {
        let favorite = self.favorites.toggle(id);
        self.preferences.save_favorites(&self.favorites);
        favorite
    }

    pub fn is_favorite(&self, id: &ToolId) -> bool {
        self.favorites.contains(id)
    }

    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    /// Switch light/dark, persist, and broadcast the change
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.preferences.save_theme(self.theme);
        let _ = self.events.send(NavigatorEvent::ThemeChanged(self.theme));
        self.theme
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn query(&self) -> &Query {
        self.catalog.query()
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    pub fn page_view(&self) -> PageView<'_> {
        let cards = self
            .catalog
            .current_page()
            .into_iter()
            .map(|tool| ToolCard {
                tool,
                favorite: self.favorites.contains(&tool.id),
            })
            .collect();

        PageView {
            cards,
            has_more: self.catalog.has_more(),
            no_results: self.catalog.is_empty_result(),
        }
    }

    pub fn web3_tools(&self) -> Vec<ToolCard<'_>> {
        self.catalog
            .web3_tools()
            .into_iter()
            .map(|tool| ToolCard {
                tool,
                favorite: self.favorites.contains(&tool.id),
            })
            .collect()
    }

    pub fn categories(&self) -> &[CategoryRecord] {
        self.catalog.categories()
    }

    pub fn search_history(&self) -> &[String] {
        self.router.history().entries()
    }

    /// Tool submission isn't open yet
    pub fn submit_tool(&self) {
        self.notify(Notification::info(SUBMIT_TOOL_MESSAGE));
    }

    fn notify(&self, notification: Notification) {
        log_debug!(self.logger, "[Navigator] Notify: {}", notification.message);
        // No subscribers is fine
        let _ = self.events.send(NavigatorEvent::Notify(notification));
    }
}

impl std::fmt::Debug for Navigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigator")
            .field("query", self.catalog.query())
            .field("tools", &self.catalog.tools().len())
            .field("favorites", &self.favorites.len())
            .field("theme", &self.theme)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FileCatalogSource, StaticCatalogSource};
    use crate::logging::{LogLevel, MemoryLogger, NoOpLogger};
    use crate::storage::{
        MemoryPreferenceStore, UnavailablePreferenceStore, KEY_FAVORITES, KEY_SEARCH_HISTORY, KEY_THEME,
    };
    use crate::types::{CatalogDocument, Severity};
    use std::time::Duration;
    use tokio::sync::broadcast::error::TryRecvError;

    fn document(count: u64) -> CatalogDocument {
        let tools = (1..=count)
            .map(|i| {
                let tool = ToolRecord::new(i, format!("Tool {}", i)).with_category("Writing");
                if i == 1 { tool.free().web3() } else { tool }
            })
            .collect();
        CatalogDocument::new(tools).with_categories(vec![CategoryRecord::new("Writing", "Words")])
    }

    async fn loaded(store: Arc<MemoryPreferenceStore>, count: u64) -> Navigator {
        let mut nav = Navigator::new(&NavigatorConfig::default(), store, Arc::new(NoOpLogger));
        nav.load(&StaticCatalogSource::new(document(count))).await;
        nav
    }

    fn ids(view: &PageView<'_>) -> Vec<ToolId> {
        view.cards.iter().map(|c| c.tool.id.clone()).collect()
    }

    #[tokio::test]
    async fn test_load_shows_first_page() {
        let nav = loaded(Arc::new(MemoryPreferenceStore::new()), 10).await;
        let view = nav.page_view();
        assert_eq!(view.cards.len(), 8);
        assert!(view.has_more);
        assert!(!view.no_results);
        assert_eq!(nav.categories().len(), 1);
        assert_eq!(nav.query(), &Query::All);
    }

    #[tokio::test]
    async fn test_load_failure_notifies_and_stays_empty() {
        let logger = Arc::new(MemoryLogger::new());
        let mut nav = Navigator::new(
            &NavigatorConfig::default(),
            Arc::new(MemoryPreferenceStore::new()),
            logger.clone(),
        );
        let mut events = nav.subscribe();

        let dir = tempfile::tempdir().unwrap();
        let loaded = nav.load(&FileCatalogSource::new(dir.path().join("missing.json"))).await;

        assert_eq!(loaded, 0);
        assert!(nav.page_view().no_results);
        assert!(!nav.page_view().has_more);
        assert_eq!(
            events.try_recv().unwrap(),
            NavigatorEvent::Notify(Notification::error(LOAD_FAILED_MESSAGE))
        );
        assert_eq!(logger.messages_at(LogLevel::Error).len(), 1);
    }

    #[tokio::test]
    async fn test_from_config_uses_storage_and_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tools.json");
        std::fs::write(&path, serde_json::to_string(&document(3)).unwrap()).unwrap();

        let config = NavigatorConfig {
            catalog: path.display().to_string(),
            storage: "memory".to_string(),
            page_size: 2,
            log_level: LogLevel::Error,
            ..NavigatorConfig::default()
        };
        let mut nav = Navigator::from_config(&config).unwrap();
        assert_eq!(nav.catalog_location(), config.catalog);

        assert_eq!(nav.load_configured().await, 3);
        let view = nav.page_view();
        assert_eq!(view.cards.len(), 2);
        assert!(view.has_more);
    }

    #[test]
    fn test_from_config_rejects_unknown_storage() {
        let config = NavigatorConfig {
            storage: "cloud".to_string(),
            ..NavigatorConfig::default()
        };
        assert!(matches!(Navigator::from_config(&config), Err(ConfigError::Invalid(_))));

        let invalid = NavigatorConfig { page_size: 0, ..NavigatorConfig::default() };
        assert!(matches!(Navigator::from_config(&invalid), Err(ConfigError::Invalid(_))));
    }

    #[tokio::test]
    async fn test_load_more_reveals_cumulatively() {
        let mut nav = loaded(Arc::new(MemoryPreferenceStore::new()), 10).await;
        let first = ids(&nav.page_view());

        assert!(nav.load_more());
        let view = nav.page_view();
        assert_eq!(view.cards.len(), 10);
        assert!(ids(&view).starts_with(&first));
        assert!(!view.has_more);
        assert!(!nav.load_more());
    }

    #[tokio::test]
    async fn test_query_change_resets_page() {
        let mut nav = loaded(Arc::new(MemoryPreferenceStore::new()), 20).await;
        nav.load_more();
        assert_eq!(nav.page_view().cards.len(), 16);

        nav.select_category("Writing");
        assert_eq!(nav.catalog().page(), 1);
        assert_eq!(nav.page_view().cards.len(), 8);
    }

    #[tokio::test]
    async fn test_search_notifications() {
        let mut nav = loaded(Arc::new(MemoryPreferenceStore::new()), 12).await;
        let mut events = nav.subscribe();

        nav.submit_search("tool 1");
        match events.try_recv().unwrap() {
            NavigatorEvent::Notify(n) => {
                assert_eq!(n.severity, Severity::Success);
                // Tool 1, Tool 10, Tool 11, Tool 12
                assert_eq!(n.message, "Found 4 tools");
            }
            other => panic!("unexpected event {:?}", other),
        }

        nav.submit_search("   ");
        assert!(matches!(events.try_recv(), Err(TryRecvError::Empty)));
        assert_eq!(nav.query(), &Query::search("tool 1"));

        nav.submit_search("nothing here");
        match events.try_recv().unwrap() {
            NavigatorEvent::Notify(n) => assert_eq!(n.severity, Severity::Info),
            other => panic!("unexpected event {:?}", other),
        }
        assert!(nav.page_view().no_results);
        assert_eq!(nav.search_history(), ["nothing here", "tool 1"]);
    }

    #[tokio::test]
    async fn test_favorite_toggle_is_its_own_inverse() {
        let store = Arc::new(MemoryPreferenceStore::new());
        store.set(KEY_FAVORITES, "[5,2]").unwrap();
        let mut nav = loaded(store.clone(), 10).await;
        let original = nav.favorites().clone();
        let id = ToolId::from(1u64);

        assert!(nav.toggle_favorite(&id));
        assert!(nav.is_favorite(&id));
        assert!(nav.page_view().cards[0].favorite);
        assert_eq!(store.raw(KEY_FAVORITES), Some("[5,2,1]".to_string()));

        assert!(!nav.toggle_favorite(&id));
        assert_eq!(nav.favorites(), &original);
        assert_eq!(store.raw(KEY_FAVORITES), Some("[5,2]".to_string()));

        // Toggling an existing favorite twice keeps its place
        let existing = ToolId::from(5u64);
        assert!(!nav.toggle_favorite(&existing));
        assert_eq!(store.raw(KEY_FAVORITES), Some("[2]".to_string()));
        assert!(nav.toggle_favorite(&existing));
        assert_eq!(nav.favorites(), &original);
        assert_eq!(store.raw(KEY_FAVORITES), Some("[5,2]".to_string()));
    }

    #[tokio::test]
    async fn test_theme_toggle_persists_and_broadcasts() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let mut nav = loaded(store.clone(), 1).await;
        let mut events = nav.subscribe();
        assert_eq!(nav.theme(), Theme::Light);

        assert_eq!(nav.toggle_theme(), Theme::Dark);
        assert_eq!(store.raw(KEY_THEME), Some("dark".to_string()));
        assert_eq!(events.try_recv().unwrap(), NavigatorEvent::ThemeChanged(Theme::Dark));

        // A new session picks it up
        let again = loaded(store, 1).await;
        assert_eq!(again.theme(), Theme::Dark);
    }

    #[tokio::test]
    async fn test_preferences_restored() {
        let store = Arc::new(MemoryPreferenceStore::new());
        store.set(KEY_SEARCH_HISTORY, r#"["owl","fox"]"#).unwrap();
        store.set(KEY_FAVORITES, "[3]").unwrap();

        let nav = loaded(store, 5).await;
        assert_eq!(nav.search_history(), ["owl", "fox"]);
        assert!(nav.is_favorite(&ToolId::from(3u64)));
    }

    #[tokio::test]
    async fn test_unavailable_storage_falls_back() {
        let logger = Arc::new(MemoryLogger::new());
        let mut nav = Navigator::new(
            &NavigatorConfig::default(),
            Arc::new(UnavailablePreferenceStore::new()),
            logger.clone(),
        );
        nav.load(&StaticCatalogSource::new(document(3))).await;

        assert_eq!(nav.theme(), Theme::Light);
        assert!(nav.favorites().is_empty());
        assert!(nav.search_history().is_empty());

        // Still works in memory for this session
        assert!(nav.toggle_favorite(&ToolId::from(1u64)));
        assert_eq!(nav.toggle_theme(), Theme::Dark);
        nav.submit_search("tool");
        assert_eq!(nav.search_history(), ["tool"]);
        assert!(!logger.messages_at(LogLevel::Warn).is_empty());
    }

    #[tokio::test]
    async fn test_web3_and_submit_tool() {
        let mut nav = loaded(Arc::new(MemoryPreferenceStore::new()), 4).await;
        let mut events = nav.subscribe();
        nav.select_quick_filter(Some(QuickFilter::Free));

        let web3 = nav.web3_tools();
        assert_eq!(web3.len(), 1);
        assert_eq!(web3[0].tool.id, ToolId::from(1u64));

        nav.submit_tool();
        assert_eq!(
            events.try_recv().unwrap(),
            NavigatorEvent::Notify(Notification::info(SUBMIT_TOOL_MESSAGE))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_live_input_records_history_only() {
        let mut nav = loaded(Arc::new(MemoryPreferenceStore::new()), 10).await;
        nav.select_category("Writing");

        nav.live_input(InputSource::Global, "to");
        nav.live_input(InputSource::Global, "too");
        nav.live_input(InputSource::Hero, "ab");

        tokio::time::sleep(Duration::from_millis(301)).await;
        assert_eq!(nav.process_debounced(), 2);
        assert_eq!(nav.search_history(), ["too"]);
        assert_eq!(nav.query(), &Query::category("Writing"));
        assert!(nav.next_debounced().await.is_none());
    }
}
