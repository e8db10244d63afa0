use crate::models::view_state::{ActivePage, ViewName, ViewState};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

/// Reactive UI state shared by the dashboard views.
///
/// Every mutation is a single `send_modify`, so subscribers never observe a
/// half-applied update. Subscribers receive a `watch::Receiver` and are woken
/// after each change.
#[derive(Clone)]
pub struct UiStore {
    tx: Arc<watch::Sender<ViewState>>,
}

impl Default for UiStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UiStore {
    pub fn new() -> Self {
        Self::with_state(ViewState::default())
    }

    pub fn with_state(state: ViewState) -> Self {
        let (tx, _) = watch::channel(state);
        Self { tx: Arc::new(tx) }
    }

    pub fn snapshot(&self) -> ViewState {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.tx.subscribe()
    }

    pub fn sidebar_open(&self) -> bool {
        self.tx.borrow().sidebar_open
    }

    pub fn dark_mode(&self) -> bool {
        self.tx.borrow().dark_mode
    }

    pub fn active_page(&self) -> ActivePage {
        self.tx.borrow().active_page
    }

    pub fn current_page(&self, view: ViewName) -> usize {
        self.tx.borrow().page_of(view)
    }

    pub fn toggle_sidebar(&self) {
        self.tx.send_modify(|s| s.sidebar_open = !s.sidebar_open);
    }

    pub fn set_sidebar_open(&self, open: bool) {
        self.tx.send_modify(|s| s.sidebar_open = open);
    }

    pub fn toggle_dark_mode(&self) {
        self.tx.send_modify(|s| s.dark_mode = !s.dark_mode);
    }

    /// Pages are 1-based; anything lower is stored as 1.
    pub fn set_current_page(&self, view: ViewName, page: usize) {
        let page = page.max(1);
        debug!(?view, page, "Setting current page");
        self.tx.send_modify(|s| {
            s.current_page.insert(view, page);
        });
    }

    pub fn set_active_page(&self, page: ActivePage) {
        self.tx.send_modify(|s| s.active_page = page);
    }
}
