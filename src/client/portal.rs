use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use tokio::{sync::Mutex, task::JoinHandle};
use tracing::{debug, info, warn};

use crate::{
    client::{
        debounce::{Debouncer, SEARCH_DEBOUNCE},
        presenter::{present, DisplayState, ViewModel},
        source::NewsSource,
    },
    models::news::{Category, DateFilter, Origin, QueryParams, DEFAULT_PAGE_SIZE},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Rendered,
    Empty,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(Phase),
    /// Another request was still in flight; nothing was sent.
    Skipped,
}

/// The mutable UI state. Each load snapshots it into fresh `QueryParams`.
#[derive(Debug, Clone)]
pub struct PortalState {
    pub search_query: String,
    pub category: Category,
    pub date_filter: DateFilter,
    pub current_page: u32,
    pub total_pages: u32,
    pub view_mode: ViewMode,
    pub phase: Phase,
    pub view: Option<ViewModel>,
}

impl Default for PortalState {
    fn default() -> Self {
        PortalState {
            search_query: String::new(),
            category: Category::All,
            date_filter: DateFilter::All,
            current_page: 1,
            total_pages: 1,
            view_mode: ViewMode::Grid,
            phase: Phase::Idle,
            view: None,
        }
    }
}

impl PortalState {
    pub fn snapshot(&self, page_size: u32) -> QueryParams {
        QueryParams {
            query: Some(self.search_query.clone()).filter(|q| !q.trim().is_empty()),
            category: self.category,
            date_filter: self.date_filter,
            page: self.current_page,
            page_size,
            demo: false,
        }
    }
}

struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
        tracing::trace!("In-flight slot released");
    }
}

/// Drives a `NewsSource` on behalf of a renderer.
pub struct NewsPortal<S> {
    source: S,
    page_size: u32,
    state: Mutex<PortalState>,
    busy: AtomicBool,
    debouncer: Debouncer,
}

impl<S: NewsSource> NewsPortal<S> {
    pub fn new(source: S) -> Self {
        Self::with_page_size(source, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(source: S, page_size: u32) -> Self {
        NewsPortal {
            source,
            page_size: page_size.max(1),
            state: Mutex::new(PortalState::default()),
            busy: AtomicBool::new(false),
            debouncer: Debouncer::new(SEARCH_DEBOUNCE),
        }
    }

    pub async fn state(&self) -> PortalState {
        self.state.lock().await.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    fn try_begin(&self) -> Option<InFlight<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlight(&self.busy))
    }

    /// Fetches the current state's page. Dropped, not queued, while a
    /// previous load is still pending.
    pub async fn load(&self) -> LoadOutcome {
        let Some(_in_flight) = self.try_begin() else {
            debug!("Load skipped, a request is already in flight");
            return LoadOutcome::Skipped;
        };

        let params = {
            let mut state = self.state.lock().await;
            state.phase = Phase::Loading;
            state.snapshot(self.page_size)
        };

        let fetched = self.source.fetch(&params).await;

        let mut state = self.state.lock().await;
        let phase = match fetched {
            Ok(result) => {
                let view = present(result, self.page_size);
                if let Some(message) = &view.result.message {
                    match view.result.origin {
                        Origin::Demo => warn!(%message, "Showing demo data"),
                        Origin::Upstream => info!(%message),
                    }
                }
                state.total_pages = view.total_pages;
                let phase = match view.display {
                    DisplayState::Articles => Phase::Rendered,
                    DisplayState::Empty => Phase::Empty,
                };
                state.view = Some(view);
                phase
            }
            Err(err) => {
                warn!(error = %err, "Failed to load news");
                state.view = None;
                Phase::Failed(err.to_string())
            }
        };
        state.phase = phase.clone();

        LoadOutcome::Loaded(phase)
    }

    pub async fn clear_search(&self) -> LoadOutcome {
        self.update(|state| state.search_query.clear()).await;
        self.load().await
    }

    pub async fn set_category(&self, category: Category) -> LoadOutcome {
        self.update(|state| state.category = category).await;
        self.load().await
    }

    pub async fn set_date_filter(&self, date_filter: DateFilter) -> LoadOutcome {
        self.update(|state| state.date_filter = date_filter).await;
        self.load().await
    }

    pub async fn refresh(&self) -> LoadOutcome {
        self.update(|_| {}).await;
        self.load().await
    }

    /// `None` when already on the last page.
    pub async fn next_page(&self) -> Option<LoadOutcome> {
        {
            let mut state = self.state.lock().await;
            if state.current_page >= state.total_pages {
                return None;
            }
            state.current_page += 1;
        }
        Some(self.load().await)
    }

    /// `None` when already on the first page.
    pub async fn prev_page(&self) -> Option<LoadOutcome> {
        {
            let mut state = self.state.lock().await;
            if state.current_page <= 1 {
                return None;
            }
            state.current_page -= 1;
        }
        Some(self.load().await)
    }

    pub async fn set_view_mode(&self, view_mode: ViewMode) {
        self.state.lock().await.view_mode = view_mode;
    }

    /// Applies `change` and goes back to the first page.
    async fn update(&self, change: impl FnOnce(&mut PortalState)) {
        let mut state = self.state.lock().await;
        change(&mut state);
        state.current_page = 1;
    }
}

impl<S: NewsSource + 'static> NewsPortal<S> {
    /// Debounced search input. The query is applied and loaded once typing
    /// has been quiet for the debounce period.
    pub fn search(self: &Arc<Self>, text: impl Into<String>) -> JoinHandle<bool> {
        let portal = Arc::clone(self);
        let text = text.into();
        self.debouncer.call(async move {
            portal.update(|state| state.search_query = text).await;
            portal.load().await;
        })
    }
}
