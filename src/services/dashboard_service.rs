use crate::config::CacheSettings;
use crate::dto::candidate_dto::{FilterCriteria, ListViewResponse, PageQuery, TableViewResponse};
use crate::error::Result;
use crate::models::candidate::{Candidate, CandidateId, CandidatePage, CandidateStatus};
use crate::models::view_state::ViewName;
use crate::services::candidate_source::CandidateSource;
use crate::services::filter_service::filter_candidates;
use crate::services::pagination::{self, PAGE_SIZE};
use crate::services::query_cache::{QueryCache, QueryStatus};
use crate::services::sort_service::{sort_candidates, SortKey, SortSpec, SortState};
use crate::services::stats_service::CandidateStats;
use crate::services::status_service::StatusService;
use crate::services::ui_store::UiStore;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::info;

/// Cache key for the unpaginated collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AllCandidates;

/// Cached access to the remote collection under two independent keys: the
/// full collection and each `(page, limit)` window.
pub struct CandidateRepository<S> {
    source: Arc<S>,
    all: QueryCache<AllCandidates, Arc<Vec<Candidate>>>,
    pages: QueryCache<PageQuery, Arc<CandidatePage>>,
}

impl<S> Clone for CandidateRepository<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            all: self.all.clone(),
            pages: self.pages.clone(),
        }
    }
}

impl<S: CandidateSource> CandidateRepository<S> {
    pub fn new(source: Arc<S>, settings: CacheSettings) -> Self {
        Self {
            source,
            all: QueryCache::new(settings),
            pages: QueryCache::new(settings),
        }
    }

    pub fn source(&self) -> &Arc<S> {
        &self.source
    }

    pub async fn all(&self) -> Result<Arc<Vec<Candidate>>> {
        let source = Arc::clone(&self.source);
        let value = self
            .all
            .request(AllCandidates, move || {
                let source = Arc::clone(&source);
                async move { source.fetch_all().await.map(Arc::new) }
            })
            .await?;
        Ok(value)
    }

    pub async fn page(&self, query: PageQuery) -> Result<Arc<CandidatePage>> {
        let source = Arc::clone(&self.source);
        let value = self
            .pages
            .request(query, move || {
                let source = Arc::clone(&source);
                async move { source.fetch_page(query).await.map(Arc::new) }
            })
            .await?;
        Ok(value)
    }

    pub fn all_status(&self) -> QueryStatus {
        self.all.status(&AllCandidates)
    }

    pub fn page_status(&self, query: PageQuery) -> QueryStatus {
        self.pages.status(&query)
    }

    pub fn invalidate_all(&self) {
        self.all.invalidate_all();
        self.pages.invalidate_all();
    }

    pub fn sweep(&self) -> usize {
        self.all.sweep() + self.pages.sweep()
    }

    pub fn all_cache(&self) -> &QueryCache<AllCandidates, Arc<Vec<Candidate>>> {
        &self.all
    }

    pub fn page_cache(&self) -> &QueryCache<PageQuery, Arc<CandidatePage>> {
        &self.pages
    }
}

/// Filter, then sort, then slice. Pure.
pub fn table_view(
    all: &[Candidate],
    filters: &FilterCriteria,
    sort: SortSpec,
    page: usize,
) -> TableViewResponse {
    let mut rows = filter_candidates(all, filters);
    sort_candidates(&mut rows, sort);
    let page = pagination::slice(&rows, page, PAGE_SIZE);
    TableViewResponse {
        items: page.items,
        total_filtered: page.total,
        total_pages: page.total_pages,
    }
}

/// Filter and sort state of the table view. Keeps the table's page index in
/// the shared store and sends it back to page 1 when the filters change.
pub struct TableController {
    store: UiStore,
    filters: FilterCriteria,
    sort: SortState,
}

impl TableController {
    pub fn new(store: UiStore) -> Self {
        Self {
            store,
            filters: FilterCriteria::default(),
            sort: SortState::Unset,
        }
    }

    pub fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.store.current_page(ViewName::TableView)
    }

    pub fn set_page(&self, page: usize) {
        self.store.set_current_page(ViewName::TableView, page);
    }

    pub fn set_filters(&mut self, filters: FilterCriteria) {
        if filters != self.filters {
            self.filters = filters;
            self.set_page(1);
        }
    }

    pub fn clear_filters(&mut self) {
        let mut filters = self.filters.clone();
        filters.clear();
        self.set_filters(filters);
    }

    pub fn click_column(&mut self, column: SortKey) -> SortState {
        self.sort = self.sort.click(column);
        self.sort
    }

    pub fn view(&self, all: &[Candidate]) -> TableViewResponse {
        table_view(all, &self.filters, self.sort.spec(), self.page())
    }
}

/// Entry point for rendering collaborators.
pub struct Dashboard<S> {
    repository: CandidateRepository<S>,
    status: StatusService<S>,
    store: UiStore,
}

impl<S: CandidateSource> Dashboard<S> {
    pub fn new(source: S, settings: CacheSettings, store: UiStore) -> Self {
        let source = Arc::new(source);
        Self {
            repository: CandidateRepository::new(Arc::clone(&source), settings),
            status: StatusService::new(source),
            store,
        }
    }

    pub fn repository(&self) -> &CandidateRepository<S> {
        &self.repository
    }

    pub fn status_service(&self) -> &StatusService<S> {
        &self.status
    }

    pub fn store(&self) -> &UiStore {
        &self.store
    }

    pub fn table_controller(&self) -> TableController {
        TableController::new(self.store.clone())
    }

    /// Page 0 is empty like any out-of-range page; totals still come from
    /// the first page's response.
    pub async fn list_view(&self, page: usize) -> Result<ListViewResponse> {
        let result = self.repository.page(PageQuery::new(page, PAGE_SIZE)).await?;
        let items = if page == 0 {
            Vec::new()
        } else {
            result.items.clone()
        };
        Ok(ListViewResponse {
            items,
            total: result.total,
            total_pages: result.total_pages,
        })
    }

    /// List view at the page currently stored for it.
    pub async fn current_list_view(&self) -> Result<ListViewResponse> {
        self.list_view(self.store.current_page(ViewName::ListView))
            .await
    }

    pub async fn table(&self, controller: &TableController) -> Result<TableViewResponse> {
        let all = self.repository.all().await?;
        Ok(controller.view(&all))
    }

    pub async fn stats(&self, today: NaiveDate) -> Result<CandidateStats> {
        let all = self.repository.all().await?;
        Ok(CandidateStats::from_candidates(&all, today))
    }

    /// Writes the new status. The cache is left as-is; call
    /// `refresh_after_mutation` to have the next read refetch.
    pub async fn update_status(
        &self,
        id: CandidateId,
        status: CandidateStatus,
    ) -> Result<Candidate> {
        Ok(self.status.update_status(id, status).await?)
    }

    pub fn refresh_after_mutation(&self) {
        info!("Invalidating candidate caches after mutation");
        self.repository.invalidate_all();
    }
}
