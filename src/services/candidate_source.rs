use crate::dto::candidate_dto::PageQuery;
use crate::error::SourceError;
use crate::models::candidate::{Candidate, CandidateId, CandidatePage, CandidateStatus, StatusUpdate};
use reqwest::{Client, Response};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// The remote collection provider the dashboard reads from and writes status
/// changes to.
pub trait CandidateSource: Send + Sync + 'static {
    fn fetch_page(
        &self,
        query: PageQuery,
    ) -> impl Future<Output = Result<CandidatePage, SourceError>> + Send;

    fn fetch_all(&self) -> impl Future<Output = Result<Vec<Candidate>, SourceError>> + Send;

    fn fetch_one(
        &self,
        id: CandidateId,
    ) -> impl Future<Output = Result<Candidate, SourceError>> + Send;

    fn update_status(
        &self,
        id: CandidateId,
        status: CandidateStatus,
    ) -> impl Future<Output = Result<Candidate, SourceError>> + Send;
}

#[derive(Clone)]
pub struct HttpCandidateSource {
    client: Client,
    base_url: Url,
}

impl HttpCandidateSource {
    pub fn new(mut base_url: Url, timeout: Duration) -> Result<Self, SourceError> {
        // Url::join replaces the last segment unless the base ends with a slash.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::Transport(format!("Failed to create HTTP client: {}", e)))?;
        info!("Candidate source configured at {}", base_url);
        Ok(Self { client, base_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url, SourceError> {
        self.base_url
            .join(path)
            .map_err(|e| SourceError::BadRequest {
                status: 0,
                message: format!("Invalid endpoint {}: {}", path, e),
            })
    }
}

async fn check_status(response: Response) -> Result<Response, SourceError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(SourceError::from_status(status.as_u16(), body))
}

fn total_pages(total: usize, limit: usize) -> usize {
    if limit == 0 {
        0
    } else {
        total.div_ceil(limit)
    }
}

impl CandidateSource for HttpCandidateSource {
    async fn fetch_page(&self, query: PageQuery) -> Result<CandidatePage, SourceError> {
        let url = self.endpoint("candidates")?;
        debug!(page = query.page, limit = query.limit, "Fetching candidate page");

        let response = self
            .client
            .get(url)
            .query(&[
                ("_page", query.page.to_string()),
                ("_limit", query.limit.to_string()),
                ("_sort", "date".to_string()),
                ("_order", "desc".to_string()),
            ])
            .send()
            .await?;
        let response = check_status(response).await?;

        let total = response
            .headers()
            .get(TOTAL_COUNT_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(0);
        let items = response.json::<Vec<Candidate>>().await?;

        Ok(CandidatePage {
            items,
            total,
            page: query.page,
            limit: query.limit,
            total_pages: total_pages(total, query.limit),
        })
    }

    async fn fetch_all(&self) -> Result<Vec<Candidate>, SourceError> {
        let url = self.endpoint("candidates")?;
        debug!("Fetching full candidate collection");
        let response = check_status(self.client.get(url).send().await?).await?;
        Ok(response.json::<Vec<Candidate>>().await?)
    }

    async fn fetch_one(&self, id: CandidateId) -> Result<Candidate, SourceError> {
        let url = self.endpoint(&format!("candidates/{}", id))?;
        let response = check_status(self.client.get(url).send().await?).await?;
        Ok(response.json::<Candidate>().await?)
    }

    async fn update_status(
        &self,
        id: CandidateId,
        status: CandidateStatus,
    ) -> Result<Candidate, SourceError> {
        let url = self.endpoint(&format!("candidates/{}", id))?;
        info!(candidate_id = id, %status, "Updating candidate status");
        let response = self
            .client
            .patch(url)
            .json(&StatusUpdate { status })
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json::<Candidate>().await?)
    }
}
