#![allow(dead_code)]

use candidate_dashboard::config::CacheSettings;
use candidate_dashboard::dto::candidate_dto::PageQuery;
use candidate_dashboard::error::SourceError;
use candidate_dashboard::models::candidate::{
    Candidate, CandidateId, CandidatePage, CandidateStatus,
};
use candidate_dashboard::services::candidate_source::CandidateSource;
use candidate_dashboard::services::pagination;
use candidate_dashboard::services::sort_service::{sorted, SortSpec};
use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

pub const ROLES: [&str; 5] = [
    "Frontend Developer",
    "Backend Developer",
    "Data Scientist",
    "Product Manager",
    "QA Engineer",
];

pub const ASSIGNEES: [&str; 4] = ["Alice Cooper", "Bob Wilson", "Carol Davis", "Grace Lee"];

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

pub fn candidate(id: CandidateId, name: &str, status: CandidateStatus, applied: &str) -> Candidate {
    let slug = name.to_lowercase().replace(' ', ".");
    Candidate {
        id,
        name: name.to_string(),
        email: format!("{}@email.com", slug),
        phone: format!("+1-555-{:04}", 1000 + id),
        role: "Backend Developer".to_string(),
        status,
        resume_url: format!("https://example.com/resumes/{}.pdf", slug.replace('.', "-")),
        applied_date: date(applied),
        experience: (id % 16) as u32,
        assignee: "Alice Cooper".to_string(),
    }
}

pub fn sample_candidates() -> Vec<Candidate> {
    let mut list = vec![
        candidate(1, "James Smith", CandidateStatus::Hired, "2024-12-15"),
        candidate(2, "mary johnson", CandidateStatus::Rejected, "2024-12-10"),
        candidate(3, "John Williams", CandidateStatus::New, "2024-12-18"),
        candidate(4, "Patricia Brown", CandidateStatus::Processed, "2024-12-05"),
        candidate(5, "Robert Jones", CandidateStatus::New, "2024-11-30"),
        candidate(6, "Linda Garcia", CandidateStatus::Processed, "2024-12-10"),
    ];
    list[1].role = "Frontend Developer".to_string();
    list[2].role = "Data Scientist".to_string();
    list[3].assignee = "Bob Wilson".to_string();
    list[4].assignee = "Bob Wilson".to_string();
    list[5].role = "Frontend Developer".to_string();
    list
}

/// Seeded random collection shaped like the dashboard's demo data.
pub fn generate_candidates(count: usize, seed: u64) -> Vec<Candidate> {
    let mut rng = StdRng::seed_from_u64(seed);
    let start = date("2023-01-01");
    (1..=count as u64)
        .map(|id| {
            let status = CandidateStatus::ALL[rng.gen_range(0..CandidateStatus::ALL.len())];
            let applied = start
                .checked_add_days(Days::new(rng.gen_range(0..730)))
                .expect("date in range");
            let mut c = candidate(id, &format!("Candidate {}", id), status, "2023-01-01");
            c.applied_date = applied;
            c.role = ROLES[rng.gen_range(0..ROLES.len())].to_string();
            c.assignee = ASSIGNEES[rng.gen_range(0..ASSIGNEES.len())].to_string();
            c.experience = rng.gen_range(0..=15);
            c
        })
        .collect()
}

pub fn fast_settings() -> CacheSettings {
    CacheSettings {
        retry_base_delay: Duration::from_millis(10),
        ..CacheSettings::default()
    }
}

/// In-memory stand-in for the remote candidate API that counts calls and can
/// be told to fail.
pub struct FakeSource {
    candidates: Mutex<Vec<Candidate>>,
    latency: Duration,
    failures: Mutex<VecDeque<SourceError>>,
    all_calls: AtomicUsize,
    page_calls: AtomicUsize,
    update_calls: AtomicUsize,
}

impl FakeSource {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self {
            candidates: Mutex::new(candidates),
            latency: Duration::from_millis(50),
            failures: Mutex::new(VecDeque::new()),
            all_calls: AtomicUsize::new(0),
            page_calls: AtomicUsize::new(0),
            update_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn fail_next(&self, times: usize, err: SourceError) {
        let mut failures = self.failures.lock().unwrap();
        for _ in 0..times {
            failures.push_back(err.clone());
        }
    }

    pub fn all_calls(&self) -> usize {
        self.all_calls.load(Ordering::SeqCst)
    }

    pub fn page_calls(&self) -> usize {
        self.page_calls.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    async fn respond(&self) -> Result<(), SourceError> {
        tokio::time::sleep(self.latency).await;
        match self.failures.lock().unwrap().pop_front() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

pub fn server_error() -> SourceError {
    SourceError::Status {
        status: 503,
        message: "unavailable".to_string(),
    }
}

pub fn bad_request() -> SourceError {
    SourceError::BadRequest {
        status: 400,
        message: "bad _limit".to_string(),
    }
}

impl CandidateSource for FakeSource {
    async fn fetch_page(&self, query: PageQuery) -> Result<CandidatePage, SourceError> {
        self.page_calls.fetch_add(1, Ordering::SeqCst);
        self.respond().await?;
        let all = self.candidates.lock().unwrap().clone();
        let ordered = sorted(&all, SortSpec::DEFAULT);
        let page = pagination::slice(&ordered, query.page, query.limit);
        Ok(CandidatePage {
            items: page.items,
            total: page.total,
            page: query.page,
            limit: query.limit,
            total_pages: page.total_pages,
        })
    }

    async fn fetch_all(&self) -> Result<Vec<Candidate>, SourceError> {
        self.all_calls.fetch_add(1, Ordering::SeqCst);
        self.respond().await?;
        Ok(self.candidates.lock().unwrap().clone())
    }

    async fn fetch_one(&self, id: CandidateId) -> Result<Candidate, SourceError> {
        self.respond().await?;
        self.candidates
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| SourceError::BadRequest {
                status: 404,
                message: format!("candidate {} not found", id),
            })
    }

    async fn update_status(
        &self,
        id: CandidateId,
        status: CandidateStatus,
    ) -> Result<Candidate, SourceError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        self.respond().await?;
        let mut candidates = self.candidates.lock().unwrap();
        let found = candidates
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| SourceError::BadRequest {
                status: 404,
                message: format!("candidate {} not found", id),
            })?;
        found.status = status;
        Ok(found.clone())
    }
}
