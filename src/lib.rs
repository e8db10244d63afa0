pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod services;
pub mod telemetry;
pub mod utils;

use crate::config::Config;
use crate::services::candidate_source::HttpCandidateSource;
use crate::services::dashboard_service::Dashboard;
use crate::services::ui_store::UiStore;

pub type HttpDashboard = Dashboard<HttpCandidateSource>;

/// Builds a dashboard backed by the HTTP candidate API described by `config`,
/// with a fresh UI store.
pub fn build_dashboard(config: &Config) -> error::Result<HttpDashboard> {
    let source = HttpCandidateSource::new(config.api_base_url.clone(), config.http_timeout)?;
    Ok(Dashboard::new(source, config.cache, UiStore::new()))
}
