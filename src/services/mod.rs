pub mod candidate_source;
pub mod dashboard_service;
pub mod filter_service;
pub mod pagination;
pub mod query_cache;
pub mod sort_service;
pub mod stats_service;
pub mod status_service;
pub mod ui_store;
