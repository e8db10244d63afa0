use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type CandidateId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub status: CandidateStatus,
    #[serde(rename = "resume")]
    pub resume_url: String,
    #[serde(rename = "date")]
    pub applied_date: NaiveDate,
    pub experience: u32,
    pub assignee: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateStatus {
    New,
    Processed,
    Rejected,
    Hired,
}

impl CandidateStatus {
    pub const ALL: [CandidateStatus; 4] = [
        CandidateStatus::New,
        CandidateStatus::Processed,
        CandidateStatus::Rejected,
        CandidateStatus::Hired,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateStatus::New => "new",
            CandidateStatus::Processed => "processed",
            CandidateStatus::Rejected => "rejected",
            CandidateStatus::Hired => "hired",
        }
    }

    /// Chip color used by the rendering layer for this status.
    pub fn color(&self) -> StatusColor {
        match self {
            CandidateStatus::New => StatusColor::Info,
            CandidateStatus::Processed => StatusColor::Warning,
            CandidateStatus::Rejected => StatusColor::Error,
            CandidateStatus::Hired => StatusColor::Success,
        }
    }
}

impl fmt::Display for CandidateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for CandidateStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "new" => Ok(CandidateStatus::New),
            "processed" => Ok(CandidateStatus::Processed),
            "rejected" => Ok(CandidateStatus::Rejected),
            "hired" => Ok(CandidateStatus::Hired),
            other => Err(format!("Unknown candidate status: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusColor {
    Info,
    Warning,
    Error,
    Success,
    Default,
}

impl StatusColor {
    /// Resolves a raw status string, falling back to `Default` for anything
    /// outside the known set.
    pub fn for_status(raw: &str) -> Self {
        raw.parse::<CandidateStatus>()
            .map(|s| s.color())
            .unwrap_or(StatusColor::Default)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusColor::Info => "info",
            StatusColor::Warning => "warning",
            StatusColor::Error => "error",
            StatusColor::Success => "success",
            StatusColor::Default => "default",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidatePage {
    pub items: Vec<Candidate>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: CandidateStatus,
}
