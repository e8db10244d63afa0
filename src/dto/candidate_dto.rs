use crate::models::candidate::{Candidate, CandidateStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(deserialize_with = "trim_optional_string")]
    pub search: Option<String>,
    #[serde(deserialize_with = "parse_optional")]
    pub status: Option<CandidateStatus>,
    #[serde(deserialize_with = "trim_optional_string")]
    pub role: Option<String>,
    #[serde(deserialize_with = "trim_optional_string")]
    pub assignee: Option<String>,
    #[serde(deserialize_with = "parse_optional")]
    pub date_from: Option<NaiveDate>,
    #[serde(deserialize_with = "parse_optional")]
    pub date_to: Option<NaiveDate>,
}

impl FilterCriteria {
    pub fn search_term(&self) -> Option<&str> {
        non_empty(self.search.as_deref())
    }

    pub fn role_filter(&self) -> Option<&str> {
        non_empty(self.role.as_deref())
    }

    pub fn assignee_filter(&self) -> Option<&str> {
        non_empty(self.assignee.as_deref())
    }

    pub fn is_active(&self) -> bool {
        self.search_term().is_some()
            || self.status.is_some()
            || self.role_filter().is_some()
            || self.assignee_filter().is_some()
            || self.date_from.is_some()
            || self.date_to.is_some()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn trim_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }))
}

/// Blank strings clear the field; anything else must parse as `T`.
fn parse_optional<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Query parameters understood by the remote collection endpoint. The remote
/// pages from 1, so page 0 is sent as 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageQuery {
    pub page: usize,
    pub limit: usize,
}

impl PageQuery {
    pub fn new(page: usize, limit: usize) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListViewResponse {
    pub items: Vec<Candidate>,
    pub total: usize,
    pub total_pages: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableViewResponse {
    pub items: Vec<Candidate>,
    pub total_filtered: usize,
    pub total_pages: usize,
}
