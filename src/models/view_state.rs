use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewName {
    ListView,
    TableView,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivePage {
    Home,
    List,
    Table,
}

impl ActivePage {
    pub fn path(&self) -> &'static str {
        match self {
            ActivePage::Home => "/",
            ActivePage::List => "/list",
            ActivePage::Table => "/table",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivePage::Home => "Home",
            ActivePage::List => "Candidate List",
            ActivePage::Table => "Dashboard Table",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" | "" => Some(ActivePage::Home),
            "/list" => Some(ActivePage::List),
            "/table" => Some(ActivePage::Table),
            _ => None,
        }
    }

    /// Trail from home to this page; the last crumb is the current one.
    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        let mut trail = vec![Breadcrumb {
            page: ActivePage::Home,
            current: *self == ActivePage::Home,
        }];
        if *self != ActivePage::Home {
            trail.push(Breadcrumb {
                page: *self,
                current: true,
            });
        }
        trail
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    pub page: ActivePage,
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub sidebar_open: bool,
    pub dark_mode: bool,
    pub active_page: ActivePage,
    pub current_page: BTreeMap<ViewName, usize>,
}

impl ViewState {
    pub fn page_of(&self, view: ViewName) -> usize {
        self.current_page.get(&view).copied().unwrap_or(1)
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            sidebar_open: true,
            dark_mode: false,
            active_page: ActivePage::Home,
            current_page: BTreeMap::from([(ViewName::ListView, 1), (ViewName::TableView, 1)]),
        }
    }
}
