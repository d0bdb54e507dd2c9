use serde::Deserialize;
use std::fmt;

/// Access level the authenticated user holds on a repository. Values the
/// client does not know are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ViewerPermission {
    Admin,
    Maintain,
    Write,
    Triage,
    Read,
    Other(String),
}

impl From<String> for ViewerPermission {
    fn from(value: String) -> Self {
        match value.as_str() {
            "ADMIN" => ViewerPermission::Admin,
            "MAINTAIN" => ViewerPermission::Maintain,
            "WRITE" => ViewerPermission::Write,
            "TRIAGE" => ViewerPermission::Triage,
            "READ" => ViewerPermission::Read,
            _ => ViewerPermission::Other(value),
        }
    }
}

impl fmt::Display for ViewerPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ViewerPermission::Admin => "ADMIN",
            ViewerPermission::Maintain => "MAINTAIN",
            ViewerPermission::Write => "WRITE",
            ViewerPermission::Triage => "TRIAGE",
            ViewerPermission::Read => "READ",
            ViewerPermission::Other(raw) => raw.as_str(),
        };
        f.write_str(s)
    }
}

/// One fetched repository.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub owner: String,
    pub permission: Option<ViewerPermission>,
    pub default_branch: Option<String>,
    pub is_private: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    pub records: Vec<Record>,
    pub end_cursor: Option<String>,
    pub has_next_page: bool,
    pub total_count: u64,
    pub rate_limit: RateLimit,
}

/// Rate-limit figures reported for a single query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RateLimit {
    pub cost: u64,
    pub remaining: u64,
}

/// Running totals across all pages of one invocation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RateLimitUsage {
    pub cost: u64,
    pub remaining: u64,
}

impl RateLimitUsage {
    pub fn record(&mut self, rate: RateLimit) {
        self.cost += rate.cost;
        self.remaining = rate.remaining;
    }
}

// Wire shapes of the GraphQL response body.

#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerData {
    pub viewer: Viewer,
    pub rate_limit: RateLimit,
}

#[derive(Debug, Deserialize)]
pub struct Viewer {
    pub repositories: RepositoryConnection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryConnection {
    pub total_count: u64,
    pub page_info: PageInfo,
    pub nodes: Vec<RepositoryNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub end_cursor: Option<String>,
    pub has_next_page: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryNode {
    pub name: String,
    pub owner: Login,
    pub is_private: bool,
    pub default_branch_ref: Option<BranchRef>,
    pub viewer_permission: Option<ViewerPermission>,
}

#[derive(Debug, Deserialize)]
pub struct Login {
    pub login: String,
}

#[derive(Debug, Deserialize)]
pub struct BranchRef {
    pub name: String,
}

impl From<RepositoryNode> for Record {
    fn from(node: RepositoryNode) -> Self {
        Self {
            name: node.name,
            owner: node.owner.login,
            permission: node.viewer_permission,
            default_branch: node.default_branch_ref.map(|b| b.name),
            is_private: node.is_private,
        }
    }
}

impl From<ViewerData> for Page {
    fn from(data: ViewerData) -> Self {
        let repos = data.viewer.repositories;
        Self {
            records: repos.nodes.into_iter().map(Record::from).collect(),
            end_cursor: repos.page_info.end_cursor,
            has_next_page: repos.page_info.has_next_page,
            total_count: repos.total_count,
            rate_limit: data.rate_limit,
        }
    }
}
