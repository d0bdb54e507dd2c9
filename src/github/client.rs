use crate::config::{Config, TOKEN_VAR};
use crate::error::{GhReposError, Result};
use crate::github::types::{GraphQlResponse, Page, ViewerData};
use http::header::AUTHORIZATION;
use itertools::Itertools;
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use std::fmt;

/// Remote end of the pagination loop: executes one query, returns one page.
pub trait RepositorySource {
    async fn fetch_page(&self, query: &str) -> Result<Page>;
}

impl<S: RepositorySource> RepositorySource for &S {
    async fn fetch_page(&self, query: &str) -> Result<Page> {
        (**self).fetch_page(query).await
    }
}

/// Bearer credential sent as `Authorization: token <value>`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Empty tokens count as absent.
    pub fn from_config(config: &Config) -> Result<Self> {
        match config.github_token.as_deref().map(str::trim) {
            Some(token) if !token.is_empty() => Ok(Self::new(token)),
            _ => Err(GhReposError::MissingCredential { var: TOKEN_VAR }),
        }
    }

    pub fn header_value(&self) -> String {
        format!("token {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential([REDACTED])")
    }
}

/// Each query is sent once; failed requests are not retried.
#[derive(Clone)]
pub struct GitHubClient {
    octo: Octocrab,
}

impl GitHubClient {
    pub fn new(credential: &Credential, config: &Config) -> Result<Self> {
        let octo = Octocrab::builder()
            .base_uri(config.api_url.as_str())
            .map_err(|e| GhReposError::Config(format!("invalid api_url {}: {e}", config.api_url)))?
            .add_header(AUTHORIZATION, credential.header_value())
            .add_retry_config(RetryConfig::None)
            .build()
            .map_err(|e| GhReposError::Transport(e.to_string()))?;

        Ok(Self { octo })
    }
}

impl RepositorySource for GitHubClient {
    async fn fetch_page(&self, query: &str) -> Result<Page> {
        let body: GraphQlResponse<ViewerData> = self
            .octo
            .graphql(&serde_json::json!({ "query": query }))
            .await
            .map_err(|e| GhReposError::Transport(e.to_string()))?;

        into_page(body)
    }
}

fn into_page(body: GraphQlResponse<ViewerData>) -> Result<Page> {
    if !body.errors.is_empty() {
        return Err(GhReposError::Transport(
            body.errors.iter().map(|e| e.message.as_str()).join("; "),
        ));
    }
    body.data
        .map(Page::from)
        .ok_or_else(|| GhReposError::Transport("response carried no data".to_string()))
}
