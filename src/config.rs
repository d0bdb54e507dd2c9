use crate::error::{GhReposError, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Environment variable holding the personal access token.
pub const TOKEN_VAR: &str = "GITHUB_PAT";

pub const MAX_PAGE_SIZE: u8 = 100;

/// Relationship between the viewer and a listed repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Affiliation {
    Owner,
    OrganizationMember,
    Collaborator,
}

impl fmt::Display for Affiliation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Affiliation::Owner => "OWNER",
            Affiliation::OrganizationMember => "ORGANIZATION_MEMBER",
            Affiliation::Collaborator => "COLLABORATOR",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    pub github_token: Option<String>,
    pub api_url: String,
    pub page_size: u8,
    #[serde(default = "default_affiliations")]
    pub affiliations: Vec<Affiliation>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("github_token", &self.github_token.as_ref().map(|_| "[REDACTED]"))
            .field("api_url", &self.api_url)
            .field("page_size", &self.page_size)
            .field("affiliations", &self.affiliations)
            .finish()
    }
}

fn default_affiliations() -> Vec<Affiliation> {
    vec![
        Affiliation::Owner,
        Affiliation::OrganizationMember,
        Affiliation::Collaborator,
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github_token: None,
            api_url: "https://api.github.com".to_string(),
            page_size: MAX_PAGE_SIZE,
            affiliations: default_affiliations(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&config_dir().join("ghrepos").join("config.toml"))
    }

    pub fn load_from(config_file: &Path) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));

        if config_file.exists() {
            figment = figment.merge(Toml::file(config_file));
        }

        figment = figment.merge(Env::prefixed("GHREPOS_")).merge(
            Env::raw()
                .only(&[TOKEN_VAR])
                .map(|_| "github_token".into()),
        );

        figment
            .extract()
            .map_err(|e| GhReposError::Config(e.to_string()))
    }

    pub fn page_size(&self) -> u8 {
        self.page_size.clamp(1, MAX_PAGE_SIZE)
    }

    pub fn resolved_affiliations(&self) -> Vec<Affiliation> {
        if self.affiliations.is_empty() {
            default_affiliations()
        } else {
            self.affiliations.clone()
        }
    }
}

pub fn config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(".config"))
        })
        .unwrap_or_else(|| PathBuf::from("."))
}
