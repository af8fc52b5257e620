use crate::Result;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// API token used to authenticate against GitHub's GraphQL endpoint
    pub github_api_token: String,

    /// Directory the front-end is served from
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    pub repo: RepoConfig,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

/// The repository whose discussions back the message board
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RepoConfig {
    owner: String,
    name: String,

    /// GraphQL node id of the repository, used by the createDiscussion mutation
    repository_id: String,

    /// GraphQL node id of the discussion category new messages are filed under
    category_id: String,
}

impl RepoConfig {
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn repository_id(&self) -> &str {
        &self.repository_id
    }

    pub fn category_id(&self) -> &str {
        &self.category_id
    }
}
