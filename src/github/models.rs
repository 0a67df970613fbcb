use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const NO_BIO: &str = "No bio available";
pub const NO_DESCRIPTION: &str = "No description provided";
pub const NO_LANGUAGE: &str = "N/A";

/// A user profile as returned by `GET /users/{username}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub public_repos: u64,
    #[serde(default)]
    pub html_url: String,
}

impl Profile {
    pub fn bio_text(&self) -> &str {
        non_empty(self.bio.as_deref()).unwrap_or(NO_BIO)
    }

    /// Display name followed by the login, or just the login.
    pub fn heading(&self) -> String {
        match non_empty(self.name.as_deref()) {
            Some(name) if name != self.login => format!("{} ({})", name, self.login),
            _ => self.login.clone(),
        }
    }
}

/// One entry of `GET /users/{username}/repos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Repository {
    pub fn description_text(&self) -> &str {
        non_empty(self.description.as_deref()).unwrap_or(NO_DESCRIPTION)
    }

    pub fn language_text(&self) -> &str {
        non_empty(self.language.as_deref()).unwrap_or(NO_LANGUAGE)
    }
}

/// Profile and repositories from one successful search. Never built from a
/// partial fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub profile: Profile,
    pub repos: Vec<Repository>,
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}
