use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use reqwest::Url;

use crate::ui::heatmap::{DEFAULT_PALETTE, DEFAULT_WEB_URL, HeatmapTheme};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub github: GithubConfig,
    #[serde(default)]
    pub heatmap: HeatmapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatmapConfig {
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}
fn default_palette() -> Vec<String> {
    DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect()
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
        }
    }
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            palette: default_palette(),
        }
    }
}

impl AppConfig {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::read(path);
        }

        // Search candidate paths in order
        let mut candidates = Vec::new();

        // 1. ~/.config/ghfinder/config.toml (standard XDG on all platforms)
        if let Some(home) = std::env::var_os("HOME") {
            candidates.push(PathBuf::from(home).join(".config/ghfinder/config.toml"));
        }

        // 2. Platform-specific path from `directories` crate
        //    (macOS: ~/Library/Application Support/ghfinder/)
        if let Some(proj_dirs) = ProjectDirs::from("", "", "ghfinder") {
            candidates.push(proj_dirs.config_dir().join("config.toml"));
        }

        for config_path in &candidates {
            if config_path.exists() {
                return Self::read(config_path);
            }
        }

        // Fallback to default
        Ok(AppConfig::default())
    }

    fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content).with_context(|| "Failed to parse config file")
    }

    pub fn heatmap_theme(&self) -> Result<HeatmapTheme> {
        HeatmapTheme::from_palette(&self.heatmap.palette).context("Invalid [heatmap] palette")
    }

    /// Site root matching `api_url`: `api.github.com` maps to `github.com`,
    /// an Enterprise `https://host/api/v3` maps to `https://host`.
    pub fn web_url(&self) -> String {
        let Ok(url) = Url::parse(&self.github.api_url) else {
            return DEFAULT_WEB_URL.to_string();
        };
        match url.host_str() {
            None | Some("api.github.com") => DEFAULT_WEB_URL.to_string(),
            Some(host) => match url.port() {
                Some(port) => format!("{}://{}:{}", url.scheme(), host, port),
                None => format!("{}://{}", url.scheme(), host),
            },
        }
    }

    pub fn log_dir(&self) -> PathBuf {
        if let Some(proj_dirs) = ProjectDirs::from("", "", "ghfinder") {
            return proj_dirs.data_dir().join("logs");
        }
        PathBuf::from(".local/share/ghfinder/logs")
    }
}
