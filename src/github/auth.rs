use anyhow::{Result, bail};
use std::process::Command;
use tracing::debug;

pub const TOKEN_ENV_VARS: [&str; 2] = ["GITHUB_TOKEN", "GH_TOKEN"];

/// Resolve the API token sent with every request:
/// 1. `GITHUB_TOKEN` environment variable
/// 2. `GH_TOKEN` environment variable
/// 3. `gh auth token` subprocess
pub fn resolve_token() -> Result<String> {
    if let Some(token) = token_from_env(|key| std::env::var(key).ok()) {
        return Ok(token);
    }

    debug!("Attempting to resolve token via `gh auth token`");
    if let Ok(output) = Command::new("gh").args(["auth", "token"]).output()
        && output.status.success()
    {
        let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if !token.is_empty() {
            debug!("Token resolved via gh CLI");
            return Ok(token);
        }
    }

    bail!(
        "Could not resolve a GitHub token. Please either:\n\
         - Set the GITHUB_TOKEN environment variable\n\
         - Set the GH_TOKEN environment variable\n\
         - Run `gh auth login` to authenticate with the GitHub CLI"
    )
}

/// First non-blank value among [`TOKEN_ENV_VARS`], looked up through `lookup`.
pub fn token_from_env(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    TOKEN_ENV_VARS.iter().find_map(|key| {
        let token = lookup(key)?.trim().to_string();
        if token.is_empty() {
            return None;
        }
        debug!(var = key, "Token resolved via environment");
        Some(token)
    })
}
