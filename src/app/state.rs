use crate::github::{FetchError, Repository, Snapshot};

/// Repository cards per page.
pub const REPOS_PER_PAGE: usize = 10;

/// Token stamped on each search submission. Only the completion carrying the
/// latest id may touch the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading(RequestId),
    Failed(FetchError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Username,
    RepoSearch,
    Grid,
}

#[derive(Debug)]
pub struct AppState {
    // Inputs
    pub username_input: String,
    pub search: String,
    pub page: usize,
    pub focus: Focus,
    pub cursor: usize,

    // Fetch
    pub phase: Phase,
    pub snapshot: Option<Snapshot>,
    latest_request: RequestId,

    pub should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            username_input: String::new(),
            search: String::new(),
            page: 1,
            focus: Focus::Username,
            cursor: 0,
            phase: Phase::Idle,
            snapshot: None,
            latest_request: RequestId::default(),
            should_quit: false,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading(_))
    }

    pub fn error(&self) -> Option<&FetchError> {
        match &self.phase {
            Phase::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn latest_request(&self) -> RequestId {
        self.latest_request
    }

    /// Issue a new request id, superseding whatever is in flight.
    pub fn next_request(&mut self) -> RequestId {
        self.latest_request = RequestId(self.latest_request.0 + 1);
        self.latest_request
    }

    pub fn repos(&self) -> &[Repository] {
        self.snapshot
            .as_ref()
            .map(|s| s.repos.as_slice())
            .unwrap_or_default()
    }

    /// Repositories whose name contains the search text, ignoring case.
    pub fn filtered_repos(&self) -> Vec<&Repository> {
        let query = self.search.to_lowercase();
        self.repos()
            .iter()
            .filter(|repo| repo.name.to_lowercase().contains(&query))
            .collect()
    }

    pub fn total_pages(&self) -> usize {
        self.filtered_repos().len().div_ceil(REPOS_PER_PAGE)
    }

    /// The current page's slice of the filtered view.
    pub fn displayed_repos(&self) -> Vec<&Repository> {
        let filtered = self.filtered_repos();
        let start = (self.page.saturating_sub(1) * REPOS_PER_PAGE).min(filtered.len());
        let end = (start + REPOS_PER_PAGE).min(filtered.len());
        filtered[start..end].to_vec()
    }

    pub fn has_prev_page(&self) -> bool {
        self.page > 1
    }

    pub fn has_next_page(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn selected_repo_url(&self) -> Option<String> {
        self.displayed_repos()
            .get(self.cursor)
            .map(|repo| repo.html_url.clone())
            .filter(|url| !url.is_empty())
    }

    pub fn profile_url(&self) -> Option<String> {
        self.snapshot
            .as_ref()
            .map(|s| s.profile.html_url.clone())
            .filter(|url| !url.is_empty())
    }
}
