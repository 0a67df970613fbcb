use crate::app::state::RequestId;
use crate::github::{FetchError, Snapshot};

#[derive(Debug)]
pub enum Action {
    UsernameInput(char),
    UsernameBackspace,
    SubmitSearch,
    RepoSearchInput(char),
    RepoSearchBackspace,
    RepoSearchClear,
    FocusNext,
    FocusUsername,
    FocusRepoSearch,
    MoveUp,
    MoveDown,
    PrevPage,
    NextPage,
    OpenSelected,
    OpenProfile,
    SearchCompleted {
        request: RequestId,
        result: Result<Snapshot, FetchError>,
    },
    DismissError,
    Quit,
}

#[derive(Debug, PartialEq, Eq)]
pub enum SideEffect {
    FetchSnapshot {
        request: RequestId,
        username: String,
    },
    OpenUrl(String),
}
