use tracing::debug;

use crate::app::actions::{Action, SideEffect};
use crate::app::state::{AppState, Focus, Phase};
use crate::github::validate_username;

pub fn update(state: &mut AppState, action: Action) -> Vec<SideEffect> {
    match action {
        Action::Quit => {
            state.should_quit = true;
            vec![]
        }
        Action::UsernameInput(ch) => {
            state.username_input.push(ch);
            vec![]
        }
        Action::UsernameBackspace => {
            state.username_input.pop();
            vec![]
        }
        Action::SubmitSearch => submit_search(state),
        Action::RepoSearchInput(ch) => {
            if state.snapshot.is_some() {
                state.search.push(ch);
                reset_page(state);
            }
            vec![]
        }
        Action::RepoSearchBackspace => {
            if state.search.pop().is_some() {
                reset_page(state);
            }
            vec![]
        }
        Action::RepoSearchClear => {
            state.search.clear();
            reset_page(state);
            vec![]
        }
        Action::FocusNext => {
            state.focus = match (state.focus, state.snapshot.is_some()) {
                (_, false) => Focus::Username,
                (Focus::Username, true) => Focus::RepoSearch,
                (Focus::RepoSearch, true) => Focus::Grid,
                (Focus::Grid, true) => Focus::Username,
            };
            vec![]
        }
        Action::FocusUsername => {
            state.focus = Focus::Username;
            vec![]
        }
        Action::FocusRepoSearch => {
            if state.snapshot.is_some() {
                state.focus = Focus::RepoSearch;
            }
            vec![]
        }
        Action::MoveUp => {
            state.cursor = state.cursor.saturating_sub(1);
            vec![]
        }
        Action::MoveDown => {
            let max = state.displayed_repos().len().saturating_sub(1);
            if state.cursor < max {
                state.cursor += 1;
            }
            vec![]
        }
        Action::PrevPage => {
            if state.has_prev_page() {
                state.page -= 1;
                state.cursor = 0;
            }
            vec![]
        }
        Action::NextPage => {
            if state.has_next_page() {
                state.page += 1;
                state.cursor = 0;
            }
            vec![]
        }
        Action::OpenSelected => state
            .selected_repo_url()
            .map(SideEffect::OpenUrl)
            .into_iter()
            .collect(),
        Action::OpenProfile => state
            .profile_url()
            .map(SideEffect::OpenUrl)
            .into_iter()
            .collect(),
        Action::SearchCompleted { request, result } => {
            if state.phase != Phase::Loading(request) {
                debug!(
                    request = request.0,
                    latest = state.latest_request().0,
                    "Dropping stale search result"
                );
                return vec![];
            }
            match result {
                Ok(snapshot) => {
                    state.snapshot = Some(snapshot);
                    state.search.clear();
                    reset_page(state);
                    state.phase = Phase::Idle;
                    state.focus = Focus::Grid;
                }
                Err(e) => {
                    state.phase = Phase::Failed(e);
                }
            }
            vec![]
        }
        Action::DismissError => {
            if state.error().is_some() {
                state.phase = Phase::Idle;
            }
            vec![]
        }
    }
}

fn submit_search(state: &mut AppState) -> Vec<SideEffect> {
    // A new submission always supersedes an in-flight one.
    let request = state.next_request();

    let username = match validate_username(&state.username_input) {
        Ok(username) => username.to_string(),
        Err(e) => {
            state.phase = Phase::Failed(e);
            return vec![];
        }
    };

    state.phase = Phase::Loading(request);
    state.snapshot = None;
    state.focus = Focus::Username;
    reset_page(state);

    vec![SideEffect::FetchSnapshot { request, username }]
}

fn reset_page(state: &mut AppState) {
    state.page = 1;
    state.cursor = 0;
}
