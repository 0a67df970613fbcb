use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::app::state::AppState;
use crate::ui::heatmap::{ContributionCalendar, HeatmapTheme};
use crate::ui::widgets;

const PROFILE_HEIGHT: u16 = 7;
const HEATMAP_HEIGHT: u16 = 4;
const REPO_SEARCH_HEIGHT: u16 = 3;
const PAGINATION_HEIGHT: u16 = 1;

pub fn render(
    f: &mut Frame,
    state: &AppState,
    calendar: &dyn ContributionCalendar,
    heatmap_theme: &HeatmapTheme,
) {
    // Header: title, username bar, loading/error line. Footer: key hints.
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    widgets::render_title(f, vertical[0]);
    widgets::render_search_bar(f, vertical[1], state);
    widgets::render_status_line(f, vertical[2], state);
    widgets::render_key_hints(f, vertical[4], state);

    let Some(snapshot) = &state.snapshot else {
        return;
    };

    // The heatmap gives way first when the terminal is too short for a row
    // of cards.
    let fixed = PROFILE_HEIGHT + REPO_SEARCH_HEIGHT + PAGINATION_HEIGHT;
    let with_heatmap = fixed + HEATMAP_HEIGHT + widgets::CARD_HEIGHT;
    let heatmap_height = if vertical[3].height >= with_heatmap {
        HEATMAP_HEIGHT
    } else {
        0
    };

    let body = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(PROFILE_HEIGHT),
            Constraint::Length(heatmap_height),
            Constraint::Length(REPO_SEARCH_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(PAGINATION_HEIGHT),
        ])
        .split(vertical[3]);

    widgets::render_profile_card(f, body[0], &snapshot.profile);
    if heatmap_height > 0 {
        calendar.render(f, body[1], &snapshot.profile.login, heatmap_theme);
    }
    widgets::render_repo_search(f, body[2], state);
    widgets::render_repo_grid(f, body[3], state);
    widgets::render_pagination(f, body[4], state);
}
