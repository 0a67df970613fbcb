use std::ops::Range;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::state::{AppState, Focus};
use crate::github::{Profile, Repository};
use crate::ui::theme;
use crate::util::time::relative_time;

/// Height of one repository card, borders included.
pub const CARD_HEIGHT: u16 = 5;

fn border_for(state: &AppState, focus: Focus) -> Style {
    if state.focus == focus {
        theme::BORDER_FOCUSED
    } else {
        theme::BORDER_UNFOCUSED
    }
}

fn render_input(
    f: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    placeholder: &str,
    border: Style,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(border);

    let text = if value.is_empty() {
        Span::styled(placeholder.to_string(), theme::DIM)
    } else {
        Span::raw(value.to_string())
    };

    f.render_widget(Paragraph::new(Line::from(text)).block(block), area);
}

pub fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new(Span::styled("GitHub Profile Finder", theme::TITLE))
        .alignment(Alignment::Center);
    f.render_widget(title, area);
}

pub fn render_search_bar(f: &mut Frame, area: Rect, state: &AppState) {
    render_input(
        f,
        area,
        "Search [Enter]",
        &state.username_input,
        "GitHub username",
        border_for(state, Focus::Username),
    );
}

/// Loading indicator or error banner; blank otherwise.
pub fn render_status_line(f: &mut Frame, area: Rect, state: &AppState) {
    let line = if state.is_loading() {
        Line::from(Span::styled("Loading...", theme::LOADING))
    } else if let Some(err) = state.error() {
        Line::from(Span::styled(err.to_string(), theme::ERROR))
    } else {
        Line::default()
    };
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

pub fn render_profile_card(f: &mut Frame, area: Rect, profile: &Profile) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::BORDER_UNFOCUSED);

    let lines = vec![
        Line::from(Span::styled(profile.heading(), theme::HEADER)),
        Line::from(Span::styled(profile.bio_text().to_string(), theme::TEXT)),
        Line::from(vec![
            Span::raw(format!("{} Followers", profile.followers)),
            Span::raw("   "),
            Span::raw(format!("{} Repos", profile.public_repos)),
        ]),
        Line::from(vec![
            Span::styled("Visit Profile → ", theme::LINK),
            Span::styled(profile.html_url.clone(), theme::DIM),
        ]),
        Line::from(Span::styled(
            format!("avatar: {}", profile.avatar_url),
            theme::DIM,
        )),
    ];

    f.render_widget(Paragraph::new(lines).block(block), area);
}

pub fn render_repo_search(f: &mut Frame, area: Rect, state: &AppState) {
    render_input(
        f,
        area,
        "Filter [/]",
        &state.search,
        "Search repositories...",
        border_for(state, Focus::RepoSearch),
    );
}

/// Two-column grid of the current page's cards.
pub fn render_repo_grid(f: &mut Frame, area: Rect, state: &AppState) {
    let repos = state.displayed_repos();
    if repos.is_empty() {
        let msg = if state.search.is_empty() {
            "No public repositories"
        } else {
            "No matching repositories"
        };
        f.render_widget(
            Paragraph::new(Span::styled(msg, theme::DIM)).alignment(Alignment::Center),
            area,
        );
        return;
    }

    let rows_fit = (area.height / CARD_HEIGHT) as usize;
    if rows_fit == 0 {
        f.render_widget(
            Paragraph::new(Span::styled(
                "Enlarge the terminal to see repositories",
                theme::DIM,
            ))
            .alignment(Alignment::Center),
            area,
        );
        return;
    }

    let visible = visible_card_rows(repos.len(), state.cursor, rows_fit);
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); visible.len()])
        .split(area);

    for (row_area, row) in row_areas.iter().zip(visible) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(*row_area);
        for (col, i) in (row * 2..(row * 2 + 2).min(repos.len())).enumerate() {
            let selected = state.focus == Focus::Grid && i == state.cursor;
            render_repo_card(f, cols[col], repos[i], selected);
        }
    }
}

/// Card rows to draw when only `rows_fit` rows fit, scrolled so the row
/// holding `cursor` is on screen.
pub fn visible_card_rows(card_count: usize, cursor: usize, rows_fit: usize) -> Range<usize> {
    let total_rows = card_count.div_ceil(2);
    if rows_fit == 0 || total_rows == 0 {
        return 0..0;
    }
    let cursor_row = (cursor / 2).min(total_rows - 1);
    let first = (cursor_row + 1).saturating_sub(rows_fit);
    first..(first + rows_fit).min(total_rows)
}

fn render_repo_card(f: &mut Frame, area: Rect, repo: &Repository, selected: bool) {
    let block = Block::default().borders(Borders::ALL).border_style(if selected {
        theme::CARD_SELECTED
    } else {
        theme::BORDER_UNFOCUSED
    });

    let mut stats = vec![
        Span::raw(format!("★ {}", repo.stargazers_count)),
        Span::raw("  "),
        Span::raw(format!("⑂ {}", repo.forks_count)),
        Span::raw("  "),
        Span::raw(repo.language_text().to_string()),
    ];
    if let Some(updated) = &repo.updated_at {
        stats.push(Span::styled(
            format!("  · {}", relative_time(updated)),
            theme::DIM,
        ));
    }

    let lines = vec![
        Line::from(Span::styled(repo.name.clone(), theme::LINK)),
        Line::from(Span::styled(repo.description_text().to_string(), theme::TEXT)),
        Line::from(stats),
    ];

    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// `Prev  Page x of y  Next`. Hidden when everything fits on one page.
pub fn render_pagination(f: &mut Frame, area: Rect, state: &AppState) {
    let total = state.total_pages();
    if total <= 1 {
        return;
    }

    let button = |label: &'static str, enabled: bool| {
        Span::styled(
            format!(" {} ", label),
            if enabled {
                theme::BUTTON
            } else {
                theme::BUTTON_DISABLED
            },
        )
    };

    let line = Line::from(vec![
        button("Prev", state.has_prev_page()),
        Span::raw(format!("   Page {} of {}   ", state.page, total)),
        button("Next", state.has_next_page()),
    ]);
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

pub fn render_key_hints(f: &mut Frame, area: Rect, state: &AppState) {
    let hints = match state.focus {
        Focus::Username => "Enter: search | Tab: next | Ctrl-C: quit",
        Focus::RepoSearch => "Type to filter | Esc: clear | Enter/Tab: repositories",
        Focus::Grid => concat!(
            "j/k: move | h/l: page | Enter: open repo | p: profile | ",
            "/: filter | u: username | q: quit"
        ),
    };
    f.render_widget(Paragraph::new(hints).style(theme::STATUS_BAR), area);
}
