use std::io;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::app::actions::{Action, SideEffect};
use crate::app::state::{AppState, Focus};
use crate::app::update::update;
use crate::app::view;
use crate::github::{GithubClient, fetch_snapshot};
use crate::ui::heatmap::{CalendarLegend, HeatmapTheme};

pub async fn run(
    client: GithubClient,
    calendar: CalendarLegend,
    heatmap_theme: HeatmapTheme,
    initial_username: Option<String>,
) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_loop(&mut terminal, client, calendar, heatmap_theme, initial_username).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    client: GithubClient,
    calendar: CalendarLegend,
    heatmap_theme: HeatmapTheme,
    initial_username: Option<String>,
) -> Result<()> {
    let mut state = AppState::new();

    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

    if let Some(username) = initial_username {
        state.username_input = username;
        for effect in update(&mut state, Action::SubmitSearch) {
            spawn_side_effect(effect, &client, &action_tx);
        }
    }

    let mut event_stream = crossterm::event::EventStream::new();

    loop {
        // Render
        terminal.draw(|f| view::render(f, &state, &calendar, &heatmap_theme))?;

        if state.should_quit {
            break;
        }

        // Wait for events
        tokio::select! {
            // Terminal events
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => {
                        if let Some(action) = map_event_to_action(&event, &state) {
                            for effect in update(&mut state, action) {
                                spawn_side_effect(effect, &client, &action_tx);
                            }
                        }
                    }
                    Some(Err(e)) => error!(error = %e, "Terminal event error"),
                    None => break,
                }
            }
            // Actions from background tasks
            Some(action) = action_rx.recv() => {
                for effect in update(&mut state, action) {
                    spawn_side_effect(effect, &client, &action_tx);
                }
            }
        }
    }

    Ok(())
}

pub fn map_event_to_action(event: &Event, state: &AppState) -> Option<Action> {
    let Event::Key(KeyEvent {
        code,
        modifiers,
        kind: event::KeyEventKind::Press,
        ..
    }) = event
    else {
        return None;
    };

    if let KeyCode::Char('c') = code
        && modifiers.contains(KeyModifiers::CONTROL)
    {
        return Some(Action::Quit);
    }

    match state.focus {
        Focus::Username => match code {
            KeyCode::Enter => Some(Action::SubmitSearch),
            KeyCode::Backspace => Some(Action::UsernameBackspace),
            KeyCode::Tab => Some(Action::FocusNext),
            KeyCode::Esc => Some(Action::DismissError),
            KeyCode::Char(c) => Some(Action::UsernameInput(*c)),
            _ => None,
        },
        Focus::RepoSearch => match code {
            KeyCode::Esc => Some(Action::RepoSearchClear),
            KeyCode::Backspace => Some(Action::RepoSearchBackspace),
            KeyCode::Enter | KeyCode::Tab => Some(Action::FocusNext),
            KeyCode::Char(c) => Some(Action::RepoSearchInput(*c)),
            _ => None,
        },
        Focus::Grid => match code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveUp),
            KeyCode::Char('h') | KeyCode::Left => Some(Action::PrevPage),
            KeyCode::Char('l') | KeyCode::Right => Some(Action::NextPage),
            KeyCode::Enter | KeyCode::Char('o') => Some(Action::OpenSelected),
            KeyCode::Char('p') => Some(Action::OpenProfile),
            KeyCode::Char('/') => Some(Action::FocusRepoSearch),
            KeyCode::Char('u') => Some(Action::FocusUsername),
            KeyCode::Tab => Some(Action::FocusNext),
            KeyCode::Esc => Some(Action::DismissError),
            _ => None,
        },
    }
}

fn spawn_side_effect(
    effect: SideEffect,
    client: &GithubClient,
    action_tx: &mpsc::UnboundedSender<Action>,
) {
    match effect {
        SideEffect::FetchSnapshot { request, username } => {
            let client = client.clone();
            let tx = action_tx.clone();

            tokio::spawn(async move {
                info!(request = request.0, username = %username, "Searching");
                let result = fetch_snapshot(&client, &username).await;
                match &result {
                    Ok(snapshot) => debug!(
                        request = request.0,
                        repos = snapshot.repos.len(),
                        "Search complete"
                    ),
                    Err(e) => error!(request = request.0, error = %e, "Search failed"),
                }
                let _ = tx.send(Action::SearchCompleted { request, result });
            });
        }
        SideEffect::OpenUrl(url) => {
            tokio::task::spawn_blocking(move || {
                if let Err(e) = crate::util::browser::open_url(&url) {
                    error!(error = %e, "Failed to open URL");
                }
            });
        }
    }
}
