//! Keyboard handling for every screen.

use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::{
    types::{MainMenuItem, OptionsMenuItem, Screen},
    App,
};

/// Longest time a frame waits for a key press.
const MAX_INPUT_WAIT: Duration = Duration::from_millis(100);

/// Waits briefly for a key press and dispatches it.
///
/// While a maze is on screen the wait is capped by the animation delay so the playback keeps its
/// pace.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    let timeout = if matches!(app.screen, Screen::InGame) {
        app.playback.frame_delay().min(MAX_INPUT_WAIT)
    } else {
        MAX_INPUT_WAIT
    };

    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key(app, key.code)?;
            }
        }
    }

    Ok(())
}

/// Applies one key press to the application state.
///
/// `j`/`k` and the arrow keys move through menus, `l`/Enter selects and `h`/Esc goes back. Once
/// a maze is on screen `c` cancels the run and `r` starts a fresh one. `q` quits from anywhere.
///
/// # Errors
///
/// Fails when starting a run or resizing the grid fails.
pub(crate) fn handle_key(app: &mut App, code: KeyCode) -> Result<()> {
    match code {
        KeyCode::Char('q') => app.exit = true,
        KeyCode::Char('j') | KeyCode::Down => handle_j_events(app),
        KeyCode::Char('k') | KeyCode::Up => handle_k_events(app),
        KeyCode::Char('l') | KeyCode::Enter => handle_l_events(app)?,
        KeyCode::Char('h') | KeyCode::Esc => handle_h_events(app),
        KeyCode::Char('c') if app.screen == Screen::InGame => app.cancel(),
        KeyCode::Char('r') if app.screen == Screen::InGame => app.generate()?,
        _ => {}
    }

    Ok(())
}

/// Moves the menu highlight down.
fn handle_j_events(app: &mut App) {
    match app.screen {
        Screen::MainMenu(item) => app.screen = Screen::MainMenu(item.down()),
        Screen::OptionsMenu(item) => app.screen = Screen::OptionsMenu(item.down()),
        Screen::InGame => {}
    }
}

/// Moves the menu highlight up.
fn handle_k_events(app: &mut App) {
    match app.screen {
        Screen::MainMenu(item) => app.screen = Screen::MainMenu(item.up()),
        Screen::OptionsMenu(item) => app.screen = Screen::OptionsMenu(item.up()),
        Screen::InGame => {}
    }
}

/// Selects the highlighted entry; option entries cycle their value in place.
fn handle_l_events(app: &mut App) -> Result<()> {
    match app.screen {
        Screen::MainMenu(MainMenuItem::Generate) => app.generate()?,
        Screen::MainMenu(MainMenuItem::Options) => {
            app.screen = Screen::OptionsMenu(OptionsMenuItem::Algorithm);
        }
        Screen::MainMenu(MainMenuItem::Quit) => app.exit = true,
        Screen::OptionsMenu(OptionsMenuItem::Algorithm) => app.cycle_algorithm(),
        Screen::OptionsMenu(OptionsMenuItem::GridSize) => app.cycle_grid_size()?,
        Screen::OptionsMenu(OptionsMenuItem::Animation) => app.toggle_animation(),
        Screen::OptionsMenu(OptionsMenuItem::Back) => {
            app.screen = Screen::MainMenu(MainMenuItem::Options);
        }
        Screen::InGame => {}
    }

    Ok(())
}

/// Goes back one screen; leaving a maze resets it.
///
/// Reset cancels and joins the worker before the menu shows, so the engine is idle again and the
/// grid may be resized.
fn handle_h_events(app: &mut App) {
    match app.screen {
        Screen::InGame => {
            app.reset();
            app.screen = Screen::MainMenu(MainMenuItem::Generate);
        }
        Screen::OptionsMenu(_) => app.screen = Screen::MainMenu(MainMenuItem::Options),
        Screen::MainMenu(_) => {}
    }
}
