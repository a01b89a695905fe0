// Keyboard input handling.
//
// Translates crossterm key events into session Commands, or into local
// UiState changes (search mode, quit confirmation). The current View is
// passed in so movement and facet cycling work on what is on screen.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use ffdash_core::filter::{cycle_option, Facet};
use ffdash_core::grid::edited_rows;
use ffdash_core::{Command, DraftStatus, View};

use super::{InputMode, UiState};

/// What the event loop should do with a key press.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    Session(Command),
}

/// Handle a keyboard event.
///
/// Returns `None` when the key was consumed locally or ignored.
pub fn handle_key(key_event: KeyEvent, ui: &mut UiState, view: &View<'_>) -> Option<Action> {
    // crossterm on Windows reports both Press and Release.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    // Ctrl+C always quits immediately regardless of mode
    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && key_event.code == KeyCode::Char('c')
    {
        return Some(Action::Quit);
    }

    // Any key dismisses the last status message.
    ui.status = None;

    if ui.confirm_quit {
        return handle_confirm_quit(key_event, ui);
    }

    match ui.mode {
        InputMode::Search => handle_search_key(key_event, ui, view),
        InputMode::Normal => handle_normal_key(key_event, ui, view),
    }
}

/// Only y/q confirm, n/Esc cancel, everything else is swallowed.
fn handle_confirm_quit(key_event: KeyEvent, ui: &mut UiState) -> Option<Action> {
    match key_event.code {
        KeyCode::Char('y') | KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('n') | KeyCode::Esc => {
            ui.confirm_quit = false;
            None
        }
        _ => None,
    }
}

/// Search mode: every edit re-filters immediately.
fn handle_search_key(key_event: KeyEvent, ui: &mut UiState, view: &View<'_>) -> Option<Action> {
    let current = &view.criteria.search;
    match key_event.code {
        KeyCode::Enter => {
            ui.mode = InputMode::Normal;
            None
        }
        KeyCode::Esc => {
            ui.mode = InputMode::Normal;
            Some(Action::Session(Command::SetSearch(String::new())))
        }
        KeyCode::Backspace => {
            let mut text = current.clone();
            text.pop();
            Some(Action::Session(Command::SetSearch(text)))
        }
        KeyCode::Char(c) => {
            let mut text = current.clone();
            text.push(c);
            Some(Action::Session(Command::SetSearch(text)))
        }
        _ => None,
    }
}

fn handle_normal_key(key_event: KeyEvent, ui: &mut UiState, view: &View<'_>) -> Option<Action> {
    match key_event.code {
        KeyCode::Char('q') => {
            ui.confirm_quit = true;
            None
        }
        KeyCode::Char('/') => {
            ui.mode = InputMode::Search;
            None
        }
        KeyCode::Esc => Some(Action::Session(Command::ClearFilters)),
        KeyCode::Char('p') => {
            let next = cycle_option(view.criteria.position.as_deref(), &view.position_options);
            Some(Action::Session(Command::SetPosition(next)))
        }
        KeyCode::Char('t') => Some(Action::Session(cycle_secondary(view))),
        KeyCode::Down | KeyCode::Char('j') => select_offset(view, 1),
        KeyCode::Up | KeyCode::Char('k') => select_offset(view, -1),
        KeyCode::PageDown => select_offset(view, ui.page_size as isize),
        KeyCode::PageUp => select_offset(view, -(ui.page_size as isize)),
        KeyCode::Home => select_index(view, 0),
        KeyCode::End => select_index(view, view.rows.len().saturating_sub(1)),
        KeyCode::Char('m') => mark_selected(view, |_| DraftStatus::MyTeam),
        KeyCode::Char('o') => mark_selected(view, |_| DraftStatus::OtherTeam),
        KeyCode::Char('u') => mark_selected(view, |_| DraftStatus::Undrafted),
        KeyCode::Char(' ') => mark_selected(view, |current| current.cycle()),
        _ => None,
    }
}

/// Advance the team (stats) or round (draft) filter to its next option.
fn cycle_secondary(view: &View<'_>) -> Command {
    match view.secondary_facet {
        Facet::Round => {
            let current = view.criteria.round.map(|r| r.to_string());
            let next = cycle_option(current.as_deref(), &view.secondary_options);
            Command::SetRound(next.and_then(|r| r.parse().ok()))
        }
        Facet::Team | Facet::Position => {
            let next = cycle_option(view.criteria.team.as_deref(), &view.secondary_options);
            Command::SetTeam(next)
        }
    }
}

/// Move the selection by `delta` rows, clamped to the visible rows. With
/// nothing selected, moving down lands on the first row.
fn select_offset(view: &View<'_>, delta: isize) -> Option<Action> {
    if view.rows.is_empty() {
        return None;
    }
    let target = match view.selected_index {
        Some(i) => i as isize + delta,
        None if delta > 0 => 0,
        None => return None,
    };
    let last = view.rows.len() as isize - 1;
    select_index(view, target.clamp(0, last) as usize)
}

fn select_index(view: &View<'_>, index: usize) -> Option<Action> {
    let row = view.rows.get(index)?;
    if view.selected_index == Some(index) {
        return None;
    }
    Some(Action::Session(Command::Select(Some(row.name.clone()))))
}

/// Edit the Drafted cell of the selected row, as the grid editor would.
fn mark_selected(view: &View<'_>, status: impl FnOnce(DraftStatus) -> DraftStatus) -> Option<Action> {
    if !view.kind.tracks_drafted() {
        return None;
    }
    let selected = view.selected()?;
    let rows = edited_rows(&view.rows, &selected.name, status(selected.drafted));
    Some(Action::Session(Command::CommitEdits(rows)))
}
