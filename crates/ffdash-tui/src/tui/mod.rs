// TUI: terminal setup, per-frame rendering, and the async event loop.
//
// The loop owns the SessionContext. Each key press becomes at most one
// session Command; after every event the View is rebuilt from scratch with
// `ffdash_core::render` and drawn.

pub mod input;
pub mod layout;
pub mod widgets;

use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::{DefaultTerminal, Frame};
use tracing::{info, warn};

use ffdash_core::config::DisplayConfig;
use ffdash_core::{render, AppKind, Command, SessionContext, View};

use input::Action;
use layout::{build_layout, AppLayout};

/// Whether keystrokes go to navigation or to the search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Search,
}

/// One-line message shown in the status bar until the next key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        StatusMessage {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        StatusMessage {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Presentation-only state. Everything about players lives in the session.
#[derive(Debug, Clone)]
pub struct UiState {
    pub mode: InputMode,
    pub confirm_quit: bool,
    pub status: Option<StatusMessage>,
    /// Decimal places for float cells and summary values.
    pub precision: u32,
    /// Rows moved by PageUp/PageDown.
    pub page_size: usize,
}

impl UiState {
    pub fn new(display: &DisplayConfig) -> Self {
        UiState {
            mode: InputMode::Normal,
            confirm_quit: false,
            status: None,
            precision: display.precision,
            page_size: display.page_size,
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        UiState::new(&DisplayConfig::default())
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Apply a command to the session, reporting the result in the status bar.
pub fn dispatch(session: &mut SessionContext, ui: &mut UiState, command: Command) {
    match command {
        Command::CommitEdits(rows) => match session.commit(&rows) {
            Ok(outcome) => {
                if let Some(change) = outcome.changes.first() {
                    ui.status = Some(StatusMessage::info(format!(
                        "{}: {} -> {}",
                        change.player, change.from, change.to
                    )));
                }
            }
            Err(e) => ui.status = Some(StatusMessage::error(e.to_string())),
        },
        other => {
            if let Err(e) = session.handle(other) {
                warn!("command failed: {}", e);
                ui.status = Some(StatusMessage::error(e.to_string()));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Frame rendering
// ---------------------------------------------------------------------------

pub fn render_frame(frame: &mut Frame, view: &View<'_>, ui: &UiState) {
    let layout = build_layout(frame.area(), view.draft_log.is_some());

    widgets::status_bar::render(frame, layout.status_bar, view, ui);
    widgets::filters::render(frame, layout.filters, view, ui);
    widgets::grid::render(frame, layout.grid, view, ui);
    widgets::detail::render(frame, layout.detail, &view.detail);
    widgets::summary::render(frame, layout.summary, view, ui.precision);
    if let (Some(area), Some(log)) = (layout.draft_log, view.draft_log) {
        widgets::draft_log::render(frame, area, log);
    }
    render_help_bar(frame, &layout, view.kind, ui.mode);

    if ui.confirm_quit {
        let area = frame.area();
        widgets::quit_confirm::render(frame, area, view.kind);
    }
}

pub fn help_text(kind: AppKind, mode: InputMode) -> &'static str {
    match (mode, kind) {
        (InputMode::Search, _) => " type to search | Enter:Keep | Esc:Clear search",
        (InputMode::Normal, AppKind::Stats) => {
            " q:Quit | j/k:Move | /:Search | p:Position | t:Team | Esc:Clear filters"
        }
        (InputMode::Normal, AppKind::Draft) => {
            " q:Quit | j/k:Move | /:Search | p:Position | t:Round | m:Mine o:Other u:Undo Space:Cycle | Esc:Clear"
        }
    }
}

fn render_help_bar(frame: &mut Frame, layout: &AppLayout, kind: AppKind, mode: InputMode) {
    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        help_text(kind, mode),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::DIM),
    )]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, layout.help_bar);
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI event loop.
///
/// 1. Initializes the terminal (raw mode, alternate screen).
/// 2. Installs a panic hook that restores the terminal.
/// 3. Runs the select loop over keyboard input and a redraw tick.
/// 4. Restores the terminal, whether the loop ended cleanly or not.
pub async fn run(session: SessionContext, display: &DisplayConfig) -> anyhow::Result<()> {
    // 1. Initialize terminal
    let mut terminal = ratatui::init();

    // 2. Set panic hook to restore terminal on crash.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    let result = event_loop(&mut terminal, session, UiState::new(display)).await;

    // 4. Restore terminal
    ratatui::restore();
    result
}

async fn event_loop(
    terminal: &mut DefaultTerminal,
    mut session: SessionContext,
    mut ui: UiState,
) -> anyhow::Result<()> {
    let mut event_stream = EventStream::new();

    // Redraws pick up terminal resizes between key presses.
    let mut render_tick = tokio::time::interval(Duration::from_millis(250));
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        let action = {
                            let view = render(&session);
                            input::handle_key(key_event, &mut ui, &view)
                        };
                        match action {
                            Some(Action::Quit) => {
                                info!("quit requested");
                                break;
                            }
                            Some(Action::Session(command)) => {
                                dispatch(&mut session, &mut ui, command);
                            }
                            None => {}
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        warn!("terminal input error: {}", e);
                        break;
                    }
                    None => break,
                }
            }

            _ = render_tick.tick() => {}
        }

        terminal.draw(|frame| render_frame(frame, &render(&session), &ui))?;
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use ffdash_core::grid::edited_rows;
    use ffdash_core::DraftStatus;

    #[test]
    fn ui_state_uses_display_config() {
        let display = DisplayConfig {
            precision: 3,
            page_size: 5,
        };
        let ui = UiState::new(&display);
        assert_eq!(ui.precision, 3);
        assert_eq!(ui.page_size, 5);
        assert_eq!(ui.mode, InputMode::Normal);
        assert!(!ui.confirm_quit);
        assert!(ui.status.is_none());
    }

    #[test]
    fn dispatch_commit_reports_change() {
        let mut session = draft_session();
        let mut ui = UiState::default();
        let rows = edited_rows(&render(&session).rows, "Tyreek Hill", DraftStatus::OtherTeam);
        dispatch(&mut session, &mut ui, Command::CommitEdits(rows));
        let status = ui.status.unwrap();
        assert!(!status.is_error);
        assert_eq!(status.text, "Tyreek Hill: False -> Other Team");
        assert_eq!(session.draft_log().len(), 1);
    }

    #[test]
    fn dispatch_surfaces_unknown_key() {
        let mut session = draft_session();
        let mut ui = UiState::default();
        let mut ghost = ffdash_core::PlayerRecord::new("Ghost", "RB");
        ghost.drafted = DraftStatus::MyTeam;
        dispatch(&mut session, &mut ui, Command::CommitEdits(vec![ghost]));
        let status = ui.status.unwrap();
        assert!(status.is_error);
        assert!(status.text.contains("Ghost"));
        assert!(session.draft_log().is_empty());
    }

    #[test]
    fn dispatch_rejects_edits_in_stats_app() {
        let mut session = stats_session();
        let mut ui = UiState::default();
        dispatch(&mut session, &mut ui, Command::CommitEdits(Vec::new()));
        assert!(ui.status.unwrap().is_error);
    }

    #[test]
    fn help_text_depends_on_app_and_mode() {
        assert!(help_text(AppKind::Stats, InputMode::Normal).contains("t:Team"));
        assert!(help_text(AppKind::Draft, InputMode::Normal).contains("t:Round"));
        assert!(help_text(AppKind::Draft, InputMode::Search).contains("Esc:Clear search"));
    }

    #[test]
    fn full_frame_renders_both_apps() {
        for session in [stats_session(), draft_session()] {
            let mut terminal = test_terminal(140, 30);
            let view = render(&session);
            let ui = UiState::default();
            terminal.draw(|frame| render_frame(frame, &view, &ui)).unwrap();
            let text = buffer_text(terminal.backend().buffer());
            assert!(text.contains("Select a player"));
            assert!(text.contains("q:Quit"));
        }
    }

    #[test]
    fn quit_dialog_overlays_frame() {
        let session = stats_session();
        let mut terminal = test_terminal(100, 30);
        let view = render(&session);
        let ui = UiState {
            confirm_quit: true,
            ..UiState::default()
        };
        terminal.draw(|frame| render_frame(frame, &view, &ui)).unwrap();
        assert!(buffer_text(terminal.backend().buffer()).contains("Quit?"));
    }
}
