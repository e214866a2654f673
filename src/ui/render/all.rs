use super::{footer, log, register, toasts, vote_dialog, voting, Frame};
use crate::state::{State, View};
use ratatui::layout::{Constraint, Direction, Layout};

const LOG_PANEL_HEIGHT: u16 = 10;
const FOOTER_HEIGHT: u16 = 1;

/// Render all widgets according to state.
///
pub fn all(frame: &mut Frame, state: &State) {
    let size = frame.size();
    let mut constraints = vec![Constraint::Min(8)];
    if state.is_log_panel_open() {
        constraints.push(Constraint::Length(LOG_PANEL_HEIGHT));
    }
    constraints.push(Constraint::Length(FOOTER_HEIGHT));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    match state.current_view() {
        View::Voting => voting(frame, rows[0], state),
        View::Register => register(frame, rows[0], state),
    }
    if state.is_log_panel_open() {
        log(frame, rows[1], state);
    }
    footer(frame, rows[rows.len() - 1], state);

    // Overlays go last so they sit on top
    if state.is_vote_dialog_open() || state.is_submitting_vote() {
        vote_dialog(frame, size, state);
    }
    toasts(frame, size, state);
}
