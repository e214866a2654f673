use super::Frame;
use crate::state::{State, View};
use crate::ui::theme::ColorSpec;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Return the mode label, its color and the key hints for the current state.
///
fn mode_and_hints(state: &State) -> (&'static str, ColorSpec, &'static str) {
    let theme = state.get_theme();
    if state.is_submitting_vote() {
        return ("VOTE:", theme.footer_vote, " Submitting vote... Ctrl-c: quit");
    }
    if state.is_vote_dialog_open() {
        return (
            "VOTE:",
            theme.footer_vote,
            " Type code, Backspace: delete, Enter: confirm, Esc: cancel",
        );
    }
    match state.current_view() {
        View::Voting if state.is_search_mode() => (
            "SEARCH:",
            theme.footer_search,
            " Type to filter, Backspace: delete, Enter/Esc: done",
        ),
        View::Voting => (
            "NORMAL:",
            theme.footer_normal,
            " j/k: select, h/l: page, Enter/v: vote, /: search, r: reload, d: log, Tab: register, q: quit",
        ),
        View::Register => (
            "REGISTER:",
            theme.footer_normal,
            " j/k: scroll, d: log, Tab: vote, q: quit",
        ),
    }
}

/// Render footer widget according to state.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let (mode, mode_color, hints) = mode_and_hints(state);
    let mode_color = if state.is_log_panel_open() && !state.is_vote_dialog_open() {
        theme.footer_debug
    } else {
        mode_color
    };

    let controls_content = Line::from(vec![
        Span::styled(
            mode,
            Style::default()
                .fg(theme.text.to_color())
                .bg(mode_color.to_color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(hints, Style::default().fg(theme.warning.to_color())),
    ]);
    let controls_widget = Paragraph::new(controls_content).alignment(Alignment::Left);

    // Show active search query when browsing, otherwise show version
    let search_text = state.get_voting().search_text();
    let right_content = if *state.current_view() == View::Voting
        && !state.is_search_mode()
        && !search_text.is_empty()
    {
        Line::from(vec![Span::styled(
            format!("/{}", search_text),
            Style::default().fg(theme.text_muted.to_color()),
        )])
    } else {
        Line::from(vec![Span::styled(
            format!(" {}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(theme.accent.to_color()),
        )])
    };

    let right_content_width = right_content.width();
    let right_widget = Paragraph::new(right_content).alignment(Alignment::Right);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(right_content_width.try_into().unwrap_or(0)),
        ])
        .split(size);

    frame.render_widget(controls_widget, columns[0]);
    frame.render_widget(right_widget, columns[1]);
}
