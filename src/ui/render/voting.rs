use super::grid::grid;
use super::widgets::{spinner, styling};
use super::Frame;
use crate::state::{IdeaPage, State};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const HEADING: &str = "Vote for your favorite idea!";
const SEARCH_PLACEHOLDER: &str = "Search";

/// Render the voting view: heading, search box, idea grid and pagination.
///
pub fn voting(frame: &mut Frame, size: Rect, state: &State) {
    let page = state.idea_page();
    let pagination_height = if page.shows_pagination() && !state.is_loading() {
        1
    } else {
        0
    };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(pagination_height),
        ])
        .split(size);

    heading(frame, rows[0], state);
    search_box(frame, rows[1], state);

    if state.is_loading() {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(styling::normal_block_border_style(state.get_theme()));
        frame.render_widget(
            spinner::widget(state, rows[2].height, "Loading ideas...").block(block),
            rows[2],
        );
        return;
    }

    if page.ideas.is_empty() {
        empty(frame, rows[2], state);
    } else {
        grid(frame, rows[2], &page, state);
    }

    if page.shows_pagination() {
        pagination(frame, rows[3], &page, state);
    }
}

fn heading(frame: &mut Frame, size: Rect, state: &State) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        HEADING,
        styling::banner_style(state.get_theme()).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(paragraph, size);
}

fn search_box(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let search_text = state.get_voting().search_text();
    let block = if state.is_search_mode() {
        Block::default()
            .borders(Borders::ALL)
            .border_style(styling::active_block_border_style(theme))
            .title(Span::styled(" / ", styling::active_block_title_style()))
    } else {
        Block::default()
            .borders(Borders::ALL)
            .border_style(styling::normal_block_border_style(theme))
            .title(" / ")
    };

    let mut spans = if search_text.is_empty() && !state.is_search_mode() {
        vec![Span::styled(SEARCH_PLACEHOLDER, styling::muted_text_style(theme))]
    } else {
        vec![Span::styled(
            search_text.to_owned(),
            styling::normal_text_style(theme),
        )]
    };
    if state.is_search_mode() {
        spans.push(Span::styled("█", styling::active_list_item_style(theme)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), size);
}

fn empty(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let message = if state.get_ideas().is_empty() {
        "No ideas yet. Press r to reload."
    } else {
        "No ideas match your search."
    };
    let mut lines: Vec<Line> = (0..size.height.saturating_sub(1) / 2)
        .map(|_| Line::from(""))
        .collect();
    lines.push(Line::from(Span::styled(
        message,
        styling::muted_text_style(theme),
    )));
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), size);
}

fn pagination(frame: &mut Frame, size: Rect, page: &IdeaPage, state: &State) {
    let theme = state.get_theme();
    let control = |label: &'static str, enabled: bool| {
        if enabled {
            Span::styled(label, styling::active_list_item_style(theme))
        } else {
            Span::styled(label, styling::muted_text_style(theme))
        }
    };
    let line = Line::from(vec![
        control("← Previous", page.has_previous()),
        Span::raw("   "),
        Span::styled(
            format!("Page {} of {}", page.current_page, page.total_pages),
            styling::normal_text_style(theme),
        ),
        Span::raw("   "),
        control("Next →", page.has_next()),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), size);
}
