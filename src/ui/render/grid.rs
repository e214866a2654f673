use super::widgets::styling;
use super::Frame;
use crate::api::Idea;
use crate::state::{IdeaPage, State, IDEAS_PER_PAGE};
use crate::ui::Theme;
use crate::utils::text::{single_line, truncate};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub const GRID_COLUMNS: usize = 4;
pub const GRID_ROWS: usize = IDEAS_PER_PAGE / GRID_COLUMNS;

/// Render the ideas of the current page as a grid of cards.
///
pub fn grid(frame: &mut Frame, size: Rect, page: &IdeaPage, state: &State) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, GRID_ROWS as u32); GRID_ROWS])
        .split(size);

    let cursor = state.current_card_index();
    for (row_index, row) in rows.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
            .split(*row);
        for (column_index, cell) in cells.iter().enumerate() {
            let index = row_index * GRID_COLUMNS + column_index;
            if let Some(idea) = page.ideas.get(index) {
                card(frame, *cell, idea, index == cursor, state.get_theme());
            }
        }
    }
}

fn card(frame: &mut Frame, size: Rect, idea: &Idea, selected: bool, theme: &Theme) {
    let title_width = size.width.saturating_sub(4) as usize;
    let title = truncate(&single_line(&idea.title), title_width);
    let block = if selected {
        Block::default()
            .borders(Borders::ALL)
            .border_style(styling::active_block_border_style(theme))
            .title(Span::styled(
                title,
                styling::active_list_item_style(theme),
            ))
    } else {
        Block::default()
            .borders(Borders::ALL)
            .border_style(styling::normal_block_border_style(theme))
            .title(Span::styled(title, styling::current_list_item_style(theme)))
    };

    let lines = vec![
        Line::from(Span::styled(
            format!("By {}", idea.owner.name),
            styling::secondary_text_style(theme),
        )),
        Line::from(Span::styled(
            format!("Total Votes : {}", idea.vote_count()),
            styling::normal_text_style(theme)
                .fg(theme.success.to_color())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            single_line(&idea.description),
            styling::normal_text_style(theme),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, size);
}
