use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Braille frames cycled once per terminal tick.
///
pub const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Return the frame for the given spinner index.
///
pub fn frame(index: usize) -> &'static str {
    FRAMES[index % FRAMES.len()]
}

/// Return a centered spinner paragraph filling the given height.
///
pub fn widget(state: &State, height: u16, label: &str) -> Paragraph<'static> {
    let theme = state.get_theme();
    let mut lines: Vec<Line> = (0..height.saturating_sub(2) / 2).map(|_| Line::from("")).collect();
    lines.push(Line::from(vec![
        Span::styled(
            format!("{} ", frame(*state.get_spinner_index())),
            styling::active_list_item_style(theme),
        ),
        Span::styled(label.to_owned(), styling::muted_text_style(theme)),
    ]));
    Paragraph::new(lines).alignment(Alignment::Center)
}
