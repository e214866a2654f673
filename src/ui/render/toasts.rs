use super::widgets::styling;
use super::Frame;
use crate::state::State;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 4;

/// Render active toasts stacked in the top right corner, newest on top.
///
pub fn toasts(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let width = TOAST_WIDTH.min(size.width);
    let mut y = size.y;
    for toast in state.get_toasts().iter().rev() {
        if y + TOAST_HEIGHT > size.y + size.height {
            break;
        }
        let area = Rect {
            x: size.x + size.width - width,
            y,
            width,
            height: TOAST_HEIGHT,
        };
        let style = styling::toast_style(theme, toast.variant);
        let paragraph = Paragraph::new(Line::from(Span::styled(
            toast.description.clone(),
            styling::normal_text_style(theme),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(style)
                .title(Span::styled(
                    toast.title.clone(),
                    style.patch(styling::active_block_title_style()),
                )),
        )
        .wrap(Wrap { trim: true });

        frame.render_widget(Clear, area);
        frame.render_widget(paragraph, area);
        y += TOAST_HEIGHT;
    }
}
