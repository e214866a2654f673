use super::layout::centered_fixed;
use super::widgets::styling;
use super::Frame;
use crate::state::{State, PARTICIPANT_CODE_LENGTH};
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

const DIALOG_WIDTH: u16 = 60;
const DIALOG_HEIGHT: u16 = 12;
const CODE_PLACEHOLDER: &str = "Enter your participant code";

/// Render the vote confirmation dialog on top of the voting view.
///
pub fn vote_dialog(frame: &mut Frame, size: Rect, state: &State) {
    let vote = state.get_voting().vote();
    let idea = match vote.selected_idea() {
        Some(idea) => idea,
        None => return,
    };
    let theme = state.get_theme();
    let popup_area = centered_fixed(DIALOG_WIDTH, DIALOG_HEIGHT, size);
    frame.render_widget(Clear, popup_area);

    let code = vote.code().map(|code| code.as_str()).unwrap_or_default();
    let code_line = if code.is_empty() {
        Line::from(Span::styled(CODE_PLACEHOLDER, styling::muted_text_style(theme)))
    } else {
        Line::from(vec![
            Span::styled(
                code.to_owned(),
                styling::active_list_item_style(theme).add_modifier(Modifier::UNDERLINED),
            ),
            Span::styled(
                format!("  {}/{}", code.chars().count(), PARTICIPANT_CODE_LENGTH),
                styling::muted_text_style(theme),
            ),
        ])
    };

    let confirm_label = if state.is_submitting_vote() {
        " Confirming... "
    } else {
        " Confirm Vote "
    };
    let buttons = Line::from(vec![
        Span::styled(" Cancel (Esc) ", styling::secondary_text_style(theme)),
        Span::raw("   "),
        Span::styled(
            format!("{}(Enter) ", confirm_label),
            styling::button_style(theme, state.can_confirm_vote()),
        ),
    ]);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Please enter your participant code to vote for \"{}\".",
                idea.title
            ),
            styling::normal_text_style(theme),
        )),
        Line::from(""),
        code_line,
        Line::from(""),
        buttons,
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    "Confirm Your Vote",
                    styling::active_block_title_style().fg(theme.primary.to_color()),
                ))
                .border_style(styling::active_block_border_style(theme)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, popup_area);
}
