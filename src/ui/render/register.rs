use super::widgets::styling;
use super::Frame;
use crate::state::State;
use crate::ui::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub const BANNER: &str = r"
  ____ __        __       _
 / ___|\ \      / /      | |
 \___ \ \ \ /\ / /    _  | |
  ___) | \ V  V /    | |_| |
 |____/   \_/\_/      \___/
";

const ABOUT: [&str; 4] = [
    "Startup Weekend Jaipur is a three-day program where aspiring entrepreneurs can experience the startup life.",
    "You get the best mentors, investors, co-founders, and sponsors to help you learn what it really takes to innovate, disrupt, and start a business.",
    "It's about pitching, business model creation, prototyping, designing, and market validation, in a friendly and supportive team environment.",
    "You have 54 hours to change the world!",
];

const DETAILS: [&str; 2] = [
    "Duration: 3 days (Friday to Sunday)",
    "Registration Fee: ₹800",
];

/// Label and placeholder of every registration form field.
///
const FORM_FIELDS: [(&str, &str); 8] = [
    ("Name", "Enter your name"),
    ("Registration Number", "Enter your registration number"),
    ("Branch", "Enter your branch"),
    ("Year of Study", "Enter your year of study"),
    ("Residence", "Select your residence (Hosteller / Day Scholar)"),
    ("Outlook ID", "Enter your Outlook ID"),
    ("Transaction ID", "Enter your transaction ID"),
    ("Payment Screenshot", "Attach your payment screenshot"),
];

const GUIDELINES: &str = "By checking the box below, you acknowledge that your provided information will be used in accordance with the relevant SWJ guidelines.";
const PAYMENT_QR: &str = "Payment QR Code: qr.png";

/// Render the static registration information and form.
///
pub fn register(frame: &mut Frame, size: Rect, state: &State) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(size);

    about(frame, columns[0], state);
    form(frame, columns[1], state);
}

fn about(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let mut lines: Vec<Line> = BANNER
        .lines()
        .map(|line| Line::from(Span::styled(line, styling::banner_style(theme))))
        .collect();
    lines.push(Line::from(""));
    for paragraph in ABOUT {
        lines.push(Line::from(Span::styled(
            paragraph,
            styling::normal_text_style(theme),
        )));
        lines.push(Line::from(""));
    }
    for detail in DETAILS {
        lines.push(Line::from(Span::styled(
            detail,
            styling::secondary_text_style(theme),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styling::normal_block_border_style(theme)),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, size);
}

/// Return the lines of the registration form.
///
fn form_lines(theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![];
    for (label, placeholder) in FORM_FIELDS {
        lines.push(Line::from(Span::styled(
            label,
            styling::current_list_item_style(theme),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", placeholder),
            styling::muted_text_style(theme),
        )));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(vec![
        Span::styled("[ ] ", styling::active_list_item_style(theme)),
        Span::styled(GUIDELINES, styling::normal_text_style(theme)),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        PAYMENT_QR,
        styling::secondary_text_style(theme).add_modifier(Modifier::ITALIC),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[ Submit ]",
        styling::button_style(theme, false),
    )));
    lines
}

fn form(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let lines = form_lines(theme);
    let max_scroll = lines.len().saturating_sub(1) as u16;
    let scroll = state.get_register_scroll().min(max_scroll);

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styling::active_block_border_style(theme))
                .title(Span::styled(
                    "Registration Form",
                    styling::active_block_title_style(),
                )),
        )
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, size);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_lists_every_field_with_placeholder() {
        let text: Vec<String> = form_lines(&Theme::default())
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        for (label, placeholder) in FORM_FIELDS {
            assert!(text.iter().any(|line| line == label));
            assert!(text.iter().any(|line| line.contains(placeholder)));
        }
        assert!(text.iter().any(|line| line.contains("qr.png")));
        assert!(text.iter().any(|line| line.contains("Day Scholar")));
    }
}
