use crate::state::ToastVariant;
use crate::ui::theme::Theme;
use ratatui::style::{Modifier, Style};

/// Return the border style for active blocks.
///
pub fn active_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_active.to_color())
}

/// Return the border style for normal blocks.
///
pub fn normal_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_normal.to_color())
}

/// Return the title style for active blocks.
///
pub fn active_block_title_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Return the style for current list items.
///
pub fn current_list_item_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.text.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for active list items.
///
pub fn active_list_item_style(theme: &Theme) -> Style {
    current_list_item_style(theme).fg(theme.primary.to_color())
}

/// Return the style for normal text.
///
pub fn normal_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text.to_color())
}

/// Return the style for secondary text such as descriptions.
///
pub fn secondary_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text_secondary.to_color())
}

/// Return the style for hints and placeholders.
///
pub fn muted_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text_muted.to_color())
}

/// Return the style for the banner.
///
pub fn banner_style(theme: &Theme) -> Style {
    Style::default().fg(theme.banner.to_color())
}

/// Return the style of a button, dimmed when it cannot be pressed.
///
pub fn button_style(theme: &Theme, enabled: bool) -> Style {
    if enabled {
        Style::default()
            .fg(theme.success.to_color())
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default()
            .fg(theme.text_muted.to_color())
            .add_modifier(Modifier::DIM)
    }
}

/// Return the border and title style of a toast.
///
pub fn toast_style(theme: &Theme, variant: ToastVariant) -> Style {
    let color = match variant {
        ToastVariant::Success => theme.success,
        ToastVariant::Destructive => theme.error,
    };
    Style::default().fg(color.to_color())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_style_follows_variant() {
        let theme = Theme::default();
        assert_eq!(
            toast_style(&theme, ToastVariant::Success).fg,
            Some(theme.success.to_color())
        );
        assert_eq!(
            toast_style(&theme, ToastVariant::Destructive).fg,
            Some(theme.error.to_color())
        );
    }
}
