use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    // Primary colors
    pub primary: ColorSpec,
    pub accent: ColorSpec,
    pub banner: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_secondary: ColorSpec,
    pub text_muted: ColorSpec,

    // Status colors
    pub success: ColorSpec,
    pub warning: ColorSpec,
    pub error: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_fg: ColorSpec,

    // Footer mode colors
    pub footer_search: ColorSpec,
    pub footer_vote: ColorSpec,
    pub footer_debug: ColorSpec,
    pub footer_normal: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    /// Build a color from a packed `0xRRGGBB` value.
    ///
    pub const fn hex(value: u32) -> Self {
        ColorSpec {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        }
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::tokyo_night()
    }
}

impl Theme {
    /// Rose Pine Dawn theme.
    ///
    pub fn rose_pine_dawn() -> Self {
        Theme {
            name: "rose-pine-dawn".to_string(),
            primary: ColorSpec::hex(0x907aa9),  // Iris
            accent: ColorSpec::hex(0xd7827e),   // Rose
            banner: ColorSpec::hex(0xb4637a),   // Love
            text: ColorSpec::hex(0x575279),     // Text
            text_secondary: ColorSpec::hex(0x797593), // Subtle
            text_muted: ColorSpec::hex(0x9893a5), // Muted
            success: ColorSpec::hex(0x56949f),  // Foam
            warning: ColorSpec::hex(0xea9d34),  // Gold
            error: ColorSpec::hex(0xb4637a),    // Love
            border_active: ColorSpec::hex(0x907aa9),
            border_normal: ColorSpec::hex(0xdfdad9),
            highlight_fg: ColorSpec::hex(0x286983), // Pine
            footer_search: ColorSpec::hex(0x56949f),
            footer_vote: ColorSpec::hex(0xd7827e),
            footer_debug: ColorSpec::hex(0xea9d34),
            footer_normal: ColorSpec::hex(0x907aa9),
        }
    }

    /// Rose Pine theme.
    ///
    pub fn rose_pine() -> Self {
        Theme {
            name: "rose-pine".to_string(),
            primary: ColorSpec::hex(0xc4a7e7),
            accent: ColorSpec::hex(0xebbcba),
            banner: ColorSpec::hex(0xeb6f92),
            text: ColorSpec::hex(0xe0def4),
            text_secondary: ColorSpec::hex(0x908caa),
            text_muted: ColorSpec::hex(0x6e6a86),
            success: ColorSpec::hex(0x9ccfd8),
            warning: ColorSpec::hex(0xf6c177),
            error: ColorSpec::hex(0xeb6f92),
            border_active: ColorSpec::hex(0xc4a7e7),
            border_normal: ColorSpec::hex(0x403d52),
            highlight_fg: ColorSpec::hex(0x31748f),
            footer_search: ColorSpec::hex(0x9ccfd8),
            footer_vote: ColorSpec::hex(0xebbcba),
            footer_debug: ColorSpec::hex(0xf6c177),
            footer_normal: ColorSpec::hex(0xc4a7e7),
        }
    }

    /// Dracula theme.
    ///
    pub fn dracula() -> Self {
        Theme {
            name: "dracula".to_string(),
            primary: ColorSpec::hex(0xbd93f9),  // Purple
            accent: ColorSpec::hex(0xff79c6),   // Pink
            banner: ColorSpec::hex(0xff79c6),
            text: ColorSpec::hex(0xf8f8f2),
            text_secondary: ColorSpec::hex(0xbfbfbf),
            text_muted: ColorSpec::hex(0x6272a4), // Comment
            success: ColorSpec::hex(0x50fa7b),
            warning: ColorSpec::hex(0xf1fa8c),
            error: ColorSpec::hex(0xff5555),
            border_active: ColorSpec::hex(0xbd93f9),
            border_normal: ColorSpec::hex(0x44475a),
            highlight_fg: ColorSpec::hex(0x8be9fd),
            footer_search: ColorSpec::hex(0x8be9fd),
            footer_vote: ColorSpec::hex(0xff79c6),
            footer_debug: ColorSpec::hex(0xffb86c),
            footer_normal: ColorSpec::hex(0xbd93f9),
        }
    }

    /// Catppuccin Mocha theme.
    ///
    pub fn catppuccin_mocha() -> Self {
        Theme {
            name: "catppuccin-mocha".to_string(),
            primary: ColorSpec::hex(0xcba6f7),  // Mauve
            accent: ColorSpec::hex(0xf5c2e7),   // Pink
            banner: ColorSpec::hex(0xf38ba8),   // Red
            text: ColorSpec::hex(0xcdd6f4),
            text_secondary: ColorSpec::hex(0xbac2de),
            text_muted: ColorSpec::hex(0x7f849c),
            success: ColorSpec::hex(0xa6e3a1),
            warning: ColorSpec::hex(0xf9e2af),
            error: ColorSpec::hex(0xf38ba8),
            border_active: ColorSpec::hex(0xcba6f7),
            border_normal: ColorSpec::hex(0x45475a),
            highlight_fg: ColorSpec::hex(0x89b4fa),
            footer_search: ColorSpec::hex(0x94e2d5),
            footer_vote: ColorSpec::hex(0xf5c2e7),
            footer_debug: ColorSpec::hex(0xfab387),
            footer_normal: ColorSpec::hex(0xcba6f7),
        }
    }

    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        Theme {
            name: "tokyo-night".to_string(),
            primary: ColorSpec::hex(0x7aa2f7),  // Blue
            accent: ColorSpec::hex(0xbb9af7),   // Magenta
            banner: ColorSpec::hex(0xf7768e),   // Red
            text: ColorSpec::hex(0xc0caf5),
            text_secondary: ColorSpec::hex(0xa9b1d6),
            text_muted: ColorSpec::hex(0x565f89),
            success: ColorSpec::hex(0x9ece6a),
            warning: ColorSpec::hex(0xe0af68),
            error: ColorSpec::hex(0xf7768e),
            border_active: ColorSpec::hex(0x7aa2f7),
            border_normal: ColorSpec::hex(0x3b4261),
            highlight_fg: ColorSpec::hex(0x7dcfff),
            footer_search: ColorSpec::hex(0x7dcfff),
            footer_vote: ColorSpec::hex(0xbb9af7),
            footer_debug: ColorSpec::hex(0xff9e64),
            footer_normal: ColorSpec::hex(0x7aa2f7),
        }
    }

    /// Get theme by name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "rose-pine-dawn" => Some(Self::rose_pine_dawn()),
            "rose-pine" => Some(Self::rose_pine()),
            "dracula" => Some(Self::dracula()),
            "catppuccin-mocha" => Some(Self::catppuccin_mocha()),
            "tokyo-night" => Some(Self::tokyo_night()),
            _ => None,
        }
    }

    /// Get list of all available theme names.
    ///
    pub fn available_themes() -> Vec<String> {
        vec![
            "rose-pine-dawn".to_string(),
            "rose-pine".to_string(),
            "dracula".to_string(),
            "catppuccin-mocha".to_string(),
            "tokyo-night".to_string(),
        ]
    }
}
