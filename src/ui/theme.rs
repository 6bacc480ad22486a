//! # Theme System
//!
//! Every color the portfolio draws comes from a [`Theme`]. Rendering code
//! never names a `ratatui::style::Color` directly.
//!
//! ## Built-in Themes
//!
//! - **Catppuccin Mocha** (default)
//! - **Catppuccin Macchiato**
//! - **Dracula**
//! - **Gruvbox Dark**
//! - **Nord**
//! - **Phosphor** - green-on-black CRT
//! - **Amber** - amber monochrome terminal

use ratatui::style::Color;

/// Colors grouped by what they paint.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Name accepted by `--theme` and stored in the config file.
    pub name: &'static str,

    /// Panel background.
    pub bg: Color,
    /// Body text.
    pub fg: Color,
    /// Muted text: separators, hints, disabled controls, footer.
    pub fg_dim: Color,

    /// Prompt, focused borders, enabled nav controls.
    pub accent: Color,
    /// Clickable commands in the boot output and welcome card.
    pub link: Color,
    /// Headings inside the detail panel.
    pub heading: Color,
    /// Technology and skill pills.
    pub pill: Color,

    /// Friendly notices.
    pub success: Color,
    /// "Permission denied" and "command not found".
    pub error: Color,

    /// Background of the highlighted quick link.
    pub selection_bg: Color,
}

impl Theme {
    /// All built-in themes, default first.
    pub fn all() -> &'static [Theme] {
        &BUILT_IN_THEMES
    }

    /// Find a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        BUILT_IN_THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name.trim()))
    }

    pub fn default_theme() -> &'static Theme {
        &BUILT_IN_THEMES[0]
    }
}

static BUILT_IN_THEMES: [Theme; 7] = [
    Theme {
        name: "Catppuccin Mocha",
        bg: Color::Rgb(30, 30, 46),             // base
        fg: Color::Rgb(205, 214, 244),          // text
        fg_dim: Color::Rgb(108, 112, 134),      // overlay0
        accent: Color::Rgb(166, 227, 161),      // green
        link: Color::Rgb(137, 180, 250),        // blue
        heading: Color::Rgb(249, 226, 175),     // yellow
        pill: Color::Rgb(203, 166, 247),        // mauve
        success: Color::Rgb(166, 227, 161),     // green
        error: Color::Rgb(243, 139, 168),       // red
        selection_bg: Color::Rgb(69, 71, 90),   // surface1
    },
    Theme {
        name: "Catppuccin Macchiato",
        bg: Color::Rgb(36, 39, 58),             // base
        fg: Color::Rgb(202, 211, 245),          // text
        fg_dim: Color::Rgb(110, 115, 141),      // overlay0
        accent: Color::Rgb(166, 218, 149),      // green
        link: Color::Rgb(138, 173, 244),        // blue
        heading: Color::Rgb(238, 212, 159),     // yellow
        pill: Color::Rgb(198, 160, 246),        // mauve
        success: Color::Rgb(166, 218, 149),     // green
        error: Color::Rgb(237, 135, 150),       // red
        selection_bg: Color::Rgb(73, 77, 100),  // surface1
    },
    Theme {
        name: "Dracula",
        bg: Color::Rgb(40, 42, 54),
        fg: Color::Rgb(248, 248, 242),
        fg_dim: Color::Rgb(98, 114, 164),
        accent: Color::Rgb(80, 250, 123),
        link: Color::Rgb(139, 233, 253),
        heading: Color::Rgb(241, 250, 140),
        pill: Color::Rgb(189, 147, 249),
        success: Color::Rgb(80, 250, 123),
        error: Color::Rgb(255, 85, 85),
        selection_bg: Color::Rgb(68, 71, 90),
    },
    Theme {
        name: "Gruvbox Dark",
        bg: Color::Rgb(40, 40, 40),
        fg: Color::Rgb(235, 219, 178),
        fg_dim: Color::Rgb(146, 131, 116),
        accent: Color::Rgb(184, 187, 38),
        link: Color::Rgb(131, 165, 152),
        heading: Color::Rgb(250, 189, 47),
        pill: Color::Rgb(211, 134, 155),
        success: Color::Rgb(184, 187, 38),
        error: Color::Rgb(251, 73, 52),
        selection_bg: Color::Rgb(80, 73, 69),
    },
    Theme {
        name: "Nord",
        bg: Color::Rgb(46, 52, 64),
        fg: Color::Rgb(216, 222, 233),
        fg_dim: Color::Rgb(76, 86, 106),
        accent: Color::Rgb(163, 190, 140),
        link: Color::Rgb(136, 192, 208),
        heading: Color::Rgb(235, 203, 139),
        pill: Color::Rgb(180, 142, 173),
        success: Color::Rgb(163, 190, 140),
        error: Color::Rgb(191, 97, 106),
        selection_bg: Color::Rgb(67, 76, 94),
    },
    Theme {
        name: "Phosphor",
        bg: Color::Rgb(5, 12, 5),
        fg: Color::Rgb(51, 255, 102),
        fg_dim: Color::Rgb(26, 128, 51),
        accent: Color::Rgb(102, 255, 153),
        link: Color::Rgb(153, 255, 187),
        heading: Color::Rgb(204, 255, 221),
        pill: Color::Rgb(51, 204, 102),
        success: Color::Rgb(102, 255, 153),
        error: Color::Rgb(255, 85, 85),
        selection_bg: Color::Rgb(18, 64, 30),
    },
    Theme {
        name: "Amber",
        bg: Color::Rgb(16, 10, 0),
        fg: Color::Rgb(255, 176, 0),
        fg_dim: Color::Rgb(128, 88, 0),
        accent: Color::Rgb(255, 204, 102),
        link: Color::Rgb(255, 221, 153),
        heading: Color::Rgb(255, 235, 190),
        pill: Color::Rgb(230, 150, 20),
        success: Color::Rgb(255, 204, 102),
        error: Color::Rgb(255, 96, 64),
        selection_bg: Color::Rgb(64, 42, 0),
    },
];
