//! Dark/light theme state.
//!
//! The theme only selects one of two fixed palettes. It is held for the
//! lifetime of the process and never persisted.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// A fixed set of presentation colors.
///
/// `ansi_*` fields are SGR parameter strings for terminal output; `css_*`
/// fields are CSS color values for HTML output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub ansi_text: &'static str,
    pub ansi_heading: &'static str,
    pub ansi_accent: &'static str,
    pub ansi_muted: &'static str,
    pub css_background: &'static str,
    pub css_text: &'static str,
    pub css_accent: &'static str,
}

pub const DARK_PALETTE: Palette = Palette {
    name: "dark",
    ansi_text: "97",
    ansi_heading: "1;96",
    ansi_accent: "95",
    ansi_muted: "90",
    css_background: "#0f172a",
    css_text: "#e2e8f0",
    css_accent: "#a78bfa",
};

pub const LIGHT_PALETTE: Palette = Palette {
    name: "light",
    ansi_text: "30",
    ansi_heading: "1;34",
    ansi_accent: "35",
    ansi_muted: "37",
    css_background: "#ffffff",
    css_text: "#1e293b",
    css_accent: "#6d28d9",
};

impl Theme {
    /// Flip between dark and light.
    pub fn toggle(&mut self) {
        *self = match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        };
    }

    pub fn palette(&self) -> &'static Palette {
        match self {
            Theme::Dark => &DARK_PALETTE,
            Theme::Light => &LIGHT_PALETTE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.palette().name
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(format!("unknown theme '{}': use dark or light", other)),
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
