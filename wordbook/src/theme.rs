use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme {0:?}, expected \"light\" or \"dark\"")]
pub struct UnknownTheme(pub String);

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Bold heading in the theme's accent colour.
    pub fn heading(self, text: &str) -> String {
        self.paint_heading(text, colour_enabled())
    }

    pub fn accent(self, text: &str) -> String {
        self.paint_accent(text, colour_enabled())
    }

    fn paint_heading(self, text: &str, colour: bool) -> String {
        match self {
            Theme::Light => paint("1;34", text, colour),
            Theme::Dark => paint("1;93", text, colour),
        }
    }

    fn paint_accent(self, text: &str, colour: bool) -> String {
        match self {
            Theme::Light => paint("35", text, colour),
            Theme::Dark => paint("96", text, colour),
        }
    }
}

/// Escape codes only make sense on a terminal, not in a pipe or file.
fn colour_enabled() -> bool {
    static COLOUR: OnceLock<bool> = OnceLock::new();
    *COLOUR.get_or_init(|| atty::is(atty::Stream::Stdout))
}

fn paint(code: &str, text: &str, colour: bool) -> String {
    if colour {
        format!("\x1b[{code}m{text}\x1b[0m")
    } else {
        text.to_owned()
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match &s.trim().to_ascii_lowercase()[..] {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(UnknownTheme(other.to_owned())),
        }
    }
}
