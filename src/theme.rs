use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Session storage key for the chosen theme.
pub const STORAGE_KEY: &str = "theme";

/// The server always renders the default theme, and hydration keeps
/// server-rendered classes and text. The stored theme must therefore be
/// read only once hydration is done, or the page shows the default while
/// the signal holds the stored value.
pub const READ_AFTER_HYDRATION: bool = true;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Classes for the page root.
    pub fn root_class(self) -> &'static str {
        match self {
            Self::Dark => "min-h-screen bg-slate-950 text-white overflow-hidden",
            Self::Light => "min-h-screen bg-slate-100 text-slate-900 overflow-hidden",
        }
    }

    /// Stroke and fill colour for the particle network, as `r, g, b`.
    pub fn particle_rgb(self) -> &'static str {
        match self {
            Self::Dark => "255, 255, 255",
            Self::Light => "15, 23, 42",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Dark => "Switch to light theme",
            Self::Light => "Switch to dark theme",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Dark => "☀",
            Self::Light => "☾",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dark => write!(f, "dark"),
            Self::Light => write!(f, "light"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme: {0}")]
pub struct ParseThemeError(String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}
