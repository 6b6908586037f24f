//! Light/dark theme values and their DOM representation.
//!
//! The active theme is mirrored onto a `data-theme` attribute on `<html>` and
//! onto the navbar toggle icon. The icon shows the theme the user would
//! switch *to*: a moon while light, a sun while dark.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ClientConfig;
use crate::dom::DomWrite;

/// One of the two supported color themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a stored theme value. Anything other than `light`/`dark` is rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Font Awesome classes for the toggle icon.
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fas fa-moon",
            Self::Dark => "fas fa-sun",
        }
    }

    /// DOM writes that make the page reflect this theme.
    pub fn writes(self, config: &ClientConfig) -> Vec<DomWrite> {
        vec![
            DomWrite::root_attribute(&config.theme_attribute, self.as_str()),
            DomWrite::class_name(&config.theme_icon_id, self.icon_class()),
        ]
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for theme names other than `light` and `dark`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme `{0}`; expected `light` or `dark`")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownTheme(s.to_owned()))
    }
}
