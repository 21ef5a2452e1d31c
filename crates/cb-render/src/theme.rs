use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Persisted theme choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn palette(self) -> CanvasTheme {
        match self {
            ThemeMode::Dark => CanvasTheme::dark(),
            ThemeMode::Light => CanvasTheme::light(),
        }
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(ThemeMode::Dark),
            "light" => Ok(ThemeMode::Light),
            _ => Err(format!("unknown theme `{s}`")),
        }
    }
}

/// Colors for the canvas background and chrome drawn over the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasTheme {
    pub bg: &'static str,
    pub page_bg: &'static str,
    pub label: &'static str,
    pub accent: &'static str,
    pub badge_bg: &'static str,
    pub badge_text: &'static str,
}

impl CanvasTheme {
    /// Deep-space canvas.
    pub fn dark() -> Self {
        Self {
            bg: "#0a0a1a",
            page_bg: "#050510",
            label: "#ffffff",
            accent: "#ffd700",
            badge_bg: "rgba(0, 0, 0, 0.5)",
            badge_text: "rgba(255, 255, 255, 0.9)",
        }
    }

    pub fn light() -> Self {
        Self {
            bg: "#f5f5f5",
            page_bg: "#f5f5f5",
            label: "#ffffff",
            accent: "#ffd700",
            badge_bg: "rgba(0, 0, 0, 0.5)",
            badge_text: "rgba(255, 255, 255, 0.9)",
        }
    }
}
