use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::search::parse_flag;

/// What the translation panel shows when there is nothing to translate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelMode {
    /// No panel at all
    #[default]
    Hide,
    /// A "No Results" panel
    Placeholder,
}

impl FromStr for PanelMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hide" | "hidden" => Ok(PanelMode::Hide),
            "placeholder" => Ok(PanelMode::Placeholder),
            other => Err(format!("unknown panel mode: {other}")),
        }
    }
}

fn default_panel_offset() -> f32 {
    25.0
}

fn default_panel_width() -> u16 {
    36
}

fn default_text_width() -> u16 {
    72
}

fn default_char_width() -> f32 {
    10.0
}

fn default_line_height() -> f32 {
    32.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub panel_mode: PanelMode,
    /// Distance between the top of the match and the top of the panel, in layout units
    #[serde(default = "default_panel_offset")]
    pub panel_offset: f32,
    /// Panel width in columns
    #[serde(default = "default_panel_width")]
    pub panel_width: u16,
    /// Sample text wrap width in columns
    #[serde(default = "default_text_width")]
    pub text_width: u16,
    /// Layout units per column
    #[serde(default = "default_char_width")]
    pub char_width: f32,
    /// Layout units per row
    #[serde(default = "default_line_height")]
    pub line_height: f32,
    /// Force ANSI highlighting on or off, `None` detects a terminal
    pub color: Option<bool>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            panel_mode: PanelMode::default(),
            panel_offset: default_panel_offset(),
            panel_width: default_panel_width(),
            text_width: default_text_width(),
            char_width: default_char_width(),
            line_height: default_line_height(),
            color: None,
        }
    }
}

impl UiConfig {
    pub fn new() -> Self {
        let panel_mode = env::var("PANEL_MODE")
            .ok()
            .and_then(|v| match v.parse() {
                Ok(mode) => Some(mode),
                Err(e) => {
                    tracing::warn!("Ignoring PANEL_MODE: {}", e);
                    None
                }
            })
            .unwrap_or_default();

        let text_width = env::var("TEXT_WIDTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_text_width);

        let color = env::var("COLOR").ok().and_then(|v| parse_flag(&v));

        Self {
            panel_mode,
            text_width,
            color,
            ..Self::default()
        }
    }
}
