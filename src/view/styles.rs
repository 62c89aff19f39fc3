//! Colors and text styles.
//!
//! Every style goes through a [`Theme`] so `--no-color` and `NO_COLOR`
//! strip color everywhere at once. Modifiers such as bold survive.

use crate::state::Severity;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Colors off, for snapshot tests.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Theme =====

/// Resolved styles for every element of the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    colors: ColorConfig,
}

impl Theme {
    /// Theme over `colors`.
    pub fn new(colors: ColorConfig) -> Self {
        Self { colors }
    }

    fn fg(&self, color: Color) -> Style {
        if self.colors.colors_enabled() {
            Style::default().fg(color)
        } else {
            Style::default()
        }
    }

    /// Card titles.
    pub fn title(&self) -> Style {
        self.fg(Color::White).add_modifier(Modifier::BOLD)
    }

    /// Descriptions and secondary text.
    pub fn muted(&self) -> Style {
        self.fg(Color::Gray)
    }

    /// Labels such as "When:" and "Where:".
    pub fn label(&self) -> Style {
        self.fg(Color::DarkGray)
    }

    /// Primary chips: cutoff time, item counts.
    pub fn chip(&self) -> Style {
        self.fg(Color::Cyan)
    }

    /// The "Past Event" chip.
    pub fn past_chip(&self) -> Style {
        self.fg(Color::DarkGray).add_modifier(Modifier::ITALIC)
    }

    /// Filled rating stars.
    pub fn rating(&self) -> Style {
        self.fg(Color::Yellow)
    }

    /// Card borders.
    pub fn border(&self) -> Style {
        self.fg(Color::DarkGray)
    }

    /// Border of the selected card.
    pub fn selected_border(&self) -> Style {
        self.fg(Color::Yellow).add_modifier(Modifier::BOLD)
    }

    /// The selected screen tab.
    pub fn tab_selected(&self) -> Style {
        self.fg(Color::Yellow).add_modifier(Modifier::BOLD)
    }

    /// Key names in hints and help.
    pub fn key(&self) -> Style {
        self.fg(Color::Yellow).add_modifier(Modifier::BOLD)
    }

    /// Help section headers.
    pub fn section_header(&self) -> Style {
        self.fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    /// Footer notice by severity.
    pub fn notice(&self, severity: Severity) -> Style {
        let color = match severity {
            Severity::Success => Color::Green,
            Severity::Info => Color::Blue,
            Severity::Warning => Color::Yellow,
            Severity::Error => Color::Red,
        };
        self.fg(color).add_modifier(Modifier::BOLD)
    }

    /// Search line while typing.
    pub fn search_typing(&self) -> Style {
        if self.colors.colors_enabled() {
            Style::default().bg(Color::DarkGray)
        } else {
            Style::default()
        }
    }

    /// Cursor cell in the search line.
    pub fn cursor(&self) -> Style {
        if self.colors.colors_enabled() {
            Style::default()
                .bg(Color::White)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::REVERSED)
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====
