use colored::{Color, ColoredString, Colorize};
use std::env;
use std::io::IsTerminal;

use crate::zones::Zone;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmojiMode {
    Auto,
    Never,
}

impl EmojiMode {
    pub fn should_use_emoji(&self) -> bool {
        match self {
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
    pub emoji: EmojiMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            emoji: EmojiMode::Auto,
        }
    }
}

impl FormattingConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        // https://no-color.org
        if env::var("NO_COLOR").is_ok() {
            config.color = ColorMode::Never;
        }

        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                config.color = ColorMode::Never;
            }
        }

        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                config.color = ColorMode::Always;
            }
        }

        config
    }

    /// ASCII-only output with no colors and no emoji
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
            emoji: EmojiMode::Never,
        }
    }

    pub fn use_color(&self) -> bool {
        self.color.should_use_color()
    }

    /// Push the color decision into `colored`'s global switch
    pub fn apply(&self) {
        colored::control::set_override(self.use_color());
    }

    pub fn marker(&self, emoji: &'static str, fallback: &'static str) -> &'static str {
        if self.emoji.should_use_emoji() {
            emoji
        } else {
            fallback
        }
    }

    /// Zone label, colored when color is enabled
    pub fn zone(&self, zone: Zone) -> ColoredString {
        if self.use_color() {
            zone.label().color(zone_color(zone)).bold()
        } else {
            zone.label().normal()
        }
    }

    pub fn header(&self, text: &str) -> ColoredString {
        if self.use_color() {
            text.cyan().bold()
        } else {
            text.normal()
        }
    }

    pub fn warning(&self, text: &str) -> ColoredString {
        if self.use_color() {
            text.yellow()
        } else {
            text.normal()
        }
    }
}

/// Terminal color for a zone, roughly following the chart palette
pub fn zone_color(zone: Zone) -> Color {
    match zone {
        Zone::ChromosomeMismatch => Color::Cyan,
        Zone::WifeZone => Color::Green,
        Zone::DateZone => Color::Blue,
        Zone::DangerZone => Color::Red,
        Zone::FunZone => Color::Yellow,
        Zone::NoGoZone => Color::Magenta,
        Zone::Unknown => Color::White,
    }
}

fn detect_color_support() -> bool {
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }
    std::io::stdout().is_terminal()
}
