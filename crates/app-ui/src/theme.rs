//! Design system and themes for Pawtrail
//!
//! Themes are immutable value objects: a fixed mapping from semantic color
//! roles to concrete hex colors, plus the two gradient sequences used for
//! hero banners and card accents. Two themes exist (light and dark); the
//! active one is selected by [`ThemeMode`] and never mutated.
//!
//! # Usage
//!
//! ```rust
//! use app_ui::theme::{get_theme, ThemeMode};
//!
//! let theme = get_theme(ThemeMode::Light);
//! let primary = &theme.colors.primary;
//! let hero = &theme.gradients.sunset;
//! ```

use serde::{Deserialize, Serialize};

/// A color represented as an RGB hex string (e.g., "#FFFFFF")
pub type Color = String;

/// Parse a hex color string to RGB components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() < 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Convert RGB to hex string
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

// =============================================================================
// Brand Colors
// =============================================================================

/// Pawtrail brand colors derived from the logo
pub mod brand {
    /// Primary brand color (sunset coral)
    pub const PRIMARY: &str = "#FF6B4A";

    /// Secondary brand color (meadow teal)
    pub const SECONDARY: &str = "#2BB39B";

    /// Accent gold (collar tag)
    pub const ACCENT_GOLD: &str = "#F5A623";

    /// Pure white
    pub const WHITE: &str = "#FFFFFF";

    /// Warm near-black (dark kennel)
    pub const INK: &str = "#141210";
}

// =============================================================================
// Theme Mode
// =============================================================================

/// Theme mode enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl ThemeMode {
    /// The string this mode persists as
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// The other mode
    pub fn opposite(&self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Check if this is the dark mode
    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(format!("Unknown theme mode: {}", s)),
        }
    }
}

// =============================================================================
// Semantic Colors
// =============================================================================

/// Semantic colors for a theme
///
/// Every UI surface picks from these roles; nothing reads raw brand colors
/// directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    /// Primary action color (buttons, links, active tabs)
    pub primary: Color,
    /// Secondary action color (chips, badges, highlights)
    pub secondary: Color,
    /// Main background color
    pub background: Color,
    /// Elevated surface color (cards, sheets, headers)
    pub surface: Color,
    /// Primary text color
    pub text: Color,
    /// Secondary/muted text color
    pub text_secondary: Color,
    /// Border and divider color
    pub border: Color,
    /// Success color (adoption confirmed, message sent)
    pub success: Color,
    /// Warning color (pending applications, expiring listings)
    pub warning: Color,
    /// Error color (failed actions, destructive buttons)
    pub error: Color,
}

// =============================================================================
// Gradients
// =============================================================================

/// Gradient color sequences
///
/// Each field is an ordered sequence of stops, first to last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gradients {
    /// Hero/onboarding gradient (coral into gold)
    pub sunset: Vec<Color>,
    /// Card accent gradient (teal into green)
    pub meadow: Vec<Color>,
}

// =============================================================================
// Theme Definition
// =============================================================================

/// Complete theme definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Which mode this theme renders
    pub mode: ThemeMode,
    /// Semantic colors
    pub colors: ThemeColors,
    /// Gradient definitions
    pub gradients: Gradients,
}

impl Theme {
    /// Check if this is the dark theme
    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }
}

// =============================================================================
// Light Theme
// =============================================================================

/// Create the light theme
pub fn light_theme() -> Theme {
    Theme {
        mode: ThemeMode::Light,
        colors: ThemeColors {
            primary: "#FF6B4A".to_string(),        // Sunset coral
            secondary: "#2BB39B".to_string(),      // Meadow teal
            background: "#FFFFFF".to_string(),
            surface: "#F7F5F2".to_string(),        // Warm off-white
            text: "#1F1A17".to_string(),
            text_secondary: "#6B625C".to_string(),
            border: "#E8E2DC".to_string(),
            success: "#3BA55D".to_string(),
            warning: "#F5A623".to_string(),        // Collar gold
            error: "#E5484D".to_string(),
        },
        gradients: Gradients {
            sunset: vec![
                "#FF6B4A".to_string(),
                "#FF8F5E".to_string(),
                "#F5A623".to_string(),
            ],
            meadow: vec![
                "#2BB39B".to_string(),
                "#5BC48F".to_string(),
                "#8FD674".to_string(),
            ],
        },
    }
}

// =============================================================================
// Dark Theme
// =============================================================================

/// Create the dark theme
pub fn dark_theme() -> Theme {
    Theme {
        mode: ThemeMode::Dark,
        colors: ThemeColors {
            primary: "#FF8A66".to_string(),        // Lighter coral for dark
            secondary: "#3FD0B6".to_string(),
            background: "#141210".to_string(),     // Warm near-black
            surface: "#1F1B18".to_string(),
            text: "#F5F2EF".to_string(),
            text_secondary: "#A89F98".to_string(),
            border: "#2E2925".to_string(),
            success: "#46C06B".to_string(),
            warning: "#FFB84D".to_string(),
            error: "#F26D72".to_string(),
        },
        gradients: Gradients {
            sunset: vec![
                "#FF8A66".to_string(),
                "#FFA070".to_string(),
                "#FFC163".to_string(),
            ],
            meadow: vec![
                "#3FD0B6".to_string(),
                "#6BD9A4".to_string(),
                "#9FE58A".to_string(),
            ],
        },
    }
}

/// Get the theme for a mode
pub fn get_theme(mode: ThemeMode) -> Theme {
    match mode {
        ThemeMode::Light => light_theme(),
        ThemeMode::Dark => dark_theme(),
    }
}
