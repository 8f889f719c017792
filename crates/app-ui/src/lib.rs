//! User interface foundation for Pawtrail
//!
//! This crate provides the design system for the Pawtrail app: the light
//! and dark themes, and the preference store that decides which one is
//! active, remembers the choice, and propagates changes to consumers.
//!
//! # Design System
//!
//! The palette is built around warm, pet-friendly colors:
//! - Primary: Sunset coral (#FF6B4A)
//! - Secondary: Meadow teal (#2BB39B)
//! - Accent: Collar gold (#F5A623)
//!
//! Two themes are supported:
//! - [`theme::ThemeMode::Light`] - Bright theme with white background
//! - [`theme::ThemeMode::Dark`] - Dark theme with warm near-black background
//!
//! # Modules
//!
//! - [`theme`] - Theme definitions, semantic colors, and gradients
//! - [`provider`] - Theme preference resolution, persistence, propagation
//!
//! # Example
//!
//! ```rust
//! use app_ui::theme::{get_theme, ThemeMode};
//!
//! let theme = get_theme(ThemeMode::Dark);
//! assert!(theme.is_dark());
//! let background = &theme.colors.background;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod provider;
pub mod theme;

pub use provider::{ThemePreferenceStore, THEME_PREFERENCE_KEY};
pub use theme::{get_theme, Theme, ThemeMode};
