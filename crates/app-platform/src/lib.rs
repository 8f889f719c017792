//! Platform-specific code for Pawtrail
//!
//! This crate handles host-level queries the rest of the application
//! consumes as narrow capabilities, currently the OS appearance preference.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod appearance;

pub use appearance::{AppearanceSource, FixedAppearance, SystemAppearance, SystemAppearanceProbe};
