//! OS appearance (light/dark) detection
//!
//! The appearance source is a synchronous, point-in-time read with no
//! subscription behavior. Hosts where detection is unsupported or fails
//! report [`SystemAppearance::Unspecified`] and let the caller pick a
//! default.

use serde::{Deserialize, Serialize};

/// Host-level UI appearance preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SystemAppearance {
    /// The host prefers light UI
    Light,
    /// The host prefers dark UI
    Dark,
    /// The host did not report a preference
    #[default]
    Unspecified,
}

impl std::fmt::Display for SystemAppearance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SystemAppearance::Light => write!(f, "light"),
            SystemAppearance::Dark => write!(f, "dark"),
            SystemAppearance::Unspecified => write!(f, "unspecified"),
        }
    }
}

/// Capability interface for querying the host appearance
pub trait AppearanceSource: Send + Sync {
    /// Read the appearance preference at this moment
    fn current(&self) -> SystemAppearance;
}

/// Appearance source that always reports a fixed value
///
/// Used on headless hosts and in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedAppearance(pub SystemAppearance);

impl AppearanceSource for FixedAppearance {
    fn current(&self) -> SystemAppearance {
        self.0
    }
}

/// Best-effort system appearance probe
///
/// Detection shells out to the host's own tooling, so it stays dependency
/// free and degrades cleanly: any failure reports `Unspecified`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemAppearanceProbe;

impl SystemAppearanceProbe {
    /// Create a new probe
    pub fn new() -> Self {
        Self
    }
}

impl AppearanceSource for SystemAppearanceProbe {
    fn current(&self) -> SystemAppearance {
        let appearance = detect();
        if appearance == SystemAppearance::Unspecified {
            tracing::debug!("Host did not report an appearance preference");
        }
        appearance
    }
}

#[cfg(target_os = "macos")]
fn detect() -> SystemAppearance {
    // `AppleInterfaceStyle` only exists while dark mode is on; a failed read
    // with a live `defaults` binary means light.
    match std::process::Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
    {
        Ok(output) if output.status.success() => {
            if String::from_utf8_lossy(&output.stdout)
                .trim()
                .eq_ignore_ascii_case("dark")
            {
                SystemAppearance::Dark
            } else {
                SystemAppearance::Unspecified
            }
        }
        Ok(_) => SystemAppearance::Light,
        Err(_) => SystemAppearance::Unspecified,
    }
}

#[cfg(target_os = "windows")]
fn detect() -> SystemAppearance {
    // AppsUseLightTheme: 0x1 = light, 0x0 = dark
    match std::process::Command::new("reg")
        .args([
            "query",
            r"HKCU\Software\Microsoft\Windows\CurrentVersion\Themes\Personalize",
            "/v",
            "AppsUseLightTheme",
        ])
        .output()
    {
        Ok(output) if output.status.success() => {
            let stdout = String::from_utf8_lossy(&output.stdout);
            if stdout.contains("0x0") {
                SystemAppearance::Dark
            } else if stdout.contains("0x1") {
                SystemAppearance::Light
            } else {
                SystemAppearance::Unspecified
            }
        }
        _ => SystemAppearance::Unspecified,
    }
}

#[cfg(target_os = "linux")]
fn detect() -> SystemAppearance {
    match std::process::Command::new("gsettings")
        .args(["get", "org.gnome.desktop.interface", "color-scheme"])
        .output()
    {
        Ok(output) if output.status.success() => {
            let scheme = String::from_utf8_lossy(&output.stdout);
            if scheme.contains("prefer-dark") {
                SystemAppearance::Dark
            } else if scheme.contains("prefer-light") {
                SystemAppearance::Light
            } else {
                SystemAppearance::Unspecified
            }
        }
        _ => SystemAppearance::Unspecified,
    }
}

#[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
fn detect() -> SystemAppearance {
    SystemAppearance::Unspecified
}
