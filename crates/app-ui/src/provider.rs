//! Theme preference resolution, persistence, and propagation
//!
//! The preference store is the single source of truth for which theme is
//! active. It reads the stored preference once at startup and falls back to
//! the host appearance when there is none. Every change is published
//! synchronously; the persistence write that follows a toggle runs in the
//! background and never blocks or reverts the in-memory mode.

use std::sync::Arc;

use app_platform::{AppearanceSource, SystemAppearance};
use storage::PreferenceStore;
use tokio::sync::watch;

use crate::theme::{get_theme, Theme, ThemeMode};

/// Device-scoped key the theme preference is stored under
pub const THEME_PREFERENCE_KEY: &str = "device:theme";

/// Single source of truth for the active theme
///
/// Construct one instance at startup and hand clones to any component that
/// needs theme colors. Reads are synchronous and never fail; mutation
/// happens only through [`ThemePreferenceStore::toggle_theme`]. Storage
/// being unavailable degrades the store to a session-scoped, in-memory
/// toggle — never to an error the UI has to handle.
#[derive(Clone)]
pub struct ThemePreferenceStore {
    prefs: Arc<dyn PreferenceStore>,
    appearance: Arc<dyn AppearanceSource>,
    mode_tx: Arc<watch::Sender<ThemeMode>>,
}

impl ThemePreferenceStore {
    /// Create a new store with its collaborators
    ///
    /// The mode starts as light until [`ThemePreferenceStore::initialize`]
    /// resolves the stored preference.
    pub fn new(prefs: Arc<dyn PreferenceStore>, appearance: Arc<dyn AppearanceSource>) -> Self {
        let (mode_tx, _) = watch::channel(ThemeMode::Light);
        Self {
            prefs,
            appearance,
            mode_tx: Arc::new(mode_tx),
        }
    }

    /// Resolve the initial mode from storage, falling back to the host appearance
    ///
    /// Read failures and unrecognized stored values are treated as "no
    /// stored preference". The appearance source is consulted at most once,
    /// here; `unspecified` resolves to light.
    pub async fn initialize(&self) {
        let mode = match self.prefs.get(THEME_PREFERENCE_KEY).await {
            Ok(Some(stored)) => match stored.parse::<ThemeMode>() {
                Ok(mode) => mode,
                Err(_) => {
                    tracing::warn!("Ignoring unrecognized stored theme preference: {}", stored);
                    self.mode_from_appearance()
                }
            },
            Ok(None) => self.mode_from_appearance(),
            Err(e) => {
                tracing::warn!("Failed to read stored theme preference: {}", e);
                self.mode_from_appearance()
            }
        };

        self.mode_tx.send_replace(mode);
    }

    /// The currently active mode
    pub fn mode(&self) -> ThemeMode {
        *self.mode_tx.borrow()
    }

    /// The immutable theme for the currently active mode
    pub fn active_theme(&self) -> Theme {
        get_theme(self.mode())
    }

    /// Subscribe to mode changes
    ///
    /// The receiver holds the value current at subscription time and is
    /// marked changed on every toggle.
    pub fn subscribe(&self) -> watch::Receiver<ThemeMode> {
        self.mode_tx.subscribe()
    }

    /// Flip between light and dark, returning the new mode
    ///
    /// The in-memory mode changes before this function returns, so every
    /// reader and subscriber sees the new value immediately. The
    /// persistence write happens in the background; its failure is logged
    /// and the in-memory mode stays authoritative.
    pub fn toggle_theme(&self) -> ThemeMode {
        let next = self.mode().opposite();
        self.mode_tx.send_replace(next);
        self.persist(next);
        next
    }

    fn mode_from_appearance(&self) -> ThemeMode {
        // Hosts that report no preference get the light theme
        match self.appearance.current() {
            SystemAppearance::Dark => ThemeMode::Dark,
            SystemAppearance::Light | SystemAppearance::Unspecified => ThemeMode::Light,
        }
    }

    fn persist(&self, mode: ThemeMode) {
        let prefs = Arc::clone(&self.prefs);
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    if let Err(e) = prefs.set(THEME_PREFERENCE_KEY, mode.as_str()).await {
                        tracing::warn!("Failed to persist theme preference: {}", e);
                    }
                });
            }
            Err(_) => {
                // No runtime: same degradation as a failed write
                tracing::warn!("No async runtime, theme preference not persisted this session");
            }
        }
    }
}
