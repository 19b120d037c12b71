//! # Theme State
//!
//! Current light/dark preference, persisted under [`THEME_KEY`].

use shopsync_core::ColorScheme;
use tokio::sync::RwLock;

/// Settings key holding `light` or `dark`.
pub const THEME_KEY: &str = "@shopsync_theme";

#[derive(Debug, Default)]
pub struct ThemeState {
    scheme: RwLock<ColorScheme>,
}

impl ThemeState {
    /// Starts in light mode until a stored preference is restored.
    pub fn new() -> Self {
        ThemeState::default()
    }

    pub async fn current(&self) -> ColorScheme {
        *self.scheme.read().await
    }

    pub(crate) async fn replace(&self, scheme: ColorScheme) {
        *self.scheme.write().await = scheme;
    }
}
