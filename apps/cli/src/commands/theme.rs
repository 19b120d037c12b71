//! # Theme Commands
//!
//! Light/dark preference, persisted under `@shopsync_theme`.

use tracing::{debug, warn};

use crate::error::ApiError;
use crate::state::{DbState, ThemeState, THEME_KEY};
use shopsync_core::ColorScheme;

pub async fn get_theme(theme: &ThemeState) -> ColorScheme {
    theme.current().await
}

/// Stores and applies `scheme`.
pub async fn set_theme(db: &DbState, theme: &ThemeState, scheme: ColorScheme) -> Result<ColorScheme, ApiError> {
    db.inner()?.settings().set(THEME_KEY, scheme.as_str()).await?;
    theme.replace(scheme).await;

    debug!(%scheme, "Theme set");
    Ok(scheme)
}

/// Switches light ↔ dark.
pub async fn toggle_theme(db: &DbState, theme: &ThemeState) -> Result<ColorScheme, ApiError> {
    let next = theme.current().await.toggled();
    set_theme(db, theme, next).await
}

/// Loads the stored preference. Missing or unknown values mean light.
pub async fn restore_theme(db: &DbState, theme: &ThemeState) -> Result<ColorScheme, ApiError> {
    let scheme = match db.inner()?.settings().get(THEME_KEY).await? {
        None => ColorScheme::default(),
        Some(value) => ColorScheme::parse(&value).unwrap_or_else(|| {
            warn!(value = %value, "Unknown stored theme, using light");
            ColorScheme::default()
        }),
    };

    theme.replace(scheme).await;
    Ok(scheme)
}
