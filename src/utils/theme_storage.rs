//! Persistence of theme preferences.
//!
//! Native builds keep a small TOML file in the working directory; web
//! builds use the browser's localStorage under the keys the site has
//! always used. Every failure here degrades to defaults, never to a
//! crash.

use serde::{Deserialize, Serialize};

use crate::utils::theme::{ColorVisionProfile, ThemeMode};

pub const THEME_MODE_KEY: &str = "themeMode";
pub const COLOR_VISION_KEY: &str = "colorBlindnessType";

#[cfg(not(target_arch = "wasm32"))]
const PREFS_PATH: &str = "portfolio_theme.toml";

/// The two persisted theme choices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePrefs {
    pub mode: ThemeMode,
    pub profile: ColorVisionProfile,
}

#[cfg(not(target_arch = "wasm32"))]
fn read_prefs() -> Option<ThemePrefs> {
    let raw = std::fs::read_to_string(PREFS_PATH).ok()?;
    match toml::from_str(&raw) {
        Ok(prefs) => Some(prefs),
        Err(err) => {
            log::warn!("ignoring malformed {PREFS_PATH}: {err}");
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Saved light/dark choice, if any.
pub fn load_mode() -> Option<ThemeMode> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        read_prefs().map(|prefs| prefs.mode)
    }
    #[cfg(target_arch = "wasm32")]
    {
        let value = local_storage()?.get_item(THEME_MODE_KEY).ok().flatten()?;
        ThemeMode::from_name(&value)
    }
}

/// Saved color-vision profile, if any.
pub fn load_profile() -> Option<ColorVisionProfile> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        read_prefs().map(|prefs| prefs.profile)
    }
    #[cfg(target_arch = "wasm32")]
    {
        let value = local_storage()?.get_item(COLOR_VISION_KEY).ok().flatten()?;
        ColorVisionProfile::from_name(&value)
    }
}

/// Writes both preferences out. Best effort; failures are logged and
/// the session keeps its in-memory choice.
pub fn store(prefs: &ThemePrefs) {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let rendered = match toml::to_string_pretty(prefs) {
            Ok(rendered) => rendered,
            Err(err) => {
                log::warn!("could not render theme prefs: {err}");
                return;
            }
        };
        if let Err(err) = std::fs::write(PREFS_PATH, rendered) {
            log::warn!("could not save theme prefs to {PREFS_PATH}: {err}");
        }
    }
    #[cfg(target_arch = "wasm32")]
    {
        let Some(storage) = local_storage() else {
            log::warn!("localStorage unavailable; theme prefs not saved");
            return;
        };
        if storage
            .set_item(THEME_MODE_KEY, prefs.mode.as_str())
            .and(storage.set_item(COLOR_VISION_KEY, prefs.profile.as_str()))
            .is_err()
        {
            log::warn!("localStorage rejected theme prefs");
        }
    }
}

/// The host's own light/dark preference, used when nothing is saved.
pub fn system_theme_mode() -> ThemeMode {
    #[cfg(target_arch = "wasm32")]
    {
        let dark = web_sys::window()
            .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok())
            .flatten()
            .is_some_and(|query| query.matches());
        if dark {
            return ThemeMode::Dark;
        }
    }
    ThemeMode::Light
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefs_round_trip_through_toml() {
        let prefs = ThemePrefs {
            mode: ThemeMode::Dark,
            profile: ColorVisionProfile::Protanopia,
        };
        let rendered = toml::to_string_pretty(&prefs).unwrap();
        assert!(rendered.contains("dark"));
        assert!(rendered.contains("protanopia"));

        let parsed: ThemePrefs = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, prefs);
    }

    #[test]
    fn defaults_are_light_and_normal() {
        let prefs = ThemePrefs::default();
        assert_eq!(prefs.mode, ThemeMode::Light);
        assert_eq!(prefs.profile, ColorVisionProfile::Normal);
    }
}
