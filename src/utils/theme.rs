//! Theme palettes and the active theme state.
//!
//! Every color the site shows comes from one palette, selected by the
//! pair (color-vision profile, light/dark mode). The palettes are fixed
//! tables; accommodation profiles swap hue-confusable colors for ones
//! their audience can tell apart.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::theme_storage::{self, ThemePrefs};

/// Light or dark rendering of the active palette.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn from_name(name: &str) -> Option<ThemeMode> {
        match name {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Color-vision accommodation profiles, selectable independently of
/// light/dark mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorVisionProfile {
    #[default]
    Normal,
    Deuteranopia,
    Protanopia,
    Tritanopia,
}

impl ColorVisionProfile {
    pub const ALL: [ColorVisionProfile; 4] = [
        ColorVisionProfile::Normal,
        ColorVisionProfile::Deuteranopia,
        ColorVisionProfile::Protanopia,
        ColorVisionProfile::Tritanopia,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ColorVisionProfile::Normal => "normal",
            ColorVisionProfile::Deuteranopia => "deuteranopia",
            ColorVisionProfile::Protanopia => "protanopia",
            ColorVisionProfile::Tritanopia => "tritanopia",
        }
    }

    pub fn from_name(name: &str) -> Option<ColorVisionProfile> {
        ColorVisionProfile::ALL
            .into_iter()
            .find(|profile| profile.as_str() == name)
    }

    /// The next profile in presentation order, wrapping around.
    pub fn cycled(self) -> ColorVisionProfile {
        let index = ColorVisionProfile::ALL
            .iter()
            .position(|profile| *profile == self)
            .unwrap_or(0);
        ColorVisionProfile::ALL[(index + 1) % ColorVisionProfile::ALL.len()]
    }
}

/// One fixed set of site colors.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub neutral: Color,
    pub background: Color,
    pub text: Color,
    pub text_two: Color,
}

const fn hex(rgb: u32) -> Color {
    Color::srgb(
        ((rgb >> 16) & 0xFF) as f32 / 255.0,
        ((rgb >> 8) & 0xFF) as f32 / 255.0,
        (rgb & 0xFF) as f32 / 255.0,
    )
}

const NORMAL_LIGHT: Palette = Palette {
    primary: hex(0xFFFCF2),
    secondary: hex(0xEB5E28),
    accent: hex(0xCCC5B9),
    neutral: hex(0x252422),
    background: hex(0xFFFCF2),
    text: hex(0x121212),
    text_two: hex(0xF5F5F5),
};

const NORMAL_DARK: Palette = Palette {
    primary: hex(0xF7EED4),
    secondary: hex(0xEB5E28),
    accent: hex(0xCCC5B9),
    neutral: hex(0xF7EED4),
    background: hex(0x252422),
    text: hex(0xF5F5F5),
    text_two: hex(0x121212),
};

const DEUTERANOPIA_LIGHT: Palette = Palette {
    primary: hex(0xFFFCF2),
    secondary: hex(0xD92B04),
    accent: hex(0xA8A29E),
    neutral: hex(0x252422),
    background: hex(0xF5F5F5),
    text: hex(0x121212),
    text_two: hex(0xF5F5F5),
};

const DEUTERANOPIA_DARK: Palette = Palette {
    primary: hex(0xFFFCF2),
    secondary: hex(0xFF6B35),
    accent: hex(0xB8B2A7),
    neutral: hex(0xFFFCF2),
    background: hex(0x252422),
    text: hex(0xF5F5F5),
    text_two: hex(0x121212),
};

const PROTANOPIA_LIGHT: Palette = Palette {
    primary: hex(0xFFFCF2),
    secondary: hex(0x0088CC),
    accent: hex(0xB5B5B5),
    neutral: hex(0x252422),
    background: hex(0xF5F5F5),
    text: hex(0x121212),
    text_two: hex(0xF5F5F5),
};

const PROTANOPIA_DARK: Palette = Palette {
    primary: hex(0xFFFCF2),
    secondary: hex(0x2CB3FF),
    accent: hex(0xBEBEBE),
    neutral: hex(0xFFFCF2),
    background: hex(0x252422),
    text: hex(0xF5F5F5),
    text_two: hex(0x121212),
};

const TRITANOPIA_LIGHT: Palette = Palette {
    primary: hex(0xFFFCF2),
    secondary: hex(0xC64600),
    accent: hex(0xBDBDBD),
    neutral: hex(0x252422),
    background: hex(0xF5F5F5),
    text: hex(0x121212),
    text_two: hex(0xF5F5F5),
};

const TRITANOPIA_DARK: Palette = Palette {
    primary: hex(0xFFFCF2),
    secondary: hex(0xFF7847),
    accent: hex(0xD6D6D6),
    neutral: hex(0xFFFCF2),
    background: hex(0x252422),
    text: hex(0xF5F5F5),
    text_two: hex(0x121212),
};

/// Palette for a (profile, mode) pair.
pub const fn palette(profile: ColorVisionProfile, mode: ThemeMode) -> &'static Palette {
    match (profile, mode) {
        (ColorVisionProfile::Normal, ThemeMode::Light) => &NORMAL_LIGHT,
        (ColorVisionProfile::Normal, ThemeMode::Dark) => &NORMAL_DARK,
        (ColorVisionProfile::Deuteranopia, ThemeMode::Light) => &DEUTERANOPIA_LIGHT,
        (ColorVisionProfile::Deuteranopia, ThemeMode::Dark) => &DEUTERANOPIA_DARK,
        (ColorVisionProfile::Protanopia, ThemeMode::Light) => &PROTANOPIA_LIGHT,
        (ColorVisionProfile::Protanopia, ThemeMode::Dark) => &PROTANOPIA_DARK,
        (ColorVisionProfile::Tritanopia, ThemeMode::Light) => &TRITANOPIA_LIGHT,
        (ColorVisionProfile::Tritanopia, ThemeMode::Dark) => &TRITANOPIA_DARK,
    }
}

/// The active theme choice.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub mode: ThemeMode,
    pub profile: ColorVisionProfile,
}

impl ThemeState {
    /// Saved preferences where present, host preference for the mode
    /// otherwise.
    pub fn restore() -> ThemeState {
        ThemeState {
            mode: theme_storage::load_mode().unwrap_or_else(theme_storage::system_theme_mode),
            profile: theme_storage::load_profile().unwrap_or_default(),
        }
    }

    pub fn colors(&self) -> &'static Palette {
        palette(self.profile, self.mode)
    }

    pub fn is_dark(&self) -> bool {
        self.mode == ThemeMode::Dark
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    pub fn cycle_profile(&mut self) {
        self.profile = self.profile.cycled();
    }

    pub fn prefs(&self) -> ThemePrefs {
        ThemePrefs {
            mode: self.mode,
            profile: self.profile,
        }
    }
}

/// Plugin owning the theme state and its persistence.
pub struct ThemePlugin;

impl Plugin for ThemePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ThemeState::restore())
            .add_systems(Update, persist_theme_prefs);
    }
}

/// Writes the preferences out whenever the choice changes. The restored
/// state itself is never re-written.
pub fn persist_theme_prefs(theme: Res<ThemeState>, mut last: Local<Option<ThemeState>>) {
    let current = *theme;
    match *last {
        Some(previous) if previous == current => {}
        Some(_) => {
            theme_storage::store(&current.prefs());
            *last = Some(current);
        }
        None => *last = Some(current),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_profile_and_mode_has_a_palette() {
        for profile in ColorVisionProfile::ALL {
            for mode in [ThemeMode::Light, ThemeMode::Dark] {
                let colors = palette(profile, mode);
                assert_ne!(colors.text, colors.background);
            }
        }
    }

    #[test]
    fn dark_mode_inverts_the_text_pair() {
        let light = palette(ColorVisionProfile::Normal, ThemeMode::Light);
        let dark = palette(ColorVisionProfile::Normal, ThemeMode::Dark);
        assert_eq!(light.text, dark.text_two);
        assert_eq!(light.text_two, dark.text);
    }

    #[test]
    fn protanopia_replaces_the_orange_accent() {
        let normal = palette(ColorVisionProfile::Normal, ThemeMode::Light);
        let protanopia = palette(ColorVisionProfile::Protanopia, ThemeMode::Light);
        assert_eq!(protanopia.secondary, hex(0x0088CC));
        assert_ne!(protanopia.secondary, normal.secondary);
    }

    #[test]
    fn toggling_and_cycling_wrap_around() {
        let mut theme = ThemeState::default();
        theme.toggle_mode();
        assert!(theme.is_dark());
        theme.toggle_mode();
        assert!(!theme.is_dark());

        for _ in 0..ColorVisionProfile::ALL.len() {
            theme.cycle_profile();
        }
        assert_eq!(theme.profile, ColorVisionProfile::Normal);
    }

    #[test]
    fn names_round_trip() {
        for profile in ColorVisionProfile::ALL {
            assert_eq!(ColorVisionProfile::from_name(profile.as_str()), Some(profile));
        }
        assert_eq!(ThemeMode::from_name("dark"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::from_name("solarized"), None);
    }
}
