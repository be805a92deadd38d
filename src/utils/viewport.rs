//! Viewport classification for responsive behavior.
//!
//! Maps the window's width onto one of seven ordered size tiers. The
//! tier decides card proportions, UI scale, camera zoom, and whether
//! the carousel starts with its idle spin disabled.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::log;
use crate::utils::constants::carousel_constants::PAUSE_ON_TOUCH_VIEWPORTS;
use crate::utils::constants::viewport_constants::{
    DESKTOP_MAX_WIDTH, LAPTOP_MAX_WIDTH, MOBILE_MAX_WIDTH, TABLET_MAX_WIDTH, TWO_K_MAX_WIDTH,
    ULTRAWIDE_MAX_WIDTH,
};
use crate::utils::navigation::CarouselNav;

/// Discrete window size tiers, narrowest first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum ScreenSize {
    Mobile,
    Tablet,
    #[default]
    Laptop,
    Desktop,
    TwoK,
    Ultrawide,
    FourK,
}

impl ScreenSize {
    /// Tier for a window of the given width in pixels.
    pub fn classify(width: f32) -> ScreenSize {
        if width < MOBILE_MAX_WIDTH {
            ScreenSize::Mobile
        } else if width < TABLET_MAX_WIDTH {
            ScreenSize::Tablet
        } else if width < LAPTOP_MAX_WIDTH {
            ScreenSize::Laptop
        } else if width < DESKTOP_MAX_WIDTH {
            ScreenSize::Desktop
        } else if width < TWO_K_MAX_WIDTH {
            ScreenSize::TwoK
        } else if width < ULTRAWIDE_MAX_WIDTH {
            ScreenSize::Ultrawide
        } else {
            ScreenSize::FourK
        }
    }

    /// Tiers where touch is the primary input.
    pub fn is_touch_first(self) -> bool {
        matches!(self, ScreenSize::Mobile | ScreenSize::Tablet)
    }
}

/// Current tier of the primary window.
#[derive(Resource, Default)]
pub struct Viewport {
    pub size: ScreenSize,
}

/// Plugin for tracking the window size tier.
pub struct ViewportPlugin;

impl Plugin for ViewportPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Viewport>()
            .add_systems(Startup, apply_touch_first_policy)
            .add_systems(Update, classify_viewport);
    }
}

/// Keeps the [`Viewport`] resource in step with the window width.
/// Writes only on tier changes so change detection stays meaningful.
pub fn classify_viewport(
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut viewport: ResMut<Viewport>,
) {
    let Ok(window) = window_query.single() else {
        return;
    };

    let size = ScreenSize::classify(window.width());
    if viewport.size != size {
        log!("viewport: {:?} -> {:?}", viewport.size, size);
        viewport.size = size;
    }
}

/// Classifies once at startup and, on touch-first viewports, launches
/// with the idle spin switched off.
pub fn apply_touch_first_policy(
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut viewport: ResMut<Viewport>,
    mut nav: ResMut<CarouselNav>,
) {
    let Ok(window) = window_query.single() else {
        return;
    };

    viewport.size = ScreenSize::classify(window.width());
    if PAUSE_ON_TOUCH_VIEWPORTS && viewport.size.is_touch_first() {
        nav.auto_rotation_enabled = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_are_upper_bound_exclusive() {
        assert_eq!(ScreenSize::classify(0.0), ScreenSize::Mobile);
        assert_eq!(ScreenSize::classify(419.0), ScreenSize::Mobile);
        assert_eq!(ScreenSize::classify(420.0), ScreenSize::Tablet);
        assert_eq!(ScreenSize::classify(767.0), ScreenSize::Tablet);
        assert_eq!(ScreenSize::classify(768.0), ScreenSize::Laptop);
        assert_eq!(ScreenSize::classify(1365.0), ScreenSize::Laptop);
        assert_eq!(ScreenSize::classify(1366.0), ScreenSize::Desktop);
        assert_eq!(ScreenSize::classify(1919.0), ScreenSize::Desktop);
        assert_eq!(ScreenSize::classify(1920.0), ScreenSize::TwoK);
        assert_eq!(ScreenSize::classify(2559.0), ScreenSize::TwoK);
        assert_eq!(ScreenSize::classify(2560.0), ScreenSize::Ultrawide);
        assert_eq!(ScreenSize::classify(3439.0), ScreenSize::Ultrawide);
        assert_eq!(ScreenSize::classify(3440.0), ScreenSize::FourK);
    }

    #[test]
    fn tiers_are_ordered_narrowest_first() {
        assert!(ScreenSize::Mobile < ScreenSize::Tablet);
        assert!(ScreenSize::Tablet < ScreenSize::Laptop);
        assert!(ScreenSize::Ultrawide < ScreenSize::FourK);
    }

    #[test]
    fn touch_first_covers_mobile_and_tablet_only() {
        assert!(ScreenSize::Mobile.is_touch_first());
        assert!(ScreenSize::Tablet.is_touch_first());
        assert!(!ScreenSize::Laptop.is_touch_first());
        assert!(!ScreenSize::FourK.is_touch_first());
    }
}
