//! Navigation surface the UI talks to.
//!
//! Buttons and gestures go through [`CarouselNav`] rather than poking
//! the rotation machine directly; the facade owns the machine and the
//! user-facing auto-rotation switch.

use bevy::prelude::*;
use std::time::Duration;

use crate::utils::constants::carousel_constants::{PAUSE_RESUME_SECS, SWIPE_THRESHOLD_PX};
use crate::utils::objects::Card;
use crate::utils::rotation::RotationState;

/// Carousel navigation state, one per running app.
#[derive(Resource)]
pub struct CarouselNav {
    rotation: RotationState,
    /// User-facing switch. Off means the idle spin never runs,
    /// independent of any interaction pause.
    pub auto_rotation_enabled: bool,
}

impl Default for CarouselNav {
    fn default() -> Self {
        Self {
            rotation: RotationState::new(),
            auto_rotation_enabled: true,
        }
    }
}

impl CarouselNav {
    /// The card the carousel currently considers active.
    pub fn current_card(&self) -> Option<Card> {
        self.rotation.selected_card()
    }

    pub fn current_angle(&self) -> f32 {
        self.rotation.current_angle()
    }

    pub fn is_transitioning(&self) -> bool {
        self.rotation.is_transitioning()
    }

    /// Rotates to `card` and suppresses the idle spin for a while.
    /// Safe to call with the card that is already selected.
    pub fn rotate_to_card(&mut self, card: Card) {
        crate::log!("navigation: rotating to {}", card.name());
        self.rotation.request_rotate_to(card);
    }

    pub fn toggle_auto_rotation(&mut self) {
        self.auto_rotation_enabled = !self.auto_rotation_enabled;
    }

    /// Pauses the idle spin, resuming after the standard delay.
    pub fn pause_with_timer(&mut self) {
        self.rotation.pause_with_timer(PAUSE_RESUME_SECS);
    }

    /// Feeds a completed horizontal gesture into the carousel.
    pub fn handle_swipe(&mut self, delta_x: f32) {
        self.rotation.handle_swipe(delta_x, SWIPE_THRESHOLD_PX);
    }

    /// Per-frame update. `hovered` suppresses the idle spin while the
    /// pointer rests on a card.
    pub fn tick(&mut self, delta: Duration, hovered: bool) {
        let auto_allowed = self.auto_rotation_enabled && !hovered;
        self.rotation.tick(delta, auto_allowed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: Duration = Duration::from_millis(16);

    #[test]
    fn disabled_switch_stops_the_idle_spin() {
        let mut nav = CarouselNav::default();
        nav.toggle_auto_rotation();
        nav.tick(Duration::from_secs_f32(1.0), false);
        assert_eq!(nav.current_angle(), 0.0);

        nav.toggle_auto_rotation();
        nav.tick(Duration::from_secs_f32(1.0), false);
        assert!(nav.current_angle() > 0.0);
    }

    #[test]
    fn hover_suppresses_the_idle_spin() {
        let mut nav = CarouselNav::default();
        nav.tick(Duration::from_secs_f32(1.0), true);
        assert_eq!(nav.current_angle(), 0.0);
    }

    #[test]
    fn transitions_finish_even_while_hovered() {
        let mut nav = CarouselNav::default();
        nav.rotate_to_card(Card::Contact);
        for _ in 0..10_000 {
            if !nav.is_transitioning() {
                break;
            }
            nav.tick(DT, true);
        }
        assert!(!nav.is_transitioning());
        assert_eq!(nav.current_card(), Some(Card::Contact));
    }

    #[test]
    fn repeated_selection_keeps_state_coherent() {
        let mut nav = CarouselNav::default();
        nav.rotate_to_card(Card::Settings);
        nav.rotate_to_card(Card::Settings);
        for _ in 0..10_000 {
            if !nav.is_transitioning() {
                break;
            }
            nav.tick(DT, false);
        }
        assert_eq!(nav.current_card(), Some(Card::Settings));
    }

    #[test]
    fn swipe_below_threshold_is_ignored() {
        let mut nav = CarouselNav::default();
        nav.rotate_to_card(Card::About);
        nav.handle_swipe(SWIPE_THRESHOLD_PX - 1.0);
        assert_eq!(nav.current_card(), Some(Card::About));
    }
}
