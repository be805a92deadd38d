//! Carousel rotation state machine.
//!
//! Reconciles three competing sources of angular control into one yaw
//! angle per frame: explicit card requests, swipe gestures, and the idle
//! auto-spin. Pure state plus a [`Timer`]; nothing here touches the ECS,
//! so the whole machine is exercisable without an `App`.
//!
//! At any instant exactly one of three things is true: the carousel is
//! free-spinning, it is easing toward a requested card, or it is holding
//! still. A card request wins over the spin, and the spin only resumes
//! once the interaction pause expires.

use bevy::time::{Timer, TimerMode};
use std::f32::consts::{PI, TAU};
use std::time::Duration;

use crate::utils::constants::carousel_constants::{
    AUTO_ROTATION_SPEED, FRONT_ANGLE_OFFSET, PAUSE_RESUME_SECS, TARGET_LERP_FACTOR,
    TARGET_SNAP_EPSILON,
};
use crate::utils::objects::Card;

/// Angular spacing between adjacent slots.
pub const SLOT_SPACING: f32 = TAU / Card::COUNT as f32;

/// Yaw at which the given slot faces the camera.
pub fn slot_angle(slot: usize) -> f32 {
    FRONT_ANGLE_OFFSET + (slot as f32 / Card::COUNT as f32) * TAU
}

/// Signed shortest rotation from `from` to `to`, in `(-PI, PI]`.
pub fn shortest_delta(from: f32, to: f32) -> f32 {
    let delta = (to - from).rem_euclid(TAU);
    if delta > PI { delta - TAU } else { delta }
}

/// Angular state of the rotating card group.
///
/// Fields are private: `target_angle` is only ever cleared here, once
/// the residual drops under [`TARGET_SNAP_EPSILON`] and the angle snaps
/// onto it exactly.
pub struct RotationState {
    current_angle: f32,
    target_angle: Option<f32>,
    paused: bool,
    pause_timer: Option<Timer>,
    selected_card: Option<Card>,
}

impl Default for RotationState {
    fn default() -> Self {
        Self::new()
    }
}

impl RotationState {
    pub fn new() -> Self {
        Self {
            current_angle: 0.0,
            target_angle: None,
            paused: false,
            pause_timer: None,
            selected_card: None,
        }
    }

    /// Live yaw of the group, in radians. Grows without bound while
    /// free-spinning; only ever reduced modulo a turn for comparisons.
    pub fn current_angle(&self) -> f32 {
        self.current_angle
    }

    pub fn target_angle(&self) -> Option<f32> {
        self.target_angle
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_transitioning(&self) -> bool {
        self.target_angle.is_some()
    }

    pub fn selected_card(&self) -> Option<Card> {
        self.selected_card
    }

    /// Starts easing toward `card`'s front-facing yaw.
    ///
    /// The target is reached by the shortest path from the current
    /// angle, never more than half a turn. Re-requesting the selected
    /// card lands on the same angle class, so repeated clicks are
    /// harmless. Any request also restarts the interaction pause.
    pub fn request_rotate_to(&mut self, card: Card) {
        let goal = slot_angle(card.visual_slot());
        let delta = shortest_delta(self.current_angle, goal);
        self.target_angle = Some(self.current_angle + delta);
        self.selected_card = Some(card);
        self.pause_with_timer(PAUSE_RESUME_SECS);
    }

    /// Per-frame update.
    ///
    /// Runs the pause timer, then advances the angle: toward the target
    /// if one is set (a fixed fraction of the remaining distance per
    /// call, snapping once within tolerance), otherwise by the idle
    /// spin speed scaled by `delta` -- but only while `auto_allowed`
    /// holds and no interaction pause is pending.
    pub fn tick(&mut self, delta: Duration, auto_allowed: bool) {
        if let Some(timer) = self.pause_timer.as_mut() {
            timer.tick(delta);
            if timer.is_finished() {
                self.pause_timer = None;
                self.paused = false;
            }
        }

        if let Some(target) = self.target_angle {
            self.current_angle += (target - self.current_angle) * TARGET_LERP_FACTOR;

            if (target - self.current_angle).abs() < TARGET_SNAP_EPSILON {
                self.current_angle = target;
                self.target_angle = None;
            }
        } else if auto_allowed && !self.paused {
            self.current_angle += AUTO_ROTATION_SPEED * delta.as_secs_f32();

            // Keep the selection tracking whichever card drifts in
            // front; a pending transition owns the selection instead.
            self.selected_card = self.resolve_active_card();
        }
    }

    /// Pauses the idle spin and schedules a single resume after `secs`.
    ///
    /// Calling again replaces the pending timer, so back-to-back
    /// interactions resolve to one resume counted from the last call.
    /// A duration that cannot back a timer leaves the spin paused until
    /// the next explicit request instead of failing.
    pub fn pause_with_timer(&mut self, secs: f32) {
        self.paused = true;
        if secs.is_finite() && secs > 0.0 {
            self.pause_timer = Some(Timer::from_seconds(secs, TimerMode::Once));
        } else {
            log::warn!("unusable pause duration {secs}; auto-rotation stays off");
            self.pause_timer = None;
        }
    }

    /// The card whose slot is nearest to facing the camera right now.
    pub fn resolve_active_card(&self) -> Option<Card> {
        let slots = (self.current_angle - FRONT_ANGLE_OFFSET).rem_euclid(TAU) / SLOT_SPACING;
        let slot = (slots.round() as usize) % Card::COUNT;
        Card::from_visual_slot(slot)
    }

    /// Steps to the neighboring card in the swipe direction.
    ///
    /// Travel under `threshold_px` is ignored. Positive `delta_x` means
    /// the next card in declaration order, negative the previous one,
    /// wrapping at both ends. The step is taken from the selected card,
    /// or from whichever card is in front when nothing is selected yet.
    pub fn handle_swipe(&mut self, delta_x: f32, threshold_px: f32) {
        if delta_x.abs() <= threshold_px {
            return;
        }

        let Some(base) = self.selected_card.or_else(|| self.resolve_active_card()) else {
            return;
        };

        let destination = if delta_x > 0.0 {
            base.next()
        } else {
            base.previous()
        };
        self.request_rotate_to(destination);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: Duration = Duration::from_millis(16);

    /// Ticks with the idle spin disabled until the transition resolves.
    fn converge(state: &mut RotationState) {
        for _ in 0..10_000 {
            if !state.is_transitioning() {
                return;
            }
            state.tick(DT, false);
        }
        panic!("transition did not settle within 10k ticks");
    }

    #[test]
    fn shortest_delta_stays_in_half_open_range() {
        for step in -24i32..=24 {
            let from = step as f32 * 0.3;
            for slot in 0..Card::COUNT {
                let to = slot_angle(slot);
                let delta = shortest_delta(from, to);

                assert!(delta > -PI && delta <= PI, "delta {delta} out of range");
                let error = (from + delta - to).rem_euclid(TAU);
                let error = error.min(TAU - error);
                assert!(error < 1e-3, "delta {delta} misses target by {error}");
            }
        }
    }

    #[test]
    fn half_turn_is_taken_positively() {
        assert_eq!(shortest_delta(0.0, PI), PI);
    }

    #[test]
    fn rotate_request_converges_and_snaps_exactly() {
        let mut state = RotationState::new();
        state.request_rotate_to(Card::Contact);

        // Contact fronts at slot 0, half a turn from the start.
        assert_eq!(state.target_angle(), Some(PI));
        converge(&mut state);

        assert_eq!(state.current_angle(), PI);
        assert!(state.target_angle().is_none());
        assert_eq!(state.selected_card(), Some(Card::Contact));
    }

    #[test]
    fn reselecting_the_same_card_lands_on_the_same_angle_class() {
        let mut state = RotationState::new();
        state.request_rotate_to(Card::Projects);
        converge(&mut state);
        let settled = state.current_angle();

        state.request_rotate_to(Card::Projects);
        let target = state.target_angle().expect("re-request sets a target");
        let drift = (target - settled).rem_euclid(TAU);
        let drift = drift.min(TAU - drift);
        assert!(drift < 1e-4, "re-request drifted by {drift}");
    }

    #[test]
    fn pause_timer_debounces_to_the_last_call() {
        let mut state = RotationState::new();
        state.pause_with_timer(2.0);
        state.tick(Duration::from_secs_f32(1.0), true);

        // Restarted with one second already spent on the first timer.
        state.pause_with_timer(2.0);
        state.tick(Duration::from_secs_f32(1.9), true);
        assert!(state.is_paused(), "resumed on the first timer's schedule");

        state.tick(Duration::from_secs_f32(0.2), true);
        assert!(!state.is_paused());
    }

    #[test]
    fn auto_rotation_advances_only_when_allowed() {
        let mut state = RotationState::new();
        state.tick(Duration::from_secs_f32(1.0), true);
        assert!((state.current_angle() - AUTO_ROTATION_SPEED).abs() < 1e-6);

        let before = state.current_angle();
        state.tick(Duration::from_secs_f32(1.0), false);
        assert_eq!(state.current_angle(), before);

        state.pause_with_timer(60.0);
        state.tick(Duration::from_secs_f32(1.0), true);
        assert_eq!(state.current_angle(), before);
    }

    #[test]
    fn free_rotation_tracks_the_front_card() {
        let mut state = RotationState::new();
        state.tick(Duration::from_secs_f32(0.5), true);
        assert_eq!(state.selected_card(), state.resolve_active_card());
    }

    #[test]
    fn swipes_step_declared_order_with_wraparound() {
        let mut state = RotationState::new();
        state.request_rotate_to(Card::Contact);
        state.handle_swipe(-80.0, 50.0);
        assert_eq!(state.selected_card(), Some(Card::Projects));

        let mut state = RotationState::new();
        state.request_rotate_to(Card::About);
        state.handle_swipe(-80.0, 50.0);
        assert_eq!(state.selected_card(), Some(Card::Settings));

        let mut state = RotationState::new();
        state.request_rotate_to(Card::Settings);
        state.handle_swipe(80.0, 50.0);
        assert_eq!(state.selected_card(), Some(Card::About));
    }

    #[test]
    fn short_travel_is_not_a_swipe() {
        let mut state = RotationState::new();
        state.request_rotate_to(Card::About);
        converge(&mut state);

        state.handle_swipe(30.0, 50.0);
        assert_eq!(state.selected_card(), Some(Card::About));
        assert!(state.target_angle().is_none());
    }

    #[test]
    fn front_card_scenario() {
        let mut state = RotationState::new();
        state.request_rotate_to(Card::Contact);
        converge(&mut state);
        assert_eq!(state.resolve_active_card(), Some(Card::Contact));

        state.handle_swipe(-80.0, 50.0);
        assert_eq!(state.selected_card(), Some(Card::Projects));
        converge(&mut state);
        assert_eq!(state.resolve_active_card(), Some(Card::Projects));
    }

    #[test]
    fn unusable_pause_duration_degrades_to_an_indefinite_pause() {
        let mut state = RotationState::new();
        state.pause_with_timer(f32::NAN);
        for _ in 0..1_000 {
            state.tick(Duration::from_secs_f32(1.0), true);
        }
        assert!(state.is_paused());
        assert_eq!(state.current_angle(), 0.0);
    }
}
