//! Touch input handling for mobile/touchscreen support.
//!
//! Tracks one finger at a time and reduces its travel to a horizontal
//! swipe gesture when it lifts; the carousel then steps one card in
//! that direction.

use bevy::prelude::*;

use crate::plugins::portfolio_plugin::CarouselSet;
use crate::utils::constants::carousel_constants::SWIPE_THRESHOLD_PX;
use crate::utils::navigation::CarouselNav;

/// Resource tracking the finger currently being followed.
#[derive(Resource, Default)]
pub struct TouchState {
    pub active_touch_id: Option<u64>,
    pub start_position: Option<Vec2>,
    pub current_position: Option<Vec2>,
}

impl TouchState {
    fn reset(&mut self) {
        *self = TouchState::default();
    }
}

/// A finished horizontal gesture, in screen pixels.
#[derive(Message)]
pub struct SwipeGesture {
    pub delta_x: f32,
}

/// Plugin for touch input handling.
pub struct TouchInputPlugin;

impl Plugin for TouchInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TouchState>()
            .add_message::<SwipeGesture>()
            .add_systems(
                Update,
                (track_touch_swipes, apply_swipe_gestures)
                    .chain()
                    .in_set(CarouselSet::Input),
            );
    }
}

/// System following the primary touch from press to release and
/// emitting its horizontal travel as a gesture.
pub fn track_touch_swipes(
    touches: Res<Touches>,
    mut touch_state: ResMut<TouchState>,
    mut swipes: MessageWriter<SwipeGesture>,
) {
    for touch in touches.iter_just_pressed() {
        if touch_state.active_touch_id.is_none() {
            touch_state.active_touch_id = Some(touch.id());
            touch_state.start_position = Some(touch.position());
            touch_state.current_position = Some(touch.position());
        }
    }

    for touch in touches.iter() {
        if Some(touch.id()) == touch_state.active_touch_id {
            touch_state.current_position = Some(touch.position());
        }
    }

    for touch in touches.iter_just_released() {
        if Some(touch.id()) != touch_state.active_touch_id {
            continue;
        }

        if let (Some(start), Some(end)) = (touch_state.start_position, touch_state.current_position)
        {
            swipes.write(SwipeGesture {
                delta_x: end.x - start.x,
            });
        }
        touch_state.reset();
    }

    for touch in touches.iter_just_canceled() {
        if Some(touch.id()) == touch_state.active_touch_id {
            touch_state.reset();
        }
    }
}

/// Forwards finished gestures into the carousel. Travel too short to
/// be a swipe still counts as interaction and holds the idle spin.
pub fn apply_swipe_gestures(
    mut swipes: MessageReader<SwipeGesture>,
    mut nav: ResMut<CarouselNav>,
) {
    for swipe in swipes.read() {
        if swipe.delta_x.abs() > SWIPE_THRESHOLD_PX {
            nav.handle_swipe(swipe.delta_x);
        } else {
            nav.pause_with_timer();
        }
    }
}
