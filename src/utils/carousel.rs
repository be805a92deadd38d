//! The rotating card carousel: scene construction and the systems that
//! keep it moving, colored, and sized for the current viewport.

use bevy::picking::events::{Out, Over, Pointer};
use bevy::prelude::*;
use std::f32::consts::{PI, TAU};

use crate::plugins::portfolio_plugin::CarouselSet;
use crate::utils::constants::camera_constants::{
    HOVER_ZOOM_FACTOR, MOBILE_ZOOM_FACTOR, ZOOM_LERP_SPEED,
};
use crate::utils::constants::card_constants::{
    CARD_LANDSCAPE_SCALE, CARD_PORTRAIT_SCALE, CARD_Y,
};
use crate::utils::constants::carousel_constants::CAROUSEL_RADIUS;
use crate::utils::navigation::CarouselNav;
use crate::utils::objects::{CameraZoom, Card, CardFace, CarouselGroup, HoverState};
use crate::utils::theme::ThemeState;
use crate::utils::viewport::{ScreenSize, Viewport};

/// Plugin for the carousel scene and its per-frame systems.
pub struct CarouselPlugin;

impl Plugin for CarouselPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CarouselNav>()
            .init_resource::<HoverState>()
            .init_resource::<CameraZoom>()
            .add_systems(Startup, spawn_carousel)
            .add_systems(Update, advance_carousel.in_set(CarouselSet::Tick))
            .add_systems(
                Update,
                (
                    apply_carousel_rotation,
                    update_card_colors,
                    sync_card_dimensions,
                    camera_zoom,
                )
                    .in_set(CarouselSet::Apply),
            );
    }
}

fn card_scale(size: ScreenSize) -> Vec3 {
    if size.is_touch_first() {
        Vec3::from_array(CARD_PORTRAIT_SCALE)
    } else {
        Vec3::from_array(CARD_LANDSCAPE_SCALE)
    }
}

/// Spawns the rotating group with one card per slot, evenly spaced on
/// the circle and facing outward.
pub fn spawn_carousel(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    theme: Res<ThemeState>,
    viewport: Res<Viewport>,
) {
    let colors = theme.colors();
    let card_color = if theme.is_dark() {
        colors.primary
    } else {
        colors.neutral
    };
    let scale = card_scale(viewport.size);
    let mesh = meshes.add(Cuboid::new(1.0, 1.0, 1.0));

    commands
        .spawn((CarouselGroup, Transform::default(), Visibility::default()))
        .with_children(|parent| {
            for (index, card) in Card::ALL.into_iter().enumerate() {
                let angle = (index as f32 / Card::COUNT as f32) * TAU;

                parent
                    .spawn((
                        CardFace { card },
                        Mesh3d(mesh.clone()),
                        MeshMaterial3d(materials.add(StandardMaterial {
                            base_color: card_color,
                            ..default()
                        })),
                        Transform {
                            translation: Vec3::new(
                                angle.sin() * CAROUSEL_RADIUS,
                                CARD_Y,
                                angle.cos() * CAROUSEL_RADIUS,
                            ),
                            rotation: Quat::from_rotation_y(PI + angle),
                            scale,
                        },
                    ))
                    .observe(card_pointer_over)
                    .observe(card_pointer_out);
            }
        });
}

fn card_pointer_over(_over: On<Pointer<Over>>, mut hover: ResMut<HoverState>) {
    hover.hovered = true;
}

fn card_pointer_out(_out: On<Pointer<Out>>, mut hover: ResMut<HoverState>) {
    hover.hovered = false;
}

/// Runs the rotation machine once per frame.
pub fn advance_carousel(time: Res<Time>, hover: Res<HoverState>, mut nav: ResMut<CarouselNav>) {
    nav.tick(time.delta(), hover.hovered);
}

/// Writes the machine's angle onto the rotating group's transform.
pub fn apply_carousel_rotation(
    nav: Res<CarouselNav>,
    mut group_query: Query<&mut Transform, With<CarouselGroup>>,
) {
    for mut transform in &mut group_query {
        transform.rotation = Quat::from_rotation_y(nav.current_angle());
    }
}

/// Repaints cards and the clear color when the theme changes.
pub fn update_card_colors(
    theme: Res<ThemeState>,
    mut clear_color: ResMut<ClearColor>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    card_query: Query<&MeshMaterial3d<StandardMaterial>, With<CardFace>>,
) {
    if !theme.is_changed() {
        return;
    }

    let colors = theme.colors();
    clear_color.0 = if theme.is_dark() {
        colors.background
    } else {
        colors.primary
    };

    let card_color = if theme.is_dark() {
        colors.primary
    } else {
        colors.neutral
    };
    for material_handle in &card_query {
        if let Some(material) = materials.get_mut(&material_handle.0) {
            material.base_color = card_color;
        }
    }
}

/// Swaps cards between portrait and landscape proportions when the
/// viewport tier crosses the touch-first boundary.
pub fn sync_card_dimensions(
    viewport: Res<Viewport>,
    mut card_query: Query<&mut Transform, With<CardFace>>,
) {
    if !viewport.is_changed() {
        return;
    }

    let scale = card_scale(viewport.size);
    for mut transform in &mut card_query {
        transform.scale = scale;
    }
}

/// Eases the camera in while a card is hovered, and keeps it closer on
/// touch-first viewports where there is no hover.
pub fn camera_zoom(
    hover: Res<HoverState>,
    viewport: Res<Viewport>,
    zoom: Res<CameraZoom>,
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
) {
    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    let touch_first = viewport.size.is_touch_first();
    let factor = if touch_first {
        MOBILE_ZOOM_FACTOR
    } else {
        HOVER_ZOOM_FACTOR
    };
    let goal = if hover.hovered || touch_first {
        zoom.default_z * factor
    } else {
        zoom.default_z
    };

    transform.translation.z += (goal - transform.translation.z) * ZOOM_LERP_SPEED;
}
