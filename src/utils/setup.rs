use bevy::prelude::*;

use crate::utils::constants::camera_constants::CAMERA_INITIAL_Z;
use crate::utils::theme::ThemeState;

/// Plugin for scene setup
pub struct SetupPlugin;

impl Plugin for SetupPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup);
    }
}

/// Spawns the camera and lights and paints the background from the
/// restored theme.
pub fn setup(mut commands: Commands, theme: Res<ThemeState>) {
    // Camera
    commands.spawn((
        Camera3d::default(),
        // Fixed position looking at the origin; only z moves, for zoom.
        Transform::from_xyz(0.0, 0.0, CAMERA_INITIAL_Z).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Key light from above and behind the camera
    commands.spawn((
        DirectionalLight {
            illuminance: 10_000.0,
            ..default()
        },
        Transform::from_xyz(0.0, 5.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Ambient fill so the unlit card backs stay readable
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
        affects_lightmapped_meshes: true,
    });

    let colors = theme.colors();
    commands.insert_resource(ClearColor(if theme.is_dark() {
        colors.background
    } else {
        colors.primary
    }));
}
