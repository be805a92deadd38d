use bevy::picking::mesh_picking::MeshPickingPlugin;
use bevy::prelude::*;

use portfolio_3d::plugins::portfolio_plugin::PortfolioPlugin;

/// Main application function
fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Personal Portfolio".into(),
                fit_canvas_to_parent: true,
                ..default()
            }),
            ..default()
        }))
        // Pointer-over detection on the card meshes
        .add_plugins(MeshPickingPlugin)
        .add_plugins(PortfolioPlugin)
        .run();
}
