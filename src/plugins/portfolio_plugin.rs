use bevy::prelude::*;

use crate::utils::carousel::CarouselPlugin;
use crate::utils::navbar::NavbarPlugin;
use crate::utils::setup::SetupPlugin;
use crate::utils::theme::ThemePlugin;
use crate::utils::touch_inputs::TouchInputPlugin;
use crate::utils::viewport::ViewportPlugin;

/// Frame order for everything touching the carousel: user input first,
/// then the rotation machine, then whatever mirrors its state into the
/// scene and the UI.
#[derive(SystemSet, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CarouselSet {
    Input,
    Tick,
    Apply,
}

/// Top-level plugin assembling the whole site.
pub struct PortfolioPlugin;

impl Plugin for PortfolioPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (CarouselSet::Input, CarouselSet::Tick, CarouselSet::Apply).chain(),
        )
        .add_plugins((
            SetupPlugin,
            ViewportPlugin,
            ThemePlugin,
            CarouselPlugin,
            TouchInputPlugin,
            NavbarPlugin,
        ));
    }
}
