// This file defines the cards, resources, and components used across the site.
use bevy::prelude::*;

use crate::utils::constants::camera_constants::CAMERA_INITIAL_Z;
use crate::utils::constants::carousel_constants::CARD_VISUAL_SLOTS;

/// The four cards of the carousel, in declaration order.
///
/// Declaration order drives where a card is spawned on the circle and
/// what "next"/"previous" mean for swipes. The slot a card occupies when
/// it faces the camera comes from [`Card::visual_slot`], which is a
/// fixed permutation of this order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Card {
    About,
    Projects,
    Contact,
    Settings,
}

impl Card {
    /// All cards in declaration order.
    pub const ALL: [Card; 4] = [Card::About, Card::Projects, Card::Contact, Card::Settings];

    /// Number of slots on the carousel circle.
    pub const COUNT: usize = Card::ALL.len();

    /// Index in declaration order.
    pub const fn index(self) -> usize {
        match self {
            Card::About => 0,
            Card::Projects => 1,
            Card::Contact => 2,
            Card::Settings => 3,
        }
    }

    /// The slot this card occupies when facing front.
    pub const fn visual_slot(self) -> usize {
        CARD_VISUAL_SLOTS[self.index()]
    }

    /// Inverse of [`Card::visual_slot`].
    pub fn from_visual_slot(slot: usize) -> Option<Card> {
        Card::ALL.into_iter().find(|card| card.visual_slot() == slot)
    }

    /// Display name, also used as the navbar button label.
    pub const fn name(self) -> &'static str {
        match self {
            Card::About => "About",
            Card::Projects => "Projects",
            Card::Contact => "Contact",
            Card::Settings => "Settings",
        }
    }

    /// Successor in declaration order, wrapping around.
    pub fn next(self) -> Card {
        Card::ALL[(self.index() + 1) % Card::COUNT]
    }

    /// Predecessor in declaration order, wrapping around.
    pub fn previous(self) -> Card {
        Card::ALL[(self.index() + Card::COUNT - 1) % Card::COUNT]
    }
}

/// A component that marks the rotating group holding all cards.
#[derive(Component)]
pub struct CarouselGroup;

/// A component that marks one card mesh and says which card it shows.
#[derive(Component)]
pub struct CardFace {
    pub card: Card,
}

/// True while the pointer is over any card. Suppresses the idle spin
/// and zooms the camera in.
#[derive(Resource, Default)]
pub struct HoverState {
    pub hovered: bool,
}

/// Resting camera distance, captured at setup so zoom always returns
/// to the same place.
#[derive(Resource)]
pub struct CameraZoom {
    pub default_z: f32,
}

impl Default for CameraZoom {
    fn default() -> Self {
        Self {
            default_z: CAMERA_INITIAL_Z,
        }
    }
}

/// A navbar button that rotates the carousel to its card.
#[derive(Component)]
pub struct NavButton {
    pub card: Card,
}

/// Label text inside a [`NavButton`].
#[derive(Component)]
pub struct NavButtonLabel {
    pub card: Card,
}

/// The light/dark toggle in the top navbar.
#[derive(Component)]
pub struct ThemeModeButton;

/// Its label ("Light" / "Dark").
#[derive(Component)]
pub struct ThemeModeLabel;

/// The color-vision profile cycler in the top navbar.
#[derive(Component)]
pub struct ProfileButton;

/// Its label (current profile name).
#[derive(Component)]
pub struct ProfileLabel;

/// The auto-rotation on/off switch in the top navbar.
#[derive(Component)]
pub struct AutoRotateButton;

/// Its label ("Auto on" / "Auto off").
#[derive(Component)]
pub struct AutoRotateLabel;

/// Readout of the currently selected card in the top navbar.
#[derive(Component)]
pub struct ActiveCardLabel;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visual_slots_are_a_permutation() {
        let mut seen = [false; Card::COUNT];
        for card in Card::ALL {
            let slot = card.visual_slot();
            assert!(slot < Card::COUNT);
            assert!(!seen[slot], "slot {slot} assigned twice");
            seen[slot] = true;
        }
    }

    #[test]
    fn about_and_contact_trade_places() {
        assert_eq!(Card::About.visual_slot(), 2);
        assert_eq!(Card::Contact.visual_slot(), 0);
        assert_eq!(Card::Projects.visual_slot(), 1);
        assert_eq!(Card::Settings.visual_slot(), 3);
    }

    #[test]
    fn from_visual_slot_inverts_the_table() {
        for card in Card::ALL {
            assert_eq!(Card::from_visual_slot(card.visual_slot()), Some(card));
        }
        assert_eq!(Card::from_visual_slot(4), None);
    }

    #[test]
    fn neighbors_wrap_in_declaration_order() {
        assert_eq!(Card::About.previous(), Card::Settings);
        assert_eq!(Card::Settings.next(), Card::About);
        assert_eq!(Card::Contact.previous(), Card::Projects);
        assert_eq!(Card::Contact.next(), Card::Settings);
    }
}
