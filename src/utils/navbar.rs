//! Top and bottom navigation bars.
//!
//! The bottom bar carries one button per card; the top bar carries the
//! theme controls and a readout of the selected card. All colors come
//! from the active palette and are refreshed when it changes.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::plugins::portfolio_plugin::CarouselSet;
use crate::utils::constants::ui_constants::{
    ACTIVE_LABEL_FONT_SIZE, BUTTON_PADDING_X_PX, BUTTON_PADDING_Y_PX, NAVBAR_FONT_SIZE,
    NAVBAR_GAP_PX, NAVBAR_PADDING_PX, UI_REFERENCE_HEIGHT, UI_SCALE_MAX, UI_SCALE_MIN,
};
use crate::utils::navigation::CarouselNav;
use crate::utils::objects::{
    ActiveCardLabel, AutoRotateButton, AutoRotateLabel, Card, NavButton, NavButtonLabel,
    ProfileButton, ProfileLabel, ThemeModeButton, ThemeModeLabel,
};
use crate::utils::theme::{ThemeMode, ThemeState};

/// Plugin for the navigation bars.
pub struct NavbarPlugin;

impl Plugin for NavbarPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_navbars)
            .add_systems(
                Update,
                (handle_nav_buttons, handle_theme_buttons, handle_auto_rotate_button)
                    .in_set(CarouselSet::Input),
            )
            .add_systems(
                Update,
                (
                    style_nav_buttons,
                    style_theme_controls,
                    style_auto_rotate_label,
                    update_active_card_label,
                    update_ui_scale,
                )
                    .in_set(CarouselSet::Apply),
            );
    }
}

/// Spawns both bars. Colors are placeholders until the styling systems
/// run on the first frame.
pub fn spawn_navbars(mut commands: Commands, theme: Res<ThemeState>) {
    let colors = theme.colors();

    // Top bar: selected-card readout on the left, theme controls on the
    // right.
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            top: Val::Px(0.0),
            width: Val::Percent(100.0),
            justify_content: JustifyContent::SpaceBetween,
            align_items: AlignItems::Center,
            padding: UiRect::all(Val::Px(NAVBAR_PADDING_PX)),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: ACTIVE_LABEL_FONT_SIZE,
                    ..default()
                },
                TextColor(colors.text),
                ActiveCardLabel,
            ));

            parent
                .spawn(Node {
                    column_gap: Val::Px(NAVBAR_GAP_PX),
                    align_items: AlignItems::Center,
                    ..default()
                })
                .with_children(|controls| {
                    controls
                        .spawn((
                            Button,
                            ThemeModeButton,
                            Node {
                                padding: UiRect::axes(
                                    Val::Px(BUTTON_PADDING_X_PX),
                                    Val::Px(BUTTON_PADDING_Y_PX),
                                ),
                                ..default()
                            },
                            BackgroundColor(colors.accent),
                            BorderRadius::all(Val::Px(6.0)),
                        ))
                        .with_children(|button| {
                            button.spawn((
                                Text::new("Light"),
                                TextFont {
                                    font_size: NAVBAR_FONT_SIZE,
                                    ..default()
                                },
                                TextColor(colors.text),
                                ThemeModeLabel,
                            ));
                        });

                    controls
                        .spawn((
                            Button,
                            ProfileButton,
                            Node {
                                padding: UiRect::axes(
                                    Val::Px(BUTTON_PADDING_X_PX),
                                    Val::Px(BUTTON_PADDING_Y_PX),
                                ),
                                ..default()
                            },
                            BackgroundColor(colors.accent),
                            BorderRadius::all(Val::Px(6.0)),
                        ))
                        .with_children(|button| {
                            button.spawn((
                                Text::new("normal"),
                                TextFont {
                                    font_size: NAVBAR_FONT_SIZE,
                                    ..default()
                                },
                                TextColor(colors.text),
                                ProfileLabel,
                            ));
                        });

                    controls
                        .spawn((
                            Button,
                            AutoRotateButton,
                            Node {
                                padding: UiRect::axes(
                                    Val::Px(BUTTON_PADDING_X_PX),
                                    Val::Px(BUTTON_PADDING_Y_PX),
                                ),
                                ..default()
                            },
                            BackgroundColor(colors.accent),
                            BorderRadius::all(Val::Px(6.0)),
                        ))
                        .with_children(|button| {
                            button.spawn((
                                Text::new("Auto on"),
                                TextFont {
                                    font_size: NAVBAR_FONT_SIZE,
                                    ..default()
                                },
                                TextColor(colors.text),
                                AutoRotateLabel,
                            ));
                        });
                });
        });

    // Bottom bar: one button per card in declaration order.
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(0.0),
            width: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            padding: UiRect::all(Val::Px(NAVBAR_PADDING_PX)),
            column_gap: Val::Px(NAVBAR_GAP_PX),
            ..default()
        })
        .with_children(|parent| {
            for card in Card::ALL {
                parent
                    .spawn((
                        Button,
                        NavButton { card },
                        Node {
                            padding: UiRect::axes(
                                Val::Px(BUTTON_PADDING_X_PX),
                                Val::Px(BUTTON_PADDING_Y_PX),
                            ),
                            ..default()
                        },
                        BackgroundColor(colors.neutral),
                        BorderRadius::all(Val::Px(6.0)),
                    ))
                    .with_children(|button| {
                        button.spawn((
                            Text::new(card.name()),
                            TextFont {
                                font_size: NAVBAR_FONT_SIZE,
                                ..default()
                            },
                            TextColor(colors.primary),
                            NavButtonLabel { card },
                        ));
                    });
            }
        });
}

/// Card buttons rotate the carousel (and restart the interaction pause
/// through the facade).
pub fn handle_nav_buttons(
    interactions: Query<(&Interaction, &NavButton), (Changed<Interaction>, With<Button>)>,
    mut nav: ResMut<CarouselNav>,
) {
    for (interaction, button) in &interactions {
        if *interaction == Interaction::Pressed {
            nav.rotate_to_card(button.card);
        }
    }
}

/// Theme controls flip the mode or cycle the color-vision profile.
pub fn handle_theme_buttons(
    mode_interactions: Query<&Interaction, (Changed<Interaction>, With<ThemeModeButton>)>,
    profile_interactions: Query<&Interaction, (Changed<Interaction>, With<ProfileButton>)>,
    mut theme: ResMut<ThemeState>,
) {
    for interaction in &mode_interactions {
        if *interaction == Interaction::Pressed {
            theme.toggle_mode();
            crate::log!("theme: switched to {} mode", theme.mode.as_str());
        }
    }
    for interaction in &profile_interactions {
        if *interaction == Interaction::Pressed {
            theme.cycle_profile();
            crate::log!("theme: {} palette", theme.profile.as_str());
        }
    }
}

/// The auto-rotate switch flips the idle spin on and off.
pub fn handle_auto_rotate_button(
    interactions: Query<&Interaction, (Changed<Interaction>, With<AutoRotateButton>)>,
    mut nav: ResMut<CarouselNav>,
) {
    for interaction in &interactions {
        if *interaction == Interaction::Pressed {
            nav.toggle_auto_rotation();
            crate::log!(
                "navigation: auto-rotation {}",
                if nav.auto_rotation_enabled { "on" } else { "off" }
            );
        }
    }
}

/// Repaints the card buttons, highlighting the selected one.
pub fn style_nav_buttons(
    theme: Res<ThemeState>,
    nav: Res<CarouselNav>,
    mut last: Local<Option<(ThemeState, Option<Card>)>>,
    mut buttons: Query<(&NavButton, &mut BackgroundColor)>,
    mut labels: Query<(&NavButtonLabel, &mut TextColor)>,
) {
    let snapshot = (*theme, nav.current_card());
    if *last == Some(snapshot) {
        return;
    }
    *last = Some(snapshot);

    let colors = theme.colors();
    let dark = theme.is_dark();
    let button_background = if dark { colors.secondary } else { colors.neutral };
    let active_background = if dark { colors.neutral } else { colors.secondary };
    let label_color = colors.primary;
    let active_label_color = if dark { colors.secondary } else { colors.primary };

    for (button, mut background) in &mut buttons {
        background.0 = if snapshot.1 == Some(button.card) {
            active_background
        } else {
            button_background
        };
    }
    for (label, mut color) in &mut labels {
        color.0 = if snapshot.1 == Some(label.card) {
            active_label_color
        } else {
            label_color
        };
    }
}

/// Keeps the theme controls' labels and colors current.
pub fn style_theme_controls(
    theme: Res<ThemeState>,
    mut mode_labels: Query<
        (&mut Text, &mut TextColor),
        (With<ThemeModeLabel>, Without<ProfileLabel>),
    >,
    mut profile_labels: Query<
        (&mut Text, &mut TextColor),
        (With<ProfileLabel>, Without<ThemeModeLabel>),
    >,
    mut backgrounds: Query<
        &mut BackgroundColor,
        Or<(With<ThemeModeButton>, With<ProfileButton>, With<AutoRotateButton>)>,
    >,
) {
    if !theme.is_changed() {
        return;
    }

    let colors = theme.colors();
    let mode_name = match theme.mode {
        ThemeMode::Light => "Light",
        ThemeMode::Dark => "Dark",
    };

    for (mut text, mut color) in &mut mode_labels {
        text.0 = mode_name.to_string();
        color.0 = colors.text;
    }
    for (mut text, mut color) in &mut profile_labels {
        text.0 = theme.profile.as_str().to_string();
        color.0 = colors.text;
    }
    for mut background in &mut backgrounds {
        background.0 = colors.accent;
    }
}

/// Keeps the auto-rotate switch label in step with the facade flag.
pub fn style_auto_rotate_label(
    theme: Res<ThemeState>,
    nav: Res<CarouselNav>,
    mut last: Local<Option<(ThemeState, bool)>>,
    mut labels: Query<(&mut Text, &mut TextColor), With<AutoRotateLabel>>,
) {
    let snapshot = (*theme, nav.auto_rotation_enabled);
    if *last == Some(snapshot) {
        return;
    }
    *last = Some(snapshot);

    let colors = theme.colors();
    for (mut text, mut color) in &mut labels {
        text.0 = if snapshot.1 { "Auto on" } else { "Auto off" }.to_string();
        color.0 = colors.text;
    }
}

/// Mirrors the selected card into the top bar readout.
pub fn update_active_card_label(
    theme: Res<ThemeState>,
    nav: Res<CarouselNav>,
    mut last: Local<Option<(ThemeState, Option<Card>)>>,
    mut labels: Query<(&mut Text, &mut TextColor), With<ActiveCardLabel>>,
) {
    let snapshot = (*theme, nav.current_card());
    if *last == Some(snapshot) {
        return;
    }
    *last = Some(snapshot);

    let colors = theme.colors();
    for (mut text, mut color) in &mut labels {
        text.0 = snapshot.1.map(Card::name).unwrap_or_default().to_string();
        color.0 = colors.text;
    }
}

/// Scales the whole UI with the window height (reference: 1080p).
pub fn update_ui_scale(
    mut ui_scale: ResMut<UiScale>,
    window_query: Query<&Window, With<PrimaryWindow>>,
) {
    let Ok(window) = window_query.single() else {
        return;
    };

    let scale = (window.height() / UI_REFERENCE_HEIGHT).clamp(UI_SCALE_MIN, UI_SCALE_MAX);
    ui_scale.0 = scale;
}
