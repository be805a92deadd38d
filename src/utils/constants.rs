// Constants used across the site, structured into modules.

/// Carousel geometry and motion
pub mod carousel_constants {
    use std::f32::consts::PI;

    // Radius of the circle the cards sit on.
    pub const CAROUSEL_RADIUS: f32 = 2.0;

    // Idle spin speed in radians per second.
    pub const AUTO_ROTATION_SPEED: f32 = 0.2;

    // Fraction of the remaining distance blended in per frame while
    // seeking a card, and the residual below which we snap onto it.
    pub const TARGET_LERP_FACTOR: f32 = 0.05;
    pub const TARGET_SNAP_EPSILON: f32 = 0.01;

    // Yaw at which a card's slot faces the camera.
    pub const FRONT_ANGLE_OFFSET: f32 = PI;

    // How long user interaction suppresses the idle spin.
    pub const PAUSE_RESUME_SECS: f32 = 10.0;

    // Minimum horizontal travel for a touch gesture to count as a swipe.
    pub const SWIPE_THRESHOLD_PX: f32 = 50.0;

    // Start with the idle spin disabled on touch-first viewports.
    pub const PAUSE_ON_TOUCH_VIEWPORTS: bool = true;

    // Visual slot for each card in declaration order
    // (About, Projects, Contact, Settings). About and Contact trade
    // places relative to that order; the table is the single source of
    // truth for where each card faces front.
    pub const CARD_VISUAL_SLOTS: [usize; 4] = [2, 1, 0, 3];
}

/// Scene camera
pub mod camera_constants {
    pub const CAMERA_INITIAL_Z: f32 = 5.0;

    // Zoom-in factors applied to the camera's resting distance.
    pub const HOVER_ZOOM_FACTOR: f32 = 0.7;
    pub const MOBILE_ZOOM_FACTOR: f32 = 0.9;

    // Fraction of the remaining zoom distance applied per frame.
    pub const ZOOM_LERP_SPEED: f32 = 0.03;
}

/// Card meshes
pub mod card_constants {
    // Width, height, thickness. Portrait proportions are used on
    // mobile/tablet viewports, landscape everywhere else.
    pub const CARD_PORTRAIT_SCALE: [f32; 3] = [1.2, 1.8, 0.1];
    pub const CARD_LANDSCAPE_SCALE: [f32; 3] = [1.8, 1.2, 0.1];

    pub const CARD_Y: f32 = 0.0;
}

/// Viewport breakpoints in CSS pixels, upper bound exclusive.
pub mod viewport_constants {
    pub const MOBILE_MAX_WIDTH: f32 = 420.0;
    pub const TABLET_MAX_WIDTH: f32 = 768.0;
    pub const LAPTOP_MAX_WIDTH: f32 = 1366.0;
    pub const DESKTOP_MAX_WIDTH: f32 = 1920.0;
    pub const TWO_K_MAX_WIDTH: f32 = 2560.0;
    pub const ULTRAWIDE_MAX_WIDTH: f32 = 3440.0;
}

/// Navbar and text sizing
pub mod ui_constants {
    // Reference height the UI was designed against; UiScale is the
    // window height relative to this, clamped to sane bounds.
    pub const UI_REFERENCE_HEIGHT: f32 = 1080.0;
    pub const UI_SCALE_MIN: f32 = 0.5;
    pub const UI_SCALE_MAX: f32 = 2.0;

    pub const NAVBAR_FONT_SIZE: f32 = 20.0;
    pub const ACTIVE_LABEL_FONT_SIZE: f32 = 22.0;
    pub const NAVBAR_PADDING_PX: f32 = 12.0;
    pub const NAVBAR_GAP_PX: f32 = 16.0;
    pub const BUTTON_PADDING_X_PX: f32 = 18.0;
    pub const BUTTON_PADDING_Y_PX: f32 = 8.0;
}
