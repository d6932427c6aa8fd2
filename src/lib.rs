//! Boat Stacker - gameplay core of a physics stacking game
//!
//! Core modules:
//! - `sim`: Round/charge state machine, item lifecycle, boat choreography
//! - `headless`: Headless physics world, camera and animator collaborators
//! - `settings`: Data-driven game configuration
//! - `error`: Construction-time errors
//!
//! Rendering, asset decoding and input devices live outside this crate and
//! are reached through the traits in [`sim::collab`].

pub mod error;
pub mod headless;
pub mod settings;
pub mod sim;

pub use error::SessionError;
pub use settings::GameConfig;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (ms, 60 Hz)
    pub const SIM_DT_MS: f32 = 1000.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Row the tower height is measured from (world y, grows downward)
    pub const BASELINE_Y: f32 = 720.0;
    /// Items further than this past the boat are considered lost
    pub const OUT_OF_BOUNDS_MARGIN: f32 = 400.0;

    /// Tower must grow by more than this before the camera pans
    pub const PAN_THRESHOLD: f32 = 100.0;
    /// Vertical offset added to the pan target so the tower top stays in view
    pub const PAN_OFFSET: f32 = 400.0;
    /// Pan duration per pixel of camera displacement (ms)
    pub const PAN_MS_PER_PIXEL: f32 = 8.0;

    /// Tower height per score point
    pub const SCORE_DIVISOR: f32 = 50.0;
    /// Tint applied to items once a round settles them
    pub const SETTLED_TINT: u32 = 0x7878ff;

    /// Charge tuning
    pub const CHARGE_FACTOR: f32 = 100.0;
    pub const MIN_CHARGE: f32 = 2.0;
    pub const MAX_CHARGE: f32 = 15.0;

    /// Boat defaults
    pub const BOAT_Y: f32 = 700.0;
    pub const BOAT_SPEED: f32 = 0.25; // px per ms
    pub const BOAT_ARRIVAL_THRESHOLD: f32 = 2.0;
    pub const BOAT_RETREAT_SPEED: f32 = 0.05;

    /// Demolish sweep
    pub const DEMOLISH_SWEEP_INTERVAL_MS: f64 = 500.0;
    /// Divisor for the height-dependent downward force on demolished items
    pub const DEMOLISH_VERTICAL_FORCE_DIVISOR: f32 = 100_000.0;
    /// Max magnitude of the randomized horizontal demolish force
    pub const DEMOLISH_HORIZONTAL_FORCE: f32 = 0.01;
    /// Forward thrust applied to debris while the boat retreats
    pub const DEBRIS_THRUST: f32 = 0.0005;

    /// Name of the animation whose completion re-enables spawning
    pub const PICKUP_ANIMATION: &str = "pickup_item";
}

/// Player rotation pointing from `origin` toward `target`.
///
/// Zero points straight up; positive angles turn clockwise (screen space,
/// y grows downward).
#[inline]
pub fn aim_rotation(origin: Vec2, target: Vec2) -> f32 {
    (target.x - origin.x).atan2(-(target.y - origin.y))
}

/// Clamp a rotation into the 0..90 degree throw arc
#[inline]
pub fn clamp_throw_angle(rotation: f32) -> f32 {
    rotation.clamp(0.0, std::f32::consts::FRAC_PI_2)
}

/// Unit direction for a rotation (0 = up, screen space)
#[inline]
pub fn rotation_to_direction(rotation: f32) -> Vec2 {
    Vec2::new(rotation.sin(), -rotation.cos())
}
