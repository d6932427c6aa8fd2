//! Headless collaborators
//!
//! Stand-ins for the physics engine, camera and sprite animator so a
//! session can run without a renderer: the demo binary and the
//! integration tests drive the core through these.

pub mod animator;
pub mod camera;
pub mod world;

pub use animator::{AnimationSpec, HeadlessAnimator};
pub use camera::HeadlessCamera;
pub use world::{Deck, HeadlessWorld, PhysicsConfig};
