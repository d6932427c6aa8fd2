//! Collaborator interfaces
//!
//! The core never renders, decodes assets or simulates rigid bodies itself.
//! It talks to those services through these narrow traits.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::item_type::BodyShape;

/// Non-owning reference to a body in the physics world.
///
/// The world may drop the body at any time; check [`PhysicsWorld::is_alive`]
/// before relying on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BodyHandle(pub u32);

pub trait PhysicsWorld {
    /// Create a dynamic body. `shape` overrides the default box of `size`.
    fn create_body(&mut self, shape: Option<&BodyShape>, size: Vec2, position: Vec2)
    -> BodyHandle;
    fn remove_body(&mut self, handle: BodyHandle);
    fn is_alive(&self, handle: BodyHandle) -> bool;
    fn set_static(&mut self, handle: BodyHandle, is_static: bool);
    fn apply_force(&mut self, handle: BodyHandle, force: Vec2);
    fn set_velocity(&mut self, handle: BodyHandle, velocity: Vec2);
    fn set_position(&mut self, handle: BodyHandle, position: Vec2);
    /// `None` once the body is gone
    fn position(&self, handle: BodyHandle) -> Option<Vec2>;
    /// Engine-owned rest detection (velocity under threshold long enough)
    fn is_settled(&self, handle: BodyHandle) -> bool;
}

/// Visible world rectangle, vertical extent plus horizontal middle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub top: f32,
    pub bottom: f32,
    pub mid_x: f32,
}

impl Viewport {
    pub fn contains_y(&self, y: f32) -> bool {
        y >= self.top && y <= self.bottom
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    SineInOut,
}

pub trait Camera {
    fn pan(&mut self, target: Vec2, duration_ms: f32, easing: Easing);
    fn viewport(&self) -> Viewport;
    /// World position of the view center
    fn center(&self) -> Vec2;
    fn scroll_x(&self) -> f32;
    fn set_scroll_x(&mut self, x: f32);
}

/// Sprite animation player. Completion comes back through
/// `RoundSession::on_animation_complete`.
pub trait Animator {
    fn play(&mut self, name: &str, restart: bool);
}
