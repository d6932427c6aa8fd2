//! Headless rigid-body world
//!
//! Axis-aligned boxes under gravity, landing on a moving deck and on each
//! other. Just enough physics to settle a tower without a real engine:
//! - Fixed iteration order (by body id)
//! - Bodies sleep after staying slow for a number of consecutive steps
//! - Static bodies never move but still support others
//!
//! Velocities are in px per 60 Hz frame, forces in px per frame², so a
//! throw impulse means the same thing here as in a frame-stepped engine.

use std::collections::BTreeMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::SessionError;
use crate::sim::{BodyHandle, BodyShape, PhysicsWorld};

/// Length of one reference frame (ms)
const FRAME_MS: f32 = 1000.0 / 60.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Downward acceleration (px/frame²)
    pub gravity: f32,
    /// Speed under which a body counts as resting (px/frame)
    pub sleep_speed: f32,
    /// Consecutive resting steps before a body is settled
    pub sleep_steps: u32,
    /// Horizontal velocity kept per contact step
    pub friction: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 0.25,
            sleep_speed: 0.1,
            sleep_steps: 30,
            friction: 0.8,
        }
    }
}

/// Flat landing surface (the boat deck)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    pub center_x: f32,
    pub half_width: f32,
    pub top_y: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Body {
    pos: Vec2,
    vel: Vec2,
    half: Vec2,
    is_static: bool,
    rest_steps: u32,
    force: Vec2,
}

impl Body {
    fn top(&self) -> f32 {
        self.pos.y - self.half.y
    }

    fn bottom(&self) -> f32 {
        self.pos.y + self.half.y
    }

    fn overlaps_x(&self, other: &Body) -> bool {
        (self.pos.x - other.pos.x).abs() < self.half.x + other.half.x
    }
}

/// Result of resolving one body against what lies beneath it
#[derive(Debug, Clone, Copy)]
struct Contact {
    /// y the body's bottom edge must be moved up to
    surface_y: f32,
    /// Horizontal velocity of the supporting surface
    carry_x: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadlessWorld {
    config: PhysicsConfig,
    bodies: BTreeMap<u32, Body>,
    next_id: u32,
    deck: Option<Deck>,
    deck_velocity: f32,
}

impl HeadlessWorld {
    pub fn new(config: PhysicsConfig) -> Result<Self, SessionError> {
        if !config.gravity.is_finite() || config.gravity < 0.0 {
            return Err(SessionError::PhysicsUnavailable(format!(
                "gravity must be finite and non-negative, got {}",
                config.gravity
            )));
        }
        if config.sleep_steps == 0 {
            return Err(SessionError::PhysicsUnavailable(
                "sleep_steps must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            config,
            bodies: BTreeMap::new(),
            next_id: 0,
            deck: None,
            deck_velocity: 0.0,
        })
    }

    /// Move the deck; bodies resting on it are carried along
    pub fn set_deck(&mut self, deck: Deck, delta: f32) {
        if let Some(old) = self.deck {
            if delta > 0.0 {
                self.deck_velocity = (deck.center_x - old.center_x) / (delta / FRAME_MS);
            }
        }
        self.deck = Some(deck);
    }

    /// Advance all dynamic bodies by `delta` ms
    pub fn step(&mut self, delta: f32) {
        let ids: Vec<u32> = self.bodies.keys().copied().collect();
        for id in ids {
            let Some(mut body) = self.bodies.remove(&id) else {
                continue;
            };
            if !body.is_static {
                self.integrate(&mut body, delta);
            }
            body.force = Vec2::ZERO;
            self.bodies.insert(id, body);
        }
    }

    fn integrate(&self, body: &mut Body, delta: f32) {
        let frames = delta / FRAME_MS;
        body.vel += (Vec2::new(0.0, self.config.gravity) + body.force) * frames;
        body.pos += body.vel * frames;

        if let Some(contact) = self.support_under(body) {
            if body.bottom() >= contact.surface_y && body.vel.y >= 0.0 {
                body.pos.y = contact.surface_y - body.half.y;
                body.vel.y = 0.0;
                body.vel.x = contact.carry_x + (body.vel.x - contact.carry_x) * self.config.friction;
            }
        }

        if body.vel.length() < self.config.sleep_speed {
            body.rest_steps = body.rest_steps.saturating_add(1);
        } else {
            body.rest_steps = 0;
        }
    }

    /// Highest surface below the body's previous top that it overlaps
    /// horizontally, if any
    fn support_under(&self, body: &Body) -> Option<Contact> {
        let mut best: Option<Contact> = None;
        let mut consider = |surface_y: f32, carry_x: f32| {
            if surface_y < body.top() {
                return;
            }
            if best.is_none_or(|b| surface_y < b.surface_y) {
                best = Some(Contact { surface_y, carry_x });
            }
        };

        if let Some(deck) = self.deck {
            if (body.pos.x - deck.center_x).abs() < deck.half_width + body.half.x {
                consider(deck.top_y, self.deck_velocity);
            }
        }
        for other in self.bodies.values() {
            if other.overlaps_x(body) {
                let carry = if other.is_static { 0.0 } else { other.vel.x };
                consider(other.top(), carry);
            }
        }
        best
    }
}

impl PhysicsWorld for HeadlessWorld {
    fn create_body(&mut self, shape: Option<&BodyShape>, size: Vec2, position: Vec2) -> BodyHandle {
        let size = shape.map(|s| s.size()).filter(|s| s.x > 0.0 && s.y > 0.0).unwrap_or(size);
        let id = self.next_id;
        self.next_id += 1;
        self.bodies.insert(
            id,
            Body {
                pos: position,
                vel: Vec2::ZERO,
                half: size / 2.0,
                is_static: false,
                rest_steps: 0,
                force: Vec2::ZERO,
            },
        );
        BodyHandle(id)
    }

    fn remove_body(&mut self, handle: BodyHandle) {
        self.bodies.remove(&handle.0);
    }

    fn is_alive(&self, handle: BodyHandle) -> bool {
        self.bodies.contains_key(&handle.0)
    }

    fn set_static(&mut self, handle: BodyHandle, is_static: bool) {
        if let Some(body) = self.bodies.get_mut(&handle.0) {
            body.is_static = is_static;
            body.vel = Vec2::ZERO;
            body.rest_steps = 0;
        }
    }

    fn apply_force(&mut self, handle: BodyHandle, force: Vec2) {
        if let Some(body) = self.bodies.get_mut(&handle.0) {
            body.force += force;
            body.rest_steps = 0;
        }
    }

    fn set_velocity(&mut self, handle: BodyHandle, velocity: Vec2) {
        if let Some(body) = self.bodies.get_mut(&handle.0) {
            body.vel = velocity;
            body.rest_steps = 0;
        }
    }

    fn set_position(&mut self, handle: BodyHandle, position: Vec2) {
        if let Some(body) = self.bodies.get_mut(&handle.0) {
            body.pos = position;
        }
    }

    fn position(&self, handle: BodyHandle) -> Option<Vec2> {
        self.bodies.get(&handle.0).map(|b| b.pos)
    }

    fn is_settled(&self, handle: BodyHandle) -> bool {
        self.bodies
            .get(&handle.0)
            .is_some_and(|b| b.is_static || b.rest_steps >= self.config.sleep_steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world_with_deck() -> HeadlessWorld {
        let mut world = HeadlessWorld::new(PhysicsConfig::default()).unwrap();
        world.set_deck(
            Deck {
                center_x: 640.0,
                half_width: 200.0,
                top_y: 680.0,
            },
            16.0,
        );
        world
    }

    #[test]
    fn test_rejects_bad_config() {
        let bad = PhysicsConfig {
            gravity: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            HeadlessWorld::new(bad),
            Err(SessionError::PhysicsUnavailable(_))
        ));
    }

    #[test]
    fn test_body_lands_and_settles_on_deck() {
        let mut world = world_with_deck();
        let body = world.create_body(None, Vec2::new(40.0, 40.0), Vec2::new(640.0, 400.0));
        for _ in 0..400 {
            world.step(16.0);
        }
        let pos = world.position(body).unwrap();
        assert!((pos.y - 660.0).abs() < 0.01, "resting at {}", pos.y);
        assert!(world.is_settled(body));
    }

    #[test]
    fn test_bodies_stack() {
        let mut world = world_with_deck();
        let bottom = world.create_body(None, Vec2::new(40.0, 40.0), Vec2::new(640.0, 600.0));
        let top = world.create_body(None, Vec2::new(40.0, 20.0), Vec2::new(645.0, 300.0));
        for _ in 0..500 {
            world.step(16.0);
        }
        let bottom_pos = world.position(bottom).unwrap();
        let top_pos = world.position(top).unwrap();
        assert!((bottom_pos.y - 660.0).abs() < 0.01);
        assert!((top_pos.y - 630.0).abs() < 0.01, "top resting at {}", top_pos.y);
        assert!(world.is_settled(top));
    }

    #[test]
    fn test_body_off_deck_keeps_falling() {
        let mut world = world_with_deck();
        let body = world.create_body(None, Vec2::new(40.0, 40.0), Vec2::new(100.0, 400.0));
        for _ in 0..200 {
            world.step(16.0);
        }
        assert!(world.position(body).unwrap().y > 1000.0);
        assert!(!world.is_settled(body));
    }

    #[test]
    fn test_static_body_does_not_move() {
        let mut world = world_with_deck();
        let body = world.create_body(None, Vec2::new(40.0, 40.0), Vec2::new(100.0, 100.0));
        world.set_static(body, true);
        world.apply_force(body, Vec2::new(1.0, 1.0));
        world.step(16.0);
        assert_eq!(world.position(body), Some(Vec2::new(100.0, 100.0)));
        assert!(world.is_settled(body));
    }

    #[test]
    fn test_custom_shape_sets_extent() {
        let mut world = world_with_deck();
        let shape = BodyShape {
            label: None,
            vertices: vec![Vec2::ZERO, Vec2::new(100.0, 0.0), Vec2::new(100.0, 10.0)],
        };
        let body = world.create_body(Some(&shape), Vec2::splat(40.0), Vec2::new(640.0, 600.0));
        for _ in 0..300 {
            world.step(16.0);
        }
        assert!((world.position(body).unwrap().y - 675.0).abs() < 0.01);
    }
}
