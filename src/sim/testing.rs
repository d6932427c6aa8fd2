//! Scripted collaborators for unit tests

use std::collections::HashMap;

use glam::Vec2;

use super::collab::{Animator, BodyHandle, Camera, Easing, PhysicsWorld, Viewport};
use super::item_type::BodyShape;

#[derive(Debug, Clone, Default)]
pub struct FakeBody {
    pub pos: Vec2,
    pub vel: Vec2,
    pub is_static: bool,
    pub settled: bool,
    pub forces: Vec<Vec2>,
    pub custom_shape: bool,
}

/// Bodies only move when a test says so
#[derive(Debug, Default)]
pub struct FakePhysics {
    pub bodies: HashMap<u32, FakeBody>,
    pub next: u32,
    pub removed: usize,
}

impl FakePhysics {
    pub fn body(&self, handle: BodyHandle) -> &FakeBody {
        &self.bodies[&handle.0]
    }

    pub fn settle(&mut self, handle: BodyHandle) {
        if let Some(body) = self.bodies.get_mut(&handle.0) {
            body.settled = true;
        }
    }

    pub fn settle_all(&mut self) {
        for body in self.bodies.values_mut() {
            body.settled = true;
        }
    }

    pub fn move_to(&mut self, handle: BodyHandle, pos: Vec2) {
        if let Some(body) = self.bodies.get_mut(&handle.0) {
            body.pos = pos;
        }
    }
}

impl PhysicsWorld for FakePhysics {
    fn create_body(&mut self, shape: Option<&BodyShape>, _size: Vec2, position: Vec2) -> BodyHandle {
        let handle = BodyHandle(self.next);
        self.next += 1;
        self.bodies.insert(
            handle.0,
            FakeBody {
                pos: position,
                custom_shape: shape.is_some(),
                ..Default::default()
            },
        );
        handle
    }

    fn remove_body(&mut self, handle: BodyHandle) {
        if self.bodies.remove(&handle.0).is_some() {
            self.removed += 1;
        }
    }

    fn is_alive(&self, handle: BodyHandle) -> bool {
        self.bodies.contains_key(&handle.0)
    }

    fn set_static(&mut self, handle: BodyHandle, is_static: bool) {
        if let Some(body) = self.bodies.get_mut(&handle.0) {
            body.is_static = is_static;
        }
    }

    fn apply_force(&mut self, handle: BodyHandle, force: Vec2) {
        if let Some(body) = self.bodies.get_mut(&handle.0) {
            body.forces.push(force);
        }
    }

    fn set_velocity(&mut self, handle: BodyHandle, velocity: Vec2) {
        if let Some(body) = self.bodies.get_mut(&handle.0) {
            body.vel = velocity;
        }
    }

    fn set_position(&mut self, handle: BodyHandle, position: Vec2) {
        self.move_to(handle, position);
    }

    fn position(&self, handle: BodyHandle) -> Option<Vec2> {
        self.bodies.get(&handle.0).map(|b| b.pos)
    }

    fn is_settled(&self, handle: BodyHandle) -> bool {
        self.bodies.get(&handle.0).is_some_and(|b| b.settled)
    }
}

/// Camera that jumps straight to pan targets
#[derive(Debug)]
pub struct FakeCamera {
    pub center: Vec2,
    pub half_height: f32,
    pub scroll_x: f32,
    pub pans: Vec<(Vec2, f32, Easing)>,
}

impl FakeCamera {
    pub fn new(center: Vec2, half_height: f32) -> Self {
        Self {
            center,
            half_height,
            scroll_x: 0.0,
            pans: Vec::new(),
        }
    }
}

impl Camera for FakeCamera {
    fn pan(&mut self, target: Vec2, duration_ms: f32, easing: Easing) {
        self.pans.push((target, duration_ms, easing));
        self.center = target;
    }

    fn viewport(&self) -> Viewport {
        Viewport {
            top: self.center.y - self.half_height,
            bottom: self.center.y + self.half_height,
            mid_x: self.center.x,
        }
    }

    fn center(&self) -> Vec2 {
        self.center
    }

    fn scroll_x(&self) -> f32 {
        self.scroll_x
    }

    fn set_scroll_x(&mut self, x: f32) {
        self.scroll_x = x;
    }
}

#[derive(Debug, Default)]
pub struct FakeAnimator {
    pub played: Vec<(String, bool)>,
}

impl Animator for FakeAnimator {
    fn play(&mut self, name: &str, restart: bool) {
        self.played.push((name.to_string(), restart));
    }
}
