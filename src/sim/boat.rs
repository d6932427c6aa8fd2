//! Boat motion and the demolish choreography
//!
//! The boat approaches its mooring, idles while the tower is built, and
//! retreats once a demolish sweep has released the tower back into physics.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collab::{Camera, Easing, PhysicsWorld};
use super::item::ItemId;
use super::lifecycle::ItemLifecycle;
use super::timers::{TimerKind, TimerToken, Timers};
use crate::consts::{
    DEBRIS_THRUST, DEMOLISH_HORIZONTAL_FORCE, DEMOLISH_VERTICAL_FORCE_DIVISOR, PAN_MS_PER_PIXEL,
};
use crate::settings::GameConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoatPhase {
    Approaching,
    Idle,
    Retreating,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boat {
    pub pos: Vec2,
    /// Horizontal velocity (px per ms)
    pub velocity: f32,
    pub phase: BoatPhase,
    target_x: f32,
    arrival_threshold: f32,
}

impl Boat {
    /// Boat heading for `target_x` at `speed`
    pub fn approaching(start: Vec2, target_x: f32, speed: f32, arrival_threshold: f32) -> Self {
        let dir = (target_x - start.x).signum();
        Self {
            pos: start,
            velocity: dir * speed.abs(),
            phase: BoatPhase::Approaching,
            target_x,
            arrival_threshold,
        }
    }

    /// Boat already moored at `target_x`
    pub fn moored(target: Vec2) -> Self {
        Self {
            pos: target,
            velocity: 0.0,
            phase: BoatPhase::Idle,
            target_x: target.x,
            arrival_threshold: 0.0,
        }
    }

    /// Move the boat; returns true on the tick it arrives
    pub fn tick(&mut self, delta: f32) -> bool {
        match self.phase {
            BoatPhase::Idle => false,
            BoatPhase::Retreating => {
                self.pos.x += self.velocity * delta;
                false
            }
            BoatPhase::Approaching => {
                let before = self.target_x - self.pos.x;
                self.pos.x += self.velocity * delta;
                let after = self.target_x - self.pos.x;
                let overshot = before.signum() != after.signum();
                if after.abs() <= self.arrival_threshold || overshot {
                    self.pos.x = self.target_x;
                    self.velocity = 0.0;
                    self.phase = BoatPhase::Idle;
                    return true;
                }
                false
            }
        }
    }

    pub fn retreat(&mut self, speed: f32) {
        self.velocity = speed.abs();
        self.phase = BoatPhase::Retreating;
    }
}

/// Outcome of one sweep invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SweepOutcome {
    pub released: usize,
    /// The sweep reached the origin row and cancelled itself
    pub finished: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoatChoreographer {
    pub boat: Boat,
    sweep: Option<TimerToken>,
    retreat_speed: f32,
    sweep_interval_ms: f64,
}

impl BoatChoreographer {
    pub fn new(config: &GameConfig) -> Self {
        let target = Vec2::new(config.boat_target_x, config.boat_y);
        let boat = if config.skip_boat_arriving {
            Boat::moored(target)
        } else {
            Boat::approaching(
                Vec2::new(config.boat_start_x, config.boat_y),
                config.boat_target_x,
                config.boat_speed,
                config.boat_arrival_threshold,
            )
        };
        Self {
            boat,
            sweep: None,
            retreat_speed: config.boat_retreat_speed,
            sweep_interval_ms: config.demolish_sweep_interval_ms,
        }
    }

    /// A sweep is live. Cleared once the sweep reaches the origin row, after
    /// which another demolish may start.
    pub fn is_demolishing(&self) -> bool {
        self.sweep.is_some()
    }

    pub fn sweep_token(&self) -> Option<TimerToken> {
        self.sweep
    }

    /// Begin a demolish: freeze the round into the static set, pan back to
    /// the origin row and start the repeating sweep. `held` stays active so
    /// a charge in progress can still be thrown. Ignored while a sweep is
    /// already running.
    #[allow(clippy::too_many_arguments)]
    pub fn start_demolish(
        &mut self,
        now: f64,
        items: &mut ItemLifecycle,
        physics: &mut impl PhysicsWorld,
        camera: &mut impl Camera,
        origin_y: f32,
        timers: &mut Timers,
        held: Option<ItemId>,
    ) -> bool {
        if self.is_demolishing() {
            return false;
        }
        let moved = items.retire_active_except(held);
        for id in &moved {
            if let Some(item) = items.arena.live_mut(*id) {
                item.set_static(physics, true);
            }
        }

        let center = camera.center();
        let diff = (center.y - origin_y).abs();
        camera.pan(
            Vec2::new(center.x, origin_y),
            PAN_MS_PER_PIXEL * diff.floor(),
            Easing::SineInOut,
        );

        self.sweep = Some(timers.repeating(TimerKind::DemolishSweep, now, self.sweep_interval_ms));
        log::info!(
            "Demolish started ({} items frozen, {} static)",
            moved.len(),
            items.statics().len()
        );
        true
    }

    /// One sweep pass: release every visible, still-static live item with a
    /// nudge. Once the view top is back down at row 0 the sweep stops for
    /// good and the boat starts to retreat.
    pub fn sweep(
        &mut self,
        items: &mut ItemLifecycle,
        physics: &mut impl PhysicsWorld,
        camera: &impl Camera,
        timers: &mut Timers,
        rng: &mut impl Rng,
    ) -> SweepOutcome {
        let mut outcome = SweepOutcome::default();
        if self.sweep.is_none() {
            return outcome;
        }
        let view = camera.viewport();

        let statics = items.statics().to_vec();
        for id in statics {
            let Some(item) = items.arena.live_mut(id) else {
                continue;
            };
            if !physics.is_alive(item.body) {
                continue;
            }
            if !item.is_static || !view.contains_y(item.pos.y) {
                continue;
            }
            item.demolishing = true;
            item.set_static(physics, false);
            let force = Vec2::new(
                rng.random_range(-DEMOLISH_HORIZONTAL_FORCE..=DEMOLISH_HORIZONTAL_FORCE),
                item.pos.y / DEMOLISH_VERTICAL_FORCE_DIVISOR,
            );
            physics.apply_force(item.body, force);
            outcome.released += 1;
        }

        if view.top >= 0.0 {
            if let Some(token) = self.sweep.take() {
                timers.cancel(token);
            }
            self.boat.retreat(self.retreat_speed);
            outcome.finished = true;
            log::info!("Demolish sweep reached the origin row, boat retreating");
        }
        outcome
    }

    /// Per-tick debris drift: while the boat retreats, items still frozen
    /// in the static set ride along with it and get a little forward
    /// thrust. Items a sweep already released are left to the physics world.
    pub fn drift(
        &mut self,
        delta: f32,
        items: &mut ItemLifecycle,
        physics: &mut impl PhysicsWorld,
        camera: &mut impl Camera,
    ) {
        if self.boat.phase != BoatPhase::Retreating || self.boat.velocity <= 0.0 {
            return;
        }
        let dx = delta * self.boat.velocity;
        let statics = items.statics().to_vec();
        for id in statics {
            let Some(item) = items.arena.live_mut(id) else {
                continue;
            };
            if !item.is_static || !physics.is_alive(item.body) {
                continue;
            }
            if let Some(pos) = physics.position(item.body) {
                item.pos = pos;
            }
            item.pos.x += dx;
            physics.set_position(item.body, item.pos);
            physics.apply_force(item.body, Vec2::new(DEBRIS_THRUST, 0.0));
        }
        camera.set_scroll_x(camera.scroll_x() + dx);
    }

    /// Stop any running sweep
    pub fn cancel(&mut self, timers: &mut Timers) {
        if let Some(token) = self.sweep.take() {
            timers.cancel(token);
        }
    }
}
