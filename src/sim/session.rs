//! Round session: owns all gameplay state and drives it from the host's
//! tick and input callbacks.
//!
//! Every callback runs to completion; nothing suspends mid-transition.
//! Delayed work is a [`TimerToken`] or a pending-pickup flag, all of which
//! [`RoundSession::teardown`] cancels.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::boat::{BoatChoreographer, BoatPhase};
use super::charge::ChargeController;
use super::collab::{Animator, Camera, PhysicsWorld};
use super::item::{Health, ItemId};
use super::item_type::{DroppableItemType, ShapeTable};
use super::lifecycle::ItemLifecycle;
use super::queue::ItemQueue;
use super::round::{PanRequest, RoundState};
use super::timers::{TimerKind, TimerToken, Timers};
use crate::aim_rotation;
use crate::consts::{PICKUP_ANIMATION, SETTLED_TINT};
use crate::error::SessionError;
use crate::settings::GameConfig;

/// Horizontal spread of item-rain spawns around the boat
const ITEM_RAIN_SPREAD: f32 = 100.0;

/// Notable things that happened, drained by the host for UI and audio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ItemThrown {
        item: ItemId,
        item_type: DroppableItemType,
        charge: f32,
    },
    ItemLost {
        item: ItemId,
        health: u32,
    },
    RoundEnded {
        score: u32,
        tower_height: f32,
    },
    CameraPan(PanRequest),
    BoatArrived,
    DemolishStarted,
    DemolishFinished,
    GameOver,
}

/// Read-only view for HUD/debug overlays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub item_count: u32,
    pub round_item_count: u32,
    pub items_per_round: u32,
    pub health: u32,
    pub score: u32,
    pub current_tower_height: f32,
    pub last_tower_height: Option<f32>,
    pub can_spawn_item: bool,
    pub current_type: Option<DroppableItemType>,
    pub upcoming: Vec<DroppableItemType>,
    pub boat_x: f32,
    pub boat_phase: BoatPhase,
    pub demolishing: bool,
    pub active_items: usize,
    pub static_items: usize,
}

pub struct RoundSession<P: PhysicsWorld, C: Camera, A: Animator> {
    config: GameConfig,
    physics: P,
    camera: C,
    animator: A,
    shapes: ShapeTable,
    items: ItemLifecycle,
    charge: ChargeController,
    round: RoundState,
    boat: BoatChoreographer,
    timers: Timers,
    rain: Option<TimerToken>,
    rng: Pcg32,
    camera_origin: Vec2,
    /// Thrown item whose stop triggers the pickup animation
    awaiting_stop: Option<ItemId>,
    item_count: u32,
    events: Vec<GameEvent>,
    torn_down: bool,
}

impl<P: PhysicsWorld, C: Camera, A: Animator> RoundSession<P, C, A> {
    /// Build a session. The camera's current center is taken as its origin.
    pub fn new(
        config: GameConfig,
        physics: P,
        camera: C,
        animator: A,
        shapes: ShapeTable,
    ) -> Result<Self, SessionError> {
        config.validate()?;

        let queue = ItemQueue::new(config.queue_types());
        let mut charge = ChargeController::new(&config, queue);
        let boat = BoatChoreographer::new(&config);
        if boat.boat.phase == BoatPhase::Idle {
            charge.can_spawn_item = true;
        }

        let timers = Timers::default();

        let round = RoundState::new(
            config.items_per_round,
            config.baseline_y,
            config.pan_threshold,
            config.pan_offset,
        );
        let items = ItemLifecycle::new(
            Health::new(config.starting_health),
            config.out_of_bounds_margin,
        );
        let camera_origin = camera.center();

        log::info!(
            "Session ready: {} items per round, item rain {}, boat {:?}",
            config.items_per_round,
            if config.item_rain { "on" } else { "off" },
            boat.boat.phase
        );

        Ok(Self {
            rng: Pcg32::seed_from_u64(config.seed),
            config,
            physics,
            camera,
            animator,
            shapes,
            items,
            charge,
            round,
            boat,
            timers,
            rain: None,
            camera_origin,
            awaiting_stop: None,
            item_count: 0,
            events: Vec::new(),
            torn_down: false,
        })
    }

    /// Register the terminal callback fired when health reaches zero
    pub fn on_game_over(&mut self, callback: impl FnMut() + 'static) {
        self.items.health.on_zero(callback);
    }

    /// Per-frame update. `time` is the host clock and `delta` the frame
    /// length, both in ms. Step the physics world before calling this.
    pub fn on_update(&mut self, time: f64, delta: f32) {
        if self.torn_down {
            return;
        }
        // Anchored to the host clock on the first tick
        if self.config.item_rain && self.rain.is_none() {
            self.rain = Some(self.timers.repeating(
                TimerKind::ItemRain,
                time,
                self.config.item_rain_interval_ms,
            ));
        }

        if self.boat.boat.tick(delta) {
            log::info!("Boat arrived at x={:.0}", self.boat.boat.pos.x);
            self.events.push(GameEvent::BoatArrived);
            self.play_pickup();
        }
        self.boat
            .drift(delta, &mut self.items, &mut self.physics, &mut self.camera);

        for (_, kind) in self.timers.fire_due(time) {
            match kind {
                TimerKind::DemolishSweep => {
                    let outcome = self.boat.sweep(
                        &mut self.items,
                        &mut self.physics,
                        &self.camera,
                        &mut self.timers,
                        &mut self.rng,
                    );
                    if outcome.finished {
                        self.events.push(GameEvent::DemolishFinished);
                    }
                }
                TimerKind::ItemRain => self.rain_item(),
            }
        }

        let view = self.camera.viewport();
        let report = self
            .items
            .tick(&mut self.physics, self.boat.boat.pos.x, view.bottom);
        let health = self.items.health.value();
        for &item in &report.lost {
            self.events.push(GameEvent::ItemLost { item, health });
        }
        if report.depleted {
            log::info!("Health depleted, game over");
            self.events.push(GameEvent::GameOver);
        }
        if let Some(thrown) = self.awaiting_stop {
            if report.stopped.contains(&thrown) || report.lost.contains(&thrown) {
                self.awaiting_stop = None;
                self.play_pickup();
            }
        }
        self.items.clear_debris(&mut self.physics, view.bottom);

        if self.round.should_end(self.items.all_stopped()) {
            self.new_round();
        }
    }

    /// Pointer moved (viewport coordinates); the player turns to face it
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        let (px, py) = self.config.player_position;
        self.charge.rotation = aim_rotation(Vec2::new(px, py), Vec2::new(x, y));
    }

    /// Press: start charging, hanging the current item at the hold point
    pub fn on_press_start(&mut self, now: f64) {
        if self.torn_down || self.config.item_rain {
            return;
        }
        let Some(item_type) = self.charge.press_start(
            now,
            self.round.round_item_count,
            self.round.items_per_round,
        ) else {
            return;
        };
        let (hx, hy) = self.config.hold_position;
        let id = self
            .items
            .spawn(&mut self.physics, &self.shapes, item_type, Vec2::new(hx, hy));
        if let Some(item) = self.items.arena.get_mut(id) {
            item.set_static(&mut self.physics, true);
            item.rotation = self.charge.rotation;
        }
        self.item_count += 1;
        self.charge.hold(id);
    }

    /// Release: throw the held item with the accumulated charge
    pub fn on_press_end(&mut self, now: f64) {
        if self.torn_down || self.config.item_rain {
            return;
        }
        let Some(throw) = self.charge.press_end(now) else {
            return;
        };
        let Some(item) = self.items.arena.live_mut(throw.item) else {
            log::warn!("Held item {:?} vanished before release", throw.item);
            self.play_pickup();
            return;
        };
        item.set_static(&mut self.physics, false);
        if self.physics.is_alive(item.body) {
            self.physics.set_velocity(item.body, throw.velocity);
        }
        self.round.record_item();
        self.awaiting_stop = Some(throw.item);
        self.events.push(GameEvent::ItemThrown {
            item: throw.item,
            item_type: throw.item_type,
            charge: throw.charge,
        });
    }

    /// Named animation finished on the renderer side
    pub fn on_animation_complete(&mut self, name: &str) {
        if self.torn_down {
            return;
        }
        if self.charge.on_animation_complete(name) {
            log::debug!("Pickup complete, spawning re-enabled");
        }
    }

    /// Demolish trigger: release the tower and send the boat away
    pub fn on_demolish(&mut self, now: f64) {
        if self.torn_down {
            return;
        }
        let started = self.boat.start_demolish(
            now,
            &mut self.items,
            &mut self.physics,
            &mut self.camera,
            self.camera_origin.y,
            &mut self.timers,
            self.charge.held(),
        );
        if !started {
            return;
        }
        self.events.push(GameEvent::DemolishStarted);
        // A throw still in flight was frozen into the tower; it will never
        // report a stop, so hand the player the next item now
        if let Some(thrown) = self.awaiting_stop {
            if !self.items.is_active(thrown) {
                self.awaiting_stop = None;
                self.play_pickup();
            }
        }
    }

    /// Cancel every pending continuation. The session ignores all further
    /// callbacks.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.boat.cancel(&mut self.timers);
        if let Some(token) = self.rain.take() {
            self.timers.cancel(token);
        }
        self.timers.cancel_all();
        self.charge.cancel();
        self.awaiting_stop = None;
        self.torn_down = true;
        log::info!("Session torn down after {} items", self.item_count);
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Settle the finished round: freeze and tint its items, score the
    /// tower and pan up if it grew enough.
    fn new_round(&mut self) {
        let settled = self.items.retire_active();
        let mut ys = Vec::with_capacity(settled.len());
        for id in settled {
            if let Some(item) = self.items.arena.live_mut(id) {
                item.set_static(&mut self.physics, true);
                item.tint = Some(SETTLED_TINT);
                ys.push(item.pos.y);
            }
        }

        let outcome = self.round.end_round(ys);
        log::info!(
            "Round {} ended: tower {:.0}px, score {}",
            self.round.rounds_completed,
            outcome.tower_height,
            outcome.score
        );
        self.events.push(GameEvent::RoundEnded {
            score: outcome.score,
            tower_height: outcome.tower_height,
        });

        if outcome.pan_due && !self.boat.is_demolishing() {
            let pan = self
                .round
                .pan_request(self.camera.center(), self.camera_origin.y);
            self.camera.pan(pan.target, pan.duration_ms, pan.easing);
            self.events.push(GameEvent::CameraPan(pan));
        }
    }

    fn play_pickup(&mut self) {
        self.animator.play(PICKUP_ANIMATION, true);
        self.charge.await_pickup();
    }

    fn rain_item(&mut self) {
        if self.round.is_full() {
            return;
        }
        let Some(item_type) = self.charge.take_next_type() else {
            return;
        };
        let x = self.boat.boat.pos.x + self.rng.random_range(-ITEM_RAIN_SPREAD..=ITEM_RAIN_SPREAD);
        let y = self.config.hold_position.1;
        let id = self
            .items
            .spawn(&mut self.physics, &self.shapes, item_type, Vec2::new(x, y));
        self.round.record_item();
        self.item_count += 1;
        self.events.push(GameEvent::ItemThrown {
            item: id,
            item_type,
            charge: 0.0,
        });
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            item_count: self.item_count,
            round_item_count: self.round.round_item_count,
            items_per_round: self.round.items_per_round,
            health: self.items.health.value(),
            score: self.round.score,
            current_tower_height: self.round.current_tower_height,
            last_tower_height: self.round.last_tower_height,
            can_spawn_item: self.charge.can_spawn_item,
            current_type: self.charge.current_type(),
            upcoming: self.charge.queue().peek(5),
            boat_x: self.boat.boat.pos.x,
            boat_phase: self.boat.boat.phase,
            demolishing: self.boat.is_demolishing(),
            active_items: self.items.active().len(),
            static_items: self.items.statics().len(),
        }
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn charge(&self) -> &ChargeController {
        &self.charge
    }

    pub fn items(&self) -> &ItemLifecycle {
        &self.items
    }

    pub fn boat(&self) -> &BoatChoreographer {
        &self.boat
    }

    pub fn timers(&self) -> &Timers {
        &self.timers
    }

    pub fn physics(&self) -> &P {
        &self.physics
    }

    pub fn physics_mut(&mut self) -> &mut P {
        &mut self.physics
    }

    pub fn camera(&self) -> &C {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut C {
        &mut self.camera
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut A {
        &mut self.animator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::testing::{FakeAnimator, FakeCamera, FakePhysics};

    type Session = RoundSession<FakePhysics, FakeCamera, FakeAnimator>;

    fn session(config: GameConfig) -> Session {
        RoundSession::new(
            config,
            FakePhysics::default(),
            FakeCamera::new(Vec2::new(640.0, 360.0), 360.0),
            FakeAnimator::default(),
            ShapeTable::default(),
        )
        .unwrap()
    }

    fn moored() -> GameConfig {
        GameConfig {
            skip_boat_arriving: true,
            ..Default::default()
        }
    }

    /// Throw the current item and land it at `y`, finishing the pickup
    fn throw_and_land(s: &mut Session, now: f64, y: f32) -> ItemId {
        s.on_press_start(now);
        let id = s.charge().held().unwrap();
        s.on_press_end(now + 300.0);
        let body = s.items().arena.get(id).unwrap().body;
        s.physics_mut().move_to(body, Vec2::new(640.0, y));
        s.physics_mut().settle(body);
        s.on_update(now + 316.0, 16.0);
        s.on_animation_complete(PICKUP_ANIMATION);
        id
    }

    #[test]
    fn test_rejects_invalid_config() {
        let result = RoundSession::new(
            GameConfig {
                items_per_round: 0,
                ..Default::default()
            },
            FakePhysics::default(),
            FakeCamera::new(Vec2::ZERO, 360.0),
            FakeAnimator::default(),
            ShapeTable::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_spawning_waits_for_boat_arrival() {
        let mut s = session(GameConfig::default());
        assert!(!s.snapshot().can_spawn_item);
        s.on_press_start(0.0);
        assert!(s.charge().held().is_none());

        let mut t = 0.0;
        while s.boat().boat.phase != BoatPhase::Idle {
            t += 16.0;
            s.on_update(t, 16.0);
        }
        assert!(s.drain_events().contains(&GameEvent::BoatArrived));
        assert_eq!(s.animator().played, vec![(PICKUP_ANIMATION.to_string(), true)]);

        s.on_animation_complete(PICKUP_ANIMATION);
        assert!(s.snapshot().can_spawn_item);
    }

    #[test]
    fn test_full_round_scores_and_resets() {
        let mut s = session(moored());
        let ids: Vec<_> = [100.0, 300.0, 500.0]
            .into_iter()
            .enumerate()
            .map(|(i, y)| throw_and_land(&mut s, i as f64 * 1000.0, y))
            .collect();

        let snap = s.snapshot();
        assert_eq!(snap.round_item_count, 0);
        assert_eq!(snap.current_tower_height, 620.0);
        assert_eq!(snap.score, 12);
        assert_eq!(snap.static_items, 3);
        assert_eq!(snap.active_items, 0);
        assert_eq!(snap.item_count, 3);
        for id in ids {
            let item = s.items().arena.get(id).unwrap();
            assert!(item.is_static);
            assert_eq!(item.tint, Some(SETTLED_TINT));
        }
        let events = s.drain_events();
        assert!(events.contains(&GameEvent::RoundEnded {
            score: 12,
            tower_height: 620.0
        }));
        // First round never pans
        assert!(s.camera().pans.is_empty());
    }

    #[test]
    fn test_round_does_not_end_until_items_stop() {
        let mut s = session(moored());
        throw_and_land(&mut s, 0.0, 600.0);
        throw_and_land(&mut s, 1000.0, 600.0);
        s.on_press_start(2000.0);
        let id = s.charge().held().unwrap();
        s.on_press_end(2100.0);
        s.on_update(2116.0, 16.0);
        assert_eq!(s.snapshot().round_item_count, 3);

        // Round full: further presses are ignored
        s.on_animation_complete(PICKUP_ANIMATION);
        s.on_press_start(2200.0);
        assert!(s.charge().held().is_none());

        let body = s.items().arena.get(id).unwrap().body;
        s.physics_mut().settle(body);
        s.on_update(2232.0, 16.0);
        assert_eq!(s.snapshot().round_item_count, 0);
    }

    #[test]
    fn test_second_round_pans_on_growth() {
        let mut s = session(GameConfig {
            items_per_round: 1,
            ..moored()
        });
        throw_and_land(&mut s, 0.0, 620.0); // height 100, first round
        throw_and_land(&mut s, 1000.0, 570.0); // height 150, not > 200
        assert!(s.camera().pans.is_empty());

        throw_and_land(&mut s, 2000.0, 300.0); // height 420 > 200
        assert_eq!(s.camera().pans.len(), 1);
        let (target, duration, _) = s.camera().pans[0];
        // min(360, 360 - 420 + 400) = 340
        assert_eq!(target, Vec2::new(640.0, 340.0));
        assert_eq!(duration, 160.0);
        assert_eq!(s.round().last_tower_height, Some(420.0));
    }

    #[test]
    fn test_lost_thrown_item_still_triggers_pickup() {
        let mut s = session(moored());
        s.on_press_start(0.0);
        let id = s.charge().held().unwrap();
        s.on_press_end(100.0);
        let body = s.items().arena.get(id).unwrap().body;
        s.physics_mut().move_to(body, Vec2::new(640.0, 5000.0));
        s.on_update(116.0, 16.0);

        let snap = s.snapshot();
        assert_eq!(snap.health, 2);
        assert_eq!(snap.active_items, 0);
        assert!(s.charge().is_awaiting_pickup());
        let events = s.drain_events();
        assert!(events.contains(&GameEvent::ItemLost { item: id, health: 2 }));
    }

    #[test]
    fn test_game_over_fires_once() {
        use std::cell::Cell;
        use std::rc::Rc;

        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        let mut s = session(GameConfig {
            items_per_round: 10,
            ..moored()
        });
        s.on_game_over(move || counter.set(counter.get() + 1));

        for i in 0..4 {
            let t = i as f64 * 1000.0;
            s.on_press_start(t);
            let id = s.charge().held().unwrap();
            s.on_press_end(t + 100.0);
            let body = s.items().arena.get(id).unwrap().body;
            s.physics_mut().move_to(body, Vec2::new(640.0, 5000.0));
            s.on_update(t + 116.0, 16.0);
            s.on_animation_complete(PICKUP_ANIMATION);
        }
        assert_eq!(s.snapshot().health, 0);
        assert_eq!(fired.get(), 1);
        let game_overs = s
            .drain_events()
            .into_iter()
            .filter(|e| *e == GameEvent::GameOver)
            .count();
        assert_eq!(game_overs, 1);
    }

    #[test]
    fn test_demolish_then_teardown_cancels_everything() {
        let mut s = session(moored());
        throw_and_land(&mut s, 0.0, 600.0);
        s.on_demolish(1000.0);
        assert!(s.snapshot().demolishing);
        assert_eq!(s.timers().len(), 1);

        s.teardown();
        assert!(s.timers().is_empty());
        let before = s.snapshot();
        s.on_update(5000.0, 16.0);
        s.on_press_start(5000.0);
        s.on_animation_complete(PICKUP_ANIMATION);
        assert_eq!(s.snapshot(), before);
    }

    #[test]
    fn test_demolish_sweep_releases_and_retreats() {
        let mut s = session(moored());
        let id = throw_and_land(&mut s, 0.0, 600.0);
        s.on_demolish(1000.0);
        s.on_update(1500.0, 16.0);

        let item = s.items().arena.get(id).unwrap().clone();
        assert!(item.demolishing);
        assert!(!item.is_static);
        assert!(s.boat().boat.velocity > 0.0);
        assert!(s.timers().is_empty());
        assert!(!s.snapshot().demolishing);
        assert!(s.drain_events().contains(&GameEvent::DemolishFinished));

        // Released debris is left to physics; the view follows the boat
        let x_before = s.physics().body(item.body).pos.x;
        s.on_update(1516.0, 16.0);
        assert_eq!(s.physics().body(item.body).pos.x, x_before);
        assert!(s.camera().scroll_x > 0.0);
    }

    #[test]
    fn test_demolish_mid_flight_hands_over_next_item() {
        let mut s = session(moored());
        s.on_press_start(0.0);
        let thrown = s.charge().held().unwrap();
        s.on_press_end(100.0);
        s.on_demolish(120.0);

        // Frozen into the tower before it could land
        assert!(s.items().statics().contains(&thrown));
        assert_eq!(s.animator().played, vec![(PICKUP_ANIMATION.to_string(), true)]);
        s.on_animation_complete(PICKUP_ANIMATION);
        assert!(s.snapshot().can_spawn_item);

        s.on_press_start(200.0);
        assert!(s.charge().held().is_some());
    }

    #[test]
    fn test_demolish_mid_charge_keeps_held_item() {
        let mut s = session(moored());
        s.on_press_start(0.0);
        let held = s.charge().held().unwrap();
        s.on_demolish(50.0);
        assert_eq!(s.items().active(), &[held]);

        s.on_press_end(300.0);
        assert!(
            s.drain_events()
                .iter()
                .any(|e| matches!(e, GameEvent::ItemThrown { item, .. } if *item == held))
        );
        assert!(!s.items().arena.get(held).unwrap().is_static);
        assert_eq!(s.round().round_item_count, 1);

        let body = s.items().arena.get(held).unwrap().body;
        s.physics_mut().settle(body);
        s.on_update(316.0, 16.0);
        assert_eq!(s.animator().played, vec![(PICKUP_ANIMATION.to_string(), true)]);
        s.on_animation_complete(PICKUP_ANIMATION);
        assert!(s.snapshot().can_spawn_item);
    }

    #[test]
    fn test_pans_and_demolish_resume_after_sweep() {
        let mut s = session(GameConfig {
            items_per_round: 1,
            ..moored()
        });
        throw_and_land(&mut s, 0.0, 620.0); // height 100, first round
        s.on_demolish(1000.0);
        s.on_update(1500.0, 16.0);
        assert!(s.drain_events().contains(&GameEvent::DemolishFinished));
        assert!(!s.boat().is_demolishing());
        let pans_before = s.camera().pans.len();

        throw_and_land(&mut s, 2000.0, 300.0); // height 420 > 200
        assert_eq!(s.camera().pans.len(), pans_before + 1);
        assert_eq!(s.camera().pans[pans_before].0, Vec2::new(640.0, 340.0));

        s.drain_events();
        s.on_demolish(3000.0);
        assert_eq!(s.drain_events(), vec![GameEvent::DemolishStarted]);
        assert!(s.snapshot().demolishing);
    }

    #[test]
    fn test_item_rain_spawns_without_input() {
        let mut s = session(GameConfig {
            item_rain: true,
            ..moored()
        });
        s.on_press_start(0.0);
        assert!(s.charge().held().is_none());

        s.on_update(0.0, 16.0);
        s.on_update(1000.0, 16.0);
        s.on_update(2000.0, 16.0);
        let snap = s.snapshot();
        assert_eq!(snap.item_count, 2);
        assert_eq!(snap.round_item_count, 2);
        assert_eq!(snap.current_type, Some(DroppableItemType::Safe));
    }

    #[test]
    fn test_item_rain_follows_host_clock() {
        let mut s = session(GameConfig {
            item_rain: true,
            items_per_round: 10,
            ..moored()
        });
        let start = 1_000_000.0;
        for i in 0..5 {
            s.on_update(start + i as f64 * 16.0, 16.0);
        }
        assert_eq!(s.snapshot().item_count, 0);

        s.on_update(start + 1000.0, 16.0);
        assert_eq!(s.snapshot().item_count, 1);
        s.on_update(start + 1016.0, 16.0);
        assert_eq!(s.snapshot().item_count, 1);
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let mut s = session(moored());
        s.on_press_end(100.0);
        assert!(s.drain_events().is_empty());
        assert_eq!(s.snapshot().round_item_count, 0);
    }
}
