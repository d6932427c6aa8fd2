//! Charge/throw controller
//!
//! Press starts charging the held item; release converts the press
//! duration into a throw impulse. Out-of-order input is ignored.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::item::ItemId;
use super::item_type::DroppableItemType;
use super::queue::ItemQueue;
use crate::consts::PICKUP_ANIMATION;
use crate::settings::GameConfig;
use crate::{clamp_throw_angle, rotation_to_direction};

/// A release that should be applied to the physics world
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Throw {
    pub item: ItemId,
    pub item_type: DroppableItemType,
    pub velocity: Vec2,
    pub charge: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeController {
    charge_factor: f32,
    min_charge: f32,
    max_charge: f32,
    throw_variant: bool,
    /// Cleared on throw, restored when the pickup animation finishes
    pub can_spawn_item: bool,
    charge_start_time: Option<f64>,
    /// Player rotation (0 = up, clockwise positive)
    pub rotation: f32,
    held: Option<ItemId>,
    current_type: Option<DroppableItemType>,
    queue: ItemQueue,
    awaiting_pickup: bool,
}

impl ChargeController {
    pub fn new(config: &GameConfig, mut queue: ItemQueue) -> Self {
        let current_type = queue.advance(None);
        Self {
            charge_factor: config.charge_factor,
            min_charge: config.min_charge,
            max_charge: config.max_charge,
            throw_variant: config.throw_variant,
            can_spawn_item: false,
            charge_start_time: None,
            rotation: 0.0,
            held: None,
            current_type,
            queue,
            awaiting_pickup: false,
        }
    }

    pub fn current_type(&self) -> Option<DroppableItemType> {
        self.current_type
    }

    pub fn queue(&self) -> &ItemQueue {
        &self.queue
    }

    pub fn held(&self) -> Option<ItemId> {
        self.held
    }

    pub fn is_charging(&self) -> bool {
        self.charge_start_time.is_some()
    }

    /// Begin charging. Returns the type to hold if a new held item must be
    /// spawned.
    pub fn press_start(
        &mut self,
        now: f64,
        round_item_count: u32,
        items_per_round: u32,
    ) -> Option<DroppableItemType> {
        if !self.can_spawn_item || round_item_count >= items_per_round {
            log::debug!("Ignoring press: spawning not permitted");
            return None;
        }
        if self.charge_start_time.is_some() {
            return None;
        }
        let current = self.current_type?;
        self.charge_start_time = Some(now);
        if self.held.is_none() { Some(current) } else { None }
    }

    /// Attach the freshly spawned held item
    pub fn hold(&mut self, item: ItemId) {
        self.held = Some(item);
    }

    /// Charge for a press held until `now`, clamped to the configured range
    pub fn charge_at(&self, now: f64) -> Option<f32> {
        let start = self.charge_start_time?;
        let raw = ((now - start) / self.charge_factor as f64) as f32;
        Some(raw.clamp(self.min_charge, self.max_charge))
    }

    /// Finish charging and release the held item
    pub fn press_end(&mut self, now: f64) -> Option<Throw> {
        if !self.can_spawn_item {
            return None;
        }
        let Some(charge) = self.charge_at(now) else {
            log::debug!("Not handling release, no charge started");
            return None;
        };
        self.charge_start_time = None;
        let item = self.held.take()?;
        let item_type = self.current_type?;

        let velocity = if self.throw_variant {
            rotation_to_direction(clamp_throw_angle(self.rotation)) * charge
        } else {
            Vec2::ZERO
        };

        self.current_type = self.queue.advance(self.current_type);
        self.can_spawn_item = false;
        log::debug!("Liftoff! {} with charge {:.2}", item_type.name(), charge);

        Some(Throw {
            item,
            item_type,
            velocity,
            charge,
        })
    }

    /// Wait for the pickup animation before allowing the next spawn
    pub fn await_pickup(&mut self) {
        self.awaiting_pickup = true;
    }

    pub fn is_awaiting_pickup(&self) -> bool {
        self.awaiting_pickup
    }

    /// Animation completion event. Only a pending pickup re-enables spawning.
    pub fn on_animation_complete(&mut self, name: &str) -> bool {
        if name != PICKUP_ANIMATION || !self.awaiting_pickup {
            return false;
        }
        self.awaiting_pickup = false;
        self.can_spawn_item = true;
        true
    }

    /// Drop pending continuations and any in-progress charge
    pub fn cancel(&mut self) {
        self.awaiting_pickup = false;
        self.charge_start_time = None;
        self.can_spawn_item = false;
    }

    /// Advance the queue without a throw (item rain)
    pub fn take_next_type(&mut self) -> Option<DroppableItemType> {
        let taken = self.current_type;
        self.current_type = self.queue.advance(taken);
        taken
    }

    /// Number of types in circulation (held type included)
    pub fn types_in_circulation(&self) -> usize {
        self.queue.len() + usize::from(self.current_type.is_some())
    }
}
