//! Item instances, the item arena and player health

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collab::{BodyHandle, PhysicsWorld};
use super::item_type::DroppableItemType;

/// Stable index into the [`ItemArena`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u32);

/// A placed or thrown item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub item_type: DroppableItemType,
    pub pos: Vec2,
    pub rotation: f32,
    pub body: BodyHandle,
    pub is_static: bool,
    pub has_stopped: bool,
    /// Render tint (None = untinted)
    pub tint: Option<u32>,
    /// False once destroyed; handles stay valid but point at a tombstone
    pub alive: bool,
    /// Released by a demolish sweep
    pub demolishing: bool,
}

impl Item {
    /// Pull the latest body state from the physics world.
    ///
    /// Returns true the first tick the item reports stopped. A body the
    /// world has already dropped marks the item dead.
    pub fn sync(&mut self, physics: &impl PhysicsWorld) -> bool {
        if !self.alive {
            return false;
        }
        match physics.position(self.body) {
            Some(pos) => self.pos = pos,
            None => {
                log::warn!("Item {:?} lost its physics body", self.id);
                self.alive = false;
                return false;
            }
        }
        let settled = self.is_static || physics.is_settled(self.body);
        let just_stopped = settled && !self.has_stopped;
        self.has_stopped = settled;
        just_stopped
    }

    pub fn set_static(&mut self, physics: &mut impl PhysicsWorld, is_static: bool) {
        self.is_static = is_static;
        if !is_static {
            self.has_stopped = false;
        }
        if physics.is_alive(self.body) {
            physics.set_static(self.body, is_static);
        }
    }
}

/// Owns every item ever created; destroyed items stay as tombstones so
/// [`ItemId`]s never dangle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemArena {
    items: Vec<Item>,
}

impl ItemArena {
    pub fn insert(&mut self, item_type: DroppableItemType, pos: Vec2, body: BodyHandle) -> ItemId {
        let id = ItemId(self.items.len() as u32);
        self.items.push(Item {
            id,
            item_type,
            pos,
            rotation: 0.0,
            body,
            is_static: false,
            has_stopped: false,
            tint: None,
            alive: true,
            demolishing: false,
        });
        id
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.get(id.0 as usize)
    }

    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.get_mut(id.0 as usize)
    }

    /// Live item only
    pub fn live_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.get_mut(id).filter(|item| item.alive)
    }

    pub fn is_alive(&self, id: ItemId) -> bool {
        self.get(id).is_some_and(|item| item.alive)
    }

    /// Tombstone the item and drop its body. Idempotent.
    pub fn destroy(&mut self, id: ItemId, physics: &mut impl PhysicsWorld) {
        if let Some(item) = self.get_mut(id) {
            if item.alive {
                item.alive = false;
                physics.remove_body(item.body);
            }
        }
    }

    /// Total items ever created
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Player health: one point per lost item, terminal callback at zero
pub struct Health {
    value: u32,
    depleted: bool,
    on_zero: Option<Box<dyn FnMut()>>,
}

impl Health {
    pub fn new(value: u32) -> Self {
        Self {
            value,
            depleted: value == 0,
            on_zero: None,
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Register the callback fired when health first reaches zero
    pub fn on_zero(&mut self, callback: impl FnMut() + 'static) {
        self.on_zero = Some(Box::new(callback));
    }

    /// Lose one point. Returns true on the call that reaches zero; further
    /// calls at zero do nothing.
    pub fn decrease(&mut self) -> bool {
        if self.value == 0 {
            return false;
        }
        self.value -= 1;
        if self.value == 0 && !self.depleted {
            self.depleted = true;
            if let Some(callback) = self.on_zero.as_mut() {
                callback();
            }
            return true;
        }
        false
    }
}

impl fmt::Debug for Health {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Health")
            .field("value", &self.value)
            .field("depleted", &self.depleted)
            .finish()
    }
}

impl fmt::Display for Health {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
