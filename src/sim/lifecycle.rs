//! Item lifecycle: spawning, settle tracking, out-of-bounds removal
//!
//! Items are active while the current round is in play and move to the
//! static set once the round settles (or a demolish begins).

use glam::Vec2;

use super::collab::PhysicsWorld;
use super::item::{Health, ItemArena, ItemId};
use super::item_type::{DroppableItemType, ShapeTable};

/// What happened to active items during one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LifecycleReport {
    /// Items removed for leaving the play area
    pub lost: Vec<ItemId>,
    /// Items that reported stopped for the first time
    pub stopped: Vec<ItemId>,
    /// Health reached zero during this tick
    pub depleted: bool,
}

#[derive(Debug)]
pub struct ItemLifecycle {
    pub arena: ItemArena,
    pub health: Health,
    active: Vec<ItemId>,
    statics: Vec<ItemId>,
    out_of_bounds_margin: f32,
}

impl ItemLifecycle {
    pub fn new(health: Health, out_of_bounds_margin: f32) -> Self {
        Self {
            arena: ItemArena::default(),
            health,
            active: Vec::new(),
            statics: Vec::new(),
            out_of_bounds_margin,
        }
    }

    /// Create an item and its body; it joins the active set
    pub fn spawn(
        &mut self,
        physics: &mut impl PhysicsWorld,
        shapes: &ShapeTable,
        item_type: DroppableItemType,
        pos: Vec2,
    ) -> ItemId {
        let shape = shapes.shape_for(item_type);
        let size = shape.map(|s| s.size()).unwrap_or(item_type.meta().size);
        let body = physics.create_body(shape, size, pos);
        let id = self.arena.insert(item_type, pos, body);
        self.active.push(id);
        log::debug!("Spawned {} as {:?} at ({:.0}, {:.0})", item_type.name(), id, pos.x, pos.y);
        id
    }

    pub fn active(&self) -> &[ItemId] {
        &self.active
    }

    pub fn statics(&self) -> &[ItemId] {
        &self.statics
    }

    /// Advance every active item by one tick.
    ///
    /// Items below `view_bottom` or more than the margin past the boat are
    /// destroyed and cost one health point each.
    pub fn tick(
        &mut self,
        physics: &mut impl PhysicsWorld,
        boat_x: f32,
        view_bottom: f32,
    ) -> LifecycleReport {
        let mut report = LifecycleReport::default();
        let limit_x = boat_x + self.out_of_bounds_margin;
        let mut i = 0;
        while i < self.active.len() {
            let id = self.active[i];
            let Some(item) = self.arena.get_mut(id) else {
                self.active.remove(i);
                continue;
            };
            let just_stopped = item.sync(physics);
            if !item.alive {
                // Body vanished under us; nothing left to penalize
                self.active.remove(i);
                continue;
            }

            if item.pos.y > view_bottom || item.pos.x > limit_x {
                log::info!(
                    "{} fell out of bounds at ({:.0}, {:.0})",
                    item.item_type.name(),
                    item.pos.x,
                    item.pos.y
                );
                self.arena.destroy(id, physics);
                self.active.remove(i);
                report.lost.push(id);
                if self.health.decrease() {
                    report.depleted = true;
                }
                continue;
            }

            if just_stopped {
                report.stopped.push(id);
            }
            i += 1;
        }
        report
    }

    /// True iff every active item has come to rest
    pub fn all_stopped(&self) -> bool {
        self.active
            .iter()
            .filter_map(|id| self.arena.get(*id))
            .filter(|item| item.alive)
            .all(|item| item.has_stopped)
    }

    /// Move the whole active set into the static set, returning what moved
    pub fn retire_active(&mut self) -> Vec<ItemId> {
        let moved = std::mem::take(&mut self.active);
        self.statics.extend(moved.iter().copied());
        moved
    }

    /// Like [`retire_active`](Self::retire_active) but `keep` stays active
    pub fn retire_active_except(&mut self, keep: Option<ItemId>) -> Vec<ItemId> {
        let (kept, moved): (Vec<ItemId>, Vec<ItemId>) = std::mem::take(&mut self.active)
            .into_iter()
            .partition(|id| Some(*id) == keep);
        self.active = kept;
        self.statics.extend(moved.iter().copied());
        moved
    }

    /// Whether `id` is still in the active set
    pub fn is_active(&self, id: ItemId) -> bool {
        self.active.contains(&id)
    }

    /// Drop demolished debris that has fallen past `view_bottom`.
    /// Debris is expected to leave, so health is untouched.
    pub fn clear_debris(&mut self, physics: &mut impl PhysicsWorld, view_bottom: f32) -> usize {
        let arena = &mut self.arena;
        let before = self.statics.len();
        self.statics.retain(|id| {
            let Some(item) = arena.get_mut(*id) else {
                return false;
            };
            if !item.alive {
                return false;
            }
            if item.demolishing {
                if let Some(pos) = physics.position(item.body) {
                    item.pos = pos;
                }
                if item.pos.y > view_bottom {
                    arena.destroy(*id, physics);
                    return false;
                }
            }
            true
        });
        before - self.statics.len()
    }
}
