//! Rotating queue of upcoming item types
//!
//! The held ("current") type lives outside the queue. Advancing pushes the
//! old current to the back and pops the new one from the front, so the
//! number of types in circulation never changes.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::item_type::DroppableItemType;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemQueue {
    upcoming: VecDeque<DroppableItemType>,
}

impl ItemQueue {
    pub fn new(types: impl IntoIterator<Item = DroppableItemType>) -> Self {
        Self {
            upcoming: types.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.upcoming.len()
    }

    pub fn is_empty(&self) -> bool {
        self.upcoming.is_empty()
    }

    /// Next `n` types for the UI preview (fewer if the queue is shorter)
    pub fn peek(&self, n: usize) -> Vec<DroppableItemType> {
        self.upcoming.iter().take(n).copied().collect()
    }

    /// Append a type to the back
    pub fn push(&mut self, item_type: DroppableItemType) {
        self.upcoming.push_back(item_type);
    }

    /// Pop the front type. Callers push the previous current first.
    pub fn rotate(&mut self) -> Option<DroppableItemType> {
        self.upcoming.pop_front()
    }

    /// Push `current` (if any) to the back, then pop the new current
    pub fn advance(&mut self, current: Option<DroppableItemType>) -> Option<DroppableItemType> {
        if let Some(prev) = current {
            self.push(prev);
        }
        self.rotate()
    }
}
