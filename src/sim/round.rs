//! Round state machine, scoring and tower-height tracking
//!
//! `InRound -> RoundEnding -> InRound`. The ending step runs to completion
//! in a single call, so callers only ever observe `InRound` between ticks.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collab::Easing;
use crate::consts::{PAN_MS_PER_PIXEL, SCORE_DIVISOR};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoundPhase {
    #[default]
    InRound,
    RoundEnding,
}

/// Camera move requested by a round end
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanRequest {
    pub target: Vec2,
    pub duration_ms: f32,
    pub easing: Easing,
}

/// Result of settling one round
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub score: u32,
    pub tower_height: f32,
    /// Tower grew enough to warrant a pan (never on the first round)
    pub pan_due: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundState {
    pub phase: RoundPhase,
    pub items_per_round: u32,
    pub round_item_count: u32,
    pub rounds_completed: u32,
    pub current_tower_height: f32,
    pub last_tower_height: Option<f32>,
    pub score: u32,
    baseline_y: f32,
    pan_threshold: f32,
    pan_offset: f32,
}

impl RoundState {
    pub fn new(items_per_round: u32, baseline_y: f32, pan_threshold: f32, pan_offset: f32) -> Self {
        Self {
            phase: RoundPhase::InRound,
            items_per_round,
            round_item_count: 0,
            rounds_completed: 0,
            current_tower_height: 0.0,
            last_tower_height: None,
            score: 0,
            baseline_y,
            pan_threshold,
            pan_offset,
        }
    }

    pub fn is_full(&self) -> bool {
        self.round_item_count >= self.items_per_round
    }

    /// Count one placed item. Returns false (and counts nothing) when full.
    pub fn record_item(&mut self) -> bool {
        if self.is_full() {
            return false;
        }
        self.round_item_count += 1;
        true
    }

    /// Round ends once it is full and everything has stopped
    pub fn should_end(&self, all_stopped: bool) -> bool {
        self.phase == RoundPhase::InRound && self.is_full() && all_stopped
    }

    /// Height of an item above the baseline row
    pub fn height_of(&self, y: f32) -> f32 {
        self.baseline_y - y
    }

    /// Settle the round given the y of every item that just became static.
    ///
    /// Tower height only ever grows; score is derived from the final max
    /// once. Returns to `InRound` before returning.
    pub fn end_round(&mut self, item_ys: impl IntoIterator<Item = f32>) -> RoundOutcome {
        self.phase = RoundPhase::RoundEnding;

        for y in item_ys {
            self.current_tower_height = self.current_tower_height.max(self.height_of(y));
        }
        self.score = (self.current_tower_height / SCORE_DIVISOR).floor().max(0.0) as u32;
        self.round_item_count = 0;
        self.rounds_completed += 1;

        let pan_due = match self.last_tower_height {
            None => {
                self.last_tower_height = Some(self.current_tower_height);
                false
            }
            Some(last) if self.current_tower_height > last + self.pan_threshold => {
                self.last_tower_height = Some(self.current_tower_height);
                true
            }
            Some(_) => false,
        };

        self.phase = RoundPhase::InRound;
        RoundOutcome {
            score: self.score,
            tower_height: self.current_tower_height,
            pan_due,
        }
    }

    /// Where the camera should go to keep the tower top in view.
    ///
    /// Never pans below the current center; duration scales with distance.
    pub fn pan_request(&self, camera_center: Vec2, camera_origin_y: f32) -> PanRequest {
        let y = camera_center
            .y
            .min(camera_origin_y - self.current_tower_height + self.pan_offset);
        let diff = (camera_center.y - y).abs();
        PanRequest {
            target: Vec2::new(camera_center.x, y),
            duration_ms: PAN_MS_PER_PIXEL * diff.floor(),
            easing: Easing::SineInOut,
        }
    }
}
