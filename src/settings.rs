//! Game configuration
//!
//! Every field has a default, so a JSON document only needs the overrides.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SessionError;
use crate::sim::DroppableItemType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Rounds ===
    /// Items placed before a round can end
    pub items_per_round: u32,
    /// Auto-spawn items on a timer instead of charge/throw
    pub item_rain: bool,
    /// Delay between auto-spawned items (ms)
    pub item_rain_interval_ms: f64,
    /// Starting health (items that may be lost)
    pub starting_health: u32,

    // === Charge ===
    /// Press milliseconds per unit of charge
    pub charge_factor: f32,
    pub min_charge: f32,
    pub max_charge: f32,
    /// Throw along the aim (clamped to 0..90°); false drops straight down
    pub throw_variant: bool,
    /// Where the held item hangs before release
    pub hold_position: (f32, f32),
    /// Player sprite position, used for aiming
    pub player_position: (f32, f32),

    // === World ===
    pub baseline_y: f32,
    pub out_of_bounds_margin: f32,
    pub pan_threshold: f32,
    pub pan_offset: f32,

    // === Boat ===
    pub skip_boat_arriving: bool,
    pub boat_start_x: f32,
    pub boat_target_x: f32,
    pub boat_y: f32,
    /// px per ms
    pub boat_speed: f32,
    pub boat_arrival_threshold: f32,
    pub boat_retreat_speed: f32,
    pub demolish_sweep_interval_ms: f64,

    /// Seed for demolish nudges and item-rain placement
    pub seed: u64,
    /// Upcoming item types; defaults to every type in declaration order
    pub initial_queue: Option<Vec<DroppableItemType>>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            items_per_round: 3,
            item_rain: false,
            item_rain_interval_ms: 1000.0,
            starting_health: 3,

            charge_factor: CHARGE_FACTOR,
            min_charge: MIN_CHARGE,
            max_charge: MAX_CHARGE,
            throw_variant: true,
            hold_position: (160.0, 160.0),
            player_position: (100.0, 200.0),

            baseline_y: BASELINE_Y,
            out_of_bounds_margin: OUT_OF_BOUNDS_MARGIN,
            pan_threshold: PAN_THRESHOLD,
            pan_offset: PAN_OFFSET,

            skip_boat_arriving: false,
            boat_start_x: -400.0,
            boat_target_x: 640.0,
            boat_y: BOAT_Y,
            boat_speed: BOAT_SPEED,
            boat_arrival_threshold: BOAT_ARRIVAL_THRESHOLD,
            boat_retreat_speed: BOAT_RETREAT_SPEED,
            demolish_sweep_interval_ms: DEMOLISH_SWEEP_INTERVAL_MS,

            seed: 0x5eed,
            initial_queue: None,
        }
    }
}

impl GameConfig {
    /// Parse overrides from JSON and validate them
    pub fn from_json(json: &str) -> Result<Self, SessionError> {
        let config: Self = serde_json::from_str(json).map_err(|e| {
            log::warn!("Rejecting config: {}", e);
            SessionError::InvalidConfig {
                field: "<json>",
                reason: "not a valid config document",
            }
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SessionError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), SessionError> {
            Err(SessionError::InvalidConfig { field, reason })
        }
        if self.items_per_round == 0 {
            return invalid("items_per_round", "must be at least 1");
        }
        if !(self.charge_factor > 0.0) {
            return invalid("charge_factor", "must be positive");
        }
        if self.min_charge > self.max_charge {
            return invalid("min_charge", "must not exceed max_charge");
        }
        if self.item_rain && !(self.item_rain_interval_ms > 0.0) {
            return invalid("item_rain_interval_ms", "must be positive");
        }
        if !(self.demolish_sweep_interval_ms > 0.0) {
            return invalid("demolish_sweep_interval_ms", "must be positive");
        }
        if self.initial_queue.as_ref().is_some_and(|q| q.is_empty()) {
            return invalid("initial_queue", "must contain at least one item type");
        }
        Ok(())
    }

    /// Queue contents this config starts with
    pub fn queue_types(&self) -> Vec<DroppableItemType> {
        self.initial_queue
            .clone()
            .unwrap_or_else(|| DroppableItemType::ALL.to_vec())
    }
}
