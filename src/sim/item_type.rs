//! Droppable item types and their static metadata
//!
//! The set of types is closed; everything a type needs (texture id, optional
//! custom collision shape, default body size) comes from [`DroppableItemType::meta`].

use std::collections::HashMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::SessionError;

/// Every item the player can stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DroppableItemType {
    CardboardBox,
    ShippingContainer,
    Safe,
    WoodenCrate,
    GrassBlock,
    RotaryPhone,
    GiftBox,
    CrtScreen,
    WashingMachine,
    WidePainting,
    WidePlank,
}

/// Per-type metadata record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemTypeMeta {
    /// Name used as the shape-table key
    pub name: &'static str,
    /// Texture resource id
    pub res: &'static str,
    /// Whether the type ships a custom collision shape
    pub has_custom_shape: bool,
    /// Default body size (px) when no custom shape is used
    pub size: Vec2,
}

impl DroppableItemType {
    /// All types, in default queue order
    pub const ALL: [DroppableItemType; 11] = [
        DroppableItemType::CardboardBox,
        DroppableItemType::ShippingContainer,
        DroppableItemType::Safe,
        DroppableItemType::WoodenCrate,
        DroppableItemType::GrassBlock,
        DroppableItemType::RotaryPhone,
        DroppableItemType::GiftBox,
        DroppableItemType::CrtScreen,
        DroppableItemType::WashingMachine,
        DroppableItemType::WidePainting,
        DroppableItemType::WidePlank,
    ];

    pub fn meta(&self) -> ItemTypeMeta {
        use DroppableItemType::*;
        let (name, res, has_custom_shape, w, h) = match self {
            CardboardBox => ("cardboard_box", "assets/items/cardboard_box.png", false, 48.0, 40.0),
            ShippingContainer => (
                "shipping_container",
                "assets/items/shipping_container.png",
                false,
                128.0,
                48.0,
            ),
            Safe => ("safe", "assets/items/safe.png", false, 48.0, 56.0),
            WoodenCrate => ("wooden_crate", "assets/items/wooden_crate.png", false, 48.0, 48.0),
            GrassBlock => ("grass_block", "assets/items/grass_block.png", false, 48.0, 48.0),
            RotaryPhone => ("rotary_phone", "assets/items/rotary_phone.png", true, 40.0, 28.0),
            GiftBox => ("gift_box", "assets/items/gift_box.png", false, 40.0, 40.0),
            CrtScreen => ("crt_screen", "assets/items/crt_screen.png", true, 56.0, 52.0),
            WashingMachine => (
                "washing_machine",
                "assets/items/washing_machine.png",
                true,
                56.0,
                64.0,
            ),
            WidePainting => ("wide_painting", "assets/items/wide_painting.png", true, 112.0, 24.0),
            WidePlank => ("wide_plank", "assets/items/wide_plank.png", false, 144.0, 12.0),
        };
        ItemTypeMeta {
            name,
            res,
            has_custom_shape,
            size: Vec2::new(w, h),
        }
    }

    pub fn name(&self) -> &'static str {
        self.meta().name
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }
}

/// A custom collision polygon, in body-local coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyShape {
    #[serde(default)]
    pub label: Option<String>,
    pub vertices: Vec<Vec2>,
}

impl BodyShape {
    /// Axis-aligned extent of the polygon
    pub fn size(&self) -> Vec2 {
        let Some(first) = self.vertices.first() else {
            return Vec2::ZERO;
        };
        let (min, max) = self
            .vertices
            .iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)));
        max - min
    }
}

/// Shape lookups keyed by item-type name (loaded from a JSON resource)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeTable {
    shapes: HashMap<String, BodyShape>,
}

impl ShapeTable {
    pub fn from_json(json: &str) -> Result<Self, SessionError> {
        serde_json::from_str(json).map_err(|e| SessionError::ShapeTable(e.to_string()))
    }

    pub fn insert(&mut self, name: impl Into<String>, shape: BodyShape) {
        self.shapes.insert(name.into(), shape);
    }

    pub fn get(&self, name: &str) -> Option<&BodyShape> {
        self.shapes.get(name)
    }

    /// Custom shape for a type, if it has one and the table provides it.
    /// A type flagged with a custom shape that the table lacks falls back
    /// to the default body.
    pub fn shape_for(&self, item_type: DroppableItemType) -> Option<&BodyShape> {
        let meta = item_type.meta();
        if !meta.has_custom_shape {
            return None;
        }
        let shape = self.shapes.get(meta.name);
        if shape.is_none() {
            log::warn!("No shape data for {}, using default body", meta.name);
        }
        shape
    }
}
