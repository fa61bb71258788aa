// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Derived per-frame geometry.

use corkboard_store::{CardId, ItemId};
use corkboard_view::ViewportState;
use kurbo::{Point, Vec2};

/// Placement of one card relative to its item's origin.
#[derive(Clone, Debug, PartialEq)]
pub struct CardLayout {
    /// Card key.
    pub id: CardId,
    /// Offset from the item's rendered position.
    pub offset: Vec2,
    /// Tilt in degrees, clockwise.
    pub rotation_deg: f64,
    /// Whether the card is drawn this frame.
    pub visible: bool,
}

/// Placement of one item.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemLayout {
    /// Item key.
    pub id: ItemId,
    /// Paint order.
    pub z_index: i64,
    /// World-space origin after the live drag offset and repulsion.
    pub position: Point,
    /// Repulsion component of `position`.
    pub repulsion: Vec2,
    /// Whether this item is the expanded one.
    pub expanded: bool,
    /// Whether this item is selected.
    pub selected: bool,
    /// Whether this item is being dragged.
    pub dragging: bool,
    /// The cover, drawn at the origin.
    pub cover: Option<CardLayout>,
    /// Stacked cards in fan order.
    pub stacked: Vec<CardLayout>,
}

impl ItemLayout {
    /// Cover followed by stacked cards that are visible.
    pub fn visible_cards(&self) -> impl Iterator<Item = &CardLayout> + '_ {
        self.cover
            .iter()
            .chain(&self.stacked)
            .filter(|card| card.visible)
    }
}

/// Everything a renderer needs for one frame. Items are in paint order.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameLayout {
    /// Transform to draw with.
    pub viewport: ViewportState,
    /// Items sorted by ascending `z_index`.
    pub items: Vec<ItemLayout>,
}

impl FrameLayout {
    /// Looks up an item's layout.
    #[must_use]
    pub fn item(&self, id: &str) -> Option<&ItemLayout> {
        self.items.iter().find(|item| item.id.as_str() == id)
    }
}
