// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use corkboard_view::ViewportState;
use kurbo::Point;

use crate::id::{CardId, ItemId};
use crate::item::CanvasItem;
use crate::state::PartialState;

/// A state transition request.
///
/// With the `serde` feature, actions are tagged by a `"type"` field in
/// `SCREAMING_SNAKE_CASE`, and any tag this version does not know decodes
/// to [`Action::Unknown`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum Action {
    /// Move an item. No-op if the position is unchanged.
    UpdateItemPosition {
        /// Item to move.
        id: ItemId,
        /// New world-space position.
        position: Point,
    },
    /// Raise an item above every other.
    BringToFront {
        /// Item to raise.
        id: ItemId,
    },
    /// Replace the selection.
    SelectItem {
        /// New selection, or `None` to clear.
        id: Option<ItemId>,
    },
    /// Replace the expanded item.
    SetExpanded {
        /// Item to expand, or `None` to collapse.
        id: Option<ItemId>,
    },
    /// Replace the viewport transform.
    UpdateViewport {
        /// New transform; scale is clamped.
        viewport: ViewportState,
    },
    /// Shallow-merge a snapshot fragment.
    LoadState {
        /// Fields to merge.
        state: PartialState,
    },
    /// Insert an item on top of every other.
    AddItem {
        /// Item to insert; its `z_index` is overwritten.
        item: CanvasItem,
    },
    /// Remove an item.
    DeleteItem {
        /// Item to remove.
        id: ItemId,
    },
    /// Rebuild every item from a list, discarding rearrangement.
    ResetItems {
        /// The initial item list.
        items: Vec<CanvasItem>,
    },
    /// Record a measured card height.
    UpdateCardHeight {
        /// Item holding the card.
        item_id: ItemId,
        /// Measured card.
        card_id: CardId,
        /// New height in world units.
        height: f64,
    },
    /// An action this version does not understand. Always a no-op.
    #[cfg_attr(feature = "serde", serde(other))]
    Unknown,
}

impl Action {
    /// Short stable name, used in diagnostics.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::UpdateItemPosition { .. } => "UPDATE_ITEM_POSITION",
            Self::BringToFront { .. } => "BRING_TO_FRONT",
            Self::SelectItem { .. } => "SELECT_ITEM",
            Self::SetExpanded { .. } => "SET_EXPANDED",
            Self::UpdateViewport { .. } => "UPDATE_VIEWPORT",
            Self::LoadState { .. } => "LOAD_STATE",
            Self::AddItem { .. } => "ADD_ITEM",
            Self::DeleteItem { .. } => "DELETE_ITEM",
            Self::ResetItems { .. } => "RESET_ITEMS",
            Self::UpdateCardHeight { .. } => "UPDATE_CARD_HEIGHT",
            Self::Unknown => "UNKNOWN",
        }
    }
}
