// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use alloc::vec::Vec;

use corkboard_view::ViewportState;
use hashbrown::HashMap;

use crate::id::ItemId;
use crate::item::CanvasItem;

/// Root aggregate of the canvas.
///
/// Items are held behind [`Arc`] so that a transition clones only the map
/// spine and the one item it touches.
///
/// Invariants maintained by [`reduce`](crate::reduce):
/// - `selected_id` and `expanded_id` are `None` or keys of `items`.
/// - `max_z_index` is at least the largest `z_index` in `items`.
/// - `viewport.scale` lies within the default scale limits.
#[derive(Clone, Debug, PartialEq)]
pub struct CanvasState {
    pub(crate) items: HashMap<ItemId, Arc<CanvasItem>>,
    pub(crate) selected_id: Option<ItemId>,
    pub(crate) expanded_id: Option<ItemId>,
    pub(crate) max_z_index: i64,
    pub(crate) viewport: ViewportState,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            items: HashMap::new(),
            selected_id: None,
            expanded_id: None,
            max_z_index: 0,
            viewport: ViewportState::IDENTITY,
        }
    }
}

impl CanvasState {
    /// Builds a state from an item list, with no selection or expansion.
    ///
    /// `max_z_index` is the largest `z_index` among the items, or 0.
    #[must_use]
    pub fn from_items(items: impl IntoIterator<Item = CanvasItem>) -> Self {
        let mut state = Self::default();
        state.replace_items(items);
        state
    }

    /// Returns `self` with the viewport replaced (scale clamped).
    #[must_use]
    pub fn with_viewport(mut self, viewport: ViewportState) -> Self {
        self.viewport = ViewportState::new(viewport.scale, viewport.position);
        self
    }

    pub(crate) fn replace_items(&mut self, items: impl IntoIterator<Item = CanvasItem>) {
        self.items = items
            .into_iter()
            .map(|item| (item.id.clone(), Arc::new(item)))
            .collect();
        self.max_z_index = self.top_z_index().unwrap_or(0);
    }

    /// Drops dangling references and raises `max_z_index` to cover every item.
    pub(crate) fn repair(&mut self) {
        if self
            .selected_id
            .as_ref()
            .is_some_and(|id| !self.items.contains_key(id))
        {
            self.selected_id = None;
        }
        if self
            .expanded_id
            .as_ref()
            .is_some_and(|id| !self.items.contains_key(id))
        {
            self.expanded_id = None;
        }
        if let Some(top) = self.top_z_index() {
            self.max_z_index = self.max_z_index.max(top);
        }
        self.viewport = ViewportState::new(self.viewport.scale, self.viewport.position);
    }

    fn top_z_index(&self) -> Option<i64> {
        self.items.values().map(|item| item.z_index).max()
    }

    /// All items, keyed by id.
    #[must_use]
    pub fn items(&self) -> &HashMap<ItemId, Arc<CanvasItem>> {
        &self.items
    }

    /// Looks up an item.
    #[must_use]
    pub fn item(&self, id: &str) -> Option<&Arc<CanvasItem>> {
        self.items.get(id)
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in paint order: ascending `z_index`, ties broken by id.
    #[must_use]
    pub fn items_by_z(&self) -> Vec<&Arc<CanvasItem>> {
        let mut items: Vec<_> = self.items.values().collect();
        items.sort_by(|a, b| a.z_index.cmp(&b.z_index).then_with(|| a.id.cmp(&b.id)));
        items
    }

    /// The selected item id.
    #[must_use]
    pub fn selected_id(&self) -> Option<&ItemId> {
        self.selected_id.as_ref()
    }

    /// The expanded item id.
    #[must_use]
    pub fn expanded_id(&self) -> Option<&ItemId> {
        self.expanded_id.as_ref()
    }

    /// Upper bound of every item's `z_index`.
    #[must_use]
    pub fn max_z_index(&self) -> i64 {
        self.max_z_index
    }

    /// Current world-to-screen transform.
    #[must_use]
    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }
}

/// A snapshot fragment merged by [`Action::LoadState`](crate::Action::LoadState).
///
/// `None` fields leave the current value untouched. For the id fields,
/// `Some(None)` clears the reference.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PartialState {
    /// Replacement item list.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub items: Option<Vec<CanvasItem>>,
    /// Replacement selection.
    #[cfg_attr(
        feature = "serde",
        serde(
            skip_serializing_if = "Option::is_none",
            deserialize_with = "present"
        )
    )]
    pub selected_id: Option<Option<ItemId>>,
    /// Replacement expansion.
    #[cfg_attr(
        feature = "serde",
        serde(
            skip_serializing_if = "Option::is_none",
            deserialize_with = "present"
        )
    )]
    pub expanded_id: Option<Option<ItemId>>,
    /// Replacement z-index bound; raised if below an item's `z_index`.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub max_z_index: Option<i64>,
    /// Replacement viewport.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub viewport: Option<ViewportState>,
}

impl PartialState {
    /// Returns `true` if merging would change nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_none()
            && self.selected_id.is_none()
            && self.expanded_id.is_none()
            && self.max_z_index.is_none()
            && self.viewport.is_none()
    }
}

/// A present key, even one holding `null`, deserializes to `Some`.
#[cfg(feature = "serde")]
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de>,
{
    <Option<T> as serde::Deserialize>::deserialize(deserializer).map(Some)
}
