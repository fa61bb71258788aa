// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;

use corkboard_view::ViewportState;

use crate::action::Action;
use crate::id::ItemId;
use crate::item::CanvasItem;
use crate::state::{CanvasState, PartialState};

/// Applies `action` to `state`.
///
/// Pure and synchronous. Whenever the action changes nothing (an unknown id,
/// an unchanged value, [`Action::Unknown`]) the returned handle is the same
/// allocation as `state`, so callers can compare with [`Arc::ptr_eq`] to
/// skip work.
#[must_use]
pub fn reduce(state: &Arc<CanvasState>, action: Action) -> Arc<CanvasState> {
    let next = match action {
        Action::UpdateItemPosition { id, position } => {
            if !position.is_finite() {
                return Arc::clone(state);
            }
            update_item(state, &id, |item| {
                if item.position == position {
                    return false;
                }
                item.position = position;
                true
            })
        }
        Action::BringToFront { id } => bring_to_front(state, &id),
        Action::SelectItem { id } => {
            select(state, id, |s| &s.selected_id, |s, id| s.selected_id = id)
        }
        Action::SetExpanded { id } => {
            select(state, id, |s| &s.expanded_id, |s, id| s.expanded_id = id)
        }
        Action::UpdateViewport { viewport } => update_viewport(state, viewport),
        Action::LoadState { state: partial } => load_state(state, partial),
        Action::AddItem { item } => Some(add_item(state, item)),
        Action::DeleteItem { id } => delete_item(state, &id),
        Action::ResetItems { items } => {
            let mut next = (**state).clone();
            next.replace_items(items);
            next.selected_id = None;
            next.expanded_id = None;
            Some(next)
        }
        Action::UpdateCardHeight {
            item_id,
            card_id,
            height,
        } => {
            if !height.is_finite() || height < 0.0 {
                return Arc::clone(state);
            }
            update_item(state, &item_id, |item| {
                let Some(card) = item.card_mut(&card_id) else {
                    return false;
                };
                if card.size.height == Some(height) {
                    return false;
                }
                card.size.height = Some(height);
                true
            })
        }
        Action::Unknown => None,
    };
    next.map_or_else(|| Arc::clone(state), Arc::new)
}

/// Runs `edit` on a copy of item `id`; keeps the copy only if `edit` reports
/// a change.
fn update_item(
    state: &CanvasState,
    id: &ItemId,
    edit: impl FnOnce(&mut CanvasItem) -> bool,
) -> Option<CanvasState> {
    let current = state.items.get(id)?;
    let mut item = CanvasItem::clone(current);
    if !edit(&mut item) {
        return None;
    }
    let mut next = state.clone();
    next.items.insert(id.clone(), Arc::new(item));
    Some(next)
}

fn bring_to_front(state: &CanvasState, id: &ItemId) -> Option<CanvasState> {
    let z = state.max_z_index + 1;
    let mut next = update_item(state, id, |item| {
        item.z_index = z;
        true
    })?;
    next.max_z_index = z;
    Some(next)
}

fn select(
    state: &CanvasState,
    id: Option<ItemId>,
    get: impl Fn(&CanvasState) -> &Option<ItemId>,
    set: impl FnOnce(&mut CanvasState, Option<ItemId>),
) -> Option<CanvasState> {
    if get(state) == &id {
        return None;
    }
    if id.as_ref().is_some_and(|id| !state.items.contains_key(id)) {
        return None;
    }
    let mut next = state.clone();
    set(&mut next, id);
    Some(next)
}

fn is_finite(viewport: &ViewportState) -> bool {
    viewport.scale.is_finite() && viewport.position.is_finite()
}

fn update_viewport(state: &CanvasState, viewport: ViewportState) -> Option<CanvasState> {
    let viewport = ViewportState::new(viewport.scale, viewport.position);
    if !is_finite(&viewport) || viewport == state.viewport {
        return None;
    }
    let mut next = state.clone();
    next.viewport = viewport;
    Some(next)
}

fn load_state(state: &CanvasState, mut partial: PartialState) -> Option<CanvasState> {
    partial.viewport = partial.viewport.filter(is_finite);
    if partial.is_empty() {
        return None;
    }
    let mut next = state.clone();
    if let Some(items) = partial.items {
        next.replace_items(items);
    }
    if let Some(selected) = partial.selected_id {
        next.selected_id = selected;
    }
    if let Some(expanded) = partial.expanded_id {
        next.expanded_id = expanded;
    }
    if let Some(max_z_index) = partial.max_z_index {
        next.max_z_index = max_z_index;
    }
    if let Some(viewport) = partial.viewport {
        next.viewport = viewport;
    }
    next.repair();
    Some(next)
}

fn add_item(state: &CanvasState, mut item: CanvasItem) -> CanvasState {
    let z = state.max_z_index + 1;
    item.z_index = z;
    let mut next = state.clone();
    next.items.insert(item.id.clone(), Arc::new(item));
    next.max_z_index = z;
    next
}

fn delete_item(state: &CanvasState, id: &ItemId) -> Option<CanvasState> {
    if !state.items.contains_key(id) {
        return None;
    }
    let mut next = state.clone();
    next.items.remove(id);
    if next.selected_id.as_ref() == Some(id) {
        next.selected_id = None;
    }
    if next.expanded_id.as_ref() == Some(id) {
        next.expanded_id = None;
    }
    Some(next)
}
