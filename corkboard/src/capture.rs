// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::RefCell;
use std::rc::Rc;

use corkboard_event_state::drag::PointerCapture;
use corkboard_store::ItemId;

/// Slot naming the item that currently receives global pointer events.
pub(crate) type CaptureSlot = Rc<RefCell<Option<ItemId>>>;

/// Pointer capture handed to each item's drag controller.
///
/// All captures of one canvas share a slot. Acquiring writes the item's id
/// into it; releasing clears it only if this item still holds it, so a late
/// release from a torn-down item cannot steal another item's capture.
#[derive(Clone, Debug)]
pub struct CanvasCapture {
    item: ItemId,
    slot: CaptureSlot,
}

impl CanvasCapture {
    pub(crate) fn new(item: ItemId, slot: CaptureSlot) -> Self {
        Self { item, slot }
    }

    /// The item this capture belongs to.
    #[must_use]
    pub fn item(&self) -> &ItemId {
        &self.item
    }
}

impl PointerCapture for CanvasCapture {
    fn acquire(&mut self) {
        *self.slot.borrow_mut() = Some(self.item.clone());
    }

    fn release(&mut self) {
        let mut slot = self.slot.borrow_mut();
        if slot.as_ref() == Some(&self.item) {
            *slot = None;
        }
    }
}
