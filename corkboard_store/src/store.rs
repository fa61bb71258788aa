// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use corkboard_view::ViewportState;
use tracing::trace;

use crate::action::Action;
use crate::item::CanvasItem;
use crate::reducer::reduce;
use crate::state::CanvasState;

/// Handle returned by [`CanvasStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&Arc<CanvasState>)>;

/// Owns the current [`CanvasState`] and the item list it was created from.
///
/// Consumers either subscribe for change notifications or poll
/// [`revision`](Self::revision), which increments only when a dispatch
/// produced a new state.
pub struct CanvasStore {
    state: Arc<CanvasState>,
    initial_items: Vec<CanvasItem>,
    revision: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl fmt::Debug for CanvasStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CanvasStore")
            .field("state", &self.state)
            .field("initial_items", &self.initial_items.len())
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl CanvasStore {
    /// Creates a store from the initial item list with an identity viewport.
    #[must_use]
    pub fn new(initial_items: Vec<CanvasItem>) -> Self {
        Self::with_viewport(initial_items, ViewportState::IDENTITY)
    }

    /// Creates a store from the initial item list and viewport.
    #[must_use]
    pub fn with_viewport(initial_items: Vec<CanvasItem>, viewport: ViewportState) -> Self {
        let state = CanvasState::from_items(initial_items.iter().cloned()).with_viewport(viewport);
        Self {
            state: Arc::new(state),
            initial_items,
            revision: 0,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &Arc<CanvasState> {
        &self.state
    }

    /// Items the store was created from.
    #[must_use]
    pub fn initial_items(&self) -> &[CanvasItem] {
        &self.initial_items
    }

    /// Number of dispatches that changed the state.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Applies `action`. Returns `true` and notifies subscribers if the state
    /// changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let name = action.name();
        let next = reduce(&self.state, action);
        let changed = !Arc::ptr_eq(&next, &self.state);
        if changed {
            self.state = next;
            self.revision = self.revision.wrapping_add(1);
            for (_, listener) in &mut self.listeners {
                listener(&self.state);
            }
        }
        trace!(action = name, changed, revision = self.revision, "dispatch");
        changed
    }

    /// Rebuilds every item from the initial list, discarding rearrangement.
    pub fn reset(&mut self) -> bool {
        let items = self.initial_items.clone();
        self.dispatch(Action::ResetItems { items })
    }

    /// Registers `listener` to run after every state change.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&Arc<CanvasState>) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::Cell;

    use corkboard_layout::CardSize;
    use kurbo::Point;

    use super::*;
    use crate::card::{Card, CardKind};

    fn store() -> CanvasStore {
        CanvasStore::new(vec![CanvasItem::single(
            "a",
            Point::ZERO,
            Card::new("a", CardKind::About, CardSize::default()),
        )])
    }

    #[test]
    fn notifies_only_on_change() {
        let mut store = store();
        let calls = Rc::new(Cell::new(0));
        let seen = Rc::clone(&calls);
        let sub = store.subscribe(move |_| seen.set(seen.get() + 1));

        assert!(store.dispatch(Action::BringToFront { id: "a".into() }));
        assert!(!store.dispatch(Action::BringToFront { id: "b".into() }));
        assert!(!store.dispatch(Action::Unknown));
        assert_eq!(calls.get(), 1);
        assert_eq!(store.revision(), 1);

        assert!(store.unsubscribe(sub));
        assert!(!store.unsubscribe(sub));
        store.dispatch(Action::BringToFront { id: "a".into() });
        assert_eq!(calls.get(), 1);
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn reset_uses_initial_items() {
        let mut store = store();
        store.dispatch(Action::UpdateItemPosition {
            id: "a".into(),
            position: Point::new(9.0, 9.0),
        });
        store.dispatch(Action::SelectItem {
            id: Some("a".into()),
        });
        assert!(store.reset());
        let state = store.state();
        assert_eq!(state.item("a").unwrap().position, Point::ZERO);
        assert_eq!(state.selected_id(), None);
        assert_eq!(store.initial_items().len(), 1);
    }
}
