// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::rc::Rc;
use std::sync::Arc;

use corkboard_event_state::drag::{DragController, DragEvent, DragTarget, PointerSample};
use corkboard_event_state::escape::{EscapeGuard, Key};
use corkboard_event_state::outside_click::{OutsideClick, PressRegion};
use corkboard_layout::{
    AutoPan, AutoPanGroup, RepulsionConfig, RepulsionGroup, compute_offsets,
    compute_repulsion_offsets, fan_rotation_deg, plan_auto_pan,
};
use corkboard_store::{Action, CanvasItem, CanvasState, CanvasStore, CardId, ItemId};
use corkboard_view::{ViewportController, ViewportState, WheelInput};
use hashbrown::HashMap;
use kurbo::{Point, Size, Vec2};
use tracing::debug;

use crate::capture::{CanvasCapture, CaptureSlot};
use crate::config::CanvasConfig;
use crate::frame::{CardLayout, FrameLayout, ItemLayout};

/// The canvas controller.
///
/// Owns the store and one [`DragController`] per item, routes host input to
/// them, and derives a [`FrameLayout`] on demand. Nothing derived is written
/// back into the store; only committed positions, z-order, selection,
/// expansion, heights and the viewport are.
///
/// Host contract, per displayed frame:
/// 1) forward pointer, wheel, pinch and key input as it arrives;
/// 2) call [`Canvas::frame`] once;
/// 3) if it returned `true` (or the store revision moved), render
///    [`Canvas::layout`].
#[derive(Debug)]
pub struct Canvas {
    store: CanvasStore,
    config: CanvasConfig,
    drags: HashMap<ItemId, DragController<CanvasCapture>>,
    capture: CaptureSlot,
    viewport: ViewportController,
    outside_click: OutsideClick,
    escape: EscapeGuard,
    last_point: Option<Point>,
}

impl Canvas {
    /// Mounts a canvas over `items`.
    #[must_use]
    pub fn new(items: Vec<CanvasItem>, config: CanvasConfig) -> Self {
        let initial = config.initial_viewport.clamped(config.limits);
        let mut canvas = Self {
            store: CanvasStore::with_viewport(items, initial),
            config,
            drags: HashMap::new(),
            capture: CaptureSlot::default(),
            viewport: ViewportController::new(initial, config.limits, config.zoom, config.window),
            outside_click: OutsideClick::new(config.outside_click),
            escape: EscapeGuard::new(),
            last_point: None,
        };
        canvas.sync();
        canvas
    }

    /// The underlying store.
    #[must_use]
    pub fn store(&self) -> &CanvasStore {
        &self.store
    }

    /// Current committed state.
    #[must_use]
    pub fn state(&self) -> &Arc<CanvasState> {
        self.store.state()
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// Working viewport, including gesture input not yet committed.
    #[must_use]
    pub fn viewport(&self) -> ViewportState {
        self.viewport.state()
    }

    /// The item holding the pointer capture, if any.
    #[must_use]
    pub fn captured_item(&self) -> Option<ItemId> {
        self.capture.borrow().clone()
    }

    /// The drag controller of item `id`.
    #[must_use]
    pub fn drag(&self, id: &str) -> Option<&DragController<CanvasCapture>> {
        self.drags.get(id)
    }

    /// Dispatches `action` and brings controllers in line with the result.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let before = self.store.state().viewport();
        if !self.store.dispatch(action) {
            return false;
        }
        let after = self.store.state().viewport();
        if after != before {
            self.viewport.sync(after);
        }
        self.sync();
        true
    }

    fn sync(&mut self) {
        let state = Arc::clone(self.store.state());
        let scale = state.viewport().scale;

        // Dropping a controller releases its capture.
        self.drags.retain(|id, _| state.items().contains_key(id));
        for (id, item) in state.items() {
            let drag = self.drags.entry(id.clone()).or_insert_with(|| {
                let capture = CanvasCapture::new(id.clone(), Rc::clone(&self.capture));
                DragController::new(item.position, scale, self.config.drag, capture)
            });
            drag.set_position(item.position);
            drag.set_scale(scale);
        }

        let expanded = state.expanded_id().is_some();
        self.outside_click.set_active(expanded);
        self.escape.set_active(expanded);
    }

    // --- item interaction ---

    /// Handles a pointer-down on item `id`. Returns `true` if a drag started.
    ///
    /// A started drag raises the item above every other and selects it.
    pub fn pointer_down_on_item(
        &mut self,
        id: &str,
        sample: PointerSample<'_>,
        target: DragTarget,
    ) -> bool {
        if let Some(point) = sample.point() {
            self.last_point = Some(point);
            let region = if self.state().expanded_id().is_some_and(|e| e.as_str() == id) {
                PressRegion::Inside
            } else {
                PressRegion::Excluded
            };
            self.outside_click.pointer_down(point, region);
        }

        // A second press elsewhere abandons the drag that lost the capture.
        if let Some(other) = self.captured_item().filter(|other| other.as_str() != id)
            && let Some(drag) = self.drags.get_mut(&other)
        {
            drag.unmount();
        }

        let Some(drag) = self.drags.get_mut(id) else {
            return false;
        };
        if drag.begin(sample, target) != Some(DragEvent::Started) {
            return false;
        }
        debug!(item = id, "drag started");

        // The controller ignores store positions while dragging, so the
        // resync below leaves the drag intact.
        let id = ItemId::from(id);
        self.dispatch(Action::BringToFront { id: id.clone() });
        self.dispatch(Action::SelectItem { id: Some(id) });
        true
    }

    /// Handles a global pointer-move.
    ///
    /// Goes to the captured item's drag if there is one, otherwise continues
    /// a background pan.
    pub fn pointer_move(&mut self, sample: PointerSample<'_>) {
        let Some(point) = sample.point() else {
            return;
        };
        self.last_point = Some(point);
        match self.captured_item() {
            Some(id) => {
                if let Some(drag) = self.drags.get_mut(&id) {
                    drag.pointer_move(sample);
                }
            }
            None => self.viewport.pan_to(point),
        }
    }

    /// Handles a global pointer-up. Returns `true` if the state changed.
    ///
    /// Ends any drag (committing the final position), any background pan,
    /// and completes an outside click.
    pub fn pointer_up(&mut self, sample: PointerSample<'_>) -> bool {
        let mut changed = false;
        if let Some(id) = self.captured_item() {
            let ended = self.drags.get_mut(&id).and_then(|drag| drag.end(sample));
            if let Some(DragEvent::Ended { final_position }) = ended {
                debug!(
                    item = id.as_str(),
                    x = final_position.x,
                    y = final_position.y,
                    "drag ended"
                );
                changed |= self.dispatch(Action::UpdateItemPosition {
                    id,
                    position: final_position,
                });
            }
        }

        self.viewport.end_pan();
        changed |= self.commit_viewport();

        if let Some(point) = sample.point().or(self.last_point)
            && self.outside_click.pointer_up(point)
        {
            changed |= self.collapse();
        }
        changed
    }

    /// Handles a pointer-cancel; same as [`Self::pointer_up`].
    pub fn pointer_cancel(&mut self, sample: PointerSample<'_>) -> bool {
        self.pointer_up(sample)
    }

    /// Handles a pointer-down that hit no item. `region` is the host's
    /// classification; only bare background presses start a pan.
    pub fn pointer_down(&mut self, point: Point, region: PressRegion) {
        self.last_point = Some(point);
        self.outside_click.pointer_down(point, region);
        if region == PressRegion::Outside {
            self.viewport.begin_pan(point);
        }
    }

    /// Commits coalesced input. Call once per displayed frame.
    ///
    /// Returns `true` if the layout needs to be redrawn.
    pub fn frame(&mut self) -> bool {
        let mut moved = false;
        if let Some(id) = self.captured_item()
            && let Some(drag) = self.drags.get_mut(&id)
        {
            moved = drag.flush_frame().is_some();
        }
        self.commit_viewport() || moved
    }

    fn commit_viewport(&mut self) -> bool {
        match self.viewport.take_update() {
            Some(viewport) => self.dispatch(Action::UpdateViewport { viewport }),
            None => false,
        }
    }

    /// Enables or disables dragging of one item.
    pub fn set_drag_disabled(&mut self, id: &str, disabled: bool) {
        if let Some(drag) = self.drags.get_mut(id) {
            drag.set_disabled(disabled);
        }
    }

    // --- activation and dismissal ---

    /// Handles a click (press and release without a drag) on item `id`.
    ///
    /// Clicks that end a drag are ignored. Expandable items toggle
    /// expansion; single cards are raised and selected.
    pub fn click_item(&mut self, id: &str) -> bool {
        if self.drags.get(id).is_none_or(|drag| drag.did_drag()) {
            return false;
        }
        let Some(item) = self.state().item(id) else {
            return false;
        };
        let (id, expandable) = (item.id.clone(), item.can_expand());
        if expandable {
            return self.toggle_expanded(&id);
        }
        let raised = self.dispatch(Action::BringToFront { id: id.clone() });
        let selected = self.dispatch(Action::SelectItem { id: Some(id) });
        raised || selected
    }

    /// Expands item `id`, or collapses it if it is already expanded.
    ///
    /// Expanding raises and selects the item, then pans the viewport if the
    /// fanned-out cards would not be fully visible.
    pub fn toggle_expanded(&mut self, id: &ItemId) -> bool {
        if self.state().expanded_id() == Some(id) {
            return self.collapse();
        }
        if self.state().item(id.as_str()).is_none() {
            return false;
        }
        self.commit_viewport();
        self.dispatch(Action::BringToFront { id: id.clone() });
        self.dispatch(Action::SelectItem {
            id: Some(id.clone()),
        });
        self.dispatch(Action::SetExpanded {
            id: Some(id.clone()),
        });
        if let Some(pan) = self.plan_auto_pan(id.as_str()) {
            self.dispatch(Action::UpdateViewport {
                viewport: pan.target,
            });
        }
        true
    }

    /// The viewport change expanding item `id` would need, if any.
    #[must_use]
    pub fn plan_auto_pan(&self, id: &str) -> Option<AutoPan> {
        let item = self.state().item(id)?;
        let stacked = item.stacked_sizes();
        let group = AutoPanGroup {
            position: item.position,
            cover: item.cover_size(),
            stacked: &stacked,
        };
        plan_auto_pan(
            &group,
            &self.config.fan,
            self.viewport.state(),
            self.config.window,
            &self.config.auto_pan,
        )
    }

    /// Collapses the expanded item.
    pub fn collapse(&mut self) -> bool {
        self.dispatch(Action::SetExpanded { id: None })
    }

    /// Handles a key-down. Escape collapses unless locked.
    pub fn key_down(&mut self, key: Key) -> bool {
        if self.escape.key_down(key) {
            return self.collapse();
        }
        false
    }

    /// Locks Escape handling, for example while an expand animation runs.
    pub fn set_escape_locked(&mut self, locked: bool) {
        self.escape.set_locked(locked);
    }

    // --- measurement and tuning ---

    /// Records a measured card height.
    pub fn measure(&mut self, item: &str, card: &str, height: f64) -> bool {
        self.dispatch(Action::UpdateCardHeight {
            item_id: ItemId::from(item),
            card_id: CardId::from(card),
            height,
        })
    }

    /// Current repulsion tunables.
    #[must_use]
    pub fn repulsion(&self) -> RepulsionConfig {
        self.config.repulsion
    }

    /// Replaces the repulsion tunables. Takes effect on the next layout.
    pub fn set_repulsion(&mut self, repulsion: RepulsionConfig) {
        self.config.repulsion = repulsion;
    }

    /// Updates the window size.
    pub fn set_window_size(&mut self, window: Size) {
        self.config.window = window;
        self.viewport.set_window_size(window);
    }

    // --- viewport ---

    /// Applies a wheel event; committed by the next [`Self::frame`].
    pub fn wheel(&mut self, input: WheelInput) {
        self.viewport.wheel(input);
    }

    /// Starts a two-finger pinch.
    pub fn begin_pinch(&mut self, a: Point, b: Point) {
        self.viewport.begin_pinch(a, b);
    }

    /// Continues a pinch; committed by the next [`Self::frame`].
    pub fn pinch_to(&mut self, a: Point, b: Point) {
        self.viewport.pinch_to(a, b);
    }

    /// Ends a pinch.
    pub fn end_pinch(&mut self) -> bool {
        self.viewport.end_pinch();
        self.commit_viewport()
    }

    /// Zoom-in button.
    pub fn zoom_in(&mut self) -> bool {
        self.viewport.zoom_in();
        self.commit_viewport()
    }

    /// Zoom-out button.
    pub fn zoom_out(&mut self) -> bool {
        self.viewport.zoom_out();
        self.commit_viewport()
    }

    /// Returns to the initial transform.
    pub fn reset_view(&mut self) -> bool {
        self.viewport.reset();
        self.commit_viewport()
    }

    // --- lifecycle ---

    /// Discards all rearrangement and rebuilds items from the initial list.
    pub fn reset_layout(&mut self) -> bool {
        for drag in self.drags.values_mut() {
            drag.unmount();
        }
        let changed = self.store.reset();
        if changed {
            self.sync();
        }
        changed
    }

    /// Adds an item on top of every other.
    pub fn add_item(&mut self, item: CanvasItem) -> bool {
        self.dispatch(Action::AddItem { item })
    }

    /// Removes an item. A drag in progress on it is abandoned.
    pub fn delete_item(&mut self, id: &str) -> bool {
        self.dispatch(Action::DeleteItem { id: id.into() })
    }

    // --- derived layout ---

    /// Derives the geometry of every item for the current frame.
    #[must_use]
    pub fn layout(&self) -> FrameLayout {
        let state = self.state();
        let viewport = self.viewport.state();
        let items = state.items_by_z();

        let groups: Vec<RepulsionGroup<ItemId>> = items
            .iter()
            .map(|item| RepulsionGroup {
                id: item.id.clone(),
                position: self.rendered_position(item),
                anchor: item.anchor().map(|card| card.size),
            })
            .collect();
        let repulsion = compute_repulsion_offsets(
            &groups,
            state.expanded_id(),
            viewport.scale,
            &self.config.repulsion,
        );

        let items = items
            .into_iter()
            .zip(groups)
            .map(|(item, group)| {
                let push = repulsion.get(&item.id).copied().unwrap_or(Vec2::ZERO);
                self.item_layout(state, item, group.position, push)
            })
            .collect();
        FrameLayout { viewport, items }
    }

    fn item_layout(
        &self,
        state: &CanvasState,
        item: &CanvasItem,
        position: Point,
        repulsion: Vec2,
    ) -> ItemLayout {
        let expanded = state.expanded_id() == Some(&item.id);
        let fan = &self.config.fan;
        let offsets = compute_offsets(item.cover_size(), &item.stacked_sizes(), expanded, fan);
        let stacked = item
            .stacked()
            .iter()
            .zip(offsets)
            .enumerate()
            .map(|(index, (card, offset))| CardLayout {
                id: card.id.clone(),
                offset,
                rotation_deg: fan_rotation_deg(index, expanded, fan),
                visible: expanded,
            })
            .collect();
        ItemLayout {
            id: item.id.clone(),
            z_index: item.z_index,
            position: position + repulsion,
            repulsion,
            expanded,
            selected: state.selected_id() == Some(&item.id),
            dragging: self.drags.get(&item.id).is_some_and(|drag| drag.is_dragging()),
            cover: item.cover().map(|card| CardLayout {
                id: card.id.clone(),
                offset: Vec2::ZERO,
                rotation_deg: 0.0,
                visible: true,
            }),
            stacked,
        }
    }

    fn rendered_position(&self, item: &CanvasItem) -> Point {
        self.drags
            .get(&item.id)
            .map_or(item.position, |drag| drag.rendered_position())
    }
}
