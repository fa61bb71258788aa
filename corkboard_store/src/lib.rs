// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Corkboard Store: the canvas data model and its pure reducer.
//!
//! - [`Card`] and [`CardKind`]: opaque content units, routed to renderers
//!   through the exhaustive [`CardVisitor`].
//! - [`CanvasItem`]: a positioned single card or card stack.
//! - [`CanvasState`]: every item plus selection, expansion, z-order bound and
//!   viewport.
//! - [`reduce`]: `(state, action) -> state`, returning the same `Arc` when
//!   nothing changed.
//! - [`CanvasStore`]: holds the current state, counts revisions and notifies
//!   subscribers.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use kurbo::Point;
//! use corkboard_layout::CardSize;
//! use corkboard_store::{Action, CanvasItem, CanvasStore, Card, CardKind};
//!
//! let mut store = CanvasStore::new(vec![CanvasItem::stack(
//!     "work",
//!     Point::new(40.0, 40.0),
//!     Some(Card::new("resume", CardKind::Resume, CardSize::with_width(320.0))),
//!     vec![],
//! )]);
//!
//! let before = Arc::clone(store.state());
//! // Moving to the current position is not a change.
//! assert!(!store.dispatch(Action::UpdateItemPosition {
//!     id: "work".into(),
//!     position: Point::new(40.0, 40.0),
//! }));
//! assert!(Arc::ptr_eq(&before, store.state()));
//!
//! store.dispatch(Action::BringToFront { id: "work".into() });
//! assert_eq!(store.state().max_z_index(), 1);
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for the data model and [`Action`].
//!   Actions carry a `"type"` tag; unrecognised tags decode to
//!   [`Action::Unknown`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod action;
mod card;
mod id;
mod item;
mod reducer;
mod state;
mod store;

pub use action::Action;
pub use card::{Card, CardKind, CardVisitor};
pub use id::{CardId, ItemId};
pub use item::{CanvasItem, ItemBody};
pub use reducer::reduce;
pub use state::{CanvasState, PartialState};
pub use store::{CanvasStore, SubscriptionId};
