// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Corkboard: a spatial canvas for portfolio cards.
//!
//! [`Canvas`] wires the pieces from the `corkboard_*` crates together:
//!
//! - the authoritative state and reducer from `corkboard_store`,
//! - one drag controller per item and the outside-click and Escape guards
//!   from `corkboard_event_state`,
//! - fan-out, repulsion and auto-pan from `corkboard_layout`,
//! - the pan/zoom gesture controller from `corkboard_view`.
//!
//! The host owns rendering and hit testing. It forwards classified input,
//! calls [`Canvas::frame`] once per displayed frame, and draws
//! [`Canvas::layout`].
//!
//! ## Example
//!
//! ```rust
//! use corkboard::{Canvas, CanvasConfig};
//! use corkboard_event_state::drag::{DragTarget, PointerSample};
//! use corkboard_layout::CardSize;
//! use corkboard_store::{CanvasItem, Card, CardKind};
//! use kurbo::Point;
//!
//! let work = CanvasItem::stack(
//!     "work",
//!     Point::new(100.0, 100.0),
//!     Some(Card::new("resume", CardKind::Resume, CardSize::with_width(200.0))),
//!     vec![Card::new(
//!         "acme",
//!         CardKind::Experience { employer: "Acme".into() },
//!         CardSize::with_width(200.0),
//!     )],
//! );
//! let mut canvas = Canvas::new(vec![work], CanvasConfig::default());
//!
//! // Drag the stack 50 pixels to the right.
//! let press = PointerSample::mouse(Point::new(150.0, 150.0));
//! canvas.pointer_down_on_item("work", press, DragTarget::Draggable);
//! canvas.pointer_move(PointerSample::mouse(Point::new(200.0, 150.0)));
//! canvas.frame();
//! canvas.pointer_up(PointerSample::mouse(Point::new(200.0, 150.0)));
//! let moved = canvas.state().item("work").unwrap().position;
//! assert_eq!(moved, Point::new(150.0, 100.0));
//!
//! // The click that follows a drag is ignored; a plain click expands.
//! assert!(!canvas.click_item("work"));
//! let press = PointerSample::mouse(Point::new(200.0, 150.0));
//! canvas.pointer_down_on_item("work", press, DragTarget::Draggable);
//! canvas.pointer_up(PointerSample::mouse(Point::new(200.0, 150.0)));
//! assert!(canvas.click_item("work"));
//!
//! let frame = canvas.layout();
//! let work = frame.item("work").unwrap();
//! assert!(work.expanded);
//! assert_eq!(work.visible_cards().count(), 2);
//! ```

mod canvas;
mod capture;
mod config;
pub mod frame;

pub use canvas::Canvas;
pub use capture::CanvasCapture;
pub use config::{CanvasConfig, DEFAULT_WINDOW};
pub use frame::{CardLayout, FrameLayout, ItemLayout};
