// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Corkboard Layout: derived geometry for groups of cards on the canvas.
//!
//! Everything in this crate is a pure function of its inputs. Nothing is
//! cached and nothing is written back; callers recompute these values
//! whenever the canvas state or viewport changes.
//!
//! - [`fan`]: where a group's stacked cards go, collapsed (a cascading peek)
//!   or expanded (tilted rows to the right of the cover), and the rotated
//!   footprints that keep neighbours from overlapping.
//! - [`repulsion`]: offsets that push other groups away from the expanded one,
//!   falling off linearly with distance.
//! - [`auto_pan`]: whether the viewport must move so an expanded group stays
//!   visible, and where it should move to.
//!
//! ## Example
//!
//! ```rust
//! use corkboard_layout::{CardSize, FanConfig, compute_offsets};
//!
//! let cover = CardSize::new(200.0, 280.0);
//! let stacked = [CardSize::with_width(100.0), CardSize::with_width(100.0)];
//! let fan = FanConfig { rotate_step_deg: 0.5, ..FanConfig::default() };
//!
//! let offsets = compute_offsets(Some(cover), &stacked, true, &fan);
//! assert_eq!(offsets[0].x, 218.0);
//! assert!(offsets[1].x > offsets[0].x + 100.0);
//! ```
//!
//! Cards whose height has not been measured yet are treated as
//! [`FALLBACK_HEIGHT`] tall for geometry.

pub mod auto_pan;
pub mod fan;
pub mod repulsion;
mod size;

pub use auto_pan::{
    AUTO_PAN_MARGIN_PX, AutoPan, AutoPanConfig, AutoPanGroup, PanStrategy, expanded_world_bounds,
    plan_auto_pan,
};
pub use fan::{
    CARDS_PER_ROW, FanConfig, STACK_OFFSET_PX, compute_offsets, expanded_bounds, fan_rotation_deg,
    rotated_bounding_box,
};
pub use repulsion::{RepulsionConfig, RepulsionGroup, compute_repulsion_offsets, repulsion_offset};
pub use size::{CardSize, FALLBACK_HEIGHT, FALLBACK_WIDTH};
