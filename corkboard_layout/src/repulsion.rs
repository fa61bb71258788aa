// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual declutter around the expanded group.
//!
//! Every other group is pushed directly away from the expanded group's anchor
//! card, with a push that falls off linearly to zero at the configured
//! radius. Radius and strength are given in screen pixels and converted to
//! world units with the current scale so the effect looks the same at every
//! zoom level. Offsets are purely visual; nothing here touches stored
//! positions.

use core::hash::Hash;

use corkboard_view::{ConfigError, non_negative};
use hashbrown::HashMap;
use kurbo::{Point, Vec2};

use crate::size::CardSize;

/// Distances below this are treated as coincident.
const COINCIDENT_EPSILON: f64 = 1e-6;

/// Screen-space repulsion tunables.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RepulsionConfig {
    /// Distance at which the push reaches zero.
    pub radius_px: f64,
    /// Push applied at zero distance.
    pub strength_px: f64,
}

impl RepulsionConfig {
    /// Creates a config; both values must be finite and non-negative.
    pub fn new(radius_px: f64, strength_px: f64) -> Result<Self, ConfigError> {
        Ok(Self {
            radius_px: non_negative("radius_px", radius_px)?,
            strength_px: non_negative("strength_px", strength_px)?,
        })
    }
}

impl Default for RepulsionConfig {
    fn default() -> Self {
        Self {
            radius_px: 480.0,
            strength_px: 120.0,
        }
    }
}

/// What the repulsion engine needs to know about one group.
#[derive(Clone, Debug, PartialEq)]
pub struct RepulsionGroup<K> {
    /// Group key.
    pub id: K,
    /// World-space position of the group origin.
    pub position: Point,
    /// The card whose centre represents the group: the cover, or the first
    /// stacked card when there is no cover.
    pub anchor: Option<CardSize>,
}

impl<K> RepulsionGroup<K> {
    /// World-space centre of the anchor card, or the group origin when the
    /// group has no cards.
    #[must_use]
    pub fn centre(&self) -> Point {
        match self.anchor {
            Some(card) => self.position + card.resolved().to_vec2() / 2.0,
            None => self.position,
        }
    }
}

/// Push applied to a group centred at `target` by a source at `source`.
///
/// `radius` and `strength` are in world units. Coincident centres get the
/// full strength along +X.
#[must_use]
pub fn repulsion_offset(source: Point, target: Point, radius: f64, strength: f64) -> Vec2 {
    let delta = target - source;
    let distance = delta.hypot();
    if distance < COINCIDENT_EPSILON {
        return Vec2::new(strength, 0.0);
    }
    let t = if radius > 0.0 {
        (distance / radius).clamp(0.0, 1.0)
    } else {
        1.0
    };
    delta / distance * (strength * (1.0 - t))
}

/// Per-group visual offsets pushing groups away from `expanded`.
///
/// Returns an empty map when nothing is expanded or `expanded` is not among
/// `groups`. The expanded group itself maps to a zero offset.
pub fn compute_repulsion_offsets<K>(
    groups: &[RepulsionGroup<K>],
    expanded: Option<&K>,
    scale: f64,
    config: &RepulsionConfig,
) -> HashMap<K, Vec2>
where
    K: Clone + Eq + Hash,
{
    let mut offsets = HashMap::new();
    let Some(expanded) = expanded else {
        return offsets;
    };
    let Some(focus) = groups.iter().find(|g| &g.id == expanded) else {
        return offsets;
    };

    let scale = scale.max(f64::MIN_POSITIVE);
    let radius = config.radius_px / scale;
    let strength = config.strength_px / scale;
    let source = focus.centre();

    offsets.reserve(groups.len());
    for group in groups {
        let offset = if &group.id == expanded {
            Vec2::ZERO
        } else {
            repulsion_offset(source, group.centre(), radius, strength)
        };
        offsets.insert(group.id.clone(), offset);
    }
    offsets
}
