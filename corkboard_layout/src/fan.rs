// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fan-out geometry for a cover card plus its stacked cards.
//!
//! Collapsed, stacked cards cascade behind the cover by [`STACK_OFFSET_PX`]
//! per card. Expanded, they are laid out to the right of the cover in rows of
//! [`CARDS_PER_ROW`], each tilted a little more than its left neighbour. The
//! tilt grows a card's footprint, so horizontal gaps are widened to cover the
//! overhang of both neighbours.

use corkboard_view::{ConfigError, non_negative};
use kurbo::{Rect, Size, Vec2};

use crate::size::CardSize;

/// Per-card diagonal offset of a collapsed stack.
pub const STACK_OFFSET_PX: f64 = 6.0;

/// Maximum number of stacked cards per expanded row.
pub const CARDS_PER_ROW: usize = 3;

/// Constants of the expanded fan.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FanConfig {
    /// Rotation added per column; column `c` is tilted `(c + 1) * step` degrees.
    pub rotate_step_deg: f64,
    /// Vertical drop added per column, giving rows a slight arc.
    pub arc_step_px: f64,
    /// Minimum horizontal gap between neighbouring cards (and after the cover).
    pub expand_gap_px: f64,
    /// Vertical gap between rows.
    pub expand_row_gap_px: f64,
}

impl FanConfig {
    /// Creates a fan config. Distances must be finite and non-negative; the
    /// rotation step may be negative to tilt the other way.
    pub fn new(
        rotate_step_deg: f64,
        arc_step_px: f64,
        expand_gap_px: f64,
        expand_row_gap_px: f64,
    ) -> Result<Self, ConfigError> {
        if !rotate_step_deg.is_finite() {
            return Err(ConfigError::NonFinite {
                field: "rotate_step_deg",
            });
        }
        Ok(Self {
            rotate_step_deg,
            arc_step_px: non_negative("arc_step_px", arc_step_px)?,
            expand_gap_px: non_negative("expand_gap_px", expand_gap_px)?,
            expand_row_gap_px: non_negative("expand_row_gap_px", expand_row_gap_px)?,
        })
    }
}

impl Default for FanConfig {
    fn default() -> Self {
        Self {
            rotate_step_deg: 1.5,
            arc_step_px: 0.0,
            expand_gap_px: 18.0,
            expand_row_gap_px: 24.0,
        }
    }
}

/// Axis-aligned bounding box of a `width` x `height` rectangle rotated by
/// `angle_deg` about its centre.
#[must_use]
pub fn rotated_bounding_box(width: f64, height: f64, angle_deg: f64) -> Size {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    Size::new(
        (width * cos).abs() + (height * sin).abs(),
        (height * cos).abs() + (width * sin).abs(),
    )
}

/// Rotation of stacked card `index`, in degrees.
///
/// Collapsed stacks are drawn untilted.
#[must_use]
pub fn fan_rotation_deg(index: usize, expanded: bool, fan: &FanConfig) -> f64 {
    if !expanded {
        return 0.0;
    }
    let col = index % CARDS_PER_ROW;
    (col + 1) as f64 * fan.rotate_step_deg
}

/// Offsets of each stacked card relative to the group origin (the cover's
/// top-left corner).
#[must_use]
pub fn compute_offsets(
    cover: Option<CardSize>,
    stacked: &[CardSize],
    expanded: bool,
    fan: &FanConfig,
) -> Vec<Vec2> {
    if !expanded {
        return (0..stacked.len())
            .map(|i| {
                let d = i as f64 * STACK_OFFSET_PX;
                Vec2::new(d, d)
            })
            .collect();
    }

    let cover_width = cover.map_or(0.0, |c| c.resolved().width);
    let row_start = cover_width + fan.expand_gap_px;

    let mut offsets = Vec::with_capacity(stacked.len());
    let mut x = row_start;
    let mut y = 0.0;
    let mut row_height = 0.0_f64;
    let mut prev_width = 0.0;
    let mut prev_extra = 0.0;

    for (i, card) in stacked.iter().enumerate() {
        let col = i % CARDS_PER_ROW;
        if col == 0 && i > 0 {
            x = row_start;
            y += row_height + fan.expand_row_gap_px;
            row_height = 0.0;
        }

        let size = card.resolved();
        let rotated = rotated_bounding_box(size.width, size.height, fan_rotation_deg(i, true, fan));
        let extra = rotated.width - size.width;
        if col > 0 {
            x += prev_width + fan.expand_gap_px.max((prev_extra + extra) / 2.0);
        }

        let arc = col as f64 * fan.arc_step_px;
        offsets.push(Vec2::new(x, y + arc));
        row_height = row_height.max((size.height + rotated.height) / 2.0 + arc);

        prev_width = size.width;
        prev_extra = extra;
    }

    offsets
}

/// Local bounding box of an expanded group: the cover plus every stacked
/// card's rotated footprint.
///
/// Returns `None` for a group with neither cover nor stacked cards.
#[must_use]
pub fn expanded_bounds(
    cover: Option<CardSize>,
    stacked: &[CardSize],
    fan: &FanConfig,
) -> Option<Rect> {
    let mut bounds = cover.map(|c| Rect::from_origin_size((0.0, 0.0), c.resolved()));
    let offsets = compute_offsets(cover, stacked, true, fan);
    for (i, (card, offset)) in stacked.iter().zip(offsets).enumerate() {
        let size = card.resolved();
        let rotated = rotated_bounding_box(size.width, size.height, fan_rotation_deg(i, true, fan));
        let centre = offset.to_point() + size.to_vec2() / 2.0;
        let footprint = Rect::from_center_size(centre, rotated);
        bounds = Some(bounds.map_or(footprint, |b| b.union(footprint)));
    }
    bounds
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn rotated_box_matches_closed_form() {
        let unrotated = rotated_bounding_box(100.0, 50.0, 0.0);
        assert!(approx(unrotated.width, 100.0) && approx(unrotated.height, 50.0));

        let quarter = rotated_bounding_box(100.0, 50.0, 90.0);
        assert!(approx(quarter.width, 50.0) && approx(quarter.height, 100.0));

        let diag = rotated_bounding_box(10.0, 10.0, 45.0);
        assert!(approx(diag.width, 10.0 * core::f64::consts::SQRT_2));

        // Direction of rotation does not matter.
        let cw = rotated_bounding_box(80.0, 30.0, 12.0);
        let ccw = rotated_bounding_box(80.0, 30.0, -12.0);
        assert!(approx(cw.width, ccw.width) && approx(cw.height, ccw.height));
    }

    #[test]
    fn collapsed_cascade() {
        let stacked = [CardSize::with_width(100.0); 3];
        let cover = Some(CardSize::with_width(200.0));
        let offsets = compute_offsets(cover, &stacked, false, &FanConfig::default());
        assert_eq!(
            offsets,
            [Vec2::new(0.0, 0.0), Vec2::new(6.0, 6.0), Vec2::new(12.0, 12.0)]
        );
    }

    #[test]
    fn first_expanded_card_sits_one_gap_past_the_cover() {
        let fan = FanConfig {
            rotate_step_deg: 0.5,
            arc_step_px: 0.0,
            expand_gap_px: 18.0,
            expand_row_gap_px: 24.0,
        };
        let stacked = [CardSize::with_width(100.0), CardSize::with_width(100.0)];
        let offsets = compute_offsets(Some(CardSize::with_width(200.0)), &stacked, true, &fan);
        assert!(approx(offsets[0].x, 218.0));
        assert!(offsets[1].x > 218.0);
        // Small tilts leave the minimum gap in charge.
        assert!(approx(offsets[1].x, 218.0 + 100.0 + 18.0));
        assert_eq!(offsets[0].y, 0.0);
        assert_eq!(offsets[1].y, 0.0);
    }

    #[test]
    fn large_tilts_widen_the_gap() {
        let fan = FanConfig {
            rotate_step_deg: 20.0,
            arc_step_px: 0.0,
            expand_gap_px: 4.0,
            expand_row_gap_px: 0.0,
        };
        let stacked = [CardSize::new(100.0, 300.0), CardSize::new(100.0, 300.0)];
        let offsets = compute_offsets(None, &stacked, true, &fan);
        let e0 = rotated_bounding_box(100.0, 300.0, 20.0).width - 100.0;
        let e1 = rotated_bounding_box(100.0, 300.0, 40.0).width - 100.0;
        assert!(approx(offsets[0].x, 4.0));
        assert!(approx(offsets[1].x, 4.0 + 100.0 + (e0 + e1) / 2.0));
    }

    #[test]
    fn fourth_card_wraps_to_a_new_row() {
        let fan = FanConfig::default();
        let stacked = [CardSize::new(100.0, 200.0); 4];
        let offsets = compute_offsets(Some(CardSize::new(200.0, 100.0)), &stacked, true, &fan);

        let row_height = (0..3)
            .map(|c| {
                let angle = (c + 1) as f64 * fan.rotate_step_deg;
                let rotated = rotated_bounding_box(100.0, 200.0, angle);
                (200.0 + rotated.height) / 2.0
            })
            .fold(0.0_f64, f64::max);

        assert!(approx(offsets[3].x, 200.0 + fan.expand_gap_px));
        assert!(approx(offsets[3].y, row_height + fan.expand_row_gap_px));
        assert_eq!(fan_rotation_deg(3, true, &fan), fan.rotate_step_deg);
    }

    #[test]
    fn arc_drops_later_columns() {
        let fan = FanConfig {
            arc_step_px: 5.0,
            ..FanConfig::default()
        };
        let stacked = [CardSize::new(100.0, 100.0); 3];
        let offsets = compute_offsets(None, &stacked, true, &fan);
        assert_eq!(offsets[0].y, 0.0);
        assert_eq!(offsets[1].y, 5.0);
        assert_eq!(offsets[2].y, 10.0);
    }

    #[test]
    fn unmeasured_cards_use_fallback_height() {
        let fan = FanConfig::default();
        let measured = compute_offsets(None, &[CardSize::new(100.0, 360.0); 2], true, &fan);
        let unmeasured = compute_offsets(None, &[CardSize::with_width(100.0); 2], true, &fan);
        assert_eq!(measured, unmeasured);
    }

    #[test]
    fn expanded_bounds_cover_everything() {
        let fan = FanConfig::default();
        let cover = CardSize::new(200.0, 300.0);
        let stacked = [CardSize::new(100.0, 100.0); 2];
        let bounds = expanded_bounds(Some(cover), &stacked, &fan).unwrap();
        assert_eq!(bounds.x0, 0.0);
        // Tilted cards poke slightly above the cover's top edge.
        assert!(bounds.y0 < 0.0 && bounds.y0 > -5.0);
        assert!(bounds.x1 > 200.0 + 18.0 + 200.0 + 18.0);
        assert_eq!(bounds.y1, 300.0);

        assert_eq!(expanded_bounds(None, &[], &fan), None);
    }

    #[test]
    fn config_validation() {
        assert!(FanConfig::new(-1.5, 0.0, 18.0, 24.0).is_ok());
        assert!(FanConfig::new(1.5, 0.0, -18.0, 24.0).is_err());
        assert!(FanConfig::new(f64::NAN, 0.0, 18.0, 24.0).is_err());
    }
}
