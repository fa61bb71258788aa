// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for the layout primitives.

use corkboard_layout::{
    AutoPanConfig, AutoPanGroup, CARDS_PER_ROW, CardSize, FanConfig, RepulsionConfig,
    RepulsionGroup, compute_offsets, compute_repulsion_offsets, fan_rotation_deg, plan_auto_pan,
    repulsion_offset, rotated_bounding_box,
};
use corkboard_view::ViewportState;
use kurbo::{Point, Size, Vec2};
use proptest::prelude::*;

fn card_strategy() -> impl Strategy<Value = CardSize> {
    (40.0f64..400.0, proptest::option::of(40.0f64..600.0)).prop_map(|(w, h)| CardSize {
        width: Some(w),
        height: h,
    })
}

fn fan_strategy() -> impl Strategy<Value = FanConfig> {
    (-25.0f64..25.0, 0.0f64..10.0, 0.0f64..40.0, 0.0f64..40.0)
        .prop_map(|(rot, arc, gap, row)| FanConfig::new(rot, arc, gap, row).unwrap())
}

proptest! {
    #[test]
    fn neighbours_in_a_row_never_overlap(
        cover in card_strategy(),
        stacked in proptest::collection::vec(card_strategy(), 2..9),
        fan in fan_strategy(),
    ) {
        let offsets = compute_offsets(Some(cover), &stacked, true, &fan);
        prop_assert_eq!(offsets.len(), stacked.len());

        for i in 1..stacked.len() {
            if i % CARDS_PER_ROW == 0 {
                continue;
            }
            let (a, b) = (stacked[i - 1].resolved(), stacked[i].resolved());
            let ra = rotated_bounding_box(a.width, a.height, fan_rotation_deg(i - 1, true, &fan));
            let rb = rotated_bounding_box(b.width, b.height, fan_rotation_deg(i, true, &fan));

            // Unrotated edges keep at least the configured gap.
            let edge_gap = offsets[i].x - (offsets[i - 1].x + a.width);
            prop_assert!(edge_gap >= fan.expand_gap_px - 1e-9);

            // Rotated footprints, centred on each card, never intersect.
            let a_right = offsets[i - 1].x + a.width / 2.0 + ra.width / 2.0;
            let b_left = offsets[i].x + b.width / 2.0 - rb.width / 2.0;
            prop_assert!(b_left >= a_right - 1e-9);
        }
    }

    #[test]
    fn collapsed_offsets_cascade(stacked in proptest::collection::vec(card_strategy(), 0..8)) {
        let offsets = compute_offsets(None, &stacked, false, &FanConfig::default());
        for (i, offset) in offsets.iter().enumerate() {
            prop_assert_eq!(*offset, Vec2::new(i as f64 * 6.0, i as f64 * 6.0));
        }
    }

    #[test]
    fn repulsion_is_linear_in_distance(
        radius in 1.0f64..1000.0,
        strength in 0.0f64..500.0,
        angle in 0.0f64..core::f64::consts::TAU,
        fraction in 0.0f64..1.5,
    ) {
        let source = Point::new(13.0, -7.0);
        let dir = Vec2::from_angle(angle);
        let target = source + dir * (radius * fraction);
        let offset = repulsion_offset(source, target, radius, strength);
        let expected = if radius * fraction < 1e-6 {
            strength
        } else {
            strength * (1.0 - fraction.min(1.0))
        };
        prop_assert!((offset.hypot() - expected).abs() < 1e-6);
    }

    #[test]
    fn auto_pan_reaches_a_fixed_point_when_content_fits(
        x in -3000.0f64..3000.0,
        y in -3000.0f64..3000.0,
        scale in 0.3f64..1.0,
        stacked in proptest::collection::vec(card_strategy(), 0..3),
    ) {
        let group = AutoPanGroup {
            position: Point::new(x, y),
            cover: Some(CardSize::new(200.0, 300.0)),
            stacked: &stacked,
        };
        let fan = FanConfig::default();
        let window = Size::new(1600.0, 1000.0);
        let config = AutoPanConfig::default();
        let start = ViewportState::new(scale, Vec2::ZERO);

        if let Some(plan) = plan_auto_pan(&group, &fan, start, window, &config) {
            prop_assert_eq!(plan.target.scale, scale);
            prop_assert_eq!(plan_auto_pan(&group, &fan, plan.target, window, &config), None);
        }
    }
}

#[test]
fn repulsion_boundary_values() {
    let config = RepulsionConfig::new(200.0, 100.0).unwrap();
    let at = |x: f64| RepulsionGroup {
        id: x as u32,
        position: Point::new(x, 0.0),
        anchor: Some(CardSize::new(200.0, 300.0)),
    };
    let groups = [at(0.0), at(200.0), at(100.0)];
    let offsets = compute_repulsion_offsets(&groups, Some(&0), 1.0, &config);

    assert!(offsets[&200].hypot() < 1e-9, "exactly at the radius");
    assert!((offsets[&100].hypot() - 50.0).abs() < 1e-9, "half the radius");
    assert_eq!(offsets[&0], Vec2::ZERO);
}

#[test]
fn coincident_groups_tie_break_along_x() {
    let config = RepulsionConfig::new(200.0, 100.0).unwrap();
    let groups = [
        RepulsionGroup {
            id: "g1",
            position: Point::ZERO,
            anchor: Some(CardSize::with_width(200.0)),
        },
        RepulsionGroup {
            id: "g2",
            position: Point::ZERO,
            anchor: Some(CardSize::with_width(200.0)),
        },
    ];
    let offsets = compute_repulsion_offsets(&groups, Some(&"g1"), 1.0, &config);
    assert_eq!(offsets[&"g2"], Vec2::new(100.0, 0.0));
}
