// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::sync::Arc;

use corkboard_layout::CardSize;
use corkboard_store::{Action, CanvasItem, CanvasState, Card, CardKind, reduce};
use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;

fn state(count: usize) -> Arc<CanvasState> {
    let items = (0..count).map(|i| {
        let id = format!("item-{i}");
        CanvasItem::single(
            id.as_str(),
            Point::new(i as f64 * 10.0, 0.0),
            Card::new(id.as_str(), CardKind::Contact, CardSize::with_width(320.0)),
        )
    });
    Arc::new(CanvasState::from_items(items))
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("store/reduce");

    // Hypothesis: a changing update costs O(items) for the map spine, while an
    // unchanged update is O(1) because it returns the same handle.
    for count in [16usize, 256, 4_096] {
        let s = state(count);
        group.bench_with_input(BenchmarkId::new("move", count), &s, |b, s| {
            b.iter_batched(
                || Action::UpdateItemPosition {
                    id: "item-0".into(),
                    position: Point::new(5.0, 5.0),
                },
                |action| black_box(reduce(s, action)),
                BatchSize::SmallInput,
            );
        });
        group.bench_with_input(BenchmarkId::new("move_unchanged", count), &s, |b, s| {
            b.iter_batched(
                || Action::UpdateItemPosition {
                    id: "item-0".into(),
                    position: Point::ZERO,
                },
                |action| black_box(reduce(s, action)),
                BatchSize::SmallInput,
            );
        });
        group.bench_with_input(BenchmarkId::new("bring_to_front", count), &s, |b, s| {
            b.iter_batched(
                || Action::BringToFront {
                    id: "item-1".into(),
                },
                |action| black_box(reduce(s, action)),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_dispatch);
criterion_main!(benches);
