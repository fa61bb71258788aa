// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use corkboard::{Canvas, CanvasConfig};
use corkboard_layout::{
    CardSize, FanConfig, RepulsionConfig, RepulsionGroup, compute_offsets,
    compute_repulsion_offsets,
};
use corkboard_store::{Action, CanvasItem, Card, CardKind};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;

fn sizes(len: usize) -> Vec<CardSize> {
    (0..len)
        .map(|i| CardSize::new(180.0 + (i % 5) as f64 * 20.0, 240.0 + (i % 3) as f64 * 40.0))
        .collect()
}

fn bench_fan(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/fan");
    let fan = FanConfig::default();
    let cover = Some(CardSize::with_width(320.0));

    for len in [3usize, 12, 48] {
        let stacked = sizes(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("expanded", len), &stacked, |b, stacked| {
            b.iter(|| black_box(compute_offsets(cover, stacked, true, &fan)));
        });
        group.bench_with_input(BenchmarkId::new("collapsed", len), &stacked, |b, stacked| {
            b.iter(|| black_box(compute_offsets(cover, stacked, false, &fan)));
        });
    }
    group.finish();
}

fn bench_repulsion(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/repulsion");
    let config = RepulsionConfig::default();

    // Groups on a grid; the expanded one sits in the middle.
    for side in [4usize, 16, 64] {
        let groups: Vec<RepulsionGroup<usize>> = (0..side * side)
            .map(|i| RepulsionGroup {
                id: i,
                position: Point::new((i % side) as f64 * 360.0, (i / side) as f64 * 420.0),
                anchor: Some(CardSize::with_width(320.0)),
            })
            .collect();
        let expanded = side * side / 2;
        group.throughput(Throughput::Elements(groups.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(side * side), &groups, |b, groups| {
            b.iter(|| black_box(compute_repulsion_offsets(groups, Some(&expanded), 1.0, &config)));
        });
    }
    group.finish();
}

fn canvas(count: usize) -> Canvas {
    let items = (0..count)
        .map(|i| {
            let id = format!("item-{i}");
            let cards: Vec<Card> = (0..4)
                .map(|j| {
                    Card::new(
                        format!("{id}-{j}").as_str(),
                        CardKind::Project {
                            title: "Project".into(),
                        },
                        CardSize::with_width(240.0),
                    )
                })
                .collect();
            CanvasItem::stack(
                id.as_str(),
                Point::new((i % 10) as f64 * 400.0, (i / 10) as f64 * 500.0),
                Some(Card::new(
                    format!("{id}-cover").as_str(),
                    CardKind::About,
                    CardSize::with_width(320.0),
                )),
                cards,
            )
        })
        .collect();
    Canvas::new(items, CanvasConfig::default())
}

fn bench_frame_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/frame");
    for count in [10usize, 100] {
        let mut canvas = canvas(count);
        canvas.dispatch(Action::SetExpanded {
            id: Some("item-0".into()),
        });
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(BenchmarkId::from_parameter(count), |b| {
            b.iter(|| black_box(canvas.layout()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fan, bench_repulsion, bench_frame_layout);
criterion_main!(benches);
