// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gallery filtering and lightbox navigation.
//!
//! Measures the performance of:
//! - Filter selection (recomputing visibility over the catalog)
//! - Opening the lightbox (snapshotting the visible subset)
//! - Paging through the open lightbox

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iced_folio::catalog::Catalog;
use iced_folio::domain::gallery::{Category, FilterValue, GalleryItem, ItemId};
use iced_folio::gallery::{filter_buttons, Command, Gallery, GallerySettings};
use std::hint::black_box;

const CATEGORIES: [&str; 4] = ["nature", "urban", "travel", "portraits"];

/// Builds a gallery with `size` items spread evenly over four categories.
fn gallery_of(size: usize) -> Gallery {
    let items = (0..size)
        .map(|i| {
            GalleryItem::new(
                format!("https://images.example.com/photo-{i}?w=600&h=400&fit=crop"),
                format!("Photo {i}"),
                CATEGORIES[i % CATEGORIES.len()],
            )
        })
        .collect();
    let catalog = Catalog::new(items);
    let buttons = filter_buttons("All", &catalog.categories(), None, Category::display_label);
    Gallery::new(catalog, buttons, GallerySettings::default())
}

fn bench_select_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    for size in [12, 1_000, 10_000] {
        let mut gallery = gallery_of(size);
        let urban = FilterValue::parse("urban");
        group.bench_with_input(BenchmarkId::new("select_filter", size), &size, |b, _| {
            b.iter(|| {
                gallery.select_filter(black_box(&urban));
                gallery.select_filter(black_box(&FilterValue::All));
            });
        });
    }

    group.finish();
}

fn bench_open(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    for size in [12, 1_000, 10_000] {
        let mut gallery = gallery_of(size);
        let middle = ItemId::new(size / 2);
        group.bench_with_input(BenchmarkId::new("open_close", size), &size, |b, _| {
            b.iter(|| {
                gallery.apply(black_box(Command::Open(middle)));
                gallery.apply(Command::Close);
            });
        });
    }

    group.finish();
}

/// Measures one step including the full-resolution URL rewrite.
fn bench_next(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    let mut gallery = gallery_of(1_000);
    gallery.apply(Command::Open(ItemId::new(0)));
    group.bench_function("next", |b| {
        b.iter(|| {
            gallery.apply(black_box(Command::Next));
            black_box(gallery.navigator().content());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_select_filter, bench_open, bench_next);
criterion_main!(benches);
