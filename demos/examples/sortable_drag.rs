// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted drag-to-reorder over a vertical list.
//!
//! This example plays the part of a host event adapter:
//! - it lays out rows of a fixed height and hit tests the pointer against them,
//! - it forwards drag start / drag over / drop to `understory_sortable::SortableList`,
//! - it redraws the list as text, with `----` where the drop marker would go.
//!
//! Run:
//! - `cargo run -p understory_demos --example sortable_drag`
//! - `RUST_LOG=understory_sortable=trace cargo run -p understory_demos --example sortable_drag`

use kurbo::{Point, Rect};
use tracing_subscriber::EnvFilter;
use understory_sortable::{DropOutcome, Indicator, SortableList};

const ROW_HEIGHT: f64 = 32.0;
const WIDTH: f64 = 240.0;

/// Bounds of row `index` in list coordinates.
fn row_bounds(index: usize) -> Rect {
    let top = ROW_HEIGHT * index as f64;
    Rect::new(0.0, top, WIDTH, top + ROW_HEIGHT)
}

/// Index of the row under `pointer`, if any.
fn hit_row(pointer: Point, len: usize) -> Option<usize> {
    (0..len).find(|&ix| row_bounds(ix).contains(pointer))
}

fn draw(list: &SortableList<&str>) {
    for (ix, label) in list.items().iter().enumerate() {
        let indicator = list.indicator_at(ix);
        if indicator == Some(Indicator::Above) {
            println!("    ----");
        }
        let flags = list.row_flags(ix);
        let grip = if flags.is_empty() { ' ' } else { '*' };
        println!("  {grip} {ix:02}  {label}");
        if indicator == Some(Indicator::Below) {
            println!("    ----");
        }
    }
    println!();
}

/// Drag the row under `from` along `path` and release at the last point.
fn gesture(list: &mut SortableList<&str>, from: Point, path: &[Point]) -> Option<DropOutcome> {
    let source = hit_row(from, list.len())?;
    list.on_drag_start(source);

    let mut last = None;
    for &pointer in path {
        if let Some(ix) = hit_row(pointer, list.len()) {
            list.on_drag_over(pointer, row_bounds(ix), ix);
            last = Some(ix);
        }
    }
    draw(list);

    match last {
        Some(ix) => Some(list.on_drop(ix)),
        None => {
            // Released outside every row: nothing reorders.
            list.cancel();
            None
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut list = SortableList::new(["inbox", "drafts", "sent", "archive", "spam", "trash"]);
    println!("initial order:");
    draw(&list);

    // "inbox" dragged down onto the upper half of "archive".
    let path = [
        Point::new(20.0, 40.0),
        Point::new(20.0, 80.0),
        Point::new(20.0, 100.0),
    ];
    let outcome = gesture(&mut list, Point::new(20.0, 10.0), &path);
    println!("drop 1: {outcome:?}");
    draw(&list);

    // "trash" dragged up onto the lower half of "drafts".
    let path = [Point::new(30.0, 120.0), Point::new(30.0, 27.0)];
    let outcome = gesture(&mut list, Point::new(30.0, 170.0), &path);
    println!("drop 2: {outcome:?}");
    draw(&list);

    // Released far below the list.
    let path = [Point::new(30.0, 900.0)];
    let outcome = gesture(&mut list, Point::new(30.0, 5.0), &path);
    println!("drop 3: {outcome:?}");
    draw(&list);
}
