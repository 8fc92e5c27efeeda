#![allow(clippy::expect_used, clippy::unwrap_used)]
//! Categorical Plot Tour
//!
//! Draws every plot kind over the same synthetic tips table, plus a faceted
//! grid, and writes each figure as SVG.
//!
//! Run with: `cargo run --example categorical_tour`

use trueno_catplot::prelude::*;

const DAYS: [&str; 4] = ["Thu", "Fri", "Sat", "Sun"];

fn main() {
    println!("Categorical Plot Tour");
    println!("=====================\n");

    // Step 1: Generate sample data
    println!("Step 1: Generating sample data...");
    let tips = generate_tips(240);
    println!("  Rows: {}", tips.nrow());
    println!("  Columns: {:?}", tips.columns());

    // Step 2: One figure per kind
    println!("\nStep 2: Rendering each kind...");
    for kind in PlotKind::ALL {
        let plot = CatPlot::new(tips.clone())
            .x("day")
            .hue("smoker")
            .order(&DAYS)
            .kind(kind)
            .seed(42)
            .theme(Theme::white());
        let plot = match kind {
            PlotKind::Count => plot,
            PlotKind::Violin => plot.y("total_bill").split(true).inner(ViolinInner::Quartiles),
            _ => plot.y("total_bill"),
        };
        let figure = plot.build().expect("Failed to build figure");

        let path = format!("catplot_{kind}.svg");
        SvgEncoder::from_figure(&figure)
            .expect("Failed to lay out figure")
            .write_to_file(&path)
            .expect("Failed to write SVG");
        println!(
            "  {:<6} {:>4} draw commands, value range {:.1}..{:.1} -> {path}",
            kind.name(),
            figure.panels()[0].draw.len(),
            figure.value_range().0,
            figure.value_range().1,
        );
    }

    // Step 3: Faceted grid
    println!("\nStep 3: Faceted boxen grid...");
    let figure = CatPlot::new(tips)
        .x("total_bill")
        .y("day")
        .row("time")
        .col("smoker")
        .kind(PlotKind::Boxen)
        .dimensions(360, 240)
        .build()
        .expect("Failed to build grid");
    println!("  Orientation: {:?}", figure.orient());
    println!("  Grid: {} x {}", figure.nrows(), figure.ncols());
    for panel in figure.panels() {
        println!("    [{}, {}] {}", panel.row, panel.col, panel.title);
    }
    SvgEncoder::from_figure(&figure)
        .expect("Failed to lay out grid")
        .write_to_file("catplot_grid.svg")
        .expect("Failed to write SVG");
    println!("  Saved: catplot_grid.svg");

    println!("\nDone.");
}

/// Deterministic pseudo-random tips table.
fn generate_tips(n: usize) -> DataFrame {
    let mut state = 12345u32;
    let mut next = move || {
        state = state.wrapping_mul(1_103_515_245).wrapping_add(12345);
        (state >> 8) as f32 / (1u32 << 24) as f32
    };

    let mut day = Vec::with_capacity(n);
    let mut smoker = Vec::with_capacity(n);
    let mut time = Vec::with_capacity(n);
    let mut bill = Vec::with_capacity(n);
    for _ in 0..n {
        let d = (next() * 4.0) as usize % 4;
        day.push(DAYS[d]);
        smoker.push(if next() < 0.4 { "Yes" } else { "No" });
        time.push(if d < 2 && next() < 0.7 { "Lunch" } else { "Dinner" });
        let base = 14.0 + d as f32 * 2.5;
        bill.push(base + (next() + next() + next() - 1.5) * 12.0);
    }

    DataFrame::new()
        .with_str("day", &day)
        .with_str("smoker", &smoker)
        .with_str("time", &time)
        .with_f32("total_bill", &bill)
}
