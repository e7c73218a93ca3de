//! Rendering of returns to image files.
use anyhow::Result;
use plotters::prelude::*;
use std::path::Path;

/// Returns a font size suitable for a chart title of the given length.
///
/// Longer titles get smaller fonts so that the title fits the canvas.
pub fn fontsize_for(title: &str) -> u32 {
    match title.len() {
        0..=40 => 24,
        41..=60 => 20,
        61..=80 => 16,
        _ => 12,
    }
}

/// Plots a returns series as a line chart and writes it to `path` as PNG.
///
/// The x-axis is the episode index and the y-axis is the return of that
/// episode. An empty series produces a chart with no line.
pub fn plot_returns(returns: &[f32], title: &str, path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, (640, 480)).into_drawing_area();
    root.fill(&WHITE)?;

    let x_max = returns.len().max(1) as f32;
    let (y_min, y_max) = y_range(returns);

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", fontsize_for(title)))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0f32..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Episode")
        .y_desc("Return")
        .draw()?;

    chart.draw_series(LineSeries::new(
        returns.iter().enumerate().map(|(i, g)| (i as f32, *g)),
        &BLUE,
    ))?;

    // Finalizes the bitmap backend and writes the file.
    root.present()?;

    Ok(())
}

/// Vertical axis range covering the series, padded so that a constant
/// series still spans a non-degenerate range.
fn y_range(returns: &[f32]) -> (f32, f32) {
    let mut min = f32::MAX;
    let mut max = f32::MIN;
    for g in returns {
        min = min.min(*g);
        max = max.max(*g);
    }
    if returns.is_empty() {
        (0.0, 1.0)
    } else if min == max {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    }
}
