use super::layout::{compute_layout, Layout};
use super::legend::LegendLayout;
use super::params::{HORIZONTAL_PADDING, LABEL_HEIGHT, LEGEND_HEIGHT, MAX_CANVAS_DIM, SWATCH_SIZE};
use crate::motifs::MotifRule;
use crate::reads::ReadModel;
use crate::utils::{MotifMarkError, Result};
use trackplot::Surface;

const TEXT_BASELINE_OFFSET: f64 = 5.0;

/// Draws every read in input order followed by the motif legend
pub fn plot_reads(reads: &[ReadModel], rules: &[MotifRule]) -> Result<Surface> {
    let layout = compute_layout(reads, rules);
    check_dimensions(&layout)?;

    let x = (HORIZONTAL_PADDING / 2) as f64;
    let mut canvas = Surface::new(layout.width, layout.height);
    for (read, offset) in reads.iter().zip(&layout.read_offsets) {
        canvas.compose(read_surface(read), x, *offset as f64);
    }
    let legend_width = layout.width - HORIZONTAL_PADDING;
    canvas.compose(
        legend_surface(&layout.legend, legend_width),
        x,
        layout.legend_offset as f64,
    );
    Ok(canvas)
}

fn check_dimensions(layout: &Layout) -> Result<()> {
    let in_bounds = |dim: u32| dim > 0 && dim <= MAX_CANVAS_DIM;
    if in_bounds(layout.width) && in_bounds(layout.height) {
        Ok(())
    } else {
        Err(MotifMarkError::Render(format!(
            "Canvas of {}x{} is outside the supported range 1..={}",
            layout.width, layout.height, MAX_CANVAS_DIM
        )))
    }
}

fn read_surface(read: &ReadModel) -> Surface {
    let mut surface = Surface::new(read.width(), LABEL_HEIGHT + read.track_height());
    surface.draw_text(0.0, LABEL_HEIGHT as f64 - TEXT_BASELINE_OFFSET, read.label());

    let mut track = Surface::new(read.width(), read.track_height());
    for line in read.geometry() {
        track.draw_line(line.x0, line.y0, line.x1, line.y1, line.width, &line.color);
    }
    surface.compose(track, 0.0, LABEL_HEIGHT as f64);
    surface
}

fn legend_surface(legend: &LegendLayout, width: u32) -> Surface {
    let mut surface = Surface::new(width, LEGEND_HEIGHT);
    let y = LEGEND_HEIGHT as f64 / 2.0;
    for entry in &legend.entries {
        surface.draw_line(
            entry.swatch_x,
            y,
            entry.swatch_x + SWATCH_SIZE,
            y,
            SWATCH_SIZE,
            &entry.color,
        );
        surface.draw_text(entry.label_x, y + TEXT_BASELINE_OFFSET, &entry.label);
    }
    surface
}
