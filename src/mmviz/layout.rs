use super::legend::{layout_legend, LegendLayout};
use super::params::{HORIZONTAL_PADDING, LABEL_HEIGHT, LEGEND_HEIGHT};
use crate::motifs::MotifRule;
use crate::reads::ReadModel;

#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    /// Vertical offset of each read, in input order
    pub read_offsets: Vec<u32>,
    pub legend_offset: u32,
    pub legend: LegendLayout,
}

/// Single top-to-bottom pass over the reads; each read sits below everything visited before it
#[derive(Debug, Default)]
pub struct LayoutAccumulator {
    current_height: u32,
    max_width: u32,
    read_offsets: Vec<u32>,
}

impl LayoutAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visit(&mut self, read: &ReadModel) -> u32 {
        let offset = self.current_height;
        self.read_offsets.push(offset);
        self.current_height = self
            .current_height
            .saturating_add(LABEL_HEIGHT)
            .saturating_add(read.track_height());
        self.max_width = self.max_width.max(read.width());
        offset
    }

    pub fn finish(self, legend: LegendLayout) -> Layout {
        let max_width = self.max_width.max(legend.width.ceil() as u32);
        Layout {
            width: max_width.saturating_add(HORIZONTAL_PADDING),
            height: self.current_height.saturating_add(LEGEND_HEIGHT),
            read_offsets: self.read_offsets,
            legend_offset: self.current_height,
            legend,
        }
    }
}

pub fn compute_layout(reads: &[ReadModel], rules: &[MotifRule]) -> Layout {
    let accumulator = reads
        .iter()
        .fold(LayoutAccumulator::new(), |mut accumulator, read| {
            accumulator.visit(read);
            accumulator
        });
    accumulator.finish(layout_legend(rules))
}
