use super::params::{measure_text, LEGEND_ENTRY_GAP, SWATCH_LABEL_GAP, SWATCH_SIZE};
use crate::motifs::MotifRule;

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
    pub swatch_x: f64,
    pub label_x: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendLayout {
    pub entries: Vec<LegendEntry>,
    pub width: f64,
}

/// Places swatch and label pairs left to right in rule order. There is no wrapping.
pub fn layout_legend(rules: &[MotifRule]) -> LegendLayout {
    let mut x = 0.0;
    let mut entries = Vec::with_capacity(rules.len());
    for rule in rules {
        let swatch_x = x;
        let label_x = swatch_x + SWATCH_SIZE + SWATCH_LABEL_GAP;
        entries.push(LegendEntry {
            label: rule.raw.clone(),
            color: rule.color.clone(),
            swatch_x,
            label_x,
        });
        x = label_x + measure_text(&rule.raw) + LEGEND_ENTRY_GAP;
    }
    let width = (x - LEGEND_ENTRY_GAP).max(0.0);
    LegendLayout { entries, width }
}
