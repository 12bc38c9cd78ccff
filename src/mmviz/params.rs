// All geometry is in pixels with one base pair per pixel horizontally

pub const LABEL_HEIGHT: u32 = 20;
pub const TRACK_HEIGHT: u32 = 40;
pub const LEGEND_HEIGHT: u32 = 40;
pub const HORIZONTAL_PADDING: u32 = 40;

pub const MOTIF_STROKE: f64 = 20.0;
pub const EXON_STROKE: f64 = 12.0;
pub const INTRON_STROKE: f64 = 2.0;
pub const SEGMENT_COLOR: &str = "#000000";

/// Assumed advance of one label character at the default 12px font
pub const CHAR_WIDTH: f64 = 7.0;
pub const SWATCH_SIZE: f64 = 14.0;
pub const SWATCH_LABEL_GAP: f64 = 4.0;
pub const LEGEND_ENTRY_GAP: f64 = 16.0;

pub const MAX_CANVAS_DIM: u32 = 32_768;

pub fn measure_text(text: &str) -> f64 {
    text.chars().count() as f64 * CHAR_WIDTH
}

/// Pixel extent for a base-pair count, pinned at `u32::MAX` so oversized input fails the canvas bound check
pub fn clamp_to_u32(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_keeps_small_lengths() {
        assert_eq!(clamp_to_u32(0), 0);
        assert_eq!(clamp_to_u32(1234), 1234);
        assert_eq!(clamp_to_u32(u32::MAX as usize), u32::MAX);
    }

    #[test]
    fn clamp_pins_oversized_lengths() {
        assert_eq!(clamp_to_u32(usize::MAX), u32::MAX);
    }

    #[test]
    fn measure_counts_characters() {
        assert_eq!(measure_text("YGCY"), 4.0 * CHAR_WIDTH);
    }
}
