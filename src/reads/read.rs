use super::segment::{partition_segments, Segment};
use crate::mmviz::params::{
    clamp_to_u32, EXON_STROKE, INTRON_STROKE, MOTIF_STROKE, SEGMENT_COLOR, TRACK_HEIGHT,
};
use crate::motifs::{MotifRule, SequenceScanner};
use crate::utils::FastaRecord;
use rayon::prelude::*;
use trackplot::Line;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotifOccurrence {
    pub color: String,
    pub start: usize,
    pub end: usize,
}

/// One FASTA record with its segments and motif hits, computed at construction
#[derive(Debug, Clone)]
pub struct ReadModel {
    pub header: String,
    pub seq: String,
    pub segments: Vec<Segment>,
    /// Grouped by motif rule order, then by match position
    pub occurrences: Vec<MotifOccurrence>,
}

impl ReadModel {
    pub fn new(header: &str, seq: &str, rules: &[MotifRule]) -> Self {
        let scanner = SequenceScanner::new(seq);
        let occurrences = rules
            .iter()
            .flat_map(|rule| {
                scanner.scan(rule).map(move |(start, end)| MotifOccurrence {
                    color: rule.color.clone(),
                    start,
                    end,
                })
            })
            .collect();

        Self {
            header: header.to_string(),
            seq: seq.to_string(),
            segments: partition_segments(seq),
            occurrences,
        }
    }

    pub fn from_record(record: &FastaRecord, rules: &[MotifRule]) -> Self {
        Self::new(&record.header, &record.seq, rules)
    }

    pub fn label(&self) -> &str {
        self.header.strip_prefix('>').unwrap_or(&self.header)
    }

    pub fn width(&self) -> u32 {
        clamp_to_u32(self.seq.len())
    }

    pub fn track_height(&self) -> u32 {
        TRACK_HEIGHT
    }

    /// Strokes for the track in local coordinates. Motifs come first so segment strokes paint on top.
    pub fn geometry(&self) -> Vec<Line> {
        let y = TRACK_HEIGHT as f64 / 2.0;
        let motif_lines = self.occurrences.iter().map(|occurrence| Line {
            x0: occurrence.start as f64,
            y0: y,
            x1: occurrence.end as f64,
            y1: y,
            width: MOTIF_STROKE,
            color: occurrence.color.clone(),
        });
        let segment_lines = self.segments.iter().map(|segment| Line {
            x0: segment.start as f64,
            y0: y,
            x1: segment.end as f64,
            y1: y,
            width: if segment.is_exon {
                EXON_STROKE
            } else {
                INTRON_STROKE
            },
            color: SEGMENT_COLOR.to_string(),
        });
        motif_lines.chain(segment_lines).collect()
    }
}

/// Builds one model per record in parallel; output order matches `records`
pub fn build_reads(records: &[FastaRecord], rules: &[MotifRule]) -> Vec<ReadModel> {
    records
        .par_iter()
        .map(|record| ReadModel::from_record(record, rules))
        .collect()
}
