use itertools::Itertools;

/// A maximal same-case run; uppercase marks an exon, lowercase an intron
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: usize,
    pub end: usize,
    pub is_exon: bool,
}

impl Segment {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Splits `seq` into contiguous runs covering `[0, seq.len())`, breaking exactly where case changes
pub fn partition_segments(seq: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut start = 0;
    for (is_exon, group) in &seq.bytes().chunk_by(|base| !base.is_ascii_lowercase()) {
        let run_len = group.count();
        segments.push(Segment {
            start,
            end: start + run_len,
            is_exon,
        });
        start += run_len;
    }
    segments
}
