pub mod read;
pub mod segment;

pub use read::{build_reads, MotifOccurrence, ReadModel};
pub use segment::{partition_segments, Segment};
