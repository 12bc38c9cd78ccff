pub mod compiler;
pub mod scanner;

pub use compiler::{compile_motifs, load_motifs, MotifRule, PALETTE};
pub use scanner::{MatchIter, SequenceScanner};
