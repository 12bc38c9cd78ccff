mod errors;
pub mod fasta;

pub use errors::{MotifMarkError, Result};
pub use fasta::{oneline_fasta, oneline_fasta_file, read_fasta, FastaRecord};

pub fn handle_error_and_exit(err: impl std::fmt::Display) -> ! {
    log::error!("{}", err);
    std::process::exit(1);
}
