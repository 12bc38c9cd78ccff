use crate::cli::OnelineArgs;
use crate::utils::{oneline_fasta_file, Result};

pub fn oneline(args: OnelineArgs) -> Result<()> {
    log::info!(
        "Writing single-line FASTA {} -> {}",
        args.fasta_path.display(),
        args.output_path.display()
    );
    oneline_fasta_file(&args.fasta_path, &args.output_path)
}
