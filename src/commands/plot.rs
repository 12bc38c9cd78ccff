use crate::cli::PlotArgs;
use crate::mmviz::plot::plot_reads;
use crate::motifs::load_motifs;
use crate::reads::build_reads;
use crate::utils::{read_fasta, MotifMarkError, Result};
use std::path::Path;
use trackplot::{generate_image, FontConfig, Surface};

pub fn motif_mark(args: PlotArgs) -> Result<()> {
    let canvas = build_plot(&args.fasta_path, &args.motifs_path)?;

    let mut font = FontConfig::default();
    if let Some(font_family) = &args.font_family {
        font.set_family(font_family);
    }

    log::info!(
        "Writing {}x{} image to {}",
        canvas.width,
        canvas.height,
        args.output_path.display()
    );
    generate_image(&canvas, &font, &args.output_path)
        .map_err(MotifMarkError::Render)
}

/// Runs the whole engine on explicit input paths and returns the drawing
pub fn build_plot(fasta_path: &Path, motifs_path: &Path) -> Result<Surface> {
    let rules = load_motifs(motifs_path)?;
    log::debug!(
        "Compiled {} motifs from {}",
        rules.len(),
        motifs_path.display()
    );
    for rule in &rules {
        log::trace!(
            "Motif {} -> {} ({} bp, {})",
            rule.raw,
            rule.pattern,
            rule.length,
            rule.color
        );
    }

    let records = read_fasta(fasta_path)?;
    log::debug!(
        "Loaded {} records from {}",
        records.len(),
        fasta_path.display()
    );

    let reads = build_reads(&records, &rules);
    let num_occurrences: usize = reads.iter().map(|read| read.occurrences.len()).sum();
    log::info!(
        "Found {} motif occurrences across {} reads",
        num_occurrences,
        reads.len()
    );

    plot_reads(&reads, &rules)
}
