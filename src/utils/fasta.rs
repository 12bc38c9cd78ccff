use super::{MotifMarkError, Result};
use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

const RECORD_MARKER: char = '>';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub header: String,
    pub seq: String,
}

/// Copies FASTA records from `reader` to `writer` with each sequence joined onto one line
pub fn oneline_fasta<R: BufRead, W: Write>(reader: R, mut writer: W) -> Result<()> {
    let io_err = |e: std::io::Error| MotifMarkError::InputFormat(format!("FASTA I/O failed: {e}"));
    let mut in_sequence = false;

    for line in reader.lines() {
        let line = line.map_err(io_err)?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with(RECORD_MARKER) {
            if in_sequence {
                writeln!(writer).map_err(io_err)?;
            }
            writeln!(writer, "{line}").map_err(io_err)?;
            in_sequence = false;
        } else {
            write!(writer, "{line}").map_err(io_err)?;
            in_sequence = true;
        }
    }

    if in_sequence {
        writeln!(writer).map_err(io_err)?;
    }
    writer.flush().map_err(io_err)
}

pub fn oneline_fasta_file(src: &Path, dest: &Path) -> Result<()> {
    let reader = open_fasta(src)?;
    let file = File::create(dest).map_err(|e| {
        MotifMarkError::InputFormat(format!("Failed to create {}: {e}", dest.display()))
    })?;
    oneline_fasta(reader, BufWriter::new(file))
}

/// Reads a FASTA file of any line width into records, in file order
pub fn read_fasta(path: &Path) -> Result<Vec<FastaRecord>> {
    let mut buffer = Vec::new();
    oneline_fasta(open_fasta(path)?, &mut buffer)?;
    let text = String::from_utf8(buffer).map_err(|_| {
        MotifMarkError::InputFormat(format!("{} is not valid UTF-8", path.display()))
    })?;
    pair_records(text.lines())
}

/// Pairs line 2n (header) with line 2n+1 (sequence) of single-lined FASTA
pub fn pair_records<'a>(lines: impl Iterator<Item = &'a str>) -> Result<Vec<FastaRecord>> {
    let lines: Vec<&str> = lines.map(str::trim).collect();
    if lines.is_empty() {
        return Err(MotifMarkError::InputFormat(
            "FASTA contains no records".to_string(),
        ));
    }
    if lines.len() % 2 != 0 {
        return Err(MotifMarkError::InputFormat(format!(
            "Expected header/sequence line pairs, found {} lines",
            lines.len()
        )));
    }

    lines
        .chunks(2)
        .enumerate()
        .map(|(index, pair)| {
            let (header, seq) = (pair[0], pair[1]);
            if !header.starts_with(RECORD_MARKER) {
                return Err(MotifMarkError::InputFormat(format!(
                    "Record {} header is missing '{}': {}",
                    index + 1,
                    RECORD_MARKER,
                    header
                )));
            }
            check_sequence(header, seq)?;
            Ok(FastaRecord {
                header: header.to_string(),
                seq: seq.to_string(),
            })
        })
        .collect()
}

fn check_sequence(header: &str, seq: &str) -> Result<()> {
    if seq.is_empty() {
        return Err(MotifMarkError::InputFormat(format!(
            "Record {header} has an empty sequence"
        )));
    }
    if let Some((pos, base)) = seq
        .char_indices()
        .find(|(_, c)| !matches!(c.to_ascii_uppercase(), 'A' | 'C' | 'G' | 'T' | 'U' | 'N'))
    {
        return Err(MotifMarkError::InputFormat(format!(
            "Record {header} has invalid nucleotide '{base}' at position {pos}"
        )));
    }
    Ok(())
}

fn open_fasta(path: &Path) -> Result<BufReader<File>> {
    File::open(path).map(BufReader::new).map_err(|e| {
        MotifMarkError::InputFormat(format!("Failed to open FASTA {}: {e}", path.display()))
    })
}
