use crate::utils::{MotifMarkError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::{fs, path::Path};

pub const PALETTE: [&str; 8] = [
    "#66c2a5", "#fc8d62", "#8da0cb", "#e78ac3", "#a6d854", "#ffd92f", "#e5c494", "#b3b3b3",
];

const MOTIF_ALPHABET: &str = "ACGTURYSWKMBDHVN";

// Applied in this order; T/U must be unified before any class containing them is written
static IUPAC_SUBSTITUTIONS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        ("[TU]", "[TU]"),
        ("R", "[AG]"),
        ("Y", "[CTU]"),
        ("S", "[GC]"),
        ("W", "[ATU]"),
        ("K", "[GTU]"),
        ("M", "[AC]"),
        ("B", "[CGTU]"),
        ("D", "[AGTU]"),
        ("H", "[ACTU]"),
        ("V", "[ACG]"),
        ("N", "[ACTUG]"),
    ]
    .into_iter()
    .map(|(code, class)| (Regex::new(code).expect("static IUPAC pattern"), class))
    .collect()
});

#[derive(Debug, Clone)]
pub struct MotifRule {
    /// Motif as entered, used as its legend label
    pub raw: String,
    pub pattern: String,
    pub length: usize,
    pub color: String,
    matcher: Regex,
}

impl MotifRule {
    pub fn new(raw: &str, index: usize) -> Result<Self> {
        let upper = raw.trim().to_ascii_uppercase();
        if upper.is_empty() {
            return Err(MotifMarkError::Configuration(format!(
                "Motif on line {} is empty",
                index + 1
            )));
        }
        if let Some(code) = upper.chars().find(|c| !MOTIF_ALPHABET.contains(*c)) {
            return Err(MotifMarkError::Configuration(format!(
                "Motif '{}' contains '{}', which is not an IUPAC nucleotide code",
                raw.trim(),
                code
            )));
        }
        let color = PALETTE.get(index).ok_or_else(|| {
            MotifMarkError::Configuration(format!(
                "At most {} motifs are supported, got motif #{} '{}'",
                PALETTE.len(),
                index + 1,
                raw.trim()
            ))
        })?;

        let pattern = expand_ambiguity_codes(&upper);
        let matcher = Regex::new(&pattern).map_err(|e| {
            MotifMarkError::Configuration(format!("Invalid motif '{}': {e}", raw.trim()))
        })?;

        Ok(Self {
            raw: raw.trim().to_string(),
            pattern,
            length: upper.chars().count(),
            color: color.to_string(),
            matcher,
        })
    }

    pub fn matcher(&self) -> &Regex {
        &self.matcher
    }
}

pub fn expand_ambiguity_codes(motif: &str) -> String {
    IUPAC_SUBSTITUTIONS
        .iter()
        .fold(motif.to_string(), |expanded, (code, class)| {
            code.replace_all(&expanded, *class).into_owned()
        })
}

/// Compiles motifs in input order. A repeated raw motif replaces the earlier rule in place.
pub fn compile_motifs<'a>(lines: impl IntoIterator<Item = &'a str>) -> Result<Vec<MotifRule>> {
    let mut rules: Vec<MotifRule> = Vec::new();
    for (index, line) in lines.into_iter().enumerate() {
        let rule = MotifRule::new(line, index)?;
        match rules.iter_mut().find(|existing| existing.raw == rule.raw) {
            Some(existing) => *existing = rule,
            None => rules.push(rule),
        }
    }

    if rules.is_empty() {
        return Err(MotifMarkError::Configuration(
            "Motif file contains no motifs".to_string(),
        ));
    }
    Ok(rules)
}

pub fn load_motifs(path: &Path) -> Result<Vec<MotifRule>> {
    let content = fs::read_to_string(path).map_err(|e| {
        MotifMarkError::Configuration(format!(
            "Failed to read motif file {}: {e}",
            path.display()
        ))
    })?;
    compile_motifs(content.lines())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambiguous_motif_keeps_logical_length() {
        let rule = MotifRule::new("YGCY", 0).unwrap();
        assert_eq!(rule.pattern, "[CTU]GC[CTU]");
        assert_eq!(rule.length, 4);
    }

    #[test]
    fn y_class_is_not_rescanned_by_tu_rule() {
        assert_eq!(expand_ambiguity_codes("YGCY"), "[CTU]GC[CTU]");
        assert_eq!(expand_ambiguity_codes("TU"), "[TU][TU]");
        assert_eq!(expand_ambiguity_codes("N"), "[ACTUG]");
    }

    #[test]
    fn ygcy_matches_all_expansions() {
        let rule = MotifRule::new("ygcy", 0).unwrap();
        for target in ["CGCT", "TGCC", "CGCC", "TGCT", "UGCU"] {
            assert!(rule.matcher().is_match(target), "{target}");
        }
        assert!(!rule.matcher().is_match("AGCT"));
    }

    #[test]
    fn raw_text_is_trimmed_not_uppercased() {
        let rule = MotifRule::new("  ygcy \t", 0).unwrap();
        assert_eq!(rule.raw, "ygcy");
    }

    #[test]
    fn colors_follow_input_order() {
        let rules = compile_motifs(["M", "R", "W"]).unwrap();
        let colors: Vec<_> = rules.iter().map(|r| r.color.as_str()).collect();
        assert_eq!(colors, &PALETTE[..3]);
        let labels: Vec<_> = rules.iter().map(|r| r.raw.as_str()).collect();
        assert_eq!(labels, ["M", "R", "W"]);
    }

    #[test]
    fn too_many_motifs_err() {
        let motifs = ["A", "C", "G", "T", "AA", "CC", "GG", "TT", "AC"];
        assert!(matches!(
            compile_motifs(motifs),
            Err(MotifMarkError::Configuration(_))
        ));
        assert!(compile_motifs(motifs[..8].iter().copied()).is_ok());
    }

    #[test]
    fn duplicate_motif_overwrites_in_place() {
        let rules = compile_motifs(["ACGT", "GG", "ACGT"]).unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].raw, "ACGT");
        assert_eq!(rules[0].color, PALETTE[2]);
        assert_eq!(rules[1].color, PALETTE[1]);
    }

    #[test]
    fn empty_line_err() {
        assert_eq!(
            MotifRule::new("   ", 2).unwrap_err(),
            MotifMarkError::Configuration("Motif on line 3 is empty".to_string())
        );
    }

    #[test]
    fn non_iupac_character_err() {
        assert!(MotifRule::new("AC.T", 0).is_err());
        assert!(MotifRule::new("A[C]", 0).is_err());
    }

    #[test]
    fn unreadable_motif_file_err() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing_motifs.txt");
        match load_motifs(&missing) {
            Err(MotifMarkError::Configuration(msg)) => {
                assert!(msg.starts_with("Failed to read motif file"))
            }
            other => panic!("expected configuration error, got {other:?}"),
        }
    }

    #[test]
    fn load_motifs_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("motifs.txt");
        std::fs::write(&path, "ygcy\nGCAUG\n").unwrap();
        let rules = load_motifs(&path).unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[1].raw, "GCAUG");
    }

    #[test]
    fn no_motifs_err() {
        assert!(compile_motifs(Vec::<&str>::new()).is_err());
    }
}
