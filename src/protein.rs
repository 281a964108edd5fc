//! Amino acid names and a fixed similarity heuristic.
//!
//! The similarity groups are a small hand-picked table of conservative
//! replacements, not a substitution matrix.

use crate::model::ProteinComparison;

/// Full names by one-letter code.
static AMINO_ACID_NAMES: &[(char, &str)] = &[
    ('A', "Alanine"),
    ('R', "Arginine"),
    ('N', "Asparagine"),
    ('D', "Aspartate"),
    ('C', "Cysteine"),
    ('E', "Glutamate"),
    ('Q', "Glutamine"),
    ('G', "Glycine"),
    ('H', "Histidine"),
    ('I', "Isoleucine"),
    ('L', "Leucine"),
    ('K', "Lysine"),
    ('M', "Methionine"),
    ('F', "Phenylalanine"),
    ('P', "Proline"),
    ('S', "Serine"),
    ('T', "Threonine"),
    ('W', "Tryptophan"),
    ('Y', "Tyrosine"),
    ('V', "Valine"),
    ('-', "Gap"),
    ('*', "Stop Codon"),
    ('_', "Stop Codon"),
    ('X', "Unknown"),
];

/// Residues considered similar to the key residue.
static SIMILARITY_GROUPS: &[(char, &str)] = &[
    ('A', "SGT"),
    ('D', "EN"),
    ('E', "DQ"),
    ('F', "YW"),
    ('I', "LMV"),
    ('K', "R"),
    ('L', "IMV"),
    ('M', "ILV"),
    ('N', "DST"),
    ('Q', "EK"),
    ('R', "K"),
    ('S', "ATN"),
    ('T', "AS"),
    ('V', "ILM"),
    ('W', "Y"),
    ('Y', "FW"),
];

/// Returns the full name of an amino acid, or "Unknown".
pub fn amino_acid_name(aa: char) -> &'static str {
    let aa = aa.to_ascii_uppercase();
    AMINO_ACID_NAMES
        .iter()
        .find(|(code, _)| *code == aa)
        .map(|(_, name)| *name)
        .unwrap_or("Unknown")
}

fn similar_to(aa: char) -> &'static str {
    SIMILARITY_GROUPS
        .iter()
        .find(|(code, _)| *code == aa)
        .map(|(_, group)| *group)
        .unwrap_or("")
}

/// True when the residues are equal or either lists the other as similar.
pub fn are_similar(aa1: char, aa2: char) -> bool {
    let a1 = aa1.to_ascii_uppercase();
    let a2 = aa2.to_ascii_uppercase();

    a1 == a2 || similar_to(a1).contains(a2) || similar_to(a2).contains(a1)
}

/// Position-wise identity and similarity of two protein strings.
///
/// Positions are compared up to the shorter length; percentages are taken
/// over the longer length and rounded to one decimal place.
pub fn compare_proteins(protein1: &str, protein2: &str) -> ProteinComparison {
    let max_len = protein1.chars().count().max(protein2.chars().count());
    if max_len == 0 {
        return ProteinComparison::default();
    }

    let mut identities = 0usize;
    let mut similarities = 0usize;

    for (a, b) in protein1.chars().zip(protein2.chars()) {
        if a == b && a != '-' {
            identities += 1;
            similarities += 1;
        } else if are_similar(a, b) {
            similarities += 1;
        }
    }

    ProteinComparison {
        identity: round1(identities as f64 / max_len as f64 * 100.0),
        similarity: round1(similarities as f64 / max_len as f64 * 100.0),
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
