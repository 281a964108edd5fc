//! Composition statistics for nucleotide sequences.
//!
//! None of these functions validate their input: symbols outside A/C/G/T
//! are counted in no bucket and complement to themselves.

use crate::model::NucleotideCounts;

/// Returns the percentage of G and C symbols, or 0 for an empty sequence.
pub fn gc_content(sequence: &str) -> f64 {
    if sequence.is_empty() {
        return 0.0;
    }
    let gc = sequence
        .bytes()
        .filter(|b| matches!(b.to_ascii_uppercase(), b'G' | b'C'))
        .count();
    gc as f64 / sequence.len() as f64 * 100.0
}

/// Returns `100 - gc_content`, or 0 for an empty sequence.
pub fn at_content(sequence: &str) -> f64 {
    if sequence.is_empty() {
        return 0.0;
    }
    100.0 - gc_content(sequence)
}

/// Rounds a percentage to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Counts A, T, C and G (case-insensitive).
pub fn nucleotide_counts(sequence: &str) -> NucleotideCounts {
    let mut counts = NucleotideCounts::default();
    for b in sequence.bytes() {
        match b.to_ascii_uppercase() {
            b'A' => counts.a += 1,
            b'T' => counts.t += 1,
            b'C' => counts.c += 1,
            b'G' => counts.g += 1,
            _ => {}
        }
    }
    counts
}

/// Watson-Crick complement of a single base.
pub fn complement(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'T' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        b'a' => b't',
        b't' => b'a',
        b'c' => b'g',
        b'g' => b'c',
        other => other,
    }
}

/// Reverses the sequence and complements every base.
pub fn reverse_complement(sequence: &str) -> String {
    sequence
        .bytes()
        .rev()
        .map(|b| complement(b) as char)
        .collect()
}
