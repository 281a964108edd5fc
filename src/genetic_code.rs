//! Genetic code definition and translation logic.
//!
//! This module provides:
//! - The standard genetic code (NCBI table 1) as static read-only data
//! - Codon to amino acid translation
//! - Start/stop codon predicates used by the ORF scanner

/// Symbol emitted for the three stop codons.
pub const STOP_SYMBOL: char = '_';

/// Symbol emitted for any codon that is not in the table.
pub const UNKNOWN_SYMBOL: char = 'X';

/// The start codon (methionine).
pub const START_CODON: &[u8; 3] = b"ATG";

/// The standard stop codons.
pub const STOP_CODONS: [&[u8; 3]; 3] = [b"TAA", b"TAG", b"TGA"];

/// A genetic code table for translating codons to amino acids.
#[derive(Debug)]
pub struct GeneticCode {
    /// NCBI genetic code ID
    pub id: u8,
    /// Name of the genetic code
    pub name: &'static str,
    /// Amino acids in NCBI order (TTT, TTC, TTA, TTG, TCT, ...), stops as `_`
    amino_acids: &'static [u8; 64],
}

/// The standard genetic code.
pub static STANDARD: GeneticCode = GeneticCode {
    id: 1,
    name: "Standard",
    amino_acids: b"FFLLSSSSYY__CC_WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
};

/// Position of a base in the NCBI T, C, A, G ordering.
fn base_index(base: u8) -> Option<usize> {
    match base.to_ascii_uppercase() {
        b'T' => Some(0),
        b'C' => Some(1),
        b'A' => Some(2),
        b'G' => Some(3),
        _ => None,
    }
}

impl GeneticCode {
    /// Translates a single codon to an amino acid.
    ///
    /// # Rules:
    /// - Codons of three A/C/G/T symbols (any case) are looked up in the table
    /// - Stop codons return `_`
    /// - Anything else (ambiguity codes, gaps, RNA `U`, wrong length) returns `X`
    pub fn translate_codon(&self, codon: &[u8]) -> char {
        let &[b1, b2, b3] = codon else {
            return UNKNOWN_SYMBOL;
        };

        match (base_index(b1), base_index(b2), base_index(b3)) {
            (Some(i), Some(j), Some(k)) => self.amino_acids[i * 16 + j * 4 + k] as char,
            _ => UNKNOWN_SYMBOL,
        }
    }

    /// Translates an entire nucleotide sequence to amino acids.
    ///
    /// # Arguments
    /// * `sequence` - The nucleotide sequence to translate
    /// * `frame` - Reading frame offset (0, 1, or 2)
    ///
    /// Trailing symbols that do not form a complete codon are dropped.
    pub fn translate_sequence(&self, sequence: &str, frame: usize) -> String {
        let bytes = sequence.as_bytes();
        let start = frame.min(2).min(bytes.len());

        bytes[start..]
            .chunks_exact(3)
            .map(|codon| self.translate_codon(codon))
            .collect()
    }
}

/// Translates a codon with the standard genetic code.
pub fn translate_codon(codon: &[u8]) -> char {
    STANDARD.translate_codon(codon)
}

/// Translates a sequence from its first base with the standard genetic code.
pub fn translate(sequence: &str) -> String {
    STANDARD.translate_sequence(sequence, 0)
}

/// Returns true for `ATG`.
pub fn is_start_codon(codon: &[u8]) -> bool {
    codon == START_CODON
}

/// Returns true for `TAA`, `TAG` and `TGA`.
pub fn is_stop_codon(codon: &[u8]) -> bool {
    STOP_CODONS.iter().any(|stop| codon == *stop)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_code_translation() {
        // Test some common codons
        assert_eq!(translate_codon(b"ATG"), 'M'); // Start codon
        assert_eq!(translate_codon(b"TAA"), '_'); // Stop codon
        assert_eq!(translate_codon(b"TAG"), '_'); // Stop codon
        assert_eq!(translate_codon(b"TGA"), '_'); // Stop codon
        assert_eq!(translate_codon(b"TTT"), 'F'); // Phenylalanine
        assert_eq!(translate_codon(b"GGG"), 'G'); // Glycine
        assert_eq!(translate_codon(b"TGG"), 'W');
        assert_eq!(translate_codon(b"AGA"), 'R');
        assert_eq!(translate_codon(b"CAT"), 'H');
    }

    #[test]
    fn test_every_codon_is_defined() {
        let bases = [b'A', b'C', b'G', b'T'];
        let mut stops = 0;
        for &b1 in &bases {
            for &b2 in &bases {
                for &b3 in &bases {
                    let aa = translate_codon(&[b1, b2, b3]);
                    assert_ne!(aa, UNKNOWN_SYMBOL);
                    if aa == STOP_SYMBOL {
                        stops += 1;
                    }
                }
            }
        }
        assert_eq!(stops, 3);
    }

    #[test]
    fn test_unknown_codons() {
        // Ambiguous nucleotides → X
        assert_eq!(translate_codon(b"ATN"), 'X');
        assert_eq!(translate_codon(b"NNN"), 'X');
        assert_eq!(translate_codon(b"CTR"), 'X');
        assert_eq!(translate_codon(b"A-G"), 'X');
        // RNA is not part of the table
        assert_eq!(translate_codon(b"AUG"), 'X');
        // Wrong length
        assert_eq!(translate_codon(b"AT"), 'X');
        assert_eq!(translate_codon(b"ATGA"), 'X');
    }

    #[test]
    fn test_sequence_translation() {
        assert_eq!(translate("ATGTAA"), "M_");
        assert_eq!(translate("ATGTTTTAG"), "MF_");

        // Different frames
        let seq = "AATGTTTTAG";
        assert_eq!(STANDARD.translate_sequence(seq, 0), "NVL");
        assert_eq!(STANDARD.translate_sequence(seq, 1), "MF_");
        assert_eq!(STANDARD.translate_sequence(seq, 2), "CF");
    }

    #[test]
    fn test_trailing_bases_dropped() {
        assert_eq!(translate(""), "");
        assert_eq!(translate("A"), "");
        assert_eq!(translate("AT"), "");
        assert_eq!(translate("ATGA"), "M");
        assert_eq!(translate("ATGAA"), "M");
        assert_eq!(STANDARD.translate_sequence("A", 2), "");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(translate_codon(b"atg"), 'M');
        assert_eq!(translate_codon(b"AtG"), 'M');
    }

    #[test]
    fn test_start_stop_predicates() {
        assert!(is_start_codon(b"ATG"));
        assert!(!is_start_codon(b"GTG"));
        assert!(is_stop_codon(b"TAA"));
        assert!(is_stop_codon(b"TAG"));
        assert!(is_stop_codon(b"TGA"));
        assert!(!is_stop_codon(b"TGG"));
        assert_eq!(STANDARD.id, 1);
        assert_eq!(STANDARD.name, "Standard");
    }
}
