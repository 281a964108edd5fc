//! Open reading frame scanner.
//!
//! Scans the three forward reading frames of a cleaned (uppercase) sequence.
//! An ORF opens at the first `ATG` seen while no ORF is open in that frame and
//! closes at the next in-frame stop codon. ORFs still open when the sequence
//! ends are discarded. Reverse-strand frames are not scanned.

use crate::genetic_code::{is_start_codon, is_stop_codon, STANDARD};
use crate::model::Orf;

/// Minimum ORF length in nucleotides (start through stop codon).
pub const DEFAULT_MIN_ORF_LEN: usize = 30;

/// Finds forward-strand ORFs of at least `min_len` nucleotides.
///
/// Results are sorted longest first. Ties keep scan order: frame 1 before
/// frame 2 before frame 3, then by start position.
pub fn find_orfs(sequence: &str, min_len: usize) -> Vec<Orf> {
    let mut orfs: Vec<Orf> = (0..3)
        .flat_map(|frame| scan_frame(sequence, frame, min_len))
        .collect();

    // sort_by is stable
    orfs.sort_by(|a, b| b.length.cmp(&a.length));
    orfs
}

/// Scans a single frame, returning ORFs in order of their start codon.
fn scan_frame(sequence: &str, frame: usize, min_len: usize) -> Vec<Orf> {
    let bytes = sequence.as_bytes();
    let mut orfs = Vec::new();
    let mut open_start: Option<usize> = None;
    let mut pos = frame;

    while pos + 3 <= bytes.len() {
        let codon = &bytes[pos..pos + 3];

        if open_start.is_none() && is_start_codon(codon) {
            open_start = Some(pos);
        } else if is_stop_codon(codon) {
            if let Some(start) = open_start.take() {
                let end = pos + 3;
                if end - start >= min_len {
                    orfs.push(build_orf(sequence, start, end, frame));
                }
            }
        }

        pos += 3;
    }

    orfs
}

/// Builds the record for the 0-based half-open span `start..end`.
fn build_orf(sequence: &str, start: usize, end: usize, frame: usize) -> Orf {
    let dna = &sequence[start..end];
    let protein = STANDARD.translate_sequence(&dna[..dna.len() - 3], 0);

    Orf {
        start: start + 1,
        end,
        length: end - start,
        dna: dna.to_string(),
        protein,
        frame: frame as u8 + 1,
    }
}
