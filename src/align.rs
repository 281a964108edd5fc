//! Global pairwise alignment.
//!
//! Uses the Levenshtein recurrence with unit costs (insertion, deletion and
//! substitution all cost 1, a match costs 0). This is an edit-distance
//! alignment, not a biologically scored one: there are no affine gaps and no
//! substitution matrix.
//!
//! Several alignments usually share the minimal cost. The traceback picks one
//! with a fixed preference order: match, then substitution, then deletion,
//! then insertion. Mutation calls downstream depend on that choice.

use crate::model::{AlignedPair, GAP};

/// Full (n+1) x (m+1) cost matrix, row-major.
///
/// Memory is O(n·m) with 4-byte cells; callers are expected to bound input
/// lengths. A cell never exceeds `n + m`, which must fit in a `u32`.
pub struct CostMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<u32>,
}

impl CostMatrix {
    /// Fills the matrix for `s1` (rows) against `s2` (columns).
    pub fn build(s1: &[u8], s2: &[u8]) -> Self {
        let rows = s1.len() + 1;
        let cols = s2.len() + 1;
        let mut cells = vec![0u32; rows * cols];

        for (j, cell) in cells.iter_mut().take(cols).enumerate() {
            *cell = j as u32;
        }
        for i in 0..rows {
            cells[i * cols] = i as u32;
        }

        for i in 1..rows {
            for j in 1..cols {
                let cost = u32::from(s1[i - 1] != s2[j - 1]);
                let deletion = cells[(i - 1) * cols + j] + 1;
                let insertion = cells[i * cols + j - 1] + 1;
                let diagonal = cells[(i - 1) * cols + j - 1] + cost;
                cells[i * cols + j] = deletion.min(insertion).min(diagonal);
            }
        }

        Self { rows, cols, cells }
    }

    /// Cost of aligning the first `i` symbols of `s1` with the first `j` of `s2`.
    pub fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.cols + j] as usize
    }

    /// The edit distance between the two full sequences.
    pub fn distance(&self) -> usize {
        self.get(self.rows - 1, self.cols - 1)
    }
}

/// Aligns two sequences globally and returns the gapped pair.
///
/// Both returned strings have the same length and no column holds two gaps.
pub fn align(s1: &str, s2: &str) -> AlignedPair {
    let a = s1.as_bytes();
    let b = s2.as_bytes();
    let matrix = CostMatrix::build(a, b);
    traceback(&matrix, a, b)
}

/// Returns the unit-cost edit distance between two sequences.
pub fn edit_distance(s1: &str, s2: &str) -> usize {
    CostMatrix::build(s1.as_bytes(), s2.as_bytes()).distance()
}

/// Walks back from the bottom-right cell to the origin.
///
/// The branch order below decides between equal-cost alignments and must not
/// be reordered.
fn traceback(matrix: &CostMatrix, s1: &[u8], s2: &[u8]) -> AlignedPair {
    let mut align1: Vec<u8> = Vec::with_capacity(s1.len() + s2.len());
    let mut align2: Vec<u8> = Vec::with_capacity(s1.len() + s2.len());
    let mut i = s1.len();
    let mut j = s2.len();

    while i > 0 || j > 0 {
        let here = matrix.get(i, j);

        if i > 0 && j > 0 && s1[i - 1] == s2[j - 1] {
            // Match
            align1.push(s1[i - 1]);
            align2.push(s2[j - 1]);
            i -= 1;
            j -= 1;
        } else if i > 0 && j > 0 && here == matrix.get(i - 1, j - 1) + 1 {
            // Substitution
            align1.push(s1[i - 1]);
            align2.push(s2[j - 1]);
            i -= 1;
            j -= 1;
        } else if i > 0 && here == matrix.get(i - 1, j) + 1 {
            // Deletion
            align1.push(s1[i - 1]);
            align2.push(GAP);
            i -= 1;
        } else {
            // Insertion
            align1.push(GAP);
            align2.push(s2[j - 1]);
            j -= 1;
        }
    }

    // Columns were collected end to start
    align1.reverse();
    align2.reverse();

    AlignedPair {
        seq1_aligned: align1.into_iter().map(char::from).collect(),
        seq2_aligned: align2.into_iter().map(char::from).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip_gaps(s: &str) -> String {
        s.chars().filter(|&c| c != '-').collect()
    }

    #[test]
    fn test_identical_sequences() {
        let pair = align("ATCG", "ATCG");
        assert_eq!(pair.seq1_aligned, "ATCG");
        assert_eq!(pair.seq2_aligned, "ATCG");
        assert_eq!(edit_distance("ATCG", "ATCG"), 0);
    }

    #[test]
    fn test_single_substitution() {
        let pair = align("ATCG", "ATTG");
        assert_eq!(pair.seq1_aligned, "ATCG");
        assert_eq!(pair.seq2_aligned, "ATTG");
        assert_eq!(edit_distance("ATCG", "ATTG"), 1);
    }

    #[test]
    fn test_deletion() {
        let pair = align("ATCG", "ATG");
        assert_eq!(pair.seq1_aligned, "ATCG");
        assert_eq!(pair.seq2_aligned, "AT-G");
    }

    #[test]
    fn test_insertion() {
        let pair = align("ATG", "ATCG");
        assert_eq!(pair.seq1_aligned, "AT-G");
        assert_eq!(pair.seq2_aligned, "ATCG");
    }

    #[test]
    fn test_substitution_preferred_over_gaps() {
        // AC vs CA: two substitutions and one deletion + one insertion both
        // cost 2; the traceback takes the diagonal first.
        let pair = align("AC", "CA");
        assert_eq!(pair.seq1_aligned, "AC");
        assert_eq!(pair.seq2_aligned, "CA");
    }

    #[test]
    fn test_deletion_preferred_over_insertion() {
        // Last symbols differ and a deletion explains the cell
        let pair = align("AAT", "AA");
        assert_eq!(pair.seq1_aligned, "AAT");
        assert_eq!(pair.seq2_aligned, "AA-");
    }

    #[test]
    fn test_deletion_wins_tie_with_insertion() {
        // At the last cell both a deletion of A and an insertion of C cost 2
        let pair = align("ACA", "CAC");
        assert_eq!(pair.seq1_aligned, "-ACA");
        assert_eq!(pair.seq2_aligned, "CAC-");

        let matrix = CostMatrix::build(b"ACA", b"CAC");
        assert_eq!(matrix.get(2, 3) + 1, matrix.distance());
        assert_eq!(matrix.get(3, 2) + 1, matrix.distance());
    }

    #[test]
    fn test_empty_inputs() {
        let pair = align("", "");
        assert!(pair.is_empty());

        let pair = align("ACG", "");
        assert_eq!(pair.seq1_aligned, "ACG");
        assert_eq!(pair.seq2_aligned, "---");

        let pair = align("", "ACG");
        assert_eq!(pair.seq1_aligned, "---");
        assert_eq!(pair.seq2_aligned, "ACG");
        assert_eq!(edit_distance("", "ACG"), 3);
    }

    #[test]
    fn test_gaps_reconstruct_inputs() {
        let s1 = "GATTACAGATTACA";
        let s2 = "GCATGCTTACA";
        let pair = align(s1, s2);
        assert_eq!(pair.seq1_aligned.len(), pair.seq2_aligned.len());
        assert_eq!(strip_gaps(&pair.seq1_aligned), s1);
        assert_eq!(strip_gaps(&pair.seq2_aligned), s2);
        assert!(pair.columns().all(|(a, b)| !(a == GAP && b == GAP)));
    }

    #[test]
    fn test_matrix_base_cases() {
        let matrix = CostMatrix::build(b"ACG", b"AG");
        assert_eq!(matrix.get(0, 0), 0);
        assert_eq!(matrix.get(0, 2), 2);
        assert_eq!(matrix.get(3, 0), 3);
        assert_eq!(matrix.distance(), 1);
    }

    #[test]
    fn test_matrix_uses_four_byte_cells() {
        let s1 = "ACGT".repeat(250);
        let s2 = "TGCA".repeat(250);
        let matrix = CostMatrix::build(s1.as_bytes(), s2.as_bytes());
        assert_eq!(std::mem::size_of_val(matrix.cells.as_slice()), 1001 * 1001 * 4);
        assert_eq!(matrix.get(1000, 0), 1000);
        assert_eq!(matrix.get(0, 1000), 1000);
        assert!(matrix.distance() <= 1000);
    }
}
