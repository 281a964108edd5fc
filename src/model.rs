//! Data model for sequence analysis results.
//!
//! This module contains all value objects produced by the engine:
//! - Named input records
//! - Open reading frames
//! - Aligned sequence pairs, mutations and their tallies
//! - Single-sequence and comparison results
//!
//! Every result is built once per request and never updated in place.
//! Field names serialize in camelCase (`gcContent`, `seq1Aligned`, ...).

use std::fmt;

use serde::Serialize;

/// Gap symbol used in aligned sequences.
pub const GAP: u8 = b'-';

/// A named sequence read from the input (FASTA record or literal).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// The sequence identifier (from FASTA header, without '>')
    pub id: String,
    /// The raw sequence data
    pub data: String,
}

impl Record {
    /// Creates a new record.
    pub fn new(id: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            data: data.into(),
        }
    }

    /// Returns the length of the sequence.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// An open reading frame on the forward strand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Orf {
    /// First base of the start codon (1-based)
    pub start: usize,
    /// Last base of the stop codon (1-based, inclusive)
    pub end: usize,
    /// `end - start + 1`, always a multiple of 3
    pub length: usize,
    /// Nucleotides from start codon through stop codon
    pub dna: String,
    /// Translation of the codons before the stop codon
    pub protein: String,
    /// Reading frame (1, 2 or 3)
    pub frame: u8,
}

/// Exact tallies of the four nucleotides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct NucleotideCounts {
    #[serde(rename = "A")]
    pub a: usize,
    #[serde(rename = "T")]
    pub t: usize,
    #[serde(rename = "C")]
    pub c: usize,
    #[serde(rename = "G")]
    pub g: usize,
}

impl NucleotideCounts {
    /// Sum of the four buckets.
    pub fn total(&self) -> usize {
        self.a + self.t + self.c + self.g
    }
}

/// Result of a single-sequence analysis.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceStats {
    pub length: usize,
    /// Percentage, two decimal places
    pub gc_content: f64,
    /// Percentage, two decimal places
    pub at_content: f64,
    pub nucleotide_counts: NucleotideCounts,
    pub reverse_complement: String,
    /// Longest first
    pub orfs: Vec<Orf>,
    /// Whole-sequence translation from frame 1
    pub protein: String,
}

/// Two gapped sequences of equal length produced by the aligner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedPair {
    pub seq1_aligned: String,
    pub seq2_aligned: String,
}

impl AlignedPair {
    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.seq1_aligned.len()
    }

    /// Returns true if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.seq1_aligned.is_empty()
    }

    /// Iterates over the columns as byte pairs.
    pub fn columns(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.seq1_aligned
            .bytes()
            .zip(self.seq2_aligned.bytes())
    }
}

/// Kind of point mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MutationKind {
    Substitution,
    Insertion,
    Deletion,
}

impl fmt::Display for MutationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MutationKind::Substitution => write!(f, "substitution"),
            MutationKind::Insertion => write!(f, "insertion"),
            MutationKind::Deletion => write!(f, "deletion"),
        }
    }
}

/// Predicted biological impact of a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Silent,
    Missense,
    Nonsense,
    Frameshift,
    Unknown,
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Impact::Silent => write!(f, "silent"),
            Impact::Missense => write!(f, "missense"),
            Impact::Nonsense => write!(f, "nonsense"),
            Impact::Frameshift => write!(f, "frameshift"),
            Impact::Unknown => write!(f, "unknown"),
        }
    }
}

/// One divergent alignment column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Mutation {
    /// Column index in the aligned pair (1-based)
    pub position: usize,
    #[serde(rename = "type")]
    pub kind: MutationKind,
    /// Symbol in the first sequence, `-` for insertions
    pub from: char,
    /// Symbol in the second sequence, `-` for deletions
    pub to: char,
    pub impact: Impact,
}

/// Aggregate tally over a mutation list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MutationCounts {
    pub total: usize,
    pub transitions: usize,
    pub transversions: usize,
    pub insertions: usize,
    pub deletions: usize,
}

/// Aligned pair with its match line, as reported to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignmentView {
    pub seq1_aligned: String,
    pub seq2_aligned: String,
    /// `|` match, `*` substitution, blank for a gap column
    pub match_string: String,
    /// Always 0: the aligner does not compute a biological score
    pub score: f64,
}

/// Identity and similarity between two translated proteins.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ProteinComparison {
    /// Percentage, one decimal place
    pub identity: f64,
    /// Percentage, one decimal place
    pub similarity: f64,
}

/// Result of comparing two sequences.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub seq1_stats: SequenceStats,
    pub seq2_stats: SequenceStats,
    pub alignment: AlignmentView,
    pub mutations: Vec<Mutation>,
    pub mutation_counts: MutationCounts,
    /// Mutations per alignment column, 0 for an empty alignment
    pub mutation_rate: f64,
    pub protein_comparison: ProteinComparison,
}
