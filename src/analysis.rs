//! Request-level analysis.
//!
//! This is the boundary in front of the engine: it cleans raw user input
//! (FASTA headers, whitespace, lowercase), rejects anything that is not
//! A/C/G/T, bounds the size of pairwise alignments, and assembles the
//! result objects. The engine modules themselves never fail.

use std::time::Instant;

use thiserror::Error;
use tracing::{debug, warn};

use crate::align::align;
use crate::config::AnalysisConfig;
use crate::genetic_code::translate;
use crate::model::{AlignmentView, ComparisonResult, SequenceStats};
use crate::mutation::classify;
use crate::orf::find_orfs;
use crate::protein::compare_proteins;
use crate::stats::{at_content, gc_content, nucleotide_counts, reverse_complement, round2};

/// Errors that can occur while validating analysis input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Empty sequence")]
    EmptySequence,

    #[error("Invalid DNA sequence: '{symbol}' at position {position}. Only A, T, C, G allowed.")]
    InvalidSymbol { symbol: char, position: usize },

    #[error("Sequence too long for pairwise alignment ({length} bases, limit is {limit})")]
    SequenceTooLong { length: usize, limit: usize },
}

/// Result type for analysis operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Lines of raw input that carry sequence data.
fn sequence_lines(raw: &str) -> impl Iterator<Item = &str> {
    raw.lines().filter(|line| !line.starts_with('>'))
}

/// Drops FASTA header lines and whitespace, and uppercases the rest.
pub fn clean_sequence(raw: &str) -> String {
    sequence_lines(raw)
        .flat_map(str::chars)
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Checks that the raw input holds at least one base and only A/C/G/T.
///
/// Header lines and whitespace are ignored; `position` in the error is the
/// 1-based index among the remaining symbols.
pub fn validate_sequence(raw: &str) -> AnalysisResult<()> {
    let mut position = 0;

    for c in sequence_lines(raw).flat_map(str::chars) {
        if c.is_whitespace() {
            continue;
        }
        position += 1;
        if !matches!(c.to_ascii_uppercase(), 'A' | 'C' | 'G' | 'T') {
            return Err(AnalysisError::InvalidSymbol {
                symbol: c,
                position,
            });
        }
    }

    if position == 0 {
        return Err(AnalysisError::EmptySequence);
    }
    Ok(())
}

/// Runs single-sequence analyses and pairwise comparisons.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalysisConfig,
}

impl Analyzer {
    /// Creates an analyzer with the given settings.
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Returns the active settings.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Validates, cleans and analyzes one raw sequence.
    pub fn analyze(&self, raw: &str) -> AnalysisResult<SequenceStats> {
        validate_sequence(raw).inspect_err(|e| warn!("Rejected sequence: {}", e))?;
        let sequence = clean_sequence(raw);
        Ok(self.sequence_stats(&sequence))
    }

    /// Computes all single-sequence statistics for a cleaned sequence.
    pub fn sequence_stats(&self, sequence: &str) -> SequenceStats {
        let started = Instant::now();
        let gc = gc_content(sequence);

        let stats = SequenceStats {
            length: sequence.len(),
            gc_content: round2(gc),
            at_content: round2(at_content(sequence)),
            nucleotide_counts: nucleotide_counts(sequence),
            reverse_complement: reverse_complement(sequence),
            orfs: find_orfs(sequence, self.config.min_orf_len),
            protein: translate(sequence),
        };

        debug!(
            "Analyzed {} bases: GC {:.2}%, {} ORFs in {:?}",
            stats.length,
            gc,
            stats.orfs.len(),
            started.elapsed()
        );
        stats
    }

    /// Validates, cleans, aligns and compares two raw sequences.
    ///
    /// Unless `full_stats` is set, the per-sequence stats only carry the
    /// length and protein translation; the other fields stay zero/empty.
    pub fn compare(&self, raw1: &str, raw2: &str) -> AnalysisResult<ComparisonResult> {
        validate_sequence(raw1).inspect_err(|e| warn!("Rejected first sequence: {}", e))?;
        validate_sequence(raw2).inspect_err(|e| warn!("Rejected second sequence: {}", e))?;

        let s1 = clean_sequence(raw1);
        let s2 = clean_sequence(raw2);

        let limit = self.config.max_align_len;
        if let Some(length) = [s1.len(), s2.len()].into_iter().find(|&len| len > limit) {
            warn!("Refusing to align {} bases (limit {})", length, limit);
            return Err(AnalysisError::SequenceTooLong { length, limit });
        }

        let started = Instant::now();
        let pair = align(&s1, &s2);
        debug!(
            "Aligned {} x {} bases into {} columns in {:?}",
            s1.len(),
            s2.len(),
            pair.len(),
            started.elapsed()
        );

        let report = classify(&pair);
        let mutation_rate = report.mutation_rate();

        let (seq1_stats, seq2_stats) = if self.config.full_stats {
            (self.sequence_stats(&s1), self.sequence_stats(&s2))
        } else {
            (protein_only_stats(&s1), protein_only_stats(&s2))
        };
        let protein_comparison = compare_proteins(&seq1_stats.protein, &seq2_stats.protein);

        debug!(
            "Found {} mutations ({} transitions, {} transversions, {} insertions, {} deletions)",
            report.counts.total,
            report.counts.transitions,
            report.counts.transversions,
            report.counts.insertions,
            report.counts.deletions
        );

        Ok(ComparisonResult {
            seq1_stats,
            seq2_stats,
            alignment: AlignmentView {
                seq1_aligned: pair.seq1_aligned,
                seq2_aligned: pair.seq2_aligned,
                match_string: report.match_string,
                score: 0.0,
            },
            mutations: report.mutations,
            mutation_counts: report.counts,
            mutation_rate,
            protein_comparison,
        })
    }
}

/// Stats with only the length and translation filled in.
fn protein_only_stats(sequence: &str) -> SequenceStats {
    SequenceStats {
        length: sequence.len(),
        protein: translate(sequence),
        ..SequenceStats::default()
    }
}
