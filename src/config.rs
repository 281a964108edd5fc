//! Analysis settings.

use crate::orf::DEFAULT_MIN_ORF_LEN;

/// Largest sequence (per side) accepted for pairwise alignment by default.
///
/// The aligner keeps a full (n+1) x (m+1) matrix of `u32` cells, so 5 kb per
/// side is already ~100 MB.
pub const DEFAULT_MAX_ALIGN_LEN: usize = 5_000;

/// Tunable parameters for [`crate::analysis::Analyzer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Minimum ORF length in nucleotides
    pub min_orf_len: usize,
    /// Longest sequence accepted on either side of a comparison
    pub max_align_len: usize,
    /// Compute full composition stats for both sides of a comparison
    /// instead of only length and protein
    pub full_stats: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_orf_len: DEFAULT_MIN_ORF_LEN,
            max_align_len: DEFAULT_MAX_ALIGN_LEN,
            full_stats: false,
        }
    }
}
