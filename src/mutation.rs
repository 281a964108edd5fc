//! Mutation calling on an aligned pair.
//!
//! Walks the alignment column by column and records one mutation per
//! divergent column. The match line uses `|` for identical bases, `*` for a
//! substitution and a blank for a gap column.
//!
//! Impact is not derived from codon context: indels are always
//! `frameshift`, and substitutions are `missense` unless they fall in the last
//! two columns, where they are `unknown`. Silent and nonsense calls are never
//! produced here.

use crate::model::{AlignedPair, Impact, Mutation, MutationCounts, MutationKind, GAP};

/// Mutations, match line and tallies for one aligned pair.
#[derive(Debug, Clone, PartialEq)]
pub struct MutationReport {
    pub mutations: Vec<Mutation>,
    pub match_string: String,
    pub counts: MutationCounts,
}

impl MutationReport {
    /// Mutations per alignment column, 0 for an empty alignment.
    pub fn mutation_rate(&self) -> f64 {
        if self.match_string.is_empty() {
            return 0.0;
        }
        self.counts.total as f64 / self.match_string.len() as f64
    }
}

fn is_purine(base: u8) -> bool {
    matches!(base, b'A' | b'G')
}

fn is_pyrimidine(base: u8) -> bool {
    matches!(base, b'C' | b'T')
}

/// True when both bases are purines or both are pyrimidines.
pub fn is_transition(from: u8, to: u8) -> bool {
    (is_purine(from) && is_purine(to)) || (is_pyrimidine(from) && is_pyrimidine(to))
}

/// Classifies every column of an aligned pair.
pub fn classify(pair: &AlignedPair) -> MutationReport {
    let len = pair.len();
    let mut mutations = Vec::new();
    let mut match_string = String::with_capacity(len);
    let mut counts = MutationCounts::default();

    for (i, (b1, b2)) in pair.columns().enumerate() {
        let position = i + 1;

        if b1 == b2 {
            match_string.push('|');
        } else if b1 == GAP {
            match_string.push(' ');
            counts.insertions += 1;
            mutations.push(Mutation {
                position,
                kind: MutationKind::Insertion,
                from: '-',
                to: b2 as char,
                impact: Impact::Frameshift,
            });
        } else if b2 == GAP {
            match_string.push(' ');
            counts.deletions += 1;
            mutations.push(Mutation {
                position,
                kind: MutationKind::Deletion,
                from: b1 as char,
                to: '-',
                impact: Impact::Frameshift,
            });
        } else {
            match_string.push('*');
            if is_transition(b1, b2) {
                counts.transitions += 1;
            } else {
                counts.transversions += 1;
            }

            let impact = if i + 2 < len {
                Impact::Missense
            } else {
                Impact::Unknown
            };

            mutations.push(Mutation {
                position,
                kind: MutationKind::Substitution,
                from: b1 as char,
                to: b2 as char,
                impact,
            });
        }
    }

    counts.total = mutations.len();

    MutationReport {
        mutations,
        match_string,
        counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::align;

    fn pair(s1: &str, s2: &str) -> AlignedPair {
        AlignedPair {
            seq1_aligned: s1.to_string(),
            seq2_aligned: s2.to_string(),
        }
    }

    #[test]
    fn test_identical_pair() {
        let report = classify(&align("ATCG", "ATCG"));
        assert_eq!(report.match_string, "||||");
        assert!(report.mutations.is_empty());
        assert_eq!(report.counts, MutationCounts::default());
        assert_eq!(report.mutation_rate(), 0.0);
    }

    #[test]
    fn test_single_transition() {
        let report = classify(&align("ATCG", "ATTG"));
        assert_eq!(report.match_string, "||*|");
        assert_eq!(report.mutations.len(), 1);

        let m = report.mutations[0];
        assert_eq!(m.position, 3);
        assert_eq!(m.kind, MutationKind::Substitution);
        assert_eq!(m.from, 'C');
        assert_eq!(m.to, 'T');
        assert_eq!(report.counts.transitions, 1);
        assert_eq!(report.counts.transversions, 0);
        assert_eq!(report.mutation_rate(), 0.25);
    }

    #[test]
    fn test_transversion() {
        let report = classify(&pair("AAAA", "ATAA"));
        assert_eq!(report.counts.transitions, 0);
        assert_eq!(report.counts.transversions, 1);
        assert_eq!(report.mutations[0].impact, Impact::Missense);
    }

    #[test]
    fn test_substitution_impact_near_end() {
        // Columns 3 and 4 of 4 have fewer than two columns after them
        let report = classify(&pair("AAAA", "AAGG"));
        assert_eq!(report.mutations[0].position, 3);
        assert_eq!(report.mutations[0].impact, Impact::Unknown);
        assert_eq!(report.mutations[1].impact, Impact::Unknown);

        let report = classify(&pair("AAAA", "GAAA"));
        assert_eq!(report.mutations[0].impact, Impact::Missense);
    }

    #[test]
    fn test_indels_are_frameshifts() {
        let report = classify(&pair("AT-G", "ATCG"));
        assert_eq!(report.match_string, "|| |");
        let m = report.mutations[0];
        assert_eq!(m.kind, MutationKind::Insertion);
        assert_eq!(m.from, '-');
        assert_eq!(m.to, 'C');
        assert_eq!(m.impact, Impact::Frameshift);
        assert_eq!(report.counts.insertions, 1);

        let report = classify(&pair("ATCG", "AT-G"));
        let m = report.mutations[0];
        assert_eq!(m.kind, MutationKind::Deletion);
        assert_eq!(m.from, 'C');
        assert_eq!(m.to, '-');
        assert_eq!(m.impact, Impact::Frameshift);
        assert_eq!(report.counts.deletions, 1);
    }

    #[test]
    fn test_counts_accumulate_in_order() {
        let report = classify(&pair("AC-GTTA", "GCAG-TC"));
        let positions: Vec<usize> = report.mutations.iter().map(|m| m.position).collect();
        assert_eq!(positions, vec![1, 3, 5, 7]);
        assert_eq!(report.counts.total, 4);
        assert_eq!(report.counts.transitions, 1);
        assert_eq!(report.counts.transversions, 1);
        assert_eq!(report.counts.insertions, 1);
        assert_eq!(report.counts.deletions, 1);
        assert_eq!(report.match_string, "*| | |*");
    }

    #[test]
    fn test_tied_indels_called_as_insertion_then_deletion() {
        let report = classify(&align("ACA", "CAC"));
        assert_eq!(report.match_string, " || ");
        assert_eq!(report.mutations.len(), 2);

        let first = report.mutations[0];
        assert_eq!(first.position, 1);
        assert_eq!(first.kind, MutationKind::Insertion);
        assert_eq!((first.from, first.to), ('-', 'C'));

        let last = report.mutations[1];
        assert_eq!(last.position, 4);
        assert_eq!(last.kind, MutationKind::Deletion);
        assert_eq!((last.from, last.to), ('A', '-'));
        assert_eq!(last.impact, Impact::Frameshift);
    }

    #[test]
    fn test_empty_alignment() {
        let report = classify(&pair("", ""));
        assert!(report.mutations.is_empty());
        assert_eq!(report.mutation_rate(), 0.0);
    }

    #[test]
    fn test_is_transition() {
        assert!(is_transition(b'A', b'G'));
        assert!(is_transition(b'C', b'T'));
        assert!(!is_transition(b'A', b'C'));
        assert!(!is_transition(b'G', b'T'));
    }
}
