//! Rendering of analysis results.
//!
//! Two output formats are supported:
//! - JSON, with the camelCase field names of the result types
//! - Plain text, with long sequences wrapped and alignments printed in blocks

use std::fmt::{self, Write as _};

use serde::Serialize;
use thiserror::Error;

use crate::model::{ComparisonResult, SequenceStats};
use crate::protein::{amino_acid_name, are_similar};

/// Width of wrapped sequence lines and alignment blocks.
pub const LINE_WIDTH: usize = 60;

/// Errors that can occur while rendering a report.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to format report")]
    Format(#[from] fmt::Error),
}

/// Result type for report rendering.
pub type ReportResult<T> = Result<T, ReportError>;

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Single-sequence result tagged with its record identifier.
#[derive(Debug, Serialize)]
pub struct NamedAnalysis<'a> {
    pub id: &'a str,
    #[serde(flatten)]
    pub stats: &'a SequenceStats,
}

/// Comparison result tagged with both record identifiers.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedComparison<'a> {
    pub seq1_id: &'a str,
    pub seq2_id: &'a str,
    #[serde(flatten)]
    pub result: &'a ComparisonResult,
}

/// Renders one or more single-sequence analyses.
pub fn render_analyses(analyses: &[NamedAnalysis<'_>], format: OutputFormat) -> ReportResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(analyses)?),
        OutputFormat::Text => {
            let mut out = String::new();
            for (n, analysis) in analyses.iter().enumerate() {
                if n > 0 {
                    out.push('\n');
                }
                write_analysis(&mut out, analysis.id, analysis.stats)?;
            }
            Ok(out)
        }
    }
}

/// Renders a pairwise comparison.
pub fn render_comparison(comparison: &NamedComparison<'_>, format: OutputFormat) -> ReportResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(comparison)?),
        OutputFormat::Text => {
            let mut out = String::new();
            write_comparison(&mut out, comparison)?;
            Ok(out)
        }
    }
}

/// Wraps a sequence to [`LINE_WIDTH`] with a two-space indent.
fn wrapped(sequence: &str) -> String {
    if sequence.is_empty() {
        return "  (none)".to_string();
    }
    let options = textwrap::Options::new(LINE_WIDTH + 2)
        .initial_indent("  ")
        .subsequent_indent("  ")
        .break_words(true);
    textwrap::wrap(sequence, options).join("\n")
}

fn write_analysis(out: &mut String, id: &str, stats: &SequenceStats) -> fmt::Result {
    let counts = &stats.nucleotide_counts;

    writeln!(out, ">{}", id)?;
    writeln!(out, "Length:       {} bp", stats.length)?;
    writeln!(out, "GC content:   {:.2}%", stats.gc_content)?;
    writeln!(out, "AT content:   {:.2}%", stats.at_content)?;
    writeln!(
        out,
        "Nucleotides:  A={} T={} C={} G={}",
        counts.a, counts.t, counts.c, counts.g
    )?;
    writeln!(out, "Reverse complement:\n{}", wrapped(&stats.reverse_complement))?;
    writeln!(out, "Protein (frame 1):\n{}", wrapped(&stats.protein))?;

    writeln!(out, "ORFs: {}", stats.orfs.len())?;
    for (n, orf) in stats.orfs.iter().enumerate() {
        writeln!(
            out,
            "  #{:<3} frame {}  {}..{}  {} bp  {} aa",
            n + 1,
            orf.frame,
            orf.start,
            orf.end,
            orf.length,
            orf.protein.len()
        )?;
        writeln!(out, "{}", wrapped(&orf.protein))?;
    }

    Ok(())
}

fn write_comparison(out: &mut String, comparison: &NamedComparison<'_>) -> fmt::Result {
    let result = comparison.result;
    let counts = &result.mutation_counts;
    let alignment = &result.alignment;

    writeln!(
        out,
        "{} ({} bp) vs {} ({} bp)",
        comparison.seq1_id, result.seq1_stats.length, comparison.seq2_id, result.seq2_stats.length
    )?;
    writeln!(out, "Aligned length:  {}", alignment.match_string.len())?;
    writeln!(
        out,
        "Mutations:       {} ({} transitions, {} transversions, {} insertions, {} deletions)",
        counts.total, counts.transitions, counts.transversions, counts.insertions, counts.deletions
    )?;
    writeln!(out, "Mutation rate:   {:.4}", result.mutation_rate)?;
    writeln!(out, "Identity:        {:.1}%", (1.0 - result.mutation_rate) * 100.0)?;
    writeln!(
        out,
        "Protein:         {:.1}% identity, {:.1}% similarity",
        result.protein_comparison.identity, result.protein_comparison.similarity
    )?;
    writeln!(out)?;

    write_alignment_blocks(
        out,
        (comparison.seq1_id, alignment.seq1_aligned.as_str()),
        (comparison.seq2_id, alignment.seq2_aligned.as_str()),
        &alignment.match_string,
    )?;

    if !result.mutations.is_empty() {
        writeln!(out, "\n{:>8}  {:<12}  {:>4}  {:>2}  impact", "position", "type", "from", "to")?;
        for m in &result.mutations {
            writeln!(
                out,
                "{:>8}  {:<12}  {:>4}  {:>2}  {}",
                m.position,
                m.kind.to_string(),
                m.from,
                m.to,
                m.impact
            )?;
        }
    }

    write_residue_changes(out, &result.seq1_stats.protein, &result.seq2_stats.protein)
}

/// Prints the alignment in blocks of [`LINE_WIDTH`] columns.
///
/// The numbers at either end of a sequence line are 1-based column positions.
fn write_alignment_blocks(
    out: &mut String,
    (id1, seq1): (&str, &str),
    (id2, seq2): (&str, &str),
    matches: &str,
) -> fmt::Result {
    let label_width = id1.len().max(id2.len());
    let mut start = 0;

    while start < matches.len() {
        let end = (start + LINE_WIDTH).min(matches.len());
        writeln!(out, "{:<w$} {:>6} {} {}", id1, start + 1, &seq1[start..end], end, w = label_width)?;
        writeln!(out, "{:<w$} {:>6} {}", "", "", &matches[start..end], w = label_width)?;
        writeln!(out, "{:<w$} {:>6} {} {}", id2, start + 1, &seq2[start..end], end, w = label_width)?;
        writeln!(out)?;
        start = end;
    }

    Ok(())
}

/// Lists residues that differ between the two frame-1 translations.
///
/// Positions past the end of the shorter protein are not listed.
fn write_residue_changes(out: &mut String, protein1: &str, protein2: &str) -> fmt::Result {
    let changes: Vec<(usize, char, char)> = protein1
        .chars()
        .zip(protein2.chars())
        .enumerate()
        .filter(|(_, (a, b))| a != b)
        .map(|(i, (a, b))| (i + 1, a, b))
        .collect();

    if changes.is_empty() {
        return Ok(());
    }

    writeln!(out, "\nResidue changes (frame 1):")?;
    for (position, a, b) in changes {
        let kind = if are_similar(a, b) { "similar" } else { "dissimilar" };
        writeln!(
            out,
            "{:>8}  {} {} -> {} {}  {}",
            position,
            a,
            amino_acid_name(a),
            b,
            amino_acid_name(b),
            kind
        )?;
    }

    Ok(())
}
