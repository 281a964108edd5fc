//! # mutascope - Nucleotide Sequence Analysis
//!
//! Composition statistics, open reading frame detection, translation, and
//! pairwise comparison of DNA sequences with point-mutation calls.
//!
//! ## Architecture
//!
//! The engine modules are pure and synchronous:
//! - `genetic_code`: Codon to amino acid translation (standard code)
//! - `stats`: GC/AT content, nucleotide counts, reverse complement
//! - `orf`: Forward-strand, three-frame ORF scanning
//! - `align`: Unit-cost global alignment with a fixed traceback order
//! - `mutation`: Mutation calls, match line and tallies from an aligned pair
//! - `protein`: Amino acid names and identity/similarity between proteins
//!
//! Around them:
//! - `model`: Result value objects
//! - `analysis`: Input cleaning, validation and result assembly
//! - `config`: Analysis settings
//! - `fasta`: FASTA / bare sequence input
//! - `report`: JSON and text rendering

pub mod align;
pub mod analysis;
pub mod config;
pub mod fasta;
pub mod genetic_code;
pub mod model;
pub mod mutation;
pub mod orf;
pub mod protein;
pub mod report;
pub mod stats;

pub use analysis::{AnalysisError, Analyzer};
pub use config::AnalysisConfig;
pub use model::{ComparisonResult, Mutation, Orf, SequenceStats};
