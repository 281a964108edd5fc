//! FASTA input.
//!
//! This module reads the sequences handed to the analyzer. It supports
//! single-line and multi-line FASTA records, and bare sequence text without
//! any header (treated as one record).
//!
//! ## FASTA Format
//!
//! ```text
//! >sequence_identifier optional description
//! ACGTACGTACGT...
//! >another_sequence
//! TGCATGCATGCA...
//! ```
//!
//! Symbols are kept as-is; cleaning and validation happen in
//! [`crate::analysis`].

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use thiserror::Error;

use crate::model::Record;

/// Errors that can occur during FASTA parsing.
#[derive(Error, Debug)]
pub enum FastaError {
    #[error("Failed to read input: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Empty FASTA file")]
    EmptyFile,

    #[error("Invalid FASTA format: {0}")]
    InvalidFormat(String),

    #[error("Sequence without header at line {0}")]
    SequenceWithoutHeader(usize),
}

/// Result type for FASTA operations.
pub type FastaResult<T> = Result<T, FastaError>;

/// Appends the pending record unless its sequence is empty.
fn push_record(records: &mut Vec<Record>, id: Option<String>, data: &mut String) {
    match id {
        Some(id) if !data.is_empty() => records.push(Record::new(id, std::mem::take(data))),
        _ => data.clear(),
    }
}

/// Parses FASTA content from a reader.
///
/// The identifier is the header text up to the first whitespace. Records
/// whose sequence is empty are skipped.
pub fn parse_fasta<R: BufRead>(reader: R) -> FastaResult<Vec<Record>> {
    let mut records = Vec::new();
    let mut id: Option<String> = None;
    let mut data = String::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line.strip_prefix('>') {
            Some(header) => {
                push_record(&mut records, id.take(), &mut data);
                let name = header.split_whitespace().next().ok_or_else(|| {
                    FastaError::InvalidFormat(format!("Empty sequence identifier at line {}", index + 1))
                })?;
                id = Some(name.to_string());
            }
            None if id.is_none() => return Err(FastaError::SequenceWithoutHeader(index + 1)),
            None => data.extend(line.chars().filter(|c| !c.is_whitespace())),
        }
    }
    push_record(&mut records, id, &mut data);

    if records.is_empty() {
        return Err(FastaError::EmptyFile);
    }
    Ok(records)
}

/// Parses FASTA content from a string.
pub fn parse_fasta_str(content: &str) -> FastaResult<Vec<Record>> {
    parse_fasta(content.as_bytes())
}

/// Parses either FASTA content or a bare sequence.
///
/// Content whose first non-blank line does not start with `>` becomes a
/// single record named `default_id`.
pub fn parse_sequence_input(content: &str, default_id: &str) -> FastaResult<Vec<Record>> {
    let first_line = content.lines().map(str::trim).find(|line| !line.is_empty());

    match first_line {
        None => Err(FastaError::EmptyFile),
        Some(line) if line.starts_with('>') => parse_fasta_str(content),
        Some(_) => {
            let data: String = content.chars().filter(|c| !c.is_whitespace()).collect();
            Ok(vec![Record::new(default_id, data)])
        }
    }
}

/// Reads a FASTA (or bare sequence) file.
///
/// Bare sequences are named after the file stem.
///
/// # Examples
///
/// ```no_run
/// use mutascope::fasta::read_sequence_file;
///
/// let records = read_sequence_file("sample.fasta").unwrap();
/// println!("Loaded {} sequences", records.len());
/// ```
pub fn read_sequence_file<P: AsRef<Path>>(path: P) -> FastaResult<Vec<Record>> {
    let path = path.as_ref();
    let mut content = String::new();
    BufReader::new(File::open(path)?).read_to_string(&mut content)?;

    let default_id = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("sequence");
    parse_sequence_input(&content, default_id)
}
