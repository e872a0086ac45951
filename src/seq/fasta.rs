// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use std::fs;
use std::path::Path;

use log::debug;

use crate::errors::FoldJobError;
use crate::seq::record::{ProteinRecord, SeqFile};

// Parser state. Data lines seen while there is no active record are dropped.
enum ParseState {
    NoActiveRecord,
    ActiveRecord { id: String, fragments: Vec<String> },
}

impl ParseState {
    fn close(self, result: &mut SeqFile) {
        if let ParseState::ActiveRecord { id, fragments } = self {
            result.push(ProteinRecord {
                id,
                sequence: fragments.concat(),
            });
        }
    }
}

fn clean_residues(line: &str) -> String {
    line.chars().filter(|c| c.is_ascii_alphabetic()).collect()
}

/// Parses FastA lines into records, in file order.
///
/// Blank lines are skipped, a line starting with '>' opens a new record (closing the previous
/// one), and every other line contributes its ASCII letters to the current record's sequence.
/// Nothing is ever rejected: data before the first header is ignored, and a header directly
/// followed by another header yields a record with an empty sequence.
pub fn parse_fasta_lines<'a, I>(lines: I) -> SeqFile
where
    I: IntoIterator<Item = &'a str>,
{
    let mut result: SeqFile = Vec::new();
    let state = lines
        .into_iter()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .fold(ParseState::NoActiveRecord, |state, line| {
            if let Some(hdr) = line.strip_prefix('>') {
                state.close(&mut result);
                ParseState::ActiveRecord {
                    id: hdr.to_string(),
                    fragments: Vec::new(),
                }
            } else {
                match state {
                    ParseState::ActiveRecord { id, mut fragments } => {
                        fragments.push(clean_residues(line));
                        ParseState::ActiveRecord { id, fragments }
                    }
                    ParseState::NoActiveRecord => {
                        debug!("Dropping data line before first header: {}", line);
                        ParseState::NoActiveRecord
                    }
                }
            }
        });
    state.close(&mut result);
    result
}

// Any of "\n", "\r\n" or a lone "\r" ends a line. The empty pieces between "\r" and "\n" are
// blank lines and get skipped.
pub fn parse_fasta_str(text: &str) -> SeqFile {
    parse_fasta_lines(text.split(['\r', '\n']))
}

pub fn read_fasta_file<P: AsRef<Path>>(path: P) -> Result<SeqFile, FoldJobError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| FoldJobError::input(path, e))?;
    let records = parse_fasta_str(&text);
    debug!("Read {} records from {}", records.len(), path.display());
    Ok(records)
}
