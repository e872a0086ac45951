// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

use std::{fmt, io, path::PathBuf};

#[derive(Debug)]
pub enum FoldJobError {
    InputNotFound(PathBuf),
    InputUnreadable { path: PathBuf, source: io::Error },
    OutputUnwritable { path: PathBuf, source: io::Error },
    Serialize(serde_json::Error),
    Config(String),
}

impl FoldJobError {
    // Opening or reading the FastA file. A missing file gets its own variant, everything else
    // (permissions, directories, bad UTF-8) is "unreadable".
    pub fn input(path: impl Into<PathBuf>, e: io::Error) -> Self {
        let path = path.into();
        match e.kind() {
            io::ErrorKind::NotFound => FoldJobError::InputNotFound(path),
            _ => FoldJobError::InputUnreadable { path, source: e },
        }
    }

    pub fn output(path: impl Into<PathBuf>, e: io::Error) -> Self {
        FoldJobError::OutputUnwritable {
            path: path.into(),
            source: e,
        }
    }
}

// Needed for '?' on serde_json calls.

impl From<serde_json::Error> for FoldJobError {
    fn from(e: serde_json::Error) -> Self {
        FoldJobError::Serialize(e)
    }
}

impl fmt::Display for FoldJobError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FoldJobError::InputNotFound(path) => {
                write!(f, "Input file not found: {}", path.display())
            }
            FoldJobError::InputUnreadable { path, source } => {
                write!(f, "Cannot read input file {}: {}", path.display(), source)
            }
            FoldJobError::OutputUnwritable { path, source } => {
                write!(f, "Cannot write output file {}: {}", path.display(), source)
            }
            FoldJobError::Serialize(e) => write!(f, "JSON error: {}", e),
            FoldJobError::Config(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for FoldJobError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FoldJobError::InputUnreadable { source, .. } => Some(source),
            FoldJobError::OutputUnwritable { source, .. } => Some(source),
            FoldJobError::Serialize(e) => Some(e),
            _ => None,
        }
    }
}
