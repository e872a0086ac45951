// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

use std::{fs, path::PathBuf};

use tempfile::TempDir;

use foldjob::Conversion;

// Copies a fixture from tests/data into a fresh scratch directory, so that the default output
// path (next to the input) lands in the scratch directory too.
#[allow(dead_code)]
pub fn scratch_copy(fixture: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let src = PathBuf::from("tests/data").join(fixture);
    let dst = dir.path().join(fixture);
    fs::copy(&src, &dst).expect("copy fixture");
    (dir, dst)
}

#[allow(dead_code)]
pub fn scratch_fasta(name: &str, text: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(name);
    fs::write(&path, text).expect("write fasta");
    (dir, path)
}

#[allow(dead_code)]
pub fn conversion(input: &PathBuf, output: PathBuf, fixed: &str, prefix: &str) -> Conversion {
    Conversion {
        input: input.clone(),
        output,
        fixed_sequence: String::from(fixed),
        job_prefix: String::from(prefix),
    }
}
