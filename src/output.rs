// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use log::{debug, info};
use tempfile::{Builder, NamedTempFile};

use crate::errors::FoldJobError;
use crate::job::JobDescriptor;

/// Where the batch file goes when no output path is given: the input path with its extension
/// replaced by (or extended with) "json".
pub fn default_output_path<P: AsRef<Path>>(input: P) -> PathBuf {
    input.as_ref().with_extension("json")
}

pub fn to_json_string(jobs: &[JobDescriptor]) -> Result<String, FoldJobError> {
    Ok(serde_json::to_string_pretty(jobs)?)
}

// Temp file that ends up with the mode a plain create/truncate would give: the destination's
// current permissions if it exists, otherwise 0666 minus the umask.
fn temp_file_for(dir: &Path, dest: &Path) -> io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    builder.prefix(".foldjob-");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let tmp = builder.tempfile_in(dir)?;
    if let Ok(meta) = fs::metadata(dest) {
        tmp.as_file().set_permissions(meta.permissions())?;
    }
    Ok(tmp)
}

/// Writes the jobs as a JSON array to `path`.
///
/// The document goes to a temporary file next to `path` first and is then renamed into place,
/// so an existing file at `path` is either fully replaced or left alone.
pub fn write_jobs<P: AsRef<Path>>(path: P, jobs: &[JobDescriptor]) -> Result<(), FoldJobError> {
    let path = path.as_ref();
    let mut text = to_json_string(jobs)?;
    text.push('\n');

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = temp_file_for(dir, path).map_err(|e| FoldJobError::output(path, e))?;
    debug!("Writing {} bytes to {}", text.len(), tmp.path().display());
    tmp.write_all(text.as_bytes())
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| FoldJobError::output(path, e))?;
    tmp.persist(path)
        .map_err(|e| FoldJobError::output(path, e.error))?;
    info!("Wrote {} jobs to {}", jobs.len(), path.display());
    Ok(())
}
