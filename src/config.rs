// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::Value;

use crate::errors::FoldJobError;

pub const CONFIG_FILE_NAME: &str = ".foldjobconfig";

// User defaults, read from a JSON file. Keys we don't know about are ignored.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FoldJobConfig {
    pub job_prefix: Option<String>,
}

impl FoldJobConfig {
    pub fn from_value(value: &Value) -> Self {
        FoldJobConfig {
            job_prefix: value
                .get("job_prefix")
                .and_then(Value::as_str)
                .map(String::from),
        }
    }

    pub fn parse(text: &str) -> Result<Self, FoldJobError> {
        let value: Value = serde_json::from_str(text)?;
        if !value.is_object() {
            return Err(FoldJobError::Config(String::from(
                "expected a JSON object at top level",
            )));
        }
        Ok(Self::from_value(&value))
    }

    pub fn from_file(path: &Path) -> Result<Self, FoldJobError> {
        let text = fs::read_to_string(path)
            .map_err(|e| FoldJobError::Config(format!("{}: {}", path.display(), e)))?;
        Self::parse(&text)
    }
}

fn find_in(dir: Option<PathBuf>) -> Option<PathBuf> {
    let path = dir?.join(CONFIG_FILE_NAME);
    path.exists().then_some(path)
}

/// Where the config file is looked for, in order: $HOME, then the current directory.
pub fn config_search_dirs() -> Vec<PathBuf> {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .into_iter()
        .chain(std::env::current_dir().ok())
        .collect()
}

/// First config file found in `dirs`.
pub fn find_foldjob_config(dirs: &[PathBuf]) -> Option<PathBuf> {
    dirs.iter().find_map(|dir| find_in(Some(dir.clone())))
}

/// Picks the job prefix: command line first, then config, then the built-in default.
pub fn resolve_job_prefix(cli_prefix: Option<&str>, config: Option<&FoldJobConfig>) -> String {
    cli_prefix
        .map(String::from)
        .or_else(|| config.and_then(|c| c.job_prefix.clone()))
        .unwrap_or_else(|| String::from(crate::job::DEFAULT_JOB_PREFIX))
}
