// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

use std::sync::OnceLock;

use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::seq::record::ProteinRecord;

pub const DEFAULT_JOB_PREFIX: &str = "Fold Job";

// One entry of the batch document. Field names and order are what the folding server expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDescriptor {
    pub name: String,
    #[serde(rename = "modelSeeds")]
    pub model_seeds: Vec<u64>,
    // [fixed chain, variable chain]
    pub sequences: [ChainEntry; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainEntry {
    #[serde(rename = "proteinChain")]
    pub protein_chain: ChainSpec,
}

// glycans and modifications are left empty for hand-editing later. The fixed chain leaves them
// out of the document altogether.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainSpec {
    pub sequence: String,
    pub count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glycans: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifications: Option<Vec<Value>>,
}

impl ChainSpec {
    pub fn fixed(sequence: &str) -> Self {
        ChainSpec {
            sequence: sequence.to_string(),
            count: 1,
            glycans: None,
            modifications: None,
        }
    }

    pub fn variable(sequence: &str) -> Self {
        ChainSpec {
            sequence: sequence.to_string(),
            count: 1,
            glycans: Some(Vec::new()),
            modifications: Some(Vec::new()),
        }
    }
}

impl JobDescriptor {
    pub fn fixed_chain(&self) -> &ChainSpec {
        &self.sequences[0].protein_chain
    }

    pub fn variable_chain(&self) -> &ChainSpec {
        &self.sequences[1].protein_chain
    }
}

fn prefix_junk() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^A-Za-z0-9 \-_:]").expect("constant regex"))
}

/// Removes every character that job names may not contain. Allowed are ASCII letters and
/// digits, space, '-', '_' and ':'. May return an empty string.
pub fn sanitize_prefix(raw: &str) -> String {
    prefix_junk().replace_all(raw, "").into_owned()
}

/// Pairs `fixed_sequence` with each record, one job per record, in record order. Jobs are named
/// "<prefix> No <i>" with i starting at 1; an empty sanitized prefix leaves a leading space.
pub fn build_jobs(
    records: &[ProteinRecord],
    fixed_sequence: &str,
    prefix: &str,
) -> Vec<JobDescriptor> {
    let prefix = sanitize_prefix(prefix);
    debug!("Job name prefix: '{}'", prefix);
    records
        .iter()
        .enumerate()
        .map(|(i, rec)| JobDescriptor {
            name: format!("{} No {}", prefix, i + 1),
            model_seeds: Vec::new(),
            sequences: [
                ChainEntry {
                    protein_chain: ChainSpec::fixed(fixed_sequence),
                },
                ChainEntry {
                    protein_chain: ChainSpec::variable(&rec.sequence),
                },
            ],
        })
        .collect()
}
