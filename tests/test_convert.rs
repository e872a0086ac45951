// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

mod common;

use std::fs;

use crate::common::utils;

use foldjob::{
    convert,
    errors::FoldJobError,
    job::JobDescriptor,
    output::default_output_path,
};

#[test]
fn two_records_end_to_end() {
    let (dir, input) = utils::scratch_copy("two.fasta");
    let output = dir.path().join("two.json");
    let n = convert(&utils::conversion(&input, output.clone(), "AAA", "Test")).expect("convert");
    assert_eq!(n, 2);

    let text = fs::read_to_string(&output).expect("output written");
    insta::assert_snapshot!(text.trim_end(), @r#"
    [
      {
        "name": "Test No 1",
        "modelSeeds": [],
        "sequences": [
          {
            "proteinChain": {
              "sequence": "AAA",
              "count": 1
            }
          },
          {
            "proteinChain": {
              "sequence": "MKV",
              "count": 1,
              "glycans": [],
              "modifications": []
            }
          }
        ]
      },
      {
        "name": "Test No 2",
        "modelSeeds": [],
        "sequences": [
          {
            "proteinChain": {
              "sequence": "AAA",
              "count": 1
            }
          },
          {
            "proteinChain": {
              "sequence": "MKL",
              "count": 1,
              "glycans": [],
              "modifications": []
            }
          }
        ]
      }
    ]
    "#);
}

#[test]
fn messy_input_default_output_path() {
    let (_dir, input) = utils::scratch_copy("receptors.fasta");
    let output = default_output_path(&input);
    assert_eq!(output.file_name().unwrap(), "receptors.json");

    let n = convert(&utils::conversion(&input, output.clone(), "GGS", "Screen #7!")).unwrap();
    assert_eq!(n, 3);

    let text = fs::read_to_string(&output).unwrap();
    let jobs: Vec<JobDescriptor> = serde_json::from_str(&text).unwrap();
    let names: Vec<&str> = jobs.iter().map(|j| j.name.as_str()).collect();
    assert_eq!(names, vec!["Screen 7 No 1", "Screen 7 No 2", "Screen 7 No 3"]);
    let seqs: Vec<&str> = jobs
        .iter()
        .map(|j| j.variable_chain().sequence.as_str())
        .collect();
    assert_eq!(seqs, vec!["MSKILVLSAW", "", "mkvl"]);
    assert!(jobs.iter().all(|j| j.fixed_chain().sequence == "GGS"));
}

#[test]
fn no_headers_gives_empty_array() {
    let (dir, input) = utils::scratch_fasta("plain.txt", "MKVLLA\nGGS\n");
    let output = dir.path().join("plain.json");
    assert_eq!(convert(&utils::conversion(&input, output.clone(), "AAA", "T")).unwrap(), 0);
    assert_eq!(fs::read_to_string(&output).unwrap(), "[]\n");
}

#[test]
fn missing_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("absent.fasta");
    let output = dir.path().join("absent.json");
    let res = convert(&utils::conversion(&input, output.clone(), "AAA", "T"));
    assert!(matches!(res, Err(FoldJobError::InputNotFound(_))));
    assert!(!output.exists());
}

#[test]
fn unwritable_output_keeps_nothing() {
    let (dir, input) = utils::scratch_copy("two.fasta");
    let output = dir.path().join("missing-subdir").join("two.json");
    let res = convert(&utils::conversion(&input, output.clone(), "AAA", "T"));
    assert!(matches!(res, Err(FoldJobError::OutputUnwritable { .. })));
    assert!(!output.exists());
}

#[test]
fn rerun_replaces_previous_output() {
    let (dir, input) = utils::scratch_copy("two.fasta");
    let output = dir.path().join("two.json");
    convert(&utils::conversion(&input, output.clone(), "AAA", "First")).unwrap();
    convert(&utils::conversion(&input, output.clone(), "CCC", "Second")).unwrap();
    let jobs: Vec<JobDescriptor> =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[0].name, "Second No 1");
    assert_eq!(jobs[1].fixed_chain().sequence, "CCC");
}
