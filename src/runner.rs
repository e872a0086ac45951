// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{info, warn};

use clap::Parser;

use crate::config::{config_search_dirs, find_foldjob_config, resolve_job_prefix, FoldJobConfig};
use crate::errors::FoldJobError;
use crate::job::build_jobs;
use crate::output::{default_output_path, write_jobs};
use crate::seq::fasta::read_fasta_file;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None) ]
struct Cli {
    /// Input FastA file
    fasta_file: PathBuf,

    /// Fixed protein sequence to pair with each FastA sequence
    #[arg(long = "fixed-sequence")]
    fixed_sequence: String,

    /// Output JSON file [default: input file with a .json extension]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Prefix for job names [default: "Fold Job", or job_prefix from ~/.foldjobconfig]
    #[arg(short = 'p', long = "job-prefix")]
    job_prefix: Option<String>,

    /// Do not read ~/.foldjobconfig (or ./.foldjobconfig)
    #[arg(long = "no-config")]
    no_config: bool,
}

/// Everything one run needs, with defaults already applied.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub input: PathBuf,
    pub output: PathBuf,
    pub fixed_sequence: String,
    pub job_prefix: String,
}

impl Conversion {
    fn from_cli(cli: Cli, config: Option<&FoldJobConfig>) -> Self {
        let output = cli
            .output
            .unwrap_or_else(|| default_output_path(&cli.fasta_file));
        Conversion {
            job_prefix: resolve_job_prefix(cli.job_prefix.as_deref(), config),
            input: cli.fasta_file,
            output,
            fixed_sequence: cli.fixed_sequence,
        }
    }
}

// Paths that both exist are compared after resolving "." components and symlinks.
fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// Reads the FastA file, builds one job per record and writes the batch. Returns the number of
/// jobs written.
pub fn convert(conv: &Conversion) -> Result<usize, FoldJobError> {
    if same_file(&conv.input, &conv.output) {
        warn!("Output {} overwrites the input file", conv.output.display());
    }
    let records = read_fasta_file(&conv.input)?;
    println!("Found {} protein sequences in the FASTA file", records.len());

    let jobs = build_jobs(&records, &conv.fixed_sequence, &conv.job_prefix);
    write_jobs(&conv.output, &jobs)?;
    println!(
        "Created AlphaFold JSON file with {} jobs at {}",
        jobs.len(),
        conv.output.display()
    );
    Ok(jobs.len())
}

// An unreadable or malformed config file is reported and otherwise ignored.
fn load_config(dirs: &[PathBuf]) -> Option<FoldJobConfig> {
    let path = find_foldjob_config(dirs)?;
    info!("Reading config from {}", path.display());
    match FoldJobConfig::from_file(&path) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            warn!("Ignoring {}: {}", path.display(), e);
            eprintln!("Warning: ignoring {}: {}", path.display(), e);
            None
        }
    }
}

fn select_config(no_config: bool, dirs: &[PathBuf]) -> Option<FoldJobConfig> {
    if no_config {
        info!("Config lookup disabled");
        None
    } else {
        load_config(dirs)
    }
}

pub fn run() -> Result<(), FoldJobError> {
    env_logger::init();
    info!("Starting log");

    let cli = Cli::parse();
    let config = select_config(cli.no_config, &config_search_dirs());
    let conv = Conversion::from_cli(cli, config.as_ref());
    info!("{:?}", conv);
    convert(&conv)?;
    Ok(())
}
