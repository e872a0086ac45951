pub mod config;
pub mod errors;
pub mod job;
pub mod output;
mod runner;
pub mod seq;

use crate::errors::FoldJobError;

pub use crate::runner::{convert, Conversion};

pub fn run() -> Result<(), FoldJobError> {
    runner::run()
}
