//! Feature frequency tabulation pipeline.
//!
//! Reads a treebank folder, prints the aggregate frequency table to stdout
//! and exports one TSV sheet per feature with more than two distinct
//! values. The sheets are the raw material for correspondence tables.
use std::path::PathBuf;

use log::info;

use crate::error::Error;
use crate::io;
use crate::stats;

use super::Pipeline;

pub struct Tabulate {
    src: PathBuf,
    dst: PathBuf,
}

impl Tabulate {
    pub fn new(src: PathBuf, dst: PathBuf) -> Self {
        Self { src, dst }
    }
}

impl Pipeline<()> for Tabulate {
    fn run(&self) -> Result<(), Error> {
        info!("tabulating features of {}", self.src.display());
        let corpus = io::read_folder(&self.src)?;
        info!("read {} treebank files", corpus.len());

        let counts = stats::tabulate(corpus.values());
        println!("{}", serde_json::to_string_pretty(&counts)?);

        stats::write_sheets(&counts, &self.dst)?;
        Ok(())
    }
}
