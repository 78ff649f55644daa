//! Correction pipeline.
//!
//! Loads a treebank folder and a correspondence-table folder, runs the
//! annotation rules over every token and rewrites the corrected files under
//! their original names.
use std::{collections::BTreeMap, path::Path, path::PathBuf};

use log::{debug, info};

use crate::analyzers::{Analyze, LexiconAnalyzer};
use crate::annotators::{
    Annotate, Annotator, CorrespondenceEnrich, ExtPosDefault, MarkHarmonizer,
    MorphologyInference, TagInference, TokenTypeClassifier,
};
use crate::correspondence::CorrespondenceTable;
use crate::error::Error;
use crate::io;
use crate::treebank::Forest;

use super::Pipeline;

pub struct Correct {
    src: PathBuf,
    tables: PathBuf,
    dst: PathBuf,
    lexicon: PathBuf,
}

impl Correct {
    pub fn new(src: PathBuf, tables: PathBuf, dst: PathBuf, lexicon: PathBuf) -> Self {
        Self {
            src,
            tables,
            dst,
            lexicon,
        }
    }
}

/// Loads every file of `src` and corrects it in memory, returning the
/// corrected forests keyed by file name.
pub fn correct_folder<A: Analyze>(
    src: &Path,
    tables: &CorrespondenceTable,
    analyzer: &A,
) -> Result<BTreeMap<String, Forest>, Error> {
    let mut corpus = io::read_folder(src)?;

    // Rule order matters: every rule sees the previous ones' mutations.
    // Tag inference re-checks the unclean-tag guard after morphology ran.
    let mut annotator = Annotator::default();
    annotator
        .add(Box::new(ExtPosDefault))
        .add(Box::new(CorrespondenceEnrich::new(tables)))
        .add(Box::new(MarkHarmonizer))
        .add(Box::new(TokenTypeClassifier))
        .add(Box::new(MorphologyInference::new(analyzer)))
        .add(Box::new(TagInference::new(analyzer)));

    for (name, forest) in corpus.iter_mut() {
        debug!("correcting {name}");
        for sentence in forest.iter_mut() {
            for (_, token) in sentence.iter_mut() {
                annotator.annotate(token)?;
            }
        }
    }

    Ok(corpus)
}

impl Pipeline<()> for Correct {
    fn run(&self) -> Result<(), Error> {
        let tables = CorrespondenceTable::from_folder(&self.tables)?;
        let analyzer = LexiconAnalyzer::from_path(&self.lexicon)?;

        info!("correcting treebank folder {}", self.src.display());
        let corpus = correct_folder(&self.src, &tables, &analyzer)?;

        io::write_folder(&corpus, &self.dst)?;
        info!(
            "corrected {} files into {}",
            corpus.len(),
            self.dst.display()
        );
        Ok(())
    }
}
