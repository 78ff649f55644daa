/*! Gloss analyzers.

Tag and morphology inference delegates all language understanding to an
[Analyze] implementation. Glosses in this corpus are French, so the shipped
analyzer is a French morphological lexicon lookup ([LexiconAnalyzer]).

The handle is loaded once per process and passed by shared reference to the
annotators that need it; a failing analyzer aborts the run.
!*/
mod lexicon;

pub use lexicon::LexiconAnalyzer;

use crate::error::Error;

/// One analyzed token: a UD part of speech and its morphological features.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pos: String,
    morph: Vec<(String, String)>,
}

impl Analysis {
    pub fn new(pos: impl Into<String>, morph: Vec<(String, String)>) -> Self {
        Self {
            pos: pos.into(),
            morph,
        }
    }

    pub fn pos(&self) -> &str {
        &self.pos
    }

    pub fn morph(&self) -> &[(String, String)] {
        &self.morph
    }
}

/// Analyzer seam.
///
/// Returns one [Analysis] per whitespace-separated token of `text`, in
/// order.
pub trait Analyze {
    fn analyze(&self, text: &str) -> Result<Vec<Analysis>, Error>;
}
