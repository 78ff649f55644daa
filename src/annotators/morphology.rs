use crate::analyzers::Analyze;
use crate::error::Error;
use crate::treebank::{keys, Token};

use super::{tag_needs_inference, Annotate};

const VERB: &str = "VERB";

/// Copies verbal morphology from the analyzed gloss onto the token.
///
/// Only runs while `tag` is not yet a clean categorical label and the gloss
/// holds something non-blank. When the analyzer reads the gloss as a verb,
/// every morphological feature of its first token is written through,
/// overwriting existing values.
pub struct MorphologyInference<'a, A: Analyze> {
    analyzer: &'a A,
}

impl<'a, A: Analyze> MorphologyInference<'a, A> {
    pub fn new(analyzer: &'a A) -> Self {
        Self { analyzer }
    }
}

impl<A: Analyze> Annotate for MorphologyInference<'_, A> {
    fn annotate(&self, token: &mut Token) -> Result<(), Error> {
        if !tag_needs_inference(token) {
            return Ok(());
        }
        let Some(gloss) = token.get(keys::GLOSS) else {
            return Ok(());
        };
        if gloss.trim().is_empty() {
            return Ok(());
        }

        let analyses = self.analyzer.analyze(gloss)?;
        let Some(first) = analyses.first() else {
            return Ok(());
        };
        if first.pos() == VERB {
            for (feat, value) in first.morph() {
                token.set(feat.clone(), value.clone());
            }
        }
        Ok(())
    }
}
