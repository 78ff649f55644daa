use lazy_static::lazy_static;
use regex::Regex;

use crate::analyzers::Analyze;
use crate::error::Error;
use crate::treebank::{keys, Token};

use super::{tag_needs_inference, Annotate};

const ADJECTIVE: &str = "ADJ";

/// Compound tag for items that are adjectival in gloss but verbal in Breton.
const ATTRIBUTIVE_VERB: &str = "VERB|ATTRIBUTIF";

lazy_static! {
    /// Lemmas that keep the analyzer's adjective reading as-is.
    static ref ATTRIBUTIVE_LEMMAS: Regex =
        Regex::new(r"^(masu?|toli|mawuti?|lebata|tuara?|n wae|valu)").unwrap();
}

/// Infers a missing `tag` from the analyzed gloss.
///
/// Only runs for tokens whose `tag` is still the `_` placeholder (the
/// not-all-uppercase guard is re-checked even though the morphology rule
/// before this one never touches `tag`) and whose gloss is plain lowercase
/// letters. The part of speech of the first analysis is taken, except that
/// an adjective reading falls back to [ATTRIBUTIVE_VERB] unless the lemma is
/// on the attributive allow-list.
pub struct TagInference<'a, A: Analyze> {
    analyzer: &'a A,
}

impl<'a, A: Analyze> TagInference<'a, A> {
    pub fn new(analyzer: &'a A) -> Self {
        Self { analyzer }
    }
}

impl<A: Analyze> Annotate for TagInference<'_, A> {
    fn annotate(&self, token: &mut Token) -> Result<(), Error> {
        if !tag_needs_inference(token) {
            return Ok(());
        }
        if token.get_or_unset(keys::TAG) != keys::UNSET {
            return Ok(());
        }
        let Some(gloss) = token.get(keys::GLOSS) else {
            return Ok(());
        };
        if gloss.is_empty() || !gloss.chars().all(|c| c.is_ascii_lowercase()) {
            return Ok(());
        }

        let query = gloss.trim_matches('-').to_string();
        let analyses = self.analyzer.analyze(&query)?;
        let Some(first) = analyses.first() else {
            return Ok(());
        };

        let attributive_lemma = ATTRIBUTIVE_LEMMAS.is_match(token.get_or_unset(keys::LEMMA));
        if first.pos() != ADJECTIVE || attributive_lemma {
            token.set(keys::TAG, first.pos());
        } else {
            token.set(keys::TAG, ATTRIBUTIVE_VERB);
        }
        Ok(())
    }
}
