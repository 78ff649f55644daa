/*! Token annotators.

Each annotator enriches or corrects a single [Token] in place. The `correct`
pipeline chains them in a fixed order; a rule sees the mutations of the rules
before it on the same token.
!*/
mod clitic_marks;
mod correspondence;
mod ext_pos;
mod morphology;
mod tag;
mod token_type;

pub use clitic_marks::MarkHarmonizer;
pub use correspondence::CorrespondenceEnrich;
pub use ext_pos::ExtPosDefault;
pub use morphology::MorphologyInference;
pub use tag::TagInference;
pub use token_type::TokenTypeClassifier;

use crate::error::Error;
use crate::treebank::{keys, Token};

/// Annotations enrich a token with inferred or table-provided features.
pub trait Annotate {
    fn annotate(&self, token: &mut Token) -> Result<(), Error>;
}

/// Annotator enables annotation chaining, adding multiple annotators and
/// doing the annotation process in one step.
pub struct Annotator<'a>(Vec<Box<dyn Annotate + 'a>>);

impl<'a> Annotator<'a> {
    pub fn add(&mut self, annotator: Box<dyn Annotate + 'a>) -> &mut Annotator<'a> {
        self.0.push(annotator);
        self
    }
}

impl Annotate for Annotator<'_> {
    fn annotate(&self, token: &mut Token) -> Result<(), Error> {
        for annotator in &self.0 {
            annotator.annotate(token)?;
        }
        Ok(())
    }
}

impl Default for Annotator<'_> {
    fn default() -> Self {
        Self(vec![])
    }
}

/// True when `tag` is not a clean categorical label, i.e. contains at least
/// one character outside `A-Z`. The `_` placeholder qualifies.
pub(crate) fn tag_needs_inference(token: &Token) -> bool {
    token
        .get(keys::TAG)
        .map_or(false, |tag| tag.chars().any(|c| !c.is_ascii_uppercase()))
}
