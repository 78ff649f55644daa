/*! Lexicon-backed analyzer.

Loads a tab-separated morphological lexicon (`form TAB upos TAB morph`, the
morph column in `Feat=Val|Feat=Val` form or `_`) and answers lookups on the
exact surface form. Forms missing from the lexicon get the UD fallback tag
`X` and no morphology.
!*/
use std::{collections::HashMap, path::Path};

use log::{debug, info};

use crate::error::Error;
use crate::treebank::keys;

use super::{Analysis, Analyze};

/// Fallback part of speech for out-of-lexicon forms.
const OOV_POS: &str = "X";

pub struct LexiconAnalyzer {
    entries: HashMap<String, Analysis>,
}

impl LexiconAnalyzer {
    /// Loads the lexicon at `path`. I/O and format errors are fatal, like an
    /// unloadable model.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .quoting(false)
            .flexible(true)
            .has_headers(false)
            .from_path(path)?;

        let mut entries = HashMap::new();
        for record in reader.records() {
            let record = record?;
            let (form, pos) = match (record.get(0), record.get(1)) {
                (Some(f), Some(p)) if !f.is_empty() && !p.is_empty() => (f, p),
                _ => {
                    return Err(Error::Custom(format!(
                        "lexicon entry without form/pos in {}",
                        path.display()
                    )))
                }
            };
            let morph = match record.get(2) {
                None => Vec::new(),
                Some(m) if m == keys::UNSET || m.is_empty() => Vec::new(),
                Some(m) => parse_morph(m)?,
            };
            entries.insert(form.to_string(), Analysis::new(pos, morph));
        }

        info!("loaded lexicon: {} entries", entries.len());
        Ok(Self { entries })
    }

    fn lookup(&self, form: &str) -> Analysis {
        match self.entries.get(form) {
            Some(analysis) => analysis.clone(),
            None => {
                debug!("out-of-lexicon form {form:?}");
                Analysis::new(OOV_POS, Vec::new())
            }
        }
    }
}

impl Analyze for LexiconAnalyzer {
    fn analyze(&self, text: &str) -> Result<Vec<Analysis>, Error> {
        Ok(text
            .split_whitespace()
            .map(|form| self.lookup(form))
            .collect())
    }
}

fn parse_morph(raw: &str) -> Result<Vec<(String, String)>, Error> {
    raw.split('|')
        .map(|segment| {
            let (feat, value) = segment
                .split_once('=')
                .ok_or_else(|| Error::Assignment(segment.to_string()))?;
            Ok((feat.to_string(), value.to_string()))
        })
        .collect()
}
