use crate::correspondence::CorrespondenceTable;
use crate::error::Error;
use crate::treebank::{keys, Token};

use super::Annotate;

/// Lookup order. Later features override what earlier ones assigned.
const LOOKUP_ORDER: [&str; 4] = [keys::LEMMA, keys::GLOSS, keys::TAG, keys::TEXT];

/// Applies hand-built correspondence tables to a token.
///
/// For each indexed feature, the token's value is split on `.` (composite
/// glosses like `aller.chercher`) and every piece with a table entry
/// contributes its assignments, overwriting existing values.
pub struct CorrespondenceEnrich<'a> {
    tables: &'a CorrespondenceTable,
}

impl<'a> CorrespondenceEnrich<'a> {
    pub fn new(tables: &'a CorrespondenceTable) -> Self {
        Self { tables }
    }
}

impl Annotate for CorrespondenceEnrich<'_> {
    fn annotate(&self, token: &mut Token) -> Result<(), Error> {
        for feature in LOOKUP_ORDER {
            // Current value: assignments made for an earlier feature of the
            // order are visible here.
            let Some(value) = token.get(feature).map(str::to_string) else {
                continue;
            };
            for piece in value.split('.') {
                if let Some(assignments) = self.tables.get(feature, piece) {
                    for (feat, val) in assignments {
                        token.set(feat.clone(), val.clone());
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> CorrespondenceTable {
        let mut tables = CorrespondenceTable::new();
        tables.insert(
            "Gloss",
            "tin",
            vec![
                ("tag".to_string(), "NOUN".to_string()),
                ("Gloss".to_string(), "stone".to_string()),
            ],
        );
        tables.insert(
            "lemma",
            "mont",
            vec![("tag".to_string(), "VERB".to_string())],
        );
        tables
    }

    #[test]
    fn test_assignments_applied() {
        let tables = tables();
        let mut token = Token::new();
        token.set("Gloss", "tin");
        token.set("tag", "_");

        CorrespondenceEnrich::new(&tables)
            .annotate(&mut token)
            .unwrap();

        assert_eq!(token.get("tag"), Some("NOUN"));
        assert_eq!(token.get("Gloss"), Some("stone"));
    }

    #[test]
    fn test_composite_value_split_on_dot() {
        let tables = tables();
        let mut token = Token::new();
        token.set("Gloss", "aller.tin");

        CorrespondenceEnrich::new(&tables)
            .annotate(&mut token)
            .unwrap();

        assert_eq!(token.get("tag"), Some("NOUN"));
    }

    #[test]
    fn test_lemma_checked_before_gloss() {
        let tables = tables();
        let mut token = Token::new();
        token.set("lemma", "mont");
        token.set("Gloss", "tin");

        CorrespondenceEnrich::new(&tables)
            .annotate(&mut token)
            .unwrap();

        // Gloss entry overwrites what the lemma entry assigned.
        assert_eq!(token.get("tag"), Some("NOUN"));
    }

    #[test]
    fn test_no_entry_is_noop() {
        let tables = tables();
        let mut token = Token::new();
        token.set("Gloss", "unknown");
        token.set("tag", "_");

        CorrespondenceEnrich::new(&tables)
            .annotate(&mut token)
            .unwrap();

        assert_eq!(token.get("tag"), Some("_"));
    }
}
