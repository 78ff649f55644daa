/*! Feature frequency tabulation.

Walks a corpus and counts every observed value per feature. Ambiguous
values, where the annotator wrote several candidates joined with `°`, are
split so each candidate is counted on its own while the undivided value is
retained under a `<feature>_ambigu` key for review.

Features with more than two distinct values are exported as one TSV sheet
each, ready to be filled in as correspondence tables.
!*/
use std::{collections::BTreeMap, path::Path};

use log::info;

use crate::error::Error;
use crate::treebank::{keys, Forest};

/// Candidate separator inside ambiguous feature values.
pub const AMBIGUITY_MARKER: char = '°';

const AMBIGUOUS_SUFFIX: &str = "_ambigu";

/// Features with at most this many distinct values get no sheet.
const SHEET_THRESHOLD: usize = 2;

/// Per-feature value frequency counts.
pub type FeatureCounts = BTreeMap<String, BTreeMap<String, u64>>;

/// Tabulates every token feature of `forests`, skipping the structural
/// `gov`/`egov` keys. The `_` placeholder counts like any other value.
pub fn tabulate<'a>(forests: impl IntoIterator<Item = &'a Forest>) -> FeatureCounts {
    let mut counts = FeatureCounts::new();

    for forest in forests {
        for sentence in forest {
            for (_, token) in sentence.iter() {
                for (key, value) in token.iter() {
                    if keys::STRUCTURAL.contains(&key.as_str()) {
                        continue;
                    }
                    if value.contains(AMBIGUITY_MARKER) {
                        bump(&mut counts, &format!("{key}{AMBIGUOUS_SUFFIX}"), value);
                        for part in value.split(AMBIGUITY_MARKER) {
                            bump(&mut counts, key, part);
                        }
                    } else {
                        bump(&mut counts, key, value);
                    }
                }
            }
        }
    }

    counts
}

fn bump(counts: &mut FeatureCounts, feature: &str, value: &str) {
    *counts
        .entry(feature.to_string())
        .or_default()
        .entry(value.to_string())
        .or_default() += 1;
}

/// Writes one `<feature>.tsv` sheet per feature with more than
/// [SHEET_THRESHOLD] distinct values, creating `dst` when needed.
pub fn write_sheets(counts: &FeatureCounts, dst: &Path) -> Result<(), Error> {
    std::fs::create_dir_all(dst)?;

    for (feature, values) in counts {
        if values.len() <= SHEET_THRESHOLD {
            continue;
        }
        let path = dst.join(format!("{feature}.tsv"));
        info!("writing frequency sheet {}", path.display());

        let mut writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .quote_style(csv::QuoteStyle::Never)
            .flexible(true)
            .from_path(&path)?;
        writer.write_record(["frequency", feature.as_str(), "UD"])?;
        for (value, count) in values {
            writer.write_record([count.to_string().as_str(), value.as_str()])?;
        }
        writer.flush()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::treebank::{Sentence, Token};

    fn forest(values: &[(&str, &str)]) -> Forest {
        let mut sent = Sentence::new();
        for (i, (key, value)) in values.iter().enumerate() {
            let mut token = Token::new();
            token.set(*key, *value);
            sent.push((i + 1).to_string(), token);
        }
        vec![sent]
    }

    #[test]
    fn test_plain_value_counted_once() {
        let f = forest(&[("tag", "NOUN"), ("tag", "NOUN"), ("tag", "_")]);
        let counts = tabulate(&[f]);

        assert_eq!(counts["tag"]["NOUN"], 2);
        assert_eq!(counts["tag"]["_"], 1);
        assert!(!counts.contains_key("tag_ambigu"));
    }

    #[test]
    fn test_ambiguous_value_split_and_retained() {
        let f = forest(&[("tag", "NOUN°VERB"), ("tag", "NOUN")]);
        let counts = tabulate(&[f]);

        assert_eq!(counts["tag_ambigu"]["NOUN°VERB"], 1);
        assert_eq!(counts["tag"]["NOUN"], 2);
        assert_eq!(counts["tag"]["VERB"], 1);
    }

    #[test]
    fn test_structural_keys_skipped() {
        let f = forest(&[("gov", "2:advmod"), ("egov", "2:advmod"), ("tag", "X")]);
        let counts = tabulate(&[f]);

        assert!(!counts.contains_key("gov"));
        assert!(!counts.contains_key("egov"));
        assert!(counts.contains_key("tag"));
    }

    #[test]
    fn test_sheets_only_above_threshold() {
        let f = forest(&[
            ("tag", "NOUN"),
            ("tag", "VERB"),
            ("tag", "ADJ"),
            ("Gloss", "ne"),
            ("Gloss", "pas"),
        ]);
        let counts = tabulate(&[f]);

        let dir = tempfile::tempdir().unwrap();
        write_sheets(&counts, dir.path()).unwrap();

        assert!(dir.path().join("tag.tsv").is_file());
        assert!(!dir.path().join("Gloss.tsv").exists());

        let sheet = std::fs::read_to_string(dir.path().join("tag.tsv")).unwrap();
        let mut lines = sheet.lines();
        assert_eq!(lines.next(), Some("frequency\ttag\tUD"));
        assert!(sheet.contains("1\tNOUN"));
    }
}
