/*! Gloss → feature correspondence tables.

Hand-built TSV sheets mapping an observed value (usually a gloss) to the
feature assignments it implies. One file per indexed feature: `Gloss.tsv`
feeds lookups on the `Gloss` feature, `lemma.tsv` on `lemma`, and so on.

Rows are `frequency TAB key TAB feat=val|feat=val`, with one header row.
The frequency column is informational and ignored here.
!*/
use std::{collections::HashMap, path::Path};

use log::{debug, warn};

use crate::error::Error;
use crate::treebank::keys;

/// Ordered feature assignments attached to one table entry.
pub type Assignments = Vec<(String, String)>;

/// Correspondence tables for a whole annotation run, indexed by feature
/// name then by observed value.
#[derive(Debug, Default)]
pub struct CorrespondenceTable {
    tables: HashMap<String, HashMap<String, Assignments>>,
}

impl CorrespondenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads every file of `folder`, keying each table by the file name up
    /// to its first `.`. A missing folder is fatal.
    pub fn from_folder(folder: &Path) -> Result<Self, Error> {
        let mut tables = HashMap::new();

        for entry in std::fs::read_dir(folder)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .and_then(|n| n.split('.').next())
                .ok_or_else(|| {
                    Error::Custom(format!("invalid table name under {}", folder.display()))
                })?
                .to_string();

            debug!("loading correspondence table {}", path.display());
            tables.insert(name, load_file(&path)?);
        }

        if tables.is_empty() {
            warn!("no correspondence tables found in {}", folder.display());
        }
        Ok(Self { tables })
    }

    /// Assignments registered for `value` under the table indexed by
    /// `feature`, if any. A feature with no table behaves as an empty one.
    pub fn get(&self, feature: &str, value: &str) -> Option<&[(String, String)]> {
        self.tables.get(feature)?.get(value).map(Vec::as_slice)
    }

    pub fn features(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    #[cfg(test)]
    pub(crate) fn insert(&mut self, feature: &str, value: &str, assignments: Assignments) {
        self.tables
            .entry(feature.to_string())
            .or_default()
            .insert(value.to_string(), assignments);
    }
}

fn load_file(path: &Path) -> Result<HashMap<String, Assignments>, Error> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .quoting(false)
        .flexible(true)
        .from_path(path)?;

    let mut table = HashMap::new();
    for record in reader.records() {
        let record = record?;
        // Rows missing the key or assignment column are data-quality gaps,
        // not faults.
        let (key, assignments) = match (record.get(1), record.get(2)) {
            (Some(k), Some(a)) if !k.is_empty() && !a.is_empty() => (k, a),
            _ => continue,
        };
        let key = key.trim_matches(['[', ']', ' ']).to_string();
        table.insert(key, parse_assignments(assignments)?);
    }

    Ok(table)
}

/// Parses `feat1=val1|feat2=val2`, renaming the external `upos` alias to
/// `tag`. A segment without `=` aborts the load.
fn parse_assignments(raw: &str) -> Result<Assignments, Error> {
    raw.split('|')
        .map(|segment| {
            let (feat, value) = segment
                .split_once('=')
                .ok_or_else(|| Error::Assignment(segment.to_string()))?;
            let feat = if feat == "upos" { keys::TAG } else { feat };
            Ok((feat.to_string(), value.to_string()))
        })
        .collect()
}
