/*! CoNLL writer.

Writes forests back to 10-column files. Comment lines are restored verbatim;
non-structural features go to FEATS in alphabetical order, so a read/write
round trip normalizes feature order but loses nothing.
!*/
use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use itertools::Itertools;
use log::info;

use crate::error::Error;
use crate::treebank::{keys, Forest, Token};

/// Columns rebuilt from reserved keys rather than FEATS.
const CORE: [&str; 6] = [
    keys::TEXT,
    keys::LEMMA,
    keys::TAG,
    keys::XTAG,
    keys::GOV,
    keys::EGOV,
];

/// Writes `forest` as a CoNLL file at `path`.
pub fn write_file(forest: &Forest, path: &Path) -> Result<(), Error> {
    let mut out = BufWriter::new(File::create(path)?);

    for sentence in forest {
        for comment in sentence.comments() {
            writeln!(out, "{comment}")?;
        }
        for (id, token) in sentence.iter() {
            writeln!(out, "{}", token_line(id, token))?;
        }
        writeln!(out)?;
    }
    out.flush()?;

    Ok(())
}

/// Writes each forest under its original file name in `dst`, creating the
/// folder when needed.
pub fn write_folder(corpus: &BTreeMap<String, Forest>, dst: &Path) -> Result<(), Error> {
    std::fs::create_dir_all(dst)?;

    for (name, forest) in corpus {
        let path = dst.join(name);
        info!("writing corrected file {}", path.display());
        write_file(forest, &path)?;
    }

    Ok(())
}

fn token_line(id: &str, token: &Token) -> String {
    let (head, deprel) = match token.get(keys::GOV) {
        Some(gov) => match gov.split_once(':') {
            Some((h, d)) => (h, d),
            None => (gov, keys::UNSET),
        },
        None => (keys::UNSET, keys::UNSET),
    };

    let feats = token
        .iter()
        .filter(|(k, _)| !CORE.contains(&k.as_str()))
        .map(|(k, v)| format!("{k}={v}"))
        .sorted()
        .join("|");
    let feats = if feats.is_empty() {
        keys::UNSET.to_string()
    } else {
        feats
    };

    [
        id,
        token.get_or_unset(keys::TEXT),
        token.get_or_unset(keys::LEMMA),
        token.get_or_unset(keys::TAG),
        token.get_or_unset(keys::XTAG),
        feats.as_str(),
        head,
        deprel,
        token.get_or_unset(keys::EGOV),
        keys::UNSET,
    ]
    .join("\t")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::reader::read_file;
    use crate::treebank::Sentence;

    fn sample() -> Forest {
        let mut sent = Sentence::new();
        sent.push_comment("# sent_id = test.1");

        let mut tok = Token::new();
        tok.set("t", "oan");
        tok.set("lemma", "bezañ");
        tok.set("tag", "VERB");
        tok.set("Gloss", "étais");
        tok.set("gov", "0:root");
        sent.push("1", tok);

        vec![sent]
    }

    #[test]
    fn test_token_line_layout() {
        let forest = sample();
        let (id, token) = forest[0].iter().next().unwrap();

        assert_eq!(
            token_line(id, token),
            "1\toan\tbezañ\tVERB\t_\tGloss=étais\t0\troot\t_\t_"
        );
    }

    #[test]
    fn test_feats_sorted() {
        let mut tok = Token::new();
        tok.set("t", "oan");
        tok.set("Person", "1");
        tok.set("Gloss", "étais");

        let line = token_line("1", &tok);
        assert!(line.contains("Gloss=étais|Person=1"));
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let corpus = BTreeMap::from([("test.conllu".to_string(), sample())]);

        write_folder(&corpus, dir.path()).unwrap();
        let back = read_file(&dir.path().join("test.conllu")).unwrap();

        assert_eq!(back, sample());
    }
}
