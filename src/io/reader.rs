/*! CoNLL reader.
!*/
use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use log::debug;

use crate::error::Error;
use crate::treebank::{keys, Forest, Sentence, Token};

/// Reads a single CoNLL file into a [Forest].
///
/// Malformed token lines (wrong column count, feature segment without `=`)
/// are fatal: such a file has to be fixed by hand, not worked around.
pub fn read_file(path: &Path) -> Result<Forest, Error> {
    let reader = BufReader::new(File::open(path)?);
    let mut forest = Forest::new();
    let mut current = Sentence::new();

    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        let lineno = lineno + 1;

        if line.trim().is_empty() {
            flush(&mut current, &mut forest);
        } else if line.starts_with('#') {
            current.push_comment(line);
        } else {
            let (id, token) = parse_token_line(&line, lineno)?;
            current.push(id, token);
        }
    }
    flush(&mut current, &mut forest);

    Ok(forest)
}

/// Reads every regular file of `src` into a forest, keyed by file name.
///
/// Subdirectories are skipped; a missing folder is fatal. The [BTreeMap]
/// keeps corpus iteration deterministic regardless of directory order.
pub fn read_folder(src: &Path) -> Result<BTreeMap<String, Forest>, Error> {
    let mut corpus = BTreeMap::new();

    for entry in std::fs::read_dir(src)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| Error::Custom(format!("invalid file name under {}", src.display())))?
            .to_string();

        debug!("reading treebank file {}", path.display());
        corpus.insert(name, read_file(&path)?);
    }

    Ok(corpus)
}

fn flush(current: &mut Sentence, forest: &mut Forest) {
    if !current.is_empty() || !current.comments().is_empty() {
        forest.push(std::mem::take(current));
    }
}

fn parse_token_line(line: &str, lineno: usize) -> Result<(String, Token), Error> {
    let cols: Vec<&str> = line.split('\t').collect();
    if cols.len() != 10 {
        return Err(Error::Conll {
            line: lineno,
            msg: format!("expected 10 columns, got {}", cols.len()),
        });
    }

    let mut token = Token::new();
    token.set(keys::TEXT, cols[1]);
    token.set(keys::LEMMA, cols[2]);
    token.set(keys::TAG, cols[3]);
    if cols[4] != keys::UNSET {
        token.set(keys::XTAG, cols[4]);
    }

    // FEATS then MISC, spread as flat features.
    for col in [cols[5], cols[9]] {
        if col == keys::UNSET {
            continue;
        }
        for segment in col.split('|') {
            let (k, v) = segment.split_once('=').ok_or_else(|| Error::Conll {
                line: lineno,
                msg: format!("feature segment without '=': {segment:?}"),
            })?;
            token.set(k, v);
        }
    }

    if cols[6] != keys::UNSET {
        token.set(keys::GOV, format!("{}:{}", cols[6], cols[7]));
    }
    if cols[8] != keys::UNSET {
        token.set(keys::EGOV, cols[8]);
    }

    Ok((cols[0].to_string(), token))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SENT: &str = "# sent_id = abo_mto_1-p.1
# text = ne oan ket
1\tne\tne\tPART\t_\tGloss=ne|PartType=Neg\t2\tadvmod\t_\t_
2\toan\tbezañ\tVERB\t_\tGloss=étais\t0\troot\t_\t_
3\tket\tket\tPART\t_\t_\t2\tadvmod\t_\tGloss=pas
";

    fn write_tmp(dir: &tempfile::TempDir, name: &str, content: &str) {
        let mut f = std::fs::File::create(dir.path().join(name)).unwrap();
        f.write_all(content.as_bytes()).unwrap();
    }

    #[test]
    fn test_read_file() {
        let dir = tempfile::tempdir().unwrap();
        write_tmp(&dir, "abo.conllu", SENT);

        let forest = read_file(&dir.path().join("abo.conllu")).unwrap();
        assert_eq!(forest.len(), 1);

        let sent = &forest[0];
        assert_eq!(sent.comments().len(), 2);
        assert_eq!(sent.len(), 3);

        let tok = sent.get("1").unwrap();
        assert_eq!(tok.get("t"), Some("ne"));
        assert_eq!(tok.get("lemma"), Some("ne"));
        assert_eq!(tok.get("tag"), Some("PART"));
        assert_eq!(tok.get("Gloss"), Some("ne"));
        assert_eq!(tok.get("PartType"), Some("Neg"));
        assert_eq!(tok.get("gov"), Some("2:advmod"));

        // Gloss read from MISC as well.
        assert_eq!(sent.get("3").unwrap().get("Gloss"), Some("pas"));
    }

    #[test]
    fn test_bad_column_count_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write_tmp(&dir, "bad.conllu", "1\tne\tne\n");

        assert!(read_file(&dir.path().join("bad.conllu")).is_err());
    }

    #[test]
    fn test_read_folder_skips_subdirs() {
        let dir = tempfile::tempdir().unwrap();
        write_tmp(&dir, "b.conllu", SENT);
        write_tmp(&dir, "a.conllu", SENT);
        std::fs::create_dir(dir.path().join("nested")).unwrap();

        let corpus = read_folder(dir.path()).unwrap();
        let names: Vec<&str> = corpus.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["a.conllu", "b.conllu"]);
    }

    #[test]
    fn test_read_missing_folder_is_fatal() {
        let dir = tempfile::tempdir().unwrap();

        assert!(read_folder(&dir.path().join("nonexistent")).is_err());
    }

    #[test]
    fn test_read_folder_with_bracketed_name() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("data[1]");
        std::fs::create_dir(&src).unwrap();
        let mut f = std::fs::File::create(src.join("abo.conllu")).unwrap();
        f.write_all(SENT.as_bytes()).unwrap();

        let corpus = read_folder(&src).unwrap();
        assert_eq!(corpus.len(), 1);
    }
}
