use crate::error::Error;
use crate::treebank::{keys, Token};

use super::Annotate;

/// Harmonizes affix/clitic boundary marks between `Gloss` and `t`.
///
/// A leading or trailing `-`/`=` present on one of the two values but not on
/// the other is propagated at the matching edge, in both directions. The two
/// edges are handled independently and at most one character is added per
/// edge, which makes the rule idempotent. A bare one-character mark never
/// triggers. Tokens missing either value are left alone.
pub struct MarkHarmonizer;

fn leading_mark(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(mark @ ('-' | '=')), Some(_)) => Some(mark),
        _ => None,
    }
}

fn trailing_mark(s: &str) -> Option<char> {
    let mut chars = s.chars().rev();
    match (chars.next(), chars.next()) {
        (Some(mark @ ('-' | '=')), Some(_)) => Some(mark),
        _ => None,
    }
}

/// Propagates `src` edge marks onto `dst`.
fn harmonize(src: &str, dst: &mut String) {
    if let Some(mark) = leading_mark(src) {
        if leading_mark(dst).is_none() {
            dst.insert(0, mark);
        }
    }
    if let Some(mark) = trailing_mark(src) {
        if trailing_mark(dst).is_none() {
            dst.push(mark);
        }
    }
}

impl Annotate for MarkHarmonizer {
    fn annotate(&self, token: &mut Token) -> Result<(), Error> {
        let (Some(gloss), Some(text)) = (token.get(keys::GLOSS), token.get(keys::TEXT)) else {
            return Ok(());
        };
        let gloss = gloss.to_string();
        let mut text = text.to_string();

        harmonize(&gloss, &mut text);
        let mut gloss = gloss;
        harmonize(&text, &mut gloss);

        token.set(keys::TEXT, text);
        token.set(keys::GLOSS, gloss);
        Ok(())
    }
}
