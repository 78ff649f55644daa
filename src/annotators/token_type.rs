use crate::error::Error;
use crate::treebank::{keys, Token};

use super::Annotate;

const AFFIX: &str = "Aff";
const CLITIC: &str = "Clit";

/// Classifies bound tokens from the marks in their surface form.
///
/// `-` anywhere in `t` means affix, otherwise `=` means clitic. First match
/// wins; plain tokens keep `TokenType` unset.
pub struct TokenTypeClassifier;

impl Annotate for TokenTypeClassifier {
    fn annotate(&self, token: &mut Token) -> Result<(), Error> {
        let Some(text) = token.get(keys::TEXT) else {
            return Ok(());
        };
        if text.contains('-') {
            token.set(keys::TOKEN_TYPE, AFFIX);
        } else if text.contains('=') {
            token.set(keys::TOKEN_TYPE, CLITIC);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> Option<String> {
        let mut token = Token::new();
        token.set("t", text);
        TokenTypeClassifier.annotate(&mut token).unwrap();
        token.get("TokenType").map(str::to_string)
    }

    #[test]
    fn test_affix() {
        assert_eq!(classify("ker-").as_deref(), Some("Aff"));
    }

    #[test]
    fn test_clitic() {
        assert_eq!(classify("ne=ket").as_deref(), Some("Clit"));
    }

    #[test]
    fn test_dash_wins_over_equal() {
        assert_eq!(classify("ne=-ket").as_deref(), Some("Aff"));
    }

    #[test]
    fn test_plain_token_unset() {
        assert_eq!(classify("mat"), None);
    }
}
