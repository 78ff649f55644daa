use std::slice::Iter;

/// Feature keys with a reserved or conventional meaning.
pub mod keys {
    /// Surface form of the token.
    pub const TEXT: &str = "t";
    pub const LEMMA: &str = "lemma";
    pub const GLOSS: &str = "Gloss";
    /// Part-of-speech tag (UPOS column).
    pub const TAG: &str = "tag";
    /// Secondary tag written from XPOS.
    pub const XTAG: &str = "xtag";
    pub const EXT_POS: &str = "ExtPos";
    pub const TOKEN_TYPE: &str = "TokenType";
    /// Head relation, excluded from feature tabulation.
    pub const GOV: &str = "gov";
    /// Enhanced head relations, excluded from feature tabulation.
    pub const EGOV: &str = "egov";

    /// Keys that carry syntax rather than morphology.
    pub const STRUCTURAL: [&str; 2] = [GOV, EGOV];

    /// Placeholder for an unset column value.
    pub const UNSET: &str = "_";
}

/// A single treebank token: a feature name → feature value mapping.
///
/// Insertion order is preserved so that rewritten files stay close to their
/// source. [Token::set] overwrites in place when the key already exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Token {
    features: Vec<(String, String)>,
}

impl Token {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.features
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Value of `key`, with the `_` placeholder when the key is absent.
    pub fn get_or_unset(&self, key: &str) -> &str {
        self.get(key).unwrap_or(keys::UNSET)
    }

    pub fn has(&self, key: &str) -> bool {
        self.features.iter().any(|(k, _)| k == key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.features.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.features.push((key, value)),
        }
    }

    pub fn iter(&self) -> Iter<'_, (String, String)> {
        self.features.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::Token;

    #[test]
    fn test_set_overwrites_in_place() {
        let mut token = Token::new();
        token.set("t", "ket");
        token.set("tag", "_");
        token.set("t", "ne");

        assert_eq!(token.get("t"), Some("ne"));
        let order: Vec<&str> = token.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(order, vec!["t", "tag"]);
    }

    #[test]
    fn test_get_or_unset() {
        let token = Token::new();
        assert_eq!(token.get_or_unset("tag"), "_");
    }
}
