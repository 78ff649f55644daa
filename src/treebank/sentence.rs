use super::Token;

/// An ordered list of sentence trees, in corpus file order.
pub type Forest = Vec<Sentence>;

/// One sentence tree: comment lines followed by id → [Token] pairs.
///
/// Token ids are kept as strings since ranges (`3-4`) and empty-node ids
/// (`5.1`) are valid and must survive a round trip. Ids are unique within a
/// sentence; iteration follows source-file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sentence {
    comments: Vec<String>,
    tokens: Vec<(String, Token)>,
}

impl Sentence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_comment(&mut self, comment: impl Into<String>) {
        self.comments.push(comment.into());
    }

    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// Appends a token. A duplicate id replaces the previous token, keeping
    /// ids unique.
    pub fn push(&mut self, id: impl Into<String>, token: Token) {
        let id = id.into();
        match self.tokens.iter_mut().find(|(i, _)| *i == id) {
            Some((_, t)) => *t = token,
            None => self.tokens.push((id, token)),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Token> {
        self.tokens.iter().find(|(i, _)| i == id).map(|(_, t)| t)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Token)> {
        self.tokens.iter().map(|(i, t)| (i.as_str(), t))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Token)> {
        self.tokens.iter_mut().map(|(i, t)| (i.as_str(), t))
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
