/*! Treebank data model.

A corpus is a [Forest] of [Sentence]s, each sentence an ordered set of
[Token]s keyed by their id. Tokens are plain feature bags: annotators mutate
them in place and the writer serializes whatever they hold.
!*/
mod sentence;
mod token;

pub use sentence::Forest;
pub use sentence::Sentence;
pub use token::keys;
pub use token::Token;
