use crate::error::Error;
use crate::treebank::{keys, Token};

use super::Annotate;

/// Defaults `ExtPos` to the current `tag` when absent.
///
/// Runs first so that later tag rewrites keep the original category visible.
pub struct ExtPosDefault;

impl Annotate for ExtPosDefault {
    fn annotate(&self, token: &mut Token) -> Result<(), Error> {
        if !token.has(keys::EXT_POS) {
            let tag = token.get_or_unset(keys::TAG).to_string();
            token.set(keys::EXT_POS, tag);
        }
        Ok(())
    }
}
