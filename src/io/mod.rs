/*!
# IO utilities

CoNLL reading and writing, at file and folder granularity.

The token lines follow the 10-column CoNLL-U layout. Columns are folded into
the flat [crate::treebank::Token] feature bag on read (FORM → `t`, LEMMA →
`lemma`, UPOS → `tag`, XPOS → `xtag`, FEATS/MISC fields spread as features,
HEAD/DEPREL → `gov`, DEPS → `egov`) and unfolded on write, with all
non-structural features serialized alphabetically into FEATS.
!*/
pub mod reader;
pub mod writer;

pub use reader::{read_file, read_folder};
pub use writer::{write_file, write_folder};
