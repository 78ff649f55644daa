//! Pipelines.
//!
//! One struct per tool, each implementing the light [pipeline::Pipeline]
//! trait: [Tabulate] builds feature frequency sheets from a corpus folder,
//! [Correct] runs the annotation rules and rewrites the corpus.
pub mod correct;
#[allow(clippy::module_inception)]
pub mod pipeline;
pub mod tabulate;

pub use correct::Correct;
pub use pipeline::Pipeline;
pub use tabulate::Tabulate;
