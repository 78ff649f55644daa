pub mod analyzers;
pub mod annotators;
pub mod correspondence;
pub mod error;
pub mod io;
pub mod pipelines;
pub mod stats;
pub mod treebank;
