//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "korrigan", about = "Breton treebank pre-annotation tool.")]
/// Holds every command callable through the `korrigan` binary.
pub enum Korrigan {
    #[structopt(about = "Tabulate feature value frequencies")]
    Tabulate(Tabulate),
    #[structopt(about = "Correct and enrich a treebank folder")]
    Correct(Correct),
}

#[derive(Debug, StructOpt)]
/// Tabulate command and parameters.
pub struct Tabulate {
    #[structopt(parse(from_os_str), help = "treebank folder")]
    pub src: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "dst",
        help = "frequency sheet destination",
        default_value = "autosheets"
    )]
    pub dst: PathBuf,
}

#[derive(Debug, StructOpt)]
/// Correct command and parameters.
pub struct Correct {
    #[structopt(parse(from_os_str), help = "treebank folder")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "correspondence table folder")]
    pub tables: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "dst",
        help = "corrected treebank destination",
        default_value = "corrected"
    )]
    pub dst: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "lexicon",
        help = "path to the gloss morphological lexicon",
        default_value = "lexicon.tsv"
    )]
    pub lexicon: PathBuf,
}
