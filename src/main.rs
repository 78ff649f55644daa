//! # Korrigan
//!
//! Korrigan is a pre-annotation toolchain for Breton CoNLL treebanks.
//!
//! It ships two tools: `tabulate` scans a corpus folder and exports feature
//! value frequency sheets, `correct` fills in tags, morphology and
//! gloss-derived annotations using hand-built correspondence tables and a
//! gloss lexicon.
//!
//! ```sh
//! korrigan 0.2.0
//! Breton treebank pre-annotation tool.
//!
//! USAGE:
//!     korrigan <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     correct     Correct and enrich a treebank folder
//!     help        Prints this message or the help of the given subcommand(s)
//!     tabulate    Tabulate feature value frequencies
//! ```
use log::debug;
use structopt::StructOpt;

use korrigan::error::Error;
use korrigan::pipelines::{Correct, Pipeline, Tabulate};

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Korrigan::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Korrigan::Tabulate(t) => Tabulate::new(t.src, t.dst).run()?,
        cli::Korrigan::Correct(c) => Correct::new(c.src, c.tables, c.dst, c.lexicon).run()?,
    };
    Ok(())
}
