use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;
use structopt::StructOpt;
use tglist::{Class, Paths};

/// Convert a talk-group directory export into a `;`-delimited TG list with usage counts.
#[derive(StructOpt)]
struct Options {
    /// Grouping file the usage counts are taken from [default: /tmp/group.txt]
    #[structopt(short, long, parse(from_os_str))]
    groups: Option<PathBuf>,
    /// Directory export listing talk groups and names [default: /tmp/data.json]
    #[structopt(short, long, parse(from_os_str))]
    directory: Option<PathBuf>,
    /// List file to create [default: /tmp/TGList.txt]
    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,
}

impl Options {
    fn into_paths(self) -> Paths {
        let defaults = Paths::default();
        Paths {
            groups: self.groups.unwrap_or(defaults.groups),
            directory: self.directory.unwrap_or(defaults.directory),
            output: self.output.unwrap_or(defaults.output),
        }
    }
}

fn main() -> Result<()> {
    // Load from .env file if it is present
    dotenv::dotenv().ok();
    // Initialize logging
    env_logger::init();
    // Get command line arguments
    let paths = Options::from_args().into_paths();
    let summary = tglist::generate(&paths).with_context(|| format!("failed to generate {}", paths.output.display()))?;
    let by_class = |class: Class| summary.by_class.get(&class).copied().unwrap_or(0);
    info!(
        "{} talk groups written, {} counted. Ordinary: {}. Reserved: {}. Special: {}.",
        summary.written,
        summary.counted,
        by_class(Class::Ordinary),
        by_class(Class::Reserved),
        by_class(Class::Special)
    );

    Ok(())
}
