use anyhow::{bail, Context, Result};
use log::debug;
use std::{io::stdout, path::PathBuf};
use structopt::StructOpt;
use tglist::TgList;

/// Look up talk groups in a generated TG list.
#[derive(StructOpt)]
struct Options {
    /// List file to read [default: /tmp/TGList.txt]
    #[structopt(short, long, parse(from_os_str))]
    list: Option<PathBuf>,
    /// Find the talk group with this id
    #[structopt(short, long, conflicts_with = "name")]
    id: Option<i64>,
    /// Find talk groups whose name starts with this, ignoring case
    name: Option<String>,
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();
    let options = Options::from_args();
    let path = options.list.unwrap_or_else(|| tglist::DEFAULT_OUTPUT_PATH.into());
    let list = TgList::from_path(&path).with_context(|| format!("failed to read {}", path.display()))?;
    debug!("{} talk groups in {}", list.len(), path.display());

    let matches = match (options.id, options.name) {
        (Some(id), _) => list.find_by_id(id).into_iter().collect(),
        (None, Some(name)) => list.search(&name),
        (None, None) => list.iter().collect::<Vec<_>>(),
    };
    if matches.is_empty() {
        bail!("no matching talk group in {}", path.display());
    }

    let mut csv = csv::WriterBuilder::new().delimiter(b';').from_writer(stdout());
    csv.write_record(["Id", "Flag", "Count", "Name"])?;
    for entry in matches {
        csv.write_record([entry.id.to_string(), entry.flag.to_string(), entry.count.to_string(), entry.name.clone()])?;
    }
    csv.flush()?;

    Ok(())
}
