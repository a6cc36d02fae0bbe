use log::{debug, info, warn};
use std::{
    collections::HashMap,
    fs, io,
    num::ParseIntError,
    path::{Path, PathBuf},
};
use thiserror::Error;

pub mod classify;
pub mod directory;
pub mod groups;
pub mod output;
pub mod tglist;

pub use classify::Class;
pub use directory::DirectoryEntry;
pub use groups::GroupIndex;
pub use output::{ListWriter, OutputRecord};
pub use tglist::{TgEntry, TgList};

pub const DEFAULT_GROUPS_PATH: &str = "/tmp/group.txt";
pub const DEFAULT_DIRECTORY_PATH: &str = "/tmp/data.json";
pub const DEFAULT_OUTPUT_PATH: &str = "/tmp/TGList.txt";

#[derive(Debug, Error)]
pub enum Error {
    #[error("couldn't access {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("failed to write list: {0}")]
    Write(#[source] io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("directory needs an opening and a closing bracket line, found {lines} line(s)")]
    TooShort { lines: usize },
    #[error("line {line}: expected a bracket, found {text:?}")]
    NotBracket { line: usize, text: String },
    #[error("line {line}: no ':' in {text:?}")]
    MissingColon { line: usize, text: String },
    #[error("line {line}: talk group id {text:?} is not a number")]
    InvalidId { line: usize, text: String, source: ParseIntError },
    #[error("line {line}: {reason}")]
    InvalidListLine { line: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Io { path: path.to_owned(), source })
}

/// Where a generation run reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub groups: PathBuf,
    pub directory: PathBuf,
    pub output: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            groups: DEFAULT_GROUPS_PATH.into(),
            directory: DEFAULT_DIRECTORY_PATH.into(),
            output: DEFAULT_OUTPUT_PATH.into(),
        }
    }
}

/// What a generation run wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    /// Lines written, one per directory entry.
    pub written: usize,
    /// Entries that were looked up in the grouping file.
    pub counted: usize,
    pub by_class: HashMap<Class, usize>,
}

/// Read both input files, then write the annotated list, replacing any previous output.
pub fn generate(paths: &Paths) -> Result<Summary> {
    info!("Loading grouping file {}", paths.groups.display());
    let groups = GroupIndex::from_path(&paths.groups)?;
    info!("Loading directory file {}", paths.directory.display());
    let entries = directory::read_directory(&paths.directory)?;
    info!("Writing {} talk groups to {}", entries.len(), paths.output.display());
    let mut writer = ListWriter::create(&paths.output)?;
    let summary = convert(&groups, &entries, &mut writer)?;
    writer.finish()?;
    Ok(summary)
}

/// Classify and count each entry, writing one record per entry in order.
pub fn convert<W: io::Write>(
    groups: &GroupIndex,
    entries: &[DirectoryEntry],
    writer: &mut ListWriter<W>,
) -> Result<Summary> {
    let mut summary = Summary::default();
    for entry in entries {
        let class = Class::of(entry.id);
        let count = if classify::should_count(entry.id) {
            summary.counted += 1;
            groups.count(entry.id)
        } else {
            0
        };
        if entry.name.trim().is_empty() {
            warn!("talk group {} has an empty name", entry.key);
        }
        debug!("talk group {}: flag {}, used {} times", entry.key, class, count);
        writer.write(&OutputRecord { key: &entry.key, class, count, name: &entry.name })?;
        *summary.by_class.entry(class).or_default() += 1;
        summary.written += 1;
    }
    Ok(summary)
}
