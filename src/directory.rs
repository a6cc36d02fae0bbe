use crate::{read_file, Error, Result};
use log::debug;
use std::path::Path;

/// One talk group from the directory export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Identifier text as it appeared in the file, written back out unchanged.
    pub key: String,
    pub id: i64,
    pub name: String,
}

/// Read and parse a directory file.
pub fn read_directory(path: impl AsRef<Path>) -> Result<Vec<DirectoryEntry>> {
    let entries = parse_directory(&read_file(path.as_ref())?)?;
    debug!("parsed {} directory entries from {}", entries.len(), path.as_ref().display());
    Ok(entries)
}

/// Parse the text of a directory export.
///
/// The first and last lines are the enclosing brackets of the array and are dropped; every
/// line between them must be a `"id": "name"` pair. Any malformed line aborts the parse.
pub fn parse_directory(text: &str) -> Result<Vec<DirectoryEntry>> {
    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    match lines.as_slice() {
        [first, interior @ .., last] => {
            if !first.starts_with(&['[', '{'][..]) {
                return Err(Error::NotBracket { line: 1, text: first.to_string() });
            }
            if !last.ends_with(&[']', '}'][..]) {
                return Err(Error::NotBracket { line: lines.len(), text: last.to_string() });
            }
            interior
                .iter()
                .enumerate()
                // Interior lines start at line 2
                .map(|(i, line)| parse_line(i + 2, line))
                .collect()
        }
        _ => Err(Error::TooShort { lines: lines.len() }),
    }
}

fn parse_line(line_number: usize, line: &str) -> Result<DirectoryEntry> {
    let cleaned: String = line.chars().filter(|c| !matches!(c, '"' | ',')).collect();
    let (key, name) = cleaned
        .split_once(':')
        .ok_or_else(|| Error::MissingColon { line: line_number, text: line.to_owned() })?;
    let key = key.trim();
    let id = key.parse::<i64>().map_err(|source| Error::InvalidId { line: line_number, text: key.to_owned(), source })?;
    Ok(DirectoryEntry { key: key.to_owned(), id, name: name.to_owned() })
}
