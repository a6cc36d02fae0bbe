use crate::{output::DELIMITER, Error, Result};
use std::{fs::File, io::Read, path::Path};

/// A talk group as read back from a generated list file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TgEntry {
    pub id: i64,
    pub flag: u8,
    pub count: usize,
    pub name: String,
    pub desc: String,
}

/// A generated list file loaded into memory, in file order.
#[derive(Debug, Clone, Default)]
pub struct TgList {
    entries: Vec<TgEntry>,
}

impl TgList {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Io { path: path.to_owned(), source })?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(DELIMITER)
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(reader);
        let mut entries = Vec::new();
        for record in reader.records() {
            let record = record?;
            let line = record.position().map_or(0, |p| p.line() as usize);
            if record.len() < 5 {
                return Err(Error::InvalidListLine { line, reason: format!("expected 5 fields, found {}", record.len()) });
            }
            let field = |index: usize, what: &str| {
                record[index]
                    .parse::<i64>()
                    .map_err(|_| Error::InvalidListLine { line, reason: format!("invalid {} {:?}", what, &record[index]) })
            };
            entries.push(TgEntry {
                id: field(0, "id")?,
                flag: field(1, "flag")?.try_into().map_err(|_| Error::InvalidListLine {
                    line,
                    reason: format!("flag {:?} out of range", &record[1]),
                })?,
                count: field(2, "count")?.try_into().map_err(|_| Error::InvalidListLine {
                    line,
                    reason: format!("negative count {:?}", &record[2]),
                })?,
                name: record[3].to_owned(),
                desc: record[4].to_owned(),
            });
        }
        Ok(Self { entries })
    }

    /// The first entry with this id.
    pub fn find_by_id(&self, id: i64) -> Option<&TgEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Entries whose name starts with `query`, ignoring case.
    pub fn search(&self, query: &str) -> Vec<&TgEntry> {
        let query = query.to_uppercase();
        self.entries.iter().filter(|entry| entry.name.to_uppercase().starts_with(&query)).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TgEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
