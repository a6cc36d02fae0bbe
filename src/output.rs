use crate::{classify::Class, Error, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::{fs::File, io::Write, path::Path};

/// Field separator of the list file.
pub const DELIMITER: u8 = b';';

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// One line of the generated list: `id;flag;count;name;name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputRecord<'a> {
    pub key: &'a str,
    pub class: Class,
    pub count: usize,
    pub name: &'a str,
}

impl OutputRecord<'_> {
    /// The fields in file order, with all whitespace removed. The name is written twice.
    pub fn fields(&self) -> [String; 5] {
        let name = strip_whitespace(self.name);
        [strip_whitespace(self.key), self.class.to_string(), self.count.to_string(), name.clone(), name]
    }
}

pub fn strip_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, "").into_owned()
}

/// Writes list records one per line, without quoting or a header.
pub struct ListWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl ListWriter<File> {
    /// Create (or truncate) the list file.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| Error::Io { path: path.to_owned(), source })?;
        Ok(Self::from_writer(file))
    }
}

impl<W: Write> ListWriter<W> {
    pub fn from_writer(writer: W) -> Self {
        let writer = csv::WriterBuilder::new()
            .delimiter(DELIMITER)
            .quote_style(csv::QuoteStyle::Never)
            .has_headers(false)
            .from_writer(writer);
        Self { writer }
    }

    pub fn write(&mut self, record: &OutputRecord) -> Result<()> {
        self.writer.write_record(&record.fields())?;
        Ok(())
    }

    /// Flush everything and hand back the underlying writer.
    pub fn finish(self) -> Result<W> {
        self.writer.into_inner().map_err(|e| Error::Write(e.into_error()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(records: &[OutputRecord]) -> String {
        let mut writer = ListWriter::from_writer(Vec::new());
        for record in records {
            writer.write(record).unwrap();
        }
        String::from_utf8(writer.finish().unwrap()).unwrap()
    }

    #[test]
    fn test_record_layout() {
        let record = OutputRecord { key: "4500", class: Class::Reserved, count: 7, name: " Beta" };
        assert_eq!(render(&[record]), "4500;1;7;Beta;Beta\n");
    }

    #[test]
    fn test_whitespace_removed() {
        let record = OutputRecord { key: "262", class: Class::Ordinary, count: 0, name: " Deutsch land\t Nord " };
        let output = render(&[record]);
        assert_eq!(output, "262;0;0;DeutschlandNord;DeutschlandNord\n");
        assert!(!output.trim_end_matches('\n').contains(char::is_whitespace));
    }

    #[test]
    fn test_no_quoting() {
        let record = OutputRecord { key: "31", class: Class::Ordinary, count: 2, name: "US;\"West\"" };
        assert_eq!(render(&[record]), "31;0;2;US;\"West\";US;\"West\"\n");
    }

    #[test]
    fn test_empty_name() {
        let record = OutputRecord { key: "9990", class: Class::Special, count: 0, name: "" };
        assert_eq!(render(&[record]), "9990;2;0;;\n");
    }

    #[test]
    fn test_order_preserved() {
        let records = [
            OutputRecord { key: "5", class: Class::Ordinary, count: 0, name: "b" },
            OutputRecord { key: "1", class: Class::Ordinary, count: 0, name: "a" },
        ];
        assert_eq!(render(&records), "5;0;0;b;b\n1;0;0;a;a\n");
    }
}
