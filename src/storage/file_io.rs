//! Record-level file I/O for the dump formats
//!
//! Both on-disk formats are `;`-separated records without a header row. They
//! differ only in the record terminator: `\n` for the per-entity dump files,
//! `|` for the legacy single-file account export. Values containing the
//! delimiter, a double quote or the terminator are written double-quoted;
//! everything else is written verbatim.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{WalletError, WalletResult};

/// Field separator shared by every dump format
pub const FIELD_DELIMITER: u8 = b';';

/// Terminator between records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordTerminator {
    /// One record per line
    Newline,
    /// Records joined by `|` (legacy account export)
    Pipe,
}

impl RecordTerminator {
    fn for_writer(self) -> csv::Terminator {
        match self {
            Self::Newline => csv::Terminator::Any(b'\n'),
            Self::Pipe => csv::Terminator::Any(b'|'),
        }
    }

    fn for_reader(self) -> csv::Terminator {
        match self {
            // Accepts \n, \r\n and \r
            Self::Newline => csv::Terminator::CRLF,
            Self::Pipe => csv::Terminator::Any(b'|'),
        }
    }
}

/// Build a reader for the wallet dump dialect
pub fn dump_reader<R: Read>(source: R, terminator: RecordTerminator) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .delimiter(FIELD_DELIMITER)
        .terminator(terminator.for_reader())
        .has_headers(false)
        .flexible(false)
        .from_reader(source)
}

/// Build a writer for the wallet dump dialect
pub fn dump_writer<W: Write>(sink: W, terminator: RecordTerminator) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .delimiter(FIELD_DELIMITER)
        .terminator(terminator.for_writer())
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(sink)
}

/// Write records to a file, replacing any previous contents
pub fn write_records<T, P>(path: P, records: &[T], terminator: RecordTerminator) -> WalletResult<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let file = File::create(path)
        .map_err(|e| WalletError::Io(format!("Failed to create {}: {}", path.display(), e)))?;

    let mut writer = dump_writer(BufWriter::new(file), terminator);
    for record in records {
        writer.serialize(record).map_err(|e| {
            WalletError::Io(format!("Failed to write record to {}: {}", path.display(), e))
        })?;
    }

    writer
        .flush()
        .map_err(|e| WalletError::Io(format!("Failed to flush {}: {}", path.display(), e)))?;

    Ok(())
}

/// Parse every record from a reader
///
/// `origin` names the source in error messages.
pub fn read_records<T, R>(source: R, origin: &Path, terminator: RecordTerminator) -> WalletResult<Vec<T>>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut reader = dump_reader(source, terminator);
    let mut records = Vec::new();

    for (index, result) in reader.deserialize().enumerate() {
        let record = result.map_err(|e| {
            if e.is_io_error() {
                WalletError::Io(format!("Failed to read {}: {}", origin.display(), e))
            } else {
                WalletError::Dump(format!(
                    "Failed to parse record {} of {}: {}",
                    index + 1,
                    origin.display(),
                    e
                ))
            }
        })?;
        records.push(record);
    }

    Ok(records)
}
