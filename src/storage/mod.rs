//! Storage layer for the wallet ledger
//!
//! Flat-file persistence in two `;`-separated text formats: the directory
//! dump of every entity and the legacy single-file account export.

pub mod dump;
pub mod file_io;
pub mod legacy;

pub use dump::{read_dump_file, write_dump, DumpFile, DumpPaths};
pub use file_io::{read_records, write_records, RecordTerminator};
