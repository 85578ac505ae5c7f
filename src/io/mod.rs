//! Reading and writing snapshots.
//!
//! Snapshots are exchanged as JSON documents mirroring [`Snapshot`]. Reading
//! validates the structural invariants before a snapshot is handed to the
//! defect routines. Extended XYZ output is available for visual inspection
//! and cannot be read back.
//!
//! ```
//! use std::io::Cursor;
//! use crystal_defects::io::{Format, SnapshotReader, SnapshotWriter};
//!
//! let json = r#"{
//!     "simulation_box": { "lx": 10.0, "ly": 10.0, "lz": 1.0 },
//!     "particles": {
//!         "count": 4,
//!         "types": ["A"],
//!         "body": [0, 0, 1, 1],
//!         "position": [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 2.0, 0.0], [1.0, 2.0, 0.0]]
//!     }
//! }"#;
//!
//! let snapshot = SnapshotReader::new(Cursor::new(json), Format::Json).read()?;
//! assert_eq!(snapshot.molecule_count(), 2);
//!
//! let mut out = Vec::new();
//! SnapshotWriter::new(&mut out, Format::Xyz).write(&snapshot)?;
//! assert!(String::from_utf8(out).unwrap().starts_with("4\n"));
//! # Ok::<(), crystal_defects::io::Error>(())
//! ```
//!
//! [`Snapshot`]: crate::Snapshot

use std::fmt;
use std::io::{BufRead, Write};

pub mod error;

mod json;
mod xyz;

pub use error::Error;

use crate::model::snapshot::Snapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Xyz,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Json => write!(f, "JSON"),
            Format::Xyz => write!(f, "XYZ"),
        }
    }
}

pub struct SnapshotReader<R> {
    reader: R,
    format: Format,
}

impl<R: BufRead> SnapshotReader<R> {
    pub fn new(reader: R, format: Format) -> Self {
        Self { reader, format }
    }

    /// Parses the input and checks the snapshot invariants.
    pub fn read(self) -> Result<Snapshot, Error> {
        let snapshot = match self.format {
            Format::Json => json::read(self.reader)?,
            Format::Xyz => return Err(Error::UnsupportedReadFormat(self.format)),
        };
        snapshot.validate()?;
        Ok(snapshot)
    }
}

pub struct SnapshotWriter<W> {
    writer: W,
    format: Format,
}

impl<W: Write> SnapshotWriter<W> {
    pub fn new(writer: W, format: Format) -> Self {
        Self { writer, format }
    }

    pub fn write(mut self, snapshot: &Snapshot) -> Result<(), Error> {
        match self.format {
            Format::Json => json::write(&mut self.writer, snapshot)?,
            Format::Xyz => xyz::write(&mut self.writer, snapshot)?,
        }
        self.writer.flush()?;
        Ok(())
    }
}
