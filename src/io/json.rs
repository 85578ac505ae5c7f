use crate::io::error::Error;
use crate::model::snapshot::Snapshot;
use std::io::{BufRead, Write};

pub fn read<R: BufRead>(reader: R) -> Result<Snapshot, Error> {
    Ok(serde_json::from_reader(reader)?)
}

pub fn write<W: Write>(writer: &mut W, snapshot: &Snapshot) -> Result<(), Error> {
    serde_json::to_writer_pretty(&mut *writer, snapshot)?;
    writeln!(writer)?;
    Ok(())
}
