use super::Format;
use crate::model::snapshot::{Channel, SnapshotError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("failed to parse {format} data: {details} (at line ~{line})")]
    Parse {
        format: Format,
        line: usize,
        details: String,
    },

    #[error("the '{0}' format is not supported for this read operation")]
    UnsupportedReadFormat(Format),

    #[error("the {format} format requires the '{channel}' channel, which the snapshot lacks")]
    MissingChannel { format: Format, channel: Channel },

    #[error("snapshot is inconsistent: {0}")]
    InvalidSnapshot(#[from] SnapshotError),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        if e.is_io() {
            return Error::Io { source: e.into() };
        }
        Error::Parse {
            format: Format::Json,
            line: e.line(),
            details: e.to_string(),
        }
    }
}
