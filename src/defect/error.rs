//! Error types for defect generation.
//!
//! Placement requests fail either because the caller asked for something
//! meaningless (a negative count, an unsupported layer selection) or because
//! the lattice arithmetic landed on a molecule id that does not exist.

use thiserror::Error;

/// Errors that can occur while removing molecules from a snapshot.
#[derive(Debug, Error)]
pub enum Error {
    /// A request parameter is outside its valid domain.
    ///
    /// Raised before any snapshot is allocated.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The requested molecule id has no particles in the snapshot.
    ///
    /// Occurs when the lattice is too small for the requested removal
    /// extent, so the computed ids fall outside the crystal.
    #[error("index {index} does not match a molecule in the snapshot")]
    InvalidIndex {
        /// The molecule id that was requested.
        index: i64,
    },

    /// Molecule ids cannot be rebound because molecules differ in size.
    ///
    /// Rebinding strips the particles of the largest id, which only lines up
    /// with the kept particles when both molecules hold the same number of
    /// particles. Use the renumbering removal for such snapshots.
    #[error(
        "cannot rebind molecule ids: {kept} particles kept but {rebound} ids remain after dropping the largest molecule"
    )]
    MoleculeSizeMismatch {
        /// Particles surviving the removal.
        kept: usize,
        /// Ids left after stripping the largest molecule.
        rebound: usize,
    },

    /// Failed to parse a defect configuration TOML document.
    #[error("failed to parse defect configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl Error {
    /// Creates an [`InvalidArgument`](Error::InvalidArgument) error.
    pub fn invalid_argument(details: impl Into<String>) -> Self {
        Self::InvalidArgument(details.into())
    }

    /// Creates an [`InvalidIndex`](Error::InvalidIndex) error.
    pub fn invalid_index(index: impl Into<i64>) -> Self {
        Self::InvalidIndex {
            index: index.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_index_message() {
        let err = Error::invalid_index(7u32);
        assert_eq!(
            err.to_string(),
            "index 7 does not match a molecule in the snapshot"
        );
    }

    #[test]
    fn invalid_argument_message() {
        let err = Error::invalid_argument("can't remove a negative number of molecules");
        assert_eq!(
            err.to_string(),
            "invalid argument: can't remove a negative number of molecules"
        );
    }
}
