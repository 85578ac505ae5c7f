//! Configuration types selecting which defect to create.
//!
//! - [`DefectConfig`] — Main configuration struct
//! - [`Direction`] — Orientation of the removed line
//! - [`DefectKind`] — Placement routine resolved from direction and layers

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::error::Error;
use crate::model::lattice::Lattice;

/// Orientation of a line defect relative to the crystal axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum Direction {
    #[serde(rename = "H", alias = "h", alias = "horizontal")]
    Horizontal,
    #[default]
    #[serde(rename = "V", alias = "v", alias = "vertical")]
    Vertical,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Horizontal => write!(f, "H"),
            Direction::Vertical => write!(f, "V"),
        }
    }
}

/// Error returned when a direction string is neither `H` nor `V`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid defect direction: '{0}' (expected H or V)")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "h" | "horizontal" => Ok(Direction::Horizontal),
            "v" | "vertical" => Ok(Direction::Vertical),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

/// The placement routine a configuration resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefectKind {
    /// A horizontal line, see [`remove_horizontal`](crate::remove_horizontal).
    HorizontalLine,
    /// A single vertical layer, see [`remove_vertical`](crate::remove_vertical).
    VerticalLine,
    /// Whole vertical unit cells, see
    /// [`remove_vertical_cell`](crate::remove_vertical_cell).
    VerticalCell,
}

impl DefectKind {
    /// Resolves a direction and layer count to a placement routine.
    ///
    /// Horizontal defects ignore `layers`. Vertical defects take one layer
    /// (a line) or two layers (whole unit cells).
    pub fn select(direction: Direction, layers: u8) -> Result<Self, Error> {
        match (direction, layers) {
            (Direction::Horizontal, _) => Ok(DefectKind::HorizontalLine),
            (Direction::Vertical, 1) => Ok(DefectKind::VerticalLine),
            (Direction::Vertical, 2) => Ok(DefectKind::VerticalCell),
            (Direction::Vertical, n) => Err(Error::invalid_argument(format!(
                "vertical defects remove 1 or 2 layers, got {n}"
            ))),
        }
    }
}

impl fmt::Display for DefectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefectKind::HorizontalLine => write!(f, "horizontal line"),
            DefectKind::VerticalLine => write!(f, "vertical line"),
            DefectKind::VerticalCell => write!(f, "vertical unit cell"),
        }
    }
}

/// Configuration for [`create_defect`](super::create_defect).
///
/// # Examples
///
/// ```
/// use crystal_defects::{DefectConfig, Direction, Lattice};
///
/// let config = DefectConfig::from_toml(
///     r#"
///     direction = "H"
///     remove = 8
///
///     [lattice]
///     cell_dimensions = [8, 8]
///     cell_molecules = 2
///     "#,
/// )?;
///
/// assert_eq!(config.direction, Direction::Horizontal);
/// assert_eq!(config.layers, 1);
/// assert_eq!(config.lattice, Lattice::new((8, 8), 2));
/// # Ok::<(), crystal_defects::DefectError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DefectConfig {
    /// Orientation of the defect.
    #[serde(default)]
    pub direction: Direction,

    /// Number of layers removed by a vertical defect (1 or 2).
    #[serde(default = "default_layers")]
    pub layers: u8,

    /// Molecules (or unit cells for two-layer vertical defects) to remove.
    #[serde(default)]
    pub remove: i64,

    /// Unit-cell layout of the crystal.
    pub lattice: Lattice,
}

fn default_layers() -> u8 {
    1
}

impl Default for DefectConfig {
    fn default() -> Self {
        Self {
            direction: Direction::default(),
            layers: default_layers(),
            remove: 0,
            lattice: Lattice::default(),
        }
    }
}

impl DefectConfig {
    /// Parses a configuration from a TOML document.
    pub fn from_toml(toml: &str) -> Result<Self, Error> {
        Ok(toml::from_str(toml)?)
    }

    /// The placement routine this configuration selects.
    pub fn kind(&self) -> Result<DefectKind, Error> {
        DefectKind::select(self.direction, self.layers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = DefectConfig::default();
        assert_eq!(config.direction, Direction::Vertical);
        assert_eq!(config.layers, 1);
        assert_eq!(config.remove, 0);
        assert_eq!(config.lattice, Lattice::new((1, 1), 1));
    }

    #[test]
    fn direction_from_str() {
        assert_eq!("H".parse::<Direction>().unwrap(), Direction::Horizontal);
        assert_eq!("v".parse::<Direction>().unwrap(), Direction::Vertical);
        assert_eq!(
            "Horizontal".parse::<Direction>().unwrap(),
            Direction::Horizontal
        );
        let err = "X".parse::<Direction>().unwrap_err();
        assert_eq!(err.to_string(), "invalid defect direction: 'X' (expected H or V)");
    }

    #[test]
    fn kind_selection_table() {
        use DefectKind::*;
        assert_eq!(DefectKind::select(Direction::Horizontal, 1).unwrap(), HorizontalLine);
        assert_eq!(DefectKind::select(Direction::Horizontal, 2).unwrap(), HorizontalLine);
        assert_eq!(DefectKind::select(Direction::Vertical, 1).unwrap(), VerticalLine);
        assert_eq!(DefectKind::select(Direction::Vertical, 2).unwrap(), VerticalCell);
        assert!(matches!(
            DefectKind::select(Direction::Vertical, 3),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn parse_full_toml() {
        let config = DefectConfig::from_toml(
            r#"
            direction = "vertical"
            layers = 2
            remove = 3

            [lattice]
            cell_dimensions = [4, 5]
            cell_molecules = 1
            "#,
        )
        .unwrap();

        assert_eq!(config.direction, Direction::Vertical);
        assert_eq!(config.kind().unwrap(), DefectKind::VerticalCell);
        assert_eq!(config.remove, 3);
        assert_eq!(config.lattice.cell_dimensions, (4, 5));
    }

    #[test]
    fn parse_rejects_missing_lattice() {
        let err = DefectConfig::from_toml("direction = \"H\"").unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn parse_rejects_unknown_direction() {
        let err = DefectConfig::from_toml(
            "direction = \"diagonal\"\n[lattice]\ncell_dimensions = [1, 1]\ncell_molecules = 1\n",
        )
        .unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }
}
