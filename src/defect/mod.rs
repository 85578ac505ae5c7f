mod config;
mod error;
mod lattice;
mod placement;
mod remove;

#[cfg(test)]
mod testing;

pub use config::{DefectConfig, DefectKind, Direction, ParseDirectionError};
pub use error::Error;
pub use lattice::central_molecule;
pub use placement::{
    horizontal_plan, remove_horizontal, remove_vertical, remove_vertical_cell, vertical_cell_plan,
    vertical_plan,
};
pub use remove::{remove_molecule, remove_molecule_renumbered};

use crate::model::snapshot::Snapshot;

pub fn create_defect(snapshot: &Snapshot, config: &DefectConfig) -> Result<Snapshot, Error> {
    let kind = config.kind()?;
    log::info!(
        "Creating {} defect (remove {}, lattice {}x{}, {} molecules per cell)",
        kind,
        config.remove,
        config.lattice.cell_dimensions.0,
        config.lattice.cell_dimensions.1,
        config.lattice.cell_molecules
    );

    match kind {
        DefectKind::HorizontalLine => remove_horizontal(snapshot, config.remove, &config.lattice),
        DefectKind::VerticalLine => remove_vertical(snapshot, config.remove, &config.lattice),
        DefectKind::VerticalCell => remove_vertical_cell(snapshot, config.remove, &config.lattice),
    }
}

pub fn plan_defect(config: &DefectConfig) -> Result<Vec<i64>, Error> {
    match config.kind()? {
        DefectKind::HorizontalLine => horizontal_plan(config.remove, &config.lattice),
        DefectKind::VerticalLine => vertical_plan(config.remove, &config.lattice),
        DefectKind::VerticalCell => vertical_cell_plan(config.remove, &config.lattice),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::lattice::Lattice;
    use super::testing::crystal;

    fn config(direction: Direction, layers: u8, remove: i64) -> DefectConfig {
        DefectConfig {
            direction,
            layers,
            remove,
            lattice: Lattice::new((4, 5), 1),
        }
    }

    #[test]
    fn dispatches_vertical_line() {
        let snap = crystal(20, 3);
        let out = create_defect(&snap, &config(Direction::Vertical, 1, 4)).unwrap();
        assert_eq!(out, remove_vertical(&snap, 4, &Lattice::new((4, 5), 1)).unwrap());
        assert_eq!(out.molecule_count(), 16);
    }

    #[test]
    fn dispatches_vertical_cell() {
        let snap = crystal(20, 3);
        let out = create_defect(&snap, &config(Direction::Vertical, 2, 2)).unwrap();
        assert_eq!(out.molecule_count(), 16);
        assert_eq!(plan_defect(&config(Direction::Vertical, 2, 2)).unwrap(), vec![8, 10, 9, 10]);
    }

    #[test]
    fn dispatches_horizontal_ignoring_layers() {
        let snap = crystal(40, 2);
        let cfg = DefectConfig {
            lattice: Lattice::new((4, 4), 2),
            ..config(Direction::Horizontal, 2, 4)
        };
        let out = create_defect(&snap, &cfg).unwrap();
        assert_eq!(out.molecule_count(), 36);
        assert_eq!(plan_defect(&cfg).unwrap(), vec![12, 14, 18, 20]);
    }

    #[test]
    fn unsupported_layers_fail_before_removal() {
        let snap = crystal(20, 3);
        let err = create_defect(&snap, &config(Direction::Vertical, 0, 4)).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }
}
