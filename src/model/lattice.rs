use serde::{Deserialize, Serialize};

/// Unit-cell layout of the crystal a snapshot was built from.
///
/// `cell_dimensions` counts unit cells along the two lattice axes and
/// `cell_molecules` the molecules in each cell. All three values are expected
/// to be positive; this is not checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lattice {
    pub cell_dimensions: (u32, u32),
    pub cell_molecules: u32,
}

impl Lattice {
    pub fn new(cell_dimensions: (u32, u32), cell_molecules: u32) -> Self {
        Self {
            cell_dimensions,
            cell_molecules,
        }
    }

    /// Total molecules in a perfect crystal of this layout.
    #[inline]
    pub fn molecule_capacity(&self) -> u64 {
        let (x, y) = self.cell_dimensions;
        u64::from(x) * u64::from(y) * u64::from(self.cell_molecules)
    }

    /// Cells along the second lattice axis, the stride between columns.
    #[inline]
    pub fn rows(&self) -> u32 {
        self.cell_dimensions.1
    }
}

impl Default for Lattice {
    fn default() -> Self {
        Self::new((1, 1), 1)
    }
}
