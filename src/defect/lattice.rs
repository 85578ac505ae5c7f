use crate::model::lattice::Lattice;

/// Index of the molecule closest to the center of the crystal.
///
/// Takes the unit cell halfway along each axis and scales by the molecules
/// per cell: `floor((x/2 * y + y/2) * cell_molecules)`. The halves are taken
/// in floating point and the product is floored once, so odd cell counts
/// land on a stable central molecule instead of drifting toward the origin.
pub fn central_molecule(cell_dimensions: (u32, u32), cell_molecules: u32) -> i64 {
    let (x, y) = cell_dimensions;
    let (x, y, m) = (f64::from(x), f64::from(y), f64::from(cell_molecules));
    ((x / 2.0 * y + y / 2.0) * m).floor() as i64
}

impl Lattice {
    /// See [`central_molecule`].
    #[inline]
    pub fn central_molecule(&self) -> i64 {
        central_molecule(self.cell_dimensions, self.cell_molecules)
    }
}
