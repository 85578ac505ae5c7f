//! Controlled structural defects in molecular crystal snapshots.
//!
//! Starting from a particle snapshot of a crystal built from rigid
//! multi-particle molecules, this crate removes whole molecules along lines
//! or unit cells centered on the lattice, keeping the particle arrays and
//! molecule numbering consistent so the result can go straight back into a
//! molecular-dynamics engine.
//!
//! # Features
//!
//! - **Molecule removal** — Drop every particle of one rigid body while
//!   keeping molecule ids contiguous
//! - **Lattice center** — Locate the central molecule from the unit-cell grid
//! - **Line defects** — Vertical and horizontal lines of vacancies through the
//!   crystal center
//! - **Unit-cell defects** — Remove whole unit cells so neighbouring layers
//!   can close up
//! - **Snapshot I/O** — JSON snapshots and extended XYZ output
//!
//! # Quick Start
//!
//! ```
//! use crystal_defects::{Lattice, ParticleData, SimulationBox, Snapshot};
//! use crystal_defects::{DefectError, remove_vertical};
//!
//! // 20 trimers stored in molecule order on a 4 × 5 lattice, one per cell
//! let body: Vec<u32> = (0..20).flat_map(|m| [m, m, m]).collect();
//! let particles = ParticleData::from_bodies(vec!["A".into()], body);
//! let snapshot = Snapshot::new(SimulationBox::orthorhombic(8.0, 10.0, 1.0), particles);
//!
//! let lattice = Lattice::new((4, 5), 1);
//! assert_eq!(lattice.central_molecule(), 12);
//!
//! // Four molecules in the layer just below the center
//! let defected = remove_vertical(&snapshot, 4, &lattice)?;
//! assert_eq!(defected.particle_count(), 48);
//! assert_eq!(defected.molecule_count(), 16);
//!
//! // The input is never modified
//! assert_eq!(snapshot.particle_count(), 60);
//! # Ok::<(), DefectError>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`] — Reading and writing snapshots
//! - [`pipeline`] — Hand-off to an external equilibration engine
//! - [`create_defect`] — Dispatch a [`DefectConfig`] to its placement routine
//!
//! # Data Types
//!
//! - [`Snapshot`] — Box, per-particle channels and molecule membership
//! - [`ParticleData`] — Per-particle channels, each optional except `body`
//! - [`Channel`] — Names of the per-particle channels
//! - [`SimulationBox`] — Periodic cell geometry
//! - [`Lattice`] — Unit-cell layout of the crystal
//!
//! # Defect Operations
//!
//! - [`remove_molecule`] — Remove one molecule, rebinding the largest id
//! - [`remove_molecule_renumbered`] — Remove one molecule, shifting larger ids
//! - [`central_molecule`] — Index of the molecule at the crystal center
//! - [`remove_vertical`] / [`vertical_plan`] — Vertical line of molecules
//! - [`remove_horizontal`] / [`horizontal_plan`] — Horizontal line of molecules
//! - [`remove_vertical_cell`] / [`vertical_cell_plan`] — Whole unit cells

mod defect;
mod model;

pub mod io;
pub mod pipeline;

pub use model::lattice::Lattice;
pub use model::snapshot::{Channel, ParticleData, SimulationBox, Snapshot, SnapshotError};

pub use defect::{
    DefectConfig, DefectKind, Direction, ParseDirectionError, central_molecule, create_defect,
    horizontal_plan, plan_defect, remove_horizontal, remove_molecule, remove_molecule_renumbered,
    remove_vertical, remove_vertical_cell, vertical_cell_plan, vertical_plan,
};

pub use defect::Error as DefectError;
