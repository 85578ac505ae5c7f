//! Hand-off of a defected snapshot to a simulation engine.
//!
//! The engine itself lives outside this crate. Anything that can bring a
//! snapshot to temperature and then equilibrate it as a crystal implements
//! [`Equilibrator`], and [`run_simulation`] drives the two stages in order.

use crate::model::snapshot::Snapshot;

/// A simulation engine able to relax a snapshot.
pub trait Equilibrator {
    /// Engine-specific failure.
    type Error;

    /// Assigns velocities at the target temperature.
    fn thermalise(&mut self, snapshot: Snapshot) -> Result<Snapshot, Self::Error>;

    /// Runs the crystal equilibration and returns the final configuration.
    fn equilibrate(&mut self, snapshot: Snapshot) -> Result<Snapshot, Self::Error>;
}

/// Thermalises and then equilibrates `snapshot` with `engine`.
pub fn run_simulation<E: Equilibrator>(
    snapshot: Snapshot,
    engine: &mut E,
) -> Result<Snapshot, E::Error> {
    log::info!(
        "Equilibrating snapshot with {} particles",
        snapshot.particle_count()
    );
    let thermalised = engine.thermalise(snapshot)?;
    engine.equilibrate(thermalised)
}
