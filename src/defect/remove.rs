use super::error::Error;
use crate::model::snapshot::Snapshot;

/// Removes every particle of molecule `index` from a snapshot.
///
/// The result is a new snapshot with the molecule's particles gone and every
/// present channel copied through the same keep-mask, so the surviving
/// particles keep their values and relative order.
///
/// Molecule ids stay contiguous by rebinding: the output `body` channel is
/// the input `body` channel with the particles of the *largest* id stripped.
/// For snapshots whose molecules are stored in id order and share one size,
/// this shifts every id above `index` down by one, which is how the
/// placement routines use it. Snapshots with molecules of different sizes
/// are rejected with [`Error::MoleculeSizeMismatch`]; use
/// [`remove_molecule_renumbered`] for those.
///
/// # Errors
///
/// [`Error::InvalidIndex`] when no particle belongs to molecule `index`.
pub fn remove_molecule(snapshot: &Snapshot, index: u32) -> Result<Snapshot, Error> {
    let keep = keep_mask(snapshot, index)?;
    let mut particles = snapshot.particles.select(&keep);

    let max = snapshot.max_molecule_id().unwrap_or(index);
    let rebound: Vec<u32> = snapshot
        .particles
        .body
        .iter()
        .copied()
        .filter(|&body| body != max)
        .collect();

    if rebound.len() != particles.count {
        return Err(Error::MoleculeSizeMismatch {
            kept: particles.count,
            rebound: rebound.len(),
        });
    }
    particles.body = rebound;

    log::trace!(
        "Removed molecule {} ({} particles left)",
        index,
        particles.count
    );

    Ok(Snapshot {
        simulation_box: snapshot.simulation_box,
        particles,
        pair_types: snapshot.pair_types.clone(),
    })
}

/// Removes molecule `index` and shifts every larger molecule id down by one.
///
/// Unlike [`remove_molecule`] this keeps each surviving particle attached to
/// its own molecule regardless of storage order or molecule size.
///
/// # Errors
///
/// [`Error::InvalidIndex`] when no particle belongs to molecule `index`.
pub fn remove_molecule_renumbered(snapshot: &Snapshot, index: u32) -> Result<Snapshot, Error> {
    let keep = keep_mask(snapshot, index)?;
    let mut particles = snapshot.particles.select(&keep);

    particles.body = snapshot
        .particles
        .body
        .iter()
        .copied()
        .filter(|&body| body != index)
        .map(|body| if body > index { body - 1 } else { body })
        .collect();

    log::trace!(
        "Removed molecule {} with renumbering ({} particles left)",
        index,
        particles.count
    );

    Ok(Snapshot {
        simulation_box: snapshot.simulation_box,
        particles,
        pair_types: snapshot.pair_types.clone(),
    })
}

fn keep_mask(snapshot: &Snapshot, index: u32) -> Result<Vec<bool>, Error> {
    if !snapshot.has_molecule(index) {
        return Err(Error::invalid_index(index));
    }

    Ok(snapshot
        .particles
        .body
        .iter()
        .map(|&body| body != index)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defect::testing::{crystal, distinct_bodies};
    use crate::model::snapshot::{ParticleData, SimulationBox};

    #[test]
    fn removes_all_particles_of_molecule() {
        let snap = crystal(5, 3);
        let out = remove_molecule(&snap, 2).unwrap();

        assert_eq!(out.particle_count(), 15 - 3);
        assert_eq!(out.particles.body.len(), 12);
        assert_eq!(out.particles.position.as_ref().unwrap().len(), 12);
        assert_eq!(out.particles.mass.as_ref().unwrap().len(), 12);
    }

    #[test]
    fn removing_maximum_id_keeps_ids_contiguous() {
        let snap = crystal(4, 2);
        let out = remove_molecule(&snap, 3).unwrap();

        assert_eq!(distinct_bodies(&out), vec![0, 1, 2]);
        assert_eq!(out.particles.body, vec![0, 0, 1, 1, 2, 2]);
    }

    #[test]
    fn removing_inner_id_shifts_following_molecules_down() {
        let snap = crystal(4, 2);
        let out = remove_molecule(&snap, 1).unwrap();

        assert_eq!(distinct_bodies(&out), vec![0, 1, 2]);
        // particles of former molecules 2 and 3 now carry ids 1 and 2
        let positions = out.particles.position.as_ref().unwrap();
        assert_eq!(positions[2], snap.particles.position.as_ref().unwrap()[4]);
        assert_eq!(out.particles.body[2], 1);
    }

    #[test]
    fn rebinding_relabels_unsorted_storage() {
        let particles = ParticleData::from_bodies(vec!["A".into()], vec![1, 1, 0, 0, 2, 2]);
        let snap = Snapshot::new(SimulationBox::default(), particles);

        let out = remove_molecule(&snap, 0).unwrap();

        // the surviving molecule-2 particles inherit id 0
        assert_eq!(out.particles.body, vec![1, 1, 0, 0]);
        assert_eq!(distinct_bodies(&out), vec![0, 1]);
    }

    #[test]
    fn surviving_channels_preserve_values_and_order() {
        let snap = crystal(3, 2);
        let out = remove_molecule(&snap, 0).unwrap();

        let before = snap.particles.position.as_ref().unwrap();
        let after = out.particles.position.as_ref().unwrap();
        assert_eq!(after.as_slice(), &before[2..]);
        assert_eq!(out.simulation_box, snap.simulation_box);
        assert_eq!(out.particles.types, snap.particles.types);
        assert_eq!(out.pair_types, snap.pair_types);
    }

    #[test]
    fn absent_channels_stay_absent() {
        let snap = crystal(3, 2);
        assert!(snap.particles.velocity.is_none());

        let out = remove_molecule(&snap, 1).unwrap();
        assert!(out.particles.velocity.is_none());
        assert!(out.particles.orientation.is_some());
    }

    #[test]
    fn missing_molecule_is_invalid_index() {
        let snap = crystal(3, 2);
        let err = remove_molecule(&snap, 3).unwrap_err();
        assert!(matches!(err, Error::InvalidIndex { index: 3 }));
    }

    #[test]
    fn input_is_left_untouched() {
        let snap = crystal(3, 2);
        let copy = snap.clone();
        let _ = remove_molecule(&snap, 1).unwrap();
        assert_eq!(snap, copy);
    }

    #[test]
    fn rebinding_rejects_molecules_of_different_sizes() {
        let particles = ParticleData::from_bodies(vec!["A".into()], vec![0, 1, 1, 2]);
        let snap = Snapshot::new(SimulationBox::default(), particles);

        let err = remove_molecule(&snap, 1).unwrap_err();
        assert!(matches!(
            err,
            Error::MoleculeSizeMismatch {
                kept: 2,
                rebound: 3
            }
        ));
    }

    #[test]
    fn renumbered_handles_molecules_of_different_sizes() {
        let particles = ParticleData::from_bodies(vec!["A".into()], vec![0, 1, 1, 2]);
        let snap = Snapshot::new(SimulationBox::default(), particles);

        let out = remove_molecule_renumbered(&snap, 1).unwrap();
        assert_eq!(out.particle_count(), 2);
        assert_eq!(out.particles.body, vec![0, 1]);
    }

    #[test]
    fn renumbered_keeps_unsorted_particles_with_their_molecule() {
        let particles = ParticleData::from_bodies(vec!["A".into()], vec![1, 1, 0, 0, 2, 2]);
        let snap = Snapshot::new(SimulationBox::default(), particles);

        let out = remove_molecule_renumbered(&snap, 0).unwrap();
        assert_eq!(out.particles.body, vec![0, 0, 1, 1]);
    }

    #[test]
    fn renumbered_missing_molecule_is_invalid_index() {
        let snap = crystal(2, 2);
        assert!(matches!(
            remove_molecule_renumbered(&snap, 9),
            Err(Error::InvalidIndex { index: 9 })
        ));
    }
}
