use crate::model::snapshot::{ParticleData, SimulationBox, Snapshot};

/// A crystal of `molecules` rigid bodies with `per_molecule` particles each,
/// stored in molecule order. Velocities are left absent.
pub fn crystal(molecules: u32, per_molecule: usize) -> Snapshot {
    let body: Vec<u32> = (0..molecules)
        .flat_map(|m| std::iter::repeat_n(m, per_molecule))
        .collect();
    let count = body.len();

    let mut particles = ParticleData::from_bodies(vec!["A".into(), "B".into()], body);
    particles.position = Some(
        (0..count)
            .map(|i| [i as f64 * 0.5, (i / per_molecule) as f64, 0.0])
            .collect(),
    );
    particles.orientation = Some(vec![[1.0, 0.0, 0.0, 0.0]; count]);
    particles.mass = Some((0..count).map(|i| 1.0 + (i % per_molecule) as f64).collect());
    particles.type_id = Some(
        (0..count)
            .map(|i| u32::from(i % per_molecule != 0))
            .collect(),
    );

    let mut snapshot = Snapshot::new(SimulationBox::orthorhombic(20.0, 20.0, 1.0), particles);
    snapshot.pair_types = vec!["A-B".into()];
    snapshot
}

pub fn distinct_bodies(snapshot: &Snapshot) -> Vec<u32> {
    snapshot.molecule_ids().into_iter().collect()
}
