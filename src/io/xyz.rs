use crate::io::{Format, error::Error};
use crate::model::snapshot::{Channel, Snapshot};
use std::io::Write;

const FALLBACK_SPECIES: &str = "X";

/// Writes an extended XYZ frame with a `body` column per particle.
pub fn write<W: Write>(writer: &mut W, snapshot: &Snapshot) -> Result<(), Error> {
    let particles = &snapshot.particles;
    let positions = particles
        .position
        .as_ref()
        .ok_or(Error::MissingChannel {
            format: Format::Xyz,
            channel: Channel::Position,
        })?;

    let b = &snapshot.simulation_box;
    writeln!(writer, "{}", particles.count)?;
    writeln!(
        writer,
        "Lattice=\"{:.6} 0 0 {:.6} {:.6} 0 {:.6} {:.6} {:.6}\" Properties=species:S:1:pos:R:3:body:I:1",
        b.lx,
        b.xy * b.ly,
        b.ly,
        b.xz * b.lz,
        b.yz * b.lz,
        b.lz
    )?;

    for (i, (position, body)) in positions.iter().zip(&particles.body).enumerate() {
        writeln!(
            writer,
            "{:<4} {:>12.6} {:>12.6} {:>12.6} {:>6}",
            species(snapshot, i),
            position[0],
            position[1],
            position[2],
            body
        )?;
    }

    Ok(())
}

fn species(snapshot: &Snapshot, particle: usize) -> &str {
    let particles = &snapshot.particles;
    let type_id = particles
        .type_id
        .as_ref()
        .and_then(|ids| ids.get(particle))
        .copied()
        .unwrap_or(0);

    particles
        .types
        .get(type_id as usize)
        .map(String::as_str)
        .unwrap_or(FALLBACK_SPECIES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::snapshot::{ParticleData, SimulationBox};

    fn dimer() -> Snapshot {
        let mut particles = ParticleData::from_bodies(vec!["A".into(), "B".into()], vec![0, 0]);
        particles.position = Some(vec![[0.0, 0.0, 0.0], [1.0, 0.5, 0.0]]);
        particles.type_id = Some(vec![0, 1]);
        Snapshot::new(SimulationBox::orthorhombic(4.0, 5.0, 1.0), particles)
    }

    fn render(snapshot: &Snapshot) -> String {
        let mut buffer = Vec::new();
        write(&mut buffer, snapshot).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn writes_count_lattice_and_rows() {
        let text = render(&dimer());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "2");
        assert!(lines[1].starts_with("Lattice=\"4.000000 0 0 0.000000 5.000000 0"));
        assert!(lines[1].ends_with("Properties=species:S:1:pos:R:3:body:I:1"));

        let fields: Vec<&str> = lines[3].split_whitespace().collect();
        assert_eq!(fields, vec!["B", "1.000000", "0.500000", "0.000000", "0"]);
    }

    #[test]
    fn missing_types_fall_back() {
        let mut snapshot = dimer();
        snapshot.particles.types.clear();
        snapshot.particles.type_id = None;

        let text = render(&snapshot);
        assert!(text.lines().nth(2).unwrap().starts_with("X "));
    }

    #[test]
    fn positions_are_required() {
        let mut snapshot = dimer();
        snapshot.particles.position = None;

        let mut buffer = Vec::new();
        let err = write(&mut buffer, &snapshot).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingChannel {
                format: Format::Xyz,
                channel: Channel::Position
            }
        ));
    }
}
