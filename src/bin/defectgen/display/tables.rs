use std::io::Write;

use crystal_defects::{DefectConfig, DefectKind, Snapshot};

use crate::util::text::{id_ranges, plural, truncate, wrap};

const INDENT: &str = "      ";

const KEY_W: usize = 18;
const VAL_W: usize = 34;

pub fn print_structure_info(out: &mut impl Write, title: &str, snapshot: &Snapshot) {
    let b = &snapshot.simulation_box;
    let channels: Vec<&str> = snapshot
        .particles
        .present_channels()
        .into_iter()
        .map(|c| c.name())
        .collect();

    let mut rows = vec![
        ("Particles", snapshot.particle_count().to_string()),
        ("Molecules", snapshot.molecule_count().to_string()),
        (
            "Largest molecule id",
            snapshot
                .max_molecule_id()
                .map_or_else(|| "—".to_string(), |id| id.to_string()),
        ),
        ("Particle types", snapshot.particles.types.join(", ")),
        ("Box (L)", format!("{:.3} × {:.3} × {:.3}", b.lx, b.ly, b.lz)),
    ];
    if b.is_triclinic() {
        rows.push((
            "Tilt (xy xz yz)",
            format!("{:.3} {:.3} {:.3}", b.xy, b.xz, b.yz),
        ));
    }
    rows.push(("Channels", channels.join(", ")));

    print_kv_table(out, title, &rows);
}

pub fn print_defect_summary(
    out: &mut impl Write,
    kind: DefectKind,
    before: &Snapshot,
    after: &Snapshot,
) {
    let removed_molecules = before.molecule_count() - after.molecule_count();
    let removed_particles = before.particle_count() - after.particle_count();

    let rows = vec![
        ("Defect", kind.to_string()),
        ("Molecules removed", plural(removed_molecules, "molecule")),
        ("Particles removed", plural(removed_particles, "particle")),
        (
            "Particles",
            format!("{} → {}", before.particle_count(), after.particle_count()),
        ),
        (
            "Molecules",
            format!("{} → {}", before.molecule_count(), after.molecule_count()),
        ),
    ];

    print_kv_table(out, "Defect Summary", &rows);
}

pub fn print_removal_plan(out: &mut impl Write, config: &DefectConfig, plan: &[i64]) {
    let (x, y) = config.lattice.cell_dimensions;
    let ids = id_ranges(plan);

    let mut rows = vec![
        ("Lattice", format!("{x} × {y} cells")),
        (
            "Per cell",
            plural(config.lattice.cell_molecules as usize, "molecule"),
        ),
        (
            "Central molecule",
            config.lattice.central_molecule().to_string(),
        ),
        ("Removals", plural(plan.len(), "molecule")),
    ];
    for (i, line) in wrap(&ids, VAL_W).into_iter().enumerate() {
        rows.push((if i == 0 { "Molecule ids" } else { "" }, line));
    }

    print_kv_table(out, "Removal Plan", &rows);
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let k_line = "─".repeat(KEY_W + 2);
    let v_line = "─".repeat(VAL_W + 2);

    let _ = writeln!(out, "{}┌─ {} ─┐", INDENT, truncate(title, KEY_W + VAL_W));
    let _ = writeln!(out, "{INDENT}┌{k_line}┬{v_line}┐");

    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{}│ {:<KEY_W$} │ {:>VAL_W$} │",
            INDENT,
            truncate(key, KEY_W),
            truncate(val, VAL_W),
        );
    }

    let _ = writeln!(out, "{INDENT}└{k_line}┴{v_line}┘");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crystal_defects::{Lattice, ParticleData, SimulationBox};

    fn snapshot(molecules: u32) -> Snapshot {
        let body = (0..molecules).flat_map(|m| [m, m]).collect();
        Snapshot::new(
            SimulationBox::orthorhombic(2.0, 3.0, 1.0),
            ParticleData::from_bodies(vec!["A".into()], body),
        )
    }

    fn render(f: impl FnOnce(&mut Vec<u8>)) -> String {
        let mut buffer = Vec::new();
        f(&mut buffer);
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn structure_info_lists_counts() {
        let text = render(|out| print_structure_info(out, "Input", &snapshot(3)));
        assert!(text.contains("Input"));
        assert!(text.contains("Particles"));
        assert!(text.contains(" 6 │"));
        assert!(text.contains("body"));
        assert!(!text.contains("Tilt"));
    }

    #[test]
    fn defect_summary_reports_removed_molecules() {
        let text = render(|out| {
            print_defect_summary(out, DefectKind::VerticalLine, &snapshot(5), &snapshot(3))
        });
        assert!(text.contains("vertical line"));
        assert!(text.contains("2 molecules"));
        assert!(text.contains("4 particles"));
        assert!(text.contains("10 → 6"));
    }

    #[test]
    fn removal_plan_shows_ids() {
        let config = DefectConfig {
            lattice: Lattice::new((4, 5), 1),
            remove: 4,
            ..Default::default()
        };
        let text = render(|out| print_removal_plan(out, &config, &[8, 9, 10, 11]));
        assert!(text.contains("8–11"));
        assert!(text.contains("Central molecule"));
        assert!(text.contains(" 12 │"));
    }
}
