use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crystal_defects::{DefectConfig, Direction, Lattice};

use crate::cli::{DefectArgs, LatticeOptions, PlacementOptions};

/// Builds the defect configuration from `--config` and command-line flags.
///
/// Values from the configuration file are the base; any flag given on the
/// command line overrides the matching field. Without a file, the lattice,
/// direction and removal count must all be given as flags.
pub fn build_defect_config(args: &DefectArgs) -> Result<DefectConfig> {
    let mut config = match &args.config {
        Some(path) => load_config_file(path)?,
        None => base_from_flags(&args.lattice, &args.placement)?,
    };

    apply_overrides(&mut config, &args.lattice, &args.placement);
    Ok(config)
}

fn load_config_file(path: &Path) -> Result<DefectConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    DefectConfig::from_toml(&text)
        .with_context(|| format!("Invalid defect configuration in {}", path.display()))
}

fn base_from_flags(lattice: &LatticeOptions, placement: &PlacementOptions) -> Result<DefectConfig> {
    let (Some(dims), Some(cell_molecules)) = (&lattice.cell_dimensions, lattice.cell_molecules)
    else {
        bail!("Lattice not specified. Use --cell-dimensions X Y and --cell-molecules N, or --config.");
    };
    if placement.direction.is_none() {
        bail!("Defect direction not specified. Use --direction H|V, or --config.");
    }
    if placement.remove.is_none() {
        bail!("Number of molecules to remove not specified. Use --remove N, or --config.");
    }

    Ok(DefectConfig {
        lattice: Lattice::new((dims[0], dims[1]), cell_molecules),
        ..Default::default()
    })
}

fn apply_overrides(
    config: &mut DefectConfig,
    lattice: &LatticeOptions,
    placement: &PlacementOptions,
) {
    if let Some(dims) = &lattice.cell_dimensions {
        config.lattice.cell_dimensions = (dims[0], dims[1]);
    }
    if let Some(cell_molecules) = lattice.cell_molecules {
        config.lattice.cell_molecules = cell_molecules;
    }
    if let Some(direction) = placement.direction {
        config.direction = Direction::from(direction);
    }
    if let Some(remove) = placement.remove {
        config.remove = remove;
    }
    if let Some(layers) = placement.layers {
        config.layers = layers;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::DirectionArg;

    fn lattice(dims: Option<[u32; 2]>, molecules: Option<u32>) -> LatticeOptions {
        LatticeOptions {
            cell_dimensions: dims.map(|d| d.to_vec()),
            cell_molecules: molecules,
        }
    }

    fn placement(direction: Option<DirectionArg>, remove: Option<i64>) -> PlacementOptions {
        PlacementOptions {
            direction,
            remove,
            layers: None,
        }
    }

    #[test]
    fn flags_build_complete_config() {
        let mut config = base_from_flags(
            &lattice(Some([4, 5]), Some(2)),
            &placement(Some(DirectionArg::Horizontal), Some(8)),
        )
        .unwrap();
        apply_overrides(
            &mut config,
            &lattice(Some([4, 5]), Some(2)),
            &placement(Some(DirectionArg::Horizontal), Some(8)),
        );

        assert_eq!(config.lattice, Lattice::new((4, 5), 2));
        assert_eq!(config.direction, Direction::Horizontal);
        assert_eq!(config.remove, 8);
        assert_eq!(config.layers, 1);
    }

    #[test]
    fn missing_lattice_is_reported() {
        let err = base_from_flags(
            &lattice(None, Some(2)),
            &placement(Some(DirectionArg::Vertical), Some(4)),
        )
        .unwrap_err();
        assert!(err.to_string().contains("--cell-dimensions"));
    }

    #[test]
    fn missing_direction_is_reported() {
        let err = base_from_flags(&lattice(Some([2, 2]), Some(1)), &placement(None, Some(4)))
            .unwrap_err();
        assert!(err.to_string().contains("--direction"));
    }

    #[test]
    fn flags_override_file_values() {
        let mut config = DefectConfig::from_toml(
            "direction = \"V\"\nremove = 2\n[lattice]\ncell_dimensions = [4, 5]\ncell_molecules = 1\n",
        )
        .unwrap();
        let mut overrides = placement(Some(DirectionArg::Horizontal), None);
        overrides.layers = Some(2);

        apply_overrides(&mut config, &lattice(None, Some(2)), &overrides);

        assert_eq!(config.direction, Direction::Horizontal);
        assert_eq!(config.remove, 2);
        assert_eq!(config.layers, 2);
        assert_eq!(config.lattice, Lattice::new((4, 5), 2));
    }
}
