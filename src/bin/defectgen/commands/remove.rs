use std::io;

use anyhow::{Context as _, Result};

use crystal_defects::{remove_molecule, remove_molecule_renumbered};

use super::{read_snapshot, resolve_input_format, resolve_output_format, write_snapshot};
use crate::cli::RemoveArgs;
use crate::display::{Context, Progress, print_structure_info};
use crate::io::display_name;
use crate::util::text::plural;

const TOTAL_STEPS: u8 = 3;

pub fn run_remove(args: RemoveArgs, ctx: Context) -> Result<()> {
    let input = args.io.input.as_deref();
    let output = args.io.output.as_deref();
    let input_format = resolve_input_format(input, args.io.input_format)?;
    let output_format = resolve_output_format(&args.io)?;

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading snapshot");
    let snapshot = read_snapshot(input, input_format)?;
    progress.complete_step(
        "Reading snapshot",
        &[format!(
            "Parse {input_format} ← {}",
            display_name(input, "stdin")
        )],
    );

    progress.step("Removing molecule");
    let dropped = snapshot.molecule_size(args.molecule);
    let (reduced, detail) = if args.renumber {
        (
            remove_molecule_renumbered(&snapshot, args.molecule),
            format!("Shift ids above {} down by one", args.molecule),
        )
    } else {
        (
            remove_molecule(&snapshot, args.molecule),
            "Rebind the largest id to the freed slot".to_string(),
        )
    };
    let reduced =
        reduced.with_context(|| format!("Failed to remove molecule {}", args.molecule))?;
    progress.complete_step(
        "Removing molecule",
        &[
            format!(
                "Drop {} of molecule {}",
                plural(dropped, "particle"),
                args.molecule
            ),
            detail,
        ],
    );

    if ctx.interactive {
        print_structure_info(&mut io::stderr(), "Output Snapshot", &reduced);
    }

    progress.step("Writing snapshot");
    write_snapshot(output, output_format, &reduced)?;
    progress.complete_step(
        "Writing snapshot",
        &[format!(
            "Write {output_format} → {}",
            display_name(output, "stdout")
        )],
    );

    progress.finish(&format!("Molecule {} removed", args.molecule));

    Ok(())
}
