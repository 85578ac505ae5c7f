use std::io::{self, Write};

use anyhow::{Context as _, Result};

use crystal_defects::{DefectConfig, create_defect, plan_defect};

use super::{read_snapshot, resolve_input_format, resolve_output_format, write_snapshot};
use crate::cli::DefectArgs;
use crate::config::build_defect_config;
use crate::display::{
    Context, Progress, print_defect_summary, print_removal_plan, print_structure_info,
};
use crate::io::display_name;
use crate::util::text::{id_ranges, plural};

const TOTAL_STEPS: u8 = 3;

pub fn run_defect(args: DefectArgs, ctx: Context) -> Result<()> {
    let config = build_defect_config(&args)?;
    let kind = config.kind()?;
    let plan = plan_defect(&config).context("Invalid defect placement")?;

    if args.dry_run {
        let mut stdout = io::stdout().lock();
        print_removal_plan(&mut stdout, &config, &plan);
        stdout.flush()?;
        return Ok(());
    }

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

    if ctx.interactive {
        print_structure_info(&mut io::stderr(), "Input Snapshot", &snapshot);
    }

    progress.step("Creating defect");
    let defected = create_defect(&snapshot, &config).context("Defect generation failed")?;
    progress.complete_step("Creating defect", &defect_substeps(&config, &plan));

    if ctx.interactive {
        print_defect_summary(&mut io::stderr(), kind, &snapshot, &defected);
    }

    progress.step("Writing snapshot");
    write_snapshot(output, output_format, &defected)?;
    progress.complete_step(
        "Writing snapshot",
        &[format!(
            "Write {output_format} → {}",
            display_name(output, "stdout")
        )],
    );

    progress.finish(&format!("{} removed", plural(plan.len(), "molecule")));

    Ok(())
}

fn defect_substeps(config: &DefectConfig, plan: &[i64]) -> Vec<String> {
    let (x, y) = config.lattice.cell_dimensions;
    vec![
        format!(
            "Center on molecule {} of a {x} × {y} lattice",
            config.lattice.central_molecule()
        ),
        format!("Remove molecules {}", id_ranges(plan)),
    ]
}
