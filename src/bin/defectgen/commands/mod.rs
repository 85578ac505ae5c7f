mod defect;
mod info;
mod remove;

use defect::run_defect;
use info::run_info;
use remove::run_remove;

use std::path::Path;

use anyhow::{Context as _, Result, bail};

use crystal_defects::Snapshot;
use crystal_defects::io::{Format, SnapshotReader, SnapshotWriter};

use crate::cli::{Command, InputFormat, IoOptions};
use crate::display::Context;
use crate::io::{
    create_output, infer_input_format, infer_output_format, open_input, stdin_is_tty,
    stdout_is_tty,
};

pub fn dispatch(command: Command, ctx: Context) -> Result<()> {
    match command {
        Command::Defect(args) => run_defect(args, ctx),
        Command::Remove(args) => run_remove(args, ctx),
        Command::Info(args) => run_info(args, ctx),
    }
}

fn resolve_input_format(input: Option<&Path>, explicit: Option<InputFormat>) -> Result<Format> {
    if input.is_none() && stdin_is_tty() {
        bail!(
            "No input file specified and stdin is a terminal.\n\nUse -i <FILE> or pipe a snapshot via stdin."
        );
    }

    if let Some(fmt) = explicit {
        return Ok(fmt.into());
    }

    match input {
        Some(path) => infer_input_format(path).with_context(|| {
            format!(
                "Cannot infer format from '{}'. Use --infmt to specify.",
                path.display()
            )
        }),
        None => bail!("Reading from stdin requires --infmt"),
    }
}

fn resolve_output_format(io: &IoOptions) -> Result<Format> {
    if io.output.is_none() && stdout_is_tty() {
        bail!(
            "No output file specified and stdout is a terminal.\n\nUse -o <FILE> or redirect stdout."
        );
    }

    if let Some(fmt) = io.output_format {
        return Ok(fmt.into());
    }

    match &io.output {
        Some(path) => infer_output_format(path).with_context(|| {
            format!(
                "Cannot infer format from '{}'. Use --outfmt to specify.",
                path.display()
            )
        }),
        None => Ok(Format::Json),
    }
}

fn read_snapshot(input: Option<&Path>, format: Format) -> Result<Snapshot> {
    let reader = open_input(input)?;
    SnapshotReader::new(reader, format)
        .read()
        .context("Failed to read snapshot")
}

fn write_snapshot(output: Option<&Path>, format: Format, snapshot: &Snapshot) -> Result<()> {
    let writer = create_output(output)?;
    SnapshotWriter::new(writer, format)
        .write(snapshot)
        .context("Failed to write snapshot")
}
