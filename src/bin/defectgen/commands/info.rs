use std::io::{self, Write};

use anyhow::Result;

use super::{read_snapshot, resolve_input_format};
use crate::cli::InfoArgs;
use crate::display::{Context, print_structure_info};
use crate::io::display_name;

pub fn run_info(args: InfoArgs, _ctx: Context) -> Result<()> {
    let input = args.input.as_deref();
    let format = resolve_input_format(input, args.input_format)?;
    let snapshot = read_snapshot(input, format)?;

    let mut stdout = io::stdout().lock();
    print_structure_info(&mut stdout, &display_name(input, "stdin"), &snapshot);
    stdout.flush()?;

    Ok(())
}
