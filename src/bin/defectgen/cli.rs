use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "defectgen",
    about = "Crystal defect generation for molecular-dynamics snapshots",
    version,
    author,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Remove a line or unit cells of molecules around the crystal center
    #[command(visible_alias = "d")]
    Defect(DefectArgs),

    /// Remove a single molecule by id
    #[command(visible_alias = "r")]
    Remove(RemoveArgs),

    /// Summarize a snapshot
    #[command(visible_alias = "i")]
    Info(InfoArgs),
}

/// I/O options shared by commands producing a snapshot.
#[derive(Args)]
pub struct IoOptions {
    /// Input snapshot (stdin if omitted, requires --infmt)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output snapshot (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Input format (inferred from extension if not specified)
    #[arg(long = "infmt", value_name = "FORMAT")]
    pub input_format: Option<InputFormat>,

    /// Output format (inferred from extension if not specified)
    #[arg(long = "outfmt", value_name = "FORMAT")]
    pub output_format: Option<OutputFormat>,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Args)]
#[command(next_help_heading = "Crystal Lattice")]
pub struct LatticeOptions {
    /// Unit cells along each lattice axis
    #[arg(long, num_args = 2, value_names = ["X", "Y"])]
    pub cell_dimensions: Option<Vec<u32>>,

    /// Molecules per unit cell
    #[arg(long, value_name = "N")]
    pub cell_molecules: Option<u32>,
}

#[derive(Args)]
#[command(next_help_heading = "Defect Placement")]
pub struct PlacementOptions {
    /// Direction of the defect
    #[arg(long, value_name = "DIR", ignore_case = true)]
    pub direction: Option<DirectionArg>,

    /// Molecules to remove (unit cells with --layers 2)
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    pub remove: Option<i64>,

    /// Layers removed by a vertical defect (1 or 2)
    #[arg(long, value_name = "N")]
    pub layers: Option<u8>,
}

#[derive(Args)]
pub struct DefectArgs {
    #[command(flatten)]
    pub io: IoOptions,

    #[command(flatten)]
    pub lattice: LatticeOptions,

    #[command(flatten)]
    pub placement: PlacementOptions,

    /// Defect configuration (TOML file); flags override its values
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the molecule ids that would be removed and exit
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct RemoveArgs {
    #[command(flatten)]
    pub io: IoOptions,

    /// Molecule id to remove
    #[arg(short, long, value_name = "ID")]
    pub molecule: u32,

    /// Shift larger molecule ids down instead of rebinding the largest id
    #[arg(long)]
    pub renumber: bool,
}

#[derive(Args)]
pub struct InfoArgs {
    /// Input snapshot (stdin if omitted, requires --infmt)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Input format (inferred from extension if not specified)
    #[arg(long = "infmt", value_name = "FORMAT")]
    pub input_format: Option<InputFormat>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum InputFormat {
    /// JSON snapshot
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// JSON snapshot
    Json,
    /// Extended XYZ (write-only, for visualization)
    Xyz,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DirectionArg {
    /// Horizontal line through the center
    #[value(name = "H", alias = "horizontal")]
    Horizontal,
    /// Vertical line or unit cells below the center
    #[value(name = "V", alias = "vertical")]
    Vertical,
}

pub fn parse() -> Cli {
    Cli::parse()
}
