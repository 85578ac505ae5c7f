use crystal_defects::Direction;
use crystal_defects::io::Format;

use crate::cli::{DirectionArg, InputFormat, OutputFormat};

impl From<InputFormat> for Format {
    fn from(fmt: InputFormat) -> Self {
        match fmt {
            InputFormat::Json => Format::Json,
        }
    }
}

impl From<OutputFormat> for Format {
    fn from(fmt: OutputFormat) -> Self {
        match fmt {
            OutputFormat::Json => Format::Json,
            OutputFormat::Xyz => Format::Xyz,
        }
    }
}

impl From<DirectionArg> for Direction {
    fn from(dir: DirectionArg) -> Self {
        match dir {
            DirectionArg::Horizontal => Direction::Horizontal,
            DirectionArg::Vertical => Direction::Vertical,
        }
    }
}
