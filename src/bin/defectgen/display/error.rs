use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    for cause in err.chain().skip(1) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
    }

    let hints = Hints::collect(err);
    if !hints.is_empty() {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

#[derive(Default)]
struct Hints {
    hints: Vec<String>,
    typed: bool,
}

impl Hints {
    fn collect(err: &Error) -> Vec<String> {
        let mut collector = Self::default();

        collector.snapshot_io(err);
        collector.defect(err);

        if !collector.typed {
            collector.fallback(err);
        }

        collector.hints
    }

    fn add(&mut self, hint: impl Into<String>) {
        self.hints.push(hint.into());
    }

    fn snapshot_io(&mut self, err: &Error) {
        use crystal_defects::io::Error as IoError;

        let Some(io_err) = err.downcast_ref::<IoError>() else {
            return;
        };
        self.typed = true;

        match io_err {
            IoError::Io { source } => self.std_io(source),

            IoError::Parse { format, line, .. } => {
                self.add(format!("The {format} parser stopped near line {line}"));
                self.add("Snapshots need a `particles` table with `types` and `body`");
            }

            IoError::UnsupportedReadFormat(format) => {
                self.add(format!("{format} snapshots cannot be read back"));
                self.add("Supported input formats: json");
            }

            IoError::MissingChannel { channel, .. } => {
                self.add(format!("The input has no `{channel}` channel"));
                self.add("Write JSON instead, which keeps only the channels present");
            }

            IoError::InvalidSnapshot(_) => {
                self.add("Every channel must hold one entry per particle");
                self.add("Molecule ids in `body` must run from 0 without gaps");
            }
        }
    }

    fn std_io(&mut self, source: &io::Error) {
        use std::io::ErrorKind;

        match source.kind() {
            ErrorKind::NotFound => {
                self.add("Check the path spelling and ensure the file exists");
            }
            ErrorKind::PermissionDenied => {
                self.add("Check file permissions with `ls -la`");
            }
            ErrorKind::BrokenPipe => {
                self.add("The process reading the output exited early");
            }
            ErrorKind::WriteZero => {
                self.add("Check available disk space");
            }
            _ => {
                self.add("Check file path, permissions, and disk space");
            }
        }
    }

    fn defect(&mut self, err: &Error) {
        use crystal_defects::DefectError;

        let Some(defect_err) = err.downcast_ref::<DefectError>() else {
            return;
        };
        self.typed = true;

        match defect_err {
            DefectError::InvalidArgument(_) => {
                self.add("--remove must be zero or positive");
                self.add("Vertical defects accept --layers 1 or 2");
            }

            DefectError::InvalidIndex { index } => {
                self.add(format!("Molecule {index} is outside the crystal"));
                self.add("The lattice is too small for this many removals");
                self.add("Check --cell-dimensions and --cell-molecules against the input");
                self.add("Preview the molecule ids with --dry-run");
            }

            DefectError::MoleculeSizeMismatch { .. } => {
                self.add("Molecules in this snapshot differ in size");
                self.add("Use `remove --renumber` to shift ids instead of rebinding");
            }

            DefectError::ConfigParse(_) => {
                self.add("The defect configuration has invalid TOML");
                self.add("Expected keys: direction, layers, remove, [lattice]");
            }
        }
    }

    fn fallback(&mut self, err: &Error) {
        let text = chain_text(err);

        if text.contains("terminal") {
            self.add("Provide a file via -i/--input or pipe data to stdin");
            self.add("Write to a file via -o/--output or redirect stdout");
        } else if text.contains("cannot infer") || text.contains("format") {
            self.add("Name the format explicitly with --infmt or --outfmt");
        } else if text.contains("no such file") {
            self.add("Check that the file path is correct");
        }
    }
}

fn chain_text(err: &Error) -> String {
    err.chain()
        .map(|cause| cause.to_string())
        .collect::<Vec<_>>()
        .join("\n")
        .to_lowercase()
}
