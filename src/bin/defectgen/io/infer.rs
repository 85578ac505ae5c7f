use std::path::Path;

use crystal_defects::io::Format;

fn extension(path: &Path) -> Option<String> {
    Some(path.extension()?.to_str()?.to_ascii_lowercase())
}

pub fn input(path: &Path) -> Option<Format> {
    match extension(path)?.as_str() {
        "json" => Some(Format::Json),
        _ => None,
    }
}

pub fn output(path: &Path) -> Option<Format> {
    match extension(path)?.as_str() {
        "json" => Some(Format::Json),
        "xyz" | "extxyz" => Some(Format::Xyz),
        _ => None,
    }
}
