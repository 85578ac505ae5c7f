//! Placement of line and unit-cell defects around the crystal center.
//!
//! Each placement generates its molecule ids against the numbering of the
//! untouched snapshot and removes them one after another with
//! [`remove_molecule`]. The id rebinding done by [`remove_molecule`] shifts
//! later molecules down by one per removal, which is what keeps the
//! precomputed ids aligned with the lattice layers.
//!
//! Ids are produced lazily, so a removal that runs off the crystal stops at
//! the first missing molecule however large the requested count.

use super::error::Error;
use super::remove::remove_molecule;
use crate::model::lattice::Lattice;
use crate::model::snapshot::Snapshot;

/// Molecule ids removed by [`remove_vertical`], in removal order.
///
/// The run ends just before the central molecule and its length is `count`
/// rounded down to an even number, so the same crystal layer is taken
/// regardless of the exact count.
///
/// # Errors
///
/// - [`Error::InvalidArgument`] if `count` is negative.
/// - [`Error::InvalidIndex`] if the run is longer than the lattice holds.
pub fn vertical_plan(count: i64, lattice: &Lattice) -> Result<Vec<i64>, Error> {
    check_count(count, "molecules")?;
    collect_plan(vertical_ids(count, lattice), count as u64 / 2 * 2, lattice)
}

/// Molecule ids removed by [`remove_horizontal`], in removal order.
///
/// Pairs of molecules are taken column by column across the center, giving
/// a multiple of four molecules with a minimum of four.
///
/// # Errors
///
/// - [`Error::InvalidArgument`] if `count` is negative.
/// - [`Error::InvalidIndex`] if the line is longer than the lattice holds.
pub fn horizontal_plan(count: i64, lattice: &Lattice) -> Result<Vec<i64>, Error> {
    check_count(count, "molecules")?;
    let len = 2 * horizontal_extent(count) as u64;
    collect_plan(horizontal_ids(count, lattice), len, lattice)
}

/// Molecule ids removed by [`remove_vertical_cell`], in removal order.
///
/// Every cell contributes two molecules, so both halves of each unit cell
/// are taken and the remaining layers can close up into a continuous
/// lattice.
///
/// # Errors
///
/// - [`Error::InvalidArgument`] if `num_cells` is negative.
/// - [`Error::InvalidIndex`] if the cells hold more molecules than the
///   lattice.
pub fn vertical_cell_plan(num_cells: i64, lattice: &Lattice) -> Result<Vec<i64>, Error> {
    check_count(num_cells, "cells")?;
    collect_plan(
        vertical_cell_ids(num_cells, lattice),
        2 * num_cells as u64,
        lattice,
    )
}

/// Removes a vertical line of molecules ending at the central molecule.
///
/// `count` is rounded down to an even number. A count of zero returns the
/// snapshot unchanged.
///
/// # Errors
///
/// - [`Error::InvalidArgument`] if `count` is negative.
/// - [`Error::InvalidIndex`] if the line runs off the crystal. No partially
///   reduced snapshot is returned.
pub fn remove_vertical(
    snapshot: &Snapshot,
    count: i64,
    lattice: &Lattice,
) -> Result<Snapshot, Error> {
    check_count(count, "molecules")?;
    apply_plan(snapshot, vertical_ids(count, lattice))
}

/// Removes a horizontal line of molecules through the crystal center.
///
/// At least four molecules are removed; larger counts are rounded down to a
/// multiple of four. A count of zero returns the snapshot unchanged.
///
/// # Errors
///
/// - [`Error::InvalidArgument`] if `count` is negative.
/// - [`Error::InvalidIndex`] if the line runs off the crystal.
pub fn remove_horizontal(
    snapshot: &Snapshot,
    count: i64,
    lattice: &Lattice,
) -> Result<Snapshot, Error> {
    check_count(count, "molecules")?;
    apply_plan(snapshot, horizontal_ids(count, lattice))
}

/// Removes `num_cells` whole unit cells in the vertical direction.
///
/// # Errors
///
/// - [`Error::InvalidArgument`] if `num_cells` is negative.
/// - [`Error::InvalidIndex`] if the cells run off the crystal.
pub fn remove_vertical_cell(
    snapshot: &Snapshot,
    num_cells: i64,
    lattice: &Lattice,
) -> Result<Snapshot, Error> {
    check_count(num_cells, "cells")?;
    apply_plan(snapshot, vertical_cell_ids(num_cells, lattice))
}

fn vertical_ids(count: i64, lattice: &Lattice) -> impl Iterator<Item = i64> {
    let center = lattice.central_molecule();
    center - 2 * (count / 2)..center
}

fn horizontal_extent(count: i64) -> i64 {
    if count == 0 { 0 } else { (count / 4 * 2).max(2) }
}

fn horizontal_ids(count: i64, lattice: &Lattice) -> impl Iterator<Item = i64> {
    let center = lattice.central_molecule();
    let rows = i64::from(lattice.rows());
    let extent = horizontal_extent(count);

    (-extent..extent)
        .step_by(2)
        .enumerate()
        .flat_map(move |(removed, column)| {
            // shift by column, then back by the molecules already taken
            let index = center
                .saturating_add(column.saturating_mul(rows))
                .saturating_sub(2 * removed as i64);
            [index, index.saturating_add(2)]
        })
}

fn vertical_cell_ids(num_cells: i64, lattice: &Lattice) -> impl Iterator<Item = i64> {
    let index = lattice.central_molecule() - num_cells / 2 * 2;
    (0..num_cells).flat_map(move |cell| {
        let first = if cell == 0 { index - 2 } else { index - 1 };
        [first, index]
    })
}

fn check_count(count: i64, what: &str) -> Result<(), Error> {
    if count < 0 {
        return Err(Error::invalid_argument(format!(
            "can't remove a negative number of {what} ({count})"
        )));
    }
    Ok(())
}

fn collect_plan(
    ids: impl Iterator<Item = i64>,
    len: u64,
    lattice: &Lattice,
) -> Result<Vec<i64>, Error> {
    let capacity = lattice.molecule_capacity();
    if len <= capacity {
        return Ok(ids.collect());
    }

    // after `removed` removals only `capacity - removed` ids are left, so an
    // out-of-range id turns up within the first `capacity + 1` entries
    let index = ids
        .take(capacity.saturating_add(1).try_into().unwrap_or(usize::MAX))
        .enumerate()
        .find_map(|(removed, id)| {
            let remaining = capacity.saturating_sub(removed as u64);
            let in_range = u64::try_from(id).is_ok_and(|id| id < remaining);
            (!in_range).then_some(id)
        })
        .unwrap_or(i64::MAX);
    Err(Error::invalid_index(index))
}

fn apply_plan(snapshot: &Snapshot, mut plan: impl Iterator<Item = i64>) -> Result<Snapshot, Error> {
    let Some(first) = plan.next() else {
        return Ok(snapshot.clone());
    };

    let mut removed = 1usize;
    let reduced = plan.try_fold(remove_at(snapshot, first)?, |current, index| {
        removed += 1;
        remove_at(&current, index)
    })?;

    log::debug!("Molecules Removed: {}", removed);
    Ok(reduced)
}

fn remove_at(snapshot: &Snapshot, index: i64) -> Result<Snapshot, Error> {
    let body = u32::try_from(index).map_err(|_| Error::invalid_index(index))?;
    remove_molecule(snapshot, body)
}
