//! Core data structures describing molecular crystal snapshots.
//!
//! - [`snapshot`] – Particle configurations: box geometry, per-particle
//!   channels and rigid-molecule membership.
//! - [`lattice`] – Unit-cell layout of the crystal a snapshot was built from.
//!
//! Snapshots are plain values. Every defect operation in [`crate::defect`]
//! borrows its input and returns a new [`Snapshot`], so an input is never
//! observed half-modified.
//!
//! [`Snapshot`]: snapshot::Snapshot

pub mod lattice;
pub mod snapshot;
