use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

/// Periodic simulation cell, stored as edge lengths plus tilt factors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationBox {
    pub lx: f64,
    pub ly: f64,
    pub lz: f64,
    #[serde(default)]
    pub xy: f64,
    #[serde(default)]
    pub xz: f64,
    #[serde(default)]
    pub yz: f64,
}

impl SimulationBox {
    pub fn orthorhombic(lx: f64, ly: f64, lz: f64) -> Self {
        Self {
            lx,
            ly,
            lz,
            xy: 0.0,
            xz: 0.0,
            yz: 0.0,
        }
    }

    #[inline]
    pub fn is_triclinic(&self) -> bool {
        self.xy != 0.0 || self.xz != 0.0 || self.yz != 0.0
    }
}

impl Default for SimulationBox {
    fn default() -> Self {
        Self::orthorhombic(1.0, 1.0, 1.0)
    }
}

/// The per-particle arrays a snapshot may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Position,
    Velocity,
    Orientation,
    AngularMomentum,
    Acceleration,
    Image,
    Mass,
    MomentInertia,
    TypeId,
    Body,
}

impl Channel {
    pub const ALL: [Channel; 10] = [
        Channel::Position,
        Channel::Velocity,
        Channel::Orientation,
        Channel::AngularMomentum,
        Channel::Acceleration,
        Channel::Image,
        Channel::Mass,
        Channel::MomentInertia,
        Channel::TypeId,
        Channel::Body,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Channel::Position => "position",
            Channel::Velocity => "velocity",
            Channel::Orientation => "orientation",
            Channel::AngularMomentum => "angular_momentum",
            Channel::Acceleration => "acceleration",
            Channel::Image => "image",
            Channel::Mass => "mass",
            Channel::MomentInertia => "moment_inertia",
            Channel::TypeId => "type_id",
            Channel::Body => "body",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors raised when a snapshot violates its structural invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("channel '{channel}' has {actual} entries but the snapshot holds {expected} particles")]
    ChannelLength {
        channel: Channel,
        expected: usize,
        actual: usize,
    },

    #[error("molecule ids are not contiguous: id {missing} is absent below maximum {max}")]
    NonContiguousBodies { missing: u32, max: u32 },

    #[error("type id {type_id} has no entry in the type table ({types} types)")]
    UnknownType { type_id: u32, types: usize },
}

/// Per-particle data of a snapshot.
///
/// `body` assigns every particle to a rigid molecule and is always present.
/// All other channels are optional; an absent channel is carried through
/// every transformation as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParticleData {
    pub count: usize,
    #[serde(default)]
    pub types: Vec<String>,
    pub body: Vec<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Vec<[f64; 3]>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub velocity: Option<Vec<[f64; 3]>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Vec<[f64; 4]>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angular_momentum: Option<Vec<[f64; 4]>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acceleration: Option<Vec<[f64; 3]>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Vec<[i32; 3]>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mass: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moment_inertia: Option<Vec<[f64; 3]>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_id: Option<Vec<u32>>,
}

impl ParticleData {
    /// Creates particle data where only molecule membership is known.
    pub fn from_bodies(types: Vec<String>, body: Vec<u32>) -> Self {
        Self {
            count: body.len(),
            types,
            body,
            ..Default::default()
        }
    }

    /// Length of a channel, or `None` when the channel is absent.
    pub fn channel_len(&self, channel: Channel) -> Option<usize> {
        match channel {
            Channel::Position => self.position.as_ref().map(Vec::len),
            Channel::Velocity => self.velocity.as_ref().map(Vec::len),
            Channel::Orientation => self.orientation.as_ref().map(Vec::len),
            Channel::AngularMomentum => self.angular_momentum.as_ref().map(Vec::len),
            Channel::Acceleration => self.acceleration.as_ref().map(Vec::len),
            Channel::Image => self.image.as_ref().map(Vec::len),
            Channel::Mass => self.mass.as_ref().map(Vec::len),
            Channel::MomentInertia => self.moment_inertia.as_ref().map(Vec::len),
            Channel::TypeId => self.type_id.as_ref().map(Vec::len),
            Channel::Body => Some(self.body.len()),
        }
    }

    #[inline]
    pub fn has(&self, channel: Channel) -> bool {
        self.channel_len(channel).is_some()
    }

    pub fn present_channels(&self) -> Vec<Channel> {
        Channel::ALL
            .into_iter()
            .filter(|&channel| self.has(channel))
            .collect()
    }

    /// Copies every present channel except `body` through `keep`.
    ///
    /// `body` is left empty for the caller to fill, since how molecule ids
    /// are carried over depends on the removal rule.
    pub(crate) fn select(&self, keep: &[bool]) -> Self {
        let count = keep.iter().filter(|&&k| k).count();
        Self {
            count,
            types: self.types.clone(),
            body: Vec::new(),
            position: copy_if_present(&self.position, keep),
            velocity: copy_if_present(&self.velocity, keep),
            orientation: copy_if_present(&self.orientation, keep),
            angular_momentum: copy_if_present(&self.angular_momentum, keep),
            acceleration: copy_if_present(&self.acceleration, keep),
            image: copy_if_present(&self.image, keep),
            mass: copy_if_present(&self.mass, keep),
            moment_inertia: copy_if_present(&self.moment_inertia, keep),
            type_id: copy_if_present(&self.type_id, keep),
        }
    }
}

fn copy_if_present<T: Copy>(channel: &Option<Vec<T>>, keep: &[bool]) -> Option<Vec<T>> {
    channel.as_ref().map(|values| {
        values
            .iter()
            .zip(keep)
            .filter_map(|(&value, &k)| k.then_some(value))
            .collect()
    })
}

/// A point-in-time particle configuration of a molecular crystal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub simulation_box: SimulationBox,
    pub particles: ParticleData,
    #[serde(default)]
    pub pair_types: Vec<String>,
}

impl Snapshot {
    pub fn new(simulation_box: SimulationBox, particles: ParticleData) -> Self {
        Self {
            simulation_box,
            particles,
            pair_types: Vec::new(),
        }
    }

    #[inline]
    pub fn particle_count(&self) -> usize {
        self.particles.count
    }

    /// Distinct molecule ids in ascending order.
    pub fn molecule_ids(&self) -> BTreeSet<u32> {
        self.particles.body.iter().copied().collect()
    }

    #[inline]
    pub fn molecule_count(&self) -> usize {
        self.molecule_ids().len()
    }

    pub fn max_molecule_id(&self) -> Option<u32> {
        self.particles.body.iter().copied().max()
    }

    /// Number of particles belonging to molecule `body`.
    pub fn molecule_size(&self, body: u32) -> usize {
        self.particles.body.iter().filter(|&&b| b == body).count()
    }

    pub fn has_molecule(&self, body: u32) -> bool {
        self.particles.body.contains(&body)
    }

    /// Checks channel lengths, molecule id contiguity and type references.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        let expected = self.particles.count;
        for channel in Channel::ALL {
            if let Some(actual) = self.particles.channel_len(channel) {
                if actual != expected {
                    return Err(SnapshotError::ChannelLength {
                        channel,
                        expected,
                        actual,
                    });
                }
            }
        }

        let ids = self.molecule_ids();
        if let Some(&max) = ids.last() {
            if ids.len() != max as usize + 1 {
                let missing = (0..max).find(|id| !ids.contains(id)).unwrap_or(max);
                return Err(SnapshotError::NonContiguousBodies { missing, max });
            }
        }

        if let Some(type_ids) = &self.particles.type_id {
            let types = self.particles.types.len();
            if let Some(&type_id) = type_ids.iter().find(|&&t| t as usize >= types) {
                return Err(SnapshotError::UnknownType { type_id, types });
            }
        }

        Ok(())
    }
}
