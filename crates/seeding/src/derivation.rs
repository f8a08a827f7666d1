//! Seed derivation
//!
//! Pure functions combining a parent seed with a small integer key into an
//! independent child seed. Keys are mixed through a SplitMix64 finalizer, never
//! added, so neighbouring keys produce unrelated seeds and a change at one leaf
//! of the hierarchy never perturbs its siblings or ancestors.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Integer seed fully determining a random sequence.
///
/// Derived seeds always fit in `[0, 2^31)` so they survive a round trip
/// through signed 32-bit integers and JavaScript numbers.
pub type Seed = u64;

/// Mask applied to every derived seed (non-negative 32-bit range)
pub const SEED_MASK: Seed = 0x7FFF_FFFF;

/// Starting state for [`hash`] (first 64 bits of the fractional part of π)
const HASH_OFFSET: u64 = 0x243F_6A88_85A3_08D3;

/// SplitMix64 increment (2^64 / φ)
const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Three-axis integer key, e.g. a galaxy sector or grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCoord {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl GridCoord {
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }
}

impl From<(i64, i64, i64)> for GridCoord {
    fn from((x, y, z): (i64, i64, i64)) -> Self {
        Self { x, y, z }
    }
}

/// SplitMix64 output finalizer
#[inline]
fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Combine a sequence of integers into one seed
///
/// The combination is order-sensitive: `hash(&[1, 2])` and `hash(&[2, 1])`
/// differ. Every input is valid, including negative values and the empty slice.
///
/// # Example
/// ```
/// use seeding::hash;
///
/// assert_eq!(hash(&[7, 11, 13]), hash(&[7, 11, 13]));
/// assert_ne!(hash(&[7, 11, 13]), hash(&[13, 11, 7]));
/// ```
pub fn hash(values: &[i64]) -> Seed {
    let state = values.iter().fold(HASH_OFFSET, |state, &value| {
        mix64(state ^ value as u64).wrapping_add(GOLDEN_GAMMA)
    });
    mix64(state) & SEED_MASK
}

/// Derive a child seed from a parent seed and a 3-axis coordinate
pub fn derive(parent: Seed, coord: GridCoord) -> Seed {
    hash(&[parent as i64, coord.x, coord.y, coord.z])
}

/// Derive a child seed from a parent seed and an index
///
/// Used for sibling objects at one level of the hierarchy (the n-th star of a
/// sector, the n-th planet of a system).
pub fn derive_indexed(parent: Seed, index: i64) -> Seed {
    hash(&[parent as i64, index])
}

/// Fold [`derive_indexed`] over a hierarchy path
///
/// `derive_path(root, &[3, 1])` equals
/// `derive_indexed(derive_indexed(root, 3), 1)`. An empty path returns the root
/// unchanged.
pub fn derive_path(root: Seed, path: &[i64]) -> Seed {
    path.iter().fold(root, |seed, &index| derive_indexed(seed, index))
}

/// Root seed from a UUID (first 64-bit half, masked)
pub fn seed_from_uuid(id: &Uuid) -> Seed {
    let (high, _) = id.as_u64_pair();
    mix64(high) & SEED_MASK
}

/// Root seed from a human-readable name
///
/// The name is hashed into a v5 UUID, so the same name always yields the same
/// seed.
pub fn seed_from_name(name: &str) -> Seed {
    seed_from_uuid(&Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes()))
}
