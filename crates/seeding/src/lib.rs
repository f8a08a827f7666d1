//! Deterministic seed hierarchy and seeded random streams
//!
//! Every generation step receives its own [`RandomStream`], built either from a
//! seed derived through [`derive`] / [`derive_indexed`] or forked from a parent
//! stream. Nothing in this crate holds global state.
//!
//! ```text
//! galaxy seed
//!   └─> derive(seed, region coord)          region
//!         └─> derive_indexed(seed, star)    star system
//!               └─> RandomStream::new(seed)
//!                     └─> fork() / next_seed()   planets, moons, belts
//! ```

pub mod derivation;
pub mod stream;

#[cfg(test)]
mod stream_test;

pub use derivation::{
    GridCoord, SEED_MASK, Seed, derive, derive_indexed, derive_path, hash, seed_from_name,
    seed_from_uuid,
};
pub use stream::RandomStream;
