//! Secondary-body placement: moons around planets and asteroid belts
//!
//! Both generators are pure functions of their inputs and an explicit
//! [`RandomStream`](seeding::RandomStream). Give every call its own stream
//! (forked or freshly derived) and calls can run in parallel safely.
//!
//! ```text
//! planet seed ──> RandomStream ──> place_moons ──> [PlacedMoon { seed, .. }]
//!                                                      └─> MoonBodyGenerator
//! belt seed   ──> RandomStream ──> generate_asteroid_belt ──> [BeltBody]
//! ```

pub mod asteroid_belt;
pub mod belt_spec;
pub mod error;
pub mod moon_placement;
pub mod provenance;

#[cfg(test)]
mod moon_placement_test;

pub use asteroid_belt::{AsteroidBeltResult, BeltBody, generate_asteroid_belt};
pub use belt_spec::{AngularCluster, AsteroidBeltSpec, BeltGap, MajorBodyInput};
pub use error::BeltSpecError;
pub use moon_placement::{
    GeneratedMoonSystem, MoonBodyGenerator, MoonBodyRequest, MoonPlacementResult, MoonSize,
    PlacedMoon, PlanetMassBand, PlanetSummary, generate_moons, place_moons,
};
pub use provenance::{GENERATOR_VERSION, Provenance};
