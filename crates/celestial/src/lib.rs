//! Keplerian orbital mechanics for procedural generation
//!
//! Stateless functions converting orbital elements into positions, solving
//! Kepler's equation, and computing the stability limits (Hill sphere, Roche
//! limit) and equilibrium temperatures the generators need.
//!
//! # Axis convention
//!
//! Positions are right-handed with the reference plane spanned by x and y and
//! **+z pointing "up"** along the orbit normal of a prograde, zero-inclination
//! orbit. Vertical spread of a population is therefore its z extent.

pub mod constants;
pub mod context;
pub mod elements;
pub mod kepler;
pub mod limits;

#[cfg(test)]
mod context_test;

pub use context::ParentContext;
pub use elements::{Anomaly, OrbitalElements, elements_to_position};
pub use kepler::{
    eccentric_to_mean, eccentric_to_true, mean_to_true, solve_kepler, solve_kepler_with,
    true_to_eccentric, true_to_mean,
};
pub use limits::{
    DEFAULT_BOND_ALBEDO, equilibrium_temperature, hill_sphere_radius, primary_density,
    roche_limit,
};
