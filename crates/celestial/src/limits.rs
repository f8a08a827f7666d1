//! Stability limits and radiative balance
//!
//! Every function returns `0.0` on non-positive inputs instead of failing.
//! Callers should treat a zero result as "undefined".
//!
//! # References
//! - Hamilton & Burns (1992) - "Orbital stability zones about asteroids"
//! - Roche (1849), fluid-body limit coefficient 2.44

use std::f64::consts::PI;

use crate::constants::{AU_TO_M, SOLAR_LUMINOSITY_W, STEFAN_BOLTZMANN};

/// Bond albedo assumed when none is known (roughly Earth's)
pub const DEFAULT_BOND_ALBEDO: f64 = 0.3;

/// Hill sphere radius
///
/// R_Hill = a × (m / (3 M))^(1/3)
///
/// The radius is in the unit of `orbital_distance`; the masses only need to
/// share a unit with each other.
///
/// # Arguments
/// * `body_mass` - Mass of the orbiting body
/// * `primary_mass` - Mass of the body it orbits
/// * `orbital_distance` - Semi-major axis of the body's orbit
#[inline]
pub fn hill_sphere_radius(body_mass: f64, primary_mass: f64, orbital_distance: f64) -> f64 {
    if body_mass <= 0.0 || primary_mass <= 0.0 || orbital_distance <= 0.0 {
        return 0.0;
    }
    orbital_distance * (body_mass / (3.0 * primary_mass)).cbrt()
}

/// Bulk density of a sphere in kg/m³
pub fn primary_density(mass_kg: f64, radius_m: f64) -> f64 {
    if mass_kg <= 0.0 || radius_m <= 0.0 {
        return 0.0;
    }
    mass_kg / (4.0 / 3.0 * PI * radius_m.powi(3))
}

/// Fluid Roche limit in meters
///
/// R_Roche = 2.44 × R_primary × (ρ_primary / ρ_satellite)^(1/3)
///
/// # Arguments
/// * `primary_radius_m` - Radius of the primary in meters
/// * `primary_mass_kg` - Mass of the primary in kg
/// * `satellite_density` - Satellite bulk density in kg/m³ (~2000 icy, ~3000 rocky)
pub fn roche_limit(primary_radius_m: f64, primary_mass_kg: f64, satellite_density: f64) -> f64 {
    if primary_radius_m <= 0.0 || primary_mass_kg <= 0.0 || satellite_density <= 0.0 {
        return 0.0;
    }
    let rho_primary = primary_density(primary_mass_kg, primary_radius_m);
    2.44 * primary_radius_m * (rho_primary / satellite_density).cbrt()
}

/// Blackbody equilibrium temperature in Kelvin
///
/// T_eq = (L (1 - A) / (16 π σ d²))^(1/4)
///
/// # Arguments
/// * `luminosity_solar` - Stellar luminosity in solar luminosities
/// * `distance_au` - Distance from the star in AU
/// * `albedo` - Bond albedo, see [`DEFAULT_BOND_ALBEDO`]
///
/// # Example
/// ```
/// use celestial::{DEFAULT_BOND_ALBEDO, equilibrium_temperature};
///
/// let earth = equilibrium_temperature(1.0, 1.0, DEFAULT_BOND_ALBEDO);
/// assert!((earth - 255.0).abs() < 5.0);
/// ```
pub fn equilibrium_temperature(luminosity_solar: f64, distance_au: f64, albedo: f64) -> f64 {
    if luminosity_solar <= 0.0 || distance_au <= 0.0 {
        return 0.0;
    }
    let luminosity_w = luminosity_solar * SOLAR_LUMINOSITY_W;
    let distance_m = distance_au * AU_TO_M;
    let absorbed = luminosity_w * (1.0 - albedo.clamp(0.0, 1.0));
    (absorbed / (16.0 * PI * STEFAN_BOLTZMANN * distance_m.powi(2))).powf(0.25)
}
