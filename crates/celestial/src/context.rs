//! Parent context handed to body generators
//!
//! Describes the star a body orbits and, for satellites of satellites, the
//! hosting body. A context without a hosting body has all parent-body fields
//! at zero.

use serde::{Deserialize, Serialize};

use crate::constants::{AU_TO_M, SOLAR_MASS_KG};
use crate::limits::{equilibrium_temperature, hill_sphere_radius};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentContext {
    /// Stellar mass in solar masses
    pub stellar_mass: f64,

    /// Stellar luminosity in solar luminosities
    pub luminosity: f64,

    /// Stellar effective temperature in Kelvin
    pub effective_temperature: f64,

    /// Stellar age in Gyr
    pub age_gyr: f64,

    /// Distance of the body (or its host) from the star in AU
    pub orbital_distance_au: f64,

    /// Hosting body mass in kg (0 when orbiting the star directly)
    #[serde(default)]
    pub parent_body_mass_kg: f64,

    /// Hosting body radius in meters
    #[serde(default)]
    pub parent_body_radius_m: f64,

    /// Distance from the hosting body in meters
    #[serde(default)]
    pub parent_body_distance_m: f64,
}

impl ParentContext {
    /// Context for a body orbiting the star directly
    pub fn stellar(
        stellar_mass: f64,
        luminosity: f64,
        effective_temperature: f64,
        age_gyr: f64,
        orbital_distance_au: f64,
    ) -> Self {
        Self {
            stellar_mass,
            luminosity,
            effective_temperature,
            age_gyr,
            orbital_distance_au,
            parent_body_mass_kg: 0.0,
            parent_body_radius_m: 0.0,
            parent_body_distance_m: 0.0,
        }
    }

    /// Sun-like star at 1 AU, 4.6 Gyr
    pub fn sun_like(orbital_distance_au: f64) -> Self {
        Self::stellar(1.0, 1.0, 5772.0, 4.6, orbital_distance_au)
    }

    /// True iff the context carries a hosting body with positive mass
    pub fn has_parent_body(&self) -> bool {
        self.parent_body_mass_kg > 0.0
    }

    /// Derived context for a satellite of a body described by this context
    ///
    /// Stellar properties and the star distance are unchanged; the parent-body
    /// fields are set to the hosting body's mass, radius, and the satellite's
    /// distance from it.
    pub fn for_satellite(
        &self,
        parent_mass_kg: f64,
        parent_radius_m: f64,
        distance_from_parent_m: f64,
    ) -> Self {
        Self {
            parent_body_mass_kg: parent_mass_kg,
            parent_body_radius_m: parent_radius_m,
            parent_body_distance_m: distance_from_parent_m,
            ..*self
        }
    }

    /// Stellar mass in kg
    pub fn stellar_mass_kg(&self) -> f64 {
        self.stellar_mass * SOLAR_MASS_KG
    }

    /// Hill sphere of the hosting body around the star, in meters
    ///
    /// Zero if there is no hosting body.
    pub fn parent_hill_radius_m(&self) -> f64 {
        if !self.has_parent_body() {
            return 0.0;
        }
        hill_sphere_radius(
            self.parent_body_mass_kg,
            self.stellar_mass_kg(),
            self.orbital_distance_au * AU_TO_M,
        )
    }

    /// Equilibrium temperature at this context's distance from the star
    pub fn equilibrium_temperature(&self, albedo: f64) -> f64 {
        equilibrium_temperature(self.luminosity, self.orbital_distance_au, albedo)
    }
}
