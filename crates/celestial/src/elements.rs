//! Orbital elements and conversion to Cartesian position
//!
//! Elements are unit-agnostic in length: the position comes back in whatever
//! unit the semi-major axis is expressed in (AU for belts, meters for moons).

use nalgebra::{Point3, Rotation3, Vector3};
use serde::{Deserialize, Serialize};

use crate::constants::GM_SUN_AU3_YR2;
use crate::kepler::{mean_to_true, true_to_mean};

/// Position along the orbit, as either a mean or a true anomaly (radians)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum Anomaly {
    Mean(f64),
    True(f64),
}

/// Keplerian orbital elements of a bound orbit
///
/// Angles are in radians. Eccentricity must satisfy `0 ≤ e < 1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbitalElements {
    /// Semi-major axis (caller's length unit)
    pub semi_major_axis: f64,

    /// Eccentricity, `0 ≤ e < 1`
    pub eccentricity: f64,

    /// Inclination to the reference plane
    pub inclination: f64,

    /// Longitude of ascending node (Ω)
    pub longitude_ascending_node: f64,

    /// Argument of periapsis (ω)
    pub argument_of_periapsis: f64,

    /// Position along the orbit
    pub anomaly: Anomaly,
}

impl OrbitalElements {
    /// Circular, uninclined orbit at the reference direction
    pub fn circular(semi_major_axis: f64) -> Self {
        Self {
            semi_major_axis,
            eccentricity: 0.0,
            inclination: 0.0,
            longitude_ascending_node: 0.0,
            argument_of_periapsis: 0.0,
            anomaly: Anomaly::True(0.0),
        }
    }

    /// Build elements from conventional catalogue values (angles in degrees)
    pub fn from_degrees(
        semi_major_axis: f64,
        eccentricity: f64,
        inclination_deg: f64,
        longitude_ascending_node_deg: f64,
        argument_of_periapsis_deg: f64,
        mean_anomaly_deg: f64,
    ) -> Self {
        Self {
            semi_major_axis,
            eccentricity,
            inclination: inclination_deg.to_radians(),
            longitude_ascending_node: longitude_ascending_node_deg.to_radians(),
            argument_of_periapsis: argument_of_periapsis_deg.to_radians(),
            anomaly: Anomaly::Mean(mean_anomaly_deg.to_radians()),
        }
    }

    /// True anomaly, solving Kepler's equation if the orbit stores a mean anomaly
    pub fn true_anomaly(&self) -> f64 {
        match self.anomaly {
            Anomaly::True(nu) => nu,
            Anomaly::Mean(m) => mean_to_true(m, self.eccentricity),
        }
    }

    /// Mean anomaly
    pub fn mean_anomaly(&self) -> f64 {
        match self.anomaly {
            Anomaly::Mean(m) => m,
            Anomaly::True(nu) => true_to_mean(nu, self.eccentricity),
        }
    }

    /// Same orbit with the anomaly resolved to a true anomaly
    pub fn with_true_anomaly(self) -> Self {
        Self {
            anomaly: Anomaly::True(self.true_anomaly()),
            ..self
        }
    }

    /// Cartesian position (see crate docs for the axis convention)
    pub fn position(&self) -> Point3<f64> {
        elements_to_position(
            self.semi_major_axis,
            self.eccentricity,
            self.inclination,
            self.longitude_ascending_node,
            self.argument_of_periapsis,
            self.true_anomaly(),
        )
    }

    /// Orbital radius at a given true anomaly
    pub fn radius_at(&self, true_anomaly: f64) -> f64 {
        orbital_radius(self.semi_major_axis, self.eccentricity, true_anomaly)
    }

    /// Closest approach, `a(1 - e)`
    pub fn periapsis(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    /// Farthest distance, `a(1 + e)`
    pub fn apoapsis(&self) -> f64 {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }

    /// Orbital period in years, semi-major axis in AU
    ///
    /// Kepler's third law: T = 2π√(a³/GM)
    pub fn period_years(&self, central_mass_solar: f64) -> f64 {
        if central_mass_solar <= 0.0 || self.semi_major_axis <= 0.0 {
            return 0.0;
        }
        let mu = GM_SUN_AU3_YR2 * central_mass_solar;
        std::f64::consts::TAU * (self.semi_major_axis.powi(3) / mu).sqrt()
    }
}

#[inline]
fn orbital_radius(semi_major_axis: f64, eccentricity: f64, true_anomaly: f64) -> f64 {
    semi_major_axis * (1.0 - eccentricity * eccentricity)
        / (1.0 + eccentricity * true_anomaly.cos())
}

/// Convert six orbital elements into a Cartesian position
///
/// The perifocal position `(r cos ν, r sin ν, 0)` is rotated by the 3-1-3
/// Euler sequence ω (about z), i (about x), Ω (about z) into the reference
/// frame. The result uses +z as "up".
///
/// # Example
/// ```
/// use celestial::elements_to_position;
///
/// let p = elements_to_position(2.0, 0.0, 0.0, 0.0, 0.0, std::f64::consts::FRAC_PI_2);
/// assert!(p.x.abs() < 1e-12);
/// assert!((p.y - 2.0).abs() < 1e-12);
/// assert_eq!(p.z, 0.0);
/// ```
pub fn elements_to_position(
    semi_major_axis: f64,
    eccentricity: f64,
    inclination: f64,
    longitude_ascending_node: f64,
    argument_of_periapsis: f64,
    true_anomaly: f64,
) -> Point3<f64> {
    let r = orbital_radius(semi_major_axis, eccentricity, true_anomaly);
    let perifocal = Vector3::new(r * true_anomaly.cos(), r * true_anomaly.sin(), 0.0);

    let rotation = Rotation3::from_axis_angle(&Vector3::z_axis(), longitude_ascending_node)
        * Rotation3::from_axis_angle(&Vector3::x_axis(), inclination)
        * Rotation3::from_axis_angle(&Vector3::z_axis(), argument_of_periapsis);

    Point3::from(rotation * perifocal)
}
