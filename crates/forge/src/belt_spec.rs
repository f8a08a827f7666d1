//! Asteroid belt specification
//!
//! Belt geometry is in AU, body radii in km and configuration angles in
//! degrees. Major bodies use catalogue conventions: semi-major axis in meters,
//! angles (including mean anomaly) in degrees.

use serde::{Deserialize, Serialize};

use celestial::constants::AU_TO_M;

use crate::error::BeltSpecError;

/// Radial gap cleared of background bodies (e.g. a Kirkwood gap)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeltGap {
    /// Gap center in AU
    pub center_au: f64,

    /// Half-width in AU
    pub half_width_au: f64,
}

impl BeltGap {
    pub fn new(center_au: f64, half_width_au: f64) -> Self {
        Self {
            center_au,
            half_width_au,
        }
    }

    /// True if `semi_major_axis_au` lies inside the gap (edges included)
    pub fn contains(&self, semi_major_axis_au: f64) -> bool {
        (semi_major_axis_au - self.center_au).abs() <= self.half_width_au
    }
}

/// Preferred longitude that a fraction of the belt clusters around
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AngularCluster {
    /// Cluster center longitude in degrees
    pub longitude_deg: f64,

    /// Von Mises concentration κ; angular spread is 1/√κ radians
    pub concentration: f64,
}

impl AngularCluster {
    pub fn new(longitude_deg: f64, concentration: f64) -> Self {
        Self {
            longitude_deg,
            concentration,
        }
    }

    /// Angular spread in radians
    pub fn spread(&self) -> f64 {
        1.0 / self.concentration.sqrt()
    }
}

/// An explicitly specified ("named") belt body, placed exactly as given
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MajorBodyInput {
    pub id: String,

    /// Semi-major axis in meters
    pub semi_major_axis_m: f64,

    pub eccentricity: f64,
    pub inclination_deg: f64,
    pub longitude_ascending_node_deg: f64,
    pub argument_of_periapsis_deg: f64,
    pub mean_anomaly_deg: f64,

    /// Body radius in km
    pub radius_km: f64,

    /// Compositional type tag, passed through verbatim (e.g. "C", "S", "M")
    pub body_type: String,
}

/// Parameters of one asteroid belt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AsteroidBeltSpec {
    /// Inner edge in AU
    pub inner_radius_au: f64,

    /// Outer edge in AU
    pub outer_radius_au: f64,

    /// Number of background bodies
    pub asteroid_count: usize,

    /// Maximum inclination in degrees
    pub max_inclination_deg: f64,

    /// Maximum eccentricity, `< 1`
    pub max_eccentricity: f64,

    /// Smallest body radius in km
    pub min_body_radius_km: f64,

    /// Largest body radius in km
    pub max_body_radius_km: f64,

    /// Exponent α of the radius distribution dN/dr ∝ r^(-α)
    pub size_power_law_exponent: f64,

    /// Exponent k of the radial density t^k (1 - t)^k; 0 is uniform
    pub radial_concentration: f64,

    pub gaps: Vec<BeltGap>,
    pub clusters: Vec<AngularCluster>,

    /// Probability that a background body belongs to one of the clusters
    pub cluster_fraction: f64,

    pub major_bodies: Vec<MajorBodyInput>,
}

impl Default for AsteroidBeltSpec {
    fn default() -> Self {
        Self {
            inner_radius_au: 2.1,
            outer_radius_au: 3.3,
            asteroid_count: 0,
            max_inclination_deg: 20.0,
            max_eccentricity: 0.25,
            min_body_radius_km: 1.0,
            max_body_radius_km: 500.0,
            size_power_law_exponent: 2.5,
            radial_concentration: 1.0,
            gaps: Vec::new(),
            clusters: Vec::new(),
            cluster_fraction: 0.0,
            major_bodies: Vec::new(),
        }
    }
}

impl AsteroidBeltSpec {
    /// Belt between two radii with default shape parameters
    pub fn new(inner_radius_au: f64, outer_radius_au: f64, asteroid_count: usize) -> Self {
        Self {
            inner_radius_au,
            outer_radius_au,
            asteroid_count,
            ..Self::default()
        }
    }

    /// Sol-like main belt with the principal Kirkwood gaps and the four largest
    /// bodies
    pub fn main_belt() -> Self {
        Self::new(2.1, 3.3, 1000)
            .with_gap(2.50, 0.03) // 3:1
            .with_gap(2.82, 0.02) // 5:2
            .with_gap(2.95, 0.015) // 7:3
            .with_gap(3.27, 0.03) // 2:1
            .with_size_range(1.0, 250.0)
            .with_major_body(MajorBodyInput {
                id: "ceres".to_string(),
                semi_major_axis_m: 2.7675 * AU_TO_M,
                eccentricity: 0.0785,
                inclination_deg: 10.59,
                longitude_ascending_node_deg: 80.27,
                argument_of_periapsis_deg: 73.73,
                mean_anomaly_deg: 291.4,
                radius_km: 469.7,
                body_type: "C".to_string(),
            })
            .with_major_body(MajorBodyInput {
                id: "vesta".to_string(),
                semi_major_axis_m: 2.3615 * AU_TO_M,
                eccentricity: 0.0887,
                inclination_deg: 7.14,
                longitude_ascending_node_deg: 103.81,
                argument_of_periapsis_deg: 151.66,
                mean_anomaly_deg: 169.4,
                radius_km: 262.7,
                body_type: "V".to_string(),
            })
            .with_major_body(MajorBodyInput {
                id: "pallas".to_string(),
                semi_major_axis_m: 2.7722 * AU_TO_M,
                eccentricity: 0.2302,
                inclination_deg: 34.93,
                longitude_ascending_node_deg: 172.9,
                argument_of_periapsis_deg: 310.9,
                mean_anomaly_deg: 211.5,
                radius_km: 256.0,
                body_type: "B".to_string(),
            })
            .with_major_body(MajorBodyInput {
                id: "hygiea".to_string(),
                semi_major_axis_m: 3.1415 * AU_TO_M,
                eccentricity: 0.1125,
                inclination_deg: 3.83,
                longitude_ascending_node_deg: 283.2,
                argument_of_periapsis_deg: 312.3,
                mean_anomaly_deg: 152.2,
                radius_km: 217.0,
                body_type: "C".to_string(),
            })
    }

    /// Dynamically cold trans-Neptunian belt with one clustered population
    pub fn kuiper_belt() -> Self {
        Self {
            max_inclination_deg: 10.0,
            max_eccentricity: 0.2,
            min_body_radius_km: 10.0,
            max_body_radius_km: 1200.0,
            size_power_law_exponent: 3.0,
            radial_concentration: 2.0,
            ..Self::new(30.0, 50.0, 2000)
        }
        .with_cluster(90.0, 4.0)
        .with_cluster_fraction(0.15)
    }

    pub fn with_gap(mut self, center_au: f64, half_width_au: f64) -> Self {
        self.gaps.push(BeltGap::new(center_au, half_width_au));
        self
    }

    pub fn with_cluster(mut self, longitude_deg: f64, concentration: f64) -> Self {
        self.clusters.push(AngularCluster::new(longitude_deg, concentration));
        self
    }

    pub fn with_cluster_fraction(mut self, fraction: f64) -> Self {
        self.cluster_fraction = fraction;
        self
    }

    pub fn with_major_body(mut self, body: MajorBodyInput) -> Self {
        self.major_bodies.push(body);
        self
    }

    pub fn with_size_range(mut self, min_radius_km: f64, max_radius_km: f64) -> Self {
        self.min_body_radius_km = min_radius_km;
        self.max_body_radius_km = max_radius_km;
        self
    }

    pub fn with_size_exponent(mut self, exponent: f64) -> Self {
        self.size_power_law_exponent = exponent;
        self
    }

    pub fn with_radial_concentration(mut self, k: f64) -> Self {
        self.radial_concentration = k;
        self
    }

    /// Belt midpoint in AU
    pub fn midpoint_au(&self) -> f64 {
        0.5 * (self.inner_radius_au + self.outer_radius_au)
    }

    /// True if `semi_major_axis_au` falls inside any configured gap
    pub fn in_gap(&self, semi_major_axis_au: f64) -> bool {
        self.gaps.iter().any(|gap| gap.contains(semi_major_axis_au))
    }

    /// Check the spec for structural errors
    pub fn validate(&self) -> Result<(), BeltSpecError> {
        let (inner, outer) = (self.inner_radius_au, self.outer_radius_au);
        if !(inner > 0.0 && outer > inner && outer.is_finite()) {
            return Err(BeltSpecError::InvalidRadii { inner, outer });
        }

        let (min, max) = (self.min_body_radius_km, self.max_body_radius_km);
        if !(min > 0.0 && max >= min && max.is_finite()) {
            return Err(BeltSpecError::InvalidBodyRadii { min, max });
        }

        if !(0.0..1.0).contains(&self.max_eccentricity) {
            return Err(BeltSpecError::InvalidEccentricity(self.max_eccentricity));
        }

        if !(self.max_inclination_deg >= 0.0 && self.max_inclination_deg.is_finite()) {
            return Err(BeltSpecError::InvalidInclination(self.max_inclination_deg));
        }

        if !(self.radial_concentration >= 0.0 && self.radial_concentration.is_finite()) {
            return Err(BeltSpecError::InvalidRadialConcentration(
                self.radial_concentration,
            ));
        }

        if !self.size_power_law_exponent.is_finite() {
            return Err(BeltSpecError::InvalidSizeExponent(
                self.size_power_law_exponent,
            ));
        }

        if let Some((index, gap)) = self
            .gaps
            .iter()
            .enumerate()
            .find(|(_, gap)| !(gap.half_width_au >= 0.0))
        {
            return Err(BeltSpecError::InvalidGap {
                index,
                half_width: gap.half_width_au,
            });
        }

        if !(0.0..=1.0).contains(&self.cluster_fraction) {
            return Err(BeltSpecError::InvalidClusterFraction(self.cluster_fraction));
        }

        if let Some((index, cluster)) = self
            .clusters
            .iter()
            .enumerate()
            .find(|(_, cluster)| !(cluster.concentration > 0.0))
        {
            return Err(BeltSpecError::InvalidCluster {
                index,
                concentration: cluster.concentration,
            });
        }

        if let Some(body) = self
            .major_bodies
            .iter()
            .find(|body| !(0.0..1.0).contains(&body.eccentricity))
        {
            return Err(BeltSpecError::InvalidMajorBody {
                id: body.id.clone(),
                eccentricity: body.eccentricity,
            });
        }

        Ok(())
    }
}
