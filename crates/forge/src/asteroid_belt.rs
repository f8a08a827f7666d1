//! Asteroid belt generation
//!
//! Produces a population of unnamed background bodies sampled from the belt
//! spec, plus the spec's major bodies placed exactly at their catalogue
//! positions.
//!
//! # Sampling
//!
//! - **Semi-major axis**: rejection sampling of `(4t(1-t))^k` over the
//!   normalized belt position, rejecting gaps (bounded, midpoint fallback)
//! - **Eccentricity / inclination**: `max · u²`, biased toward circular,
//!   in-plane orbits
//! - **Longitude**: uniform, or a wrapped normal around a cluster center
//! - **Radius**: inverse-CDF of dN/dr ∝ r^(-α)
//!
//! # References
//!
//! - Dohnanyi (1969) - "Collisional model of asteroids and their debris"
//! - Kirkwood (1867) - resonance gaps in the main belt

use std::f64::consts::TAU;

use log::{debug, trace, warn};
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

use celestial::constants::AU_TO_M;
use celestial::{Anomaly, OrbitalElements};
use seeding::RandomStream;

use crate::belt_spec::{AsteroidBeltSpec, MajorBodyInput};
use crate::error::BeltSpecError;
use crate::provenance::Provenance;

/// Rejection attempts per semi-major axis before falling back to the midpoint
pub const MAX_SAMPLING_ATTEMPTS: usize = 1000;

/// Exponents this close to 1 use the log-uniform special case
const LOG_UNIFORM_EPSILON: f64 = 1e-6;

/// One belt body, background or major
///
/// Positions and semi-major axes are in AU, angles in radians. `elements`
/// always hold the true anomaly the position was computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeltBody {
    /// Empty for background bodies
    pub id: String,

    pub is_major: bool,

    /// Compositional type tag (major bodies only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_type: Option<String>,

    pub position: Point3<f64>,
    pub elements: OrbitalElements,
    pub radius_km: f64,
}

/// A generated belt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AsteroidBeltResult {
    bodies: Vec<BeltBody>,
    provenance: Provenance<AsteroidBeltSpec>,
}

impl AsteroidBeltResult {
    /// All bodies; background bodies first, then major bodies in input order
    pub fn bodies(&self) -> &[BeltBody] {
        &self.bodies
    }

    pub fn background(&self) -> impl Iterator<Item = &BeltBody> {
        self.bodies.iter().filter(|body| !body.is_major)
    }

    pub fn major(&self) -> impl Iterator<Item = &BeltBody> {
        self.bodies.iter().filter(|body| body.is_major)
    }

    pub fn background_count(&self) -> usize {
        self.background().count()
    }

    pub fn major_count(&self) -> usize {
        self.major().count()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Major body by id
    pub fn find(&self, id: &str) -> Option<&BeltBody> {
        self.major().find(|body| body.id == id)
    }

    pub fn spec(&self) -> &AsteroidBeltSpec {
        self.provenance.parameters()
    }

    pub fn provenance(&self) -> &Provenance<AsteroidBeltSpec> {
        &self.provenance
    }
}

/// Generate a belt from a spec
///
/// The spec is validated first; a structurally malformed spec is the only
/// error. The result records the stream's seed and position and a copy of the
/// spec.
///
/// # Example
/// ```
/// use forge::asteroid_belt::generate_asteroid_belt;
/// use forge::belt_spec::AsteroidBeltSpec;
/// use seeding::RandomStream;
///
/// let spec = AsteroidBeltSpec::main_belt();
/// let mut stream = RandomStream::new(7);
/// let belt = generate_asteroid_belt(&spec, &mut stream).unwrap();
///
/// assert_eq!(belt.background_count(), spec.asteroid_count);
/// assert!(belt.find("ceres").is_some());
/// ```
pub fn generate_asteroid_belt(
    spec: &AsteroidBeltSpec,
    stream: &mut RandomStream,
) -> Result<AsteroidBeltResult, BeltSpecError> {
    spec.validate()?;
    let provenance = Provenance::new(stream, spec.clone());

    let mut bodies = Vec::with_capacity(spec.asteroid_count + spec.major_bodies.len());
    bodies.extend((0..spec.asteroid_count).map(|_| sample_background_body(stream, spec)));
    bodies.extend(spec.major_bodies.iter().map(place_major_body));

    trace!(
        "belt {:.2}-{:.2} AU: {} background, {} major bodies",
        spec.inner_radius_au,
        spec.outer_radius_au,
        spec.asteroid_count,
        spec.major_bodies.len()
    );

    Ok(AsteroidBeltResult {
        bodies,
        provenance,
    })
}

/// Sample one unnamed background body
pub fn sample_background_body(stream: &mut RandomStream, spec: &AsteroidBeltSpec) -> BeltBody {
    let semi_major_axis = sample_semi_major_axis(stream, spec);
    let eccentricity = spec.max_eccentricity * stream.uniform_float().powi(2);
    let inclination = spec.max_inclination_deg.to_radians() * stream.uniform_float().powi(2);

    let longitude = sample_longitude(stream, spec);
    let longitude_ascending_node = stream.uniform_float_range(0.0, TAU);
    let argument_of_periapsis = stream.uniform_float_range(0.0, TAU);

    // ν = λ - Ω - ω, so the body sits at the sampled true longitude
    // (ν = λ - ω alone would rotate clusters by Ω)
    let true_anomaly = wrap_angle(longitude - longitude_ascending_node - argument_of_periapsis);

    let radius_km = sample_power_law_radius(
        stream,
        spec.min_body_radius_km,
        spec.max_body_radius_km,
        spec.size_power_law_exponent,
    );

    let elements = OrbitalElements {
        semi_major_axis,
        eccentricity,
        inclination,
        longitude_ascending_node,
        argument_of_periapsis,
        anomaly: Anomaly::True(true_anomaly),
    };

    BeltBody {
        id: String::new(),
        is_major: false,
        body_type: None,
        position: elements.position(),
        elements,
        radius_km,
    }
}

/// Place a major body exactly as specified
pub fn place_major_body(input: &MajorBodyInput) -> BeltBody {
    let elements = OrbitalElements::from_degrees(
        input.semi_major_axis_m / AU_TO_M,
        input.eccentricity,
        input.inclination_deg,
        input.longitude_ascending_node_deg,
        input.argument_of_periapsis_deg,
        input.mean_anomaly_deg,
    )
    .with_true_anomaly();

    BeltBody {
        id: input.id.clone(),
        is_major: true,
        body_type: Some(input.body_type.clone()),
        position: elements.position(),
        elements,
        radius_km: input.radius_km,
    }
}

/// Radial density at normalized belt position `t`, peak-normalized to 1
///
/// Proportional to `t^k (1 - t)^k`; `k = 0` is uniform.
#[inline]
pub fn radial_density(t: f64, concentration: f64) -> f64 {
    if concentration <= 0.0 {
        return 1.0;
    }
    (4.0 * t * (1.0 - t)).powf(concentration)
}

/// Rejection-sample a semi-major axis in AU
///
/// Candidates falling in a gap are rejected, so background bodies never land
/// in one. After [`MAX_SAMPLING_ATTEMPTS`] the belt midpoint is returned
/// without a gap check, trading purity for guaranteed termination.
pub fn sample_semi_major_axis(stream: &mut RandomStream, spec: &AsteroidBeltSpec) -> f64 {
    let width = spec.outer_radius_au - spec.inner_radius_au;

    for _ in 0..MAX_SAMPLING_ATTEMPTS {
        let t = stream.uniform_float();
        let threshold = stream.uniform_float();
        if threshold >= radial_density(t, spec.radial_concentration) {
            continue;
        }

        let semi_major_axis = spec.inner_radius_au + t * width;
        if !spec.in_gap(semi_major_axis) {
            return semi_major_axis;
        }
    }

    let midpoint = spec.midpoint_au();
    if spec.in_gap(midpoint) {
        warn!(
            "semi-major axis sampling exhausted; midpoint {:.4} AU lies inside a gap",
            midpoint
        );
    } else {
        debug!(
            "semi-major axis sampling exhausted after {} attempts; using midpoint {:.4} AU",
            MAX_SAMPLING_ATTEMPTS, midpoint
        );
    }
    midpoint
}

/// Longitude in radians, clustered with probability `cluster_fraction`
fn sample_longitude(stream: &mut RandomStream, spec: &AsteroidBeltSpec) -> f64 {
    if !spec.clusters.is_empty() && stream.chance(spec.cluster_fraction) {
        let index = stream.uniform_int_range(0, spec.clusters.len() as i64 - 1) as usize;
        let cluster = &spec.clusters[index];
        sample_wrapped_normal(stream, cluster.longitude_deg.to_radians(), cluster.spread())
    } else {
        stream.uniform_float_range(0.0, TAU)
    }
}

/// Wrapped normal in `[0, 2π)`, approximating a von Mises distribution
pub fn sample_wrapped_normal(stream: &mut RandomStream, mean: f64, spread: f64) -> f64 {
    wrap_angle(stream.normal(mean, spread))
}

/// Reduce an angle to `[0, 2π)`
///
/// `rem_euclid` rounds tiny negative inputs up to exactly 2π; those map to 0.
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Inverse-CDF sample of dN/dr ∝ r^(-α) over `[min, max]`
///
/// ```text
/// r = [min^(1-α) + u (max^(1-α) - min^(1-α))]^(1/(1-α))     α ≠ 1
/// r = min (max/min)^u                                        α = 1
/// ```
pub fn sample_power_law_radius(stream: &mut RandomStream, min: f64, max: f64, alpha: f64) -> f64 {
    let u = stream.uniform_float();
    if (alpha - 1.0).abs() < LOG_UNIFORM_EPSILON {
        return min * (max / min).powf(u);
    }

    let one_minus_alpha = 1.0 - alpha;
    let low = min.powf(one_minus_alpha);
    let high = max.powf(one_minus_alpha);
    (low + u * (high - low))
        .powf(1.0 / one_minus_alpha)
        .clamp(min, max)
}
