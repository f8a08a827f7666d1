use thiserror::Error;

/// Structural problems with an [`AsteroidBeltSpec`](crate::AsteroidBeltSpec)
///
/// Degenerate but well-formed inputs (zero bodies, no gaps, no major bodies)
/// are not errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BeltSpecError {
    #[error("belt radii must satisfy 0 < inner < outer, got {inner} AU and {outer} AU")]
    InvalidRadii { inner: f64, outer: f64 },

    #[error("body radius bounds must satisfy 0 < min <= max, got min = {min} km, max = {max} km")]
    InvalidBodyRadii { min: f64, max: f64 },

    #[error("maximum eccentricity must be in [0, 1), got {0}")]
    InvalidEccentricity(f64),

    #[error("maximum inclination must be non-negative, got {0} degrees")]
    InvalidInclination(f64),

    #[error("radial concentration must be non-negative, got {0}")]
    InvalidRadialConcentration(f64),

    #[error("size power-law exponent must be finite, got {0}")]
    InvalidSizeExponent(f64),

    #[error("gap {index} has invalid half-width {half_width} AU")]
    InvalidGap { index: usize, half_width: f64 },

    #[error("cluster fraction must be in [0, 1], got {0}")]
    InvalidClusterFraction(f64),

    #[error("cluster {index} needs a positive concentration, got {concentration}")]
    InvalidCluster { index: usize, concentration: f64 },

    #[error("major body '{id}' has eccentricity {eccentricity} outside [0, 1)")]
    InvalidMajorBody { id: String, eccentricity: f64 },
}
