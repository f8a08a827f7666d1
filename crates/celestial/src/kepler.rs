//! Kepler's equation and anomaly conversions
//!
//! The three anomalies parameterize position along an ellipse:
//!
//! ```text
//! M = E - e sin(E)                                   (Kepler's equation)
//! ν = 2 atan2(√(1+e) sin(E/2), √(1-e) cos(E/2))
//! ```
//!
//! All angles are radians. Orbits are elliptical (`0 ≤ e < 1`).

/// Below this eccentricity an orbit is treated as circular
const CIRCULAR_EPSILON: f64 = 1e-10;

/// Default residual tolerance for [`solve_kepler`]
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default Newton-Raphson iteration cap for [`solve_kepler`]
pub const DEFAULT_MAX_ITERATIONS: usize = 50;

/// Solve Kepler's equation for the eccentric anomaly with default settings
///
/// See [`solve_kepler_with`].
#[inline]
pub fn solve_kepler(mean_anomaly: f64, eccentricity: f64) -> f64 {
    solve_kepler_with(
        mean_anomaly,
        eccentricity,
        DEFAULT_TOLERANCE,
        DEFAULT_MAX_ITERATIONS,
    )
}

/// Solve `M = E - e sin(E)` for `E` using Newton-Raphson iteration
///
/// Circular orbits (`e < 1e-10`) return the mean anomaly unchanged. Iteration
/// stops once `|E - e sin(E) - M| < tolerance` or after `max_iterations`
/// steps. Non-convergence is not an error: the best current estimate is
/// returned and callers needing a guarantee should re-check the residual.
///
/// # Example
/// ```
/// use celestial::solve_kepler;
///
/// let (m, e) = (1.2_f64, 0.4_f64);
/// let ecc = solve_kepler(m, e);
/// assert!((ecc - e * ecc.sin() - m).abs() < 1e-10);
/// ```
pub fn solve_kepler_with(
    mean_anomaly: f64,
    eccentricity: f64,
    tolerance: f64,
    max_iterations: usize,
) -> f64 {
    if eccentricity < CIRCULAR_EPSILON {
        return mean_anomaly;
    }

    // Danby's starting guess for high eccentricity, E₀ = M + e sin(M) otherwise
    let mut ecc_anomaly = if eccentricity > 0.8 {
        mean_anomaly + 0.85 * eccentricity * mean_anomaly.sin().signum()
    } else {
        mean_anomaly + eccentricity * mean_anomaly.sin()
    };

    for _ in 0..max_iterations {
        let residual = ecc_anomaly - eccentricity * ecc_anomaly.sin() - mean_anomaly;
        if residual.abs() < tolerance {
            break;
        }
        let derivative = 1.0 - eccentricity * ecc_anomaly.cos();
        ecc_anomaly -= residual / derivative;
    }

    ecc_anomaly
}

/// Eccentric anomaly to true anomaly
pub fn eccentric_to_true(ecc_anomaly: f64, eccentricity: f64) -> f64 {
    if eccentricity < CIRCULAR_EPSILON {
        return ecc_anomaly;
    }
    let half = ecc_anomaly / 2.0;
    2.0 * f64::atan2(
        (1.0 + eccentricity).sqrt() * half.sin(),
        (1.0 - eccentricity).sqrt() * half.cos(),
    )
}

/// Mean anomaly to true anomaly
pub fn mean_to_true(mean_anomaly: f64, eccentricity: f64) -> f64 {
    eccentric_to_true(solve_kepler(mean_anomaly, eccentricity), eccentricity)
}

/// True anomaly to eccentric anomaly
pub fn true_to_eccentric(true_anomaly: f64, eccentricity: f64) -> f64 {
    if eccentricity < CIRCULAR_EPSILON {
        return true_anomaly;
    }
    let half = true_anomaly / 2.0;
    2.0 * f64::atan2(
        (1.0 - eccentricity).sqrt() * half.sin(),
        (1.0 + eccentricity).sqrt() * half.cos(),
    )
}

/// Eccentric anomaly to mean anomaly (Kepler's equation, forward direction)
#[inline]
pub fn eccentric_to_mean(ecc_anomaly: f64, eccentricity: f64) -> f64 {
    ecc_anomaly - eccentricity * ecc_anomaly.sin()
}

/// True anomaly to mean anomaly
pub fn true_to_mean(true_anomaly: f64, eccentricity: f64) -> f64 {
    eccentric_to_mean(true_to_eccentric(true_anomaly, eccentricity), eccentricity)
}
