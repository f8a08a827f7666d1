//! Physical constants (SI unless noted)

/// Astronomical unit in meters
pub const AU_TO_M: f64 = 1.496e11;

/// Solar mass in kg
pub const SOLAR_MASS_KG: f64 = 1.989e30;

/// Earth mass in kg
pub const EARTH_MASS_KG: f64 = 5.972e24;

/// Earth radius in meters
pub const EARTH_RADIUS_M: f64 = 6.371e6;

/// Solar luminosity in watts
pub const SOLAR_LUMINOSITY_W: f64 = 3.846e26;

/// Stefan-Boltzmann constant (W·m⁻²·K⁻⁴)
pub const STEFAN_BOLTZMANN: f64 = 5.670_374e-8;

/// Gravitational parameter of the Sun in AU³ yr⁻² (G = 4π² in AU/yr/M☉ units)
pub const GM_SUN_AU3_YR2: f64 = 4.0 * std::f64::consts::PI * std::f64::consts::PI;
