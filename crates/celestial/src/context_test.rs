use approx::assert_relative_eq;

use crate::constants::{AU_TO_M, EARTH_MASS_KG, EARTH_RADIUS_M};
use crate::context::ParentContext;

#[test]
fn test_stellar_context_has_no_parent_body() {
    let ctx = ParentContext::sun_like(1.0);
    assert!(!ctx.has_parent_body());
    assert_eq!(ctx.parent_hill_radius_m(), 0.0);
}

#[test]
fn test_for_satellite_keeps_star_and_sets_parent() {
    let ctx = ParentContext::stellar(0.8, 0.4, 5000.0, 2.0, 0.7);
    let moon_ctx = ctx.for_satellite(EARTH_MASS_KG, EARTH_RADIUS_M, 3.84e8);

    assert!(moon_ctx.has_parent_body());
    assert_eq!(moon_ctx.stellar_mass, 0.8);
    assert_eq!(moon_ctx.luminosity, 0.4);
    assert_eq!(moon_ctx.effective_temperature, 5000.0);
    assert_eq!(moon_ctx.age_gyr, 2.0);
    assert_eq!(moon_ctx.orbital_distance_au, 0.7);
    assert_eq!(moon_ctx.parent_body_mass_kg, EARTH_MASS_KG);
    assert_eq!(moon_ctx.parent_body_radius_m, EARTH_RADIUS_M);
    assert_eq!(moon_ctx.parent_body_distance_m, 3.84e8);
}

#[test]
fn test_zero_mass_parent_is_not_a_parent() {
    let ctx = ParentContext::sun_like(1.0).for_satellite(0.0, EARTH_RADIUS_M, 1.0e8);
    assert!(!ctx.has_parent_body());
}

#[test]
fn test_parent_hill_radius_earth() {
    let ctx = ParentContext::sun_like(1.0).for_satellite(EARTH_MASS_KG, EARTH_RADIUS_M, 3.84e8);
    let r_hill = ctx.parent_hill_radius_m();
    assert!(r_hill > 1.4e9 && r_hill < 1.6e9, "Hill radius: {}", r_hill);
    assert!(r_hill < AU_TO_M);
}

#[test]
fn test_context_temperature_matches_free_function() {
    let ctx = ParentContext::sun_like(1.0);
    assert_relative_eq!(
        ctx.equilibrium_temperature(0.3),
        crate::limits::equilibrium_temperature(1.0, 1.0, 0.3)
    );
}
