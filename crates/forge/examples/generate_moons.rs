//! Generate moons CSV for a sweep of planet masses
//!
//! Usage: cargo run -p forge --example generate_moons
//!
//! Output: one row per moon, plus a row with moon_idx = -1 for moonless planets

use celestial::ParentContext;
use forge::{PlanetSummary, place_moons};
use seeding::{RandomStream, derive_indexed, seed_from_name};

fn main() {
    env_logger::init();

    let root = seed_from_name("moon-sweep");
    let masses_earth: [f64; 7] = [0.005, 0.1, 1.0, 5.0, 17.0, 95.0, 318.0];
    let distances_au: [f64; 3] = [0.05, 1.0, 5.2];
    let systems_per_case = 100;

    // CSV header
    println!(
        "case,system_id,mass_earth,band,distance_au,hill_m,moon_idx,orbit_m,hill_frac,captured,size"
    );

    let cases = masses_earth
        .iter()
        .flat_map(|mass| distances_au.iter().map(move |distance| (*mass, *distance)));

    for (case, (mass_earth, distance_au)) in cases.enumerate() {
        // Rough mass-radius relation; only the inner limit depends on it
        let radius_earth = if mass_earth < 2.0 {
            mass_earth.powf(0.27)
        } else {
            mass_earth.powf(0.5).min(11.2)
        };
        let planet = PlanetSummary::from_earth_units(mass_earth, radius_earth, distance_au);
        let context = ParentContext::sun_like(distance_au);
        let case_seed = derive_indexed(root, case as i64);

        for system_id in 0..systems_per_case {
            let mut stream = RandomStream::new(derive_indexed(case_seed, system_id));
            let moons = place_moons(&planet, &context, &mut stream);

            let prefix = format!(
                "{},{},{:.3},{},{:.2},{:.4e}",
                case,
                system_id,
                mass_earth,
                moons.band(),
                distance_au,
                moons.hill_radius_m()
            );

            if moons.is_empty() {
                println!("{},-1,,,,", prefix);
                continue;
            }

            for (moon_idx, moon) in moons.iter().enumerate() {
                println!(
                    "{},{},{:.4e},{:.4},{},{:?}",
                    prefix,
                    moon_idx,
                    moon.orbital_distance_m,
                    moon.hill_fraction,
                    moon.captured,
                    moon.size
                );
            }
        }
    }
}
