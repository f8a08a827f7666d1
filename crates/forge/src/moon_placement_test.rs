use approx::assert_relative_eq;

use celestial::ParentContext;
use celestial::constants::EARTH_MASS_KG;
use seeding::RandomStream;

use crate::moon_placement::{
    MoonBodyGenerator, MoonBodyRequest, MoonSize, MoonSizeTier, PlanetMassBand, PlanetSummary,
    classify_capture, generate_moons, place_moons, sample_moon_count, sample_moon_size,
    sample_orbit_distances,
};

fn jupiter() -> PlanetSummary {
    PlanetSummary::from_earth_units(317.8, 11.2, 5.2)
}

fn earth() -> PlanetSummary {
    PlanetSummary::from_earth_units(1.0, 1.0, 1.0)
}

#[test]
fn test_planet_mass_band() {
    assert_eq!(PlanetMassBand::from_earth_masses(317.8), PlanetMassBand::GasGiant);
    assert_eq!(PlanetMassBand::from_earth_masses(50.0), PlanetMassBand::GasGiant);
    assert_eq!(PlanetMassBand::from_earth_masses(17.1), PlanetMassBand::IceGiant);
    assert_eq!(PlanetMassBand::from_earth_masses(5.0), PlanetMassBand::SuperEarth);
    assert_eq!(PlanetMassBand::from_earth_masses(1.0), PlanetMassBand::Terrestrial);
    assert_eq!(PlanetMassBand::from_earth_masses(0.107), PlanetMassBand::SubTerrestrial);
    assert_eq!(PlanetMassBand::from_earth_masses(0.0022), PlanetMassBand::Dwarf);
}

#[test]
fn test_size_tiers_collapse_bands() {
    assert_eq!(PlanetMassBand::GasGiant.size_tier(), MoonSizeTier::Giant);
    assert_eq!(PlanetMassBand::IceGiant.size_tier(), MoonSizeTier::Ice);
    assert_eq!(PlanetMassBand::SuperEarth.size_tier(), MoonSizeTier::Rocky);
    assert_eq!(PlanetMassBand::Terrestrial.size_tier(), MoonSizeTier::Rocky);
    assert_eq!(PlanetMassBand::SubTerrestrial.size_tier(), MoonSizeTier::Small);
    assert_eq!(PlanetMassBand::Dwarf.size_tier(), MoonSizeTier::Small);
}

#[test]
fn test_moon_count_in_range_and_biased_low() {
    let mut stream = RandomStream::new(42);
    let band = PlanetMassBand::GasGiant;
    let (min, max) = band.moon_count_range();

    let mut histogram = vec![0usize; max + 1];
    for _ in 0..10_000 {
        let n = sample_moon_count(&mut stream, band);
        assert!((min..=max).contains(&n), "count {} outside {}..={}", n, min, max);
        histogram[n] += 1;
    }

    let mean = histogram
        .iter()
        .enumerate()
        .map(|(n, c)| (n * c) as f64)
        .sum::<f64>()
        / 10_000.0;

    assert!(histogram[min] > histogram[max], "{:?}", histogram);
    assert!(mean < (min + max) as f64 / 2.0, "mean count {}", mean);
}

#[test]
fn test_cramped_hill_sphere_yields_no_moons() {
    // Hot Jupiter at 0.01 AU: Hill radius ~1e8 m, below 3 planetary radii
    let planet = PlanetSummary::from_earth_units(317.8, 11.2, 0.01);
    let context = ParentContext::sun_like(0.01);

    for seed in 0..200 {
        let mut stream = RandomStream::new(seed);
        let result = place_moons(&planet, &context, &mut stream);

        assert!(result.hill_radius_m() <= 3.0 * planet.radius_m);
        assert!(result.is_empty(), "seed {} placed {} moons", seed, result.len());
    }
}

#[test]
fn test_zero_mass_planet_yields_no_moons() {
    let planet = PlanetSummary {
        mass_kg: 0.0,
        radius_m: 1.0e6,
        orbital_distance_m: 1.0e11,
    };
    for seed in 0..50 {
        let mut stream = RandomStream::new(seed);
        let result = place_moons(&planet, &ParentContext::sun_like(1.0), &mut stream);
        assert!(result.is_empty());
        assert_eq!(result.hill_radius_m(), 0.0);
    }
}

#[test]
fn test_gas_giants_usually_have_moons() {
    let context = ParentContext::sun_like(5.2);
    let with_moons = (0..100)
        .filter(|&seed| {
            let mut stream = RandomStream::new(seed);
            !place_moons(&jupiter(), &context, &mut stream).is_empty()
        })
        .count();

    assert!(with_moons > 85, "Gas giants should usually have moons: {}/100", with_moons);
}

#[test]
fn test_moons_sorted_and_inside_stable_zone() {
    let context = ParentContext::sun_like(5.2);

    for seed in 0..100 {
        let mut stream = RandomStream::new(seed);
        let result = place_moons(&jupiter(), &context, &mut stream);

        for moon in result.moons() {
            assert!(moon.orbital_distance_m > result.inner_limit_m());
            assert!(moon.orbital_distance_m < result.outer_limit_m());
            assert_relative_eq!(
                moon.hill_fraction,
                moon.orbital_distance_m / result.hill_radius_m()
            );
        }
        for pair in result.moons().windows(2) {
            assert!(pair[0].orbital_distance_m <= pair[1].orbital_distance_m);
        }
    }
}

#[test]
fn test_adjacent_moons_respect_spacing_ratio() {
    let context = ParentContext::sun_like(5.2);

    for seed in 0..100 {
        let mut stream = RandomStream::new(seed);
        let result = place_moons(&jupiter(), &context, &mut stream);

        for pair in result.moons().windows(2) {
            let ratio = pair[1].orbital_distance_m / pair[0].orbital_distance_m;
            assert!(ratio >= 1.3, "seed {}: spacing ratio {}", seed, ratio);
        }
    }
}

#[test]
fn test_orbit_distances_log_range() {
    let mut stream = RandomStream::new(9);
    let (inner, outer) = (1.0e6, 1.0e9);
    let distances = sample_orbit_distances(&mut stream, 4, inner, outer);

    assert_eq!(distances.len(), 4);
    let low = inner * (outer / inner).powf(0.05);
    let high = inner * (outer / inner).powf(0.95);
    for d in &distances {
        assert!(*d >= low * (1.0 - 1e-12) && *d <= high * (1.0 + 1e-12), "{}", d);
    }
}

#[test]
fn test_capture_classification_by_hill_fraction() {
    let mut stream = RandomStream::new(1);

    for _ in 0..500 {
        assert!(classify_capture(&mut stream, 0.41));
        assert!(classify_capture(&mut stream, 0.9));
        assert!(!classify_capture(&mut stream, 0.1));
        assert!(!classify_capture(&mut stream, 0.2499));
    }

    let captured = (0..10_000)
        .filter(|_| classify_capture(&mut stream, 0.3))
        .count();
    assert!(captured > 2_700 && captured < 3_300, "captured {}", captured);
}

#[test]
fn test_regular_band_does_not_consume_draws() {
    let mut a = RandomStream::new(77);
    let mut b = RandomStream::new(77);

    classify_capture(&mut a, 0.1);
    classify_capture(&mut a, 0.5);
    assert_eq!(a.next_seed(), b.next_seed());
}

#[test]
fn test_captured_moons_skew_small() {
    let mut stream = RandomStream::new(3);
    let mut moonlets = 0;
    for _ in 0..5_000 {
        let size = sample_moon_size(&mut stream, true, MoonSizeTier::Giant);
        assert_ne!(size, MoonSize::Giant, "captured moons never reach the largest band");
        if size == MoonSize::Moonlet {
            moonlets += 1;
        }
    }
    assert!(moonlets > 3_800, "moonlets {}", moonlets);
}

#[test]
fn test_regular_moon_sizes_grow_with_planet_tier() {
    let mut stream = RandomStream::new(4);
    let mut large_fraction = |tier: MoonSizeTier| {
        (0..5_000)
            .filter(|_| sample_moon_size(&mut stream, false, tier) >= MoonSize::Major)
            .count()
    };

    let giant = large_fraction(MoonSizeTier::Giant);
    let small = large_fraction(MoonSizeTier::Small);
    assert!(giant > 2 * small, "giant {} vs small {}", giant, small);
}

#[test]
fn test_placement_is_deterministic() {
    let context = ParentContext::sun_like(5.2);

    for seed in [0, 1, 99, 123_456] {
        let a = place_moons(&jupiter(), &context, &mut RandomStream::new(seed));
        let b = place_moons(&jupiter(), &context, &mut RandomStream::new(seed));
        assert_eq!(a, b);
    }
}

#[test]
fn test_moon_seeds_distinct_within_planet() {
    let context = ParentContext::sun_like(5.2);
    let mut stream = RandomStream::new(2024);
    let result = place_moons(&jupiter(), &context, &mut stream);

    let mut seeds: Vec<_> = result.iter().map(|moon| moon.seed).collect();
    let total = seeds.len();
    seeds.sort_unstable();
    seeds.dedup();
    assert_eq!(seeds.len(), total);
}

#[test]
fn test_provenance_records_inputs() {
    let context = ParentContext::sun_like(1.0);
    let mut stream = RandomStream::new(8080);
    stream.uniform_float();

    let result = place_moons(&earth(), &context, &mut stream);
    let provenance = result.provenance();

    assert_eq!(provenance.seed(), 8080);
    assert!(provenance.word_pos() > 0);
    assert!(provenance.is_current_version());
    assert_eq!(provenance.parameters().planet, earth());
    assert_eq!(provenance.parameters().context, context);
}

#[test]
fn test_replay_from_advanced_stream() {
    let context = ParentContext::sun_like(5.2);

    for seed in 0..50 {
        let mut stream = RandomStream::new(seed);
        stream.uniform_float();
        stream.next_seed();

        let original = place_moons(&jupiter(), &context, &mut stream);
        let provenance = original.provenance();
        let replay = place_moons(
            &provenance.parameters().planet,
            &provenance.parameters().context,
            &mut provenance.replay_stream(),
        );

        assert_eq!(replay, original, "seed {}", seed);
    }
}

#[test]
fn test_non_positive_radius_has_no_moons() {
    let context = ParentContext::sun_like(5.2);

    for radius_m in [0.0, -7.0e7, f64::NAN] {
        let planet = PlanetSummary {
            radius_m,
            ..jupiter()
        };
        for seed in 0..20 {
            let result = place_moons(&planet, &context, &mut RandomStream::new(seed));
            assert!(result.is_empty(), "radius {} seed {}", radius_m, seed);
        }
    }
}

#[test]
fn test_generate_moons_delegates_with_satellite_context() {
    let planet = jupiter();
    let context = ParentContext::stellar(1.1, 1.3, 6000.0, 3.0, 5.2);
    let mut requests: Vec<MoonBodyRequest> = Vec::new();

    let mut record = |req: &MoonBodyRequest| {
        requests.push(*req);
        req.seed
    };
    let system = generate_moons(&planet, &context, &mut RandomStream::new(5), &mut record);

    assert_eq!(system.bodies.len(), system.placement.len());
    assert_eq!(requests.len(), system.placement.len());

    for ((moon, body), request) in system.iter().zip(&requests) {
        assert_eq!(*body, moon.seed);
        assert_eq!(request.size, moon.size);
        assert_eq!(request.captured, moon.captured);
        assert_eq!(request.context.stellar_mass, 1.1);
        assert_eq!(request.context.luminosity, 1.3);
        assert_eq!(request.context.orbital_distance_au, 5.2);
        assert_eq!(request.context.parent_body_mass_kg, planet.mass_kg);
        assert_eq!(request.context.parent_body_radius_m, planet.radius_m);
        assert_eq!(request.context.parent_body_distance_m, moon.orbital_distance_m);
    }
}

struct CountingGenerator {
    calls: usize,
}

impl MoonBodyGenerator for CountingGenerator {
    type Body = (usize, MoonSize);

    fn generate(&mut self, request: &MoonBodyRequest) -> Self::Body {
        self.calls += 1;
        (self.calls, request.size)
    }
}

#[test]
fn test_generate_moons_matches_place_moons() {
    let context = ParentContext::sun_like(5.2);
    let mut generator = CountingGenerator { calls: 0 };

    let system = generate_moons(&jupiter(), &context, &mut RandomStream::new(31), &mut generator);
    let placement = place_moons(&jupiter(), &context, &mut RandomStream::new(31));

    assert_eq!(system.placement, placement);
    assert_eq!(generator.calls, placement.len());
    assert!(system.bodies.iter().zip(placement.iter()).all(|(b, m)| b.1 == m.size));
}

#[test]
fn test_earth_mass_summary_round_trip() {
    assert_relative_eq!(earth().mass_earth(), 1.0);
    assert_relative_eq!(earth().mass_kg, EARTH_MASS_KG);
}
