//! Test that the same seed produces identical asteroid belts
//!
//! Usage: RUST_LOG=debug cargo run -p forge --example belt_seed_stability

use forge::{AsteroidBeltSpec, generate_asteroid_belt};
use seeding::{RandomStream, seed_from_name};

fn main() {
    env_logger::init();

    let seed = seed_from_name("sol/main-belt");
    let spec = AsteroidBeltSpec::main_belt()
        .with_cluster(60.0, 10.0)
        .with_cluster_fraction(0.1);

    println!("Testing belt seed stability with seed: {}", seed);
    println!(
        "Belt: {:.2}-{:.2} AU, {} gaps, {} major bodies\n",
        spec.inner_radius_au,
        spec.outer_radius_au,
        spec.gaps.len(),
        spec.major_bodies.len()
    );

    let reference = match generate_asteroid_belt(&spec, &mut RandomStream::new(seed)) {
        Ok(belt) => belt,
        Err(err) => {
            eprintln!("❌ FAIL: invalid belt spec: {}", err);
            std::process::exit(1);
        }
    };

    for body in reference.major() {
        println!(
            "  {:<8} a = {:.4} AU, r = {:.4} AU, {:.1} km, type {}",
            body.id,
            body.elements.semi_major_axis,
            body.position.coords.norm(),
            body.radius_km,
            body.body_type.as_deref().unwrap_or("-")
        );
    }
    println!();

    for run in 1..=5 {
        let belt = match generate_asteroid_belt(&spec, &mut RandomStream::new(seed)) {
            Ok(belt) => belt,
            Err(err) => {
                eprintln!("❌ FAIL: run {}: {}", run, err);
                std::process::exit(1);
            }
        };

        let mismatch = reference
            .bodies()
            .iter()
            .zip(belt.bodies())
            .position(|(a, b)| a != b);

        if belt.len() != reference.len() {
            eprintln!(
                "❌ FAIL: run {} body count differs! {} vs {}",
                run,
                belt.len(),
                reference.len()
            );
            std::process::exit(1);
        }
        if let Some(index) = mismatch {
            eprintln!("❌ FAIL: run {} body {} differs!", run, index);
            std::process::exit(1);
        }

        let in_gap = belt
            .background()
            .filter(|body| spec.in_gap(body.elements.semi_major_axis))
            .count();
        println!(
            "Run {}: {} bodies, {} in gaps, version {}",
            run,
            belt.len(),
            in_gap,
            belt.provenance().generator_version()
        );
    }

    println!("\n✓ PASS: All 5 runs produced identical belts");
}
