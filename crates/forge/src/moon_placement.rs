//! Moon (satellite) placement
//!
//! Decides how many moons a planet has, where each one orbits, whether it is a
//! captured (irregular) body, and a coarse size class. The physical moon itself
//! is produced by an external [`MoonBodyGenerator`] keyed by a per-moon seed.
//!
//! # Algorithm
//!
//! 1. **Count**: mass band → (min, max, P(any moons)); count biased low
//! 2. **Stability gate**: positive radius; Hill radius must reach 3 planetary radii
//! 3. **Spacing**: log-uniform between 3 R_p and 0.4 R_Hill, ≥ 1.3× ratio
//! 4. **Capture**: by distance as a fraction of the Hill radius
//! 5. **Size**: weighted tables per planet tier (captured moons skew small)
//! 6. **Seed**: one plain draw from the planet stream per moon
//!
//! # References
//!
//! - Domingos et al. (2006) - "Stable satellites around extrasolar giant planets"
//! - Jewitt & Haghighipour (2007) - "Irregular satellites of the planets"
//! - Canup & Ward (2006) - "A common mass scaling for satellite systems"

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use celestial::constants::{AU_TO_M, EARTH_MASS_KG, EARTH_RADIUS_M};
use celestial::{ParentContext, hill_sphere_radius};
use seeding::{RandomStream, Seed};

use crate::provenance::Provenance;

// =============================================================================
// Placement Constants
// =============================================================================

/// Innermost moon orbit in planetary radii
const INNER_LIMIT_PLANET_RADII: f64 = 3.0;

/// Outermost moon orbit as a fraction of the Hill radius
const OUTER_LIMIT_HILL_FRACTION: f64 = 0.40;

/// Beyond this Hill fraction a moon is always captured
const ALWAYS_CAPTURED_HILL_FRACTION: f64 = 0.40;

/// Beyond this Hill fraction a moon may be captured
const POSSIBLY_CAPTURED_HILL_FRACTION: f64 = 0.25;

/// Capture probability between the two fractions above
const CAPTURE_PROBABILITY: f64 = 0.30;

/// Exponent applied to the count draw (see `sample_moon_count`)
const COUNT_BIAS_EXPONENT: f64 = 0.7;

/// Minimum distance ratio between any two moons
const MIN_SPACING_RATIO: f64 = 1.3;

/// Jitter amplitude as a fraction of one slot width
const SLOT_JITTER: f64 = 0.30;

/// Usable fraction of the log range
const PLACEMENT_MARGIN: (f64, f64) = (0.05, 0.95);

/// Attempts per moon before accepting a crowded slot
const MAX_SPACING_ATTEMPTS: usize = 10;

// =============================================================================
// Planet Classification
// =============================================================================

/// Planet mass band used for moon occurrence rates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlanetMassBand {
    /// ≥ 50 M⊕
    GasGiant,
    /// ≥ 10 M⊕
    IceGiant,
    /// ≥ 2 M⊕
    SuperEarth,
    /// ≥ 0.3 M⊕
    Terrestrial,
    /// ≥ 0.01 M⊕
    SubTerrestrial,
    /// < 0.01 M⊕
    Dwarf,
}

impl PlanetMassBand {
    pub fn from_earth_masses(mass_earth: f64) -> Self {
        match mass_earth {
            m if m >= 50.0 => Self::GasGiant,
            m if m >= 10.0 => Self::IceGiant,
            m if m >= 2.0 => Self::SuperEarth,
            m if m >= 0.3 => Self::Terrestrial,
            m if m >= 0.01 => Self::SubTerrestrial,
            _ => Self::Dwarf,
        }
    }

    /// Inclusive (min, max) moon count once a planet has any moons
    pub fn moon_count_range(&self) -> (usize, usize) {
        match self {
            Self::GasGiant => (2, 8),
            Self::IceGiant => (1, 6),
            Self::SuperEarth => (1, 3),
            Self::Terrestrial => (1, 2),
            Self::SubTerrestrial => (1, 2),
            Self::Dwarf => (1, 1),
        }
    }

    /// Probability that a planet in this band has any moons at all
    pub fn moon_probability(&self) -> f64 {
        match self {
            Self::GasGiant => 0.95,
            Self::IceGiant => 0.85,
            Self::SuperEarth => 0.40,
            Self::Terrestrial => 0.30,
            Self::SubTerrestrial => 0.15,
            Self::Dwarf => 0.10,
        }
    }

    /// Collapsed tier selecting the regular-moon size table
    pub fn size_tier(&self) -> MoonSizeTier {
        match self {
            Self::GasGiant => MoonSizeTier::Giant,
            Self::IceGiant => MoonSizeTier::Ice,
            Self::SuperEarth | Self::Terrestrial => MoonSizeTier::Rocky,
            Self::SubTerrestrial | Self::Dwarf => MoonSizeTier::Small,
        }
    }
}

impl std::fmt::Display for PlanetMassBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GasGiant => write!(f, "Gas Giant"),
            Self::IceGiant => write!(f, "Ice Giant"),
            Self::SuperEarth => write!(f, "Super-Earth"),
            Self::Terrestrial => write!(f, "Terrestrial"),
            Self::SubTerrestrial => write!(f, "Sub-Terrestrial"),
            Self::Dwarf => write!(f, "Dwarf"),
        }
    }
}

/// Planet-mass tier for regular moon sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MoonSizeTier {
    Giant,
    Ice,
    Rocky,
    Small,
}

/// Coarse moon size class, smallest to largest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MoonSize {
    /// Rubble-pile moonlet (< ~50 km, Phobos-like)
    Moonlet,
    /// Minor moon (~50-500 km, Mimas-like)
    Minor,
    /// Major moon (~500-2000 km, Europa-like)
    Major,
    /// Planet-sized moon (> ~2000 km, Ganymede-like)
    Giant,
}

const MOON_SIZES: [MoonSize; 4] = [
    MoonSize::Moonlet,
    MoonSize::Minor,
    MoonSize::Major,
    MoonSize::Giant,
];

/// Captured moons are overwhelmingly small
const CAPTURED_SIZE_WEIGHTS: [f64; 4] = [0.80, 0.18, 0.02, 0.00];

impl MoonSizeTier {
    /// Weights over [`MoonSize`] for regular (in-situ) moons
    pub fn regular_size_weights(&self) -> [f64; 4] {
        match self {
            Self::Giant => [0.30, 0.30, 0.25, 0.15],
            Self::Ice => [0.40, 0.35, 0.20, 0.05],
            Self::Rocky => [0.50, 0.30, 0.15, 0.05],
            Self::Small => [0.70, 0.25, 0.05, 0.00],
        }
    }
}

// =============================================================================
// Inputs and Results
// =============================================================================

/// Physical and orbital summary of the host planet (SI units)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetSummary {
    pub mass_kg: f64,
    pub radius_m: f64,
    /// Semi-major axis of the planet around its star
    pub orbital_distance_m: f64,
}

impl PlanetSummary {
    /// Build from Earth masses, Earth radii and AU
    pub fn from_earth_units(mass_earth: f64, radius_earth: f64, orbital_distance_au: f64) -> Self {
        Self {
            mass_kg: mass_earth * EARTH_MASS_KG,
            radius_m: radius_earth * EARTH_RADIUS_M,
            orbital_distance_m: orbital_distance_au * AU_TO_M,
        }
    }

    pub fn mass_earth(&self) -> f64 {
        self.mass_kg / EARTH_MASS_KG
    }
}

/// Everything needed to replay a placement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoonPlacementParameters {
    pub planet: PlanetSummary,
    pub context: ParentContext,
}

/// One placed moon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedMoon {
    /// Orbital distance from the planet center in meters
    pub orbital_distance_m: f64,

    /// Orbital distance as a fraction of the planet's Hill radius
    pub hill_fraction: f64,

    /// Captured (irregular) rather than formed in place
    pub captured: bool,

    pub size: MoonSize,

    /// Seed for the moon's own body generation
    pub seed: Seed,
}

/// Moons of one planet, innermost first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoonPlacementResult {
    moons: Vec<PlacedMoon>,
    band: PlanetMassBand,
    hill_radius_m: f64,
    inner_limit_m: f64,
    outer_limit_m: f64,
    provenance: Provenance<MoonPlacementParameters>,
}

impl MoonPlacementResult {
    pub fn moons(&self) -> &[PlacedMoon] {
        &self.moons
    }

    pub fn len(&self) -> usize {
        self.moons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moons.is_empty()
    }

    pub fn band(&self) -> PlanetMassBand {
        self.band
    }

    pub fn hill_radius_m(&self) -> f64 {
        self.hill_radius_m
    }

    /// Innermost allowed orbit (3 planetary radii)
    pub fn inner_limit_m(&self) -> f64 {
        self.inner_limit_m
    }

    /// Outermost allowed orbit (40% of the Hill radius)
    pub fn outer_limit_m(&self) -> f64 {
        self.outer_limit_m
    }

    pub fn provenance(&self) -> &Provenance<MoonPlacementParameters> {
        &self.provenance
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlacedMoon> {
        self.moons.iter()
    }
}

impl<'a> IntoIterator for &'a MoonPlacementResult {
    type Item = &'a PlacedMoon;
    type IntoIter = std::slice::Iter<'a, PlacedMoon>;

    fn into_iter(self) -> Self::IntoIter {
        self.moons.iter()
    }
}

// =============================================================================
// Body Generation Boundary
// =============================================================================

/// Everything an external body generator receives for one moon
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonBodyRequest {
    pub seed: Seed,
    pub size: MoonSize,
    pub captured: bool,
    /// Star properties unchanged, parent body set to the host planet
    pub context: ParentContext,
}

/// External generator producing a physical moon body from a request
///
/// Any `FnMut(&MoonBodyRequest) -> B` closure is a generator.
pub trait MoonBodyGenerator {
    type Body;

    fn generate(&mut self, request: &MoonBodyRequest) -> Self::Body;
}

impl<B, F> MoonBodyGenerator for F
where
    F: FnMut(&MoonBodyRequest) -> B,
{
    type Body = B;

    fn generate(&mut self, request: &MoonBodyRequest) -> B {
        self(request)
    }
}

/// Placement plus one opaque generated body per moon, in the same order
#[derive(Debug, Clone)]
pub struct GeneratedMoonSystem<B> {
    pub placement: MoonPlacementResult,
    pub bodies: Vec<B>,
}

impl<B> GeneratedMoonSystem<B> {
    pub fn iter(&self) -> impl Iterator<Item = (&PlacedMoon, &B)> {
        self.placement.moons.iter().zip(self.bodies.iter())
    }
}

// =============================================================================
// Moon Placement
// =============================================================================

/// Place the moons of one planet
///
/// Zero moons is a valid outcome, not an error. A planet with a non-positive
/// radius gets zero moons. The result records the stream's seed and position;
/// replaying [`Provenance::replay_stream`] with the same inputs reproduces the
/// placement.
///
/// # Arguments
/// * `planet` - Host planet summary
/// * `context` - Star the planet orbits
/// * `stream` - Random stream owned by this planet
///
/// # Example
/// ```
/// use celestial::ParentContext;
/// use forge::moon_placement::{PlanetSummary, place_moons};
/// use seeding::RandomStream;
///
/// let jupiter = PlanetSummary::from_earth_units(317.8, 11.2, 5.2);
/// let mut stream = RandomStream::new(42);
/// let moons = place_moons(&jupiter, &ParentContext::sun_like(5.2), &mut stream);
///
/// for pair in moons.moons().windows(2) {
///     assert!(pair[0].orbital_distance_m <= pair[1].orbital_distance_m);
/// }
/// ```
pub fn place_moons(
    planet: &PlanetSummary,
    context: &ParentContext,
    stream: &mut RandomStream,
) -> MoonPlacementResult {
    let band = PlanetMassBand::from_earth_masses(planet.mass_earth());
    let hill_radius_m = hill_sphere_radius(
        planet.mass_kg,
        context.stellar_mass_kg(),
        planet.orbital_distance_m,
    );
    let inner_limit_m = INNER_LIMIT_PLANET_RADII * planet.radius_m;
    let outer_limit_m = OUTER_LIMIT_HILL_FRACTION * hill_radius_m;

    let mut result = MoonPlacementResult {
        moons: Vec::new(),
        band,
        hill_radius_m,
        inner_limit_m,
        outer_limit_m,
        provenance: Provenance::new(
            stream,
            MoonPlacementParameters {
                planet: *planet,
                context: *context,
            },
        ),
    };

    if !stream.chance(band.moon_probability()) {
        trace!("{} planet drew no moons", band);
        return result;
    }
    let count = sample_moon_count(stream, band);

    let inner_valid = planet.radius_m > 0.0 && inner_limit_m.is_finite();
    if !inner_valid || !(hill_radius_m >= inner_limit_m) || outer_limit_m <= inner_limit_m {
        debug!(
            "Hill radius {:.3e} m leaves no stable zone above {:.3e} m; placing no moons",
            hill_radius_m, inner_limit_m
        );
        return result;
    }

    let distances = sample_orbit_distances(stream, count, inner_limit_m, outer_limit_m);
    let tier = band.size_tier();

    result.moons = distances
        .into_iter()
        .map(|orbital_distance_m| {
            let hill_fraction = orbital_distance_m / hill_radius_m;
            let captured = classify_capture(stream, hill_fraction);
            let size = sample_moon_size(stream, captured, tier);
            let seed = stream.next_seed();
            PlacedMoon {
                orbital_distance_m,
                hill_fraction,
                captured,
                size,
                seed,
            }
        })
        .collect();

    trace!(
        "{} planet: {} moons between {:.3e} and {:.3e} m",
        band,
        result.moons.len(),
        inner_limit_m,
        outer_limit_m
    );

    result
}

/// Place moons and hand each one to an external body generator
///
/// The generator is invoked innermost first with the moon's seed, size class,
/// capture flag and a satellite context derived from `context`.
pub fn generate_moons<G: MoonBodyGenerator>(
    planet: &PlanetSummary,
    context: &ParentContext,
    stream: &mut RandomStream,
    generator: &mut G,
) -> GeneratedMoonSystem<G::Body> {
    let placement = place_moons(planet, context, stream);

    let bodies = placement
        .iter()
        .map(|moon| {
            generator.generate(&MoonBodyRequest {
                seed: moon.seed,
                size: moon.size,
                captured: moon.captured,
                context: context.for_satellite(
                    planet.mass_kg,
                    planet.radius_m,
                    moon.orbital_distance_m,
                ),
            })
        })
        .collect();

    GeneratedMoonSystem { placement, bodies }
}

/// Sample a moon count in the band's range, biased toward the low end
///
/// `1 - u^0.7` concentrates near zero, so single and double moon systems are
/// more common than maxed-out ones. The bare `u^0.7` form would skew high.
pub fn sample_moon_count(stream: &mut RandomStream, band: PlanetMassBand) -> usize {
    let (min, max) = band.moon_count_range();
    let t = 1.0 - stream.uniform_float().powf(COUNT_BIAS_EXPONENT);
    let span = (max - min + 1) as f64;
    (min + (t * span).floor() as usize).min(max)
}

/// Log-uniform orbit distances with a soft minimum spacing ratio, ascending
///
/// Slot `i` of `count` sits at `(i + 1) / (count + 1)` of the log range, is
/// jittered by ±30% of a slot and clamped to [0.05, 0.95]. A candidate closer
/// than 1.3× to an already placed moon is redrawn up to 10 times; after that
/// the last candidate is kept.
pub fn sample_orbit_distances(
    stream: &mut RandomStream,
    count: usize,
    inner_m: f64,
    outer_m: f64,
) -> Vec<f64> {
    let log_inner = inner_m.ln();
    let log_span = outer_m.ln() - log_inner;
    let slot = 1.0 / (count as f64 + 1.0);

    let mut placed: Vec<f64> = Vec::with_capacity(count);
    for i in 0..count {
        let base = (i as f64 + 1.0) * slot;
        let mut candidate = 0.0;

        for attempt in 0..MAX_SPACING_ATTEMPTS {
            let jitter = stream.uniform_float_range(-SLOT_JITTER, SLOT_JITTER) * slot;
            let fraction = (base + jitter).clamp(PLACEMENT_MARGIN.0, PLACEMENT_MARGIN.1);
            candidate = (log_inner + fraction * log_span).exp();

            if is_well_spaced(candidate, &placed) {
                break;
            }
            if attempt + 1 == MAX_SPACING_ATTEMPTS {
                debug!(
                    "moon {} of {} kept at {:.3e} m without 1.3x spacing",
                    i + 1,
                    count,
                    candidate
                );
            }
        }

        placed.push(candidate);
    }

    placed.sort_by(f64::total_cmp);
    placed
}

fn is_well_spaced(candidate: f64, placed: &[f64]) -> bool {
    placed.iter().all(|&other| {
        let ratio = candidate.max(other) / candidate.min(other);
        ratio >= MIN_SPACING_RATIO
    })
}

/// Captured (irregular) or regular, from the Hill-radius fraction
///
/// Only the middle band consumes a draw.
pub fn classify_capture(stream: &mut RandomStream, hill_fraction: f64) -> bool {
    if hill_fraction > ALWAYS_CAPTURED_HILL_FRACTION {
        true
    } else if hill_fraction >= POSSIBLY_CAPTURED_HILL_FRACTION {
        stream.chance(CAPTURE_PROBABILITY)
    } else {
        false
    }
}

/// Size class from the captured table or the tier's regular table
pub fn sample_moon_size(
    stream: &mut RandomStream,
    captured: bool,
    tier: MoonSizeTier,
) -> MoonSize {
    let weights = if captured {
        CAPTURED_SIZE_WEIGHTS
    } else {
        tier.regular_size_weights()
    };
    stream
        .weighted_choice(&MOON_SIZES, &weights)
        .copied()
        .unwrap_or(MoonSize::Moonlet)
}
