//! # Planet ephemeris engine
//!
//! This module defines the [`PlanetEphemeris`] struct, the façade that wires together:
//!
//! 1. **Epoch conversion** ([`crate::epoch`]) – calendar date → fractional day count.
//! 2. **Secular element models** ([`crate::planets`]) – one linear model per planet.
//! 3. **Outer-planet perturbations** – the fixed trigonometric correction applied to
//!    Jupiter, Saturn and Uranus after the raw models are evaluated.
//!
//! The engine computes everything once at construction and retains the eight element
//! sets for its lifetime. Each instance owns its results exclusively: separate
//! invocations share no state, so independent threads may each build and query their
//! own engine without synchronization.
//!
//! ## Typical usage
//!
//! ```rust
//! use heliopos::ephemeris::PlanetEphemeris;
//! use heliopos::planets::Planet;
//!
//! // Elements of all eight planets on 2024 Jan 1, 00:00 UT
//! let ephemeris = PlanetEphemeris::new(2024., 1., 1., 0., 0.);
//!
//! let mars = ephemeris.get(Planet::Mars);
//! println!("Mars mean anomaly: {}°", mars.mean_anomaly);
//!
//! for (planet, elements) in ephemeris.iter() {
//!     println!("{planet}: a = {} AU", elements.semi_major_axis);
//! }
//! ```

use crate::constants::Days;
use crate::epoch::calendar_to_day_count;
use crate::orbital_elements::OrbitalElements;
use crate::perturbations::perturb_outer_planets;
use crate::planets::Planet;

/// Low-precision heliocentric elements of the eight major planets at one instant.
///
/// Construction evaluates the full pipeline (epoch conversion, eight secular models,
/// outer-planet perturbation step); every accessor afterwards is idempotent and
/// side-effect-free. The planet order is fixed: Mercury, Venus, Earth, Mars,
/// Jupiter, Saturn, Uranus, Neptune.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetEphemeris {
    day: Days,
    planets: [OrbitalElements; 8],
}

impl PlanetEphemeris {
    /// Build the ephemeris for a calendar date and time (UT).
    ///
    /// All inputs are real numbers and none of them is range-checked; out-of-range
    /// values produce a mathematically defined but astronomically meaningless
    /// result (see [`calendar_to_day_count`]).
    ///
    /// Arguments
    /// ---------
    /// * `year`: calendar year
    /// * `month`: calendar month
    /// * `day`: calendar day, may be fractional
    /// * `hour`: hour of the day
    /// * `minute`: minute of the hour
    pub fn new(year: f64, month: f64, day: f64, hour: f64, minute: f64) -> Self {
        Self::from_day_count(calendar_to_day_count(year, month, day, hour, minute))
    }

    /// Build the ephemeris directly from a day count relative to 2000 Jan 0.0 UT.
    pub fn from_day_count(day: Days) -> Self {
        let [mercury, venus, earth, mars, jupiter, saturn, uranus, neptune] =
            Planet::ALL.map(|planet| planet.elements_at(day));

        let (jupiter, saturn, uranus) = perturb_outer_planets(jupiter, saturn, uranus);

        Self {
            day,
            planets: [mercury, venus, earth, mars, jupiter, saturn, uranus, neptune],
        }
    }

    /// The eight element sets, in ascending heliocentric distance order.
    pub fn planets(&self) -> &[OrbitalElements; 8] {
        &self.planets
    }

    /// The element set of one planet.
    pub fn get(&self, planet: Planet) -> &OrbitalElements {
        &self.planets[planet as usize]
    }

    /// The day count this ephemeris was evaluated at.
    pub fn day_count(&self) -> Days {
        self.day
    }

    /// Iterate over `(planet, elements)` pairs in the fixed planet order.
    pub fn iter(&self) -> impl Iterator<Item = (Planet, &OrbitalElements)> {
        Planet::ALL.into_iter().zip(self.planets.iter())
    }
}
