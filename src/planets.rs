//! # Per-planet secular element models
//!
//! This module defines the [`Planet`] enum and the **linear secular models** mapping a
//! day count to a full [`OrbitalElements`] set, one model per major planet.
//!
//! Every element follows the same first-order shape `base + rate · day`, so the eight
//! models are a single generic evaluator ([`SecularModel`]) driven by a constant table.
//! The semi-major axis is a fixed constant for all planets except Uranus and Neptune,
//! whose models carry a small secular rate.
//!
//! The base values and rates are the low-precision series referenced to
//! 2000 Jan 0.0 UT (Julian Day 2451543.5); they are the load-bearing data of the
//! whole crate and are reproduced digit for digit.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::Days;
use crate::errors::EphemError;
use crate::orbital_elements::OrbitalElements;

/// First-order secular term of one orbital element: `value(day) = base + rate · day`.
#[derive(Debug, Clone, Copy)]
struct SecularTerm {
    base: f64,
    rate: f64,
}

impl SecularTerm {
    const fn new(base: f64, rate: f64) -> Self {
        Self { base, rate }
    }

    /// A constant element (zero secular rate).
    const fn fixed(base: f64) -> Self {
        Self { base, rate: 0.0 }
    }

    fn at(&self, day: Days) -> f64 {
        self.base + self.rate * day
    }
}

/// Linear secular model of one planet: six element terms plus the opaque tag.
#[derive(Debug, Clone, Copy)]
struct SecularModel {
    ascending_node_longitude: SecularTerm,
    inclination: SecularTerm,
    perihelion_argument: SecularTerm,
    semi_major_axis: SecularTerm,
    eccentricity: SecularTerm,
    mean_anomaly: SecularTerm,
    tag: u32,
}

impl SecularModel {
    fn elements_at(&self, day: Days) -> OrbitalElements {
        OrbitalElements::new(
            self.ascending_node_longitude.at(day),
            self.inclination.at(day),
            self.perihelion_argument.at(day),
            self.semi_major_axis.at(day),
            self.eccentricity.at(day),
            self.mean_anomaly.at(day),
            self.tag,
        )
    }
}

const MERCURY: SecularModel = SecularModel {
    ascending_node_longitude: SecularTerm::new(48.3313, 3.24587e-5),
    inclination: SecularTerm::new(7.0047, 5.00e-8),
    perihelion_argument: SecularTerm::new(29.1241, 1.01444e-5),
    semi_major_axis: SecularTerm::fixed(0.387098),
    eccentricity: SecularTerm::new(0.205635, 5.59e-10),
    mean_anomaly: SecularTerm::new(168.6562, 4.0923344368),
    tag: 25,
};

const VENUS: SecularModel = SecularModel {
    ascending_node_longitude: SecularTerm::new(76.6799, 2.46590e-5),
    inclination: SecularTerm::new(3.3946, 2.75e-8),
    perihelion_argument: SecularTerm::new(54.8910, 1.38374e-5),
    semi_major_axis: SecularTerm::fixed(0.723330),
    eccentricity: SecularTerm::new(0.006773, -1.302e-9),
    mean_anomaly: SecularTerm::new(48.0052, 1.6021302244),
    tag: 50,
};

// Earth's orbital plane is the reference plane: node and inclination stay exactly zero.
const EARTH: SecularModel = SecularModel {
    ascending_node_longitude: SecularTerm::fixed(0.0),
    inclination: SecularTerm::fixed(0.0),
    perihelion_argument: SecularTerm::new(282.9404, 4.70935e-5),
    semi_major_axis: SecularTerm::fixed(1.0),
    eccentricity: SecularTerm::new(0.016709, -1.151e-9),
    mean_anomaly: SecularTerm::new(356.0470, 0.9856002585),
    tag: 75,
};

const MARS: SecularModel = SecularModel {
    ascending_node_longitude: SecularTerm::new(49.5574, 2.11081e-5),
    inclination: SecularTerm::new(1.8497, -1.78e-8),
    perihelion_argument: SecularTerm::new(286.5016, 2.92961e-5),
    semi_major_axis: SecularTerm::fixed(1.523688),
    eccentricity: SecularTerm::new(0.093405, 2.516e-9),
    mean_anomaly: SecularTerm::new(18.6021, 0.5240207766),
    tag: 100,
};

const JUPITER: SecularModel = SecularModel {
    ascending_node_longitude: SecularTerm::new(100.4542, 2.76854e-5),
    inclination: SecularTerm::new(1.3030, -1.557e-7),
    perihelion_argument: SecularTerm::new(273.8777, 1.64505e-5),
    semi_major_axis: SecularTerm::fixed(5.20256),
    eccentricity: SecularTerm::new(0.048498, 4.469e-9),
    mean_anomaly: SecularTerm::new(19.8950, 0.0830853001),
    tag: 125,
};

const SATURN: SecularModel = SecularModel {
    ascending_node_longitude: SecularTerm::new(113.6634, 2.38980e-5),
    inclination: SecularTerm::new(2.4886, -1.081e-7),
    perihelion_argument: SecularTerm::new(339.3939, 2.97661e-5),
    semi_major_axis: SecularTerm::fixed(9.55475),
    eccentricity: SecularTerm::new(0.055546, -9.499e-9),
    mean_anomaly: SecularTerm::new(316.9670, 0.0334442282),
    tag: 150,
};

const URANUS: SecularModel = SecularModel {
    ascending_node_longitude: SecularTerm::new(74.0005, 1.3978e-5),
    inclination: SecularTerm::new(0.7733, 1.9e-8),
    perihelion_argument: SecularTerm::new(96.6612, 3.0565e-5),
    semi_major_axis: SecularTerm::new(19.18171, -1.55e-8),
    eccentricity: SecularTerm::new(0.047318, 7.45e-9),
    mean_anomaly: SecularTerm::new(142.5905, 0.011725806),
    tag: 175,
};

const NEPTUNE: SecularModel = SecularModel {
    ascending_node_longitude: SecularTerm::new(131.7806, 3.0173e-5),
    inclination: SecularTerm::new(1.7700, -2.55e-7),
    perihelion_argument: SecularTerm::new(272.8461, -6.027e-6),
    semi_major_axis: SecularTerm::new(30.05826, 3.313e-8),
    eccentricity: SecularTerm::new(0.008606, 2.15e-9),
    mean_anomaly: SecularTerm::new(260.2471, 0.005995147),
    tag: 200,
};

/// One of the eight major planets, in ascending heliocentric distance order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Planet {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Planet {
    /// The eight planets in ascending heliocentric distance order, the order every
    /// engine result uses.
    pub const ALL: [Planet; 8] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::Earth,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Earth => "Earth",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
            Planet::Uranus => "Uranus",
            Planet::Neptune => "Neptune",
        }
    }

    fn model(&self) -> &'static SecularModel {
        match self {
            Planet::Mercury => &MERCURY,
            Planet::Venus => &VENUS,
            Planet::Earth => &EARTH,
            Planet::Mars => &MARS,
            Planet::Jupiter => &JUPITER,
            Planet::Saturn => &SATURN,
            Planet::Uranus => &URANUS,
            Planet::Neptune => &NEPTUNE,
        }
    }

    /// Evaluate this planet's secular model at the given day count.
    ///
    /// Pure function: the returned element set carries no perturbation
    /// contribution (see [`crate::ephemeris::PlanetEphemeris`] for the full
    /// engine path, which perturbs Jupiter, Saturn and Uranus).
    pub fn elements_at(&self, day: Days) -> OrbitalElements {
        self.model().elements_at(day)
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Planet {
    type Err = EphemError;

    /// Parse a planet from its English name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mercury" => Ok(Planet::Mercury),
            "venus" => Ok(Planet::Venus),
            "earth" => Ok(Planet::Earth),
            "mars" => Ok(Planet::Mars),
            "jupiter" => Ok(Planet::Jupiter),
            "saturn" => Ok(Planet::Saturn),
            "uranus" => Ok(Planet::Uranus),
            "neptune" => Ok(Planet::Neptune),
            _ => Err(EphemError::UnknownPlanet(s.to_string())),
        }
    }
}
