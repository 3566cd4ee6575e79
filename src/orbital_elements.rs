//! # Heliocentric orbital element store
//!
//! This module defines the [`OrbitalElements`] struct holding the **six classical
//! orbital elements** of one planet at one epoch, in the low-precision secular
//! parameterization produced by [`crate::planets`].
//!
//! ## What is stored?
//!
//! 1. **Ω** – Longitude of ascending node (degrees)
//! 2. **i** – Inclination (degrees)
//! 3. **ω** – Argument of perihelion (degrees)
//! 4. **a** – Semi-major axis (AU)
//! 5. **e** – Eccentricity (unitless)
//! 6. **M** – Mean anomaly (degrees, **unbounded** – never wrapped to `[0, 360)`)
//!
//! plus an opaque per-planet `tag` and two **derived** ecliptic coordinates,
//! `longitude` and `latitude`. The derivation of the coordinates from the raw
//! elements is owned by downstream consumers; this crate only ever *increments*
//! them, so after an engine run they carry the outer-planet perturbation deltas
//! for Jupiter/Saturn/Uranus and `0.0` for every other planet.
//!
//! ## Units
//!
//! - Angles: **degrees**
//! - Lengths: **AU**
//!
//! ## See also
//!
//! - [`Planet::elements_at`](crate::planets::Planet::elements_at) – Produces an instance from a day count.
//! - [`PlanetEphemeris`](crate::ephemeris::PlanetEphemeris) – Engine returning the eight instances in order.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{AstronomicalUnit, Degree};

/// Low-precision heliocentric orbital elements of one planet at one epoch.
///
/// Units
/// -----
/// * `ascending_node_longitude`: degrees (Ω).
/// * `inclination`: degrees (i).
/// * `perihelion_argument`: degrees (ω).
/// * `semi_major_axis`: Astronomical Units (a).
/// * `eccentricity`: unitless, in `[0, 1)` (e).
/// * `mean_anomaly`: degrees, unbounded (M).
///
/// Notes
/// -----
/// The mean anomaly grows linearly with the day count and is deliberately left
/// unnormalized; consumers rely on the periodicity of the trigonometric
/// functions instead of an explicit modulo step.
///
/// For Earth, `ascending_node_longitude` and `inclination` are always exactly
/// zero: Earth's orbital plane defines the reference plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    pub ascending_node_longitude: Degree,
    pub inclination: Degree,
    pub perihelion_argument: Degree,
    pub semi_major_axis: AstronomicalUnit,
    pub eccentricity: f64,
    pub mean_anomaly: Degree,
    /// Opaque per-planet metadata (25, 50, …, 200), passed through untouched.
    pub tag: u32,
    longitude: Degree,
    latitude: Degree,
}

impl OrbitalElements {
    /// Build an element set from the six raw elements plus the opaque tag.
    ///
    /// The derived `longitude`/`latitude` coordinates start at `0.0`; only the
    /// perturbation step ever adjusts them.
    pub fn new(
        ascending_node_longitude: Degree,
        inclination: Degree,
        perihelion_argument: Degree,
        semi_major_axis: AstronomicalUnit,
        eccentricity: f64,
        mean_anomaly: Degree,
        tag: u32,
    ) -> Self {
        Self {
            ascending_node_longitude,
            inclination,
            perihelion_argument,
            semi_major_axis,
            eccentricity,
            mean_anomaly,
            tag,
            longitude: 0.0,
            latitude: 0.0,
        }
    }

    /// Derived ecliptic longitude contribution (degrees).
    pub fn longitude(&self) -> Degree {
        self.longitude
    }

    pub fn set_longitude(&mut self, longitude: Degree) {
        self.longitude = longitude;
    }

    /// Derived ecliptic latitude contribution (degrees).
    pub fn latitude(&self) -> Degree {
        self.latitude
    }

    pub fn set_latitude(&mut self, latitude: Degree) {
        self.latitude = latitude;
    }
}

impl fmt::Display for OrbitalElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Orbital Elements (tag {})", self.tag)?;
        writeln!(f, "-------------------------------------------")?;
        writeln!(
            f,
            "  Ω   (ascending node)        = {:.6}°",
            self.ascending_node_longitude
        )?;
        writeln!(f, "  i   (inclination)           = {:.6}°", self.inclination)?;
        writeln!(
            f,
            "  ω   (argument of perihelion)= {:.6}°",
            self.perihelion_argument
        )?;
        writeln!(
            f,
            "  a   (semi-major axis)       = {:.6} AU",
            self.semi_major_axis
        )?;
        writeln!(f, "  e   (eccentricity)          = {:.6}", self.eccentricity)?;
        writeln!(f, "  M   (mean anomaly)          = {:.6}°", self.mean_anomaly)?;
        writeln!(f, "  Δλ  (longitude)             = {:.6}°", self.longitude)?;
        write!(f, "  Δβ  (latitude)              = {:.6}°", self.latitude)
    }
}
