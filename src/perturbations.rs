use crate::constants::{Degree, RADEG};
use crate::orbital_elements::OrbitalElements;

/// Sine of an angle given in degrees.
fn sind(x: Degree) -> f64 {
    (x * RADEG).sin()
}

/// Cosine of an angle given in degrees.
fn cosd(x: Degree) -> f64 {
    (x * RADEG).cos()
}

/// Apply the mutual perturbations of the three outer giants.
///
/// Jupiter, Saturn and Uranus pull on each other strongly enough that the plain
/// secular models need a periodic correction. The correction terms depend only on
/// the three mean anomalies (degrees, unnormalized) and are added to Jupiter's
/// longitude, Saturn's longitude and latitude, and Uranus's longitude.
///
/// Takes the three element sets by value and returns the corrected copies; the
/// raw six elements of each set are never modified. Mercury, Venus, Earth, Mars
/// and Neptune take no correction at all.
pub(crate) fn perturb_outer_planets(
    mut jupiter: OrbitalElements,
    mut saturn: OrbitalElements,
    mut uranus: OrbitalElements,
) -> (OrbitalElements, OrbitalElements, OrbitalElements) {
    let mj = jupiter.mean_anomaly;
    let ms = saturn.mean_anomaly;
    let mu = uranus.mean_anomaly;

    let mut jupiter_added_long = 0.0;
    jupiter_added_long += -0.332 * sind(2.0 * mj - 5.0 * ms - 67.6);
    jupiter_added_long += -0.056 * sind(2.0 * mj - 2.0 * ms + 21.0);
    jupiter_added_long += 0.042 * sind(3.0 * mj - 5.0 * ms + 21.0);
    jupiter_added_long += -0.036 * sind(mj - 2.0 * ms);
    jupiter_added_long += 0.022 * cosd(mj - ms);
    jupiter_added_long += 0.023 * sind(2.0 * mj - 3.0 * ms + 52.0);
    jupiter_added_long += -0.016 * sind(mj - 5.0 * ms - 69.0);

    jupiter.set_longitude(jupiter.longitude() + jupiter_added_long);

    let mut saturn_added_long = 0.0;
    saturn_added_long += 0.812 * sind(2.0 * mj - 5.0 * ms - 67.6);
    saturn_added_long += -0.229 * cosd(2.0 * mj - 4.0 * ms - 2.0);
    saturn_added_long += 0.119 * sind(mj - 2.0 * ms - 3.0);
    saturn_added_long += 0.046 * sind(2.0 * mj - 6.0 * ms - 69.0);
    saturn_added_long += 0.014 * sind(mj - 3.0 * ms + 32.0);

    saturn.set_longitude(saturn.longitude() + saturn_added_long);

    let mut saturn_added_lat = 0.0;
    saturn_added_lat += -0.020 * cosd(2.0 * mj - 4.0 * ms - 2.0);
    saturn_added_lat += 0.018 * sind(2.0 * mj - 6.0 * ms - 49.0);

    saturn.set_latitude(saturn.latitude() + saturn_added_lat);

    let mut uranus_added_long = 0.0;
    uranus_added_long += 0.040 * sind(ms - 2.0 * mu + 6.0);
    uranus_added_long += 0.035 * sind(ms - 3.0 * mu + 33.0);
    uranus_added_long += -0.015 * sind(mj - mu + 20.0);

    uranus.set_longitude(uranus.longitude() + uranus_added_long);

    (jupiter, saturn, uranus)
}

#[cfg(test)]
mod perturbations_test {
    use super::*;
    use crate::planets::Planet;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_corrections_at_reference_instant() {
        let (jupiter, saturn, uranus) = perturb_outer_planets(
            Planet::Jupiter.elements_at(0.0),
            Planet::Saturn.elements_at(0.0),
            Planet::Uranus.elements_at(0.0),
        );

        // Series evaluated by hand at Mj = 19.8950, Ms = 316.9670, Mu = 142.5905.
        assert_abs_diff_eq!(jupiter.longitude(), -0.069423547358166, epsilon = 1e-9);
        assert_abs_diff_eq!(saturn.longitude(), 0.175540993317255, epsilon = 1e-9);
        assert_abs_diff_eq!(saturn.latitude(), 0.000531009296613, epsilon = 1e-9);
        assert_abs_diff_eq!(uranus.longitude(), 0.004931698573033, epsilon = 1e-9);

        // Latitude is only ever corrected for Saturn.
        assert_eq!(jupiter.latitude(), 0.0);
        assert_eq!(uranus.latitude(), 0.0);
    }

    #[test]
    fn test_raw_elements_are_untouched() {
        let raw_jupiter = Planet::Jupiter.elements_at(8767.0);
        let raw_saturn = Planet::Saturn.elements_at(8767.0);
        let raw_uranus = Planet::Uranus.elements_at(8767.0);

        let (jupiter, saturn, uranus) =
            perturb_outer_planets(raw_jupiter.clone(), raw_saturn.clone(), raw_uranus.clone());

        for (corrected, raw) in [(&jupiter, &raw_jupiter), (&saturn, &raw_saturn), (&uranus, &raw_uranus)] {
            assert_eq!(corrected.ascending_node_longitude, raw.ascending_node_longitude);
            assert_eq!(corrected.inclination, raw.inclination);
            assert_eq!(corrected.perihelion_argument, raw.perihelion_argument);
            assert_eq!(corrected.semi_major_axis, raw.semi_major_axis);
            assert_eq!(corrected.eccentricity, raw.eccentricity);
            assert_eq!(corrected.mean_anomaly, raw.mean_anomaly);
            assert_eq!(corrected.tag, raw.tag);
        }
    }

    #[test]
    fn test_corrections_accumulate_onto_existing_coordinates() {
        let mut jupiter = Planet::Jupiter.elements_at(0.0);
        jupiter.set_longitude(10.0);

        let (perturbed_once, ..) = perturb_outer_planets(
            Planet::Jupiter.elements_at(0.0),
            Planet::Saturn.elements_at(0.0),
            Planet::Uranus.elements_at(0.0),
        );
        let (offset, ..) = perturb_outer_planets(
            jupiter,
            Planet::Saturn.elements_at(0.0),
            Planet::Uranus.elements_at(0.0),
        );

        // The step increments whatever is already in the coordinate field.
        assert_abs_diff_eq!(
            offset.longitude(),
            10.0 + perturbed_once.longitude(),
            epsilon = 1e-12
        );
    }
}
