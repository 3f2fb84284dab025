//! Low-accuracy solar position.
//!
//! Moments are fractional canonical days in Universal Time: `730120.5` is
//! noon on 1 January 2000. Longitudes are apparent geocentric ecliptic
//! longitudes in degrees, in `[0, 360)`. The series is the short one from
//! Meeus, *Astronomical Algorithms*, ch. 25, good to about 0.01 degrees
//! near the present and degrading slowly with distance from J2000.

use crate::consts::{DAYS_PER_JULIAN_CENTURY, J2000, JD_OF_CANONICAL_ZERO, MEAN_TROPICAL_YEAR};

const FULL_CIRCLE: f64 = 360.0;

/// Julian centuries from J2000.0 to `moment`.
fn julian_centuries(moment: f64) -> f64 {
    (moment + JD_OF_CANONICAL_ZERO - J2000) / DAYS_PER_JULIAN_CENTURY
}

/// Apparent solar longitude at `moment`, in degrees.
pub fn solar_longitude(moment: f64) -> f64 {
    let c = julian_centuries(moment);
    let mean_longitude = 280.466_46 + 36_000.769_83 * c + 0.000_303_2 * c * c;
    let mean_anomaly = (357.529_11 + 35_999.050_29 * c - 0.000_153_7 * c * c).to_radians();
    let centre = (1.914_602 - 0.004_817 * c - 0.000_014 * c * c) * mean_anomaly.sin()
        + (0.019_993 - 0.000_101 * c) * (2.0 * mean_anomaly).sin()
        + 0.000_289 * (3.0 * mean_anomaly).sin();
    let ascending_node = (125.04 - 1_934.136 * c).to_radians();
    let aberration = 0.005_69;
    let nutation = 0.004_78 * ascending_node.sin();
    (mean_longitude + centre - aberration - nutation).rem_euclid(FULL_CIRCLE)
}

/// Estimate of the last moment, not after `moment`, at which the sun's
/// longitude was `longitude` degrees.
///
/// Steps back by the mean solar rate, then applies one correction using the
/// true longitude at the first estimate. The result can be a few minutes off
/// the exact crossing.
pub fn estimate_prior_solar_longitude(longitude: f64, moment: f64) -> f64 {
    let rate = MEAN_TROPICAL_YEAR / FULL_CIRCLE;
    let tau = moment - rate * (solar_longitude(moment) - longitude).rem_euclid(FULL_CIRCLE);
    let delta = (solar_longitude(tau) - longitude + 180.0).rem_euclid(FULL_CIRCLE) - 180.0;
    moment.min(tau - rate * delta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    // 2000-01-01 at midnight
    const Y2K: f64 = 730_120.0;

    #[test]
    fn test_julian_centuries() {
        assert_abs_diff_eq!(julian_centuries(Y2K + 0.5), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(julian_centuries(Y2K + 0.5 + 36_525.0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_equinoxes_of_2000() {
        // Vernal equinox 20 March 2000 07:35 UT
        let vernal = solar_longitude(Y2K + 79.0 + 7.58 / 24.0);
        assert!(vernal < 0.02 || vernal > 359.98, "{vernal}");
        // Autumnal equinox 22 September 2000 17:28 UT
        assert_abs_diff_eq!(
            solar_longitude(Y2K + 265.0 + 17.47 / 24.0),
            180.0,
            epsilon = 0.02
        );
    }

    #[test]
    fn test_longitude_advances_about_a_degree_a_day() {
        let mut moment = Y2K;
        for _ in 0..366 {
            let step = (solar_longitude(moment + 1.0) - solar_longitude(moment)).rem_euclid(360.0);
            assert!((0.95..1.02).contains(&step), "{moment}: {step}");
            moment += 1.0;
        }
    }

    #[test]
    fn test_longitude_in_range() {
        for day in (-1_000_000_i32..1_000_000).step_by(9_973) {
            let longitude = solar_longitude(f64::from(day));
            assert!((0.0..360.0).contains(&longitude));
        }
    }

    #[test]
    fn test_estimate_prior_equinox() {
        let equinox = Y2K + 265.0 + 17.47 / 24.0;
        let estimate = estimate_prior_solar_longitude(180.0, Y2K + 280.0);
        assert_abs_diff_eq!(estimate, equinox, epsilon = 0.05);
    }

    #[test]
    fn test_estimate_never_after_moment() {
        let moment = Y2K + 265.0;
        assert!(estimate_prior_solar_longitude(180.0, moment) <= moment);
        // Just before the crossing, the estimate is a year back
        let estimate = estimate_prior_solar_longitude(180.0, moment);
        assert!(moment - estimate > 360.0, "{}", moment - estimate);
    }
}
