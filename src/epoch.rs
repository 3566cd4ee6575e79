use hifitime::Epoch;
use std::str::FromStr;

use crate::constants::{Days, EPOCH_REF_JD, GREGORIAN_JD_OFFSET, HOURS_PER_DAY, MINUTES_PER_DAY};
use crate::errors::EphemError;

/// Transformation from a calendar date to the day count used by the secular models.
///
/// The count is the number of fractional days elapsed since 2000 Jan 0.0 UT
/// (Julian Day [`EPOCH_REF_JD`]), so `(2000, 1, 0, 0, 0)` maps to exactly `0.0`.
///
/// All inputs are real numbers and none of them is range-checked: the day may be
/// fractional, and out-of-range values such as `month = 13` produce a mathematically
/// defined but astronomically meaningless count. Callers wanting a validated path
/// should use [`datetime_str_to_day_count`] instead.
///
/// Arguments
/// ---------
/// * `year`: calendar year
/// * `month`: calendar month
/// * `day`: calendar day, may be fractional
/// * `hour`: hour of the day
/// * `minute`: minute of the hour
///
/// Return
/// ------
/// * The fractional day count since the reference instant.
pub fn calendar_to_day_count(year: f64, month: f64, day: f64, hour: f64, minute: f64) -> Days {
    let jd = 367.0 * year - (7.0 * (year + ((month + 9.0) / 12.0).floor()) / 4.0).floor()
        + (275.0 * month / 9.0).floor()
        + day
        + GREGORIAN_JD_OFFSET;
    let jd = jd + hour / HOURS_PER_DAY + minute / MINUTES_PER_DAY;
    jd - EPOCH_REF_JD
}

/// Transformation from a [`hifitime::Epoch`] to the day count used by the secular models.
///
/// Agrees with [`calendar_to_day_count`] for any valid proleptic Gregorian date.
pub fn epoch_to_day_count(epoch: &Epoch) -> Days {
    epoch.to_jde_utc_days() - EPOCH_REF_JD
}

/// Transformation from a date string in the format YYYY-MM-DDTHH:MM:SS to the day count
/// used by the secular models.
///
/// Argument
/// --------
/// * `date`: a date in the format YYYY-MM-DDTHH:MM:SS, interpreted as UTC
///
/// Return
/// ------
/// * The fractional day count since the reference instant, or
///   [`EphemError::InvalidDateFormat`] if the string cannot be parsed.
pub fn datetime_str_to_day_count(date: &str) -> Result<Days, EphemError> {
    let epoch =
        Epoch::from_str(date).map_err(|e| EphemError::InvalidDateFormat(format!("{date} ({e})")))?;
    Ok(epoch_to_day_count(&epoch))
}
