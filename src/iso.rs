//! This module implements the ISO week calendar.
//!
//! An ISO week date is a year, a week of that year and a weekday. Week 1 is
//! the week containing the first Thursday of the Gregorian year, so the ISO
//! year can start in late December or end in early January of the
//! neighbouring Gregorian year.
//!
//! The ISO weekday is numbered 1 (Monday) to 7 (Sunday). This is not the
//! [`Weekday`] ordinal of the fixed day axis, which runs 0 (Sunday) to
//! 6 (Saturday).

use core::fmt;

use crate::{
    fixed::{FixedDay, Weekday},
    gregorian::{days_from_gregorian, year_from_days},
    utils, LuachError, LuachResult,
};

/// Returns the day count of an ISO week date without validating it.
///
/// Week 1 starts on the Monday after the last Sunday strictly before
/// December 29 of the previous year.
fn days_from_iso(year: i64, week: i64, weekday: i64) -> i64 {
    let dec_28 = days_from_gregorian(year - 1, 12, 28);
    let sunday_before = dec_28 - 1 - utils::modulo(dec_28 - 1, 7);
    sunday_before + 7 * week + weekday
}

/// Returns the number of ISO weeks in `year`, either 52 or 53.
#[must_use]
pub fn weeks_in_year(year: i32) -> u8 {
    let year = i64::from(year);
    let days = days_from_iso(year + 1, 1, 1) - days_from_iso(year, 1, 1);
    (days / 7) as u8
}

/// A date in the ISO week calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoWeekDate {
    year: i32,
    week: u8,
    weekday: u8,
}

impl IsoWeekDate {
    /// The week date of the first day of the fixed day axis, `i32::MIN`.
    pub const MIN: Self = Self::new_unchecked(-5_879_610, 25, 5);

    /// The week date of the last day of the fixed day axis, `i32::MAX`.
    pub const MAX: Self = Self::new_unchecked(5_879_611, 28, 1);

    /// Creates a new unchecked `IsoWeekDate`.
    #[inline]
    #[must_use]
    pub(crate) const fn new_unchecked(year: i32, week: u8, weekday: u8) -> Self {
        Self {
            year,
            week,
            weekday,
        }
    }

    /// Creates a new validated `IsoWeekDate`.
    ///
    /// `weekday` is the ISO weekday number, 1 = Monday .. 7 = Sunday.
    pub fn try_new(year: i32, week: u8, weekday: u8) -> LuachResult<Self> {
        if week == 0 || week > weeks_in_year(year) {
            return Err(LuachError::invalid_date()
                .with_message("ISO week is not within the year's valid range."));
        }
        // Validates the 1..=7 range.
        Weekday::from_iso_number(weekday)?;
        let date = Self::new_unchecked(year, week, weekday);
        if !(Self::MIN..=Self::MAX).contains(&date) {
            return Err(LuachError::invalid_date()
                .with_message("ISO week date is outside the range of the fixed day axis."));
        }
        Ok(date)
    }

    /// Returns the `IsoWeekDate` of a fixed day.
    #[must_use]
    pub fn from_fixed(day: FixedDay) -> Self {
        let day = i64::from(day.get());
        let approx = year_from_days(day - 3);
        let year = if day >= days_from_iso(approx + 1, 1, 1) {
            approx + 1
        } else {
            approx
        };
        let week = utils::floor_div(day - days_from_iso(year, 1, 1), 7) + 1;
        let weekday = utils::amod(day, 7);
        Self::new_unchecked(year as i32, week as u8, weekday as u8)
    }

    /// Returns the fixed day of this date.
    #[inline]
    #[must_use]
    pub fn to_fixed(&self) -> FixedDay {
        let days = days_from_iso(
            i64::from(self.year),
            i64::from(self.week),
            i64::from(self.weekday),
        );
        // Week dates within `MIN..=MAX` map into the `i32` axis.
        FixedDay::new(days as i32)
    }

    /// Returns the ISO year.
    #[inline]
    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the ISO week, 1..=53.
    #[inline]
    #[must_use]
    pub fn week(&self) -> u8 {
        self.week
    }

    /// Returns the ISO weekday number, 1 = Monday .. 7 = Sunday.
    #[inline]
    #[must_use]
    pub fn iso_weekday(&self) -> u8 {
        self.weekday
    }

    /// Returns the [`Weekday`] of this date.
    #[inline]
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.to_fixed().weekday()
    }
}

impl fmt::Display for IsoWeekDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-W{:02}-{}", self.year, self.week, self.weekday)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GregorianDate;
    use alloc::string::ToString;

    #[test]
    fn iso_from_fixed_reference() {
        let iso = IsoWeekDate::from_fixed(FixedDay::new(732_877));
        assert_eq!((iso.year(), iso.week(), iso.iso_weekday()), (2007, 29, 5));
        assert_eq!(iso.weekday(), Weekday::Friday);
        assert_eq!(iso.to_string(), "2007-W29-5");
    }

    #[test]
    fn fixed_from_iso_reference() {
        assert_eq!(
            IsoWeekDate::try_new(2007, 29, 5).unwrap().to_fixed(),
            FixedDay::new(732_877)
        );
        let tuesday = IsoWeekDate::try_new(2008, 12, Weekday::Tuesday.iso_number()).unwrap();
        assert_eq!(
            GregorianDate::from_fixed(tuesday.to_fixed()),
            GregorianDate::try_new(2008, 3, 18).unwrap()
        );
    }

    #[test]
    fn year_boundaries() {
        // 2008-12-29 is Monday of week 1 of ISO year 2009.
        let iso = IsoWeekDate::from_fixed(GregorianDate::try_new(2008, 12, 29).unwrap().to_fixed());
        assert_eq!((iso.year(), iso.week(), iso.iso_weekday()), (2009, 1, 1));

        // 2010-01-03 is Sunday of week 53 of ISO year 2009.
        let iso = IsoWeekDate::from_fixed(GregorianDate::try_new(2010, 1, 3).unwrap().to_fixed());
        assert_eq!((iso.year(), iso.week(), iso.iso_weekday()), (2009, 53, 7));
    }

    #[test]
    fn weeks_per_year() {
        assert_eq!(weeks_in_year(2004), 53);
        assert_eq!(weeks_in_year(2009), 53);
        assert_eq!(weeks_in_year(2015), 53);
        assert_eq!(weeks_in_year(2007), 52);
        assert_eq!(weeks_in_year(2008), 52);
    }

    #[test]
    fn invalid_week_dates_are_rejected() {
        assert!(IsoWeekDate::try_new(2007, 53, 1).is_err());
        assert!(IsoWeekDate::try_new(2009, 53, 1).is_ok());
        assert!(IsoWeekDate::try_new(2007, 0, 1).is_err());
        assert!(IsoWeekDate::try_new(2007, 10, 0).is_err());
        assert!(IsoWeekDate::try_new(2007, 10, 8).is_err());
    }

    #[test]
    fn ends_of_the_fixed_day_axis() {
        assert_eq!(IsoWeekDate::from_fixed(FixedDay::new(i32::MIN)), IsoWeekDate::MIN);
        assert_eq!(IsoWeekDate::from_fixed(FixedDay::new(i32::MAX)), IsoWeekDate::MAX);
        assert_eq!(IsoWeekDate::MIN.to_fixed(), FixedDay::new(i32::MIN));
        assert_eq!(IsoWeekDate::MAX.to_fixed(), FixedDay::new(i32::MAX));
        assert!(IsoWeekDate::try_new(5_879_611, 28, 2).is_err());
        assert!(IsoWeekDate::try_new(-5_879_610, 25, 4).is_err());
        assert!(IsoWeekDate::try_new(5_879_611, 28, 1).is_ok());
        let _ = weeks_in_year(i32::MAX);
        let _ = weeks_in_year(i32::MIN);
    }

    #[test]
    fn round_trip_across_years() {
        let start = GregorianDate::try_new(1999, 12, 1).unwrap().to_fixed();
        for offset in 0..(366 * 12) {
            let day = start + offset;
            let iso = IsoWeekDate::from_fixed(day);
            assert_eq!(iso.to_fixed(), day);
            assert_eq!(iso.weekday(), day.weekday());
            assert!(iso.week() >= 1 && iso.week() <= weeks_in_year(iso.year()));
        }
    }
}
