//! This module implements the proleptic Gregorian calendar and its mapping
//! onto the fixed day axis.

use core::fmt;

use crate::{
    fixed::{FixedDay, Weekday},
    utils, LuachError, LuachResult,
};

/// Fixed day of January 1, 1.
pub(crate) const GREGORIAN_EPOCH: i32 = 1;

const DAYS_IN_A_400Y_CYCLE: i64 = 146_097;

/// A month of the Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum GregorianMonth {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
    July = 7,
    August = 8,
    September = 9,
    October = 10,
    November = 11,
    December = 12,
}

impl GregorianMonth {
    const ALL: [Self; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// Returns the month ordinal, 1 = January.
    #[inline]
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for GregorianMonth {
    type Error = LuachError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if !(1..=12).contains(&value) {
            return Err(LuachError::invalid_date().with_message("month must be within 1 and 12."));
        }
        Ok(Self::ALL[usize::from(value - 1)])
    }
}

/// Returns whether `year` is a Gregorian leap year.
#[must_use]
pub fn is_leap_year(year: i32) -> bool {
    utils::modulo(year, 4) == 0 && !matches!(utils::modulo(year, 400), 100 | 200 | 300)
}

/// Returns the number of days in a Gregorian month.
#[must_use]
pub fn days_in_month(year: i32, month: GregorianMonth) -> u8 {
    match month {
        GregorianMonth::February if is_leap_year(year) => 29,
        GregorianMonth::February => 28,
        GregorianMonth::April
        | GregorianMonth::June
        | GregorianMonth::September
        | GregorianMonth::November => 30,
        _ => 31,
    }
}

/// Returns the day count of a Gregorian date without validating it.
///
/// The year is counted from March so the leap day falls at the very end of
/// the computational year.
pub(crate) fn days_from_gregorian(year: i64, month: i64, day: i64) -> i64 {
    let m = utils::amod(month - 2, 12);
    let y = year + utils::floor_div(month + 9, 12);
    i64::from(GREGORIAN_EPOCH) - 1 - 306 + 365 * (y - 1) + utils::floor_div(y - 1, 4)
        - utils::floor_div(y - 1, 100)
        + utils::floor_div(y - 1, 400)
        + utils::floor_div(3 * m - 1, 5)
        + 30 * (m - 1)
        + day
}

/// Returns the Gregorian year containing a day count.
pub(crate) fn year_from_days(day: i64) -> i64 {
    let d = day - i64::from(GREGORIAN_EPOCH);
    let approx = utils::floor_div((d + 2) * 400, DAYS_IN_A_400Y_CYCLE);
    let start = i64::from(GREGORIAN_EPOCH)
        + 365 * approx
        + utils::floor_div(approx, 4)
        - utils::floor_div(approx, 100)
        + utils::floor_div(approx, 400);
    if day < start {
        approx
    } else {
        approx + 1
    }
}

/// Returns the Gregorian year containing the fixed day.
#[must_use]
pub fn year_from_fixed(day: FixedDay) -> i32 {
    // Years of the fixed day axis stay within +-5879611.
    year_from_days(i64::from(day.get())) as i32
}

/// A date in the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianDate {
    year: i32,
    month: GregorianMonth,
    day: u8,
}

impl GregorianDate {
    /// The date of the first day of the fixed day axis, `i32::MIN`.
    pub const MIN: Self = Self::new_unchecked(-5_879_610, GregorianMonth::June, 22);

    /// The date of the last day of the fixed day axis, `i32::MAX`.
    pub const MAX: Self = Self::new_unchecked(5_879_611, GregorianMonth::July, 11);

    /// Creates a new unchecked `GregorianDate`.
    #[inline]
    #[must_use]
    pub(crate) const fn new_unchecked(year: i32, month: GregorianMonth, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a new validated `GregorianDate`.
    ///
    /// The date must lie within [`GregorianDate::MIN`] and
    /// [`GregorianDate::MAX`], the dates of the ends of the fixed day axis.
    pub fn try_new(year: i32, month: u8, day: u8) -> LuachResult<Self> {
        let month = GregorianMonth::try_from(month)?;
        if day == 0 || day > days_in_month(year, month) {
            return Err(
                LuachError::invalid_date().with_message("day is not within the month's valid range.")
            );
        }
        let date = Self::new_unchecked(year, month, day);
        if !(Self::MIN..=Self::MAX).contains(&date) {
            return Err(LuachError::invalid_date()
                .with_message("date is outside the range of the fixed day axis."));
        }
        Ok(date)
    }

    /// Returns the `GregorianDate` of a fixed day.
    #[must_use]
    pub fn from_fixed(day: FixedDay) -> Self {
        let day = i64::from(day.get());
        let y = year_from_days(i64::from(GREGORIAN_EPOCH) - 1 + day + 306);
        let prior_days = day - days_from_gregorian(y - 1, 3, 1);
        let month = utils::amod(utils::floor_div(5 * prior_days + 155, 153) + 2, 12);
        let year = y - utils::floor_div(month + 9, 12);
        let date = day - days_from_gregorian(year, month, 1) + 1;
        // `month` is produced by `amod(_, 12)` and is always 1..=12.
        Self::new_unchecked(year as i32, GregorianMonth::ALL[(month - 1) as usize], date as u8)
    }

    /// Returns the fixed day of this date.
    #[inline]
    #[must_use]
    pub fn to_fixed(&self) -> FixedDay {
        let days = days_from_gregorian(
            i64::from(self.year),
            i64::from(self.month.ordinal()),
            i64::from(self.day),
        );
        // Dates within `MIN..=MAX` map into the `i32` axis.
        FixedDay::new(days as i32)
    }

    /// Returns the `n`-th `k` weekday relative to this date, see [`FixedDay::nth_k_day`].
    #[inline]
    #[must_use]
    pub fn nth_k_day(&self, n: i32, k: Weekday) -> FixedDay {
        self.to_fixed().nth_k_day(n, k)
    }

    /// Returns the day of the week.
    #[inline]
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.to_fixed().weekday()
    }

    /// Returns the year.
    #[inline]
    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month.
    #[inline]
    #[must_use]
    pub fn month(&self) -> GregorianMonth {
        self.month
    }

    /// Returns the day of the month.
    #[inline]
    #[must_use]
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Returns whether this date is in a leap year.
    #[inline]
    #[must_use]
    pub fn in_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (0..=9999).contains(&self.year) {
            write!(f, "{:04}-{:02}-{:02}", self.year, self.month.ordinal(), self.day)
        } else {
            write!(f, "{:+07}-{:02}-{:02}", self.year, self.month.ordinal(), self.day)
        }
    }
}

impl core::str::FromStr for GregorianDate {
    type Err = LuachError;

    /// Parses an extended `YYYY-MM-DD` date, optionally with a signed
    /// six digit year.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LuachError::invalid_date().with_message("expected a YYYY-MM-DD date.");
        let (sign, rest) = match s.as_bytes().first() {
            Some(b'-') => (-1, &s[1..]),
            Some(b'+') => (1, &s[1..]),
            _ => (1, s),
        };
        let mut parts = rest.splitn(3, '-');
        let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };
        if year.len() < 4 || month.len() != 2 || day.len() != 2 {
            return Err(invalid());
        }
        let all_digits = |field: &str| field.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(year) || !all_digits(month) || !all_digits(day) {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u8 = month.parse().map_err(|_| invalid())?;
        let day: u8 = day.parse().map_err(|_| invalid())?;
        Self::try_new(sign * year, month, day)
    }
}
