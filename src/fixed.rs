//! The fixed day axis shared by every calendar.
//!
//! A [`FixedDay`] is a plain count of days. Day 1 is Monday, January 1, 1 in
//! the proleptic Gregorian calendar, so day 0 is a Sunday and the weekday of
//! any day is the day count modulo 7.

use core::{
    fmt,
    ops::{Add, AddAssign, Sub, SubAssign},
};

use crate::{utils, LuachError, LuachResult};

/// A day on the common fixed day axis (Rata Die).
///
/// The axis is the full `i32` range. Every [`GregorianDate`][crate::GregorianDate]
/// maps onto it and every day on it maps back to a Gregorian date. The
/// arithmetic operators overflow like the underlying integer, use
/// [`FixedDay::checked_add`] near the ends of the axis.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixedDay(i32);

impl FixedDay {
    /// Creates a new `FixedDay`.
    #[inline]
    #[must_use]
    pub const fn new(day: i32) -> Self {
        Self(day)
    }

    /// Returns the raw day count.
    #[inline]
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Adds `days`, returning `None` when the result leaves the axis.
    #[inline]
    #[must_use]
    pub const fn checked_add(self, days: i32) -> Option<Self> {
        match self.0.checked_add(days) {
            Some(day) => Some(Self(day)),
            None => None,
        }
    }

    /// Returns the day of the week of this day.
    #[inline]
    #[must_use]
    pub fn weekday(self) -> Weekday {
        Weekday::from_fixed(self)
    }

    /// The `k` weekday on or before this day.
    #[must_use]
    pub fn k_day_on_or_before(self, k: Weekday) -> Self {
        Self(self.0 - utils::modulo(self.0 - k as i32, 7))
    }

    /// The `k` weekday on or after this day.
    #[must_use]
    pub fn k_day_on_or_after(self, k: Weekday) -> Self {
        (self + 6).k_day_on_or_before(k)
    }

    /// The `k` weekday nearest to this day.
    #[must_use]
    pub fn k_day_nearest(self, k: Weekday) -> Self {
        (self + 3).k_day_on_or_before(k)
    }

    /// The `k` weekday strictly before this day.
    #[must_use]
    pub fn k_day_before(self, k: Weekday) -> Self {
        (self - 1).k_day_on_or_before(k)
    }

    /// The `k` weekday strictly after this day.
    #[must_use]
    pub fn k_day_after(self, k: Weekday) -> Self {
        (self + 7).k_day_on_or_before(k)
    }

    /// The `n`-th `k` weekday counted from this day.
    ///
    /// For `n > 0` this is the `n`-th `k` day on or after this day. For `n < 0`
    /// it is the `|n|`-th `k` day on or before this day. `n == 0` falls through
    /// to the backward arithmetic and yields the `k` day strictly after.
    #[must_use]
    pub fn nth_k_day(self, n: i32, k: Weekday) -> Self {
        if n > 0 {
            self.k_day_before(k) + 7 * n
        } else {
            self.k_day_after(k) + 7 * n
        }
    }
}

impl fmt::Display for FixedDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<i32> for FixedDay {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<FixedDay> for i32 {
    fn from(value: FixedDay) -> Self {
        value.0
    }
}

impl Add<i32> for FixedDay {
    type Output = Self;

    fn add(self, rhs: i32) -> Self::Output {
        Self(self.0 + rhs)
    }
}

impl AddAssign<i32> for FixedDay {
    fn add_assign(&mut self, rhs: i32) {
        self.0 += rhs;
    }
}

impl Sub<i32> for FixedDay {
    type Output = Self;

    fn sub(self, rhs: i32) -> Self::Output {
        Self(self.0 - rhs)
    }
}

impl SubAssign<i32> for FixedDay {
    fn sub_assign(&mut self, rhs: i32) {
        self.0 -= rhs;
    }
}

impl Sub for FixedDay {
    type Output = i32;

    fn sub(self, rhs: Self) -> Self::Output {
        self.0 - rhs.0
    }
}

/// A day of the week.
///
/// The ordinals follow the fixed day axis: `Sunday` is 0 and `Saturday` is 6.
/// The ISO week calendar numbers the same days 1 to 7 with Sunday as 7, see
/// [`Weekday::iso_number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Returns the weekday of a fixed day.
    #[must_use]
    pub fn from_fixed(day: FixedDay) -> Self {
        Self::ALL[utils::modulo(day.get(), 7) as usize]
    }

    /// Returns the weekday for an ISO weekday number (1 = Monday .. 7 = Sunday).
    pub fn from_iso_number(number: u8) -> LuachResult<Self> {
        match number {
            1..=6 => Ok(Self::ALL[usize::from(number)]),
            7 => Ok(Self::Sunday),
            _ => Err(LuachError::invalid_date()
                .with_message("ISO weekday must be within 1 and 7.")),
        }
    }

    /// Returns the ISO weekday number, 1 = Monday .. 7 = Sunday.
    #[inline]
    #[must_use]
    pub fn iso_number(self) -> u8 {
        match self {
            Self::Sunday => 7,
            other => other as u8,
        }
    }
}

impl TryFrom<u8> for Weekday {
    type Error = LuachError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(LuachError::invalid_date().with_message("weekday ordinal must be within 0 and 6."))
    }
}

#[cfg(test)]
mod tests {
    use super::{FixedDay, Weekday};

    #[test]
    fn weekday_of_epoch() {
        // Day 1 is Monday, January 1, 1.
        assert_eq!(FixedDay::new(1).weekday(), Weekday::Monday);
        assert_eq!(FixedDay::new(0).weekday(), Weekday::Sunday);
        assert_eq!(FixedDay::new(-1).weekday(), Weekday::Saturday);
        // 2007-02-25 was a Sunday.
        assert_eq!(FixedDay::new(732_732).weekday(), Weekday::Sunday);
    }

    #[test]
    fn weekday_is_periodic() {
        for day in -1_000..1_000 {
            let day = FixedDay::new(day);
            assert_eq!(day.weekday(), (day + 7).weekday());
            assert_eq!(day.weekday(), (day - 7 * 13).weekday());
        }
    }

    #[test]
    fn k_day_searches() {
        // 732877 is Friday, 2007-07-20.
        let friday = FixedDay::new(732_877);
        assert_eq!(friday.k_day_on_or_before(Weekday::Friday), friday);
        assert_eq!(friday.k_day_on_or_after(Weekday::Friday), friday);
        assert_eq!(friday.k_day_before(Weekday::Friday), friday - 7);
        assert_eq!(friday.k_day_after(Weekday::Friday), friday + 7);
        assert_eq!(friday.k_day_on_or_before(Weekday::Sunday), friday - 5);
        assert_eq!(friday.k_day_on_or_after(Weekday::Sunday), friday + 2);
        assert_eq!(friday.k_day_nearest(Weekday::Sunday), friday + 2);
        assert_eq!(friday.k_day_nearest(Weekday::Tuesday), friday - 3);
    }

    #[test]
    fn k_day_results_have_requested_weekday() {
        for day in 730_000..730_050 {
            let day = FixedDay::new(day);
            for k in Weekday::ALL {
                let before = day.k_day_on_or_before(k);
                let after = day.k_day_on_or_after(k);
                assert_eq!(before.weekday(), k);
                assert_eq!(after.weekday(), k);
                assert!((0..7).contains(&(day - before)));
                assert!((0..7).contains(&(after - day)));
                assert!((1..=7).contains(&(day - day.k_day_before(k))));
                assert!((1..=7).contains(&(day.k_day_after(k) - day)));
                assert!((day - day.k_day_nearest(k)).abs() <= 3);
            }
        }
    }

    #[test]
    fn nth_k_day_counts_in_both_directions() {
        let friday = FixedDay::new(732_877);
        assert_eq!(friday.nth_k_day(1, Weekday::Friday), friday);
        assert_eq!(friday.nth_k_day(2, Weekday::Friday), friday + 7);
        assert_eq!(friday.nth_k_day(1, Weekday::Sunday), friday + 2);
        assert_eq!(friday.nth_k_day(-1, Weekday::Friday), friday);
        assert_eq!(friday.nth_k_day(-1, Weekday::Sunday), friday - 5);
        assert_eq!(friday.nth_k_day(-2, Weekday::Sunday), friday - 12);
    }

    #[test]
    fn checked_add_stops_at_the_ends_of_the_axis() {
        assert_eq!(FixedDay::new(10).checked_add(-3), Some(FixedDay::new(7)));
        assert_eq!(FixedDay::new(i32::MAX).checked_add(1), None);
        assert_eq!(FixedDay::new(i32::MIN).checked_add(-1), None);
        assert_eq!(FixedDay::new(i32::MAX - 1).checked_add(1), Some(FixedDay::new(i32::MAX)));
    }

    #[test]
    fn weekday_at_the_ends_of_the_axis() {
        assert_eq!(FixedDay::new(i32::MAX).weekday(), Weekday::from_fixed(FixedDay::new(i32::MAX - 7)));
        assert_eq!(FixedDay::new(i32::MIN).weekday(), Weekday::from_fixed(FixedDay::new(i32::MIN + 7)));
    }

    #[test]
    fn iso_numbering() {
        assert_eq!(Weekday::Sunday.iso_number(), 7);
        assert_eq!(Weekday::Monday.iso_number(), 1);
        assert_eq!(Weekday::Saturday.iso_number(), 6);
        for k in Weekday::ALL {
            assert_eq!(Weekday::from_iso_number(k.iso_number()), Ok(k));
        }
        assert!(Weekday::from_iso_number(0).is_err());
        assert!(Weekday::from_iso_number(8).is_err());
        assert_eq!(Weekday::try_from(6), Ok(Weekday::Saturday));
        assert!(Weekday::try_from(7).is_err());
    }
}
