//! This module implements the arithmetic Hebrew calendar.
//!
//! Months are numbered in civil order starting from Nisan, while the year
//! begins on the first of Tishri (month 7). A leap year adds a thirteenth
//! month: month 12 is then Adar I and month 13 is Adar II. In a common year
//! month 12 is simply Adar.
//!
//! The year structure is derived from the mean lunar conjunction (the molad)
//! and the postponement rules: the new year never falls on a Sunday,
//! Wednesday or Friday, and no year may be shorter than 353 or longer than
//! 385 days. Every valid year therefore has one of the lengths
//! 353, 354, 355 (common) or 383, 384, 385 (leap).

use core::fmt;

use tinystr::{tinystr, TinyAsciiStr};

use crate::{
    fixed::{FixedDay, Weekday},
    gregorian::GregorianDate,
    luach_assert, utils, LuachError, LuachResult,
};

/// Fixed day of Tishri 1, AM 1 (Julian October 7, 3761 BCE).
pub(crate) const HEBREW_EPOCH: i32 = -1_373_427;

/// Fixed day of the last day of [`HebrewYear::MAX_YEAR`].
pub(crate) const HEBREW_LAST_DAY: i32 = 2_146_109_864;

/// Halakim (parts) in one day, 24 hours of 1080 parts.
pub(crate) const PARTS_PER_DAY: i64 = 25_920;

const PARTS_PER_HOUR: u16 = 1_080;

/// The mean synodic month, 29 days 12 hours 793 parts.
const MEAN_MONTH_PARTS: i64 = 765_433;

// The mean year is 235/19 mean months, 235 * 765433 / (19 * 25920) days,
// which reduces to 35975351 / 98496.
const MEAN_YEAR_NUMERATOR: i64 = 35_975_351;
const MEAN_YEAR_DENOMINATOR: i64 = 98_496;

/// A month of the Hebrew calendar, numbered in civil order from Nisan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum HebrewMonth {
    Nisan = 1,
    Iyyar = 2,
    Sivan = 3,
    Tammuz = 4,
    Av = 5,
    Elul = 6,
    Tishri = 7,
    Marheshvan = 8,
    Kislev = 9,
    Tevet = 10,
    Shevat = 11,
    /// Adar in a common year, Adar I in a leap year.
    Adar = 12,
    /// Only present in leap years.
    AdarII = 13,
}

impl HebrewMonth {
    /// Adar I shares month number 12 with the Adar of a common year.
    pub const ADAR_I: Self = Self::Adar;

    const ALL: [Self; 13] = [
        Self::Nisan,
        Self::Iyyar,
        Self::Sivan,
        Self::Tammuz,
        Self::Av,
        Self::Elul,
        Self::Tishri,
        Self::Marheshvan,
        Self::Kislev,
        Self::Tevet,
        Self::Shevat,
        Self::Adar,
        Self::AdarII,
    ];

    /// Returns the civil month number, 1 = Nisan.
    #[inline]
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Returns the month for an ordinal already known to be within 1..=13.
    fn from_ordinal_unchecked(ordinal: u8) -> Self {
        debug_assert!((1..=13).contains(&ordinal));
        Self::ALL[usize::from(ordinal - 1)]
    }

    /// Returns the month that follows this one in the ordinal numbering,
    /// or `None` after Adar II.
    fn next_ordinal(self) -> Option<Self> {
        Self::ALL.get(usize::from(self.ordinal())).copied()
    }

    /// Returns the `monthCode` of this month in a year with the given leap
    /// status. Codes count from Tishri; Adar I of a leap year is `M05L`.
    #[must_use]
    pub fn month_code(self, is_leap: bool) -> TinyAsciiStr<4> {
        match self {
            Self::Tishri => tinystr!(4, "M01"),
            Self::Marheshvan => tinystr!(4, "M02"),
            Self::Kislev => tinystr!(4, "M03"),
            Self::Tevet => tinystr!(4, "M04"),
            Self::Shevat => tinystr!(4, "M05"),
            Self::Adar if is_leap => tinystr!(4, "M05L"),
            Self::Adar | Self::AdarII => tinystr!(4, "M06"),
            Self::Nisan => tinystr!(4, "M07"),
            Self::Iyyar => tinystr!(4, "M08"),
            Self::Sivan => tinystr!(4, "M09"),
            Self::Tammuz => tinystr!(4, "M10"),
            Self::Av => tinystr!(4, "M11"),
            Self::Elul => tinystr!(4, "M12"),
        }
    }

    /// Resolves a `monthCode` to a month for a year with the given leap status.
    pub fn try_from_month_code(code: TinyAsciiStr<4>, is_leap: bool) -> LuachResult<Self> {
        let month = match code.as_str() {
            "M01" => Self::Tishri,
            "M02" => Self::Marheshvan,
            "M03" => Self::Kislev,
            "M04" => Self::Tevet,
            "M05" => Self::Shevat,
            "M05L" if is_leap => Self::ADAR_I,
            "M06" if is_leap => Self::AdarII,
            "M06" => Self::Adar,
            "M07" => Self::Nisan,
            "M08" => Self::Iyyar,
            "M09" => Self::Sivan,
            "M10" => Self::Tammuz,
            "M11" => Self::Av,
            "M12" => Self::Elul,
            _ => {
                return Err(LuachError::invalid_date()
                    .with_message("monthCode is not valid for the Hebrew year."))
            }
        };
        Ok(month)
    }
}

impl TryFrom<u8> for HebrewMonth {
    type Error = LuachError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if !(1..=13).contains(&value) {
            return Err(LuachError::invalid_date().with_message("Hebrew month must be within 1 and 13."));
        }
        Ok(Self::from_ordinal_unchecked(value))
    }
}

// ==== Year equations ====

/// Returns whether `year` is a leap year of the 19 year Metonic cycle.
#[must_use]
pub fn is_leap_year(year: i32) -> bool {
    utils::modulo(7 * i64::from(year) + 1, 19) < 7
}

/// Returns the last month of `year`, Adar II in leap years and Adar otherwise.
#[must_use]
pub fn last_month_of_year(year: i32) -> HebrewMonth {
    if is_leap_year(year) {
        HebrewMonth::AdarII
    } else {
        HebrewMonth::Adar
    }
}

/// Months elapsed from the epoch to Tishri of `year`.
fn months_elapsed(year: i64) -> i64 {
    utils::floor_div(235 * year - 234, 19)
}

fn elapsed_days(year: i64) -> i64 {
    let months = months_elapsed(year);
    let parts = 12_084 + 13_753 * months;
    let day = 29 * months + utils::floor_div(parts, PARTS_PER_DAY);
    if utils::modulo(3 * (day + 1), 7) < 3 {
        day + 1
    } else {
        day
    }
}

/// Days from the epoch to the new year of `year` before the year length
/// correction.
///
/// The molad of Tishri is advanced by the molad zaken offset; a new year
/// landing on Sunday, Wednesday or Friday is pushed to the following day.
#[must_use]
pub fn calendar_elapsed_days(year: i32) -> i32 {
    elapsed_days(i64::from(year)) as i32
}

/// The delay, 0, 1 or 2 days, needed to keep `year` and the year before it
/// within the legal year lengths.
#[must_use]
pub fn new_year_delay(year: i32) -> i32 {
    let year = i64::from(year);
    let ny0 = elapsed_days(year - 1);
    let ny1 = elapsed_days(year);
    let ny2 = elapsed_days(year + 1);
    if ny2 - ny1 == 356 {
        2
    } else if ny1 - ny0 == 382 {
        1
    } else {
        0
    }
}

/// Fixed day of Tishri 1 of `year`.
#[must_use]
pub fn new_year(year: i32) -> FixedDay {
    FixedDay::new(HEBREW_EPOCH + calendar_elapsed_days(year) + new_year_delay(year))
}

/// Number of days in `year`.
#[must_use]
pub fn days_in_year(year: i32) -> u16 {
    (new_year(year + 1) - new_year(year)) as u16
}

/// Whether Marheshvan has 30 days in `year`.
#[must_use]
pub fn is_long_marheshvan(year: i32) -> bool {
    matches!(days_in_year(year), 355 | 385)
}

/// Whether Kislev has 29 days in `year`.
#[must_use]
pub fn is_short_kislev(year: i32) -> bool {
    matches!(days_in_year(year), 353 | 383)
}

/// Number of days in `month` of `year`, 29 or 30.
#[must_use]
pub fn last_day_of_month(year: i32, month: HebrewMonth) -> u8 {
    HebrewYear::new_unchecked(year).days_in_month(month)
}

/// Fixed day of a Hebrew date, without validation.
#[must_use]
pub fn fixed_from_hebrew(year: i32, month: HebrewMonth, day: u8) -> FixedDay {
    HebrewYear::new_unchecked(year).fixed_from_month_day(month, day)
}

/// Returns the mean conjunction (molad) of `month` in `year`.
#[must_use]
pub fn molad(year: i32, month: HebrewMonth) -> Molad {
    // Months before Tishri belong to the cycle count of the next year.
    let y = if month < HebrewMonth::Tishri {
        i64::from(year) + 1
    } else {
        i64::from(year)
    };
    let months = i64::from(month.ordinal()) - i64::from(HebrewMonth::Tishri.ordinal())
        + months_elapsed(y);
    let parts = months * MEAN_MONTH_PARTS - 876;
    Molad {
        day: FixedDay::new(HEBREW_EPOCH + utils::floor_div(parts, PARTS_PER_DAY) as i32),
        parts: utils::modulo(parts, PARTS_PER_DAY) as u16,
    }
}

// ==== HebrewYear ====

/// The resolved structure of one Hebrew year.
///
/// Month arithmetic needs the year length for Marheshvan and Kislev, which in
/// turn needs three new year computations. `HebrewYear` computes them once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HebrewYear {
    year: i32,
    new_year: FixedDay,
    days: u16,
}

impl HebrewYear {
    pub(crate) fn new_unchecked(year: i32) -> Self {
        let new_year = new_year(year);
        let days = (self::new_year(year + 1) - new_year) as u16;
        Self {
            year,
            new_year,
            days,
        }
    }

    /// The last year that ends within the fixed day axis.
    pub const MAX_YEAR: i32 = 5_879_540;

    /// Creates a new `HebrewYear`, rejecting years before the epoch and
    /// after [`HebrewYear::MAX_YEAR`].
    pub fn try_new(year: i32) -> LuachResult<Self> {
        if year < 1 {
            return Err(LuachError::unsupported_year()
                .with_message("Hebrew years before AM 1 are not supported."));
        }
        if year > Self::MAX_YEAR {
            return Err(LuachError::unsupported_year()
                .with_message("Hebrew year ends past the fixed day axis."));
        }
        Ok(Self::new_unchecked(year))
    }

    /// Returns the year number.
    #[inline]
    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns whether this is a leap year.
    #[inline]
    #[must_use]
    pub fn is_leap(&self) -> bool {
        is_leap_year(self.year)
    }

    /// Returns the last month of the year.
    #[inline]
    #[must_use]
    pub fn last_month(&self) -> HebrewMonth {
        last_month_of_year(self.year)
    }

    /// Returns the number of months in the year, 12 or 13.
    #[inline]
    #[must_use]
    pub fn months_in_year(&self) -> u8 {
        self.last_month().ordinal()
    }

    /// Returns the month of Purim: Adar II in leap years, Adar otherwise.
    #[inline]
    #[must_use]
    pub fn purim_month(&self) -> HebrewMonth {
        self.last_month()
    }

    /// Returns the fixed day of Tishri 1.
    #[inline]
    #[must_use]
    pub fn new_year(&self) -> FixedDay {
        self.new_year
    }

    /// Returns the number of days in the year.
    #[inline]
    #[must_use]
    pub fn days(&self) -> u16 {
        self.days
    }

    /// Whether Marheshvan has 30 days this year.
    #[inline]
    #[must_use]
    pub fn is_long_marheshvan(&self) -> bool {
        matches!(self.days, 355 | 385)
    }

    /// Whether Kislev has 29 days this year.
    #[inline]
    #[must_use]
    pub fn is_short_kislev(&self) -> bool {
        matches!(self.days, 353 | 383)
    }

    /// Returns the number of days in `month`, 29 or 30.
    #[must_use]
    pub fn days_in_month(&self, month: HebrewMonth) -> u8 {
        let short = match month {
            HebrewMonth::Iyyar
            | HebrewMonth::Tammuz
            | HebrewMonth::Elul
            | HebrewMonth::Tevet
            | HebrewMonth::AdarII => true,
            HebrewMonth::Adar => !self.is_leap(),
            HebrewMonth::Marheshvan => !self.is_long_marheshvan(),
            HebrewMonth::Kislev => self.is_short_kislev(),
            _ => false,
        };
        if short {
            29
        } else {
            30
        }
    }

    /// Returns the months of this year in calendar order, Tishri first.
    pub fn months(&self) -> impl Iterator<Item = HebrewMonth> {
        let last = self.months_in_year();
        (HebrewMonth::Tishri.ordinal()..=last)
            .chain(HebrewMonth::Nisan.ordinal()..HebrewMonth::Tishri.ordinal())
            .map(HebrewMonth::from_ordinal_unchecked)
    }

    /// Returns the fixed day of `month`/`day` in this year, without validation.
    ///
    /// Months on or after Tishri are counted forward from the new year.
    /// Months before Tishri wrap through the end of the year and continue
    /// from Nisan.
    #[must_use]
    pub fn fixed_from_month_day(&self, month: HebrewMonth, day: u8) -> FixedDay {
        let preceding: i32 = self
            .months()
            .take_while(|m| *m != month)
            .map(|m| i32::from(self.days_in_month(m)))
            .sum();
        self.new_year + preceding + i32::from(day) - 1
    }

    /// Returns the weekday of `month`/`day` in this year.
    #[inline]
    #[must_use]
    pub fn weekday_of(&self, month: HebrewMonth, day: u8) -> Weekday {
        self.fixed_from_month_day(month, day).weekday()
    }

    /// Returns the molad of `month` in this year.
    #[inline]
    #[must_use]
    pub fn molad(&self, month: HebrewMonth) -> Molad {
        molad(self.year, month)
    }
}

// ==== HebrewDate ====

/// A date in the Hebrew calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HebrewDate {
    year: i32,
    month: HebrewMonth,
    day: u8,
}

impl HebrewDate {
    /// Creates a new unchecked `HebrewDate`.
    #[inline]
    #[must_use]
    pub(crate) const fn new_unchecked(year: i32, month: HebrewMonth, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a new validated `HebrewDate`.
    ///
    /// Month 13 is only valid in leap years.
    pub fn try_new(year: i32, month: u8, day: u8) -> LuachResult<Self> {
        let hebrew_year = HebrewYear::try_new(year)?;
        let month = HebrewMonth::try_from(month)?;
        if month > hebrew_year.last_month() {
            return Err(LuachError::invalid_date()
                .with_message("Adar II only exists in Hebrew leap years."));
        }
        if day == 0 || day > hebrew_year.days_in_month(month) {
            return Err(LuachError::invalid_date()
                .with_message("day is not within the Hebrew month's valid range."));
        }
        Ok(Self::new_unchecked(year, month, day))
    }

    /// Returns the `HebrewDate` of a fixed day.
    ///
    /// The year is first approximated from the mean year length, then found
    /// by walking forward over new years. Since `new_year` strictly increases
    /// the walk ends, and it takes at most two steps from the approximation.
    /// The month walk starts at Tishri or Nisan and is bounded by the last
    /// month of the year because `day` precedes the next new year.
    pub fn from_fixed(day: FixedDay) -> LuachResult<Self> {
        if day.get() < HEBREW_EPOCH {
            return Err(LuachError::unsupported_year()
                .with_message("fixed day precedes the Hebrew epoch."));
        }
        if day.get() > HEBREW_LAST_DAY {
            return Err(LuachError::unsupported_year()
                .with_message("fixed day falls after the last supported Hebrew year."));
        }

        let elapsed = i64::from(day.get() - HEBREW_EPOCH);
        let approx =
            utils::floor_div(elapsed * MEAN_YEAR_DENOMINATOR, MEAN_YEAR_NUMERATOR) as i32 + 1;
        let mut y = approx - 1;
        while new_year(y) <= day {
            y += 1;
        }
        let year = HebrewYear::new_unchecked(y - 1);

        let mut month = if day < year.fixed_from_month_day(HebrewMonth::Nisan, 1) {
            HebrewMonth::Tishri
        } else {
            HebrewMonth::Nisan
        };
        while day > year.fixed_from_month_day(month, year.days_in_month(month)) {
            let next = month.next_ordinal().filter(|m| *m <= year.last_month());
            luach_assert!(
                next.is_some(),
                "month search ran past the end of Hebrew year {}",
                year.year()
            );
            if let Some(next) = next {
                month = next;
            }
        }

        let date = day - year.fixed_from_month_day(month, 1) + 1;
        Ok(Self::new_unchecked(year.year(), month, date as u8))
    }

    /// Returns the `HebrewDate` of a Gregorian date.
    #[inline]
    pub fn from_gregorian(date: GregorianDate) -> LuachResult<Self> {
        Self::from_fixed(date.to_fixed())
    }

    /// Returns the fixed day of this date.
    #[inline]
    #[must_use]
    pub fn to_fixed(&self) -> FixedDay {
        fixed_from_hebrew(self.year, self.month, self.day)
    }

    /// Returns the Gregorian date of this date.
    #[inline]
    #[must_use]
    pub fn to_gregorian(&self) -> GregorianDate {
        GregorianDate::from_fixed(self.to_fixed())
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
    pub fn month(&self) -> HebrewMonth {
        self.month
    }

    /// Returns the day of the month.
    #[inline]
    #[must_use]
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Returns the `monthCode` of this date's month.
    #[inline]
    #[must_use]
    pub fn month_code(&self) -> TinyAsciiStr<4> {
        self.month.month_code(is_leap_year(self.year))
    }

    /// Returns whether this date is in a leap year.
    #[inline]
    #[must_use]
    pub fn in_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }
}

impl fmt::Display for HebrewDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month.ordinal(), self.day)
    }
}

// ==== Molad ====

/// The mean lunar conjunction that anchors a Hebrew month.
///
/// The moment is kept exactly as a fixed day plus halakim (parts) after
/// midnight, with 1080 parts to the hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Molad {
    day: FixedDay,
    parts: u16,
}

impl Molad {
    /// Returns the fixed day on which the molad falls.
    #[inline]
    #[must_use]
    pub fn day(&self) -> FixedDay {
        self.day
    }

    /// Returns the parts elapsed since midnight, 0..25920.
    #[inline]
    #[must_use]
    pub fn parts(&self) -> u16 {
        self.parts
    }

    /// Returns the hour of the day, 0..24.
    #[inline]
    #[must_use]
    pub fn hour(&self) -> u8 {
        (self.parts / PARTS_PER_HOUR) as u8
    }

    /// Returns the parts past the hour, 0..1080.
    #[inline]
    #[must_use]
    pub fn halakim(&self) -> u16 {
        self.parts % PARTS_PER_HOUR
    }

    /// Returns the molad as a fractional fixed moment.
    #[must_use]
    pub fn as_moment(&self) -> f64 {
        f64::from(self.day.get()) + f64::from(self.parts) / PARTS_PER_DAY as f64
    }

    /// Returns the total number of parts since the start of the fixed axis.
    #[must_use]
    pub fn total_parts(&self) -> i64 {
        i64::from(self.day.get()) * PARTS_PER_DAY + i64::from(self.parts)
    }
}
