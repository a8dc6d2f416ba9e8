//! The holiday calendar of a Hebrew year.
//!
//! Holidays are described by a static rule table. Every rule names the
//! holidays it marks, an [`Anchor`] that resolves to a month and day of a
//! given year, and the [`Layer`] it belongs to. A [`HolidayCalendar`] applies
//! the layers in a fixed order, `Base`, `YearLength`, `Diaspora`, `Moving`,
//! and a later rule replaces whatever an earlier one placed on the same day.

use alloc::collections::BTreeMap;
use core::{fmt, str::FromStr};

use crate::{
    fixed::Weekday,
    hebrew::{HebrewDate, HebrewMonth, HebrewYear},
    options::Region,
    LuachError, LuachResult,
};

/// A holiday or fast of the Hebrew calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Holiday {
    Pesach,
    Shavuot,
    Sukkot,
    YomKippur,
    RoshHashana,
    Hannuka,
    Purim,
    ZomTamuz,
    ZomAv,
    ZomGedaliya,
    ZomEsther,
    TuBeAv,
    TuBeshvat,
    LagBOmer,
    YomYerushalayim,
    HoshanaRaba,
    ShminiAtzeret,
    SimchatTorah,
    ShushanPurim,
    YomHazikaron,
    YomHaatzmaut,
}

impl Holiday {
    pub const ALL: [Self; 21] = [
        Self::Pesach,
        Self::Shavuot,
        Self::Sukkot,
        Self::YomKippur,
        Self::RoshHashana,
        Self::Hannuka,
        Self::Purim,
        Self::ZomTamuz,
        Self::ZomAv,
        Self::ZomGedaliya,
        Self::ZomEsther,
        Self::TuBeAv,
        Self::TuBeshvat,
        Self::LagBOmer,
        Self::YomYerushalayim,
        Self::HoshanaRaba,
        Self::ShminiAtzeret,
        Self::SimchatTorah,
        Self::ShushanPurim,
        Self::YomHazikaron,
        Self::YomHaatzmaut,
    ];

    /// Returns the identifier of this holiday.
    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::Pesach => "Pesach",
            Self::Shavuot => "Shavuot",
            Self::Sukkot => "Sukkot",
            Self::YomKippur => "YomKippur",
            Self::RoshHashana => "RoshHashana",
            Self::Hannuka => "Hannuka",
            Self::Purim => "Purim",
            Self::ZomTamuz => "ZomTamuz",
            Self::ZomAv => "ZomAv",
            Self::ZomGedaliya => "ZomGedaliya",
            Self::ZomEsther => "ZomEsther",
            Self::TuBeAv => "TuBeAv",
            Self::TuBeshvat => "TuBeshvat",
            Self::LagBOmer => "LagBOmer",
            Self::YomYerushalayim => "YomYerushalayim",
            Self::HoshanaRaba => "HoshanaRaba",
            Self::ShminiAtzeret => "ShminiAtzeret",
            Self::SimchatTorah => "SimchatTorah",
            Self::ShushanPurim => "ShushanPurim",
            Self::YomHazikaron => "YomHazikaron",
            Self::YomHaatzmaut => "YomHaatzmaut",
        }
    }

    /// Returns whether this holiday is a fast day.
    #[inline]
    #[must_use]
    pub fn is_fast(self) -> bool {
        matches!(
            self,
            Self::ZomTamuz | Self::ZomAv | Self::ZomGedaliya | Self::ZomEsther | Self::YomKippur
        )
    }
}

impl fmt::Display for Holiday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.identifier().fmt(f)
    }
}

impl FromStr for Holiday {
    type Err = LuachError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|h| h.identifier() == s)
            .ok_or(LuachError::general("unknown holiday identifier."))
    }
}

// ==== Rule table ====

/// A group of rules. Layers are applied in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum Layer {
    /// Dates that only depend on the month and day.
    Base,
    /// Dates that depend on the length of Kislev.
    YearLength,
    /// Second festival days kept outside Israel.
    Diaspora,
    /// Yom Hazikaron and Yom Haatzmaut.
    Moving,
}

impl Layer {
    pub(crate) const ORDER: [Self; 4] = [Self::Base, Self::YearLength, Self::Diaspora, Self::Moving];

    fn applies_to(self, region: Region) -> bool {
        match self {
            Self::Diaspora => region.is_diaspora(),
            _ => true,
        }
    }
}

/// Where a rule lands in a given year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Anchor {
    Fixed(HebrewMonth, u8),
    /// A fast that moves to the following Sunday when it falls on Shabbat.
    DeferFromShabbat(HebrewMonth, u8),
    /// A day of Adar in common years, of Adar II in leap years.
    AdarDay(u8),
    /// 13 Adar, or the preceding Thursday when the 13th is Shabbat.
    FastOfEsther,
    /// 30 Kislev, or 3 Tevet when Kislev has 29 days.
    LastDayOfHannuka,
    MemorialDay,
    IndependenceDay,
}

impl Anchor {
    /// Resolves this anchor to a month and day of `year`.
    pub(crate) fn resolve(self, year: &HebrewYear) -> (HebrewMonth, u8) {
        match self {
            Self::Fixed(month, day) => (month, day),
            Self::DeferFromShabbat(month, day) => {
                if year.weekday_of(month, day) == Weekday::Saturday {
                    (month, day + 1)
                } else {
                    (month, day)
                }
            }
            Self::AdarDay(day) => (year.purim_month(), day),
            Self::FastOfEsther => {
                let month = year.purim_month();
                if year.weekday_of(month, 13) == Weekday::Saturday {
                    (month, 11)
                } else {
                    (month, 13)
                }
            }
            Self::LastDayOfHannuka => {
                if year.days_in_month(HebrewMonth::Kislev) == 30 {
                    (HebrewMonth::Kislev, 30)
                } else {
                    (HebrewMonth::Tevet, 3)
                }
            }
            Self::MemorialDay => (HebrewMonth::Iyyar, memorial_pair(year).0),
            Self::IndependenceDay => (HebrewMonth::Iyyar, memorial_pair(year).1),
        }
    }
}

/// Returns the Iyar days of Yom Hazikaron and Yom Haatzmaut.
///
/// The pair is kept off Friday and Shabbat by moving it back when 4 Iyar
/// falls on Thursday or Friday, and off Sunday from 5764 by moving it
/// forward when 4 Iyar is a Sunday.
fn memorial_pair(year: &HebrewYear) -> (u8, u8) {
    match year.weekday_of(HebrewMonth::Iyyar, 4) {
        Weekday::Friday => (2, 3),
        Weekday::Thursday => (3, 4),
        Weekday::Sunday if year.year() >= 5764 => (5, 6),
        _ => (4, 5),
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct HolidayRule {
    pub(crate) holidays: &'static [Holiday],
    pub(crate) layer: Layer,
    pub(crate) anchor: Anchor,
}

const fn rule(holidays: &'static [Holiday], layer: Layer, anchor: Anchor) -> HolidayRule {
    HolidayRule {
        holidays,
        layer,
        anchor,
    }
}

const fn base(holidays: &'static [Holiday], month: HebrewMonth, day: u8) -> HolidayRule {
    rule(holidays, Layer::Base, Anchor::Fixed(month, day))
}

const fn diaspora(holidays: &'static [Holiday], month: HebrewMonth, day: u8) -> HolidayRule {
    rule(holidays, Layer::Diaspora, Anchor::Fixed(month, day))
}

pub(crate) const RULES: &[HolidayRule] = {
    use HebrewMonth::{Av, Iyyar, Kislev, Nisan, Shevat, Sivan, Tammuz, Tevet, Tishri};
    use Holiday::*;

    &[
        base(&[Pesach], Nisan, 15),
        base(&[Pesach], Nisan, 16),
        base(&[Pesach], Nisan, 17),
        base(&[Pesach], Nisan, 18),
        base(&[Pesach], Nisan, 19),
        base(&[Pesach], Nisan, 20),
        base(&[Pesach], Nisan, 21),
        base(&[LagBOmer], Iyyar, 18),
        base(&[YomYerushalayim], Iyyar, 28),
        base(&[Shavuot], Sivan, 6),
        rule(&[ZomTamuz], Layer::Base, Anchor::DeferFromShabbat(Tammuz, 17)),
        rule(&[ZomAv], Layer::Base, Anchor::DeferFromShabbat(Av, 9)),
        base(&[TuBeAv], Av, 15),
        base(&[RoshHashana], Tishri, 1),
        base(&[RoshHashana], Tishri, 2),
        rule(&[ZomGedaliya], Layer::Base, Anchor::DeferFromShabbat(Tishri, 3)),
        base(&[YomKippur], Tishri, 10),
        base(&[Sukkot], Tishri, 15),
        base(&[Sukkot], Tishri, 16),
        base(&[Sukkot], Tishri, 17),
        base(&[Sukkot], Tishri, 18),
        base(&[Sukkot], Tishri, 19),
        base(&[Sukkot], Tishri, 20),
        base(&[HoshanaRaba], Tishri, 21),
        base(&[ShminiAtzeret, SimchatTorah], Tishri, 22),
        base(&[Hannuka], Kislev, 25),
        base(&[Hannuka], Kislev, 26),
        base(&[Hannuka], Kislev, 27),
        base(&[Hannuka], Kislev, 28),
        base(&[Hannuka], Kislev, 29),
        base(&[Hannuka], Tevet, 1),
        base(&[Hannuka], Tevet, 2),
        base(&[TuBeshvat], Shevat, 15),
        rule(&[ZomEsther], Layer::Base, Anchor::FastOfEsther),
        rule(&[Purim], Layer::Base, Anchor::AdarDay(14)),
        rule(&[ShushanPurim], Layer::Base, Anchor::AdarDay(15)),
        rule(&[Hannuka], Layer::YearLength, Anchor::LastDayOfHannuka),
        diaspora(&[Pesach], Nisan, 22),
        diaspora(&[Shavuot], Sivan, 7),
        diaspora(&[ShminiAtzeret], Tishri, 22),
        diaspora(&[SimchatTorah], Tishri, 23),
        rule(&[YomHazikaron], Layer::Moving, Anchor::MemorialDay),
        rule(&[YomHaatzmaut], Layer::Moving, Anchor::IndependenceDay),
    ]
};

// ==== HolidayCalendar ====

/// The holidays of one Hebrew year as observed in one region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayCalendar {
    year: HebrewYear,
    region: Region,
    entries: BTreeMap<(HebrewMonth, u8), &'static [Holiday]>,
}

impl HolidayCalendar {
    /// Builds the holiday calendar of `year` for `region`.
    pub fn build(year: i32, region: Region) -> LuachResult<Self> {
        let year = HebrewYear::try_new(year)?;
        let mut entries = BTreeMap::new();
        for layer in Layer::ORDER.into_iter().filter(|l| l.applies_to(region)) {
            for rule in RULES.iter().filter(|r| r.layer == layer) {
                let key = rule.anchor.resolve(&year);
                if let Some(_replaced) = entries.insert(key, rule.holidays) {
                    #[cfg(feature = "log")]
                    log::trace!(
                        "{layer:?} layer replaced {_replaced:?} with {:?} on {}-{:02}-{:02}",
                        rule.holidays,
                        year.year(),
                        key.0.ordinal(),
                        key.1
                    );
                }
            }
        }
        Ok(Self {
            year,
            region,
            entries,
        })
    }

    /// Returns the holidays on `month`/`day`, empty when there are none.
    #[must_use]
    pub fn get(&self, month: HebrewMonth, day: u8) -> &'static [Holiday] {
        self.entries.get(&(month, day)).copied().unwrap_or_default()
    }

    /// Returns the holidays on `date`, empty when it is in another year.
    #[must_use]
    pub fn on(&self, date: &HebrewDate) -> &'static [Holiday] {
        if date.year() != self.year.year() {
            return &[];
        }
        self.get(date.month(), date.day())
    }

    /// Returns whether `holiday` falls on `month`/`day`.
    #[inline]
    #[must_use]
    pub fn contains(&self, month: HebrewMonth, day: u8, holiday: Holiday) -> bool {
        self.get(month, day).contains(&holiday)
    }

    /// Iterates over all holiday days in calendar order, Tishri first.
    pub fn iter(&self) -> impl Iterator<Item = (HebrewDate, &'static [Holiday])> + '_ {
        let year = self.year.year();
        self.year.months().flat_map(move |month| {
            self.entries
                .range((month, 0)..=(month, u8::MAX))
                .map(move |(&(m, d), &holidays)| (HebrewDate::new_unchecked(year, m, d), holidays))
        })
    }

    /// Iterates over the days on which `holiday` falls, in calendar order.
    pub fn dates_of(&self, holiday: Holiday) -> impl Iterator<Item = HebrewDate> + '_ {
        self.iter()
            .filter(move |(_, holidays)| holidays.contains(&holiday))
            .map(|(date, _)| date)
    }

    /// Returns the Hebrew year number.
    #[inline]
    #[must_use]
    pub fn year(&self) -> i32 {
        self.year.year()
    }

    /// Returns the resolved Hebrew year.
    #[inline]
    #[must_use]
    pub fn hebrew_year(&self) -> &HebrewYear {
        &self.year
    }

    /// Returns the region this calendar was built for.
    #[inline]
    #[must_use]
    pub fn region(&self) -> Region {
        self.region
    }

    /// Returns the number of days carrying at least one holiday.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether no day carries a holiday.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
