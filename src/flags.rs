//! The liturgical flags of a Gregorian day.
//!
//! A rendering shell only needs to know which prayer variants apply. The
//! answer is a [`CalendarFlags`] set that renders as `|` separated tokens,
//! for example `pesah|Omer`.

use alloc::vec::Vec;
use core::fmt;

use bitflags::bitflags;
use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{
    gregorian::GregorianDate,
    hebrew::{HebrewDate, HebrewMonth},
    holidays::{Holiday, HolidayCalendar},
    options::LookupOptions,
    LuachError, LuachResult,
};

bitflags! {
    /// The set of liturgical flags active on a day.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CalendarFlags: u16 {
        /// Pesach liturgy.
        const PESAH = 0b0000_0000_0001;
        /// Shavuot liturgy.
        const SHAVUOT = 0b0000_0000_0010;
        /// Shemini Atzeret liturgy.
        const SHEMINI = 0b0000_0000_0100;
        /// Purim liturgy.
        const PURIM = 0b0000_0000_1000;
        /// Hannuka liturgy.
        const HANUKKA = 0b0000_0001_0000;
        /// The first or thirtieth day of a Hebrew month.
        const ROSH_HODESH = 0b0000_0010_0000;
        /// 16 Nisan through 5 Sivan.
        const OMER = 0b0000_0100_0000;
        /// 1 Elul through 21 Tishri.
        const LEDAVID = 0b0000_1000_0000;
        /// 1 through 9 Tishri.
        const TSHUVA = 0b0001_0000_0000;
    }
}

/// Rendering order and token of every flag.
const TOKENS: [(CalendarFlags, &str); 9] = [
    (CalendarFlags::PESAH, "pesah"),
    (CalendarFlags::SHAVUOT, "shavuot"),
    (CalendarFlags::SHEMINI, "shemini"),
    (CalendarFlags::PURIM, "purim"),
    (CalendarFlags::HANUKKA, "hanukka"),
    (CalendarFlags::ROSH_HODESH, "rosh-hodesh"),
    (CalendarFlags::OMER, "Omer"),
    (CalendarFlags::LEDAVID, "LeDavid"),
    (CalendarFlags::TSHUVA, "tshuva"),
];

/// Holidays with their own liturgy, highest priority first.
const PRIMARY: [(Holiday, CalendarFlags); 5] = [
    (Holiday::Pesach, CalendarFlags::PESAH),
    (Holiday::Shavuot, CalendarFlags::SHAVUOT),
    (Holiday::ShminiAtzeret, CalendarFlags::SHEMINI),
    (Holiday::Purim, CalendarFlags::PURIM),
    (Holiday::Hannuka, CalendarFlags::HANUKKA),
];

impl CalendarFlags {
    /// Classifies a Hebrew date given the holidays that fall on it.
    ///
    /// At most one of the holiday flags is set.
    #[must_use]
    pub fn for_day(date: &HebrewDate, holidays: &[Holiday]) -> Self {
        let mut flags = PRIMARY
            .iter()
            .find(|(holiday, _)| holidays.contains(holiday))
            .map_or(Self::empty(), |(_, flag)| *flag);

        let (month, day) = (date.month(), date.day());
        if day == 1 || day == 30 {
            flags |= Self::ROSH_HODESH;
        }
        let omer = match month {
            HebrewMonth::Nisan => day > 15,
            HebrewMonth::Iyyar => true,
            HebrewMonth::Sivan => day < 6,
            _ => false,
        };
        flags.set(Self::OMER, omer);
        let ledavid = match month {
            HebrewMonth::Elul => true,
            HebrewMonth::Tishri => day < 22,
            _ => false,
        };
        flags.set(Self::LEDAVID, ledavid);
        flags.set(Self::TSHUVA, month == HebrewMonth::Tishri && day < 10);
        flags
    }

    /// Iterates over the tokens of the set flags in rendering order.
    pub fn tokens(self) -> impl Iterator<Item = &'static str> {
        TOKENS
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, token)| token)
    }
}

impl Writeable for CalendarFlags {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        for (i, token) in self.tokens().enumerate() {
            if i > 0 {
                sink.write_char('|')?;
            }
            sink.write_str(token)?;
        }
        Ok(())
    }

    fn writeable_length_hint(&self) -> LengthHint {
        let (count, len) = self
            .tokens()
            .fold((0usize, 0usize), |(count, len), token| (count + 1, len + token.len()));
        LengthHint::exact(len + count.saturating_sub(1))
    }
}

impl_display_with_writeable!(CalendarFlags);

/// Resolves the Hebrew date a Gregorian day is read as, with its calendar.
fn resolve(date: GregorianDate, options: LookupOptions) -> LuachResult<(HebrewDate, HolidayCalendar)> {
    let mut day = date.to_fixed();
    if options.nightfall {
        day = day.checked_add(1).ok_or(
            LuachError::unsupported_year().with_message("the next day is outside the fixed day axis."),
        )?;
    }
    let hebrew = HebrewDate::from_fixed(day)?;
    let calendar = HolidayCalendar::build(hebrew.year(), options.region)?;
    Ok((hebrew, calendar))
}

/// Returns the liturgical flags of a Gregorian day.
///
/// ```rust
/// use luach_rs::{classify, GregorianDate, LookupOptions, Region};
///
/// // 22 Nisan 5769 is only a festival day outside Israel.
/// let date = GregorianDate::try_new(2009, 4, 16).unwrap();
/// let israel = classify(date, LookupOptions::default()).unwrap();
/// assert_eq!(israel.to_string(), "Omer");
///
/// let options = LookupOptions::default().with_region(Region::Diaspora);
/// let diaspora = classify(date, options).unwrap();
/// assert_eq!(diaspora.to_string(), "pesah|Omer");
/// ```
pub fn classify(date: GregorianDate, options: LookupOptions) -> LuachResult<CalendarFlags> {
    let (hebrew, calendar) = resolve(date, options)?;
    Ok(CalendarFlags::for_day(&hebrew, calendar.on(&hebrew)))
}

/// Returns the holidays that fall on a Gregorian day.
pub fn holidays_on(date: GregorianDate, options: LookupOptions) -> LuachResult<Vec<Holiday>> {
    let (hebrew, calendar) = resolve(date, options)?;
    Ok(calendar.on(&hebrew).to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Region;
    use alloc::{format, string::ToString};
    use writeable::assert_writeable_eq;

    fn gregorian(year: i32, month: u8, day: u8) -> GregorianDate {
        HebrewDate::try_new(year, month, day).unwrap().to_gregorian()
    }

    fn flags(year: i32, month: u8, day: u8) -> CalendarFlags {
        classify(gregorian(year, month, day), LookupOptions::default()).unwrap()
    }

    #[test]
    fn second_day_of_pesach() {
        let date = GregorianDate::try_new(2009, 4, 10).unwrap();
        let flags = classify(date, LookupOptions::default()).unwrap();
        assert_eq!(flags, CalendarFlags::PESAH | CalendarFlags::OMER);
        assert_writeable_eq!(flags, "pesah|Omer");
    }

    #[test]
    fn nightfall_reads_the_next_hebrew_day() {
        // 2009-04-08 is 14 Nisan; after nightfall it is already Pesach.
        let date = GregorianDate::try_new(2009, 4, 8).unwrap();
        assert!(classify(date, LookupOptions::default()).unwrap().is_empty());
        let evening = classify(date, LookupOptions::default().with_nightfall(true)).unwrap();
        assert_writeable_eq!(evening, "pesah");
    }

    #[test]
    fn nightfall_reads_month_and_season_from_the_next_day() {
        // 29 Iyar 5769; after nightfall it is already 1 Sivan.
        let date = gregorian(5769, 2, 29);
        let evening = LookupOptions::default().with_nightfall(true);
        assert_writeable_eq!(classify(date, LookupOptions::default()).unwrap(), "Omer");
        assert_writeable_eq!(classify(date, evening).unwrap(), "rosh-hodesh|Omer");

        // 9 Tishri 5770; the evening is Yom Kippur, which ends the ten days.
        let date = gregorian(5770, 7, 9);
        assert_writeable_eq!(classify(date, LookupOptions::default()).unwrap(), "LeDavid|tshuva");
        assert_writeable_eq!(classify(date, evening).unwrap(), "LeDavid");

        // 5 Sivan 5769 ends the Omer at nightfall.
        let date = gregorian(5769, 3, 5);
        assert_writeable_eq!(classify(date, evening).unwrap(), "shavuot");
    }

    #[test]
    fn nightfall_at_the_end_of_the_axis_is_an_error() {
        use crate::error::ErrorKind;

        let err = classify(GregorianDate::MAX, LookupOptions::default().with_nightfall(true))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedYear);
    }

    #[test]
    fn omer_window() {
        assert!(!flags(5769, 1, 15).contains(CalendarFlags::OMER));
        assert!(flags(5769, 1, 16).contains(CalendarFlags::OMER));
        assert!(flags(5769, 2, 29).contains(CalendarFlags::OMER));
        assert_writeable_eq!(flags(5769, 3, 5), "Omer");
        assert_writeable_eq!(flags(5769, 3, 6), "shavuot");
    }

    #[test]
    fn days_of_awe() {
        assert_writeable_eq!(flags(5770, 7, 1), "rosh-hodesh|LeDavid|tshuva");
        assert_writeable_eq!(flags(5770, 7, 9), "LeDavid|tshuva");
        assert_writeable_eq!(flags(5770, 7, 10), "LeDavid");
        assert_writeable_eq!(flags(5770, 7, 21), "LeDavid");
        assert_writeable_eq!(flags(5770, 7, 22), "shemini");
        assert_writeable_eq!(flags(5769, 6, 1), "rosh-hodesh|LeDavid");
    }

    #[test]
    fn diaspora_shmini_atzeret_and_simchat_torah() {
        let options = LookupOptions::default().with_region(Region::Diaspora);
        let first = classify(gregorian(5770, 7, 22), options).unwrap();
        let second = classify(gregorian(5770, 7, 23), options).unwrap();
        assert_writeable_eq!(first, "shemini");
        assert_writeable_eq!(second, "");
        assert_eq!(
            holidays_on(gregorian(5770, 7, 23), options).unwrap(),
            [Holiday::SimchatTorah]
        );
    }

    #[test]
    fn hannuka_on_rosh_hodesh() {
        // Kislev 5770 has 30 days.
        assert_writeable_eq!(flags(5770, 9, 30), "hanukka|rosh-hodesh");
        assert_writeable_eq!(flags(5770, 10, 1), "hanukka|rosh-hodesh");
        assert_writeable_eq!(flags(5770, 9, 25), "hanukka");
    }

    #[test]
    fn purim_in_common_and_leap_years() {
        assert_writeable_eq!(flags(5769, 12, 14), "purim");
        assert_writeable_eq!(flags(5771, 13, 14), "purim");
        assert!(flags(5771, 12, 14).is_empty());
    }

    #[test]
    fn primary_token_follows_priority() {
        let date = HebrewDate::try_new(5770, 9, 25).unwrap();
        let flags = CalendarFlags::for_day(&date, &[Holiday::Hannuka, Holiday::Purim]);
        assert_eq!(flags, CalendarFlags::PURIM);
        let flags = CalendarFlags::for_day(&date, &[Holiday::Hannuka, Holiday::Pesach]);
        assert_eq!(flags, CalendarFlags::PESAH);
        let flags = CalendarFlags::for_day(&date, &[Holiday::TuBeshvat]);
        assert!(flags.is_empty());
    }

    #[test]
    fn empty_flags_render_empty() {
        let flags = CalendarFlags::empty();
        assert_writeable_eq!(flags, "");
        assert_eq!(flags.to_string(), "");
        assert_eq!(flags.tokens().count(), 0);
    }

    #[test]
    fn holidays_on_lists_fasts() {
        let date = gregorian(5770, 7, 10);
        assert_eq!(
            holidays_on(date, LookupOptions::default()).unwrap(),
            [Holiday::YomKippur]
        );
        assert!(holidays_on(gregorian(5770, 8, 10), LookupOptions::default())
            .unwrap()
            .is_empty());
    }
}
