use luach_rs::{
    classify, holidays_on, GregorianDate, HebrewDate, HebrewMonth, Holiday, HolidayCalendar,
    LookupOptions, Region, Weekday,
};

#[test]
fn fasts_never_fall_on_shabbat() {
    let fasts = [
        Holiday::ZomTamuz,
        Holiday::ZomAv,
        Holiday::ZomGedaliya,
        Holiday::ZomEsther,
    ];
    for year in 1..=6000 {
        let calendar = HolidayCalendar::build(year, Region::Israel).unwrap();
        for fast in fasts {
            let dates: Vec<_> = calendar.dates_of(fast).collect();
            assert_eq!(dates.len(), 1, "{fast} in {year}");
            assert_ne!(dates[0].weekday(), Weekday::Saturday, "{fast} in {year}");
        }
    }
}

#[test]
fn every_holiday_occurs_every_year() {
    for year in 5600..5900 {
        for region in [Region::Israel, Region::Diaspora] {
            let calendar = HolidayCalendar::build(year, region).unwrap();
            for holiday in Holiday::ALL {
                assert!(
                    calendar.dates_of(holiday).next().is_some(),
                    "{holiday} missing in {year} ({region})"
                );
            }
        }
    }
}

#[test]
fn festival_lengths_by_region() {
    for year in 5700..5800 {
        let israel = HolidayCalendar::build(year, Region::Israel).unwrap();
        let diaspora = HolidayCalendar::build(year, Region::Diaspora).unwrap();
        assert_eq!(israel.dates_of(Holiday::Pesach).count(), 7);
        assert_eq!(diaspora.dates_of(Holiday::Pesach).count(), 8);
        assert_eq!(israel.dates_of(Holiday::Shavuot).count(), 1);
        assert_eq!(diaspora.dates_of(Holiday::Shavuot).count(), 2);
        assert_eq!(israel.dates_of(Holiday::Sukkot).count(), 6);
        assert_eq!(israel.dates_of(Holiday::RoshHashana).count(), 2);
        assert_eq!(israel.dates_of(Holiday::Hannuka).count(), 8);
    }
}

#[test]
fn diaspora_override_replaces_instead_of_merging() {
    for year in [5600, 5767, 5784, 6000] {
        let israel = HolidayCalendar::build(year, Region::Israel).unwrap();
        let diaspora = HolidayCalendar::build(year, Region::Diaspora).unwrap();
        assert_eq!(
            israel.get(HebrewMonth::Tishri, 22),
            [Holiday::ShminiAtzeret, Holiday::SimchatTorah]
        );
        assert_eq!(diaspora.get(HebrewMonth::Tishri, 22), [Holiday::ShminiAtzeret]);
        assert_eq!(diaspora.get(HebrewMonth::Tishri, 23), [Holiday::SimchatTorah]);
        assert_eq!(diaspora.region(), Region::Diaspora);
        assert_eq!(diaspora.year(), year);
    }
}

#[test]
fn flag_strings_for_known_days() {
    let cases = [
        ("2009-04-10", Region::Israel, "pesah|Omer"),
        ("2009-04-16", Region::Israel, "Omer"),
        ("2009-04-16", Region::Diaspora, "pesah|Omer"),
        ("2009-05-29", Region::Israel, "shavuot"),
        ("2009-05-30", Region::Diaspora, "shavuot"),
        ("2009-03-10", Region::Israel, "purim"),
        ("2009-09-19", Region::Israel, "rosh-hodesh|LeDavid|tshuva"),
        ("2009-10-10", Region::Israel, "shemini"),
        ("2009-12-17", Region::Israel, "hanukka|rosh-hodesh"),
        ("2009-07-01", Region::Israel, ""),
    ];
    for (date, region, expected) in cases {
        let date: GregorianDate = date.parse().unwrap();
        let options = LookupOptions::default().with_region(region);
        assert_eq!(classify(date, options).unwrap().to_string(), expected, "{date}");
    }
}

#[test]
fn nightfall_matches_the_next_day() {
    let start: GregorianDate = "2009-01-01".parse().unwrap();
    for offset in 0..400 {
        let day = start.to_fixed() + offset;
        let evening = GregorianDate::from_fixed(day);
        let morning = GregorianDate::from_fixed(day + 1);
        for region in [Region::Israel, Region::Diaspora] {
            let options = LookupOptions::new(region, false);
            assert_eq!(
                classify(evening, options.with_nightfall(true)).unwrap(),
                classify(morning, options).unwrap()
            );
            assert_eq!(
                holidays_on(evening, options.with_nightfall(true)).unwrap(),
                holidays_on(morning, options).unwrap()
            );
        }
    }
}

#[test]
fn holidays_on_agrees_with_calendar() {
    let calendar = HolidayCalendar::build(5785, Region::Israel).unwrap();
    for (date, holidays) in calendar.iter() {
        assert_eq!(
            holidays_on(date.to_gregorian(), LookupOptions::default()).unwrap(),
            holidays
        );
        assert_eq!(HebrewDate::from_gregorian(date.to_gregorian()).unwrap(), date);
    }
}
