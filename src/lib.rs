//! The `luach_rs` crate converts dates between the Gregorian, ISO week and
//! Hebrew calendars and derives the Jewish holidays and liturgical flags that
//! apply to a given day.
//!
//! ```rust
//! use luach_rs::{classify, GregorianDate, HebrewDate, HebrewMonth, LookupOptions};
//!
//! // Every calendar converts through the same fixed day axis.
//! let date = GregorianDate::try_new(2007, 2, 25).unwrap();
//! let hebrew = HebrewDate::from_fixed(date.to_fixed()).unwrap();
//! assert_eq!(hebrew.year(), 5767);
//! assert_eq!(hebrew.month(), HebrewMonth::Adar);
//! assert_eq!(hebrew.day(), 7);
//!
//! // The second day of Pesach 5769 falls inside the Omer count.
//! let pesach = GregorianDate::try_new(2009, 4, 10).unwrap();
//! let flags = classify(pesach, LookupOptions::default()).unwrap();
//! assert_eq!(flags.to_string(), "pesah|Omer");
//! ```
//!
//! All calendars are converted to and from a single integer day count, the
//! [`FixedDay`], where day 1 is Monday, January 1 of year 1 in the proleptic
//! Gregorian calendar. The algorithms follow Reingold and Dershowitz,
//! _Calendrical Calculations_, and its errata.
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::missing_errors_doc,

    // Calendar quantities are small and validated before narrowing.
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
)]

extern crate alloc;
extern crate core;

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod fixed;
pub mod flags;
pub mod gregorian;
pub mod hebrew;
pub mod holidays;
pub mod iso;
pub mod options;

#[doc(hidden)]
pub(crate) mod utils;

#[doc(inline)]
pub use error::LuachError;

/// The `luach_rs` result type
pub type LuachResult<T> = Result<T, LuachError>;

pub use crate::{
    fixed::{FixedDay, Weekday},
    flags::{classify, holidays_on, CalendarFlags},
    gregorian::{GregorianDate, GregorianMonth},
    hebrew::{HebrewDate, HebrewMonth, HebrewYear, Molad},
    holidays::{Holiday, HolidayCalendar},
    iso::IsoWeekDate,
    options::{LookupOptions, Region},
};

#[doc(hidden)]
#[macro_export]
macro_rules! luach_assert {
    ($condition:expr $(,)*) => {
        if !$condition {
            debug_assert!(false, "luach_assert failed: {}", stringify!($condition));
            return Err($crate::LuachError::assert());
        }
    };
    ($condition:expr, $($args:tt)+) => {
        if !$condition {
            #[cfg(feature = "log")]
            log::error!($($args)+);
            debug_assert!(false, $($args)+);
            return Err($crate::LuachError::assert());
        }
    };
}
