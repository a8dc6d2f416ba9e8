//! Command line front end for `luach_rs`.
//!
//! Prints the liturgical flags, holidays and calendar conversions of a
//! Gregorian day, or the holiday calendar of a Hebrew year.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]

use clap::{Parser, Subcommand};
use color_eyre::{
    eyre::{eyre, WrapErr},
    Result,
};
use log::{debug, info, LevelFilter};
use luach_rs::{
    classify, holidays_on, FixedDay, GregorianDate, HebrewDate, HolidayCalendar, IsoWeekDate,
    LookupOptions, Region,
};
use serde::Serialize;
use simple_logger::SimpleLogger;

/// Hebrew calendar and holiday lookups.
#[derive(Parser)]
#[command(name = "luach-cli", version, about = "Hebrew calendar and holiday lookups")]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the liturgical flag string of a day.
    Flags(LookupArgs),
    /// List the holidays of a day.
    Holidays(LookupArgs),
    /// Convert a day to every supported calendar.
    Convert {
        /// Gregorian date, YYYY-MM-DD.
        date: GregorianDate,
    },
    /// List the holiday calendar of a Hebrew year.
    Year {
        /// Hebrew year, e.g. 5785.
        year: i32,
        /// Use the diaspora holiday table.
        #[arg(long)]
        diaspora: bool,
    },
}

#[derive(clap::Args)]
struct LookupArgs {
    /// Gregorian date, YYYY-MM-DD.
    date: GregorianDate,
    /// Use the diaspora holiday table.
    #[arg(long)]
    diaspora: bool,
    /// The day is taken after nightfall.
    #[arg(long)]
    nightfall: bool,
}

impl LookupArgs {
    fn options(&self) -> LookupOptions {
        LookupOptions::new(Region::from(self.diaspora), self.nightfall)
    }

    /// The Hebrew date the lookup resolves to.
    fn hebrew_date(&self) -> Result<HebrewDate> {
        let mut day = self.date.to_fixed();
        if self.nightfall {
            day = day
                .checked_add(1)
                .ok_or_else(|| eyre!("{} is the last day of the fixed day axis", self.date))?;
        }
        let hebrew = HebrewDate::from_fixed(day)?;
        debug!("{} resolved to Hebrew date {hebrew}", self.date);
        Ok(hebrew)
    }
}

#[derive(Serialize)]
struct FlagsReport {
    date: String,
    hebrew: String,
    flags: String,
    tokens: Vec<&'static str>,
}

#[derive(Serialize)]
struct HolidaysReport {
    date: String,
    hebrew: String,
    holidays: Vec<&'static str>,
}

#[derive(Serialize)]
struct ConvertReport {
    gregorian: String,
    fixed: i32,
    weekday: String,
    iso: String,
    hebrew: String,
    month_code: String,
    leap_year: bool,
}

#[derive(Serialize)]
struct YearEntry {
    hebrew: String,
    gregorian: String,
    holidays: Vec<&'static str>,
}

#[derive(Serialize)]
struct YearReport {
    year: i32,
    region: String,
    days: u16,
    leap: bool,
    entries: Vec<YearEntry>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    SimpleLogger::new().with_level(level).env().init()?;

    match cli.command {
        Command::Flags(args) => run_flags(&args, cli.json),
        Command::Holidays(args) => run_holidays(&args, cli.json),
        Command::Convert { date } => run_convert(date, cli.json),
        Command::Year { year, diaspora } => run_year(year, Region::from(diaspora), cli.json),
    }
}

fn run_flags(args: &LookupArgs, json: bool) -> Result<()> {
    let flags = classify(args.date, args.options())
        .wrap_err_with(|| format!("could not classify {}", args.date))?;
    if json {
        let report = FlagsReport {
            date: args.date.to_string(),
            hebrew: args.hebrew_date()?.to_string(),
            flags: flags.to_string(),
            tokens: flags.tokens().collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{flags}");
    }
    Ok(())
}

fn run_holidays(args: &LookupArgs, json: bool) -> Result<()> {
    let holidays = holidays_on(args.date, args.options())
        .wrap_err_with(|| format!("could not look up holidays on {}", args.date))?;
    if json {
        let report = HolidaysReport {
            date: args.date.to_string(),
            hebrew: args.hebrew_date()?.to_string(),
            holidays: holidays.iter().map(|h| h.identifier()).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for holiday in holidays {
            println!("{holiday}");
        }
    }
    Ok(())
}

fn run_convert(date: GregorianDate, json: bool) -> Result<()> {
    let fixed: FixedDay = date.to_fixed();
    let hebrew = HebrewDate::from_fixed(fixed)
        .wrap_err_with(|| format!("{date} precedes the Hebrew epoch"))?;
    let report = ConvertReport {
        gregorian: date.to_string(),
        fixed: fixed.get(),
        weekday: format!("{:?}", fixed.weekday()),
        iso: IsoWeekDate::from_fixed(fixed).to_string(),
        hebrew: hebrew.to_string(),
        month_code: hebrew.month_code().as_str().to_string(),
        leap_year: hebrew.in_leap_year(),
    };
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("gregorian  {}", report.gregorian);
        println!("fixed      {}", report.fixed);
        println!("weekday    {}", report.weekday);
        println!("iso        {}", report.iso);
        println!("hebrew     {} ({})", report.hebrew, report.month_code);
    }
    Ok(())
}

fn run_year(year: i32, region: Region, json: bool) -> Result<()> {
    let calendar = HolidayCalendar::build(year, region)
        .wrap_err_with(|| format!("could not build the holiday calendar of {year}"))?;
    info!("built {} holiday days for {year} ({region})", calendar.len());

    let entries: Vec<YearEntry> = calendar
        .iter()
        .map(|(date, holidays)| YearEntry {
            hebrew: date.to_string(),
            gregorian: date.to_gregorian().to_string(),
            holidays: holidays.iter().map(|h| h.identifier()).collect(),
        })
        .collect();

    if json {
        let report = YearReport {
            year,
            region: region.to_string(),
            days: calendar.hebrew_year().days(),
            leap: calendar.hebrew_year().is_leap(),
            entries,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for entry in entries {
            println!("{}  {}  {}", entry.hebrew, entry.gregorian, entry.holidays.join(", "));
        }
    }
    Ok(())
}
