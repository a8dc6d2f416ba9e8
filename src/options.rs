//! Options that configure holiday and flag lookups.

use core::{fmt, str::FromStr};

use crate::LuachError;

/// Where the holidays are observed.
///
/// The diaspora keeps a second festival day for Pesach and Shavuot and
/// splits Shemini Atzeret from Simchat Torah.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    #[default]
    Israel,
    Diaspora,
}

impl Region {
    /// Returns whether this is [`Region::Diaspora`].
    #[inline]
    #[must_use]
    pub fn is_diaspora(self) -> bool {
        self == Self::Diaspora
    }
}

impl From<bool> for Region {
    /// Maps an `is_diaspora` switch to a region.
    fn from(is_diaspora: bool) -> Self {
        if is_diaspora {
            Self::Diaspora
        } else {
            Self::Israel
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Israel => "israel",
            Self::Diaspora => "diaspora",
        }
        .fmt(f)
    }
}

impl FromStr for Region {
    type Err = LuachError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "israel" => Ok(Self::Israel),
            "diaspora" => Ok(Self::Diaspora),
            _ => Err(LuachError::general("region must be \"israel\" or \"diaspora\".")),
        }
    }
}

/// Options for [`classify`](crate::classify) and
/// [`holidays_on`](crate::holidays_on).
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LookupOptions {
    /// The region whose holiday table is used.
    pub region: Region,
    /// Whether the Gregorian date is taken after nightfall, when the Hebrew
    /// date has already advanced to the next day.
    pub nightfall: bool,
}

impl LookupOptions {
    /// Creates new `LookupOptions`.
    #[inline]
    #[must_use]
    pub const fn new(region: Region, nightfall: bool) -> Self {
        Self { region, nightfall }
    }

    /// Returns these options with `region` replaced.
    #[inline]
    #[must_use]
    pub const fn with_region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    /// Returns these options with `nightfall` replaced.
    #[inline]
    #[must_use]
    pub const fn with_nightfall(mut self, nightfall: bool) -> Self {
        self.nightfall = nightfall;
        self
    }
}
