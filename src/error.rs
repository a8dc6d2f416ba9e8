//! This module implements `LuachError`.

use alloc::borrow::Cow;
use core::fmt;

/// `LuachError`'s error type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Error.
    #[default]
    Generic,
    /// A calendar field was outside of its valid range.
    InvalidDate,
    /// A Hebrew year before the Hebrew epoch was requested.
    UnsupportedYear,
    /// An internal invariant did not hold.
    Assert,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic => "Error",
            Self::InvalidDate => "InvalidDateError",
            Self::UnsupportedYear => "UnsupportedYearError",
            Self::Assert => "ImplementationError",
        }
        .fmt(f)
    }
}

/// The error type for `luach_rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LuachError {
    kind: ErrorKind,
    msg: Cow<'static, str>,
}

impl LuachError {
    fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: Cow::Borrowed(""),
        }
    }

    /// Create a generic error
    #[must_use]
    pub fn general<S>(msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        Self::new(ErrorKind::Generic).with_message(msg)
    }

    /// Create an invalid date error.
    #[must_use]
    pub fn invalid_date() -> Self {
        Self::new(ErrorKind::InvalidDate)
    }

    /// Create an unsupported year error.
    #[must_use]
    pub fn unsupported_year() -> Self {
        Self::new(ErrorKind::UnsupportedYear)
    }

    /// Create an assertion error.
    #[must_use]
    pub fn assert() -> Self {
        Self::new(ErrorKind::Assert).with_message("Implementation error: an invariant did not hold.")
    }

    /// Add a message to the error.
    #[must_use]
    pub fn with_message<S>(mut self, msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        self.msg = msg.into();
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.msg
    }

    /// Extracts the error message.
    #[inline]
    #[must_use]
    pub fn into_message(self) -> Cow<'static, str> {
        self.msg
    }
}

impl fmt::Display for LuachError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        let msg = self.msg.trim();
        if !msg.is_empty() {
            write!(f, ": {msg}")?;
        }

        Ok(())
    }
}

impl core::error::Error for LuachError {}

#[cfg(test)]
mod tests {
    use super::{ErrorKind, LuachError};
    use alloc::string::ToString;

    #[test]
    fn display_includes_kind_and_message() {
        let err = LuachError::invalid_date().with_message("day 32 is out of range for January.");
        assert_eq!(err.kind(), ErrorKind::InvalidDate);
        assert_eq!(
            err.to_string(),
            "InvalidDateError: day 32 is out of range for January."
        );
    }

    #[test]
    fn display_without_message() {
        assert_eq!(
            LuachError::unsupported_year().to_string(),
            "UnsupportedYearError"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + core::error::Error>() {}
        assert_impl::<LuachError>();
    }
}
