//! The narrow seam between the command grammar and natural-language parsing.

use chrono::{Duration, Local, NaiveDateTime, Timelike};
use thiserror::Error;

use super::datetime::parse_natural_datetime;
use super::recurrence::parse_recurrence;

/// Why a piece of free text could not be resolved.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Text that is not a recognizable point in time.
    #[error("'{0}' isn't a date I understand")]
    UnknownDate(String),
    /// Text that is not a recognizable recurrence.
    #[error("'{0}' isn't an interval I understand")]
    UnknownInterval(String),
}

/// Resolves free text into points in time and recurrence intervals.
///
/// Implementations must be deterministic for a given input and must not keep
/// mutable state between calls.
#[cfg_attr(test, mockall::automock)]
pub trait DateResolver {
    /// Resolve text such as "next friday 3pm" or "2024-12-01T10:00".
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::UnknownDate` if the whole text is not understood.
    fn resolve_datetime(&self, text: &str) -> Result<NaiveDateTime, ResolveError>;

    /// Resolve a phrase such as "every 2 weeks" into a signed interval.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::UnknownInterval` if the phrase is not understood.
    fn resolve_recurrence(&self, phrase: &str) -> Result<Duration, ResolveError>;
}

/// The built-in resolver backed by [`parse_natural_datetime`] and
/// [`parse_recurrence`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalResolver {
    reference: Option<NaiveDateTime>,
}

impl NaturalResolver {
    /// A resolver that reads the local clock on every call.
    #[must_use]
    pub const fn new() -> Self {
        Self { reference: None }
    }

    /// A resolver pinned to a fixed "now" (useful for testing).
    #[must_use]
    pub const fn fixed(now: NaiveDateTime) -> Self {
        Self {
            reference: Some(now),
        }
    }

    /// The reference time, truncated to whole seconds so stored timestamps
    /// survive a round trip through the command log.
    fn now(&self) -> NaiveDateTime {
        let now = self.reference.unwrap_or_else(|| Local::now().naive_local());
        now.with_nanosecond(0).unwrap_or(now)
    }
}

impl DateResolver for NaturalResolver {
    fn resolve_datetime(&self, text: &str) -> Result<NaiveDateTime, ResolveError> {
        parse_natural_datetime(text, self.now())
            .ok_or_else(|| ResolveError::UnknownDate(text.trim().to_string()))
    }

    fn resolve_recurrence(&self, phrase: &str) -> Result<Duration, ResolveError> {
        parse_recurrence(phrase).ok_or_else(|| ResolveError::UnknownInterval(phrase.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn reference() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 11, 26)
            .unwrap()
            .and_hms_nano_opt(8, 30, 15, 250_000_000)
            .unwrap()
    }

    #[test]
    fn test_fixed_resolver_truncates_subseconds() {
        let resolver = NaturalResolver::fixed(reference());
        let now = resolver.resolve_datetime("now").unwrap();
        assert_eq!(now.nanosecond(), 0);
        assert_eq!(now.second(), 15);
    }

    #[test]
    fn test_resolve_datetime_errors_carry_text() {
        let resolver = NaturalResolver::fixed(reference());
        assert_eq!(
            resolver.resolve_datetime("  someday "),
            Err(ResolveError::UnknownDate("someday".to_string()))
        );
    }

    #[test]
    fn test_resolve_recurrence() {
        let resolver = NaturalResolver::new();
        assert_eq!(resolver.resolve_recurrence("every 3 days"), Ok(Duration::days(3)));
        assert_eq!(
            resolver.resolve_recurrence("every now and then"),
            Err(ResolveError::UnknownInterval("every now and then".to_string()))
        );
    }

    #[test]
    fn test_live_resolver_understands_relative_dates() {
        let resolver = NaturalResolver::new();
        let today = Local::now().date_naive();
        let tomorrow = resolver.resolve_datetime("tomorrow").unwrap();
        assert_eq!(tomorrow.date(), today + Duration::days(1));
    }
}
