//! Recurrence phrase parsing.
//!
//! Resolves phrases like "every 2 weeks", "every other day" or
//! "every 1 day 12 hours" into a fixed interval, and renders intervals back
//! into the `<n> <unit>` form that the parser reads.

use chrono::Duration;

use super::datetime::parse_weekday_name;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;

/// Units used when rendering an interval, largest first.
const DISPLAY_UNITS: [(&str, i64); 5] = [
    ("week", WEEK),
    ("day", DAY),
    ("hour", HOUR),
    ("minute", MINUTE),
    ("second", 1),
];

/// Parse a recurrence phrase into an interval.
///
/// The leading `every` is optional. Supported forms:
/// - a bare unit: `every day`, `every week`, `every fortnight`
/// - adverbs: `daily`, `weekly`, `hourly`, `monthly`, `yearly`
/// - `every other <unit>` (twice the unit)
/// - a weekday: `every monday` (one week)
/// - one or more `<integer> <unit>` pairs, summed: `every 2 weeks`,
///   `every 1 day 12 hours`, `every -1 days`
///
/// Months are 30 days and years 365 days. The sign is preserved, so callers
/// decide whether a non-positive interval is acceptable.
///
/// Returns `None` if any part of the phrase is not understood.
#[must_use]
pub fn parse_recurrence(input: &str) -> Option<Duration> {
    let input = input.trim().to_lowercase();
    let phrase = input
        .strip_prefix("every")
        .map_or(input.as_str(), str::trim_start);

    if phrase.is_empty() {
        return None;
    }

    let seconds = match phrase {
        "daily" => DAY,
        "weekly" => WEEK,
        "hourly" => HOUR,
        "monthly" => 30 * DAY,
        "yearly" | "annually" => 365 * DAY,
        _ => parse_unit_phrase(phrase)?,
    };

    Duration::try_seconds(seconds)
}

/// Parse everything after `every`.
fn parse_unit_phrase(phrase: &str) -> Option<i64> {
    if let Some(unit) = unit_seconds(phrase) {
        return Some(unit);
    }

    if let Some(rest) = phrase.strip_prefix("other ") {
        return unit_seconds(rest.trim())?.checked_mul(2);
    }

    if parse_weekday_name(phrase).is_some() {
        return Some(WEEK);
    }

    parse_quantities(phrase)
}

/// Sum `<integer> <unit>` pairs, allowing `and` or commas between them.
fn parse_quantities(phrase: &str) -> Option<i64> {
    let tokens: Vec<&str> = phrase
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty() && *t != "and")
        .collect();

    if tokens.is_empty() || tokens.len() % 2 != 0 {
        return None;
    }

    let mut total: i64 = 0;
    for pair in tokens.chunks(2) {
        let amount: i64 = pair[0].parse().ok()?;
        let unit = unit_seconds(pair[1])?;
        total = total.checked_add(amount.checked_mul(unit)?)?;
    }

    Some(total)
}

/// Length of a single unit in seconds.
fn unit_seconds(unit: &str) -> Option<i64> {
    match unit {
        "s" | "sec" | "secs" | "second" | "seconds" => Some(1),
        "m" | "min" | "mins" | "minute" | "minutes" => Some(MINUTE),
        "h" | "hr" | "hrs" | "hour" | "hours" => Some(HOUR),
        "d" | "day" | "days" => Some(DAY),
        "w" | "wk" | "wks" | "week" | "weeks" => Some(WEEK),
        "fortnight" | "fortnights" => Some(2 * WEEK),
        "month" | "months" => Some(30 * DAY),
        "year" | "years" => Some(365 * DAY),
        _ => None,
    }
}

/// Round an interval to the nearest whole second.
///
/// Half a second is added before truncating toward negative infinity, so
/// sub-second noise from the resolver never changes the stored value.
#[must_use]
pub fn round_to_seconds(interval: Duration) -> Duration {
    let millis = interval.num_milliseconds().saturating_add(500);
    Duration::try_seconds(millis.div_euclid(1000)).unwrap_or(interval)
}

/// Render an interval as `<n> <unit>` using the largest unit that divides it.
///
/// The output is accepted by [`parse_recurrence`].
#[must_use]
pub fn format_interval(interval: Duration) -> String {
    let seconds = interval.num_seconds();
    let (unit, size) = DISPLAY_UNITS
        .iter()
        .copied()
        .find(|(_, size)| seconds != 0 && seconds % size == 0)
        .unwrap_or(("second", 1));

    let count = seconds / size;
    if count == 1 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}
