//! Date and time parsing utilities.
//!
//! Turns free text like "next friday 3pm", "tomorrow at noon" or
//! "2024-12-01T10:00" into a single local wall-clock timestamp. Every function
//! takes the reference "now" explicitly so results are reproducible.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

/// ISO-ish layouts accepted verbatim, most specific first.
const ISO_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Result of parsing a natural language date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DateParseResult {
    date: NaiveDate,
    time: Option<NaiveTime>,
}

impl DateParseResult {
    const fn date_only(date: NaiveDate) -> Self {
        Self { date, time: None }
    }

    /// Midnight unless a time was given.
    fn to_datetime(&self) -> NaiveDateTime {
        NaiveDateTime::new(self.date, self.time.unwrap_or_default())
    }
}

/// Parse a natural language datetime expression relative to `now`.
///
/// Dates may be `today`, `tomorrow`, `yesterday`, a weekday (next
/// occurrence), `next monday`, `next week`, `in 3 days`, `in 2 weeks`,
/// `dec 15`, `december 15 2025`, `12/15` or `2024-12-15`. On top of those this
/// accepts:
/// - full ISO timestamps (`2024-12-01T10:00`, `2024-12-01 10:00:30`)
/// - `now` and `in N minutes|hours`
/// - a trailing time: `3pm`, `3:30pm`, `15:00`, `noon`, `evening`, optionally
///   introduced by `at`
/// - a time on its own, meaning today at that time
///
/// A date without a time resolves to midnight. Returns `None` unless the whole
/// input is understood.
#[must_use]
pub fn parse_natural_datetime(input: &str, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(datetime) = parse_iso_datetime(trimmed) {
        return Some(datetime);
    }

    let input = trimmed.to_lowercase();
    if input == "now" || input == "right now" {
        return Some(now);
    }

    if let Some(datetime) = parse_relative_clock_offset(&input, now) {
        return Some(datetime);
    }

    let (date_part, time) = extract_time(&input);
    if date_part.is_empty() {
        return time.map(|t| NaiveDateTime::new(now.date(), t));
    }

    let mut result = parse_date_internal(&date_part, now.date())?;
    result.time = time;
    Some(result.to_datetime())
}

/// Try each accepted ISO layout against the raw input.
fn parse_iso_datetime(input: &str) -> Option<NaiveDateTime> {
    let upper = input.to_ascii_uppercase();
    ISO_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(&upper, format).ok())
}

/// Internal date parsing logic.
fn parse_date_internal(input: &str, today: NaiveDate) -> Option<DateParseResult> {
    let input = input.trim();

    // Relative dates
    match input {
        "today" | "tonight" => return Some(DateParseResult::date_only(today)),
        "tomorrow" => return Some(DateParseResult::date_only(today + Duration::days(1))),
        "yesterday" => return Some(DateParseResult::date_only(today - Duration::days(1))),
        _ => {},
    }

    // "in X days/weeks/months"
    if let Some(result) = parse_relative_offset(input, today) {
        return Some(result);
    }

    // Day of week ("monday", "next tuesday")
    if let Some(result) = parse_weekday(input, today) {
        return Some(result);
    }

    // "next week" (next Monday)
    if input == "next week" {
        let days_until_monday = (i64::from(Weekday::Mon.num_days_from_sunday())
            - i64::from(today.weekday().num_days_from_sunday())
            + 7)
            % 7;
        let days = if days_until_monday == 0 {
            7
        } else {
            days_until_monday
        };
        return Some(DateParseResult::date_only(today + Duration::days(days)));
    }

    // Month and day ("dec 15", "december 15", "dec 15 2025")
    if let Some(result) = parse_month_day(input, today) {
        return Some(result);
    }

    // ISO format (2024-12-15)
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(DateParseResult::date_only(date));
    }

    // US format (12/15/2024 or 12/15)
    parse_us_date(input, today)
}

/// Parse "in X days/weeks/months" patterns.
fn parse_relative_offset(input: &str, today: NaiveDate) -> Option<DateParseResult> {
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.len() == 3 && parts[0] == "in" {
        let amount: i64 = parts[1].parse().ok()?;
        let unit = parts[2].trim_end_matches('s'); // Handle "days" and "day"

        let days = match unit {
            "day" => amount,
            "week" => amount.checked_mul(7)?,
            "month" => amount.checked_mul(30)?, // Approximate
            _ => return None,
        };

        return today.checked_add_signed(Duration::try_days(days)?).map(DateParseResult::date_only);
    }

    None
}

/// Parse "in X minutes/hours", which moves the clock rather than the calendar.
fn parse_relative_clock_offset(input: &str, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.len() != 3 || parts[0] != "in" {
        return None;
    }

    let amount: i64 = parts[1].parse().ok()?;
    let offset = match parts[2] {
        "min" | "mins" | "minute" | "minutes" => Duration::try_minutes(amount)?,
        "hr" | "hrs" | "hour" | "hours" => Duration::try_hours(amount)?,
        _ => return None,
    };

    now.checked_add_signed(offset)
}

/// Parse weekday names.
fn parse_weekday(input: &str, today: NaiveDate) -> Option<DateParseResult> {
    let (is_next, day_str) = input
        .strip_prefix("next ")
        .map_or((false, input), |rest| (true, rest));

    let target_weekday = parse_weekday_name(day_str)?;

    let mut days_until = (i64::from(target_weekday.num_days_from_sunday())
        - i64::from(today.weekday().num_days_from_sunday())
        + 7)
        % 7;

    // If it's the same day or we specified "next", add a week
    if days_until == 0 || is_next {
        days_until += 7;
    }

    Some(DateParseResult::date_only(
        today + Duration::days(days_until),
    ))
}

/// Parse a weekday name or its common abbreviations.
pub(crate) fn parse_weekday_name(input: &str) -> Option<Weekday> {
    match input {
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tue" | "tues" => Some(Weekday::Tue),
        "wednesday" | "wed" => Some(Weekday::Wed),
        "thursday" | "thu" | "thur" | "thurs" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        "sunday" | "sun" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Parse month and day patterns, with an optional trailing year.
fn parse_month_day(input: &str, today: NaiveDate) -> Option<DateParseResult> {
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.len() != 2 && parts.len() != 3 {
        return None;
    }

    let month = parse_month_name(parts[0])?;
    let day: u32 = parts[1].trim_end_matches(',').parse().ok()?;

    if let Some(year) = parts.get(2) {
        let year: i32 = year.parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day).map(DateParseResult::date_only);
    }

    // Use current year, or next year if the date has passed
    let mut year = today.year();
    let date = NaiveDate::from_ymd_opt(year, month, day)?;

    if date < today {
        year += 1;
    }

    NaiveDate::from_ymd_opt(year, month, day).map(DateParseResult::date_only)
}

/// Parse month name to number.
fn parse_month_name(input: &str) -> Option<u32> {
    match input {
        "jan" | "january" => Some(1),
        "feb" | "february" => Some(2),
        "mar" | "march" => Some(3),
        "apr" | "april" => Some(4),
        "may" => Some(5),
        "jun" | "june" => Some(6),
        "jul" | "july" => Some(7),
        "aug" | "august" => Some(8),
        "sep" | "sept" | "september" => Some(9),
        "oct" | "october" => Some(10),
        "nov" | "november" => Some(11),
        "dec" | "december" => Some(12),
        _ => None,
    }
}

/// Parse US date format (MM/DD or MM/DD/YYYY).
fn parse_us_date(input: &str, today: NaiveDate) -> Option<DateParseResult> {
    let parts: Vec<&str> = input.split('/').collect();

    match parts.len() {
        2 => {
            let month: u32 = parts[0].parse().ok()?;
            let day: u32 = parts[1].parse().ok()?;

            let mut year = today.year();
            let date = NaiveDate::from_ymd_opt(year, month, day)?;

            if date < today {
                year += 1;
            }

            NaiveDate::from_ymd_opt(year, month, day).map(DateParseResult::date_only)
        },
        3 => {
            let month: u32 = parts[0].parse().ok()?;
            let day: u32 = parts[1].parse().ok()?;
            let year: i32 = parts[2].parse().ok()?;

            // Handle 2-digit years
            let year = if year < 100 { 2000 + year } else { year };

            NaiveDate::from_ymd_opt(year, month, day).map(DateParseResult::date_only)
        },
        _ => None,
    }
}

/// Extract time from the end of a string.
///
/// Returns the remaining string and the parsed time.
fn extract_time(input: &str) -> (String, Option<NaiveTime>) {
    // Remove "at" if present
    let input = input.strip_prefix("at ").unwrap_or(input);
    let input = input.replace(" at ", " ").replace(" @ ", " ");
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.is_empty() {
        return (input, None);
    }

    // Try parsing the last part as a time
    let last = parts[parts.len() - 1];
    if let Some(time) = parse_time(last) {
        let date_part = parts[..parts.len() - 1].join(" ");
        return (date_part, Some(time));
    }

    (parts.join(" "), None)
}

/// Parse a time string.
fn parse_time(input: &str) -> Option<NaiveTime> {
    let input = input.to_lowercase();

    // Special times
    match input.as_str() {
        "midnight" => return NaiveTime::from_hms_opt(0, 0, 0),
        "morning" => return NaiveTime::from_hms_opt(9, 0, 0),
        "noon" | "midday" => return NaiveTime::from_hms_opt(12, 0, 0),
        "afternoon" => return NaiveTime::from_hms_opt(14, 0, 0),
        "evening" => return NaiveTime::from_hms_opt(18, 0, 0),
        "night" => return NaiveTime::from_hms_opt(21, 0, 0),
        _ => {},
    }

    // 24-hour format (15:00, 15:30)
    if let Ok(time) = NaiveTime::parse_from_str(&input, "%H:%M") {
        return Some(time);
    }

    // 12-hour format (3pm, 3:30pm)
    let (time_str, is_pm) = if let Some(rest) = input.strip_suffix("pm") {
        (rest, true)
    } else if let Some(rest) = input.strip_suffix("am") {
        (rest, false)
    } else {
        return None;
    };

    let (hour, minute) = match time_str.split_once(':') {
        Some((hour, minute)) => (hour.parse::<u32>().ok()?, minute.parse::<u32>().ok()?),
        None => (time_str.parse::<u32>().ok()?, 0),
    };

    if hour == 0 || hour > 12 {
        return None;
    }

    let hour = match (is_pm, hour) {
        (true, 12) => 12,
        (true, h) => h + 12,
        (false, 12) => 0,
        (false, h) => h,
    };

    NaiveTime::from_hms_opt(hour, minute, 0)
}
