//! Normalization of the free-form publication dates found in bibliographic records.
//!
//! Records rarely agree on a date format: some carry a full ISO date, others only a year or a
//! phrase such as `"October 1, 1988"`. [`normalize`] turns any of these into a [`NaiveDate`],
//! filling in the first day of the month or year when the source is less precise.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use log::{trace, warn};
use regex::Regex;

lazy_static! {
    static ref FULL_DATE: Regex = Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").unwrap();
    static ref YEAR_MONTH: Regex = Regex::new(r"^(\d{4})-(\d{2})$").unwrap();
    static ref YEAR: Regex = Regex::new(r"^\d{4}$").unwrap();
}

/// Formats that carry a day, tried in order by [`parse_free_text`].
const DAY_FORMATS: [&str; 8] = [
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
    "%Y/%m/%d",
    "%d/%m/%Y",
    "%d.%m.%Y",
    "%Y.%m.%d",
];

/// Formats that only carry a month and a year, the day is fixed to the first.
const MONTH_FORMATS: [&str; 3] = ["%B %Y", "%b %Y", "%m/%Y"];

/// Normalizes a publication date into a calendar date.
///
/// The following shapes are recognised, first match wins:
///
/// - `YYYY-MM-DD`: the exact date.
/// - `YYYY-MM`: the first day of that month.
/// - `YYYY`: the first of January of that year.
///
/// Anything else is handed to [`parse_free_text`].
///
/// Blank input returns `None`, as does a value that has a recognised shape but is not a real
/// date (e.g. `2023-02-30`).
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
///
/// assert_eq!(NaiveDate::from_ymd_opt(2023, 3, 1), shelf::date::normalize("2023-03"));
/// assert_eq!(None, shelf::date::normalize("   "));
/// ```
#[must_use]
pub fn normalize(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let date = if let Some(caps) = FULL_DATE.captures(text) {
        ymd(&caps[1], &caps[2], &caps[3])
    } else if let Some(caps) = YEAR_MONTH.captures(text) {
        ymd(&caps[1], &caps[2], "1")
    } else if YEAR.is_match(text) {
        ymd(text, "1", "1")
    } else {
        trace!("'{text}' is not an ISO date - trying free text formats");
        return parse_free_text(text);
    };

    if date.is_none() {
        warn!("Could not convert '{text}' into a date");
    }
    date
}

fn ymd(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

/// Best effort parsing of a human written date such as `"October 1, 1988"` or `"Mar 2004"`.
///
/// Month names are English and numeric dates are read day first (`15/03/2023`). Dates without
/// a day resolve to the first of the month.
#[must_use]
pub fn parse_free_text(text: &str) -> Option<NaiveDate> {
    let text = text.trim();

    DAY_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .or_else(|| {
            // chrono needs a day to build a date so one is supplied up front.
            let with_day = format!("01 {text}");
            MONTH_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(&with_day, &format!("%d {fmt}")).ok())
        })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{normalize, parse_free_text};

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn full_date_is_exact() {
        assert_eq!(date(2023, 3, 15), normalize("2023-03-15"));
    }

    #[test]
    fn year_month_defaults_to_first_day() {
        assert_eq!(date(2023, 3, 1), normalize("2023-03"));
    }

    #[test]
    fn year_defaults_to_first_of_january() {
        assert_eq!(date(2023, 1, 1), normalize("2023"));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(date(1999, 12, 31), normalize("  1999-12-31\n"));
        assert_eq!(date(1999, 1, 1), normalize(" 1999 "));
    }

    #[test]
    fn blank_input_is_none() {
        assert_eq!(None, normalize(""));
        assert_eq!(None, normalize("   "));
        assert_eq!(None, normalize("\t\n"));
    }

    #[test]
    fn impossible_dates_are_none() {
        assert_eq!(None, normalize("2023-02-30"));
        assert_eq!(None, normalize("2023-13"));
        assert_eq!(None, normalize("2023-00-10"));
    }

    #[test]
    fn garbage_is_none() {
        assert_eq!(None, normalize("not a date"));
        assert_eq!(None, normalize("20233"));
        assert_eq!(None, normalize("2023-3-5x"));
        assert_eq!(None, normalize("????"));
    }

    #[test]
    fn free_text_dates_are_delegated() {
        assert_eq!(date(1988, 10, 1), normalize("October 1, 1988"));
        assert_eq!(date(2004, 3, 9), normalize("Mar 09, 2004"));
        assert_eq!(date(2010, 7, 4), normalize("4 July 2010"));
    }

    #[test]
    fn free_text_numeric_dates_are_day_first() {
        assert_eq!(date(2023, 3, 15), parse_free_text("15/03/2023"));
        assert_eq!(date(2023, 3, 15), parse_free_text("15.03.2023"));
        assert_eq!(date(2023, 3, 15), parse_free_text("2023/03/15"));
    }

    #[test]
    fn free_text_month_and_year_defaults_to_first_day() {
        assert_eq!(date(2004, 3, 1), parse_free_text("March 2004"));
        assert_eq!(date(2004, 3, 1), parse_free_text("Mar 2004"));
        assert_eq!(date(2004, 11, 1), parse_free_text("11/2004"));
    }

    #[test]
    fn free_text_rejects_unknown_formats() {
        assert_eq!(None, parse_free_text("sometime in the 90s"));
        assert_eq!(None, parse_free_text(""));
    }
}
