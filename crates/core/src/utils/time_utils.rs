use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};
use chrono_tz::Tz;

/// Default timezone for business dates.
/// This is the canonical timezone used to convert UTC instants to domain
/// dates. The sales floor and its payroll calendar run on Eastern time.
pub const DEFAULT_BUSINESS_TZ: Tz = chrono_tz::America::New_York;

/// Converts a UTC instant to a business date in the given timezone.
///
/// This is the single source of truth for converting instants to domain
/// dates. Use this whenever you need "today" for a cycle lookup or an
/// upload date; core computations then take the date as a parameter.
pub fn business_date_from_utc(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Convenience function that uses the default business timezone.
pub fn business_date_today() -> NaiveDate {
    business_date_from_utc(Utc::now(), DEFAULT_BUSINESS_TZ)
}

/// Monday of the week containing `date`. Sundays count into the week
/// that started six days earlier.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let days_back = match date.weekday() {
        Weekday::Mon => 0,
        Weekday::Tue => 1,
        Weekday::Wed => 2,
        Weekday::Thu => 3,
        Weekday::Fri => 4,
        Weekday::Sat => 5,
        Weekday::Sun => 6,
    };
    date - chrono::Duration::days(days_back)
}

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

/// January 1st of the year containing `date`.
pub fn year_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_week_start_is_monday() {
        // 2025-06-18 is a Wednesday
        assert_eq!(week_start(date("2025-06-18")), date("2025-06-16"));
        // Monday maps to itself
        assert_eq!(week_start(date("2025-06-16")), date("2025-06-16"));
        // Sunday belongs to the week that began the previous Monday
        assert_eq!(week_start(date("2025-06-22")), date("2025-06-16"));
    }

    #[test]
    fn test_month_and_year_start() {
        assert_eq!(month_start(date("2025-06-18")), date("2025-06-01"));
        assert_eq!(year_start(date("2025-06-18")), date("2025-01-01"));
    }
}
