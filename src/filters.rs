//! Validating parsers for user-supplied filter input.
//!
//! Every parser trims and lowercases its input and returns either the typed
//! value or a named rejection. None of them perform I/O, so the interactive
//! shell can re-prompt on a rejection and programmatic callers get the same
//! validation.

use crate::constants::{ALL_SENTINEL, MONTH_NAMES};
use crate::error::{BikeshareError, Result};
use crate::models::{City, DayFilter, MonthFilter, weekday_name};
use chrono::{Month, Weekday};

/// How the user wants to narrow the data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    Month,
    Day,
    Both,
    None,
}

impl FilterMode {
    pub fn wants_month(&self) -> bool {
        matches!(self, FilterMode::Month | FilterMode::Both)
    }

    pub fn wants_day(&self) -> bool {
        matches!(self, FilterMode::Day | FilterMode::Both)
    }
}

fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Parse a city key
pub fn parse_city(input: &str) -> Result<City> {
    City::from_key(input).ok_or_else(|| BikeshareError::InvalidCity {
        input: input.trim().to_string(),
    })
}

/// Parse any of the twelve month names or `all`
pub fn parse_month(input: &str) -> Result<MonthFilter> {
    let value = normalize(input);
    if value == ALL_SENTINEL {
        return Ok(MonthFilter::All);
    }

    MONTH_NAMES
        .iter()
        .position(|name| name.to_lowercase() == value)
        .and_then(|index| u8::try_from(index + 1).ok())
        .and_then(|number| Month::try_from(number).ok())
        .map(MonthFilter::Only)
        .ok_or_else(|| BikeshareError::InvalidMonth {
            input: input.trim().to_string(),
        })
}

/// Parse a month and additionally require it to be one of `offered`.
///
/// `offered` holds month numbers (1-12). A real month outside that set is
/// rejected with [`BikeshareError::MonthNotOffered`] rather than
/// [`BikeshareError::InvalidMonth`].
pub fn parse_offered_month(input: &str, offered: &[u32]) -> Result<MonthFilter> {
    match parse_month(input)? {
        MonthFilter::All => Ok(MonthFilter::All),
        MonthFilter::Only(month) if offered.contains(&month.number_from_month()) => {
            Ok(MonthFilter::Only(month))
        }
        MonthFilter::Only(month) => Err(BikeshareError::MonthNotOffered {
            month: month.name().to_string(),
            offered: describe_months(offered),
        }),
    }
}

/// Parse a full weekday name or `all`
pub fn parse_day(input: &str) -> Result<DayFilter> {
    let value = normalize(input);
    if value == ALL_SENTINEL {
        return Ok(DayFilter::All);
    }

    const WEEK: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    WEEK.into_iter()
        .find(|day| weekday_name(*day).to_lowercase() == value)
        .map(DayFilter::Only)
        .ok_or_else(|| BikeshareError::InvalidDay {
            input: input.trim().to_string(),
        })
}

/// Parse the filter mode answer: month, day, both or none
pub fn parse_filter_mode(input: &str) -> Result<FilterMode> {
    match normalize(input).as_str() {
        "month" => Ok(FilterMode::Month),
        "day" => Ok(FilterMode::Day),
        "both" => Ok(FilterMode::Both),
        "none" => Ok(FilterMode::None),
        _ => Err(BikeshareError::InvalidFilterMode {
            input: input.trim().to_string(),
        }),
    }
}

/// Parse a yes/no answer (`y`/`n` accepted)
pub fn parse_yes_no(input: &str) -> Result<bool> {
    match normalize(input).as_str() {
        "yes" | "y" => Ok(true),
        "no" | "n" => Ok(false),
        _ => Err(BikeshareError::InvalidAnswer {
            input: input.trim().to_string(),
        }),
    }
}

/// Human-readable list of month names, e.g. "January, February or March"
pub fn describe_months(months: &[u32]) -> String {
    let names: Vec<&str> = months
        .iter()
        .filter_map(|number| crate::models::month_name(*number))
        .collect();

    match names.split_last() {
        None => String::new(),
        Some((last, [])) => (*last).to_string(),
        Some((last, rest)) => format!("{} or {}", rest.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_OFFERED_MONTHS;

    #[test]
    fn test_parse_city() {
        assert_eq!(parse_city("Washington").unwrap(), City::Washington);
        assert!(matches!(
            parse_city("boston"),
            Err(BikeshareError::InvalidCity { input }) if input == "boston"
        ));
        assert_eq!(
            parse_city("boston").unwrap_err().to_string(),
            "Unknown city 'boston'. Choose one of: chicago, new york city, washington"
        );
    }

    #[test]
    fn test_parse_month_accepts_all_twelve() {
        assert_eq!(parse_month("ALL").unwrap(), MonthFilter::All);
        assert_eq!(parse_month(" june ").unwrap(), MonthFilter::Only(Month::June));
        assert_eq!(
            parse_month("December").unwrap(),
            MonthFilter::Only(Month::December)
        );
        assert!(matches!(
            parse_month("jun"),
            Err(BikeshareError::InvalidMonth { .. })
        ));
    }

    #[test]
    fn test_parse_offered_month_distinguishes_rejections() {
        assert_eq!(
            parse_offered_month("march", DEFAULT_OFFERED_MONTHS).unwrap(),
            MonthFilter::Only(Month::March)
        );
        assert_eq!(
            parse_offered_month("all", DEFAULT_OFFERED_MONTHS).unwrap(),
            MonthFilter::All
        );
        assert!(matches!(
            parse_offered_month("july", DEFAULT_OFFERED_MONTHS),
            Err(BikeshareError::MonthNotOffered { month, .. }) if month == "July"
        ));
        assert!(matches!(
            parse_offered_month("smarch", DEFAULT_OFFERED_MONTHS),
            Err(BikeshareError::InvalidMonth { .. })
        ));
    }

    #[test]
    fn test_parse_day() {
        assert_eq!(parse_day("all").unwrap(), DayFilter::All);
        assert_eq!(parse_day("Monday").unwrap(), DayFilter::Only(Weekday::Mon));
        assert_eq!(parse_day("sunday").unwrap(), DayFilter::Only(Weekday::Sun));
        assert!(matches!(
            parse_day("mon"),
            Err(BikeshareError::InvalidDay { .. })
        ));
    }

    #[test]
    fn test_parse_filter_mode() {
        assert_eq!(parse_filter_mode("Both").unwrap(), FilterMode::Both);
        assert!(parse_filter_mode("none").unwrap() == FilterMode::None);
        assert!(FilterMode::Both.wants_month() && FilterMode::Both.wants_day());
        assert!(!FilterMode::Day.wants_month());
        assert!(parse_filter_mode("weekly").is_err());
    }

    #[test]
    fn test_parse_yes_no() {
        assert!(parse_yes_no("Y").unwrap());
        assert!(!parse_yes_no("no").unwrap());
        assert!(matches!(
            parse_yes_no("maybe"),
            Err(BikeshareError::InvalidAnswer { .. })
        ));
    }

    #[test]
    fn test_describe_months() {
        assert_eq!(describe_months(&[1]), "January");
        assert_eq!(
            describe_months(DEFAULT_OFFERED_MONTHS),
            "January, February, March, April, May or June"
        );
        assert_eq!(describe_months(&[]), "");
    }
}
