//! Lookback presets for price history requests.

use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Preset history windows offered by the dashboard.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
pub enum Lookback {
    #[display("1M")]
    OneMonth,
    #[display("3M")]
    ThreeMonths,
    #[default]
    #[display("6M")]
    SixMonths,
    #[display("YTD")]
    YearToDate,
    #[display("1Y")]
    OneYear,
    #[display("3Y")]
    ThreeYears,
    #[display("5Y")]
    FiveYears,
    #[display("MAX")]
    Max,
}

impl Lookback {
    pub const ALL: [Lookback; 8] = [
        Lookback::OneMonth,
        Lookback::ThreeMonths,
        Lookback::SixMonths,
        Lookback::YearToDate,
        Lookback::OneYear,
        Lookback::ThreeYears,
        Lookback::FiveYears,
        Lookback::Max,
    ];

    /// First date of the window ending at `today`.
    ///
    /// Years are counted as 365 days.
    pub fn start_date(self, today: NaiveDate) -> NaiveDate {
        let days_back = match self {
            Lookback::OneMonth => 30,
            Lookback::ThreeMonths => 90,
            Lookback::SixMonths => 180,
            Lookback::OneYear => 365,
            Lookback::ThreeYears => 3 * 365,
            Lookback::FiveYears => 5 * 365,
            Lookback::YearToDate => {
                return NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today);
            }
            Lookback::Max => return NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or(NaiveDate::MIN),
        };
        today - Duration::days(days_back)
    }
}

/// Short trailing windows, the dashboard's alternative to [`Lookback`] presets.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
pub enum TimeInterval {
    Day,
    #[default]
    Month,
    Year,
}

impl TimeInterval {
    pub const ALL: [TimeInterval; 3] = [
        TimeInterval::Day,
        TimeInterval::Month,
        TimeInterval::Year,
    ];

    /// First date of the window ending at `today`: 1, 30 or 365 days back.
    pub fn start_date(self, today: NaiveDate) -> NaiveDate {
        let days_back = match self {
            TimeInterval::Day => 1,
            TimeInterval::Month => 30,
            TimeInterval::Year => 365,
        };
        today - Duration::days(days_back)
    }
}

impl FromStr for TimeInterval {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeInterval::ALL
            .into_iter()
            .find(|interval| interval.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidParameter(format!("unknown time interval '{s}'")))
    }
}

impl FromStr for Lookback {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().to_ascii_uppercase();
        Lookback::ALL
            .into_iter()
            .find(|lookback| lookback.to_string() == label)
            .ok_or_else(|| Error::InvalidParameter(format!("unknown lookback '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ytd_starts_on_january_first() {
        let today = NaiveDate::from_ymd_opt(2024, 8, 15).unwrap();
        let lookback: Lookback = "YTD".parse().unwrap();
        assert_eq!(lookback.start_date(today), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn test_fixed_windows() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        assert_eq!(
            Lookback::OneMonth.start_date(today),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert_eq!(
            Lookback::Max.start_date(today),
            NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_labels_round_trip() {
        for lookback in Lookback::ALL {
            assert_eq!(lookback.to_string().parse::<Lookback>().unwrap(), lookback);
        }
        assert!("2W".parse::<Lookback>().is_err());
    }

    #[test]
    fn test_time_intervals() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        assert_eq!(TimeInterval::default(), TimeInterval::Month);
        assert_eq!(
            TimeInterval::Day.start_date(today),
            NaiveDate::from_ymd_opt(2024, 3, 30).unwrap()
        );
        assert_eq!(
            "month".parse::<TimeInterval>().unwrap().start_date(today),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert_eq!(
            TimeInterval::Year.start_date(today),
            NaiveDate::from_ymd_opt(2023, 4, 1).unwrap()
        );
        assert!("Week".parse::<TimeInterval>().is_err());
    }
}
