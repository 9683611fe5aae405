//! Price history, return series and volatility estimates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One daily OHLCV bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

/// Daily bars ordered by date, strictly ascending.
///
/// Built once from provider output and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSeries {
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    /// Build a series, rejecting unordered or duplicated dates.
    pub fn new(bars: Vec<PriceBar>) -> Result<Self> {
        for (i, pair) in bars.windows(2).enumerate() {
            if pair[1].date <= pair[0].date {
                return Err(Error::InvalidSeries(format!(
                    "bar {} dated {} does not follow {}",
                    i + 1,
                    pair[1].date,
                    pair[0].date
                )));
            }
        }
        Ok(Self { bars })
    }

    /// Build a series from `(date, close)` pairs; open/high/low are set to the close.
    pub fn from_closes<I>(closes: I) -> Result<Self>
    where
        I: IntoIterator<Item = (NaiveDate, f64)>,
    {
        let bars = closes
            .into_iter()
            .map(|(date, close)| PriceBar {
                date,
                open: close,
                high: close,
                low: close,
                close,
                volume: 0,
            })
            .collect();
        Self::new(bars)
    }

    #[inline]
    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Close prices in date order.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|bar| bar.close).collect()
    }

    /// Close of the most recent bar.
    pub fn last_close(&self) -> Option<f64> {
        self.bars.last().map(|bar| bar.close)
    }

    /// Bars with `start <= date <= end`.
    pub fn between(&self, start: NaiveDate, end: NaiveDate) -> PriceSeries {
        let bars = self
            .bars
            .iter()
            .filter(|bar| bar.date >= start && bar.date <= end)
            .copied()
            .collect();
        PriceSeries { bars }
    }
}

impl<'de> Deserialize<'de> for PriceSeries {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            bars: Vec<PriceBar>,
        }

        let raw = Raw::deserialize(deserializer)?;
        PriceSeries::new(raw.bars).map_err(serde::de::Error::custom)
    }
}

/// Fractional close-to-close returns. Only produced by
/// [`daily_returns`](crate::stats::daily_returns).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReturnSeries {
    values: Vec<f64>,
}

impl ReturnSeries {
    pub(crate) fn from_values(values: Vec<f64>) -> Self {
        Self { values }
    }

    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Standard deviation of daily returns.
///
/// Normally derived with [`volatility`](crate::stats::volatility).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, derive_more::Display)]
#[display("{_0:.6}")]
pub struct Volatility(f64);

impl Volatility {
    /// Admit an externally computed estimate. Must be finite and non-negative.
    pub fn from_std_dev(std_dev: f64) -> Result<Self> {
        if !std_dev.is_finite() || std_dev < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "volatility must be finite and non-negative, got {std_dev}"
            )));
        }
        Ok(Self(std_dev))
    }

    pub(crate) fn derived(std_dev: f64) -> Self {
        Self(std_dev)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_rejects_duplicate_dates() {
        let err = PriceSeries::from_closes(vec![(day(1), 10.0), (day(1), 11.0)]).unwrap_err();
        assert!(matches!(err, Error::InvalidSeries(_)));
    }

    #[test]
    fn test_rejects_descending_dates() {
        let err = PriceSeries::from_closes(vec![(day(2), 10.0), (day(1), 11.0)]).unwrap_err();
        assert!(matches!(err, Error::InvalidSeries(_)));
    }

    #[test]
    fn test_between_is_inclusive() {
        let series =
            PriceSeries::from_closes((1..=10).map(|d| (day(d), d as f64))).unwrap();
        let window = series.between(day(3), day(5));
        assert_eq!(window.closes(), vec![3.0, 4.0, 5.0]);
        assert_eq!(series.last_close(), Some(10.0));
    }

    #[test]
    fn test_volatility_rejects_negative() {
        assert!(Volatility::from_std_dev(-0.1).is_err());
        assert!(Volatility::from_std_dev(f64::NAN).is_err());
        assert_eq!(Volatility::from_std_dev(0.0).unwrap().value(), 0.0);
    }

    #[test]
    fn test_deserialize_validates_order() {
        let json = r#"{"bars":[
            {"date":"2024-03-02","open":1.0,"high":1.0,"low":1.0,"close":1.0,"volume":5},
            {"date":"2024-03-01","open":1.0,"high":1.0,"low":1.0,"close":1.0,"volume":5}
        ]}"#;
        assert!(serde_json::from_str::<PriceSeries>(json).is_err());
    }
}
