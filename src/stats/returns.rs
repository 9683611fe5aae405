//! Daily returns and volatility.

use crate::error::{Error, Result};
use crate::types::{PriceSeries, ReturnSeries, Volatility};

/// Close-to-close fractional returns: `(p[t] - p[t-1]) / p[t-1]`.
///
/// The first bar has no return, so the output is one shorter than the input.
/// Every close must be finite and strictly positive.
pub fn daily_returns(series: &PriceSeries) -> Result<ReturnSeries> {
    if let Some(bad) = series
        .bars()
        .iter()
        .find(|bar| !bar.close.is_finite() || bar.close <= 0.0)
    {
        return Err(Error::InvalidSeries(format!(
            "close on {} is {}, expected a positive price",
            bad.date, bad.close
        )));
    }
    returns_from_closes(&series.closes())
}

/// [`daily_returns`] over bare closes, for callers without dated bars.
pub fn returns_from_closes(closes: &[f64]) -> Result<ReturnSeries> {
    if closes.len() < 2 {
        return Err(Error::InsufficientData {
            needed: 2,
            got: closes.len(),
        });
    }
    if let Some(i) = closes.iter().position(|c| !c.is_finite() || *c <= 0.0) {
        return Err(Error::InvalidSeries(format!(
            "close {i} is {}, expected a positive price",
            closes[i]
        )));
    }

    let values: Vec<f64> = closes
        .windows(2)
        .map(|pair| (pair[1] - pair[0]) / pair[0])
        .collect();
    // Positive finite closes can still overflow when they span extreme magnitudes
    if let Some(i) = values.iter().position(|r| !r.is_finite()) {
        return Err(Error::InvalidSeries(format!(
            "return {i} from {} to {} is not finite",
            closes[i],
            closes[i + 1]
        )));
    }
    Ok(ReturnSeries::from_values(values))
}

/// Sample standard deviation (divisor `n - 1`) of a return series.
///
/// A single return carries no dispersion and yields zero. Fails with
/// [`Error::InvalidSeries`] rather than producing a NaN or infinite estimate.
pub fn volatility(returns: &ReturnSeries) -> Result<Volatility> {
    let values = returns.values();
    if values.is_empty() {
        return Err(Error::InsufficientData { needed: 1, got: 0 });
    }
    if let Some(i) = values.iter().position(|r| !r.is_finite()) {
        return Err(Error::InvalidSeries(format!("return {i} is {}", values[i])));
    }
    if values.len() == 1 {
        return Ok(Volatility::derived(0.0));
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|&r| (r - mean).powi(2)).sum::<f64>() / (n - 1.0);
    if !variance.is_finite() {
        return Err(Error::InvalidSeries(format!(
            "variance of {} returns overflowed",
            values.len()
        )));
    }
    Ok(Volatility::derived(variance.sqrt()))
}

/// Returns and volatility in one pass over a price series.
pub fn estimate_volatility(series: &PriceSeries) -> Result<Volatility> {
    let returns = daily_returns(series)?;
    let vol = volatility(&returns)?;
    log::debug!("estimated volatility {vol} from {} returns", returns.len());
    Ok(vol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn series(closes: &[f64]) -> PriceSeries {
        let start = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
        PriceSeries::from_closes(
            closes
                .iter()
                .enumerate()
                .map(|(i, &c)| (start + chrono::Duration::days(i as i64), c)),
        )
        .unwrap()
    }

    #[test]
    fn test_returns_length_and_values() {
        let closes = [100.0, 110.0, 99.0, 99.0];
        let returns = daily_returns(&series(&closes)).unwrap();
        assert_eq!(returns.len(), closes.len() - 1);
        for (i, r) in returns.values().iter().enumerate() {
            let expected = (closes[i + 1] - closes[i]) / closes[i];
            assert!((r - expected).abs() < 1e-15);
        }
        assert!((returns.values()[0] - 0.1).abs() < 1e-12);
        assert!((returns.values()[1] + 0.1).abs() < 1e-12);
        assert_eq!(returns.values()[2], 0.0);
    }

    #[test]
    fn test_returns_need_two_points() {
        assert_eq!(
            daily_returns(&series(&[100.0])).unwrap_err(),
            Error::InsufficientData { needed: 2, got: 1 }
        );
        assert!(daily_returns(&series(&[])).is_err());
    }

    #[test]
    fn test_returns_reject_zero_close() {
        assert!(matches!(
            daily_returns(&series(&[100.0, 0.0, 5.0])),
            Err(Error::InvalidSeries(_))
        ));
    }

    #[test]
    fn test_returns_reject_overflowing_jump() {
        // Both closes are valid prices but the quotient overflows to +inf
        assert!(matches!(
            returns_from_closes(&[1e-300, 1e300, 1.0]),
            Err(Error::InvalidSeries(_))
        ));
        assert!(matches!(
            estimate_volatility(&series(&[1e-300, 1e300, 1.0])),
            Err(Error::InvalidSeries(_))
        ));
    }

    #[test]
    fn test_volatility_rejects_non_finite() {
        let infinite = ReturnSeries::from_values(vec![0.01, f64::INFINITY, -0.02]);
        assert!(matches!(volatility(&infinite), Err(Error::InvalidSeries(_))));

        // Finite returns whose squared deviations overflow
        let huge = ReturnSeries::from_values(vec![1e200, -1e200, 1e200]);
        assert!(matches!(volatility(&huge), Err(Error::InvalidSeries(_))));
    }

    #[test]
    fn test_volatility_of_constant_returns_is_zero() {
        // Doubling every day gives a constant +100% return
        let returns = daily_returns(&series(&[1.0, 2.0, 4.0, 8.0])).unwrap();
        assert_eq!(volatility(&returns).unwrap().value(), 0.0);
    }

    #[test]
    fn test_volatility_matches_sample_std() {
        let returns = ReturnSeries::from_values(vec![0.01, -0.02, 0.03, 0.0]);
        // mean 0.005, squared deviations sum 0.0013, / 3
        let expected = (0.0013f64 / 3.0).sqrt();
        assert!((volatility(&returns).unwrap().value() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_volatility_non_negative() {
        let returns = daily_returns(&series(&[50.0, 51.0, 49.5, 52.25, 48.0])).unwrap();
        assert!(volatility(&returns).unwrap().value() >= 0.0);
        let single = ReturnSeries::from_values(vec![0.4]);
        assert_eq!(volatility(&single).unwrap().value(), 0.0);
    }

    #[test]
    fn test_volatility_of_empty_returns() {
        let empty = ReturnSeries::from_values(Vec::new());
        assert_eq!(
            volatility(&empty).unwrap_err(),
            Error::InsufficientData { needed: 1, got: 0 }
        );
    }
}
