//! Python bindings for the dashboard front end.

use std::collections::HashMap;

use pyo3::exceptions::{PyKeyError, PyRuntimeError, PyTimeoutError, PyValueError};
use pyo3::prelude::*;

use crate::error::Error;
use crate::simulation::runner::simulate_parallel;
use crate::stats::{self, RiskProfile};
use crate::types::{FinancialSnapshot, ReturnSeries, SimulationConfig, Volatility};

impl From<Error> for PyErr {
    fn from(e: Error) -> Self {
        match e {
            Error::MissingLineItem(item) => PyKeyError::new_err(item),
            Error::DeadlineExceeded { .. } => PyTimeoutError::new_err(e.to_string()),
            Error::InsufficientData { .. }
            | Error::InvalidParameter(_)
            | Error::InvalidSeries(_) => PyValueError::new_err(e.to_string()),
            Error::Cancelled | Error::Provider(_) | Error::ThreadPool(_) => {
                PyRuntimeError::new_err(e.to_string())
            }
        }
    }
}

/// Daily fractional returns of a close-price list.
#[pyfunction]
fn daily_returns(closes: Vec<f64>) -> PyResult<Vec<f64>> {
    Ok(stats::returns_from_closes(&closes)?.values().to_vec())
}

/// Sample standard deviation of a return list.
#[pyfunction]
fn volatility(returns: Vec<f64>) -> PyResult<f64> {
    let returns = ReturnSeries::from_values(returns);
    Ok(stats::volatility(&returns)?.value())
}

/// Financial ratios by name; `None` where the denominator is zero.
#[pyfunction]
fn ratios(
    balance_sheet: HashMap<String, f64>,
    income_statement: HashMap<String, f64>,
) -> PyResult<HashMap<String, Option<f64>>> {
    let snapshot = FinancialSnapshot {
        balance_sheet: balance_sheet.into_iter().collect(),
        income_statement: income_statement.into_iter().collect(),
        ..FinancialSnapshot::default()
    };
    let ratios = stats::ratios(&snapshot)?;
    Ok(ratios
        .into_iter()
        .map(|(ratio, value)| (ratio.to_string(), value.as_f64()))
        .collect())
}

/// Simulated price paths, one list per simulation.
///
/// Runs without the GIL on the configured worker pool.
#[pyfunction]
fn simulate(
    py: Python<'_>,
    last_price: f64,
    volatility: f64,
    config: SimulationConfig,
) -> PyResult<Vec<Vec<f64>>> {
    let volatility = Volatility::from_std_dev(volatility)?;
    let result = py.allow_threads(|| simulate_parallel(last_price, volatility, &config))?;
    Ok(result.paths.into_iter().map(|path| path.prices).collect())
}

/// Human-readable risk label for a market beta.
#[pyfunction]
fn risk_profile(beta: f64) -> Option<String> {
    RiskProfile::classify(beta).map(|profile| profile.to_string())
}

/// Python module definition
#[pymodule]
fn findash_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(daily_returns, m)?)?;
    m.add_function(wrap_pyfunction!(volatility, m)?)?;
    m.add_function(wrap_pyfunction!(ratios, m)?)?;
    m.add_function(wrap_pyfunction!(simulate, m)?)?;
    m.add_function(wrap_pyfunction!(risk_profile, m)?)?;
    m.add_class::<SimulationConfig>()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::ratios::items;

    fn dashboard_statements() -> (HashMap<String, f64>, HashMap<String, f64>) {
        let balance = [
            (items::CURRENT_ASSETS, 500.0),
            (items::CURRENT_LIABILITIES, 0.0),
            (items::INVENTORY, 100.0),
            (items::ACCOUNTS_RECEIVABLE, 90.0),
            (items::TOTAL_NON_CURRENT_ASSETS, 300.0),
            (items::TOTAL_ASSETS, 800.0),
            (items::COMMON_STOCK_EQUITY, 400.0),
        ];
        let income = [
            (items::COST_OF_REVENUE, 600.0),
            (items::TOTAL_REVENUE, 1200.0),
            (items::EBIT, 240.0),
            (items::INTEREST_EXPENSE, 40.0),
            (items::NET_INCOME, 120.0),
        ];
        let to_map = |rows: &[(&str, f64)]| {
            rows.iter()
                .map(|&(item, value)| (item.to_string(), value))
                .collect::<HashMap<_, _>>()
        };
        (to_map(&balance), to_map(&income))
    }

    #[test]
    fn test_errors_map_to_python_exceptions() {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            let err: PyErr = Error::MissingLineItem(items::NET_INCOME.to_string()).into();
            assert!(err.is_instance_of::<PyKeyError>(py));

            let err: PyErr = Error::DeadlineExceeded { completed: 3 }.into();
            assert!(err.is_instance_of::<PyTimeoutError>(py));

            for e in [
                Error::InsufficientData { needed: 2, got: 1 },
                Error::InvalidParameter("simulation_count".to_string()),
                Error::InvalidSeries("close 0 is 0".to_string()),
            ] {
                let err: PyErr = e.into();
                assert!(err.is_instance_of::<PyValueError>(py));
            }

            let err: PyErr = Error::Cancelled.into();
            assert!(err.is_instance_of::<PyRuntimeError>(py));
        });
    }

    #[test]
    fn test_ratios_dict_uses_display_names_and_none() {
        pyo3::prepare_freethreaded_python();
        let (balance, income) = dashboard_statements();
        let out = ratios(balance, income).unwrap();

        assert_eq!(out.len(), 11);
        assert_eq!(out["Debt Ratio"], Some(0.0));
        assert_eq!(out["Net Profit Margin"], Some(0.1));
        // Zero current liabilities
        assert_eq!(out["Current Ratio"], None);
        assert_eq!(out["Quick Ratio"], None);
    }

    #[test]
    fn test_ratios_missing_item_raises_key_error() {
        pyo3::prepare_freethreaded_python();
        let (mut balance, income) = dashboard_statements();
        balance.remove(items::TOTAL_ASSETS);
        let err = ratios(balance, income).unwrap_err();
        Python::with_gil(|py| assert!(err.is_instance_of::<PyKeyError>(py)));
    }
}
