//! Financial ratios from a balance sheet / income statement snapshot.
//!
//! Each ratio is a plain quotient of named line items. A zero denominator is
//! common in real statements (no inventory, no interest expense) and is
//! reported as [`RatioValue::NotComputable`] instead of an error.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use crate::error::{Error, Result};
use crate::types::{FinancialSnapshot, Statement};

/// Line item names as published by the quote provider.
pub mod items {
    pub const CURRENT_ASSETS: &str = "Current Assets";
    pub const CURRENT_LIABILITIES: &str = "Current Liabilities";
    pub const INVENTORY: &str = "Inventory";
    pub const COST_OF_REVENUE: &str = "Cost Of Revenue";
    pub const ACCOUNTS_RECEIVABLE: &str = "Accounts Receivable";
    pub const TOTAL_REVENUE: &str = "Total Revenue";
    pub const TOTAL_NON_CURRENT_ASSETS: &str = "Total Non Current Assets";
    pub const TOTAL_ASSETS: &str = "Total Assets";
    pub const EBIT: &str = "EBIT";
    pub const INTEREST_EXPENSE: &str = "Interest Expense";
    pub const NET_INCOME: &str = "Net Income";
    pub const COMMON_STOCK_EQUITY: &str = "Common Stock Equity";
}

/// Days per year used for days sales outstanding.
pub const DAYS_PER_YEAR: f64 = 360.0;

/// The fixed set of ratios computed for every snapshot.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, derive_more::Display,
)]
pub enum Ratio {
    #[display("Current Ratio")]
    CurrentRatio,
    #[display("Quick Ratio")]
    QuickRatio,
    #[display("Inventory Turnover")]
    InventoryTurnover,
    #[display("Days Sales Outstanding")]
    DaysSalesOutstanding,
    #[display("Fixed Assets Turnover")]
    FixedAssetsTurnover,
    #[display("Total Assets Turnover")]
    TotalAssetsTurnover,
    #[display("Debt Ratio")]
    DebtRatio,
    #[display("Times Interest Earned")]
    TimesInterestEarned,
    #[display("Net Profit Margin")]
    NetProfitMargin,
    #[display("Return On Equity")]
    ReturnOnEquity,
    #[display("Return On Assets")]
    ReturnOnAssets,
}

impl Ratio {
    pub const ALL: [Ratio; 11] = [
        Ratio::CurrentRatio,
        Ratio::QuickRatio,
        Ratio::InventoryTurnover,
        Ratio::DaysSalesOutstanding,
        Ratio::FixedAssetsTurnover,
        Ratio::TotalAssetsTurnover,
        Ratio::DebtRatio,
        Ratio::TimesInterestEarned,
        Ratio::NetProfitMargin,
        Ratio::ReturnOnEquity,
        Ratio::ReturnOnAssets,
    ];
}

/// Result of a single ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RatioValue {
    Value(f64),
    /// Denominator was zero (or the quotient was not finite)
    NotComputable,
}

impl RatioValue {
    fn quotient(numerator: f64, denominator: f64) -> Self {
        let q = numerator / denominator;
        if denominator == 0.0 || !q.is_finite() {
            RatioValue::NotComputable
        } else {
            RatioValue::Value(q)
        }
    }

    #[inline]
    pub fn as_f64(self) -> Option<f64> {
        match self {
            RatioValue::Value(v) => Some(v),
            RatioValue::NotComputable => None,
        }
    }

    #[inline]
    pub fn is_computable(self) -> bool {
        matches!(self, RatioValue::Value(_))
    }
}

impl Serialize for RatioValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.as_f64().serialize(serializer)
    }
}

/// Every line item needed by [`ratios`], in lookup order.
const REQUIRED: [(Statement, &str); 12] = [
    (Statement::BalanceSheet, items::CURRENT_ASSETS),
    (Statement::BalanceSheet, items::CURRENT_LIABILITIES),
    (Statement::BalanceSheet, items::INVENTORY),
    (Statement::IncomeStatement, items::COST_OF_REVENUE),
    (Statement::BalanceSheet, items::ACCOUNTS_RECEIVABLE),
    (Statement::IncomeStatement, items::TOTAL_REVENUE),
    (Statement::BalanceSheet, items::TOTAL_NON_CURRENT_ASSETS),
    (Statement::BalanceSheet, items::TOTAL_ASSETS),
    (Statement::IncomeStatement, items::EBIT),
    (Statement::IncomeStatement, items::INTEREST_EXPENSE),
    (Statement::IncomeStatement, items::NET_INCOME),
    (Statement::BalanceSheet, items::COMMON_STOCK_EQUITY),
];

/// Compute every [`Ratio`] for one snapshot.
///
/// Fails with [`Error::MissingLineItem`] naming the first absent item.
pub fn ratios(snapshot: &FinancialSnapshot) -> Result<BTreeMap<Ratio, RatioValue>> {
    let mut values = [0.0; REQUIRED.len()];
    for (slot, (statement, item)) in values.iter_mut().zip(REQUIRED) {
        *slot = snapshot
            .get(statement, item)
            .ok_or_else(|| Error::MissingLineItem(item.to_string()))?;
    }
    let [
        current_assets,
        current_liabilities,
        inventory,
        cogs,
        receivables,
        sales,
        fixed_assets,
        total_assets,
        ebit,
        interest,
        net_income,
        equity,
    ] = values;

    let table = [
        (Ratio::CurrentRatio, RatioValue::quotient(current_assets, current_liabilities)),
        (
            Ratio::QuickRatio,
            RatioValue::quotient(current_assets - inventory, current_liabilities),
        ),
        (Ratio::InventoryTurnover, RatioValue::quotient(cogs, inventory)),
        (
            Ratio::DaysSalesOutstanding,
            RatioValue::quotient(receivables, sales / DAYS_PER_YEAR),
        ),
        (Ratio::FixedAssetsTurnover, RatioValue::quotient(sales, fixed_assets)),
        (Ratio::TotalAssetsTurnover, RatioValue::quotient(sales, total_assets)),
        // Liabilities are taken as the current liabilities line
        (Ratio::DebtRatio, RatioValue::quotient(current_liabilities, total_assets)),
        (Ratio::TimesInterestEarned, RatioValue::quotient(ebit, interest)),
        (Ratio::NetProfitMargin, RatioValue::quotient(net_income, sales)),
        (Ratio::ReturnOnEquity, RatioValue::quotient(net_income, equity)),
        (Ratio::ReturnOnAssets, RatioValue::quotient(net_income, total_assets)),
    ];

    let not_computable = table.iter().filter(|(_, v)| !v.is_computable()).count();
    if not_computable > 0 {
        log::debug!("{not_computable} ratios not computable for period {:?}", snapshot.period_end);
    }

    Ok(table.into_iter().collect())
}

/// Ratios for each reporting period, keyed by period end date.
///
/// Snapshots without a period end date are skipped.
pub fn ratios_by_period(
    snapshots: &[FinancialSnapshot],
) -> Result<BTreeMap<NaiveDate, BTreeMap<Ratio, RatioValue>>> {
    snapshots
        .iter()
        .filter_map(|s| s.period_end.map(|date| (date, s)))
        .map(|(date, s)| ratios(s).map(|r| (date, r)))
        .collect()
}
