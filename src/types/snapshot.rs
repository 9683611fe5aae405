//! Balance sheet, income statement and cash flow snapshots.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which statement a line item lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Statement {
    #[display("balance sheet")]
    BalanceSheet,
    #[display("income statement")]
    IncomeStatement,
    #[display("cash flow")]
    CashFlow,
}

/// Reporting frequency requested from a quote provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StatementFrequency {
    #[default]
    Annual,
    Quarterly,
}

/// Point-in-time financial statements for one reporting period.
///
/// Ratios only read the balance sheet and income statement; the cash flow
/// statement is carried for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialSnapshot {
    /// Period end date, if the provider reports one
    pub period_end: Option<NaiveDate>,
    pub balance_sheet: BTreeMap<String, f64>,
    pub income_statement: BTreeMap<String, f64>,
    #[serde(default)]
    pub cash_flow: BTreeMap<String, f64>,
}

impl FinancialSnapshot {
    pub fn new(period_end: Option<NaiveDate>) -> Self {
        Self {
            period_end,
            ..Self::default()
        }
    }

    /// Builder-style insert into the balance sheet.
    pub fn with_balance(mut self, item: &str, value: f64) -> Self {
        self.balance_sheet.insert(item.to_string(), value);
        self
    }

    /// Builder-style insert into the income statement.
    pub fn with_income(mut self, item: &str, value: f64) -> Self {
        self.income_statement.insert(item.to_string(), value);
        self
    }

    pub fn with_cash_flow(mut self, item: &str, value: f64) -> Self {
        self.cash_flow.insert(item.to_string(), value);
        self
    }

    /// Look up a line item on the given statement.
    pub fn get(&self, statement: Statement, item: &str) -> Option<f64> {
        let table = match statement {
            Statement::BalanceSheet => &self.balance_sheet,
            Statement::IncomeStatement => &self.income_statement,
            Statement::CashFlow => &self.cash_flow,
        };
        table.get(item).copied()
    }
}
