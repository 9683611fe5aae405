//! Risk classification from market beta.

use serde::Serialize;

/// How a stock's volatility compares with the market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum RiskProfile {
    #[display("same volatility as the market")]
    MarketLike,
    #[display("stable")]
    Stable,
    #[display("risky")]
    Risky,
}

impl RiskProfile {
    /// Beta of exactly 1 tracks the market; below is stable, above is risky.
    pub fn classify(beta: f64) -> Option<Self> {
        if beta.is_nan() {
            None
        } else if beta == 1.0 {
            Some(RiskProfile::MarketLike)
        } else if beta < 1.0 {
            Some(RiskProfile::Stable)
        } else {
            Some(RiskProfile::Risky)
        }
    }
}
