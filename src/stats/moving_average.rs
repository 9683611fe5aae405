//! Simple moving average over close prices.

use crate::error::{Error, Result};
use crate::types::PriceSeries;

/// Window of the dashboard's SMA overlay.
pub const DEFAULT_SMA_WINDOW: usize = 50;

/// Rolling mean of closes, aligned with the input bars.
///
/// The first `window - 1` entries are `None`.
pub fn simple_moving_average(series: &PriceSeries, window: usize) -> Result<Vec<Option<f64>>> {
    if window == 0 {
        return Err(Error::InvalidParameter("SMA window must be > 0".to_string()));
    }

    let closes = series.closes();
    let mut out = Vec::with_capacity(closes.len());
    let mut sum = 0.0;
    for (i, &close) in closes.iter().enumerate() {
        sum += close;
        if i >= window {
            sum -= closes[i - window];
        }
        out.push(if i + 1 >= window {
            Some(sum / window as f64)
        } else {
            None
        });
    }
    Ok(out)
}
