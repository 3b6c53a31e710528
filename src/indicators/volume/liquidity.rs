//! Average traded volume

use crate::common::math;
use crate::models::indicators::Liquidity;

pub const LIQUIDITY_WINDOW: usize = 30;

/// Mean volume over the trailing window.
///
/// Bars without a volume inside the window are skipped; `None` when none of
/// them carries one.
pub fn calculate_liquidity(volumes: &[Option<f64>], window: usize) -> Option<Liquidity> {
    let start = volumes.len().saturating_sub(window);
    let present: Vec<f64> = volumes[start..].iter().flatten().copied().collect();
    let average_volume = math::mean(&present)?;

    Some(Liquidity {
        average_volume,
        display: format_magnitude(average_volume),
    })
}

pub fn calculate_liquidity_default(volumes: &[Option<f64>]) -> Option<Liquidity> {
    calculate_liquidity(volumes, LIQUIDITY_WINDOW)
}

/// Format a quantity with a K/M/B suffix, e.g. `1.25M`.
pub fn format_magnitude(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1e9 {
        format!("{:.2}B", value / 1e9)
    } else if abs >= 1e6 {
        format!("{:.2}M", value / 1e6)
    } else if abs >= 1e3 {
        format!("{:.1}K", value / 1e3)
    } else {
        format!("{:.0}", value)
    }
}
