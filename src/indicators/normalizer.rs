//! Currency redenomination correction
//!
//! Some price feeds switch between a minor and a major currency unit (pence
//! and pounds, for instance) partway through a history. The switch shows up
//! as a single-step ×100 or ÷100 jump that would poison every return and
//! volatility computed across it.
//!
//! The thresholds are heuristic: a genuine corporate action with a move of
//! more than 50× in one step is indistinguishable from a unit change and will
//! be "corrected" too. Callers must surface the adjustment flag.

/// An older price this many times the newer one marks the older segment as major units.
pub const JUMP_UP_RATIO: f64 = 50.0;

/// An older price this fraction of the newer one marks the newer segment as major units.
pub const JUMP_DOWN_RATIO: f64 = 0.02;

/// Unit factor between minor and major currency units.
pub const REDENOMINATION_FACTOR: f64 = 100.0;

/// Result of a normalization pass.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedPrices {
    pub prices: Vec<f64>,
    pub was_adjusted: bool,
}

/// Detect and undo ×100 / ÷100 unit jumps.
///
/// Pairs are scanned from the newest back to the oldest. The comparison is
/// made on the already-adjusted values, so several redenomination events in
/// one series compose. Scanning continues after every hit.
pub fn normalize_prices(prices: &[f64]) -> NormalizedPrices {
    let mut adjusted = prices.to_vec();
    let mut was_adjusted = false;

    if adjusted.len() < 2 {
        return NormalizedPrices {
            prices: adjusted,
            was_adjusted,
        };
    }

    for i in (1..adjusted.len()).rev() {
        let older = adjusted[i - 1];
        let newer = adjusted[i];
        if !(older.is_finite() && newer.is_finite()) || older <= 0.0 || newer <= 0.0 {
            continue;
        }

        let ratio = older / newer;
        if ratio > JUMP_UP_RATIO {
            for price in &mut adjusted[..i] {
                *price /= REDENOMINATION_FACTOR;
            }
            was_adjusted = true;
        } else if ratio < JUMP_DOWN_RATIO {
            for price in &mut adjusted[i..] {
                *price /= REDENOMINATION_FACTOR;
            }
            was_adjusted = true;
        }
    }

    if was_adjusted {
        tracing::debug!(
            len = adjusted.len(),
            "normalizer: corrected currency redenomination jump"
        );
    }

    NormalizedPrices {
        prices: adjusted,
        was_adjusted,
    }
}

/// `true` if any adjacent pair still falls outside the plausible ratio band.
pub fn has_impossible_jump(prices: &[f64]) -> bool {
    prices.windows(2).any(|w| {
        if w[0] <= 0.0 || w[1] <= 0.0 {
            return false;
        }
        let ratio = w[0] / w[1];
        !(JUMP_DOWN_RATIO..=JUMP_UP_RATIO).contains(&ratio)
    })
}
