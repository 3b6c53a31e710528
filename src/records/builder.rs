use tracing::{debug, warn};

use crate::error::RecordError;
use crate::indicators::{normalize_prices, IndicatorCalculator};
use crate::models::instrument::InstrumentMetadata;
use crate::models::market::{Bar, PriceSeries};
use crate::models::record::InstrumentRecord;

/// Histories shorter than this cannot support any period calculation.
pub const MIN_HISTORY: usize = 30;

pub struct RecordBuilder;

impl RecordBuilder {
    /// Clean, normalize and measure one instrument's bars.
    ///
    /// Fewer than [`MIN_HISTORY`] usable prices is rejected; the caller
    /// treats the instrument as absent for this refresh.
    pub fn build(
        metadata: &InstrumentMetadata,
        bars: &[Bar],
    ) -> Result<InstrumentRecord, RecordError> {
        let series = PriceSeries::from_bars(bars);
        if series.len() < MIN_HISTORY {
            return Err(RecordError::InsufficientHistory {
                symbol: metadata.symbol.clone(),
                len: series.len(),
                min: MIN_HISTORY,
            });
        }

        let normalized = normalize_prices(series.prices());
        if normalized.was_adjusted {
            warn!(
                symbol = %metadata.symbol,
                "RecordBuilder: currency redenomination corrected for {}",
                metadata.symbol
            );
        }
        let series = series.with_prices(normalized.prices);
        let indicators = IndicatorCalculator::compute(&series);

        debug!(
            symbol = %metadata.symbol,
            samples = series.len(),
            rsi = ?indicators.rsi,
            "RecordBuilder: built record for {}",
            metadata.symbol
        );

        Ok(InstrumentRecord {
            metadata: metadata.clone(),
            current_price: indicators.current_price,
            returns: indicators.returns,
            alternate_returns: indicators.alternate_returns,
            rsi: indicators.rsi,
            liquidity: indicators.liquidity,
            above_long_ma: indicators.above_long_ma,
            volatility: indicators.volatility,
            alternate_volatility: indicators.alternate_volatility,
            currency_adjusted: normalized.was_adjusted,
        })
    }
}
