use std::collections::HashMap;

use crate::domain::{CurrencyCode, HistoricalObservation, MeanRateMap};
use crate::error::PipelineError;

/// Arithmetic mean of the historical rates for each currency.
///
/// Plain sum-then-divide per currency: no weighting, no outlier removal and
/// no date windowing. Currencies without observations are absent from the
/// result. The result does not depend on observation order beyond
/// floating-point rounding.
pub fn compute_mean_rates(observations: &[HistoricalObservation]) -> Result<MeanRateMap, PipelineError> {
    if observations.is_empty() {
        return Err(PipelineError::InvalidInput(
            "Cannot calculate means: no historical observations".to_string(),
        ));
    }

    let mut acc: HashMap<&CurrencyCode, (f64, usize)> = HashMap::new();
    for obs in observations {
        let entry = acc.entry(&obs.currency).or_insert((0.0, 0));
        entry.0 += obs.rate.value();
        entry.1 += 1;
    }

    Ok(acc
        .into_iter()
        .map(|(currency, (sum, n))| (currency.clone(), sum / n as f64))
        .collect())
}
