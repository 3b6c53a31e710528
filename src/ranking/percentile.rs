//! Percentile rank against a comparison population

/// Share of `population` at or below `value`, scaled to 0–100.
///
/// An empty population ranks everything at 0.
pub fn percentile_rank(value: f64, population: &[f64]) -> f64 {
    if population.is_empty() {
        return 0.0;
    }
    let at_or_below = population.iter().filter(|&&v| v <= value).count();
    at_or_below as f64 / population.len() as f64 * 100.0
}

/// Percentile of every entry against the present values of the same slice.
///
/// Absent entries score 0 and are left out of the population.
pub fn percentile_ranks(values: &[Option<f64>]) -> Vec<f64> {
    let population: Vec<f64> = values.iter().flatten().copied().collect();
    values
        .iter()
        .map(|v| match v {
            Some(v) => percentile_rank(*v, &population),
            None => 0.0,
        })
        .collect()
}
