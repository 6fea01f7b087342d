//! Min-max scaling of score columns

/// Scale `values` linearly into [0, 1].
///
/// When every value is equal there is no spread to scale, so all outputs are 0.
pub fn normalize(values: &[f64]) -> Vec<f64> {
    let Some(&first) = values.first() else {
        return Vec::new();
    };

    let (min, max) = values
        .iter()
        .fold((first, first), |(lo, hi), &x| (lo.min(x), hi.max(x)));

    if max <= min {
        return vec![0.0; values.len()];
    }

    let span = max - min;
    values.iter().map(|&x| (x - min) / span).collect()
}
