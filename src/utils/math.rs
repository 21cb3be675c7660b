//! Integer rounding helpers shared by scoring and aggregation

/// `round(100 * part / whole)` with halves rounded up.
///
/// Returns `None` when `whole` is zero.
pub fn rounded_percentage(part: u64, whole: u64) -> Option<u64> {
    rounded_ratio(part.checked_mul(100)?, whole)
}

/// Mean of non-negative integers with halves rounded up; `None` for an empty input.
pub fn rounded_mean<I>(values: I) -> Option<u64>
where
    I: IntoIterator<Item = u64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0u64, 0u64), |(sum, count), v| (sum + v, count + 1));
    rounded_ratio(sum, count)
}

/// `floor(numerator / denominator + 1/2)` in exact integer arithmetic
fn rounded_ratio(numerator: u64, denominator: u64) -> Option<u64> {
    if denominator == 0 {
        return None;
    }
    Some((2 * numerator + denominator) / (2 * denominator))
}
