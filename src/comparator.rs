use crate::model::{CompareError, PriceSign, SavingsOutcome};

/// Saving of buying at `catalog_price` instead of `current_price`.
///
/// Returns `Ok(None)` when there is no reference price; a reference price that
/// is zero, negative or not finite is an `InvalidPrice` error.
pub fn compare(
    current_price: Option<f64>,
    catalog_price: f64,
) -> Result<Option<SavingsOutcome>, CompareError> {
    let Some(current) = current_price else {
        return Ok(None);
    };
    if !current.is_finite() || current <= 0.0 {
        return Err(CompareError::InvalidPrice(current));
    }

    let delta = current - catalog_price;
    let percentage = (delta / current) * 100.0;
    let sign = if delta > 0.0 {
        PriceSign::Cheaper
    } else if delta < 0.0 {
        PriceSign::MoreExpensive
    } else {
        PriceSign::Equal
    };

    Ok(Some(SavingsOutcome {
        delta,
        percentage,
        sign,
    }))
}
