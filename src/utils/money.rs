//! Currency amount formatting.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount with exactly two decimal places.
///
/// Rounds half away from zero, so `61.985` becomes `"61.99"` and zero
/// becomes `"0.00"`.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}
