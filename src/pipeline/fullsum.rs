//! Full-sum reduction with master number preservation.
//!
//! Every value contributes the digits of `floor(|v|)`; the digits are summed
//! across all values, then folded by repeated digit-summation until a single
//! digit or one of 11 / 22 / 33 remains.

use crate::models::{FullSumResult, MasterNumber};

/// Compute the full-sum and its reduction for a list of token values.
pub fn full_sum(values: &[f64]) -> FullSumResult {
    if values.is_empty() {
        return FullSumResult {
            full_sum: 0,
            reduced: 0,
            master: None,
        };
    }

    let total: u64 = values
        .iter()
        .map(|v| integral_digits(*v))
        .flat_map(|digits| digits.into_bytes())
        .map(|b| u64::from(b - b'0'))
        .sum();

    let (reduced, master) = reduce_number(total);
    FullSumResult {
        full_sum: total,
        reduced,
        master,
    }
}

/// Fold `n` by digit-summation, stopping at a master number or a single digit.
///
/// Each pass strictly shrinks any value >= 10, so the loop is bounded by the
/// digit count of the input.
pub fn reduce_number(mut n: u64) -> (u32, Option<MasterNumber>) {
    loop {
        if let Some(master) = MasterNumber::from_value(n) {
            return (master.value(), Some(master));
        }
        if n < 10 {
            return (n as u32, None);
        }
        n = digit_sum(n);
    }
}

fn digit_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Decimal digits of `floor(|v|)`. Non-finite values contribute nothing.
fn integral_digits(v: f64) -> String {
    if !v.is_finite() {
        return String::new();
    }
    // Shortest round-trip form, zero-padded past 17 significant digits.
    v.abs().floor().to_string()
}
