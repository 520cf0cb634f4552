// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Currency rounding shared by every computation that produces money.

use log::warn;
use rust_decimal::{Decimal, RoundingStrategy};

/// Round to whole cents, halves away from zero (`1.005 -> 1.01`, `-0.125 -> -0.13`).
pub fn round2(x: Decimal) -> Decimal {
    x.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Largest magnitude accepted for any single monetary value (one trillion).
/// Sums of millions of such values stay far inside `Decimal`'s range.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0); // 1_000_000_000_000

pub fn in_range(d: Decimal) -> bool {
    d.abs() <= MAX_AMOUNT
}

/// Read a stored monetary value. Missing, non-numeric or out-of-range
/// text counts as zero.
pub fn coerce_amount(raw: Option<&str>) -> Decimal {
    let Some(s) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Decimal::ZERO;
    };
    match s.parse::<Decimal>() {
        Ok(d) if in_range(d) => d,
        Ok(_) => {
            warn!("Out-of-range amount '{}' treated as 0", s);
            Decimal::ZERO
        }
        Err(_) => {
            warn!("Non-numeric amount '{}' treated as 0", s);
            Decimal::ZERO
        }
    }
}

/// Like [`coerce_amount`], but keeps "absent" distinct from zero for optional parameters.
pub fn coerce_optional(raw: Option<&str>) -> Option<Decimal> {
    let s = raw.map(str::trim).filter(|s| !s.is_empty())?;
    match s.parse::<Decimal>() {
        Ok(d) if in_range(d) => Some(d),
        Ok(_) => {
            warn!("Out-of-range split parameter '{}' ignored", s);
            None
        }
        Err(_) => {
            warn!("Non-numeric split parameter '{}' ignored", s);
            None
        }
    }
}

pub fn fmt_money(d: Decimal) -> String {
    format!("{:.2}", round2(d))
}
