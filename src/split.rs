// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Share calculation for a single shared transaction.
//!
//! One side is always rounded and the other is the exact remainder, so
//! `a + b == round2(amount)` for every input, including a fixed amount
//! larger than the transaction (the remainder just goes negative).

use crate::models::{Member, Shares, Split};
use crate::money::round2;
use rust_decimal::Decimal;

/// Split `amount` between the two members according to `split`.
///
/// Never fails: a missing percent defaults to one half and is clamped to
/// `0..=1`; a missing fixed amount defaults to half of the total and a
/// missing fixed member defaults to the payer.
pub fn compute_shares(amount: Decimal, payer: Member, split: &Split) -> Shares {
    let total = round2(amount);
    match split {
        Split::Equal => {
            let half = round2(total / Decimal::TWO);
            Shares::new(half, total.saturating_sub(half))
        }
        Split::Percent { percent_for_payer } => {
            let p = clamp_unit(percent_for_payer.unwrap_or(Decimal::new(5, 1)));
            let payer_share = round2(total * p);
            Shares::for_payer(payer, payer_share, total.saturating_sub(payer_share))
        }
        Split::Fixed { who, amount: fixed } => {
            let who = who.unwrap_or(payer);
            let fixed = round2(fixed.unwrap_or(total / Decimal::TWO));
            Shares::for_payer(who, fixed, total.saturating_sub(fixed))
        }
    }
}

fn clamp_unit(p: Decimal) -> Decimal {
    p.clamp(Decimal::ZERO, Decimal::ONE)
}
