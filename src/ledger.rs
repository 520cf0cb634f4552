// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Balances and settlement suggestions derived from the full ledger.

use crate::models::{
    LedgerSummary, MovementKind, Payout, PayoutPriority, SavingsMovement, Shares, Transaction,
};
use crate::money::round2;
use crate::split::compute_shares;
use log::{debug, warn};
use rust_decimal::Decimal;

pub fn aggregate(transactions: &[Transaction], movements: &[SavingsMovement]) -> LedgerSummary {
    aggregate_with(transactions, movements, PayoutPriority::default())
}

/// Compute paid, owed share and net per member, the savings balance, and
/// the payouts that would settle positive nets out of savings.
pub fn aggregate_with(
    transactions: &[Transaction],
    movements: &[SavingsMovement],
    priority: PayoutPriority,
) -> LedgerSummary {
    let mut paid = Shares::default();
    let mut share = Shares::default();

    for t in transactions {
        let p = paid.get_mut(t.payer);
        *p = p.saturating_add(t.amount);
        if t.is_shared {
            let s = compute_shares(t.amount, t.payer, &t.split);
            debug!(
                "tx {}: {} paid {}, shares a={} b={}",
                t.id, t.payer, t.amount, s.a, s.b
            );
            share.a = share.a.saturating_add(s.a);
            share.b = share.b.saturating_add(s.b);
        }
    }

    let net = Shares::new(net_for(paid.a, share.a), net_for(paid.b, share.b));
    let savings_balance = savings_balance(movements);
    let suggested = suggest_payouts(&net, savings_balance, priority);

    LedgerSummary {
        paid: Shares::new(round2(paid.a), round2(paid.b)),
        share: Shares::new(round2(share.a), round2(share.b)),
        net,
        savings_balance,
        suggested,
    }
}

/// Positive: the member has paid more than their share and is owed money.
pub fn net_for(paid: Decimal, share: Decimal) -> Decimal {
    round2(paid.saturating_sub(share))
}

pub fn savings_balance(movements: &[SavingsMovement]) -> Decimal {
    let total = movements
        .iter()
        .map(|m| match m.kind {
            MovementKind::Deposit => m.amount,
            MovementKind::Payout => -m.amount,
        })
        .fold(Decimal::ZERO, Decimal::saturating_add);
    round2(total)
}

/// Greedy allocation in priority order: the first owed member takes what
/// the pool allows, the second only gets what is left.
pub fn suggest_payouts(net: &Shares, balance: Decimal, priority: PayoutPriority) -> Vec<Payout> {
    let mut remaining = balance;
    let mut out = Vec::with_capacity(2);
    for member in priority.order() {
        let owed = net.get(member);
        if owed <= Decimal::ZERO {
            continue;
        }
        if remaining <= Decimal::ZERO {
            warn!(
                "{} is owed {} but the savings pool is {}; no payout suggested",
                member, owed, remaining
            );
            continue;
        }
        let amount = round2(owed.min(remaining));
        remaining = remaining.saturating_sub(amount);
        out.push(Payout { member, amount });
    }
    out
}
