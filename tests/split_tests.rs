// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use twosplit::models::{Member, Shares, Split};
use twosplit::money::{coerce_amount, round2};
use twosplit::split::compute_shares;

fn d(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn percent(p: Option<&str>) -> Split {
    Split::Percent {
        percent_for_payer: p.map(d),
    }
}

#[test]
fn equal_split_halves() {
    let s = compute_shares(d("600"), Member::A, &Split::Equal);
    assert_eq!(s, Shares::new(d("300"), d("300")));
}

#[test]
fn equal_split_gives_odd_cent_to_a() {
    let s = compute_shares(d("0.03"), Member::B, &Split::Equal);
    assert_eq!(s.a, d("0.02"));
    assert_eq!(s.b, d("0.01"));
}

#[test]
fn percent_defaults_to_half() {
    let s = compute_shares(d("200"), Member::A, &percent(None));
    assert_eq!(s, Shares::new(d("100"), d("100")));
    let s = compute_shares(d("200"), Member::B, &percent(None));
    assert_eq!(s, Shares::new(d("100"), d("100")));
}

#[test]
fn percent_applies_to_payer() {
    let s = compute_shares(d("600"), Member::B, &percent(Some("0.7")));
    assert_eq!(s.a, d("180"));
    assert_eq!(s.b, d("420"));

    let s = compute_shares(d("600"), Member::A, &percent(Some("0.7")));
    assert_eq!(s.a, d("420"));
    assert_eq!(s.b, d("180"));
}

#[test]
fn percent_is_clamped() {
    let over = compute_shares(d("80"), Member::A, &percent(Some("1.5")));
    let one = compute_shares(d("80"), Member::A, &percent(Some("1")));
    assert_eq!(over, one);
    assert_eq!(over, Shares::new(d("80"), d("0")));

    let under = compute_shares(d("80"), Member::B, &percent(Some("-0.2")));
    let zero = compute_shares(d("80"), Member::B, &percent(Some("0")));
    assert_eq!(under, zero);
    assert_eq!(under, Shares::new(d("80"), d("0")));
}

#[test]
fn fixed_defaults_to_half_for_payer() {
    let s = compute_shares(
        d("500"),
        Member::A,
        &Split::Fixed {
            who: None,
            amount: None,
        },
    );
    assert_eq!(s, Shares::new(d("250"), d("250")));
}

#[test]
fn fixed_amount_for_designated_member() {
    let s = compute_shares(
        d("1000"),
        Member::B,
        &Split::Fixed {
            who: Some(Member::A),
            amount: Some(d("250")),
        },
    );
    assert_eq!(s.a, d("250"));
    assert_eq!(s.b, d("750"));
}

#[test]
fn fixed_defaults_who_to_payer() {
    let s = compute_shares(
        d("100"),
        Member::B,
        &Split::Fixed {
            who: None,
            amount: Some(d("30")),
        },
    );
    assert_eq!(s, Shares::new(d("70"), d("30")));
}

#[test]
fn fixed_larger_than_amount_leaves_negative_remainder() {
    let s = compute_shares(
        d("100"),
        Member::A,
        &Split::Fixed {
            who: Some(Member::A),
            amount: Some(d("150")),
        },
    );
    assert_eq!(s.a, d("150"));
    assert_eq!(s.b, d("-50"));
    assert_eq!(s.total(), d("100"));
}

#[test]
fn zero_amount_splits_to_zero() {
    for split in [Split::Equal, percent(Some("0.3"))] {
        let s = compute_shares(Decimal::ZERO, Member::A, &split);
        assert_eq!(s, Shares::default());
    }
}

#[test]
fn shares_always_sum_to_rounded_amount() {
    let amounts = ["1234.56", "0.01", "0.03", "1.005", "99.99", "7", "333.333"];
    let splits = [
        Split::Equal,
        percent(None),
        percent(Some("0.7")),
        percent(Some("0.333")),
        Split::Fixed {
            who: Some(Member::B),
            amount: Some(d("300")),
        },
        Split::Fixed {
            who: None,
            amount: None,
        },
    ];
    for a in amounts {
        for split in &splits {
            for payer in Member::ALL {
                let s = compute_shares(d(a), payer, split);
                assert_eq!(s.total(), round2(d(a)), "{} {:?} {}", a, split, payer);
            }
        }
    }
}

#[test]
fn rounding_is_half_away_from_zero() {
    assert_eq!(round2(d("1.005")), d("1.01"));
    assert_eq!(round2(d("1.004")), d("1.00"));
    assert_eq!(round2(d("-1.005")), d("-1.01"));
    assert_eq!(round2(d("2.675")), d("2.68"));
}

#[test]
fn missing_or_garbage_amounts_become_zero() {
    assert_eq!(coerce_amount(None), Decimal::ZERO);
    assert_eq!(coerce_amount(Some("")), Decimal::ZERO);
    assert_eq!(coerce_amount(Some("twelve")), Decimal::ZERO);
    assert_eq!(coerce_amount(Some(" 12.50 ")), d("12.5"));
}
