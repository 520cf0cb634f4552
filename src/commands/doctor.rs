// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::money::in_range;
use crate::store::text_at;
use crate::utils::pretty_table;
use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;

fn numeric(s: Option<&str>) -> Option<Decimal> {
    s.and_then(|v| v.trim().parse::<Decimal>().ok())
}

/// Rows the ledger would silently coerce, clamp or accept with odd results.
pub fn find_issues(conn: &Connection) -> Result<Vec<(String, String)>> {
    let mut issues = Vec::new();

    let mut stmt = conn.prepare(
        "SELECT id, amount, split_method, split_percent_for_payer, split_fixed_amount FROM transactions ORDER BY id",
    )?;
    let mut cur = stmt.query([])?;
    while let Some(r) = cur.next()? {
        let id: i64 = r.get(0)?;
        let amount_s = text_at(r, 1)?;
        let method: String = r.get(2)?;
        let percent_s = text_at(r, 3)?;
        let fixed_s = text_at(r, 4)?;

        let amount = numeric(amount_s.as_deref());
        match amount {
            None => issues.push((
                "tx_amount_not_numeric".into(),
                format!("#{} '{}'", id, amount_s.unwrap_or_default()),
            )),
            Some(a) if a <= Decimal::ZERO => {
                issues.push(("tx_amount_not_positive".into(), format!("#{} {}", id, a)))
            }
            Some(a) if !in_range(a) => {
                issues.push(("tx_amount_out_of_range".into(), format!("#{} {}", id, a)))
            }
            _ => {}
        }
        if method == "percent" {
            if let Some(p) = numeric(percent_s.as_deref()) {
                if p < Decimal::ZERO || p > Decimal::ONE {
                    issues.push(("percent_out_of_range".into(), format!("#{} {}", id, p)));
                }
            }
        }
        if method == "fixed" {
            let fixed = numeric(fixed_s.as_deref());
            if let Some(f) = fixed.filter(|f| *f < Decimal::ZERO) {
                issues.push(("fixed_negative".into(), format!("#{} {}", id, f)));
            }
            if let (Some(f), Some(a)) = (fixed, amount) {
                if f > a {
                    issues.push((
                        "fixed_exceeds_amount".into(),
                        format!("#{} {} > {}", id, f, a),
                    ));
                }
            }
        }
    }

    let mut stmt2 = conn.prepare("SELECT id, type, member, amount FROM shared_savings ORDER BY id")?;
    let mut cur2 = stmt2.query([])?;
    while let Some(r) = cur2.next()? {
        let id: i64 = r.get(0)?;
        let kind: String = r.get(1)?;
        let member: Option<String> = r.get(2)?;
        let amount_s = text_at(r, 3)?;
        if numeric(amount_s.as_deref()).is_none() {
            issues.push((
                "savings_amount_not_numeric".into(),
                format!("#{} '{}'", id, amount_s.unwrap_or_default()),
            ));
        }
        if kind == "payout" && member.is_none() {
            issues.push(("payout_without_recipient".into(), format!("#{}", id)));
        }
    }

    Ok(issues)
}

pub fn handle(conn: &Connection) -> Result<()> {
    let issues = find_issues(conn)?;
    if issues.is_empty() {
        println!("doctor: no issues found");
    } else {
        let rows = issues.into_iter().map(|(k, d)| vec![k, d]).collect();
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
