// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::aggregate_with;
use crate::models::{LedgerSummary, Member};
use crate::money::fmt_money;
use crate::store::LedgerStore;
use crate::utils::{get_payout_priority, maybe_print_json, member_name, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

/// Fetch everything from the store and aggregate it from scratch.
pub fn load_summary(conn: &Connection) -> Result<LedgerSummary> {
    let transactions = conn.fetch_transactions()?;
    let movements = conn.fetch_savings_movements()?;
    let priority = get_payout_priority(conn)?;
    Ok(aggregate_with(&transactions, &movements, priority))
}

pub fn handle(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let summary = load_summary(conn)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &summary)? {
        print_summary(conn, &summary)?;
    }
    Ok(())
}

pub fn print_summary(conn: &Connection, summary: &LedgerSummary) -> Result<()> {
    let mut rows = Vec::new();
    for m in Member::ALL {
        rows.push(vec![
            member_name(conn, m)?,
            fmt_money(summary.paid.get(m)),
            fmt_money(summary.share.get(m)),
            fmt_money(summary.net.get(m)),
            fmt_money(summary.suggested_for(m)),
        ]);
    }
    println!(
        "{}",
        pretty_table(&["Member", "Paid", "Share", "Net", "Suggested payout"], rows)
    );
    println!("Savings balance: {}", fmt_money(summary.savings_balance));
    Ok(())
}
