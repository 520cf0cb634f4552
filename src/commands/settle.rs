// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::summary::{load_summary, print_summary};
use crate::models::{MovementKind, NewSavingsMovement};
use crate::money::fmt_money;
use crate::store::LedgerStore;
use crate::utils::{date_or_today, member_name};
use anyhow::Result;
use log::info;
use rusqlite::Connection;

pub fn handle(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let summary = load_summary(conn)?;
    if summary.suggested.is_empty() {
        println!("Nothing to pay out");
        print_summary(conn, &summary)?;
        return Ok(());
    }

    for p in &summary.suggested {
        println!(
            "Suggested payout: {} to {}",
            fmt_money(p.amount),
            member_name(conn, p.member)?
        );
    }
    if !sub.get_flag("commit") {
        println!("Run with --commit to record it");
        return Ok(());
    }

    let date = date_or_today(sub)?;
    let tx = conn.unchecked_transaction()?;
    for p in &summary.suggested {
        tx.append_savings_movement(&NewSavingsMovement {
            date,
            kind: MovementKind::Payout,
            member: Some(p.member),
            amount: p.amount,
            note: Some("settlement".into()),
        })?;
        info!("recorded settlement payout of {} to {}", p.amount, p.member);
    }
    tx.commit()?;

    // fresh read so the output reflects what is now stored
    print_summary(conn, &load_summary(conn)?)?;
    Ok(())
}
