// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::savings_balance;
use crate::models::{MovementKind, NewSavingsMovement};
use crate::money::fmt_money;
use crate::store::{LedgerStore, recent_savings_movements};
use crate::utils::{
    date_or_today, maybe_print_json, member_name, parse_amount, pretty_table, resolve_member,
};
use anyhow::Result;
use rusqlite::Connection;
use serde::Serialize;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("deposit", sub)) => record(conn, sub, MovementKind::Deposit)?,
        Some(("payout", sub)) => record(conn, sub, MovementKind::Payout)?,
        Some(("list", sub)) => list(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn record(conn: &Connection, sub: &clap::ArgMatches, kind: MovementKind) -> Result<()> {
    let movement = NewSavingsMovement {
        date: date_or_today(sub)?,
        kind,
        member: sub
            .get_one::<String>("member")
            .map(|s| resolve_member(conn, s))
            .transpose()?,
        amount: parse_amount(sub.get_one::<String>("amount").unwrap())?,
        note: sub
            .get_one::<String>("note")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty()),
    };
    conn.append_savings_movement(&movement)?;

    let balance = savings_balance(&conn.fetch_savings_movements()?);
    let who = match movement.member {
        Some(m) => format!(" ({})", member_name(conn, m)?),
        None => String::new(),
    };
    println!(
        "Recorded {} of {}{}; savings balance {}",
        kind.as_str(),
        fmt_money(movement.amount),
        who,
        fmt_money(balance)
    );
    Ok(())
}

#[derive(Serialize)]
pub struct SavingsRow {
    pub id: i64,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: MovementKind,
    pub member: String,
    pub amount: String,
    pub note: String,
}

pub fn query_rows(conn: &Connection, limit: Option<usize>) -> Result<Vec<SavingsRow>> {
    let mut data = Vec::new();
    for m in recent_savings_movements(conn, limit)? {
        data.push(SavingsRow {
            id: m.id,
            date: m.date.to_string(),
            kind: m.kind,
            member: match m.member {
                Some(who) => member_name(conn, who)?,
                None => String::new(),
            },
            amount: fmt_money(m.amount),
            note: m.note.unwrap_or_default(),
        });
    }
    Ok(data)
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(conn, sub.get_one::<usize>("limit").copied())?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows = data
            .into_iter()
            .map(|r| vec![r.date, r.kind.as_str().to_string(), r.member, r.amount, r.note])
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Type", "Member", "Amount", "Note"], rows)
        );
        let balance = savings_balance(&conn.fetch_savings_movements()?);
        println!("Balance: {}", fmt_money(balance));
    }
    Ok(())
}
