// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Split, Transaction};
use crate::store::LedgerStore;
use anyhow::{Result, anyhow};
use rusqlite::Connection;
use serde_json::json;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(conn, sub),
        _ => Ok(()),
    }
}

/// (percent_for_payer, fixed_who, fixed_amount) as export cells.
fn split_params(t: &Transaction) -> (String, String, String) {
    match &t.split {
        Split::Equal => (String::new(), String::new(), String::new()),
        Split::Percent { percent_for_payer } => (
            percent_for_payer.map(|p| p.to_string()).unwrap_or_default(),
            String::new(),
            String::new(),
        ),
        Split::Fixed { who, amount } => (
            String::new(),
            who.map(|w| w.to_string()).unwrap_or_default(),
            amount.map(|a| a.to_string()).unwrap_or_default(),
        ),
    }
}

fn export_transactions(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    let mut txs = conn.fetch_transactions()?;
    txs.reverse();

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "date",
                "payer",
                "category",
                "description",
                "amount",
                "shared",
                "split_method",
                "percent_for_payer",
                "fixed_who",
                "fixed_amount",
            ])?;
            for t in &txs {
                let (pct, who, fixed) = split_params(t);
                wtr.write_record([
                    t.date.to_string(),
                    t.payer.to_string(),
                    t.category.clone().unwrap_or_default(),
                    t.description.clone().unwrap_or_default(),
                    t.amount.to_string(),
                    t.is_shared.to_string(),
                    t.split.method().as_str().to_string(),
                    pct,
                    who,
                    fixed,
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<_> = txs
                .iter()
                .map(|t| {
                    json!({
                        "date": t.date.to_string(),
                        "payer": t.payer,
                        "category": t.category,
                        "description": t.description,
                        "amount": t.amount.to_string(),
                        "shared": t.is_shared,
                        "split": t.split,
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => return Err(anyhow!("Unknown format: {} (use csv|json)", fmt)),
    }
    println!("Exported {} transactions to {}", txs.len(), out);
    Ok(())
}
