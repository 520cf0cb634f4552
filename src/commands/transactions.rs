// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Member, NewTransaction, Split, SplitMethod, Transaction};
use crate::money::fmt_money;
use crate::split::compute_shares;
use crate::store::{LedgerStore, TX_SELECT, transaction_from_row};
use crate::utils::{
    date_or_today, id_for_category, maybe_print_json, member_name, parse_amount, parse_decimal,
    parse_fraction, parse_month, pretty_table, resolve_member,
};
use anyhow::{Result, anyhow};
use rusqlite::Connection;
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        _ => {}
    }
    Ok(())
}

/// Build the split from `--split` and its parameters.
pub fn split_from_args(conn: &Connection, sub: &clap::ArgMatches) -> Result<Split> {
    let method = sub
        .get_one::<String>("split")
        .map(|s| s.parse::<SplitMethod>())
        .transpose()?
        .unwrap_or(SplitMethod::Equal);
    let percent = sub.get_one::<String>("percent");
    let fixed_who = sub.get_one::<String>("fixed-who");
    let fixed_amount = sub.get_one::<String>("fixed-amount");

    if method != SplitMethod::Percent && percent.is_some() {
        return Err(anyhow!("--percent only applies to --split percent"));
    }
    if method != SplitMethod::Fixed && (fixed_who.is_some() || fixed_amount.is_some()) {
        return Err(anyhow!("--fixed-who/--fixed-amount only apply to --split fixed"));
    }

    let fixed_amount = fixed_amount.map(|a| parse_decimal(a)).transpose()?;
    if let Some(f) = fixed_amount {
        if f < Decimal::ZERO {
            return Err(anyhow!("Fixed amount must not be negative, got {}", f));
        }
    }

    Ok(match method {
        SplitMethod::Equal => Split::Equal,
        SplitMethod::Percent => Split::Percent {
            percent_for_payer: percent.map(|p| parse_fraction(p)).transpose()?,
        },
        SplitMethod::Fixed => Split::Fixed {
            who: fixed_who.map(|w| resolve_member(conn, w)).transpose()?,
            amount: fixed_amount,
        },
    })
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let date = date_or_today(sub)?;
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let payer = resolve_member(conn, sub.get_one::<String>("payer").unwrap())?;
    let category_id = sub
        .get_one::<String>("category")
        .map(|c| id_for_category(conn, c))
        .transpose()?;
    let description = sub
        .get_one::<String>("description")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
    let is_shared = !sub.get_flag("private");
    let split = split_from_args(conn, sub)?;

    if let Split::Fixed { amount: Some(f), .. } = &split {
        if *f > amount {
            return Err(anyhow!(
                "Fixed amount {} is larger than the expense {}",
                f,
                amount
            ));
        }
    }

    let tx = NewTransaction {
        date,
        category_id,
        description,
        amount,
        payer,
        is_shared,
        split,
    };
    conn.append_transaction(&tx)?;
    println!(
        "Recorded {} on {} paid by {}{}",
        amount,
        date,
        member_name(conn, payer)?,
        if is_shared { "" } else { " (private)" }
    );
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(conn, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let name_a = member_name(conn, Member::A)?;
        let name_b = member_name(conn, Member::B)?;
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.payer_name.clone(),
                    r.category.clone(),
                    r.description.clone(),
                    r.amount.clone(),
                    r.split.clone(),
                    r.share_a.clone(),
                    r.share_b.clone(),
                ]
            })
            .collect();
        let hdr_a = format!("{} owes", name_a);
        let hdr_b = format!("{} owes", name_b);
        println!(
            "{}",
            pretty_table(
                &[
                    "Date",
                    "Payer",
                    "Category",
                    "Description",
                    "Amount",
                    "Split",
                    &hdr_a,
                    &hdr_b
                ],
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: i64,
    pub date: String,
    pub payer: Member,
    pub payer_name: String,
    pub category: String,
    pub description: String,
    pub amount: String,
    pub shared: bool,
    pub split: String,
    pub share_a: String,
    pub share_b: String,
}

fn describe_split(t: &Transaction) -> String {
    if !t.is_shared {
        return "private".into();
    }
    match &t.split {
        Split::Equal => "equal".into(),
        Split::Percent { percent_for_payer } => match percent_for_payer {
            Some(p) => format!("percent {} to payer", p),
            None => "percent (default)".into(),
        },
        Split::Fixed { who, amount } => format!(
            "fixed {}={}",
            who.unwrap_or(t.payer),
            amount.map(|a| a.to_string()).unwrap_or_else(|| "half".into())
        ),
    }
}

pub fn query_rows(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let mut sql = format!("{} WHERE 1=1", TX_SELECT);
    let mut params_vec: Vec<String> = Vec::new();

    if let Some(month) = sub.get_one::<String>("month") {
        sql.push_str(" AND substr(t.date,1,7)=?");
        params_vec.push(parse_month(month)?);
    }
    if let Some(payer) = sub.get_one::<String>("payer") {
        sql.push_str(" AND t.payer=?");
        params_vec.push(resolve_member(conn, payer)?.as_str().to_string());
    }
    sql.push_str(" ORDER BY t.date DESC, t.id DESC");
    if let Some(limit) = sub.get_one::<usize>("limit") {
        sql.push_str(" LIMIT ?");
        params_vec.push(limit.to_string());
    }

    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt.query(rusqlite::params_from_iter(params_vec.iter()))?;

    let mut data = Vec::new();
    while let Some(r) = rows.next()? {
        let t = transaction_from_row(r)?;
        let (share_a, share_b) = if t.is_shared {
            let s = compute_shares(t.amount, t.payer, &t.split);
            (fmt_money(s.a), fmt_money(s.b))
        } else {
            (String::new(), String::new())
        };
        data.push(TransactionRow {
            id: t.id,
            date: t.date.to_string(),
            payer: t.payer,
            payer_name: member_name(conn, t.payer)?,
            category: t.category.clone().unwrap_or_default(),
            description: t.description.clone().unwrap_or_default(),
            amount: fmt_money(t.amount),
            shared: t.is_shared,
            split: describe_split(&t),
            share_a,
            share_b,
        });
    }
    Ok(data)
}
