// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::money::{coerce_amount, fmt_money};
use crate::store::text_at;
use crate::utils::{id_for_category, maybe_print_json, parse_amount, parse_month, pretty_table};
use anyhow::Result;
use rusqlite::{Connection, params};
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("report", sub)) => report(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn set(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let month = parse_month(sub.get_one::<String>("month").unwrap())?;
    let cat = sub.get_one::<String>("category").unwrap().trim();
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let cat_id = id_for_category(conn, cat)?;
    conn.execute(
        "INSERT INTO budgets(month, category_id, amount) VALUES (?1,?2,?3)
         ON CONFLICT(month, category_id) DO UPDATE SET amount=excluded.amount",
        params![month, cat_id, amount.to_string()],
    )?;
    println!("Budget set for {} / {} = {}", month, cat, amount);
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let month = sub
        .get_one::<String>("month")
        .map(|m| parse_month(m))
        .transpose()?;
    let mut stmt = conn.prepare(
        "SELECT b.month, c.name, b.amount FROM budgets b JOIN categories c ON b.category_id=c.id
         WHERE ?1 IS NULL OR b.month=?1
         ORDER BY b.month DESC, c.name",
    )?;
    let rows = stmt.query_map(params![month], |r| {
        Ok((
            r.get::<_, String>(0)?,
            r.get::<_, String>(1)?,
            r.get::<_, String>(2)?,
        ))
    })?;
    let mut data = Vec::new();
    for row in rows {
        let (m, c, a) = row?;
        data.push(vec![m, c, fmt_money(coerce_amount(Some(a.as_str())))]);
    }
    println!("{}", pretty_table(&["Month", "Category", "Budget"], data));
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct BudgetLine {
    pub category: String,
    pub budget: Decimal,
    pub spent: Decimal,
    pub remaining: Decimal,
}

/// Budget against everything spent in each category during `month`,
/// private and shared expenses alike.
pub fn budget_lines(conn: &Connection, month: &str) -> Result<Vec<BudgetLine>> {
    let mut cats_stmt = conn.prepare("SELECT id, name FROM categories ORDER BY name")?;
    let cats = cats_stmt.query_map([], |r| Ok((r.get::<_, i64>(0)?, r.get::<_, String>(1)?)))?;

    let mut budget_stmt =
        conn.prepare("SELECT amount FROM budgets WHERE category_id=?1 AND month=?2")?;
    let mut spent_stmt = conn.prepare(
        "SELECT amount FROM transactions WHERE category_id=?1 AND substr(date,1,7)=?2",
    )?;

    let mut out = Vec::new();
    for c in cats {
        let (cid, name) = c?;
        let mut budget = Decimal::ZERO;
        let mut rows = budget_stmt.query(params![cid, month])?;
        if let Some(r) = rows.next()? {
            budget = coerce_amount(text_at(r, 0)?.as_deref());
        }
        let mut spent = Decimal::ZERO;
        let mut rows = spent_stmt.query(params![cid, month])?;
        while let Some(r) = rows.next()? {
            spent += coerce_amount(text_at(r, 0)?.as_deref());
        }
        if budget.is_zero() && spent.is_zero() {
            continue;
        }
        out.push(BudgetLine {
            category: name,
            budget,
            spent,
            remaining: budget - spent,
        });
    }
    Ok(out)
}

fn report(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let month = parse_month(sub.get_one::<String>("month").unwrap())?;
    let lines = budget_lines(conn, &month)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &lines)? {
        let rows = lines
            .iter()
            .map(|l| {
                vec![
                    l.category.clone(),
                    fmt_money(l.budget),
                    fmt_money(l.spent),
                    fmt_money(l.remaining),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Category", "Budget", "Spent", "Remaining"], rows)
        );
    }
    Ok(())
}
