// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Member, PayoutPriority};
use crate::money::MAX_AMOUNT;
use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rusqlite::{Connection, OptionalExtension, params};
use rust_decimal::Decimal;

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_month(s: &str) -> Result<String> {
    let s = s.trim();
    NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
        .with_context(|| format!("Invalid month '{}', expected YYYY-MM", s))?;
    Ok(s.to_string())
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.trim()
        .parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

/// Amounts typed at the prompt must be strictly positive and at most `MAX_AMOUNT`.
pub fn parse_amount(s: &str) -> Result<Decimal> {
    let d = parse_decimal(s)?;
    if d <= Decimal::ZERO {
        return Err(anyhow!("Amount must be positive, got {}", d));
    }
    if d > MAX_AMOUNT {
        return Err(anyhow!("Amount {} exceeds the maximum of {}", d, MAX_AMOUNT));
    }
    Ok(d)
}

/// Parse a fraction in `0..=1`.
pub fn parse_fraction(s: &str) -> Result<Decimal> {
    let d = parse_decimal(s)?;
    if d < Decimal::ZERO || d > Decimal::ONE {
        return Err(anyhow!("Percent must be a fraction between 0 and 1, got {}", d));
    }
    Ok(d)
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Optional `--date` argument, defaulting to today.
pub fn date_or_today(sub: &clap::ArgMatches) -> Result<NaiveDate> {
    match sub.get_one::<String>("date") {
        Some(d) => parse_date(d),
        None => Ok(today()),
    }
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // arrays stream one element per line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

pub fn id_for_category(conn: &Connection, name: &str) -> Result<i64> {
    let name = name.trim();
    let mut stmt = conn.prepare("SELECT id FROM categories WHERE name=?1")?;
    let id: i64 = stmt
        .query_row(params![name], |r| r.get(0))
        .with_context(|| format!("Category '{}' not found", name))?;
    Ok(id)
}

pub fn get_setting(conn: &Connection, key: &str) -> Result<Option<String>> {
    let v: Option<String> = conn
        .query_row("SELECT value FROM settings WHERE key=?1", params![key], |r| {
            r.get(0)
        })
        .optional()?;
    Ok(v)
}

pub fn set_setting(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO settings(key, value) VALUES(?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![key, value],
    )?;
    Ok(())
}

fn name_key(member: Member) -> &'static str {
    match member {
        Member::A => "name_a",
        Member::B => "name_b",
    }
}

pub fn member_name(conn: &Connection, member: Member) -> Result<String> {
    let fallback = match member {
        Member::A => "Member A",
        Member::B => "Member B",
    };
    Ok(get_setting(conn, name_key(member))?.unwrap_or_else(|| fallback.to_string()))
}

pub fn set_member_name(conn: &Connection, member: Member, name: &str) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        return Err(anyhow!("Member name cannot be empty"));
    }
    set_setting(conn, name_key(member), name)
}

/// Accept `a`, `b`, or either member's display name (case-insensitive).
pub fn resolve_member(conn: &Connection, s: &str) -> Result<Member> {
    if let Ok(m) = s.parse::<Member>() {
        return Ok(m);
    }
    let wanted = s.trim().to_lowercase();
    for m in Member::ALL {
        if member_name(conn, m)?.to_lowercase() == wanted {
            return Ok(m);
        }
    }
    Err(anyhow!("Unknown member '{}'", s.trim()))
}

pub fn get_payout_priority(conn: &Connection) -> Result<PayoutPriority> {
    match get_setting(conn, "payout_priority")? {
        Some(v) => Ok(v
            .parse::<PayoutPriority>()
            .context("Invalid payout_priority setting")?),
        None => Ok(PayoutPriority::default()),
    }
}

pub fn set_payout_priority(conn: &Connection, priority: PayoutPriority) -> Result<()> {
    set_setting(conn, "payout_priority", priority.as_str())
}
