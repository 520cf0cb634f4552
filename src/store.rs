// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Persistence for transactions and savings movements.
//!
//! The ledger computations only ever see what these reads return; every
//! write is followed by a fresh read and a fresh aggregate.

use crate::models::{
    Member, MovementKind, NewSavingsMovement, NewTransaction, SavingsMovement, Split,
    SplitMethod, Transaction,
};
use crate::money::{coerce_amount, coerce_optional};
use crate::utils::parse_date;
use anyhow::{Context, Result};
use log::debug;
use rusqlite::types::ValueRef;
use rusqlite::{Connection, Row, params};

pub trait LedgerStore {
    /// All transactions, newest first.
    fn fetch_transactions(&self) -> Result<Vec<Transaction>>;
    /// All savings movements, newest first.
    fn fetch_savings_movements(&self) -> Result<Vec<SavingsMovement>>;
    fn append_savings_movement(&self, movement: &NewSavingsMovement) -> Result<i64>;
    fn append_transaction(&self, tx: &NewTransaction) -> Result<i64>;
}

pub(crate) const TX_SELECT: &str = "SELECT t.id, t.date, c.name, t.description, t.amount, t.payer, t.is_shared,
        t.split_method, t.split_percent_for_payer, t.split_fixed_who, t.split_fixed_amount
     FROM transactions t LEFT JOIN categories c ON t.category_id=c.id";

const SAVINGS_SELECT: &str = "SELECT id, date, type, member, amount, note FROM shared_savings";

impl LedgerStore for Connection {
    fn fetch_transactions(&self) -> Result<Vec<Transaction>> {
        let sql = format!("{} ORDER BY t.date DESC, t.id DESC", TX_SELECT);
        let mut stmt = self.prepare(&sql)?;
        let mut rows = stmt.query([])?;
        let mut out = Vec::new();
        while let Some(r) = rows.next()? {
            out.push(transaction_from_row(r)?);
        }
        Ok(out)
    }

    fn fetch_savings_movements(&self) -> Result<Vec<SavingsMovement>> {
        recent_savings_movements(self, None)
    }

    fn append_savings_movement(&self, m: &NewSavingsMovement) -> Result<i64> {
        self.execute(
            "INSERT INTO shared_savings(date, type, member, amount, note) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                m.date.to_string(),
                m.kind.as_str(),
                m.member.map(Member::as_str),
                m.amount.to_string(),
                m.note
            ],
        )
        .context("Failed to record savings movement")?;
        let id = self.last_insert_rowid();
        debug!("appended {} #{} of {}", m.kind.as_str(), id, m.amount);
        Ok(id)
    }

    fn append_transaction(&self, tx: &NewTransaction) -> Result<i64> {
        let (percent, fixed_who, fixed_amount) = match &tx.split {
            Split::Equal => (None, None, None),
            Split::Percent { percent_for_payer } => {
                (percent_for_payer.map(|p| p.to_string()), None, None)
            }
            Split::Fixed { who, amount } => {
                (None, who.map(Member::as_str), amount.map(|a| a.to_string()))
            }
        };
        self.execute(
            "INSERT INTO transactions(date, category_id, description, amount, payer, is_shared,
                split_method, split_percent_for_payer, split_fixed_who, split_fixed_amount)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                tx.date.to_string(),
                tx.category_id,
                tx.description,
                tx.amount.to_string(),
                tx.payer.as_str(),
                tx.is_shared,
                tx.split.method().as_str(),
                percent,
                fixed_who,
                fixed_amount
            ],
        )
        .context("Failed to record transaction")?;
        let id = self.last_insert_rowid();
        debug!("appended transaction #{} of {}", id, tx.amount);
        Ok(id)
    }
}

/// Savings movements newest first, optionally capped at `limit` rows.
pub fn recent_savings_movements(
    conn: &Connection,
    limit: Option<usize>,
) -> Result<Vec<SavingsMovement>> {
    let mut sql = format!("{} ORDER BY date DESC, id DESC", SAVINGS_SELECT);
    if let Some(n) = limit {
        sql.push_str(&format!(" LIMIT {}", n));
    }
    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt.query([])?;
    let mut out = Vec::new();
    while let Some(r) = rows.next()? {
        out.push(movement_from_row(r)?);
    }
    Ok(out)
}

pub(crate) fn transaction_from_row(r: &Row<'_>) -> Result<Transaction> {
    let id: i64 = r.get(0)?;
    let date_s: String = r.get(1)?;
    let amount = text_at(r, 4)?;
    let payer: String = r.get(5)?;
    let method: String = r.get(7)?;
    let percent = text_at(r, 8)?;
    let fixed_who: Option<String> = r.get(9)?;
    let fixed_amount = text_at(r, 10)?;

    let split = match method
        .parse::<SplitMethod>()
        .with_context(|| format!("Transaction #{}", id))?
    {
        SplitMethod::Equal => Split::Equal,
        SplitMethod::Percent => Split::Percent {
            percent_for_payer: coerce_optional(percent.as_deref()),
        },
        SplitMethod::Fixed => Split::Fixed {
            who: fixed_who
                .as_deref()
                .map(str::parse::<Member>)
                .transpose()
                .with_context(|| format!("Transaction #{}", id))?,
            amount: coerce_optional(fixed_amount.as_deref()),
        },
    };

    Ok(Transaction {
        id,
        date: parse_date(&date_s).with_context(|| format!("Transaction #{}", id))?,
        category: r.get(2)?,
        description: r.get(3)?,
        amount: coerce_amount(amount.as_deref()),
        payer: payer
            .parse::<Member>()
            .with_context(|| format!("Transaction #{}", id))?,
        is_shared: r.get(6)?,
        split,
    })
}

fn movement_from_row(r: &Row<'_>) -> Result<SavingsMovement> {
    let id: i64 = r.get(0)?;
    let date_s: String = r.get(1)?;
    let kind: String = r.get(2)?;
    let member: Option<String> = r.get(3)?;
    let amount = text_at(r, 4)?;
    Ok(SavingsMovement {
        id,
        date: parse_date(&date_s).with_context(|| format!("Savings row #{}", id))?,
        kind: kind
            .parse::<MovementKind>()
            .with_context(|| format!("Savings row #{}", id))?,
        member: member
            .as_deref()
            .map(str::parse::<Member>)
            .transpose()
            .with_context(|| format!("Savings row #{}", id))?,
        amount: coerce_amount(amount.as_deref()),
        note: r.get(5)?,
    })
}

/// Money columns are TEXT, but rows written by other tools may hold numbers.
pub(crate) fn text_at(r: &Row<'_>, idx: usize) -> Result<Option<String>> {
    Ok(match r.get_ref(idx)? {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Text(t) | ValueRef::Blob(t) => Some(String::from_utf8_lossy(t).into_owned()),
    })
}
