// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::ParseError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the two people sharing the household.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Member {
    A,
    B,
}

impl Member {
    pub const ALL: [Member; 2] = [Member::A, Member::B];

    pub fn as_str(self) -> &'static str {
        match self {
            Member::A => "a",
            Member::B => "b",
        }
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Member {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "a" => Ok(Member::A),
            "b" => Ok(Member::B),
            other => Err(ParseError::Member(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitMethod {
    Equal,
    Percent,
    Fixed,
}

impl SplitMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            SplitMethod::Equal => "equal",
            SplitMethod::Percent => "percent",
            SplitMethod::Fixed => "fixed",
        }
    }
}

impl FromStr for SplitMethod {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "equal" => Ok(SplitMethod::Equal),
            "percent" => Ok(SplitMethod::Percent),
            "fixed" => Ok(SplitMethod::Fixed),
            other => Err(ParseError::SplitMethod(other.to_string())),
        }
    }
}

/// How a shared transaction is divided, with the parameters each method needs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "lowercase")]
pub enum Split {
    #[default]
    Equal,
    /// `percent_for_payer` is the payer's own share of the total, 0..=1.
    Percent { percent_for_payer: Option<Decimal> },
    /// `who` owes exactly `amount`; the other member owes the rest.
    Fixed {
        who: Option<Member>,
        amount: Option<Decimal>,
    },
}

impl Split {
    pub fn method(&self) -> SplitMethod {
        match self {
            Split::Equal => SplitMethod::Equal,
            Split::Percent { .. } => SplitMethod::Percent,
            Split::Fixed { .. } => SplitMethod::Fixed,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub date: NaiveDate,
    pub category: Option<String>,
    pub description: Option<String>,
    pub amount: Decimal,
    pub payer: Member,
    pub is_shared: bool,
    pub split: Split,
}

/// Input for recording a new expense.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub category_id: Option<i64>,
    pub description: Option<String>,
    pub amount: Decimal,
    pub payer: Member,
    pub is_shared: bool,
    pub split: Split,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    Deposit,
    Payout,
}

impl MovementKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MovementKind::Deposit => "deposit",
            MovementKind::Payout => "payout",
        }
    }
}

impl FromStr for MovementKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "deposit" => Ok(MovementKind::Deposit),
            "payout" => Ok(MovementKind::Payout),
            other => Err(ParseError::MovementKind(other.to_string())),
        }
    }
}

/// A deposit into, or payout from, the joint savings account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsMovement {
    pub id: i64,
    pub date: NaiveDate,
    pub kind: MovementKind,
    /// Depositor or payout recipient; not always recorded for deposits.
    pub member: Option<Member>,
    pub amount: Decimal,
    pub note: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewSavingsMovement {
    pub date: NaiveDate,
    pub kind: MovementKind,
    pub member: Option<Member>,
    pub amount: Decimal,
    pub note: Option<String>,
}

/// A per-member pair of amounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shares {
    pub a: Decimal,
    pub b: Decimal,
}

impl Shares {
    pub fn new(a: Decimal, b: Decimal) -> Self {
        Shares { a, b }
    }

    /// Build from (payer's part, other's part).
    pub fn for_payer(payer: Member, payer_part: Decimal, other_part: Decimal) -> Self {
        match payer {
            Member::A => Shares::new(payer_part, other_part),
            Member::B => Shares::new(other_part, payer_part),
        }
    }

    pub fn get(&self, member: Member) -> Decimal {
        match member {
            Member::A => self.a,
            Member::B => self.b,
        }
    }

    pub fn get_mut(&mut self, member: Member) -> &mut Decimal {
        match member {
            Member::A => &mut self.a,
            Member::B => &mut self.b,
        }
    }

    pub fn total(&self) -> Decimal {
        self.a.saturating_add(self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payout {
    pub member: Member,
    pub amount: Decimal,
}

/// Which member is paid first when savings cannot cover both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PayoutPriority {
    #[default]
    AFirst,
    BFirst,
}

impl PayoutPriority {
    pub fn first(member: Member) -> Self {
        match member {
            Member::A => PayoutPriority::AFirst,
            Member::B => PayoutPriority::BFirst,
        }
    }

    pub fn order(self) -> [Member; 2] {
        match self {
            PayoutPriority::AFirst => [Member::A, Member::B],
            PayoutPriority::BFirst => [Member::B, Member::A],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PayoutPriority::AFirst => "a",
            PayoutPriority::BFirst => "b",
        }
    }
}

impl FromStr for PayoutPriority {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Member>()
            .map(PayoutPriority::first)
            .map_err(|_| ParseError::Priority(s.trim().to_string()))
    }
}

/// Everything derived from the stored rows; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSummary {
    pub paid: Shares,
    pub share: Shares,
    pub net: Shares,
    pub savings_balance: Decimal,
    /// In priority order, only non-zero amounts.
    pub suggested: Vec<Payout>,
}

impl LedgerSummary {
    pub fn suggested_for(&self, member: Member) -> Decimal {
        self.suggested
            .iter()
            .find(|p| p.member == member)
            .map(|p| p.amount)
            .unwrap_or(Decimal::ZERO)
    }
}
