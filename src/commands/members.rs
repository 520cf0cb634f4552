// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Member, PayoutPriority};
use crate::utils::{
    get_payout_priority, member_name, pretty_table, resolve_member, set_member_name,
    set_payout_priority,
};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("names", sub)) => {
            for member in Member::ALL {
                if let Some(name) = sub.get_one::<String>(member.as_str()) {
                    set_member_name(conn, member, name)?;
                    println!("Member {} is now '{}'", member, name.trim());
                }
            }
        }
        Some(("list", _)) => {
            let priority = get_payout_priority(conn)?;
            let first = priority.order()[0];
            let mut data = Vec::new();
            for member in Member::ALL {
                data.push(vec![
                    member.to_string(),
                    member_name(conn, member)?,
                    if member == first { "yes".into() } else { String::new() },
                ]);
            }
            println!("{}", pretty_table(&["Id", "Name", "Paid first"], data));
        }
        Some(("priority", sub)) => {
            let member = resolve_member(conn, sub.get_one::<String>("member").unwrap())?;
            set_payout_priority(conn, PayoutPriority::first(member))?;
            println!(
                "{} is now paid first from savings",
                member_name(conn, member)?
            );
        }
        _ => {}
    }
    Ok(())
}
