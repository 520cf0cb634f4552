// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::pretty_table;
use anyhow::{Result, anyhow};
use rusqlite::{Connection, params};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap().trim();
            if name.is_empty() {
                return Err(anyhow!("Category name cannot be empty"));
            }
            conn.execute("INSERT INTO categories(name) VALUES (?1)", params![name])?;
            println!("Added category '{}'", name);
        }
        Some(("list", _)) => {
            let mut stmt = conn.prepare(
                "SELECT c.name, COUNT(t.id) FROM categories c
                 LEFT JOIN transactions t ON t.category_id=c.id
                 GROUP BY c.id ORDER BY c.name",
            )?;
            let rows = stmt.query_map([], |r| {
                Ok((r.get::<_, String>(0)?, r.get::<_, i64>(1)?))
            })?;
            let mut data = Vec::new();
            for row in rows {
                let (name, n) = row?;
                data.push(vec![name, n.to_string()]);
            }
            println!("{}", pretty_table(&["Category", "Transactions"], data));
        }
        Some(("rm", sub)) => {
            let name = sub.get_one::<String>("name").unwrap().trim();
            let n = conn.execute("DELETE FROM categories WHERE name=?1", params![name])?;
            if n == 0 {
                return Err(anyhow!("Category '{}' not found", name));
            }
            println!("Removed category '{}'", name);
        }
        _ => {}
    }
    Ok(())
}
