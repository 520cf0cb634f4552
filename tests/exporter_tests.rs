// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::Connection;
use serde_json::json;
use tempfile::tempdir;
use twosplit::{cli, commands::exporter, db};

fn base_conn() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn.execute("INSERT INTO categories(id,name) VALUES (1,'Groceries')", [])
        .unwrap();
    conn.execute_batch(
        r#"
        INSERT INTO transactions(date, category_id, description, amount, payer, is_shared, split_method, split_fixed_who, split_fixed_amount)
            VALUES ('2025-01-03', NULL, NULL, '1000', 'a', 1, 'fixed', 'b', '250');
        INSERT INTO transactions(date, category_id, description, amount, payer, is_shared, split_method)
            VALUES ('2025-01-02', 1, 'Weekly run', '12.34', 'b', 1, 'equal');
        "#,
    )
    .unwrap();
    conn
}

fn export(conn: &Connection, format: &str, out: &str) {
    let matches = cli::build_cli().get_matches_from([
        "twosplit",
        "export",
        "transactions",
        "--format",
        format,
        "--out",
        out,
    ]);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(conn, export_m).unwrap();
    } else {
        panic!("no export subcommand");
    }
}

#[test]
fn export_transactions_json_is_chronological() {
    let conn = base_conn();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.json");
    export(&conn, "json", &out_path.to_string_lossy());

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(
        parsed[0],
        json!({
            "date": "2025-01-02",
            "payer": "b",
            "category": "Groceries",
            "description": "Weekly run",
            "amount": "12.34",
            "shared": true,
            "split": {"method": "equal"}
        })
    );
    assert_eq!(parsed[1]["split"]["method"], "fixed");
    assert_eq!(parsed[1]["split"]["who"], "b");
}

#[test]
fn export_transactions_csv_has_split_columns() {
    let conn = base_conn();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.csv");
    export(&conn, "csv", &out_path.to_string_lossy());

    let mut rdr = csv::Reader::from_path(&out_path).unwrap();
    let headers = rdr.headers().unwrap().clone();
    assert_eq!(&headers[6], "split_method");
    let records: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), 2);
    assert_eq!(&records[1][0], "2025-01-03");
    assert_eq!(&records[1][6], "fixed");
    assert_eq!(&records[1][8], "b");
    assert_eq!(&records[1][9], "250");
    assert_eq!(&records[0][2], "Groceries");
}
