// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::Connection;
use twosplit::{commands::doctor, db};

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn
}

#[test]
fn clean_database_has_no_issues() {
    let conn = setup();
    conn.execute_batch(
        r#"
        INSERT INTO transactions(date, amount, payer, split_method, split_percent_for_payer)
            VALUES ('2025-01-01', '100', 'a', 'percent', '0.6');
        INSERT INTO shared_savings(date, type, member, amount) VALUES ('2025-01-02', 'deposit', NULL, '50');
        "#,
    )
    .unwrap();
    assert!(doctor::find_issues(&conn).unwrap().is_empty());
}

#[test]
fn flags_rows_the_ledger_would_coerce() {
    let conn = setup();
    conn.execute_batch(
        r#"
        INSERT INTO transactions(date, amount, payer) VALUES ('2025-01-01', 'ten', 'a');
        INSERT INTO transactions(date, amount, payer, split_method, split_percent_for_payer)
            VALUES ('2025-01-02', '100', 'b', 'percent', '1.5');
        INSERT INTO transactions(date, amount, payer, split_method, split_fixed_who, split_fixed_amount)
            VALUES ('2025-01-03', '100', 'a', 'fixed', 'b', '150');
        INSERT INTO shared_savings(date, type, member, amount) VALUES ('2025-01-04', 'payout', NULL, '20');
        "#,
    )
    .unwrap();

    let kinds: Vec<String> = doctor::find_issues(&conn)
        .unwrap()
        .into_iter()
        .map(|(k, _)| k)
        .collect();
    assert_eq!(
        kinds,
        vec![
            "tx_amount_not_numeric",
            "percent_out_of_range",
            "fixed_exceeds_amount",
            "payout_without_recipient",
        ]
    );
}

#[test]
fn flags_negative_fixed_and_out_of_range_amounts() {
    let conn = setup();
    conn.execute_batch(
        r#"
        INSERT INTO transactions(date, amount, payer, split_method, split_fixed_who, split_fixed_amount)
            VALUES ('2025-01-01', '100', 'a', 'fixed', 'a', '-50');
        INSERT INTO transactions(date, amount, payer)
            VALUES ('2025-01-02', '79228162514264337593543950335', 'b');
        "#,
    )
    .unwrap();

    let issues = doctor::find_issues(&conn).unwrap();
    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0], ("fixed_negative".to_string(), "#1 -50".to_string()));
    assert_eq!(issues[1].0, "tx_amount_out_of_range");
}
