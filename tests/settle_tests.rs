// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::Connection;
use rust_decimal::Decimal;
use twosplit::commands::{members, savings, settle, summary};
use twosplit::models::{Member, MovementKind};
use twosplit::store::LedgerStore;
use twosplit::{cli, db};

fn d(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    // A paid 500 and B paid 300 privately, so both are owed.
    conn.execute_batch(
        r#"
        INSERT INTO transactions(date, amount, payer, is_shared, split_method)
            VALUES ('2025-04-01', '500', 'a', 0, 'equal');
        INSERT INTO transactions(date, amount, payer, is_shared, split_method)
            VALUES ('2025-04-02', '300', 'b', 0, 'equal');
        "#,
    )
    .unwrap();
    conn
}

fn dispatch(conn: &Connection, args: &[&str]) {
    let mut argv = vec!["twosplit"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    match matches.subcommand() {
        Some(("savings", sub)) => savings::handle(conn, sub).unwrap(),
        Some(("settle", sub)) => settle::handle(conn, sub).unwrap(),
        Some(("member", sub)) => members::handle(conn, sub).unwrap(),
        Some(("summary", sub)) => summary::handle(conn, sub).unwrap(),
        other => panic!("unexpected command {:?}", other.map(|(n, _)| n)),
    }
}

#[test]
fn savings_commands_move_the_balance() {
    let conn = setup();
    dispatch(&conn, &["savings", "deposit", "--date", "2025-04-03", "--amount", "400"]);
    dispatch(
        &conn,
        &[
            "savings", "payout", "--date", "2025-04-04", "--amount", "25.5", "--member", "b",
            "--note", " taxi ",
        ],
    );

    let s = summary::load_summary(&conn).unwrap();
    assert_eq!(s.savings_balance, d("374.50"));

    let rows = savings::query_rows(&conn, None).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].kind, MovementKind::Payout);
    assert_eq!(rows[0].member, "Member B");
    assert_eq!(rows[0].note, "taxi");
    assert_eq!(rows[1].member, "");
}

#[test]
fn settle_without_commit_records_nothing() {
    let conn = setup();
    dispatch(&conn, &["savings", "deposit", "--amount", "400"]);
    dispatch(&conn, &["settle"]);
    assert_eq!(conn.fetch_savings_movements().unwrap().len(), 1);
}

#[test]
fn settle_commit_appends_payouts_and_reloads() {
    let conn = setup();
    dispatch(&conn, &["savings", "deposit", "--amount", "1000"]);

    let before = summary::load_summary(&conn).unwrap();
    assert_eq!(before.suggested_for(Member::A), d("500"));
    assert_eq!(before.suggested_for(Member::B), d("300"));

    dispatch(&conn, &["settle", "--commit", "--date", "2025-04-30"]);

    let movements = conn.fetch_savings_movements().unwrap();
    let payouts: Vec<_> = movements
        .iter()
        .filter(|m| m.kind == MovementKind::Payout)
        .collect();
    assert_eq!(payouts.len(), 2);
    assert!(payouts.iter().all(|p| p.note.as_deref() == Some("settlement")));

    let after = summary::load_summary(&conn).unwrap();
    assert_eq!(after.savings_balance, d("200"));
    // payouts drain the pool; nets come from expenses only
    assert_eq!(after.net, before.net);
    assert_eq!(after.suggested_for(Member::A), d("200"));
    assert_eq!(after.suggested_for(Member::B), Decimal::ZERO);
}

#[test]
fn priority_setting_changes_who_is_paid_first() {
    let conn = setup();
    dispatch(&conn, &["member", "names", "--a", "Lukas", "--b", "Annie"]);
    dispatch(&conn, &["savings", "deposit", "--amount", "400"]);

    let s = summary::load_summary(&conn).unwrap();
    assert_eq!(s.suggested_for(Member::A), d("400"));
    assert_eq!(s.suggested_for(Member::B), Decimal::ZERO);

    dispatch(&conn, &["member", "priority", "annie"]);
    let s = summary::load_summary(&conn).unwrap();
    assert_eq!(s.suggested[0].member, Member::B);
    assert_eq!(s.suggested_for(Member::B), d("300"));
    assert_eq!(s.suggested_for(Member::A), d("100"));
}

#[test]
fn summary_json_runs_on_empty_database() {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    dispatch(&conn, &["summary", "--json"]);
    let s = summary::load_summary(&conn).unwrap();
    assert!(s.suggested.is_empty());
    assert_eq!(s.savings_balance, Decimal::ZERO);
}
