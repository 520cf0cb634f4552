// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::Connection;
use twosplit::models::{Member, PayoutPriority};
use twosplit::utils::{
    get_payout_priority, member_name, resolve_member, set_member_name, set_payout_priority,
};
use twosplit::{cli, commands::members, db};

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn
}

#[test]
fn default_names_and_priority() {
    let conn = setup();
    assert_eq!(member_name(&conn, Member::A).unwrap(), "Member A");
    assert_eq!(member_name(&conn, Member::B).unwrap(), "Member B");
    assert_eq!(get_payout_priority(&conn).unwrap(), PayoutPriority::AFirst);
}

#[test]
fn names_resolve_case_insensitively() {
    let conn = setup();
    let matches =
        cli::build_cli().get_matches_from(["twosplit", "member", "names", "--b", " Annie "]);
    if let Some(("member", m)) = matches.subcommand() {
        members::handle(&conn, m).unwrap();
    } else {
        panic!("member command not parsed");
    }
    assert_eq!(member_name(&conn, Member::B).unwrap(), "Annie");
    assert_eq!(resolve_member(&conn, "ANNIE").unwrap(), Member::B);
    assert_eq!(resolve_member(&conn, " a ").unwrap(), Member::A);
    assert!(resolve_member(&conn, "Bob").is_err());
}

#[test]
fn rejects_empty_name() {
    let conn = setup();
    assert!(set_member_name(&conn, Member::A, "   ").is_err());
}

#[test]
fn priority_round_trips_through_settings() {
    let conn = setup();
    set_payout_priority(&conn, PayoutPriority::BFirst).unwrap();
    assert_eq!(get_payout_priority(&conn).unwrap(), PayoutPriority::BFirst);
    assert_eq!(
        get_payout_priority(&conn).unwrap().order(),
        [Member::B, Member::A]
    );
}
