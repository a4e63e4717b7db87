//! End-to-end shell tests over an in-memory store and a scripted
//! console.

use carpool_core::{Booking, Email, Location, Member, Price, Ride, RideRequest};
use carpool_shell::registry::{self, Registry, LOGIN_REQUIRED};
use carpool_shell::{ScriptedConsole, Shell};
use carpool_store::Store;
use chrono::NaiveDate;

fn email(addr: &str) -> Email {
    Email::new(addr).unwrap()
}

/// Fresh store with two members and two locations.
fn seeded_store() -> Store {
    let store = Store::open_in_memory().unwrap();
    store.init_schema().unwrap();
    for (addr, pwd) in [("a@x.com", "pw1"), ("b@x.com", "pw2")] {
        store
            .insert_member(&Member {
                email: email(addr),
                pwd: pwd.to_string(),
            })
            .unwrap();
    }
    for (lcode, city) in [("LC1", "Edmonton"), ("LC2", "Calgary")] {
        store
            .insert_location(&Location {
                lcode: lcode.to_string(),
                city: city.to_string(),
                prov: "AB".to_string(),
                address: "1 First St".to_string(),
            })
            .unwrap();
    }
    store
}

fn shell_with(inputs: &[&str]) -> (Shell<ScriptedConsole>, Registry<ScriptedConsole>) {
    let console = ScriptedConsole::new(inputs.iter().copied());
    let shell = Shell::new(seeded_store(), console, "carpool> ");
    (shell, registry::standard())
}

fn request(rid: i64, owner: &str, pickup: &str) -> RideRequest {
    RideRequest {
        rid,
        email: email(owner),
        date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        pickup: pickup.to_string(),
        dropoff: "LC2".to_string(),
        price: Price::new(10).unwrap(),
    }
}

fn login_as(shell: &mut Shell<ScriptedConsole>, addr: &str, pwd: &str) {
    assert!(shell.login(addr, pwd).unwrap());
}

#[test]
fn idempotent_login_keeps_the_first_identity() {
    let (mut shell, _registry) = shell_with(&[]);
    login_as(&mut shell, "a@x.com", "pw1");

    // A second login (even with valid foreign credentials) changes nothing.
    assert!(shell.login("b@x.com", "pw2").unwrap());
    assert_eq!(shell.session_email().unwrap().as_str(), "a@x.com");
    assert!(shell.console().printed("already logged in as user: a@x.com"));
}

#[test]
fn login_is_case_insensitive_on_email_and_exact_on_password() {
    let (mut shell, _registry) = shell_with(&[]);
    assert!(!shell.login("a@x.com", "PW1").unwrap());
    assert!(shell.session().is_none());
    assert!(shell.console().printed("invalid login"));

    assert!(shell.login("A@X.COM", "pw1").unwrap());
    assert_eq!(shell.session_email().unwrap().as_str(), "a@x.com");
}

#[test]
fn gated_commands_refuse_and_mutate_nothing_while_anonymous() {
    let (mut shell, registry) = shell_with(&[]);

    for line in [
        "logout",
        "show_inbox",
        "list_bookings",
        "cancel_booking 1",
        "post_ride_request 2024-01-01 LC1 LC2 10",
        "list_ride_requests",
        "search_ride_requests_by_location_code LC1",
        "search_ride_requests_by_city_name Edmonton",
        "delete_ride_request 1",
        "offer_ride",
        "search_rides",
        "book_member",
    ] {
        registry.dispatch(&mut shell, line).unwrap();
    }

    assert!(shell.session().is_none());
    assert!(shell.console().printed(LOGIN_REQUIRED));
    // The request table never saw the post.
    assert_eq!(shell.store().next_rid().unwrap(), 1);
}

#[test]
fn posted_request_ids_are_monotonic_from_one() {
    let (mut shell, registry) = shell_with(&[]);
    login_as(&mut shell, "a@x.com", "pw1");

    for _ in 0..3 {
        registry
            .dispatch(&mut shell, "post_ride_request 2024-01-01 LC1 LC2 10")
            .unwrap();
    }

    let rids: Vec<i64> = shell
        .store()
        .list_requests_for_member(&email("a@x.com"))
        .unwrap()
        .iter()
        .map(|r| r.rid)
        .collect();
    assert_eq!(rids, [1, 2, 3]);
    assert!(shell.console().printed("posted ride request 3"));
}

#[test]
fn negative_price_never_reaches_the_insert() {
    let (mut shell, registry) = shell_with(&[]);
    login_as(&mut shell, "a@x.com", "pw1");

    registry
        .dispatch(&mut shell, "post_ride_request 2024-01-01 LC1 LC2 -1")
        .unwrap();
    assert!(shell.console().printed("non negative"));
    assert_eq!(shell.store().next_rid().unwrap(), 1);

    registry
        .dispatch(&mut shell, "post_ride_request 2024-01-01 LC1 LC2 0")
        .unwrap();
    assert_eq!(shell.store().next_rid().unwrap(), 2);
}

#[test]
fn unknown_location_code_aborts_the_post() {
    let (mut shell, registry) = shell_with(&[]);
    login_as(&mut shell, "a@x.com", "pw1");

    registry
        .dispatch(&mut shell, "post_ride_request 2024-01-01 NOPE LC2 10")
        .unwrap();
    assert!(shell.console().printed("unknown location code: NOPE"));

    registry
        .dispatch(&mut shell, "post_ride_request 2024-01-01 LC1 NOPE 10")
        .unwrap();
    assert!(shell.console().printed("unknown location code: NOPE"));

    assert_eq!(shell.store().next_rid().unwrap(), 1);
}

#[test]
fn deleting_a_foreign_request_leaves_the_store_unchanged() {
    let (mut shell, registry) = shell_with(&[]);
    shell.store().insert_request(&request(1, "a@x.com", "LC1")).unwrap();
    login_as(&mut shell, "b@x.com", "pw2");

    registry.dispatch(&mut shell, "delete_ride_request 1").unwrap();

    assert!(shell.store().find_request(1).unwrap().is_some());
    assert!(shell
        .console()
        .printed("no ride request 1 posted by you"));
}

#[test]
fn pagination_prints_five_rows_without_prompting() {
    // No scripted input at all: a prompt would surface as rows missing.
    let (mut shell, registry) = shell_with(&[]);
    for rid in 1..=5 {
        shell.store().insert_request(&request(rid, "a@x.com", "LC1")).unwrap();
    }
    login_as(&mut shell, "a@x.com", "pw1");

    registry
        .dispatch(&mut shell, "search_ride_requests_by_location_code LC1")
        .unwrap();
    let rows = shell
        .console()
        .output()
        .iter()
        .filter(|line| line.contains("LC1"))
        .count();
    assert_eq!(rows, 5);
}

#[test]
fn pagination_offers_the_remainder_past_five_rows() {
    let (mut shell, registry) = shell_with(&["all"]);
    for rid in 1..=6 {
        shell.store().insert_request(&request(rid, "a@x.com", "LC1")).unwrap();
    }
    login_as(&mut shell, "a@x.com", "pw1");

    registry
        .dispatch(&mut shell, "search_ride_requests_by_location_code LC1")
        .unwrap();
    let rows = shell
        .console()
        .output()
        .iter()
        .filter(|line| line.contains("LC1"))
        .count();
    assert_eq!(rows, 6);
}

#[test]
fn pagination_stops_on_any_other_reply() {
    let (mut shell, registry) = shell_with(&["no thanks"]);
    for rid in 1..=6 {
        shell.store().insert_request(&request(rid, "a@x.com", "LC1")).unwrap();
    }
    login_as(&mut shell, "a@x.com", "pw1");

    registry
        .dispatch(&mut shell, "search_ride_requests_by_location_code LC1")
        .unwrap();
    let rows = shell
        .console()
        .output()
        .iter()
        .filter(|line| line.contains("LC1"))
        .count();
    assert_eq!(rows, 5);
}

#[test]
fn search_by_city_name_matches_via_the_location_table() {
    let (mut shell, registry) = shell_with(&[]);
    shell.store().insert_request(&request(1, "a@x.com", "LC1")).unwrap();
    shell.store().insert_request(&request(2, "a@x.com", "LC2")).unwrap();
    login_as(&mut shell, "a@x.com", "pw1");

    registry
        .dispatch(&mut shell, "search_ride_requests_by_city_name edmonton")
        .unwrap();
    let rows: Vec<_> = shell
        .console()
        .output()
        .iter()
        .filter(|line| line.starts_with('('))
        .collect();
    assert_eq!(rows.len(), 1);
    assert!(rows[0].contains("LC1"));
}

#[test]
fn cancel_booking_miss_renders_own_bookings_and_sends_nothing() {
    let (mut shell, registry) = shell_with(&[]);
    login_as(&mut shell, "a@x.com", "pw1");

    registry.dispatch(&mut shell, "cancel_booking 99").unwrap();

    assert!(shell.console().printed("no booking 99 found on your rides"));
    assert!(shell
        .store()
        .list_messages_for(&email("b@x.com"))
        .unwrap()
        .is_empty());
}

#[test]
fn cancel_booking_deletes_and_notifies_the_booked_member() {
    let (mut shell, registry) = shell_with(&[]);
    shell
        .store()
        .insert_ride(&Ride {
            rno: 10,
            price: Price::new(15).unwrap(),
            rdate: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            seats: 4,
            src: "LC1".to_string(),
            dst: "LC2".to_string(),
            driver: email("a@x.com"),
        })
        .unwrap();
    shell
        .store()
        .insert_booking(&Booking {
            bno: 1,
            email: email("b@x.com"),
            rno: 10,
            cost: 15,
            seats: 1,
            pickup: "LC1".to_string(),
            dropoff: "LC2".to_string(),
        })
        .unwrap();
    login_as(&mut shell, "a@x.com", "pw1");

    registry.dispatch(&mut shell, "cancel_booking 1").unwrap();

    assert!(shell
        .store()
        .find_booking_for_driver(1, &email("a@x.com"))
        .unwrap()
        .is_none());
    let inbox = shell.store().list_messages_for(&email("b@x.com")).unwrap();
    assert_eq!(inbox.len(), 1);
    assert!(!inbox[0].seen);
    assert_eq!(inbox[0].sender.as_str(), "a@x.com");
    assert_eq!(inbox[0].rno, 10);
}

#[test]
fn show_inbox_renders_then_marks_seen_in_bulk() {
    let (mut shell, registry) = shell_with(&[]);
    shell
        .store()
        .send_message(&carpool_core::InboxMessage::new(
            email("a@x.com"),
            email("b@x.com"),
            "see you at LC1".to_string(),
            1,
        ))
        .unwrap();
    login_as(&mut shell, "a@x.com", "pw1");

    registry.dispatch(&mut shell, "show_inbox").unwrap();

    assert!(shell.console().printed("see you at LC1"));
    let inbox = shell.store().list_messages_for(&email("a@x.com")).unwrap();
    assert!(inbox.iter().all(|m| m.seen));
}

#[test]
fn select_ride_request_is_ungated_for_viewing() {
    let (mut shell, registry) = shell_with(&["n"]);
    shell.store().insert_request(&request(1, "a@x.com", "LC1")).unwrap();

    // No login at all.
    registry.dispatch(&mut shell, "select_ride_request 1").unwrap();

    assert!(shell.console().printed("LC1"));
    assert!(shell
        .store()
        .list_messages_for(&email("a@x.com"))
        .unwrap()
        .is_empty());
}

#[test]
fn select_ride_request_reprompts_until_yes_then_messages_the_poster() {
    let (mut shell, registry) = shell_with(&["maybe", "y", "is this seat still free?"]);
    shell.store().insert_request(&request(1, "a@x.com", "LC1")).unwrap();
    login_as(&mut shell, "b@x.com", "pw2");

    registry.dispatch(&mut shell, "select_ride_request 1").unwrap();

    let inbox = shell.store().list_messages_for(&email("a@x.com")).unwrap();
    assert_eq!(inbox.len(), 1);
    assert_eq!(inbox[0].content, "is this seat still free?");
    assert_eq!(inbox[0].sender.as_str(), "b@x.com");
    assert_eq!(inbox[0].rno, 1);
    assert!(shell.console().printed("message sent to a@x.com"));
}

#[test]
fn select_ride_request_reports_a_missing_id() {
    let (mut shell, registry) = shell_with(&[]);
    registry.dispatch(&mut shell, "select_ride_request 42").unwrap();
    assert!(shell.console().printed("no ride request 42"));
}

#[test]
fn malformed_arguments_print_usage_and_abort() {
    let (mut shell, registry) = shell_with(&[]);
    login_as(&mut shell, "a@x.com", "pw1");

    registry.dispatch(&mut shell, "cancel_booking twelve").unwrap();
    assert!(shell.console().printed("usage: cancel_booking <bno>"));

    registry
        .dispatch(&mut shell, "post_ride_request 2024-01-01 LC1")
        .unwrap();
    assert!(shell.console().printed("usage: post_ride_request"));
    assert_eq!(shell.store().next_rid().unwrap(), 1);
}

#[test]
fn unknown_verbs_are_reported_without_crashing() {
    let (mut shell, registry) = shell_with(&[]);
    registry.dispatch(&mut shell, "frobnicate 1 2 3").unwrap();
    assert!(shell.console().printed("unknown command: frobnicate"));
}

#[test]
fn help_lists_commands_and_prints_usage() {
    let (mut shell, registry) = shell_with(&[]);
    registry.dispatch(&mut shell, "help").unwrap();
    assert!(shell.console().printed("post_ride_request"));

    registry.dispatch(&mut shell, "help post_ride_request").unwrap();
    assert!(shell.console().printed("usage: post_ride_request <date>"));
}

#[test]
fn full_session_post_list_delete() {
    let inputs = [
        "a@x.com",
        "pw1",
        "post_ride_request 2024-01-01 LC1 LC2 10",
        "list_ride_requests",
        "delete_ride_request 1",
        "list_ride_requests",
        "exit",
    ];
    let (mut shell, registry) = shell_with(&inputs);

    shell.run(&registry).unwrap();

    let console = shell.console();
    assert!(console.printed("logged in user: a@x.com"));
    assert!(console.printed("posted ride request 1"));
    assert!(console.printed("(1, a@x.com, 2024-01-01, LC1, LC2, 10)"));
    assert!(console.printed("deleted ride request 1"));
    assert!(console.printed("logged out user: a@x.com"));
    assert!(shell.store().find_request(1).unwrap().is_none());
}

#[test]
fn startup_login_retries_until_success() {
    let inputs = ["a@x.com", "wrong", "a@x.com", "pw1", "exit"];
    let (mut shell, registry) = shell_with(&inputs);

    shell.run(&registry).unwrap();

    let console = shell.console();
    assert!(console.printed("invalid login"));
    assert!(console.printed("logged in user: a@x.com"));
}

#[test]
fn end_of_input_during_login_exits_cleanly() {
    let inputs = ["a@x.com", "wrong"];
    let (mut shell, registry) = shell_with(&inputs);

    shell.run(&registry).unwrap();

    assert!(shell.session().is_none());
    assert!(shell.console().printed("invalid login"));
}

#[test]
fn inbox_is_rendered_automatically_after_first_login() {
    let (mut shell, registry) = {
        let inputs = ["a@x.com", "pw1", "exit"];
        shell_with(&inputs)
    };
    shell
        .store()
        .send_message(&carpool_core::InboxMessage::new(
            email("a@x.com"),
            email("b@x.com"),
            "welcome back".to_string(),
            1,
        ))
        .unwrap();

    shell.run(&registry).unwrap();

    assert!(shell.console().printed("welcome back"));
    let inbox = shell.store().list_messages_for(&email("a@x.com")).unwrap();
    assert!(inbox.iter().all(|m| m.seen));
}

#[test]
fn close_releases_the_connection() {
    let (shell, _registry) = shell_with(&[]);
    shell.close().unwrap();
}

#[test]
fn posted_requests_survive_shell_restart_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("carpool.db");

    let store = Store::open(&path).unwrap();
    store.init_schema().unwrap();
    store
        .insert_member(&Member {
            email: email("a@x.com"),
            pwd: "pw1".to_string(),
        })
        .unwrap();
    store
        .insert_location(&Location {
            lcode: "LC1".to_string(),
            city: "Edmonton".to_string(),
            prov: "AB".to_string(),
            address: "1 First St".to_string(),
        })
        .unwrap();
    store
        .insert_location(&Location {
            lcode: "LC2".to_string(),
            city: "Calgary".to_string(),
            prov: "AB".to_string(),
            address: "2 Second St".to_string(),
        })
        .unwrap();

    let inputs = [
        "a@x.com",
        "pw1",
        "post_ride_request 2024-01-01 LC1 LC2 10",
        "exit",
    ];
    let console = ScriptedConsole::new(inputs.iter().copied());
    let mut shell = Shell::new(store, console, "carpool> ");
    shell.run(&registry::standard()).unwrap();
    shell.close().unwrap();

    let reopened = Store::open(&path).unwrap();
    let requests = reopened
        .list_requests_for_member(&email("a@x.com"))
        .unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].rid, 1);
    assert_eq!(requests[0].pickup, "LC1");
}
