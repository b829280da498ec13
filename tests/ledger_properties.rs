use chrono::NaiveDate;

use expensify::config::Settings;
use expensify::export::{read_csv, to_csv};
use expensify::models::{ExpenseRecord, Money, StandardCategory};
use expensify::reports::{by_category, by_month, total};
use expensify::services::{AuthService, Ledger, LedgerPolicy};
use expensify::storage::MemoryCredentialStore;
use expensify::ExpenseError;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_ledger() -> Ledger {
    let mut ledger = Ledger::new(LedgerPolicy::default());
    let entries = [
        ("Coffee", 450, "Food", date(2024, 1, 15)),
        ("Train", 12_000, "Travel", date(2024, 4, 2)),
        ("Iced coffee", 300, "Food", date(2024, 2, 10)),
        ("Pharmacy", 899, "Health", date(2024, 2, 10)),
    ];
    for (note, cents, category, day) in entries {
        ledger
            .add(note, Money::from_cents(cents), category, day, "09:00:00 AM")
            .unwrap();
    }
    ledger
}

#[test]
fn all_preserves_insertion_order() {
    let ledger = sample_ledger();
    let notes: Vec<_> = ledger.all().iter().map(|r| r.note.as_str()).collect();
    assert_eq!(notes, vec!["Coffee", "Train", "Iced coffee", "Pharmacy"]);
}

#[test]
fn empty_search_returns_everything() {
    let ledger = sample_ledger();
    assert_eq!(ledger.search(""), ledger.all().to_vec());
}

#[test]
fn search_is_case_insensitive_and_ordered() {
    let ledger = sample_ledger();

    let hits: Vec<_> = ledger
        .search("COFFEE")
        .into_iter()
        .map(|r| r.note)
        .collect();
    assert_eq!(hits, vec!["Coffee", "Iced coffee"]);

    assert!(ledger.search("rent").is_empty());
}

#[test]
fn category_totals_sum_to_grand_total() {
    let ledger = sample_ledger();
    let records = ledger.all();

    let summed: Money = by_category(records).iter().map(|c| c.total).sum();
    assert_eq!(summed, total(records));
    assert_eq!(total(records).cents(), 13_649);
}

#[test]
fn months_are_ordered_chronologically() {
    let ledger = sample_ledger();
    let labels: Vec<_> = by_month(ledger.all()).iter().map(|m| m.label()).collect();
    assert_eq!(labels, vec!["January 2024", "February 2024", "April 2024"]);
}

#[test]
fn csv_round_trip_is_exact() {
    let record = ExpenseRecord::new(
        "Coffee",
        Money::from_cents(450),
        StandardCategory::Food.into(),
        date(2024, 3, 1),
        "09:00:00",
    );

    let bytes = to_csv(std::slice::from_ref(&record)).unwrap();
    let parsed = read_csv(bytes.as_slice()).unwrap();

    assert_eq!(parsed, vec![record]);
    assert_eq!(parsed[0].amount.cents(), 450);
}

#[test]
fn authentication_gate() {
    let store = MemoryCredentialStore::new();
    let auth = AuthService::new(&store, &Settings::default());

    assert!(matches!(
        auth.authenticate("a@x.com", "pw"),
        Err(ExpenseError::NotFound { .. })
    ));

    auth.register("a@x.com", "pw").unwrap();
    let session = auth.authenticate("a@x.com", "pw").unwrap();
    assert_eq!(session.identity(), "a@x.com");
    assert!(session.ledger().is_empty());

    assert!(matches!(
        auth.authenticate("a@x.com", "wrong"),
        Err(ExpenseError::WrongSecret { .. })
    ));
}

#[test]
fn zero_amount_and_blank_note_are_rejected() {
    let mut ledger = Ledger::new(LedgerPolicy::default());

    let err = ledger
        .add("Coffee", Money::zero(), "Food", date(2024, 3, 1), "")
        .unwrap_err();
    assert!(err.is_validation());

    let err = ledger
        .add("   ", Money::from_cents(500), "Food", date(2024, 3, 1), "")
        .unwrap_err();
    assert!(err.is_validation());

    assert!(ledger.is_empty());
}
