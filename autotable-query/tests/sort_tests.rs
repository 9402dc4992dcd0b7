mod common;

use autotable_query::{SortDirection, SortKey, SortSpec};
use autotable_types::{AutomationType, Column, Status};
use common::{automation, ids, twelve};
use pretty_assertions::assert_eq;
use std::cmp::Ordering;

// ── Identity ─────────────────────────────────────────────────────

#[test]
fn empty_spec_keeps_input_order() {
    let records = twelve();
    let out = SortSpec::default().apply(&records);
    assert_eq!(ids(&out), vec!["1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12"]);
}

// ── Single key ───────────────────────────────────────────────────

#[test]
fn name_ascending() {
    let records = twelve();
    let out = SortSpec::new([SortKey::asc(Column::Name)]).apply(&records);
    let names: Vec<&str> = out.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel", "india",
            "juliet", "kilo", "lima"
        ]
    );
}

#[test]
fn creation_time_descending_compares_instants() {
    let records = twelve();
    let out = SortSpec::new([SortKey::desc(Column::CreationTime)]).apply(&records);
    assert_eq!(ids(&out)[..3], ["1", "11", "5"]);
    assert_eq!(ids(&out).last().map(String::as_str), Some("12"));
}

#[test]
fn text_sort_is_case_insensitive() {
    let records = vec![
        automation("1", "beta", AutomationType::Robot, Status::Active, 0),
        automation("2", "Alpha", AutomationType::Robot, Status::Active, 0),
        automation("3", "alpha", AutomationType::Robot, Status::Active, 0),
        automation("4", "Charlie", AutomationType::Robot, Status::Active, 0),
    ];
    let out = SortSpec::new([SortKey::asc(Column::Name)]).apply(&records);
    assert_eq!(ids(&out), vec!["3", "2", "1", "4"]);
}

#[test]
fn id_sort_is_textual() {
    let records = twelve();
    let out = SortSpec::new([SortKey::asc(Column::Id)]).apply(&records);
    assert_eq!(ids(&out)[..4], ["1", "10", "11", "12"]);
}

// ── Multiple keys ────────────────────────────────────────────────

#[test]
fn second_key_breaks_ties() {
    let records = twelve();
    let spec = SortSpec::new([SortKey::asc(Column::Status), SortKey::desc(Column::Name)]);
    let out = spec.apply(&records);
    assert_eq!(
        ids(&out),
        vec!["1", "12", "7", "10", "3", "8", "4", "5", "11", "9", "6", "2"]
    );
}

#[test]
fn ties_keep_input_order() {
    let records = twelve();
    let out = SortSpec::new([SortKey::asc(Column::Type)]).apply(&records);
    assert_eq!(
        ids(&out),
        vec!["3", "7", "11", "2", "5", "8", "10", "1", "4", "6", "9", "12"]
    );
}

#[test]
fn repeated_column_keeps_first_entry() {
    let spec = SortSpec::new([SortKey::asc(Column::Name), SortKey::desc(Column::Name)]);
    assert_eq!(spec.keys().len(), 1);
    assert_eq!(spec.keys()[0].direction, SortDirection::Asc);
}

// ── Unknown columns ──────────────────────────────────────────────

#[test]
fn unknown_column_falls_through_to_next_key() {
    let records = twelve();
    let spec = SortSpec::new([SortKey::asc("owner"), SortKey::asc(Column::Name)]);
    let out = spec.apply(&records);
    assert_eq!(out[0].name, "alpha");
    assert_eq!(out[11].name, "lima");
}

#[test]
fn unknown_column_alone_is_identity() {
    let records = twelve();
    let out = SortSpec::new([SortKey::desc("owner")]).apply(&records);
    assert_eq!(ids(&out), ids(&records.iter().collect::<Vec<_>>()));
}

// ── Purity ───────────────────────────────────────────────────────

#[test]
fn input_order_is_not_mutated() {
    let records = twelve();
    let before = records.clone();
    let _ = SortSpec::new([SortKey::desc(Column::Name)]).apply(&records);
    assert_eq!(records, before);
}

#[test]
fn compare_reports_equal_for_identical_keys() {
    let a = automation("1", "same", AutomationType::Flow, Status::Active, 0);
    let b = automation("2", "same", AutomationType::Flow, Status::Active, 5);
    let spec = SortSpec::new([SortKey::asc(Column::Name), SortKey::asc(Column::Type)]);
    assert_eq!(spec.compare(&a, &b), Ordering::Equal);
    let with_time = SortSpec::new([SortKey::asc(Column::Name), SortKey::asc(Column::CreationTime)]);
    assert_eq!(with_time.compare(&a, &b), Ordering::Less);
}

#[test]
fn direction_apply() {
    assert_eq!(SortDirection::Asc.apply(Ordering::Less), Ordering::Less);
    assert_eq!(SortDirection::Desc.apply(Ordering::Less), Ordering::Greater);
    assert_eq!(SortDirection::Desc.apply(Ordering::Equal), Ordering::Equal);
}
