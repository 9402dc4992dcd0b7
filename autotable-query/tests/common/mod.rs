#![allow(dead_code)]

use autotable_types::{Automation, AutomationType, Status};
use chrono::{TimeZone, Utc};

/// Builds a record created `minute` minutes after 2024-01-01T00:00:00Z.
pub fn automation(
    id: &str,
    name: &str,
    automation_type: AutomationType,
    status: Status,
    minute: i64,
) -> Automation {
    Automation {
        id: id.to_string(),
        name: name.to_string(),
        automation_type,
        creation_time: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
            + chrono::Duration::minutes(minute),
        status,
    }
}

/// Twelve records: seven active, five inactive, names out of order.
pub fn twelve() -> Vec<Automation> {
    use AutomationType::*;
    use Status::*;
    vec![
        automation("1", "kilo", Robot, Active, 11),
        automation("2", "alpha", Flow, Inactive, 3),
        automation("3", "echo", Application, Active, 7),
        automation("4", "bravo", Robot, Active, 1),
        automation("5", "lima", Flow, Inactive, 9),
        automation("6", "charlie", Robot, Inactive, 2),
        automation("7", "golf", Application, Active, 5),
        automation("8", "delta", Flow, Active, 8),
        automation("9", "hotel", Robot, Inactive, 4),
        automation("10", "foxtrot", Flow, Active, 6),
        automation("11", "india", Application, Inactive, 10),
        automation("12", "juliet", Robot, Active, 0),
    ]
}

/// `count` records with ids "0".."count-1", all active robots.
pub fn numbered(count: usize) -> Vec<Automation> {
    (0..count)
        .map(|i| {
            automation(
                &i.to_string(),
                &format!("automation {i}"),
                AutomationType::Robot,
                Status::Active,
                i as i64,
            )
        })
        .collect()
}

pub fn ids(records: &[&Automation]) -> Vec<String> {
    records.iter().map(|r| r.id.clone()).collect()
}

pub fn owned_ids(records: &[Automation]) -> Vec<String> {
    records.iter().map(|r| r.id.clone()).collect()
}
