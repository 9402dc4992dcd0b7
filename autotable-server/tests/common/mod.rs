#![allow(dead_code)]

use std::sync::Arc;

use autotable_server::{AppState, AutomationSource, InMemorySource, build_router};
use autotable_types::{Automation, AutomationType, Status};
use chrono::{TimeZone, Utc};

pub fn automation(id: &str, name: &str, automation_type: AutomationType, status: Status, day: u32) -> Automation {
    Automation {
        id: id.to_string(),
        name: name.to_string(),
        automation_type,
        creation_time: Utc.with_ymd_and_hms(2024, 3, day, 8, 30, 0).unwrap(),
        status,
    }
}

/// Twelve records: seven active, five inactive.
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
        automation("12", "juliet", Robot, Active, 12),
    ]
}

/// Spin up the HTTP server on an OS-assigned port, returning the base URL.
pub async fn spawn_server(source: Arc<dyn AutomationSource>) -> String {
    let app = build_router(AppState::new(source));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://127.0.0.1:{}", port)
}

pub async fn spawn_test_server() -> String {
    spawn_server(Arc::new(InMemorySource::new(twelve()))).await
}
