use chrono::{Days, NaiveTime, Utc};
use rtimeclock::gateway::synthetic::{DEPARTMENTS, JOB_TITLES, NOTE_MAX_CHARS};
use rtimeclock::gateway::{Endpoints, Gateway, GatewayError, HttpTransport, Transport};
use rtimeclock::models::{ClockEvent, Employee, EventKind, Location};
use rtimeclock::utils::date;
use serde_json::json;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;
use std::time::Duration;

mod common;
use common::{DEAD_API, FakeTransport, gateway};

/// Local HTTP server answering `requests` connections with one canned
/// response each. Returns its base URL.
fn canned_server(status_line: &'static str, body: &'static str, requests: usize) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());

    thread::spawn(move || {
        for stream in listener.incoming().take(requests) {
            let mut stream = stream.unwrap();
            let mut request: Vec<u8> = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
        }
    });

    url
}

fn new_employee() -> Employee {
    Employee::new(
        None,
        "Ana Souza",
        "ana@company.com",
        "Developer",
        "IT",
        date::parse_date("2023-03-01").unwrap(),
    )
}

fn new_event() -> ClockEvent {
    ClockEvent::new(
        None,
        3,
        EventKind::ClockIn,
        date::parse_date("2024-01-02").unwrap(),
        NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        Some("on time".into()),
        Location::Remote,
    )
}

#[tokio::test]
async fn test_unreachable_api_serves_ten_synthetic_employees() {
    let gw = gateway(FakeTransport::down());
    let today = date::today();
    let oldest = today.checked_sub_days(Days::new(5 * 365)).unwrap();

    let employees = gw.fetch_employees().await;

    assert_eq!(employees.len(), 10);
    for (i, e) in employees.iter().enumerate() {
        let n = i as i64 + 1;
        assert_eq!(e.id, Some(n));
        assert_eq!(e.name, format!("Employee {n}"));
        assert_eq!(e.email, format!("employee{n}@company.com"));
        assert!(JOB_TITLES.contains(&e.job_title.as_str()));
        assert!(DEPARTMENTS.contains(&e.department.as_str()));
        assert!(e.admission_date >= oldest && e.admission_date <= today);
    }
}

#[tokio::test]
async fn test_unreachable_api_serves_forty_synthetic_events() {
    let gw = gateway(FakeTransport::down());
    let today = date::today();
    let oldest = today.checked_sub_days(Days::new(29)).unwrap();
    let first = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
    let last = NaiveTime::from_hms_opt(16, 59, 0).unwrap();

    let events = gw.fetch_clock_events().await;

    assert_eq!(events.len(), 40);
    for (i, ev) in events.iter().enumerate() {
        assert_eq!(ev.id, Some(i as i64 + 1));
        assert!((1..=10).contains(&ev.employee_id));
        assert!(ev.date >= oldest && ev.date <= today);
        assert!(ev.time >= first && ev.time <= last);
        assert_eq!(
            ev.note.as_deref(),
            Some(format!("Record {} - {}", i + 1, ev.kind.to_wire_str()).as_str())
        );
    }
}

#[tokio::test]
async fn test_synthetic_dataset_is_generated_once_per_gateway() {
    let gw = gateway(FakeTransport::down());

    let first = gw.fetch_employees().await;
    let second = gw.fetch_employees().await;
    assert_eq!(first, second);

    let events_a = gw.fetch_clock_events().await;
    let events_b = gw.fetch_clock_events().await;
    assert_eq!(events_a, events_b);
}

#[tokio::test]
async fn test_native_employee_payload_is_decoded_directly() {
    let transport = FakeTransport::down().serving(
        "users",
        json!([{
            "id": 7,
            "nome": "Bruno Lima",
            "email": "bruno@company.com",
            "cargo": "Gerente",
            "departamento": "Vendas",
            "dataAdmissao": "2021-06-15",
            "dataCadastro": "2024-01-01T12:00:00.000Z"
        }]),
    );
    let gw = gateway(transport);

    let employees = gw.fetch_employees().await;

    assert_eq!(employees.len(), 1);
    let e = &employees[0];
    assert_eq!(e.id, Some(7));
    assert_eq!(e.name, "Bruno Lima");
    assert_eq!(e.job_title, "Gerente");
    assert_eq!(e.department, "Vendas");
    assert_eq!(e.admission_str(), "2021-06-15");
    assert_eq!(e.registered_at.to_rfc3339(), "2024-01-01T12:00:00+00:00");
}

#[tokio::test]
async fn test_placeholder_users_are_adapted() {
    let transport = FakeTransport::down().serving(
        "users",
        json!([
            {"id": 1, "name": "Leanne Graham", "username": "Bret", "email": "Sincere@april.biz"},
            {"id": 2, "name": "Ervin Howell", "username": "Antonette", "email": "Shanna@melissa.tv"}
        ]),
    );
    let gw = gateway(transport);

    let employees = gw.fetch_employees().await;

    assert_eq!(employees.len(), 2);
    assert_eq!(employees[1].id, Some(2));
    assert_eq!(employees[1].name, "Ervin Howell");
    assert_eq!(employees[1].email, "Shanna@melissa.tv");
    for e in &employees {
        assert!(JOB_TITLES.contains(&e.job_title.as_str()));
        assert!(DEPARTMENTS.contains(&e.department.as_str()));
    }
}

#[tokio::test]
async fn test_placeholder_posts_are_truncated_and_adapted() {
    let long_body = "x".repeat(120);
    let mut posts: Vec<serde_json::Value> = (1..=25)
        .map(|i| json!({"userId": 4, "id": i, "title": format!("post {i}"), "body": long_body.as_str()}))
        .collect();
    posts[0] = json!({"id": 1, "title": "orphan", "body": "short body"});
    let gw = gateway(FakeTransport::down().serving("posts", json!(posts)));

    let events = gw.fetch_clock_events().await;

    assert_eq!(events.len(), 20);
    assert!((1..=10).contains(&events[0].employee_id));
    assert_eq!(events[0].note.as_deref(), Some("short body"));
    assert_eq!(events[1].employee_id, 4);
    assert_eq!(
        events[1].note.as_ref().map(|n| n.chars().count()),
        Some(NOTE_MAX_CHARS)
    );
    assert_eq!(events[19].id, Some(20));
}

#[tokio::test]
async fn test_unexpected_shape_degrades_like_an_outage() {
    let transport = FakeTransport::down()
        .serving("users", json!({"message": "maintenance"}))
        .serving("posts", json!([{"id": 1, "unexpected": true}]));
    let gw = gateway(transport);

    assert_eq!(gw.fetch_employees().await.len(), 10);
    assert_eq!(gw.fetch_clock_events().await.len(), 40);
}

#[tokio::test]
async fn test_empty_remote_collection_is_not_a_failure() {
    let transport = FakeTransport::down().serving("users", json!([]));
    let gw = gateway(transport);

    assert!(gw.fetch_employees().await.is_empty());
}

#[tokio::test]
async fn test_create_employee_takes_id_from_response() {
    let gw = gateway(FakeTransport::down().replying(json!({"id": 11})));

    let saved = gw.create_employee(new_employee()).await;

    assert_eq!(saved.id, Some(11));
    assert_eq!(saved.name, "Ana Souza");

    let posted = gw.transport().posted();
    assert_eq!(posted.len(), 1);
    assert_eq!(posted[0].0, "users");
    assert_eq!(posted[0].1["nome"], "Ana Souza");
    assert_eq!(posted[0].1["dataAdmissao"], "2023-03-01");
    assert!(posted[0].1["id"].is_null());
}

#[tokio::test]
async fn test_create_clock_event_posts_wire_format() {
    let gw = gateway(FakeTransport::down().replying(json!({"id": 101})));

    let saved = gw.create_clock_event(new_event()).await;

    assert_eq!(saved.id, Some(101));
    let posted = gw.transport().posted();
    assert_eq!(posted[0].0, "posts");
    assert_eq!(posted[0].1["funcionarioId"], 3);
    assert_eq!(posted[0].1["tipoRegistro"], "entrada");
    assert_eq!(posted[0].1["hora"], "09:00");
    assert_eq!(posted[0].1["localizacao"], "remoto");
}

#[tokio::test]
async fn test_failed_create_assigns_unique_time_based_ids() {
    let gw = gateway(FakeTransport::down());
    let before = Utc::now().timestamp_millis();

    let a = gw.create_employee(new_employee()).await;
    let b = gw.create_employee(new_employee()).await;
    let c = gw.create_clock_event(new_event()).await;

    let (a, b, c) = (a.id.unwrap(), b.id.unwrap(), c.id.unwrap());
    assert!(a >= before);
    assert!(b > a);
    assert!(c > b);
}

#[tokio::test]
async fn test_reply_without_id_falls_back() {
    let gw = gateway(FakeTransport::down().replying(json!({"status": "ok"})));

    let saved = gw.create_clock_event(new_event()).await;

    assert!(saved.id.is_some());
    assert_ne!(saved.id, Some(0));
}

#[tokio::test(start_paused = true)]
async fn test_fallback_observes_simulated_latency() {
    let gw = Gateway::new(FakeTransport::down(), Endpoints::default())
        .with_fallback_delay(Duration::from_millis(300));

    let started = tokio::time::Instant::now();
    let employees = gw.fetch_employees().await;

    assert_eq!(employees.len(), 10);
    assert!(started.elapsed() >= Duration::from_millis(300));
}

#[tokio::test]
async fn test_http_transport_refused_connection_degrades() {
    let gw = Gateway::new(HttpTransport::new(DEAD_API), Endpoints::default())
        .with_fallback_delay(Duration::ZERO);

    assert_eq!(gw.fetch_employees().await.len(), 10);
    let saved = gw.create_employee(new_employee()).await;
    assert!(saved.id.is_some());
}

#[tokio::test]
async fn test_http_error_status_degrades_even_with_a_valid_body() {
    let url = canned_server("500 Internal Server Error", "[]", 2);

    let transport = HttpTransport::new(url.clone());
    match transport.get("users").await {
        Err(GatewayError::Status { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "[]");
        }
        other => panic!("expected a status error, got {other:?}"),
    }

    let gw = Gateway::new(HttpTransport::new(url), Endpoints::default())
        .with_fallback_delay(Duration::ZERO);
    assert_eq!(gw.fetch_employees().await.len(), 10);
}

#[tokio::test]
async fn test_http_success_with_non_json_body_degrades() {
    let url = canned_server("200 OK", "<html>maintenance</html>", 2);

    let transport = HttpTransport::new(url.clone());
    assert!(matches!(
        transport.get("posts").await,
        Err(GatewayError::Request(_))
    ));

    let gw = Gateway::new(HttpTransport::new(url), Endpoints::default())
        .with_fallback_delay(Duration::ZERO);
    assert_eq!(gw.fetch_clock_events().await.len(), 40);
}
