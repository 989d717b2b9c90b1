use chrono::NaiveTime;
use rtimeclock::models::{ClockEvent, Employee, EventKind, Location};
use rtimeclock::utils::date::parse_date;
use rtimeclock::view::{
    NO_EMPLOYEES, NO_RECORDS, UNKNOWN_EMPLOYEE, employee_name, render_clock_events,
    render_employee_details, render_employee_list, sort_clock_events,
};

fn employee(id: i64, name: &str, job: &str) -> Employee {
    Employee::new(
        Some(id),
        name,
        format!("{}@company.com", name.to_lowercase()),
        job,
        "IT",
        parse_date("2022-05-20").unwrap(),
    )
}

fn event(id: i64, employee_id: i64, day: &str, h: u32, m: u32) -> ClockEvent {
    ClockEvent::new(
        Some(id),
        employee_id,
        EventKind::ClockIn,
        parse_date(day).unwrap(),
        NaiveTime::from_hms_opt(h, m, 0).unwrap(),
        None,
        Location::OnSite,
    )
}

#[test]
fn test_events_sort_most_recent_first() {
    let events = vec![
        event(1, 1, "2024-01-01", 17, 0),
        event(2, 1, "2024-01-02", 9, 0),
        event(3, 1, "2024-01-01", 8, 30),
    ];

    let ids: Vec<i64> = sort_clock_events(&events)
        .iter()
        .filter_map(|e| e.id)
        .collect();

    assert_eq!(ids, vec![2, 1, 3]);
}

#[test]
fn test_sorting_ignores_creation_time() {
    let mut older = event(1, 1, "2024-03-10", 12, 0);
    let newer = event(2, 1, "2024-03-10", 13, 0);
    older.created_at = newer.created_at + chrono::Duration::days(1);

    let sorted = sort_clock_events([&older, &newer]);

    assert_eq!(sorted[0].id, Some(2));
}

#[test]
fn test_employee_list_lines() {
    let employees = vec![employee(1, "Ana", "Developer"), employee(2, "Bruno", "Manager")];

    assert_eq!(
        render_employee_list(&employees),
        "1 - Ana (Developer)\n2 - Bruno (Manager)\n"
    );
}

#[test]
fn test_empty_collections_render_placeholders() {
    assert_eq!(render_employee_list(&[]), format!("{NO_EMPLOYEES}\n"));
    assert_eq!(
        render_employee_details(&[], parse_date("2024-01-01").unwrap()),
        format!("{NO_EMPLOYEES}\n")
    );
    assert_eq!(
        render_clock_events(&Vec::<ClockEvent>::new(), &[]),
        format!("{NO_RECORDS}\n")
    );
}

#[test]
fn test_unknown_employee_label() {
    let employees = vec![employee(1, "Ana", "Developer")];

    assert_eq!(employee_name(&employees, 1), "Ana");
    assert_eq!(employee_name(&employees, 77), UNKNOWN_EMPLOYEE);

    let out = render_clock_events(&[event(1, 77, "2024-01-01", 9, 0)], &employees);
    assert!(out.contains("Unknown"));
    assert!(out.contains("2024-01-01"));
    assert!(out.contains("09:00"));
    assert!(out.contains("Clock in"));
    assert!(out.contains("On-site"));
}

#[test]
fn test_event_table_has_header_and_rows_in_order() {
    let employees = vec![employee(1, "Ana", "Developer")];
    let events = vec![event(1, 1, "2024-01-01", 8, 0), event(2, 1, "2024-01-03", 8, 0)];

    let out = render_clock_events(&events, &employees);
    let lines: Vec<&str> = out.lines().collect();

    assert!(lines[0].starts_with("Employee ID"));
    assert!(lines[0].contains("Location"));
    assert!(lines[1].starts_with('-'));
    assert!(lines[2].contains("2024-01-03"));
    assert!(lines[3].contains("2024-01-01"));
    assert_eq!(lines.len(), 4);
}

#[test]
fn test_details_show_tenure_and_manager_flag() {
    let employees = vec![employee(1, "Ana", "Developer"), employee(2, "Bruno", "Sales Manager")];

    let out = render_employee_details(&employees, parse_date("2024-05-01").unwrap());
    let bruno = out.lines().find(|l| l.contains("Bruno")).unwrap();
    let ana = out.lines().find(|l| l.contains("Ana")).unwrap();

    assert!(bruno.contains("24"));
    assert!(bruno.trim_end().ends_with("yes"));
    assert!(!ana.contains("yes"));
}
