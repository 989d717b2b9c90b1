//! Time utilities: parsing HH:MM and formatting the current time.

use chrono::{Local, NaiveTime, Timelike};

/// `HH:MM`, or `HH:MM:SS` with the seconds dropped.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    let time = NaiveTime::parse_from_str(t, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M:%S"))
        .ok()?;
    time.with_second(0)
}

/// Current local time as `HH:MM` (default for the clock form).
pub fn now_hhmm() -> String {
    Local::now().format("%H:%M").to_string()
}

/// Current local date and time for the shell prompt.
pub fn clock_display() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
