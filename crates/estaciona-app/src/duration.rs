//! Selectable parking durations
//!
//! 30 to 180 minutes in 30-minute steps, each labeled with the wall-clock
//! time the parking would run until ("Hasta las 14:30").

use chrono::{DateTime, Duration, Local};

/// One selectable duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationOption {
    pub minutes: u32,
    pub label: String,
}

/// The options as of now.
pub fn options() -> Vec<DurationOption> {
    options_at(Local::now())
}

/// The options relative to an explicit instant.
pub fn options_at(now: DateTime<Local>) -> Vec<DurationOption> {
    (1u32..=6)
        .map(|step| {
            let minutes = step * 30;
            let until = now + Duration::minutes(i64::from(minutes));
            DurationOption {
                minutes,
                label: format!("Hasta las {}", until.format("%H:%M")),
            }
        })
        .collect()
}
