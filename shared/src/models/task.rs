//! Care task scheduling

use std::str::FromStr;

use chrono::{Duration, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// How a care task repeats
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DurationType {
    /// Repeats every N days inside a start/end window
    Stage,
    /// Repeats every N days from now on
    Continuous,
    /// Happens a single time
    Once,
}

impl DurationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DurationType::Stage => "stage",
            DurationType::Continuous => "continuous",
            DurationType::Once => "once",
        }
    }
}

impl FromStr for DurationType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stage" => Ok(DurationType::Stage),
            "continuous" => Ok(DurationType::Continuous),
            "once" => Ok(DurationType::Once),
            _ => Err(ParseError::UnknownDurationType(s.to_string())),
        }
    }
}

/// Scheduling fields of a care task as entered on the task form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskSchedule {
    pub duration_type: DurationType,
    #[serde(default)]
    pub interval_days: Option<i64>,
    #[serde(default)]
    pub start_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub end_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub once_date: Option<NaiveDateTime>,
}

impl TaskSchedule {
    /// Next time the task is due, relative to the local clock
    pub fn next_occurrence(&self) -> Option<NaiveDateTime> {
        self.next_occurrence_at(Local::now().naive_local())
    }

    pub fn next_occurrence_at(&self, now: NaiveDateTime) -> Option<NaiveDateTime> {
        next_task_date_at(
            now,
            self.interval_days,
            self.duration_type,
            self.start_date,
            self.once_date,
        )
    }
}

/// Next due date of a task relative to the local clock
///
/// Returns `None` whenever the inputs required by `duration_type` are
/// missing or the interval is not positive.
pub fn next_task_date(
    interval_days: Option<i64>,
    duration_type: DurationType,
    start_date: Option<NaiveDateTime>,
    once_date: Option<NaiveDateTime>,
) -> Option<NaiveDateTime> {
    next_task_date_at(
        Local::now().naive_local(),
        interval_days,
        duration_type,
        start_date,
        once_date,
    )
}

/// Same as [`next_task_date`] with an explicit "now"
pub fn next_task_date_at(
    now: NaiveDateTime,
    interval_days: Option<i64>,
    duration_type: DurationType,
    start_date: Option<NaiveDateTime>,
    once_date: Option<NaiveDateTime>,
) -> Option<NaiveDateTime> {
    match duration_type {
        DurationType::Stage => {
            let step = positive_interval(interval_days)?;
            let start = start_date?;
            if start > now {
                return Some(start);
            }
            // Smallest k with start + k * step > now.
            let elapsed = (now - start).num_seconds();
            let periods = elapsed / step.num_seconds() + 1;
            let offset = Duration::try_seconds(periods.checked_mul(step.num_seconds())?)?;
            start.checked_add_signed(offset)
        }
        DurationType::Continuous => {
            let step = positive_interval(interval_days)?;
            now.checked_add_signed(step)
        }
        DurationType::Once => once_date,
    }
}

fn positive_interval(interval_days: Option<i64>) -> Option<Duration> {
    interval_days
        .filter(|days| *days > 0)
        .and_then(Duration::try_days)
}
