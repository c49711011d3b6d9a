//! Event time series for the line chart.
//!
//! Only events the caller names are tracked. Non-medal swims are included.

use crate::parser::MedalDataset;
use log::debug;
use serde::{Deserialize, Serialize};

/// One swim in a series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimePoint {
    pub year: u16,

    /// Time in seconds
    pub seconds: f64,

    /// Time as written in the source (e.g. "1:52.03")
    pub time: String,
}

/// All swims of one event, ordered by year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventTimeSeries {
    pub event: String,
    pub points: Vec<TimePoint>,
}

impl EventTimeSeries {
    /// Short chart label: "Men 200 Butterfly" becomes "200m Butterfly"
    pub fn label(&self) -> String {
        let name = self
            .event
            .strip_prefix("Men ")
            .or_else(|| self.event.strip_prefix("Women "))
            .unwrap_or(&self.event);

        match name.split_once(' ') {
            Some((distance, stroke)) if distance.chars().all(|c| c.is_ascii_digit()) => {
                format!("{}m {}", distance, stroke)
            }
            _ => name.to_string(),
        }
    }

    /// Fastest swim of the series
    pub fn best(&self) -> Option<&TimePoint> {
        self.points
            .iter()
            .min_by(|a, b| a.seconds.total_cmp(&b.seconds))
    }
}

/// Build one time series per requested event
///
/// **Public** - main entry point for the time-series view
///
/// # Arguments
/// * `dataset` - Loaded records, medal and non-medal
/// * `events` - Event names to track; output follows this order
///
/// # Returns
/// One series per event name (empty if the event never appears). Points are
/// sorted by year; equal years keep source order.
pub fn event_time_series<S: AsRef<str>>(
    dataset: &MedalDataset,
    events: &[S],
) -> Vec<EventTimeSeries> {
    events
        .iter()
        .map(|event| {
            let event = event.as_ref();
            let mut points: Vec<TimePoint> = dataset
                .records()
                .iter()
                .filter(|r| r.event == event)
                .filter_map(|r| match &r.time {
                    Some(time) => Some(TimePoint {
                        year: r.year,
                        seconds: time.seconds,
                        time: time.display.clone(),
                    }),
                    None => {
                        debug!("{} {} has no time, leaving it out", r.year, event);
                        None
                    }
                })
                .collect();

            // stable
            points.sort_by_key(|p| p.year);

            EventTimeSeries {
                event: event.to_string(),
                points,
            }
        })
        .collect()
}
