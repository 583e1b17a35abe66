//! Traffic multipliers by hour of day and weekday
//!
//! A [`TrafficPredictor`] is consulted once per graph build; its multiplier
//! becomes every edge's traffic factor for that snapshot.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use chrono::{Datelike, Local, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{Result, RouteError};

/// Source of traffic multipliers
pub trait TrafficPredictor {
    /// Multiplier for `hour` (0-23) on weekday `day_of_week` (1 = Monday .. 5 = Friday)
    fn predict(&self, hour: u8, day_of_week: u8) -> f64;
}

/// The time slot a graph snapshot is built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrafficContext {
    pub hour: u8,
    pub day_of_week: u8,
}

impl TrafficContext {
    /// Validate `hour` in 0..=23 and `day_of_week` in 1..=5
    pub fn new(hour: u8, day_of_week: u8) -> Result<Self> {
        if hour > 23 || !(1..=5).contains(&day_of_week) {
            return Err(RouteError::InvalidTrafficContext {
                hour,
                day: day_of_week,
            });
        }
        Ok(TrafficContext { hour, day_of_week })
    }

    /// The current local time slot; `None` on weekends
    pub fn now() -> Option<Self> {
        let now = Local::now();
        let day = now.weekday().number_from_monday() as u8;
        Self::new(now.hour() as u8, day).ok()
    }
}

/// Fixed multiplier regardless of time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantTraffic(pub f64);

impl TrafficPredictor for ConstantTraffic {
    fn predict(&self, _hour: u8, _day_of_week: u8) -> f64 {
        self.0
    }
}

#[derive(Debug, Deserialize)]
struct TrafficRow {
    hour: u8,
    day_of_week: u8,
    traffic_multiplier: f64,
}

/// Lookup table of multipliers keyed by `(hour, day_of_week)`.
///
/// Slots missing from the table predict `default_multiplier`. Every
/// prediction is raised to at least `min_multiplier`.
#[derive(Debug, Clone, PartialEq)]
pub struct TrafficTable {
    entries: HashMap<(u8, u8), f64>,
    default_multiplier: f64,
    min_multiplier: f64,
}

impl Default for TrafficTable {
    fn default() -> Self {
        TrafficTable {
            entries: HashMap::new(),
            default_multiplier: 1.0,
            min_multiplier: 1.0,
        }
    }
}

impl TrafficTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bounds(mut self, default_multiplier: f64, min_multiplier: f64) -> Self {
        self.default_multiplier = default_multiplier;
        self.min_multiplier = min_multiplier;
        self
    }

    pub fn insert(&mut self, hour: u8, day_of_week: u8, multiplier: f64) {
        self.entries.insert((hour, day_of_week), multiplier);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse CSV with headers `hour,day_of_week,traffic_multiplier`.
    /// A repeated slot keeps the last row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let mut table = TrafficTable::new();
        for row in rdr.deserialize() {
            let row: TrafficRow = row?;
            if !row.traffic_multiplier.is_finite() || row.traffic_multiplier <= 0.0 {
                return Err(RouteError::invalid_value(
                    "traffic multiplier",
                    row.traffic_multiplier,
                ));
            }
            table.insert(row.hour, row.day_of_week, row.traffic_multiplier);
        }
        Ok(table)
    }

    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let table = Self::from_reader(file)?;
        tracing::debug!(slots = table.len(), "traffic table loaded");
        Ok(table)
    }
}

impl TrafficPredictor for TrafficTable {
    fn predict(&self, hour: u8, day_of_week: u8) -> f64 {
        self.entries
            .get(&(hour, day_of_week))
            .copied()
            .unwrap_or(self.default_multiplier)
            .max(self.min_multiplier)
    }
}
