//! Pure derivations over a fetched journey.
//!
//! Each function takes the full day sequence and builds a fresh value; none
//! of them touch their input or keep state between calls. A re-fetch simply
//! calls them again.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{Day, Event, Message};

// ---------------------------------------------------------------------------
// Month grouping
// ---------------------------------------------------------------------------

/// Days sharing one month key, in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthGroup {
    pub month: String,
    pub days: Vec<Day>,
}

/// Month groups in first-encounter order of their keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MonthGroups {
    groups: Vec<MonthGroup>,
}

impl MonthGroups {
    pub fn iter(&self) -> std::slice::Iter<'_, MonthGroup> {
        self.groups.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.month.as_str())
    }

    pub fn get(&self, month: &str) -> Option<&[Day]> {
        self.groups
            .iter()
            .find(|g| g.month == month)
            .map(|g| g.days.as_slice())
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl<'a> IntoIterator for &'a MonthGroups {
    type Item = &'a MonthGroup;
    type IntoIter = std::slice::Iter<'a, MonthGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Partition days by `month`, keeping key order as first seen (not sorted).
pub fn group_by_month(days: &[Day]) -> MonthGroups {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<MonthGroup> = Vec::new();

    for day in days {
        let slot = *positions.entry(day.month.as_str()).or_insert_with(|| {
            groups.push(MonthGroup {
                month: day.month.clone(),
                days: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].days.push(day.clone());
    }

    MonthGroups { groups }
}

// ---------------------------------------------------------------------------
// Message index
// ---------------------------------------------------------------------------

/// A message together with the date of the day that carries it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexedMessage {
    #[serde(flatten)]
    pub message: Message,
    pub date: NaiveDate,
}

/// Lookup from message id to message, across every day of the journey.
///
/// When the same id occurs more than once, the occurrence met last in
/// traversal order (days in order, then messages in order) wins. Overwritten
/// ids are listed in [`MessageIndex::collisions`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageIndex {
    entries: HashMap<String, IndexedMessage>,
    collisions: Vec<String>,
}

impl MessageIndex {
    /// `None` means no justification is available.
    pub fn resolve(&self, id: &str) -> Option<&IndexedMessage> {
        self.entries.get(id)
    }

    /// Message that justified `event`, if it has a trigger id that resolves.
    pub fn justification_for(&self, event: &Event) -> Option<&IndexedMessage> {
        event.trigger_id().and_then(|id| self.resolve(id))
    }

    /// Ids seen more than once, in the order the duplicates were met.
    pub fn collisions(&self) -> &[String] {
        &self.collisions
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn build_message_index(days: &[Day]) -> MessageIndex {
    let mut entries = HashMap::new();
    let mut collisions = Vec::new();

    for day in days {
        for message in &day.messages {
            let indexed = IndexedMessage {
                message: message.clone(),
                date: day.date,
            };
            if entries.insert(message.id.clone(), indexed).is_some() {
                collisions.push(message.id.clone());
            }
        }
    }

    MessageIndex {
        entries,
        collisions,
    }
}

// ---------------------------------------------------------------------------
// Metrics rollup
// ---------------------------------------------------------------------------

/// Cumulative team hours across the whole journey.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsRollup {
    pub doctor_hours: f64,
    pub coach_hours: f64,
    pub concierge_hours: f64,
    pub total_team_hours: f64,
}

/// `value` if present and finite, otherwise `default`. `Some(0.0)` is a value.
pub fn number_or(value: Option<f64>, default: f64) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(default)
}

pub fn rollup_metrics(days: &[Day]) -> MetricsRollup {
    let (doctor_hours, coach_hours, concierge_hours) =
        days.iter().fold((0.0, 0.0, 0.0), |(doctor, coach, concierge), day| {
            let m = &day.internal_metrics;
            (
                doctor + number_or(m.doctor_hours, 0.0),
                coach + number_or(m.coach_hours, 0.0),
                concierge + number_or(m.concierge_hours, 0.0),
            )
        });

    MetricsRollup {
        doctor_hours,
        coach_hours,
        concierge_hours,
        total_team_hours: doctor_hours + coach_hours + concierge_hours,
    }
}
