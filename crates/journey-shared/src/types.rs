use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Root object of the journey fixture: `{ "journey": [Day, ...] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct JourneyDocument {
    #[serde(default)]
    pub journey: Vec<Day>,
}

impl JourneyDocument {
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn days(&self) -> &[Day] {
        &self.journey
    }
}

/// One calendar day of the journey. `date` is the unique key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Day {
    pub date: NaiveDate,
    pub day_of_week: String,
    /// Grouping key for the timeline (a month name such as `"August"`).
    pub month: String,
    pub summary: String,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub messages: Vec<Message>,
    #[serde(default)]
    pub internal_metrics: InternalMetrics,
}

/// Hours the care team spent on a single day. Any field may be absent or null.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InternalMetrics {
    #[serde(default)]
    pub doctor_hours: Option<f64>,
    #[serde(default)]
    pub coach_hours: Option<f64>,
    #[serde(default)]
    pub concierge_hours: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub title: String,
    #[serde(default)]
    pub details: String,
    #[serde(rename = "type")]
    pub kind: EventType,
    #[serde(default)]
    pub triggered_by_message_id: Option<String>,
}

impl Event {
    /// Id of the message that justified this event. Empty ids count as absent.
    pub fn trigger_id(&self) -> Option<&str> {
        self.triggered_by_message_id
            .as_deref()
            .filter(|id| !id.is_empty())
    }
}

/// Event category. Labels outside the known set are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventType {
    Onboarding,
    Diagnostic,
    InterventionStart,
    ExerciseUpdate,
    Travel,
    Friction,
    Other(String),
}

impl EventType {
    pub fn as_str(&self) -> &str {
        match self {
            EventType::Onboarding => "ONBOARDING",
            EventType::Diagnostic => "DIAGNOSTIC",
            EventType::InterventionStart => "INTERVENTION_START",
            EventType::ExerciseUpdate => "EXERCISE_UPDATE",
            EventType::Travel => "TRAVEL",
            EventType::Friction => "FRICTION",
            EventType::Other(label) => label,
        }
    }
}

impl From<String> for EventType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "ONBOARDING" => EventType::Onboarding,
            "DIAGNOSTIC" => EventType::Diagnostic,
            "INTERVENTION_START" => EventType::InterventionStart,
            "EXERCISE_UPDATE" => EventType::ExerciseUpdate,
            "TRAVEL" => EventType::Travel,
            "FRICTION" => EventType::Friction,
            _ => EventType::Other(value),
        }
    }
}

impl From<EventType> for String {
    fn from(kind: EventType) -> Self {
        match kind {
            EventType::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A communication-log entry. `id` is unique across the whole journey.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub id: String,
    pub sender: String,
    pub text: String,
    /// Display string such as `"09:15 AM"`.
    pub timestamp: String,
}

impl Message {
    pub fn is_from(&self, sender: &str) -> bool {
        self.sender == sender
    }
}
