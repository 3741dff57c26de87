//! # journey-shared
//!
//! Data model of the journey fixture and the derivations the dashboard
//! builds from it: month-grouped timeline, message index, metrics rollup.

pub mod constants;
pub mod derive;
pub mod error;
pub mod types;

pub use derive::{
    build_message_index, group_by_month, number_or, rollup_metrics, IndexedMessage,
    MessageIndex, MetricsRollup, MonthGroup, MonthGroups,
};
pub use error::JourneyError;
pub use types::{Day, Event, EventType, InternalMetrics, JourneyDocument, Message};
