//! Dashboard state: the fetched journey plus everything derived from it.
//!
//! [`AppState`] holds the loading / error / loaded tri-state. Every
//! successful fetch rebuilds the month groups, message index and metrics
//! rollup from scratch; a failed fetch leaves them empty.

use chrono::NaiveDate;
use journey_shared::{
    build_message_index, group_by_month, rollup_metrics, Day, Event, IndexedMessage,
    JourneyDocument, MessageIndex, MetricsRollup, MonthGroups,
};
use tracing::{info, warn};

use crate::error::ClientError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Failed(String),
    Loaded,
}

/// An event together with the message that justified it.
#[derive(Debug, Clone, Copy)]
pub struct Justification<'a> {
    pub event: &'a Event,
    pub message: &'a IndexedMessage,
}

pub struct AppState {
    pub load_state: LoadState,

    /// Sender name of the journey member, used to tell member and team
    /// messages apart.
    pub member_name: String,

    days: Vec<Day>,
    timeline: MonthGroups,
    messages: MessageIndex,
    metrics: MetricsRollup,
    selected: Option<NaiveDate>,
}

impl AppState {
    /// Create a new state waiting for its first fetch.
    pub fn new(member_name: impl Into<String>) -> Self {
        Self {
            load_state: LoadState::Loading,
            member_name: member_name.into(),
            days: Vec::new(),
            timeline: MonthGroups::default(),
            messages: MessageIndex::default(),
            metrics: MetricsRollup::default(),
            selected: None,
        }
    }

    /// Apply the outcome of a fetch-all. Failures are kept for display and
    /// leave every derivation empty.
    pub fn apply_fetch(&mut self, result: Result<JourneyDocument, ClientError>) {
        match result {
            Ok(document) => self.load(document.journey),
            Err(e) => {
                warn!(error = %e, "Journey fetch failed");
                self.clear();
                self.load_state = LoadState::Failed(e.to_string());
            }
        }
    }

    fn clear(&mut self) {
        self.days.clear();
        self.timeline = MonthGroups::default();
        self.messages = MessageIndex::default();
        self.metrics = MetricsRollup::default();
        self.selected = None;
    }

    fn load(&mut self, days: Vec<Day>) {
        self.timeline = group_by_month(&days);
        self.messages = build_message_index(&days);
        self.metrics = rollup_metrics(&days);
        self.selected = days.first().map(|d| d.date);
        self.days = days;
        self.load_state = LoadState::Loaded;

        for id in self.messages.collisions() {
            warn!(id = %id, "Duplicate message id in journey; later message wins");
        }

        info!(
            days = self.days.len(),
            months = self.timeline.len(),
            messages = self.messages.len(),
            "Journey loaded"
        );
    }

    pub fn days(&self) -> &[Day] {
        &self.days
    }

    pub fn timeline(&self) -> &MonthGroups {
        &self.timeline
    }

    pub fn messages(&self) -> &MessageIndex {
        &self.messages
    }

    pub fn metrics(&self) -> &MetricsRollup {
        &self.metrics
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected
    }

    pub fn selected_day(&self) -> Option<&Day> {
        let date = self.selected?;
        self.days.iter().find(|d| d.date == date)
    }

    /// Select the day with `date`. Unknown dates leave the selection as is.
    pub fn select_day(&mut self, date: NaiveDate) -> bool {
        if self.days.iter().any(|d| d.date == date) {
            self.selected = Some(date);
            true
        } else {
            false
        }
    }

    /// `None` when the event has no trigger or the trigger does not resolve.
    pub fn justification<'a>(&'a self, event: &'a Event) -> Option<Justification<'a>> {
        self.messages
            .justification_for(event)
            .map(|message| Justification { event, message })
    }
}
