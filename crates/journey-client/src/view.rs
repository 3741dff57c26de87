//! Plain-text rendering of the dashboard surfaces.
//!
//! Each view borrows what it shows and implements [`Display`], so callers
//! can print it directly or collect it with `to_string()`.

use std::fmt::{self, Display, Formatter};

use chrono::{Datelike, NaiveDate};
use journey_shared::{Day, EventType, MessageIndex, MetricsRollup, MonthGroups};

use crate::state::{AppState, Justification, LoadState};

pub fn event_icon(kind: &EventType) -> &'static str {
    match kind {
        EventType::Onboarding => "🚀",
        EventType::Diagnostic => "🔬",
        EventType::InterventionStart => "💊",
        EventType::ExerciseUpdate => "🏋️",
        EventType::Travel => "✈️",
        EventType::Friction => "⚠️",
        EventType::Other(_) => "➡️",
    }
}

// ---------------------------------------------------------------------------
// Timeline
// ---------------------------------------------------------------------------

pub struct TimelineView<'a> {
    pub groups: &'a MonthGroups,
    pub selected: Option<NaiveDate>,
}

impl Display for TimelineView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Journey Timeline")?;

        for group in self.groups {
            match group.days.first() {
                Some(first) => writeln!(f, "\n{} {}", group.month, first.date.year())?,
                None => writeln!(f, "\n{}", group.month)?,
            }

            for day in &group.days {
                let marker = if Some(day.date) == self.selected { '>' } else { ' ' };
                let icons: String = day.events.iter().map(|e| event_icon(&e.kind)).collect();
                write!(f, "{marker} {}  {}", day.date.format("%d %b"), day.summary)?;
                if icons.is_empty() {
                    writeln!(f)?;
                } else {
                    writeln!(f, "  {icons}")?;
                }
            }
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Daily view
// ---------------------------------------------------------------------------

pub struct DayView<'a> {
    pub day: &'a Day,
    pub messages: &'a MessageIndex,
    pub member_name: &'a str,
}

impl Display for DayView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let day = self.day;
        writeln!(f, "{}, {}", day.day_of_week, day.date.format("%B %-d"))?;

        if !day.events.is_empty() {
            writeln!(f, "\nKey Events")?;
            for (i, event) in day.events.iter().enumerate() {
                write!(f, "  [{}] {} {}", i + 1, event_icon(&event.kind), event.title)?;
                // The marker only shows when the justification can actually be opened.
                if self.messages.justification_for(event).is_some() {
                    write!(f, "  (Why?)")?;
                }
                writeln!(f)?;
                if !event.details.is_empty() {
                    writeln!(f, "      {}", event.details)?;
                }
            }
        }

        writeln!(f, "\nCommunication Log")?;
        for message in &day.messages {
            let side = if message.is_from(self.member_name) { "member" } else { "elyx" };
            writeln!(f, "  [{side}] {} · {}", message.sender, message.timestamp)?;
            writeln!(f, "      {}", message.text)?;
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Justification ("why?") view
// ---------------------------------------------------------------------------

pub struct JustificationView<'a>(pub Justification<'a>);

impl Display for JustificationView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Justification { event, message } = self.0;
        writeln!(f, "Reason for: \"{}\"", event.title)?;
        writeln!(f, "Decision Date: {}", message.date.format("%B %-d, %Y"))?;
        writeln!(
            f,
            "Justification: This action was taken based on the following communication:"
        )?;
        writeln!(f, "  {} · {}", message.message.sender, message.message.timestamp)?;
        writeln!(f, "  {}", message.message.text)
    }
}

// ---------------------------------------------------------------------------
// Metrics
// ---------------------------------------------------------------------------

pub struct MetricsView<'a>(pub &'a MetricsRollup);

impl Display for MetricsView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let m = self.0;
        writeln!(f, "Internal Team Metrics (Cumulative)")?;
        writeln!(f, "  Doctor Hours      {:>8.2}", m.doctor_hours)?;
        writeln!(f, "  Coach Hours       {:>8.2}", m.coach_hours)?;
        writeln!(f, "  Concierge Hours   {:>8.2}", m.concierge_hours)?;
        writeln!(f, "  Total Team Hours  {:>8.2}", m.total_team_hours)
    }
}

// ---------------------------------------------------------------------------
// Whole dashboard
// ---------------------------------------------------------------------------

pub struct DashboardView<'a>(pub &'a AppState);

impl Display for DashboardView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let state = self.0;
        match &state.load_state {
            LoadState::Loading => return writeln!(f, "Loading Journey..."),
            LoadState::Failed(e) => return writeln!(f, "Error: {e}"),
            LoadState::Loaded => {}
        }

        writeln!(
            f,
            "{}",
            TimelineView {
                groups: state.timeline(),
                selected: state.selected_date(),
            }
        )?;

        if let Some(day) = state.selected_day() {
            writeln!(
                f,
                "{}",
                DayView {
                    day,
                    messages: state.messages(),
                    member_name: &state.member_name,
                }
            )?;
        }

        write!(f, "{}", MetricsView(state.metrics()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use journey_shared::JourneyDocument;

    const JOURNEY: &str = r#"{
        "journey": [
            {
                "date": "2025-08-01",
                "dayOfWeek": "Friday",
                "month": "August",
                "summary": "Kickoff",
                "events": [
                    {"type": "ONBOARDING", "title": "Welcome call", "details": "Meet the team", "triggeredByMessageId": "msg_001"},
                    {"type": "SOMETHING_NEW", "title": "Misc", "details": "", "triggeredByMessageId": "msg_404"}
                ],
                "messages": [
                    {"id": "msg_001", "timestamp": "09:00 AM", "sender": "Rohan Patel", "text": "Excited to start"},
                    {"id": "msg_002", "timestamp": "09:05 AM", "sender": "Ruby", "text": "Welcome!"}
                ],
                "internalMetrics": {"doctorHours": 1.5, "coachHours": 0.25, "conciergeHours": 1}
            },
            {
                "date": "2025-09-02",
                "dayOfWeek": "Tuesday",
                "month": "September",
                "summary": "Travel week",
                "events": [{"type": "TRAVEL", "title": "Trip to Seoul", "details": ""}]
            }
        ]
    }"#;

    fn loaded() -> AppState {
        let mut state = AppState::new("Rohan Patel");
        state.apply_fetch(Ok(JourneyDocument::from_slice(JOURNEY.as_bytes()).unwrap()));
        state
    }

    #[test]
    fn test_event_icons() {
        assert_eq!(event_icon(&EventType::Diagnostic), "🔬");
        assert_eq!(event_icon(&EventType::Friction), "⚠️");
        assert_eq!(event_icon(&EventType::Other("X".into())), "➡️");
    }

    #[test]
    fn test_timeline_groups_and_marks_selection() {
        let state = loaded();
        let text = TimelineView {
            groups: state.timeline(),
            selected: state.selected_date(),
        }
        .to_string();

        assert!(text.contains("August 2025"));
        assert!(text.contains("September 2025"));
        assert!(text.contains("> 01 Aug  Kickoff  🚀➡️"));
        assert!(text.contains("  02 Sep  Travel week  ✈️"));
        assert!(text.find("August 2025") < text.find("September 2025"));
    }

    #[test]
    fn test_day_view_why_marker_only_when_resolvable() {
        let state = loaded();
        let text = DayView {
            day: state.selected_day().unwrap(),
            messages: state.messages(),
            member_name: &state.member_name,
        }
        .to_string();

        assert!(text.starts_with("Friday, August 1"));
        assert!(text.contains("[1] 🚀 Welcome call  (Why?)"));
        assert!(text.contains("[2] ➡️ Misc\n"));
        assert!(text.contains("[member] Rohan Patel · 09:00 AM"));
        assert!(text.contains("[elyx] Ruby · 09:05 AM"));
    }

    #[test]
    fn test_justification_view() {
        let state = loaded();
        let day = state.selected_day().unwrap();
        let justification = state.justification(&day.events[0]).unwrap();
        let text = JustificationView(justification).to_string();

        assert!(text.contains("Reason for: \"Welcome call\""));
        assert!(text.contains("Decision Date: August 1, 2025"));
        assert!(text.contains("Excited to start"));
    }

    #[test]
    fn test_metrics_two_decimals() {
        let state = loaded();
        let text = MetricsView(state.metrics()).to_string();
        assert!(text.contains("Doctor Hours          1.50"));
        assert!(text.contains("Concierge Hours       1.00"));
        assert!(text.contains("Total Team Hours      2.75"));
    }

    #[test]
    fn test_dashboard_tri_state() {
        let state = AppState::new("Rohan Patel");
        assert_eq!(DashboardView(&state).to_string(), "Loading Journey...\n");

        let mut failed = AppState::new("Rohan Patel");
        failed.apply_fetch(Err(crate::error::ClientError::Status {
            status: 500,
            message: "Error reading journey data".into(),
        }));
        assert_eq!(
            DashboardView(&failed).to_string(),
            "Error: Server responded 500: Error reading journey data\n"
        );

        let text = DashboardView(&loaded()).to_string();
        assert!(text.contains("Journey Timeline"));
        assert!(text.contains("Communication Log"));
        assert!(text.contains("Internal Team Metrics (Cumulative)"));
    }
}
