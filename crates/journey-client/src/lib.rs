pub mod api;
pub mod config;
pub mod error;
pub mod state;
pub mod view;

use anyhow::Context;
use chrono::NaiveDate;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::state::AppState;
use crate::view::{DashboardView, JustificationView};

/// Fetch the journey once and print the dashboard.
///
/// Arguments, all optional and positional: API base URL, day to select
/// (`YYYY-MM-DD`), event number on that day whose justification to show.
pub async fn run() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("journey_client_lib=debug,warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut config = ClientConfig::from_env();
    if let Some(url) = args.first() {
        config.api_url = url.clone();
    }
    info!(api_url = %config.api_url, "Starting journey dashboard");

    let api = ApiClient::new(&config.api_url, config.request_timeout)
        .context("Failed to create HTTP client")?;

    let mut state = AppState::new(config.member_name.clone());
    state.apply_fetch(api.fetch_journey().await);

    if let Some(raw) = args.get(1) {
        let date: NaiveDate = raw
            .parse()
            .with_context(|| format!("Invalid date '{raw}', expected YYYY-MM-DD"))?;
        if !state.select_day(date) {
            warn!(%date, "No journey day on this date, keeping current selection");
        }
    }

    print!("{}", DashboardView(&state));

    if let Some(raw) = args.get(2) {
        let number: usize = raw
            .parse()
            .with_context(|| format!("Invalid event number '{raw}'"))?;
        let event = state
            .selected_day()
            .and_then(|day| number.checked_sub(1).and_then(|i| day.events.get(i)));

        match event.and_then(|e| state.justification(e)) {
            Some(justification) => println!("\n{}", JustificationView(justification)),
            None => println!("\nNo justification available for event {number}."),
        }
    }

    Ok(())
}
