//! Controller task
//!
//! Runs the read-evaluate-act loop on a fixed tick and writes everything the
//! controller reports to the defmt log.

use defmt::*;
use embassy_time::{Duration, Instant, Ticker};

use scoreline_core::input::Action;
use scoreline_core::score::MAX_SCORE;
use scoreline_core::store::Startup;
use scoreline_core::{Event, Outcome, Report};
use scoreline_protocol::Command;

use crate::board::BoardController;

/// Control loop period
pub const TICK_INTERVAL_MS: u64 = 5;

/// Controller task - owns the scoreboard and polls every input source
#[embassy_executor::task]
pub async fn controller_task(mut controller: BoardController) {
    info!("Controller task started");

    let startup = controller.start().await;
    log_startup(&startup);

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS));

    loop {
        ticker.next().await;

        let now_ms = Instant::now().as_millis();
        for event in controller.poll(now_ms).await {
            log_event(&event);
        }
    }
}

fn log_startup(startup: &Startup) {
    match startup.load_fault {
        None => info!("Scores loaded from memory."),
        Some(e) => warn!("Failed to load scores ({:?}), starting from 0", e),
    }
    if let Some(e) = startup.display_fault {
        warn!("Display update failed: {:?}", e);
    }
    let (p1, p2) = startup.scores.values();
    info!("Player 1: {}, Player 2: {}", p1, p2);
}

fn log_event(event: &Event) {
    match event {
        Event::Received { line, .. } => info!("Received: {}", line.as_str()),
        Event::Rejected(line) => {
            info!("Received: {}", line.as_str());
            let [a, b, c, d, e] = Command::ALL;
            warn!(
                "Invalid command. Use {}, {}, {}, {}, or {}.",
                a.as_str(),
                b.as_str(),
                c.as_str(),
                d.as_str(),
                e.as_str()
            );
        }
        Event::Pressed(button) => debug!("Button pressed: {:?}", button),
        Event::Applied(report) => log_report(report),
    }
}

fn log_report(report: &Report) {
    if report.outcome.changed() {
        if let Some(e) = report.display_fault {
            warn!("Display update failed: {:?}", e);
        }
        match report.storage_fault {
            None => info!("Scores saved to memory."),
            Some(e) => warn!("Failed to save scores: {:?}", e),
        }
    }

    match (report.action, report.outcome) {
        (Action::Increment(player), Outcome::Incremented) => {
            info!("Player {} score incremented.", player.number())
        }
        (Action::Decrement(player), Outcome::Decremented) => {
            info!("Player {} score decremented.", player.number())
        }
        (Action::Increment(player), Outcome::AtMaximum) => info!(
            "Player {}'s score is already at the maximum ({}).",
            player.number(),
            MAX_SCORE
        ),
        (Action::Decrement(player), Outcome::AtMinimum) => info!(
            "Player {}'s score is already at the minimum (0).",
            player.number()
        ),
        (_, Outcome::Reset) => info!("Scores reset to 0."),
        (action, outcome) => debug!("{:?} -> {:?}", action, outcome),
    }
}
