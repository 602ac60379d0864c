//! Scoreboard controller
//!
//! Ties the input router to the score store. The firmware calls
//! [`Controller::poll`] from its control loop and logs the returned events.

use heapless::Vec;
use scoreline_protocol::{Command, Line};

use crate::input::{Button, InputRouter, Routed, MAX_ROUTED_PER_POLL};
use crate::store::{Report, Scoreboard, Startup};
use crate::traits::{ButtonPanel, CommandSource, Feedback, ScorePersistence, SegmentDisplay};

/// Upper bound on events from one poll (each input plus its report)
pub const MAX_EVENTS_PER_POLL: usize = MAX_ROUTED_PER_POLL * 2;

/// Something the controller did, for the diagnostic log
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// A recognized line arrived over the link
    Received { line: Line, command: Command },
    /// A line arrived that matched no command
    Rejected(Line),
    /// A button press passed the debouncer
    Pressed(Button),
    /// An action was performed
    Applied(Report),
}

/// Read-evaluate-act loop body
pub struct Controller<D, P, F, L, B> {
    board: Scoreboard<D, P, F>,
    router: InputRouter,
    link: L,
    buttons: B,
}

impl<D, P, F, L, B> Controller<D, P, F, L, B>
where
    D: SegmentDisplay,
    P: ScorePersistence,
    F: Feedback,
    L: CommandSource,
    B: ButtonPanel,
{
    /// Create a controller
    pub fn new(board: Scoreboard<D, P, F>, router: InputRouter, link: L, buttons: B) -> Self {
        Self {
            board,
            router,
            link,
            buttons,
        }
    }

    /// Restore persisted scores and draw them
    pub async fn start(&mut self) -> Startup {
        self.board.restore().await
    }

    /// Run one iteration of the control loop
    ///
    /// Every input found is handled to completion, including the feedback
    /// pulse, before the next one is looked at.
    pub async fn poll(&mut self, now_ms: u64) -> Vec<Event, MAX_EVENTS_PER_POLL> {
        let mut events = Vec::new();

        for routed in self.router.poll(&mut self.link, &mut self.buttons, now_ms) {
            let action = routed.action();

            let event = match routed {
                Routed::Received { line, command } => Event::Received { line, command },
                Routed::Rejected(line) => Event::Rejected(line),
                Routed::Pressed(button) => Event::Pressed(button),
            };
            let _ = events.push(event);

            if let Some(action) = action {
                let report = self.board.apply(action).await;
                let _ = events.push(Event::Applied(report));
            }
        }

        events
    }

    /// The score store
    pub fn board(&self) -> &Scoreboard<D, P, F> {
        &self.board
    }

    /// Mutable access to the button panel
    pub fn buttons_mut(&mut self) -> &mut B {
        &mut self.buttons
    }

    /// Mutable access to the command source
    pub fn link_mut(&mut self) -> &mut L {
        &mut self.link
    }
}
