//! Input router
//!
//! Polls the wireless link and the buttons once per control-loop iteration
//! and turns what it finds into actions. The link is checked first, then the
//! buttons in [`Button::ALL`] order.

use heapless::Vec;
use scoreline_protocol::{Command, Line};

use super::action::{Action, Button};
use super::debounce::{Debouncer, DEFAULT_SETTLE_MS};
use crate::traits::{ButtonPanel, CommandSource};

/// Upper bound on inputs produced by one poll (one line plus three buttons)
pub const MAX_ROUTED_PER_POLL: usize = 4;

/// One input picked up during a poll
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Routed {
    /// A recognized line from the wireless link
    Received { line: Line, command: Command },
    /// A line that matched no command
    Rejected(Line),
    /// A debounced button press
    Pressed(Button),
}

impl Routed {
    /// The action this input asks for, if any
    pub fn action(&self) -> Option<Action> {
        match self {
            Routed::Received { command, .. } => Some(Action::from(*command)),
            Routed::Rejected(_) => None,
            Routed::Pressed(button) => Some(Action::for_button(*button)),
        }
    }
}

/// Routes raw inputs to actions
#[derive(Debug, Clone)]
pub struct InputRouter {
    debouncers: [Debouncer; 3],
}

impl Default for InputRouter {
    fn default() -> Self {
        Self::new(DEFAULT_SETTLE_MS)
    }
}

impl InputRouter {
    /// Create a router with the given button settle window
    pub fn new(settle_ms: u32) -> Self {
        Self {
            debouncers: [Debouncer::new(settle_ms); 3],
        }
    }

    /// Classify one line from the wireless link
    pub fn route_line(line: Line) -> Routed {
        match Command::parse(&line) {
            Some(command) => Routed::Received { line, command },
            None => Routed::Rejected(line),
        }
    }

    /// Poll every input source once
    ///
    /// At most one line is taken from the link. Buttons are read on every
    /// call; a press is reported only when its debouncer allows it.
    pub fn poll<L, B>(
        &mut self,
        link: &mut L,
        buttons: &mut B,
        now_ms: u64,
    ) -> Vec<Routed, MAX_ROUTED_PER_POLL>
    where
        L: CommandSource,
        B: ButtonPanel,
    {
        let mut routed = Vec::new();

        if let Some(line) = link.poll_line() {
            let _ = routed.push(Self::route_line(line));
        }

        for button in Button::ALL {
            let pressed = buttons.is_pressed(button);
            if self.debouncers[button.index()].poll(pressed, now_ms) {
                let _ = routed.push(Routed::Pressed(button));
            }
        }

        routed
    }
}
