//! Board wiring
//!
//! Pin assignments for the Pico scoreboard and the concrete driver types
//! the controller runs on.
//!
//! | Function        | GPIO |
//! |-----------------|------|
//! | Link TX (UART0) | 0    |
//! | Link RX (UART0) | 1    |
//! | Buzzer          | 15   |
//! | MAX7219 CS      | 17   |
//! | MAX7219 CLK     | 18   |
//! | MAX7219 DIN     | 19   |
//! | Reset button    | 25   |
//! | P1 button       | 26   |
//! | P2 button       | 27   |

use embassy_rp::gpio::Output;
use embassy_time::Delay;
use max7219::connectors::PinConnector;

use scoreline_core::traits::CommandSource;
use scoreline_core::Controller;
use scoreline_drivers::display::Max7219Display;
use scoreline_drivers::feedback::GpioBuzzer;
use scoreline_drivers::input::ActiveLowButtons;
use scoreline_drivers::storage::KvScoreStore;
use scoreline_hal_rp2040::flash::Rp2040FlashStorage;
use scoreline_hal_rp2040::gpio::{Rp2040Input, Rp2040Output};
use scoreline_protocol::Line;

use crate::channels::LINK_LINES;

pub type BoardDisplay =
    Max7219Display<PinConnector<Output<'static>, Output<'static>, Output<'static>>>;
pub type BoardStore = KvScoreStore<Rp2040FlashStorage<'static>>;
pub type BoardBuzzer = GpioBuzzer<Rp2040Output<'static>, Delay>;
pub type BoardButtons =
    ActiveLowButtons<Rp2040Input<'static>, Rp2040Input<'static>, Rp2040Input<'static>>;

pub type BoardController =
    Controller<BoardDisplay, BoardStore, BoardBuzzer, ChannelCommandSource, BoardButtons>;

/// Command source fed by the link RX task
pub struct ChannelCommandSource;

impl CommandSource for ChannelCommandSource {
    fn poll_line(&mut self) -> Option<Line> {
        LINK_LINES.try_receive().ok()
    }
}
