//! Scoreline - Two-Player Scoreboard Firmware
//!
//! Main firmware binary for the RP2040 scoreboard: two scores on a MAX7219
//! eight-digit display, kept in flash across power cycles, driven by three
//! push buttons and a Bluetooth serial link.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Uart};
use embassy_time::Delay;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use scoreline_core::input::InputRouter;
use scoreline_core::{Controller, Scoreboard};
use scoreline_drivers::display::Max7219Display;
use scoreline_drivers::feedback::GpioBuzzer;
use scoreline_drivers::input::ActiveLowButtons;
use scoreline_drivers::storage::KvScoreStore;
use scoreline_hal::UartConfig;
use scoreline_hal_rp2040::flash::Rp2040FlashStorage;
use scoreline_hal_rp2040::gpio::{Rp2040Input, Rp2040Output};
use scoreline_hal_rp2040::uart::to_embassy_config;

use crate::board::ChannelCommandSource;

mod board;
mod channels;
mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Scoreline firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load_config();

    // Bluetooth module on UART0 (GPIO0 TX, GPIO1 RX)
    let uart_config = to_embassy_config(&UartConfig::with_baudrate(config.link.baudrate));
    let tx_buf = TX_BUF.init([0u8; 64]);
    let rx_buf = RX_BUF.init([0u8; 256]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (mut tx, mut rx) = uart.split();

    tasks::advertise_name(&mut tx, &mut rx, config.link.device_name.as_str()).await;
    info!("UART initialized for Bluetooth link");

    // MAX7219, bit-banged (GPIO19 DIN, GPIO17 CS, GPIO18 CLK)
    let din = Output::new(p.PIN_19, Level::Low);
    let cs = Output::new(p.PIN_17, Level::High);
    let clk = Output::new(p.PIN_18, Level::Low);
    let display = unwrap!(Max7219Display::from_pins(din, cs, clk));

    // Score partition at the end of flash
    let store = KvScoreStore::new(Rp2040FlashStorage::new(p.FLASH, p.DMA_CH0));

    // Buzzer on GPIO15
    let buzzer = GpioBuzzer::new(
        Rp2040Output(Output::new(p.PIN_15, Level::Low)),
        Delay,
        config.feedback.pulse_ms,
    );

    // Buttons to ground with internal pull-ups
    let buttons = ActiveLowButtons::new(
        Rp2040Input(Input::new(p.PIN_26, Pull::Up)),
        Rp2040Input(Input::new(p.PIN_27, Pull::Up)),
        Rp2040Input(Input::new(p.PIN_25, Pull::Up)),
    );

    let mut board = Scoreboard::new(display, store, buzzer);
    if let Err(e) = board.init_display(config.display.intensity) {
        warn!("Display init failed: {:?}", e);
    }
    info!("Display initialized");

    let controller = Controller::new(
        board,
        InputRouter::new(config.input.debounce_ms),
        ChannelCommandSource,
        buttons,
    );

    // Spawn tasks
    spawner.spawn(tasks::link_rx_task(rx)).unwrap();
    spawner.spawn(tasks::controller_task(controller)).unwrap();

    info!("All tasks spawned, firmware running");

    // The TX half stays alive here; the link is receive-only after the name
    // has been set
    let _tx = tx;
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
