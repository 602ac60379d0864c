//! Wireless link tasks
//!
//! The Bluetooth module is a transparent serial bridge on UART0. Bytes from
//! the phone are assembled into lines and queued for the controller.

use defmt::*;
use embassy_rp::uart::{BufferedUartRx, BufferedUartTx};
use embassy_time::{with_timeout, Duration};
use embedded_io_async::{Read, Write};

use scoreline_protocol::{Line, LineError, LineParser};

use crate::channels::LINK_LINES;

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 64;

/// Silence after which a partial line is taken as complete
pub const LINK_IDLE_MS: u64 = 1000;

/// How long to wait for the module to answer an AT command
const AT_REPLY_MS: u64 = 1000;

/// Set the name the module advertises
///
/// HC-06 convention: `AT+NAME<name>` with no terminator, answered with
/// `OKsetname`. The reply is drained here so it never reaches the line
/// parser.
pub async fn advertise_name(tx: &mut BufferedUartTx, rx: &mut BufferedUartRx, name: &str) {
    info!("Advertising as \"{}\"", name);

    let sent = async {
        tx.write_all(b"AT+NAME").await?;
        tx.write_all(name.as_bytes()).await?;
        tx.flush().await
    }
    .await;

    if let Err(e) = sent {
        warn!("Failed to send AT+NAME: {:?}", e);
        return;
    }

    let mut reply = [0u8; RX_BUF_SIZE];
    let mut len = 0;
    while len < reply.len() {
        match with_timeout(Duration::from_millis(AT_REPLY_MS), rx.read(&mut reply[len..])).await {
            Ok(Ok(n)) if n > 0 => len += n,
            _ => break,
        }
    }

    if len == 0 {
        warn!("No reply to AT+NAME; module may already be paired");
    } else {
        debug!("Module replied: {=[u8]:a}", &reply[..len]);
    }
}

/// Link RX task - assembles lines from the Bluetooth module
#[embassy_executor::task]
pub async fn link_rx_task(mut rx: BufferedUartRx) {
    info!("Link RX task started");

    let mut parser = LineParser::new();
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        let n = match with_timeout(Duration::from_millis(LINK_IDLE_MS), rx.read(&mut buf)).await {
            Ok(Ok(n)) => n,
            Ok(Err(e)) => {
                warn!("UART read error: {:?}", e);
                continue;
            }
            Err(_) => {
                // Sender went quiet; take any partial line as complete
                if parser.pending() > 0 {
                    trace!("Link idle, flushing partial line");
                    dispatch(parser.finish());
                }
                continue;
            }
        };

        trace!("RX: {} bytes", n);
        for &byte in &buf[..n] {
            dispatch(parser.feed(byte));
        }
    }
}

fn dispatch(result: Result<Option<Line>, LineError>) {
    match result {
        Ok(Some(line)) => {
            // Drop if the controller is behind
            if LINK_LINES.try_send(line).is_err() {
                warn!("Link channel full, dropping line");
            }
        }
        Ok(None) => {}
        Err(e) => warn!("Discarded malformed line: {:?}", e),
    }
}
