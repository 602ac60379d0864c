//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels.

pub mod controller;
pub mod link;

pub use controller::controller_task;
pub use link::{advertise_name, link_rx_task};
