//! Display drivers

pub mod max7219;

pub use self::max7219::{bcd_bytes, Max7219Display};
