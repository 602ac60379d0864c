//! Audible feedback trait

/// Trait for the feedback output (buzzer)
///
/// Implementations emit one fixed-length pulse and return once it is over,
/// so the caller is held for the pulse duration.
pub trait Feedback {
    /// Emit a single pulse
    fn pulse(&mut self) -> impl core::future::Future<Output = ()>;
}
