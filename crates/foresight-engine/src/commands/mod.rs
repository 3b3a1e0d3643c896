//! Command handlers
//!
//! Lower layers only emit `tracing::debug!` details; the start/end events
//! for a command are emitted here.

pub mod guidance;
pub mod safeguard;
pub mod simulate;

pub(crate) fn elapsed_ms(start: std::time::Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}
