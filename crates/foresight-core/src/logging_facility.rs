//! Structured logging for Foresight
//!
//! `init(profile)` installs the process subscriber once. Engine commands
//! report their boundaries with `log_op_start!` / `log_op_end!` /
//! `log_op_error!`; core operations stay at `tracing::debug!`.
//! Tests swap the subscriber for an in-memory one with `init_test_capture`.
//!
//! ```rust
//! use foresight_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
