//! Foresight Engine - Orchestration layer
//!
//! Command handlers over the pure core operations. The engine owns:
//! - boundary logging (`log_op_start!` / `log_op_end!` / `log_op_error!`)
//!   exactly once per command
//! - request correlation on returned errors
//! - random-source isolation: each simulation seeds its own RNG

pub mod commands;
pub mod errors;

pub use errors::Result;
