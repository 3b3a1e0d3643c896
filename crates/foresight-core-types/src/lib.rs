//! Core types shared across Foresight facilities
//!
//! This crate provides foundational types used by both error handling
//! and logging facilities:
//!
//! - **Correlation types**: RequestId, TraceId, RequestContext
//! - **Schema constants**: field keys, event names and operation names

pub mod correlation;
pub mod schema;

pub use correlation::{RequestContext, RequestId, TraceId};
