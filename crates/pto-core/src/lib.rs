//! # pto-core
//!
//! Core types and error definitions for ptoplan.
//!
//! This crate provides the building blocks shared across the other crates in
//! the workspace: the error hierarchy with its `ensure!` macro and the
//! primitive alias used for day and budget arithmetic.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// A count of calendar days (break lengths, PTO spent, budgets).
pub type DayCount = u32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
