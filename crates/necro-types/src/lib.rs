//! Foundation types for Necroforge.
//!
//! This crate provides the identifier and error types shared by every other
//! Necroforge crate.
//!
//! # Key Types
//!
//! - [`SummonId`] — Opaque 12-byte handle for summoned artifacts (24 hex characters)
//! - [`TypeError`] — Errors produced by type construction and parsing

pub mod error;
pub mod summon;

pub use error::TypeError;
pub use summon::{SummonId, SUMMON_ID_HEX_LEN};
