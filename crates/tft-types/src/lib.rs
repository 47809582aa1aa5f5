//! Foundation types for the template file tree (TFT).
//!
//! Every node in a template tree carries a [`NodeId`] that is generated once
//! at creation and never reassigned. Id generation is a capability injected
//! into the tree engine through [`IdProvider`], so tests can swap the
//! time-ordered UUID generator for a deterministic counter.
//!
//! # Key Types
//!
//! - [`NodeId`] — Stable, session-local node identifier (UUID)
//! - [`IdProvider`] — Source of fresh, never-reused ids
//! - [`UuidIdProvider`] — UUID v7 provider used in production
//! - [`SequentialIdProvider`] — Deterministic counter for tests and demos

pub mod error;
pub mod identity;

pub use error::TypeError;
pub use identity::{IdProvider, NodeId, SequentialIdProvider, UuidIdProvider};
