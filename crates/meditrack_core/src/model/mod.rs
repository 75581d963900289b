//! Domain entities shared by the tracker models.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep entity shapes render-agnostic; screens consume them through
//!   tracker read views.
//!
//! # Invariants
//! - Every entity is identified by a stable v4 UUID.
//! - Entities carry no derived values; percentages and counts are
//!   recomputed on read by the tracker layer.

pub mod medication;
pub mod notification;
pub mod water;
