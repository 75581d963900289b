//! FFI crate exposing MediTrack core to the mobile UI.
//!
//! # Responsibility
//! - Host the `flutter_rust_bridge` API surface (`api` module).
//!
//! # Invariants
//! - No function exported from this crate panics across the FFI boundary.

pub mod api;
