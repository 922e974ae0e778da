//! Adapters layer: Concrete implementations at the system boundary.
//!
//! The only adapter is the HTTP gateway; the engine itself is pure and
//! needs no adapters of its own.

pub mod http;
