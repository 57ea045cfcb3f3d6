//! Shared client-side state.
//!
//! DESIGN
//! ======
//! State is split by domain (`activities`, `message`) so components depend
//! on small focused models. Both are plain values held in `RwSignal`
//! contexts and unit-tested on the host target.

pub mod activities;
pub mod message;
