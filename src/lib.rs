//! # activity-board
//!
//! Leptos + WASM client for the activities signup service. Fetches the
//! activity collection over its REST contract, renders activity cards and a
//! signup form, and reconciles after every mutation by re-fetching.
//!
//! The rendered view is a pure function of the last-known server snapshot
//! held in `state::activities`; nothing is patched incrementally.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
