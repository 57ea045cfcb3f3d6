//! Network layer: REST calls against the activities service.

pub mod api;
