#[cfg(test)]
#[path = "activities_test.rs"]
mod activities_test;

use std::collections::BTreeMap;

/// One capacity-bounded activity as served by the backend.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    /// Remaining capacity, always derived from the participant list.
    /// Saturates at zero if the server ever over-fills an activity.
    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }
}

/// The full activities collection as last retrieved from the server,
/// keyed by activity name. Replaced wholesale on every successful load.
pub type Snapshot = BTreeMap<String, Activity>;

/// Last-known server state plus the load-failure marker.
///
/// The rendered view is a pure function of this value. A failed load only
/// sets the marker and keeps the previous snapshot, so controls derived
/// from it (the activity dropdown) are not cleared by a transient outage.
#[derive(Clone, Debug, Default)]
pub struct ActivitiesState {
    pub snapshot: Option<Snapshot>,
    pub load_failed: bool,
}

impl ActivitiesState {
    /// Apply a freshly fetched snapshot, clearing any failure marker.
    pub fn loaded(&mut self, snapshot: Snapshot) {
        self.snapshot = Some(snapshot);
        self.load_failed = false;
    }

    /// Mark the list area as failed without discarding the last snapshot.
    pub fn mark_load_failed(&mut self) {
        self.load_failed = true;
    }

    /// Dropdown option labels, derived fresh from the snapshot on each call.
    pub fn activity_names(&self) -> Vec<String> {
        self.snapshot
            .as_ref()
            .map(|s| s.keys().cloned().collect())
            .unwrap_or_default()
    }
}
