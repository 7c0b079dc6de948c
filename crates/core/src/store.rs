//! Pluggable team-activity store.
//!
//! Logged meetings and status updates are the only mutable state the server
//! holds. The store is an explicit repository interface so the backing can be
//! swapped; the in-memory implementation is both the production default and
//! the test double. Nothing here is a durability mechanism: contents are lost
//! on restart, matching the documents-are-the-only-storage model.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::RwLock;
use uuid::Uuid;
use warroom_types::PersonId;

/// A logged team meeting.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: String,
    pub attendees: Vec<String>,
    pub duration: u32,
    pub notes: String,
    pub action_items: Vec<String>,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// A status update for one team member.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate {
    pub person_id: PersonId,
    pub status: String,
    pub current_task: String,
    pub progress: u32,
    pub last_update: DateTime<Utc>,
}

/// Storage interface for team activity.
pub trait TeamStore: Send + Sync {
    fn log_meeting(&self, meeting: Meeting);
    fn meetings(&self) -> Vec<Meeting>;
    fn set_status(&self, update: StatusUpdate);
    fn status(&self, person: PersonId) -> Option<StatusUpdate>;
}

/// In-memory `TeamStore` behind request-scoped locks.
#[derive(Debug, Default)]
pub struct InMemoryTeamStore {
    meetings: RwLock<Vec<Meeting>>,
    statuses: RwLock<BTreeMap<PersonId, StatusUpdate>>,
}

impl InMemoryTeamStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TeamStore for InMemoryTeamStore {
    fn log_meeting(&self, meeting: Meeting) {
        self.meetings
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(meeting);
    }

    fn meetings(&self) -> Vec<Meeting> {
        self.meetings
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn set_status(&self, update: StatusUpdate) {
        self.statuses
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(update.person_id, update);
    }

    fn status(&self, person: PersonId) -> Option<StatusUpdate> {
        self.statuses
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(&person)
            .cloned()
    }
}
