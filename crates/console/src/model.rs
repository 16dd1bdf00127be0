//! Wire types exchanged with the workouts API.

use serde::{Deserialize, Serialize};
use workouts_core::ordering::Ordered;
use workouts_core::types::{DbId, SortOrder};

/// A workout as returned by the API. Timestamps are not needed here and
/// are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: DbId,
    pub name: String,
    pub location: String,
    pub maps_url: String,
    pub schedule: String,
    pub event_type: String,
    #[serde(default)]
    pub sort_order: SortOrder,
}

impl Ordered for Workout {
    fn id(&self) -> DbId {
        self.id
    }

    fn sort_order(&self) -> SortOrder {
        self.sort_order
    }
}

/// Body of a create request. The server appends the row itself, but the
/// console still sends the position it expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkout {
    pub name: String,
    pub location: String,
    pub maps_url: String,
    pub schedule: String,
    pub event_type: String,
    pub sort_order: SortOrder,
}

/// Body of an update request. Only `Some` fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maps_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

impl WorkoutPatch {
    /// A patch that only moves the row.
    pub fn sort_order(sort_order: SortOrder) -> Self {
        Self {
            sort_order: Some(sort_order),
            ..Default::default()
        }
    }
}
