//! Workout entity model and DTOs.
//!
//! JSON uses camelCase keys (`mapsUrl`, `eventType`, `sortOrder`) to match
//! the admin page's wire format.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use workouts_core::error::CoreError;
use workouts_core::ordering::{Ordered, SortOrderMove};
use workouts_core::types::{DbId, SortOrder, Timestamp};
use workouts_core::workout::{validate_fields, WorkoutField};

/// A row from the `workouts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: DbId,
    pub name: String,
    pub location: String,
    pub maps_url: String,
    pub schedule: String,
    pub event_type: String,
    pub sort_order: SortOrder,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Ordered for Workout {
    fn id(&self) -> DbId {
        self.id
    }

    fn sort_order(&self) -> SortOrder {
        self.sort_order
    }
}

/// DTO for creating a workout.
///
/// Missing keys deserialize as empty strings so they surface as field
/// violations rather than a body rejection. Any `sortOrder` sent by the
/// client is ignored; the repository appends the row at the end.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkout {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub maps_url: String,
    #[serde(default)]
    pub schedule: String,
    #[serde(default)]
    pub event_type: String,
}

impl CreateWorkout {
    /// All five text fields paired with their field identifiers.
    pub fn fields(&self) -> [(WorkoutField, &str); 5] {
        [
            (WorkoutField::Name, self.name.as_str()),
            (WorkoutField::Location, self.location.as_str()),
            (WorkoutField::MapsUrl, self.maps_url.as_str()),
            (WorkoutField::Schedule, self.schedule.as_str()),
            (WorkoutField::EventType, self.event_type.as_str()),
        ]
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        validate_fields(self.fields())
    }
}

/// DTO for updating a workout. All fields optional; absent fields keep
/// their stored values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkout {
    pub name: Option<String>,
    pub location: Option<String>,
    pub maps_url: Option<String>,
    pub schedule: Option<String>,
    pub event_type: Option<String>,
    pub sort_order: Option<SortOrder>,
}

impl UpdateWorkout {
    /// The text fields present in this patch. `sort_order` is not included.
    pub fn present_fields(&self) -> Vec<(WorkoutField, &str)> {
        [
            (WorkoutField::Name, &self.name),
            (WorkoutField::Location, &self.location),
            (WorkoutField::MapsUrl, &self.maps_url),
            (WorkoutField::Schedule, &self.schedule),
            (WorkoutField::EventType, &self.event_type),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
        .collect()
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        validate_fields(self.present_fields())
    }
}

/// Body of `POST /api/workouts/reorder`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReorderWorkouts {
    pub moves: Vec<SortOrderMove>,
}
