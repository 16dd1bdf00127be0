//! Workout field catalogue and validation rules.
//!
//! The same rules gate the console's forms and the API's request bodies:
//! a field is valid when it is non-empty, and `mapsUrl` must additionally
//! parse as an absolute URL whose text starts with `https`.

use url::Url;

use crate::error::{CoreError, FieldViolation};

/// Entity name used in not-found errors and log lines.
pub const ENTITY: &str = "Workout";

/// Fields of a workout record that the admin can edit, plus `sortOrder`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WorkoutField {
    Name,
    Location,
    MapsUrl,
    Schedule,
    EventType,
    SortOrder,
}

impl WorkoutField {
    /// The five free-text fields, in form order.
    pub const TEXT_FIELDS: [WorkoutField; 5] = [
        WorkoutField::Name,
        WorkoutField::Location,
        WorkoutField::MapsUrl,
        WorkoutField::Schedule,
        WorkoutField::EventType,
    ];

    /// JSON key used on the wire and in form state.
    pub fn key(self) -> &'static str {
        match self {
            WorkoutField::Name => "name",
            WorkoutField::Location => "location",
            WorkoutField::MapsUrl => "mapsUrl",
            WorkoutField::Schedule => "schedule",
            WorkoutField::EventType => "eventType",
            WorkoutField::SortOrder => "sortOrder",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "name" => Some(WorkoutField::Name),
            "location" => Some(WorkoutField::Location),
            "mapsUrl" => Some(WorkoutField::MapsUrl),
            "schedule" => Some(WorkoutField::Schedule),
            "eventType" => Some(WorkoutField::EventType),
            "sortOrder" => Some(WorkoutField::SortOrder),
            _ => None,
        }
    }

    /// Human-readable label shown next to form inputs.
    pub fn label(self) -> &'static str {
        match self {
            WorkoutField::Name => "Name",
            WorkoutField::Location => "Location",
            WorkoutField::MapsUrl => "Maps URL",
            WorkoutField::Schedule => "Schedule",
            WorkoutField::EventType => "Event Type",
            WorkoutField::SortOrder => "Sort Order",
        }
    }

    /// Message reported when the field fails [`is_field_valid`].
    pub fn invalid_message(self) -> String {
        match self {
            WorkoutField::MapsUrl => "Enter a valid https URL".to_string(),
            other => format!("{} is required", other.label()),
        }
    }
}

/// Whether `value` is an absolute URL whose text begins with `https`.
pub fn is_valid_maps_url(value: &str) -> bool {
    Url::parse(value).is_ok() && value.starts_with("https")
}

/// Apply the per-field rule to a raw string value.
pub fn is_field_valid(field: WorkoutField, value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    match field {
        WorkoutField::MapsUrl => is_valid_maps_url(value),
        _ => true,
    }
}

/// Check every `(field, value)` pair and collect all violations.
///
/// Returns [`CoreError::InvalidFields`] listing each failing field once,
/// in the order given.
pub fn validate_fields<'a, I>(fields: I) -> Result<(), CoreError>
where
    I: IntoIterator<Item = (WorkoutField, &'a str)>,
{
    let violations: Vec<FieldViolation> = fields
        .into_iter()
        .filter(|(field, value)| !is_field_valid(*field, value))
        .map(|(field, _)| FieldViolation {
            field: field.key().to_string(),
            message: field.invalid_message(),
        })
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(CoreError::InvalidFields(violations))
    }
}
