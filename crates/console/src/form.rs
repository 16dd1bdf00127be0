//! Form state for the create and edit panels.
//!
//! A [`Form`] maps JSON keys to values; [`FieldErrors`] carries the
//! per-field error flag that is cleared on change and recomputed on blur.

use std::collections::BTreeMap;

use workouts_core::types::SortOrder;
use workouts_core::workout::{is_field_valid, WorkoutField};

use crate::model::{NewWorkout, Workout, WorkoutPatch};

const SORT_ORDER_KEY: &str = "sortOrder";

/// A single form value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValue {
    Text(String),
    Number(SortOrder),
}

/// Key/value state of one form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    values: BTreeMap<String, FormValue>,
}

impl Form {
    /// The creation form: the five text fields, all empty.
    pub fn blank() -> Self {
        let values = WorkoutField::TEXT_FIELDS
            .iter()
            .map(|field| (field.key().to_string(), FormValue::Text(String::new())))
            .collect();
        Self { values }
    }

    /// An edit draft seeded from an existing row.
    pub fn from_workout(workout: &Workout) -> Self {
        let mut form = Self::default();
        for field in WorkoutField::TEXT_FIELDS {
            form.set_text(field.key(), text_of(workout, field));
        }
        form.set_sort_order(workout.sort_order);
        form
    }

    pub fn insert(&mut self, key: impl Into<String>, value: FormValue) {
        self.values.insert(key.into(), value);
    }

    pub fn set_text(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.insert(key, FormValue::Text(value.into()));
    }

    pub fn set_sort_order(&mut self, sort_order: SortOrder) {
        self.insert(SORT_ORDER_KEY, FormValue::Number(sort_order));
    }

    pub fn get(&self, key: &str) -> Option<&FormValue> {
        self.values.get(key)
    }

    /// The value under `key` if it is text.
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.values.get(key) {
            Some(FormValue::Text(value)) => Some(value),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FormValue)> {
        self.values.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn text_field(&self, field: WorkoutField) -> String {
        self.text(field.key()).unwrap_or_default().to_string()
    }

    pub fn to_new_workout(&self, sort_order: SortOrder) -> NewWorkout {
        NewWorkout {
            name: self.text_field(WorkoutField::Name),
            location: self.text_field(WorkoutField::Location),
            maps_url: self.text_field(WorkoutField::MapsUrl),
            schedule: self.text_field(WorkoutField::Schedule),
            event_type: self.text_field(WorkoutField::EventType),
            sort_order,
        }
    }

    /// Every text field present in the form, plus `sortOrder` when it is
    /// held as a number.
    pub fn to_patch(&self) -> WorkoutPatch {
        let text = |field: WorkoutField| self.text(field.key()).map(str::to_string);
        let sort_order = match self.get(SORT_ORDER_KEY) {
            Some(FormValue::Number(order)) => Some(*order),
            _ => None,
        };

        WorkoutPatch {
            name: text(WorkoutField::Name),
            location: text(WorkoutField::Location),
            maps_url: text(WorkoutField::MapsUrl),
            schedule: text(WorkoutField::Schedule),
            event_type: text(WorkoutField::EventType),
            sort_order,
        }
    }
}

fn text_of(workout: &Workout, field: WorkoutField) -> &str {
    match field {
        WorkoutField::Name => &workout.name,
        WorkoutField::Location => &workout.location,
        WorkoutField::MapsUrl => &workout.maps_url,
        WorkoutField::Schedule => &workout.schedule,
        WorkoutField::EventType => &workout.event_type,
        WorkoutField::SortOrder => "",
    }
}

/// Rule for a text value under `key`. Keys outside the workout catalogue
/// only need to be non-empty.
pub fn is_value_valid(key: &str, value: &str) -> bool {
    match WorkoutField::from_key(key) {
        Some(field) => is_field_valid(field, value),
        None => !value.is_empty(),
    }
}

/// Per-field error flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    flags: BTreeMap<String, bool>,
}

impl FieldErrors {
    pub fn is_set(&self, key: &str) -> bool {
        self.flags.get(key).copied().unwrap_or(false)
    }

    pub fn clear(&mut self, key: &str) {
        self.flags.insert(key.to_string(), false);
    }

    /// Recompute the flag for `key` from the form's current value.
    pub fn blur(&mut self, form: &Form, key: &str) {
        let invalid = match form.get(key) {
            Some(FormValue::Text(value)) => !is_value_valid(key, value),
            Some(FormValue::Number(_)) => key != SORT_ORDER_KEY,
            None => true,
        };
        self.flags.insert(key.to_string(), invalid);
    }

    pub fn reset(&mut self) {
        self.flags.clear();
    }
}

/// Submit gate: every key except `sortOrder` must hold valid, non-empty
/// text with no active error flag.
pub fn is_valid_form(form: &Form, errors: &FieldErrors) -> bool {
    form.iter().all(|(key, value)| {
        if key == SORT_ORDER_KEY {
            return true;
        }
        match value {
            FormValue::Text(text) => is_value_valid(key, text) && !errors.is_set(key),
            FormValue::Number(_) => false,
        }
    })
}
