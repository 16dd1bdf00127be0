//! Domain rules for the workouts admin: field validation, display
//! ordering and the swap protocol shared by the server and the console.

pub mod error;
pub mod ordering;
pub mod types;
pub mod workout;
