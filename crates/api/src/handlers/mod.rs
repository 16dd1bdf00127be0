//! Request handlers.
//!
//! Handlers delegate to the repositories in `workouts_db` and map errors
//! via [`AppError`](crate::error::AppError).

pub mod workouts;
