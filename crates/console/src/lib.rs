//! Admin console for the workouts list.
//!
//! [`page::WorkoutsPage`] holds the state the admin screen renders: the
//! sorted list, the creation form, the single row being edited and the
//! per-field error flags. It talks to the server through the
//! [`client::WorkoutsGateway`] trait; [`client::HttpGateway`] is the
//! production implementation.

pub mod client;
pub mod config;
pub mod form;
pub mod model;
pub mod page;
