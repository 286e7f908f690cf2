//! Filterable, paginated list screens.
//!
//! A [`screens::ScreenConfig`] names the filters, routing policy and sort of
//! one screen; a [`controller::ListViewController`] runs searches for it.

pub mod controller;
pub mod filters;
pub mod request;
pub mod screens;
pub mod state;

pub use controller::{ListView, ListViewController, SearchOutcome};
pub use screens::ScreenConfig;
