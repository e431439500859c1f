//! The property dashboard client: talks to the tracker API, keeps the loaded list and
//! turns it into a view for whatever host is showing it.

pub mod api;
mod client_error;
pub mod controller;
pub mod events;
pub mod format;
pub mod state;
pub mod terminal;
pub mod view;

pub use api::{HttpPropertyApi, PropertyApi};
pub use client_error::ClientError;
pub use controller::{Dashboard, SubmitOutcome};
pub use events::{DashboardEvent, NoticeLevel};
pub use state::Modal;
