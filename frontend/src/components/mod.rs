//! UI Components for the AI Resume Scorer web app.
//!
//! # Layout Components
//! - [`Header`] - Navigation bar
//! - [`Hero`] - Landing title and actions
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`Features`] / [`CallToAction`] - Landing page sections
//! - [`ApplicationForm`] - Application form driven by the submission controller
//! - [`TrackApplication`] - Tracking-code lookup

mod header;
mod hero;
mod features;
mod application_form;
mod tracking;
mod footer;

pub use header::*;
pub use hero::*;
pub use features::*;
pub use application_form::*;
pub use tracking::*;
pub use footer::*;
