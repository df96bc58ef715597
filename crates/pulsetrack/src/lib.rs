//! `pulsetrack` - A caregiver client for individuals and pulse-oximetry readings
//!
//! This library provides the core functionality for recording individuals,
//! their SpO2/heart-rate readings, and per-individual alert ranges against
//! a managed GraphQL API, with photo attachments stored alongside.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod api;
pub mod attachment;
pub mod cli;
pub mod config;
pub mod error;
pub mod form;
pub mod logging;
pub mod model;
pub mod session;
pub mod submit;
pub mod table;

pub use api::ApiClient;
pub use config::Config;
pub use error::{Error, Result};
pub use form::IndividualForm;
pub use logging::init_logging;
pub use model::{Gender, Individual, Oximeter, PulseOximetryRange};
pub use session::{AuthState, Session};
pub use submit::{SubmitState, Submitter};
