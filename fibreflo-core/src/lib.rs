//! Domain core of the FibreFlo field-engineering timesheet system: rate
//! cards, validation, read-side aggregation, and the repository port that
//! backing stores implement.

pub mod catalog;
pub mod error;
pub mod mock;
pub mod models;
pub mod paging;
pub mod ports;
pub mod services;
pub mod summary;
pub mod time_utils;
pub mod validate;

pub use error::{RepositoryError, TimesheetError, UnknownProvider, ValidationError};
pub use models::*;
pub use ports::{inbound::TimesheetService, outbound::TimesheetRepository};
pub use services::Timesheets;
