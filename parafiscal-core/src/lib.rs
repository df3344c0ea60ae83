pub mod calculations;
pub mod error;
pub mod models;

pub use calculations::{ParafiscalCalculator, ProgressiveTaxSchedule, compute};
pub use error::{ConfigurationError, ParafiscalError};
pub use models::*;
