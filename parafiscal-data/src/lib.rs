pub mod config;
pub mod loader;

pub use config::{RatesConfig, RatesConfigError};
pub use loader::{IncomeTaxBracketLoader, IncomeTaxBracketLoaderError};
