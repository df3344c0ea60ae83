use std::io::Read;

use parafiscal_core::IncomeTaxBracket;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading income tax bracket data.
#[derive(Debug, Error)]
pub enum IncomeTaxBracketLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),
}

impl From<csv::Error> for IncomeTaxBracketLoaderError {
    fn from(err: csv::Error) -> Self {
        IncomeTaxBracketLoaderError::CsvParse(err.to_string())
    }
}

/// Loader for income tax brackets from CSV files.
///
/// The CSV file must have a header row with the following columns:
/// - `threshold`: lower bound of the bracket, in local currency
/// - `rate`: marginal rate as a decimal (e.g., 0.19 for 19%)
///
/// Rows are returned in file order. Ordering and range checks happen when
/// the brackets are validated as part of a rate set.
pub struct IncomeTaxBracketLoader;

impl IncomeTaxBracketLoader {
    /// Parse income tax brackets from a CSV reader.
    ///
    /// The reader can be any type that implements `Read`, such as a file or
    /// a byte slice.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<IncomeTaxBracket>, IncomeTaxBracketLoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut brackets = Vec::new();

        for result in csv_reader.deserialize() {
            let bracket: IncomeTaxBracket = result?;
            brackets.push(bracket);
        }

        debug!(count = brackets.len(), "parsed income tax brackets");
        Ok(brackets)
    }
}
