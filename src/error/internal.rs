use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with stored data indicating unexpected content or possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse a Discord id from a String
    ///
    /// Occurs when a spreadsheet cell that should contain a Discord snowflake holds
    /// something else.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },
}
