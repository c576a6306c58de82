use reqwest::StatusCode;
use thiserror::Error;

/// Failures talking to the Google Sheets API or its OAuth token endpoint.
#[derive(Error, Debug)]
pub enum SheetsError {
    /// The service account private key could not be parsed as an RSA PEM key.
    ///
    /// Usually means `GOOGLE_PRIVATE_KEY` was pasted without its BEGIN/END lines or with
    /// mangled line breaks.
    #[error("Invalid service account private key: {0}")]
    InvalidPrivateKey(#[source] jsonwebtoken::errors::Error),

    /// Signing the service account assertion failed.
    #[error("Failed to sign service account assertion: {0}")]
    SignAssertion(#[source] jsonwebtoken::errors::Error),

    /// The token endpoint refused to exchange the service account assertion.
    #[error("Token request failed with status {status}: {body}")]
    TokenRequest {
        /// HTTP status returned by the token endpoint
        status: StatusCode,
        /// Response body, kept for diagnostics
        body: String,
    },

    /// A Sheets API call returned a non-success status.
    #[error("Sheets API request failed with status {status}: {body}")]
    Api {
        /// HTTP status returned by the Sheets API
        status: StatusCode,
        /// Response body, kept for diagnostics
        body: String,
    },

    /// The spreadsheet has no worksheets to read from.
    #[error("Spreadsheet {0} has no worksheets")]
    NoWorksheet(String),

    /// The worksheet's header row lacks a column the caller needs.
    #[error("Worksheet header has no '{0}' column")]
    MissingColumn(String),

    /// The configured API base URL cannot carry path segments.
    #[error("Invalid Sheets API base URL: {0}")]
    InvalidBaseUrl(String),
}
