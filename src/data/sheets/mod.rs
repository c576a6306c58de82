//! Google Sheets access.
//!
//! A thin client over the Sheets v4 REST API that treats the first worksheet of a
//! spreadsheet as a table: row 1 holds the column names, every following row is a
//! record whose cells are addressed by those names.
//!
//! - [`SheetsClient`] - authenticated HTTP access to one API endpoint
//! - [`Worksheet`] - a worksheet whose title and header row have been loaded
//! - [`SheetRow`] - one data row with its 1-based sheet row number

pub mod auth;
pub mod giveaway;
pub mod wallet;

use std::collections::HashMap;

use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::Response;
use serde::Deserialize;
use url::Url;

use crate::{
    config::GoogleCredentials,
    data::sheets::auth::ServiceAccountAuth,
    error::{sheets::SheetsError, AppError},
};

pub const SHEETS_API_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";

#[derive(Deserialize)]
struct SpreadsheetMetadata {
    #[serde(default)]
    sheets: Vec<SheetMetadata>,
}

#[derive(Deserialize)]
struct SheetMetadata {
    properties: SheetProperties,
}

#[derive(Deserialize)]
struct SheetProperties {
    title: String,
    #[serde(default)]
    index: u32,
}

#[derive(Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

/// Authenticated client for the Google Sheets API.
///
/// Cheap to clone: the HTTP client and the token cache are shared.
#[derive(Clone)]
pub struct SheetsClient {
    http: reqwest::Client,
    auth: ServiceAccountAuth,
    base_url: Url,
}

impl SheetsClient {
    /// Creates a client authenticating as the given service account.
    ///
    /// # Arguments
    /// - `http` - Shared HTTP client
    /// - `credentials` - Service account email and private key
    ///
    /// # Returns
    /// - `Ok(SheetsClient)` - Client ready to open worksheets
    /// - `Err(AppError::SheetsErr)` - Private key could not be parsed
    pub fn new(http: reqwest::Client, credentials: &GoogleCredentials) -> Result<Self, AppError> {
        let auth = ServiceAccountAuth::new(http.clone(), credentials)?;
        let base_url = Url::parse(SHEETS_API_URL)
            .map_err(|_| SheetsError::InvalidBaseUrl(SHEETS_API_URL.to_string()))?;

        Ok(Self {
            http,
            auth,
            base_url,
        })
    }

    /// Overrides the Sheets API and token endpoints, used to target a mock server.
    pub fn with_endpoints(
        mut self,
        base_url: &str,
        token_url: impl Into<String>,
    ) -> Result<Self, AppError> {
        self.base_url =
            Url::parse(base_url).map_err(|_| SheetsError::InvalidBaseUrl(base_url.to_string()))?;
        self.auth = self.auth.with_token_url(token_url);
        Ok(self)
    }

    /// Loads the first worksheet's title and header row.
    ///
    /// # Arguments
    /// - `spreadsheet_id` - Id from the spreadsheet's URL
    ///
    /// # Returns
    /// - `Ok(Worksheet)` - Worksheet ready for row operations
    /// - `Err(SheetsError::NoWorksheet)` - Spreadsheet has no worksheets
    /// - `Err(AppError)` - Authentication or API failure
    pub async fn open_worksheet(&self, spreadsheet_id: &str) -> Result<Worksheet, AppError> {
        let mut url = self.endpoint(spreadsheet_id, &[])?;
        url.query_pairs_mut()
            .append_pair("fields", "sheets.properties(title,index)");

        let metadata: SpreadsheetMetadata = self.send(self.http.get(url)).await?.json().await?;

        let title = metadata
            .sheets
            .into_iter()
            .map(|sheet| sheet.properties)
            .min_by_key(|properties| properties.index)
            .map(|properties| properties.title)
            .ok_or_else(|| SheetsError::NoWorksheet(spreadsheet_id.to_string()))?;

        let header_range = format!("{}!1:1", quote_title(&title));
        let url = self.endpoint(spreadsheet_id, &["values", &header_range])?;
        let header: ValueRange = self.send(self.http.get(url)).await?.json().await?;

        let headers = header
            .values
            .into_iter()
            .next()
            .unwrap_or_default()
            .into_iter()
            .map(|name| name.trim().to_string())
            .collect();

        tracing::debug!("Loaded worksheet '{}' of spreadsheet {}", title, spreadsheet_id);

        Ok(Worksheet {
            client: self.clone(),
            spreadsheet_id: spreadsheet_id.to_string(),
            title,
            headers,
        })
    }

    fn endpoint(&self, spreadsheet_id: &str, segments: &[&str]) -> Result<Url, SheetsError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| SheetsError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(spreadsheet_id)
            .extend(segments);
        Ok(url)
    }

    /// Attaches a bearer token, sends the request, and maps non-success statuses.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Response, AppError> {
        let token = self.auth.access_token().await?;
        let response = request.bearer_auth(token).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SheetsError::Api { status, body }.into());
        }

        Ok(response)
    }
}

/// One data row of a worksheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRow {
    /// 1-based sheet row number, the header being row 1.
    pub row_number: u32,
    cells: HashMap<String, String>,
}

impl SheetRow {
    /// Value of the named column, empty when the column or cell is missing.
    pub fn get(&self, column: &str) -> &str {
        self.cells.get(column).map(String::as_str).unwrap_or("")
    }
}

/// A worksheet with its title and header row loaded.
#[derive(Clone)]
pub struct Worksheet {
    client: SheetsClient,
    spreadsheet_id: String,
    title: String,
    headers: Vec<String>,
}

impl Worksheet {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Zero-based position of a column in the header row.
    pub fn column_index(&self, column: &str) -> Result<usize, SheetsError> {
        self.headers
            .iter()
            .position(|header| header == column)
            .ok_or_else(|| SheetsError::MissingColumn(column.to_string()))
    }

    /// Ensures every named column exists in the header row.
    pub fn require_columns(&self, columns: &[&str]) -> Result<(), SheetsError> {
        columns
            .iter()
            .try_for_each(|column| self.column_index(column).map(|_| ()))
    }

    /// Reads every data row.
    ///
    /// A full-range read, there is no indexed lookup. Blank rows are kept so row
    /// numbers stay aligned with the sheet.
    ///
    /// # Returns
    /// - `Ok(Vec<SheetRow>)` - Data rows in sheet order, header excluded
    /// - `Err(AppError)` - Authentication or API failure
    pub async fn rows(&self) -> Result<Vec<SheetRow>, AppError> {
        let range = quote_title(&self.title);
        let url = self
            .client
            .endpoint(&self.spreadsheet_id, &["values", &range])?;

        let values: ValueRange = self
            .client
            .send(self.client.http.get(url))
            .await?
            .json()
            .await?;

        let rows = values
            .values
            .into_iter()
            .skip(1)
            .zip(2u32..)
            .map(|(cells, row_number)| SheetRow {
                row_number,
                cells: self
                    .headers
                    .iter()
                    .cloned()
                    .zip(cells)
                    .filter(|(header, _)| !header.is_empty())
                    .collect(),
            })
            .collect();

        Ok(rows)
    }

    /// Overwrites the named cells of one row, leaving its other cells untouched.
    ///
    /// # Arguments
    /// - `row_number` - 1-based sheet row number
    /// - `fields` - Column name and new value pairs
    ///
    /// # Returns
    /// - `Ok(())` - Cells written
    /// - `Err(SheetsError::MissingColumn)` - A column is not in the header row
    /// - `Err(AppError)` - Authentication or API failure
    pub async fn update_cells(
        &self,
        row_number: u32,
        fields: &[(&str, String)],
    ) -> Result<(), AppError> {
        let data = fields
            .iter()
            .map(|(column, value)| {
                let index = self.column_index(column)?;
                Ok(serde_json::json!({
                    "range": format!(
                        "{}!{}{}",
                        quote_title(&self.title),
                        column_letter(index),
                        row_number
                    ),
                    "values": [[value]],
                }))
            })
            .collect::<Result<Vec<_>, SheetsError>>()?;

        let url = self
            .client
            .endpoint(&self.spreadsheet_id, &["values:batchUpdate"])?;

        self.client
            .send(self.client.http.post(url).json(&serde_json::json!({
                "valueInputOption": "RAW",
                "data": data,
            })))
            .await?;

        Ok(())
    }

    /// Appends one row after the last row of the table.
    ///
    /// Cells are ordered by the header row; columns not named in `fields` are left
    /// blank.
    ///
    /// # Arguments
    /// - `fields` - Column name and value pairs
    ///
    /// # Returns
    /// - `Ok(())` - Row appended
    /// - `Err(SheetsError::MissingColumn)` - A column is not in the header row
    /// - `Err(AppError)` - Authentication or API failure
    pub async fn append_row(&self, fields: &[(&str, String)]) -> Result<(), AppError> {
        let mut cells = vec![String::new(); self.headers.len()];
        for (column, value) in fields {
            cells[self.column_index(column)?] = value.clone();
        }

        let range = format!("{}!A1:append", quote_title(&self.title));
        let mut url = self
            .client
            .endpoint(&self.spreadsheet_id, &["values", &range])?;
        url.query_pairs_mut()
            .append_pair("valueInputOption", "RAW")
            .append_pair("insertDataOption", "INSERT_ROWS");

        self.client
            .send(
                self.client
                    .http
                    .post(url)
                    .json(&serde_json::json!({ "values": [cells] })),
            )
            .await?;

        Ok(())
    }
}

/// Quotes a worksheet title for use in A1 notation.
fn quote_title(title: &str) -> String {
    format!("'{}'", title.replace('\'', "''"))
}

/// Converts a zero-based column index to its A1 column letters.
fn column_letter(index: usize) -> String {
    let mut letters = Vec::new();
    let mut remaining = index + 1;

    while remaining > 0 {
        let offset = (remaining - 1) % 26;
        letters.push((b'A' + offset as u8) as char);
        remaining = (remaining - 1) / 26;
    }

    letters.iter().rev().collect()
}

/// Formats a timestamp the way it is stored in sheet cells.
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parses a timestamp cell, `None` for blank or unreadable cells.
pub fn parse_timestamp(cell: &str) -> Option<DateTime<Utc>> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }

    match DateTime::parse_from_rfc3339(cell) {
        Ok(timestamp) => Some(timestamp.with_timezone(&Utc)),
        Err(e) => {
            tracing::debug!("Ignoring unreadable timestamp '{}': {}", cell, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use test_utils::fixture::service_account::{TEST_CLIENT_EMAIL, TEST_PRIVATE_KEY};
    use wiremock::{
        matchers::{body_json, header, method, path, path_regex, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    use super::*;

    /// Mounts token, metadata, and header responses for a worksheet titled `Wallets`.
    pub(crate) async fn mount_worksheet(
        server: &MockServer,
        spreadsheet_id: &str,
        headers: &[&str],
    ) {
        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "test-token",
                "expires_in": 3600
            })))
            .mount(server)
            .await;

        Mock::given(method("GET"))
            .and(path(format!("/v4/spreadsheets/{spreadsheet_id}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "sheets": [
                    { "properties": { "title": "Archive", "index": 1 } },
                    { "properties": { "title": "Wallets", "index": 0 } }
                ]
            })))
            .mount(server)
            .await;

        Mock::given(method("GET"))
            .and(path(format!("/v4/spreadsheets/{spreadsheet_id}/values/'Wallets'!1:1")))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "range": "Wallets!A1:Z1",
                "values": [headers]
            })))
            .mount(server)
            .await;
    }

    pub(crate) fn test_client(server: &MockServer) -> SheetsClient {
        SheetsClient::new(
            reqwest::Client::new(),
            &GoogleCredentials {
                client_email: TEST_CLIENT_EMAIL.to_string(),
                private_key: TEST_PRIVATE_KEY.to_string(),
            },
        )
        .unwrap()
        .with_endpoints(
            &format!("{}/v4/spreadsheets", server.uri()),
            format!("{}/token", server.uri()),
        )
        .unwrap()
    }

    #[test]
    fn converts_column_indexes_to_letters() {
        assert_eq!(column_letter(0), "A");
        assert_eq!(column_letter(4), "E");
        assert_eq!(column_letter(25), "Z");
        assert_eq!(column_letter(26), "AA");
        assert_eq!(column_letter(701), "ZZ");
        assert_eq!(column_letter(702), "AAA");
    }

    #[test]
    fn quotes_titles_with_apostrophes() {
        assert_eq!(quote_title("Wallets"), "'Wallets'");
        assert_eq!(quote_title("Bob's sheet"), "'Bob''s sheet'");
    }

    #[test]
    fn timestamps_use_millisecond_utc_format() {
        let timestamp = Utc.with_ymd_and_hms(2022, 1, 15, 10, 30, 0).unwrap();

        assert_eq!(format_timestamp(timestamp), "2022-01-15T10:30:00.000Z");
        assert_eq!(parse_timestamp("2022-01-15T10:30:00.000Z"), Some(timestamp));
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("yesterday"), None);
    }

    /// Tests loading the first worksheet by index and its trimmed header row.
    ///
    /// Expected: Ok with title `Wallets` and the header cells in order
    #[tokio::test]
    async fn opens_first_worksheet_with_headers() {
        let server = MockServer::start().await;
        mount_worksheet(&server, "sheet-1", &["id", " name ", "address"]).await;

        let worksheet = test_client(&server).open_worksheet("sheet-1").await.unwrap();

        assert_eq!(worksheet.title(), "Wallets");
        assert_eq!(worksheet.headers(), ["id", "name", "address"]);
        assert_eq!(worksheet.column_index("address").unwrap(), 2);
        assert!(matches!(
            worksheet.require_columns(&["id", "from"]),
            Err(SheetsError::MissingColumn(column)) if column == "from"
        ));
    }

    /// Tests that a spreadsheet without worksheets is reported.
    #[tokio::test]
    async fn reports_spreadsheet_without_worksheets() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "test-token",
                "expires_in": 3600
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v4/spreadsheets/empty"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let result = test_client(&server).open_worksheet("empty").await;

        assert!(matches!(
            result,
            Err(AppError::SheetsErr(SheetsError::NoWorksheet(id))) if id == "empty"
        ));
    }

    /// Tests mapping value rows to named cells with sheet row numbers.
    ///
    /// Short rows and blank rows are kept so numbering matches the sheet.
    #[tokio::test]
    async fn reads_rows_keyed_by_header() {
        let server = MockServer::start().await;
        mount_worksheet(&server, "sheet-1", &["id", "name", "address"]).await;
        Mock::given(method("GET"))
            .and(path("/v4/spreadsheets/sheet-1/values/'Wallets'"))
            .and(header("authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "values": [
                    ["id", "name", "address"],
                    ["1", "alice#0001", "addr-1"],
                    [],
                    ["3", "carol#0003"]
                ]
            })))
            .mount(&server)
            .await;

        let worksheet = test_client(&server).open_worksheet("sheet-1").await.unwrap();
        let rows = worksheet.rows().await.unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].row_number, 2);
        assert_eq!(rows[0].get("name"), "alice#0001");
        assert_eq!(rows[1].row_number, 3);
        assert_eq!(rows[1].get("id"), "");
        assert_eq!(rows[2].row_number, 4);
        assert_eq!(rows[2].get("address"), "");
        assert_eq!(rows[2].get("unknown"), "");
    }

    /// Tests writing only the named cells of a row.
    #[tokio::test]
    async fn updates_named_cells_in_place() {
        let server = MockServer::start().await;
        mount_worksheet(&server, "sheet-1", &["id", "name", "address"]).await;
        Mock::given(method("POST"))
            .and(path("/v4/spreadsheets/sheet-1/values:batchUpdate"))
            .and(body_json(serde_json::json!({
                "valueInputOption": "RAW",
                "data": [
                    { "range": "'Wallets'!B7", "values": [["bob#0002"]] },
                    { "range": "'Wallets'!C7", "values": [["addr-2"]] }
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let worksheet = test_client(&server).open_worksheet("sheet-1").await.unwrap();
        worksheet
            .update_cells(
                7,
                &[("name", "bob#0002".to_string()), ("address", "addr-2".to_string())],
            )
            .await
            .unwrap();
    }

    /// Tests appending a row ordered by the header with blanks for missing columns.
    #[tokio::test]
    async fn appends_row_in_header_order() {
        let server = MockServer::start().await;
        mount_worksheet(&server, "sheet-1", &["id", "name", "address", "note"]).await;
        Mock::given(method("POST"))
            .and(path_regex(r"^/v4/spreadsheets/sheet-1/values/.*:append$"))
            .and(query_param("valueInputOption", "RAW"))
            .and(query_param("insertDataOption", "INSERT_ROWS"))
            .and(body_json(serde_json::json!({
                "values": [["9", "", "addr-9", ""]]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let worksheet = test_client(&server).open_worksheet("sheet-1").await.unwrap();
        worksheet
            .append_row(&[("address", "addr-9".to_string()), ("id", "9".to_string())])
            .await
            .unwrap();
    }

    /// Tests surfacing an API error status.
    #[tokio::test]
    async fn reports_api_errors() {
        let server = MockServer::start().await;
        mount_worksheet(&server, "sheet-1", &["id"]).await;
        Mock::given(method("GET"))
            .and(path("/v4/spreadsheets/sheet-1/values/'Wallets'"))
            .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
            .mount(&server)
            .await;

        let worksheet = test_client(&server).open_worksheet("sheet-1").await.unwrap();

        match worksheet.rows().await {
            Err(AppError::SheetsErr(SheetsError::Api { status, .. })) => {
                assert_eq!(status, reqwest::StatusCode::TOO_MANY_REQUESTS)
            }
            other => panic!("expected API error, got {:?}", other.map(|rows| rows.len())),
        }
    }
}
