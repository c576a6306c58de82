//! Wallet store backed by the first worksheet of a spreadsheet.

use async_trait::async_trait;

use crate::{
    data::{
        sheets::{format_timestamp, parse_timestamp, SheetsClient, Worksheet},
        WalletStore,
    },
    error::AppError,
    model::wallet::{WalletRecord, WalletRow},
};

const ID: &str = "id";
const NAME: &str = "name";
const ADDRESS: &str = "address";
const CREATED: &str = "created";
const UPDATED: &str = "updated";

/// [`WalletStore`] over a worksheet with `id`, `name`, `address`, `created`, and
/// `updated` columns.
///
/// Lookups are a full read of the worksheet, the Sheets API has no keyed access.
#[derive(Clone)]
pub struct SheetWalletStore {
    worksheet: Worksheet,
}

impl SheetWalletStore {
    /// Authenticates, loads the worksheet metadata, and checks its header row.
    ///
    /// # Arguments
    /// - `client` - Authenticated Sheets client
    /// - `spreadsheet_id` - Id of the wallet spreadsheet
    ///
    /// # Returns
    /// - `Ok(SheetWalletStore)` - Store ready for reads and writes
    /// - `Err(SheetsError::MissingColumn)` - Header row lacks a wallet column
    /// - `Err(AppError)` - Authentication or API failure
    pub async fn open(client: &SheetsClient, spreadsheet_id: &str) -> Result<Self, AppError> {
        let worksheet = client.open_worksheet(spreadsheet_id).await?;
        worksheet.require_columns(&[ID, NAME, ADDRESS, CREATED, UPDATED])?;

        tracing::info!(
            "Wallet spreadsheet loaded, using worksheet '{}'",
            worksheet.title()
        );

        Ok(Self { worksheet })
    }
}

#[async_trait]
impl WalletStore for SheetWalletStore {
    async fn list_wallets(&self) -> Result<Vec<WalletRow>, AppError> {
        let rows = self
            .worksheet
            .rows()
            .await?
            .into_iter()
            .map(|row| WalletRow {
                row_number: row.row_number,
                record: WalletRecord {
                    id: row.get(ID).to_string(),
                    name: row.get(NAME).to_string(),
                    address: row.get(ADDRESS).to_string(),
                    created: parse_timestamp(row.get(CREATED)),
                    updated: parse_timestamp(row.get(UPDATED)),
                },
            })
            .collect();

        Ok(rows)
    }

    async fn update_wallet(&self, row: &WalletRow) -> Result<(), AppError> {
        let record = &row.record;

        self.worksheet
            .update_cells(
                row.row_number,
                &[
                    (NAME, record.name.clone()),
                    (ADDRESS, record.address.clone()),
                    (UPDATED, record.updated.map(format_timestamp).unwrap_or_default()),
                ],
            )
            .await
    }

    async fn append_wallet(&self, record: &WalletRecord) -> Result<(), AppError> {
        let mut fields = vec![
            (ID, record.id.clone()),
            (NAME, record.name.clone()),
            (ADDRESS, record.address.clone()),
        ];
        if let Some(created) = record.created {
            fields.push((CREATED, format_timestamp(created)));
        }
        if let Some(updated) = record.updated {
            fields.push((UPDATED, format_timestamp(updated)));
        }

        self.worksheet.append_row(&fields).await
    }
}
