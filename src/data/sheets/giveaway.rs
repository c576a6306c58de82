//! Giveaway winner list read from a spreadsheet.

use async_trait::async_trait;

use crate::{
    data::{sheets::SheetsClient, GiveawaySource},
    error::AppError,
    model::giveaway::GiveawayEntry,
};

/// [`GiveawaySource`] over a worksheet with `id` and `from` columns.
///
/// The worksheet is reopened on every read so header edits made between sync runs are
/// picked up.
#[derive(Clone)]
pub struct SheetGiveawaySource {
    client: SheetsClient,
    spreadsheet_id: String,
}

impl SheetGiveawaySource {
    pub fn new(client: SheetsClient, spreadsheet_id: impl Into<String>) -> Self {
        Self {
            client,
            spreadsheet_id: spreadsheet_id.into(),
        }
    }
}

#[async_trait]
impl GiveawaySource for SheetGiveawaySource {
    async fn list_entries(&self) -> Result<Vec<GiveawayEntry>, AppError> {
        let worksheet = self.client.open_worksheet(&self.spreadsheet_id).await?;
        worksheet.require_columns(&["id", "from"])?;

        let entries = worksheet
            .rows()
            .await?
            .into_iter()
            .map(|row| GiveawayEntry {
                id: row.get("id").trim().to_string(),
                from: row.get("from").to_string(),
            })
            .filter(|entry| !entry.id.is_empty())
            .collect();

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    use super::*;
    use crate::data::sheets::tests::{mount_worksheet, test_client};

    /// Tests reading entries and skipping rows without an id.
    #[tokio::test]
    async fn lists_entries_with_ids() {
        let server = MockServer::start().await;
        mount_worksheet(&server, "giveaways", &["id", "from"]).await;
        Mock::given(method("GET"))
            .and(path("/v4/spreadsheets/giveaways/values/'Wallets'"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "values": [
                    ["id", "from"],
                    [" 123456789 ", "Partner DAO"],
                    ["", "nobody"],
                    ["987654321"]
                ]
            })))
            .mount(&server)
            .await;

        let source = SheetGiveawaySource::new(test_client(&server), "giveaways");
        let entries = source.list_entries().await.unwrap();

        assert_eq!(
            entries,
            vec![
                GiveawayEntry {
                    id: "123456789".to_string(),
                    from: "Partner DAO".to_string(),
                },
                GiveawayEntry {
                    id: "987654321".to_string(),
                    from: String::new(),
                },
            ]
        );
    }
}
