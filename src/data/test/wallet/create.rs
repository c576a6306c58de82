use super::*;

/// Tests inserting a new wallet.
///
/// Verifies that the repository stores every field of the record and returns it
/// unchanged.
///
/// Expected: Ok(record) with matching fields
#[tokio::test]
async fn creates_wallet() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_wallet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = Utc.with_ymd_and_hms(2022, 3, 1, 12, 0, 0).unwrap();
    let record = WalletRecord {
        id: "123456789".to_string(),
        name: "holder#0001".to_string(),
        address: fixture::wallet::address(1),
        created: Some(created),
        updated: None,
    };

    let repo = WalletRepository::new(db.clone());
    let stored = repo.create(&record).await?;

    assert_eq!(stored, record);

    Ok(())
}

/// Tests stamping a wallet that has no creation time.
///
/// Verifies that the repository fills in `created` since the column is required.
///
/// Expected: Ok(record) with `created` set
#[tokio::test]
async fn stamps_missing_created() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_wallet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let record = WalletRecord {
        id: "123456789".to_string(),
        name: "holder#0001".to_string(),
        address: fixture::wallet::address(1),
        created: None,
        updated: None,
    };

    let repo = WalletRepository::new(db.clone());
    let stored = repo.create(&record).await?;

    assert!(stored.created.is_some());

    Ok(())
}

/// Tests inserting a second wallet with an id already in use.
///
/// Verifies that the primary key rejects a duplicate registration.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_for_duplicate_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_wallet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::wallet::WalletFactory::new(db)
        .id("123456789")
        .build()
        .await?;

    let repo = WalletRepository::new(db.clone());
    let result = repo
        .create(&WalletRecord {
            id: existing.id.clone(),
            name: "other#0002".to_string(),
            address: fixture::wallet::address(2),
            created: None,
            updated: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
