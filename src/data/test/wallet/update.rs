use super::*;

/// Tests updating the mutable fields of a wallet.
///
/// Verifies that name, address, and updated are overwritten while created is kept.
///
/// Expected: Ok(record) with new fields and original created
#[tokio::test]
async fn updates_wallet_and_keeps_created() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_wallet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();
    let existing = factory::wallet::WalletFactory::new(db)
        .id("123456789")
        .created(created)
        .build()
        .await?;

    let updated = Utc.with_ymd_and_hms(2022, 2, 1, 0, 0, 0).unwrap();
    let repo = WalletRepository::new(db.clone());
    let stored = repo
        .update(&WalletRecord {
            id: existing.id.clone(),
            name: "renamed#0002".to_string(),
            address: fixture::wallet::address(99),
            // Ignored on update
            created: Some(updated),
            updated: Some(updated),
        })
        .await?;

    assert_eq!(stored.name, "renamed#0002");
    assert_eq!(stored.address, fixture::wallet::address(99));
    assert_eq!(stored.created, Some(created));
    assert_eq!(stored.updated, Some(updated));

    Ok(())
}

/// Tests updating a wallet that does not exist.
///
/// Expected: Err(DbErr::RecordNotUpdated)
#[tokio::test]
async fn fails_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_wallet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WalletRepository::new(db.clone());
    let result = repo
        .update(&WalletRecord {
            id: "404".to_string(),
            name: "ghost#0000".to_string(),
            address: fixture::wallet::address(1),
            created: None,
            updated: Some(Utc::now()),
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotUpdated)));

    Ok(())
}
