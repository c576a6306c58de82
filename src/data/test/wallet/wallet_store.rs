use super::*;

/// Tests listing wallets through the store trait.
///
/// Verifies that row numbers are assigned from 1 in listing order.
///
/// Expected: Ok(rows) numbered 1 and 2
#[tokio::test]
async fn lists_rows_numbered_from_one() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_wallet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::wallet::WalletFactory::new(db)
        .created(Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap())
        .build()
        .await?;
    factory::wallet::WalletFactory::new(db)
        .created(Utc.with_ymd_and_hms(2022, 1, 2, 0, 0, 0).unwrap())
        .build()
        .await?;

    let store = WalletRepository::new(db.clone());
    let rows = store.list_wallets().await.unwrap();

    let numbers: Vec<u32> = rows.iter().map(|row| row.row_number).collect();
    assert_eq!(numbers, vec![1, 2]);

    Ok(())
}

/// Tests appending and then updating through the store trait.
///
/// Expected: Ok with the appended wallet carrying the updated address
#[tokio::test]
async fn appends_then_updates_wallet() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_wallet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let store = WalletRepository::new(db.clone());
    let record = WalletRecord {
        id: "123456789".to_string(),
        name: "holder#0001".to_string(),
        address: fixture::wallet::address(1),
        created: Some(Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap()),
        updated: None,
    };
    store.append_wallet(&record).await.unwrap();

    let mut row = store.list_wallets().await.unwrap().remove(0);
    row.record.address = fixture::wallet::address(2);
    row.record.updated = Some(Utc.with_ymd_and_hms(2022, 1, 3, 0, 0, 0).unwrap());
    store.update_wallet(&row).await.unwrap();

    let stored = store.find_by_id("123456789").await?.unwrap();
    assert_eq!(stored.address, fixture::wallet::address(2));
    assert_eq!(stored.created, record.created);

    Ok(())
}
