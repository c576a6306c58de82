use super::*;

/// Tests listing wallets from an empty table.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_when_no_wallets() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_wallet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WalletRepository::new(db.clone());
    let wallets = repo.get_all().await?;

    assert!(wallets.is_empty());

    Ok(())
}

/// Tests that wallets are listed oldest first.
///
/// Verifies ordering by creation time regardless of insertion order.
///
/// Expected: Ok(wallets) ordered by created ascending
#[tokio::test]
async fn orders_by_created() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_wallet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::wallet::WalletFactory::new(db)
        .id("newer")
        .created(Utc.with_ymd_and_hms(2022, 6, 1, 0, 0, 0).unwrap())
        .build()
        .await?;
    factory::wallet::WalletFactory::new(db)
        .id("older")
        .created(Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap())
        .build()
        .await?;

    let repo = WalletRepository::new(db.clone());
    let ids: Vec<String> = repo.get_all().await?.into_iter().map(|w| w.id).collect();

    assert_eq!(ids, vec!["older".to_string(), "newer".to_string()]);

    Ok(())
}
