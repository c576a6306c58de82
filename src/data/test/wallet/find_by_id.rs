use super::*;

/// Tests finding an existing wallet by owner id.
///
/// Expected: Ok(Some(record))
#[tokio::test]
async fn finds_existing_wallet() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_wallet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let wallet = factory::create_wallet(db).await?;

    let repo = WalletRepository::new(db.clone());
    let found = repo.find_by_id(&wallet.id).await?;

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.address, wallet.address);
    assert_eq!(found.name, wallet.name);

    Ok(())
}

/// Tests looking up an id that has no wallet.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_wallet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_wallet(db).await?;

    let repo = WalletRepository::new(db.clone());
    let found = repo.find_by_id("does-not-exist").await?;

    assert!(found.is_none());

    Ok(())
}
