use super::*;

/// Tests revoking a token ID.
///
/// Expected: only the revoked jti is reported as revoked
#[tokio::test]
async fn revokes_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::TokenBlocklist)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TokenBlocklistRepository::new(db);
    repo.revoke("jti-1").await?;

    assert!(repo.is_revoked("jti-1").await?);
    assert!(!repo.is_revoked("jti-2").await?);

    Ok(())
}
