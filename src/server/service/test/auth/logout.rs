use super::*;

/// Tests that logout blocklists the token's jti.
///
/// Verifies that logging out twice with the same token is accepted.
///
/// Expected: Ok and the jti reported as revoked
#[tokio::test]
async fn revokes_token_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    let (_, claims) = tokens.issue(Role::Customer, 1)?;

    let service = AuthService::new(db, &tokens);
    service.logout(&claims).await?;
    service.logout(&claims).await?;

    assert!(
        TokenBlocklistRepository::new(db)
            .is_revoked(&claims.jti)
            .await?
    );

    Ok(())
}
