use super::*;

/// Tests admin veterinarian passes the admin check.
///
/// Expected: Ok(AuthUser) with is_admin
#[tokio::test]
async fn grants_access_to_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let (_, claims) = token_service().issue(Role::Veterinarian, admin.id)?;

    let user = AuthGuard::new(db, &claims)
        .require(&[Permission::Admin])
        .await?;

    assert!(user.is_admin());

    Ok(())
}

/// Tests non-admin accounts are denied.
///
/// Expected: Err(AuthError::AccessDenied) for a regular vet and a customer
#[tokio::test]
async fn denies_non_admins() -> Result<(), AppError> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    let veterinarian = factory::create_veterinarian(db).await?;
    let customer = factory::create_customer(db).await?;
    let (_, vet_claims) = tokens.issue(Role::Veterinarian, veterinarian.id)?;
    let (_, customer_claims) = tokens.issue(Role::Customer, customer.id)?;

    assert_denied(
        AuthGuard::new(db, &vet_claims)
            .require(&[Permission::Admin])
            .await,
    );
    assert_denied(
        AuthGuard::new(db, &customer_claims)
            .require(&[Permission::Admin])
            .await,
    );

    Ok(())
}

/// Tests that the admin flag is read from the database on each request.
///
/// Verifies that a token issued before the flag was revoked no longer grants admin access.
///
/// Expected: Err(AuthError::AccessDenied) after the flag is cleared
#[tokio::test]
async fn reads_admin_flag_per_request() -> Result<(), AppError> {
    use sea_orm::{ActiveModelTrait, ActiveValue};

    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let (_, claims) = token_service().issue(Role::Veterinarian, admin.id)?;

    let mut active: entity::veterinarian::ActiveModel = admin.into();
    active.is_admin = ActiveValue::Set(false);
    active.update(db).await?;

    assert_denied(
        AuthGuard::new(db, &claims)
            .require(&[Permission::Admin])
            .await,
    );

    Ok(())
}
