use crate::{
    model::auth::Role,
    server::{
        data::token_blocklist::TokenBlocklistRepository,
        error::{auth::AuthError, AppError},
        middleware::auth::{AuthGuard, Permission},
        model::auth::AuthUser,
        util::jwt::TokenService,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod require_admin;
mod require_appointment_access;
mod require_patient_access;

fn token_service() -> TokenService {
    TokenService::new("test-secret", chrono::Duration::hours(1))
}

fn assert_denied(result: Result<AuthUser, AppError>) {
    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(_))) => {}
        Err(e) => panic!("Expected AccessDenied error, got: {:?}", e),
        Ok(user) => panic!("Expected AccessDenied error, got user {}", user.id()),
    }
}

/// Tests empty permission list grants access.
///
/// Verifies that when no permissions are required, any authenticated
/// account with a valid database record is granted access.
///
/// Expected: Ok(AuthUser)
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_customer(db).await?;
    let (_, claims) = token_service().issue(Role::Customer, customer.id)?;

    let user = AuthGuard::new(db, &claims).require(&[]).await?;

    assert_eq!(user.customer_id(), Some(customer.id));

    Ok(())
}

/// Tests that if any permission fails, the whole check fails.
///
/// Expected: Err(AuthError::AccessDenied) when Staff holds but Admin doesn't
#[tokio::test]
async fn fails_if_any_permission_missing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let veterinarian = factory::create_veterinarian(db).await?;
    let (_, claims) = token_service().issue(Role::Veterinarian, veterinarian.id)?;

    let guard = AuthGuard::new(db, &claims);

    assert!(guard.require(&[Permission::Staff]).await.is_ok());
    assert_denied(
        guard
            .require(&[Permission::Staff, Permission::Admin])
            .await,
    );

    Ok(())
}
