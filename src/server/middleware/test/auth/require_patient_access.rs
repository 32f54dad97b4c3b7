use super::*;

/// Tests read access to a patient.
///
/// Verifies that the owner and any veterinarian pass while other customers are denied.
///
/// Expected: Ok for owner and vet, AccessDenied for a stranger
#[tokio::test]
async fn allows_owner_and_staff() -> Result<(), AppError> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    let (owner, patient) = factory::helpers::create_patient_with_owner(db).await?;
    let stranger = factory::create_customer(db).await?;
    let veterinarian = factory::create_veterinarian(db).await?;

    let (_, owner_claims) = tokens.issue(Role::Customer, owner.id)?;
    let (_, stranger_claims) = tokens.issue(Role::Customer, stranger.id)?;
    let (_, vet_claims) = tokens.issue(Role::Veterinarian, veterinarian.id)?;
    let permission = || [Permission::PatientAccess(patient.id)];

    assert!(AuthGuard::new(db, &owner_claims)
        .require(&permission())
        .await
        .is_ok());
    assert!(AuthGuard::new(db, &vet_claims)
        .require(&permission())
        .await
        .is_ok());
    assert_denied(
        AuthGuard::new(db, &stranger_claims)
            .require(&permission())
            .await,
    );

    Ok(())
}

/// Tests modify access to a patient.
///
/// Verifies that a regular veterinarian may read but not modify a patient.
///
/// Expected: AccessDenied for the vet, Ok for owner and admin
#[tokio::test]
async fn restricts_modification_to_owner_and_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    let (owner, patient) = factory::helpers::create_patient_with_owner(db).await?;
    let veterinarian = factory::create_veterinarian(db).await?;
    let admin = factory::create_admin(db).await?;

    let (_, owner_claims) = tokens.issue(Role::Customer, owner.id)?;
    let (_, vet_claims) = tokens.issue(Role::Veterinarian, veterinarian.id)?;
    let (_, admin_claims) = tokens.issue(Role::Veterinarian, admin.id)?;
    let permission = || [Permission::PatientOwner(patient.id)];

    assert!(AuthGuard::new(db, &owner_claims)
        .require(&permission())
        .await
        .is_ok());
    assert!(AuthGuard::new(db, &admin_claims)
        .require(&permission())
        .await
        .is_ok());
    assert_denied(
        AuthGuard::new(db, &vet_claims)
            .require(&permission())
            .await,
    );

    Ok(())
}

/// Tests a customer probing a patient that doesn't exist.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_customer_for_missing_patient() -> Result<(), AppError> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_customer(db).await?;
    let (_, claims) = token_service().issue(Role::Customer, customer.id)?;

    assert_denied(
        AuthGuard::new(db, &claims)
            .require(&[Permission::PatientAccess(999)])
            .await,
    );

    Ok(())
}
