use super::*;

/// Tests access to an appointment.
///
/// Verifies that the appointment's vet and the patient's owner pass, while other vets and
/// other customers are denied.
///
/// Expected: Ok for participants, AccessDenied for everyone else
#[tokio::test]
async fn allows_participants_only() -> Result<(), AppError> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    let (owner, _patient, veterinarian, appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;
    let other_vet = factory::create_veterinarian(db).await?;
    let other_customer = factory::create_customer(db).await?;

    let permission = || [Permission::AppointmentAccess(appointment.id)];
    let allowed = [
        tokens.issue(Role::Customer, owner.id)?.1,
        tokens.issue(Role::Veterinarian, veterinarian.id)?.1,
    ];
    let denied = [
        tokens.issue(Role::Customer, other_customer.id)?.1,
        tokens.issue(Role::Veterinarian, other_vet.id)?.1,
    ];

    for claims in &allowed {
        assert!(AuthGuard::new(db, claims)
            .require(&permission())
            .await
            .is_ok());
    }
    for claims in &denied {
        assert_denied(AuthGuard::new(db, claims).require(&permission()).await);
    }

    Ok(())
}

/// Tests admin access to any appointment.
///
/// Expected: Ok(AuthUser)
#[tokio::test]
async fn allows_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _patient, _veterinarian, appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;
    let admin = factory::create_admin(db).await?;
    let (_, claims) = token_service().issue(Role::Veterinarian, admin.id)?;

    let result = AuthGuard::new(db, &claims)
        .require(&[Permission::AppointmentAccess(appointment.id)])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests access to an appointment that doesn't exist.
///
/// Only admins get through to the lookup; a non-admin veterinarian is denied the same way
/// as for an appointment they don't attend.
///
/// Expected: AccessDenied for the veterinarian, Ok for the admin
#[tokio::test]
async fn missing_appointment_denied_to_non_admin_veterinarian() -> Result<(), AppError> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let veterinarian = factory::create_veterinarian(db).await?;
    let admin = factory::create_admin(db).await?;

    let (_, claims) = token_service().issue(Role::Veterinarian, veterinarian.id)?;
    assert_denied(
        AuthGuard::new(db, &claims)
            .require(&[Permission::AppointmentAccess(999)])
            .await,
    );

    let (_, claims) = token_service().issue(Role::Veterinarian, admin.id)?;
    assert!(AuthGuard::new(db, &claims)
        .require(&[Permission::AppointmentAccess(999)])
        .await
        .is_ok());

    Ok(())
}
