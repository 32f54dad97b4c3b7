use super::*;

fn admin_config(email: &str) -> AdminBootstrap {
    AdminBootstrap {
        email: email.to_string(),
        password: "AdminPass1!".to_string(),
        first_name: "Clinic".to_string(),
        last_name: "Admin".to_string(),
    }
}

/// Tests creating the first admin on an empty database.
///
/// Expected: Ok(Some) with an admin veterinarian that can log in
#[tokio::test]
async fn creates_admin_when_none_exist() -> Result<(), AppError> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    let service = AuthService::new(db, &tokens);
    let admin = service
        .bootstrap_admin(&admin_config("admin@vet.com"))
        .await?
        .unwrap();

    assert!(admin.is_admin);
    assert_eq!(admin.email, "admin@vet.com");
    assert!(service
        .login_veterinarian("admin@vet.com", "AdminPass1!")
        .await
        .is_ok());

    Ok(())
}

/// Tests promoting an existing veterinarian with the configured email.
///
/// Expected: Ok(Some) with the same veterinarian now admin
#[tokio::test]
async fn promotes_existing_veterinarian() -> Result<(), AppError> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    let veterinarian = factory::veterinarian::VeterinarianFactory::new(db)
        .email("head@vet.com")
        .build()
        .await?;

    let admin = AuthService::new(db, &tokens)
        .bootstrap_admin(&admin_config("head@vet.com"))
        .await?
        .unwrap();

    assert_eq!(admin.id, veterinarian.id);
    assert!(admin.is_admin);

    Ok(())
}

/// Tests that nothing happens when an admin already exists.
///
/// Expected: Ok(None)
#[tokio::test]
async fn skips_when_admin_exists() -> Result<(), AppError> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    factory::create_admin(db).await?;

    let result = AuthService::new(db, &tokens)
        .bootstrap_admin(&admin_config("admin@vet.com"))
        .await?;

    assert!(result.is_none());

    Ok(())
}
