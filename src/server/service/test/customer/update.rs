use super::*;

/// Tests changing the password.
///
/// Verifies that the new password is hashed before storage.
///
/// Expected: Ok with a new argon2 hash different from the old one
#[tokio::test]
async fn rehashes_new_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_customer(db).await?;

    let updated = CustomerService::new(db)
        .update(UpdateCustomerParams {
            password: Some("NewPass12!".to_string()),
            ..empty_update(customer.id)
        })
        .await?;

    assert_ne!(updated.password_hash, customer.password);
    assert!(updated.password_hash.starts_with("$argon2"));

    Ok(())
}

/// Tests moving to an email another customer uses.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_taken_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_customer(db).await?;
    let other = factory::create_customer(db).await?;

    let result = CustomerService::new(db)
        .update(UpdateCustomerParams {
            email: Some(other.email.clone()),
            ..empty_update(customer.id)
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests keeping one's own email during an update.
///
/// Expected: Ok, a customer's own email is not a conflict
#[tokio::test]
async fn accepts_own_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_customer(db).await?;

    let updated = CustomerService::new(db)
        .update(UpdateCustomerParams {
            email: Some(customer.email.clone()),
            ..empty_update(customer.id)
        })
        .await?;

    assert_eq!(updated.email, customer.email);

    Ok(())
}

/// Tests field validation on update.
///
/// Expected: Err(AppError::BadRequest) for an invalid contact number
#[tokio::test]
async fn rejects_invalid_contact_number() -> Result<(), AppError> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_customer(db).await?;

    let result = CustomerService::new(db)
        .update(UpdateCustomerParams {
            contact_number: Some(12),
            ..empty_update(customer.id)
        })
        .await;

    match result {
        Err(AppError::BadRequest(msg)) => assert_eq!(msg, "Invalid contact number"),
        other => panic!("Expected BadRequest, got: {:?}", other.map(|c| c.id)),
    }

    Ok(())
}
