use super::*;

fn empty_update(id: i32) -> UpdateCustomerParams {
    UpdateCustomerParams {
        id,
        first_name: None,
        last_name: None,
        email: None,
        password: None,
        contact_number: None,
    }
}

/// Tests partial update of a customer.
///
/// Verifies that only the provided fields change and the password hash is kept when
/// no new hash is given.
///
/// Expected: Ok(Some) with first name and contact number changed
#[tokio::test]
async fn updates_only_given_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_customer(db).await?;

    let updated = CustomerRepository::new(db)
        .update(
            UpdateCustomerParams {
                first_name: Some("Rod".to_string()),
                contact_number: Some(498765432),
                ..empty_update(customer.id)
            },
            None,
        )
        .await?
        .unwrap();

    assert_eq!(updated.first_name, "Rod");
    assert_eq!(updated.last_name, customer.last_name);
    assert_eq!(updated.email, customer.email);
    assert_eq!(updated.contact_number, 498765432);
    assert_eq!(updated.password_hash, customer.password);

    Ok(())
}

/// Tests replacing the password hash.
///
/// Expected: Ok(Some) with the new hash stored
#[tokio::test]
async fn replaces_password_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_customer(db).await?;

    let updated = CustomerRepository::new(db)
        .update(empty_update(customer.id), Some("new-hash".to_string()))
        .await?
        .unwrap();

    assert_eq!(updated.password_hash, "new-hash");

    Ok(())
}

/// Tests updating a customer that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_customer() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CustomerRepository::new(db)
        .update(empty_update(999), None)
        .await?;

    assert!(result.is_none());

    Ok(())
}
