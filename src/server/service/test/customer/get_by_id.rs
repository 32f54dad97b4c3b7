use super::*;

/// Tests fetching an unknown customer.
///
/// Expected: Err(AppError::NotFound) naming the ID
#[tokio::test]
async fn fails_for_unknown_customer() -> Result<(), AppError> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CustomerService::new(db).get_by_id(42).await;

    match result {
        Err(AppError::NotFound(msg)) => assert_eq!(msg, "Customer with id 42 not found"),
        other => panic!("Expected NotFound, got: {:?}", other.map(|c| c.id)),
    }

    Ok(())
}
