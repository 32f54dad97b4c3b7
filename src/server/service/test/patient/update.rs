use super::*;

/// Tests renaming a patient to a name its owner already uses.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_rename_to_taken_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_customer(db).await?;
    factory::patient::PatientFactory::new(db, customer.id)
        .name("Rex")
        .build()
        .await?;
    let other = factory::patient::PatientFactory::new(db, customer.id)
        .name("Max")
        .build()
        .await?;

    let result = PatientService::new(db)
        .update(UpdatePatientParams {
            name: Some("Rex".to_string()),
            ..empty_update(other.id)
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests moving a patient to a new owner.
///
/// Expected: Ok with the new owner attached
#[tokio::test]
async fn moves_patient_to_new_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_customer, patient) = factory::helpers::create_patient_with_owner(db).await?;
    let new_owner = factory::create_customer(db).await?;

    let details = PatientService::new(db)
        .update(UpdatePatientParams {
            customer_id: Some(new_owner.id),
            ..empty_update(patient.id)
        })
        .await?;

    assert_eq!(details.patient.customer_id, new_owner.id);
    assert_eq!(details.owner.email, new_owner.email);

    Ok(())
}

/// Tests moving a patient to an owner that doesn't exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_new_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_customer, patient) = factory::helpers::create_patient_with_owner(db).await?;

    let result = PatientService::new(db)
        .update(UpdatePatientParams {
            customer_id: Some(999),
            ..empty_update(patient.id)
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
