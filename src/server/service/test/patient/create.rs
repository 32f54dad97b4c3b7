use super::*;

/// Tests registering a patient.
///
/// Expected: Ok with owner summary attached and no appointments
#[tokio::test]
async fn creates_patient_with_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_customer(db).await?;

    let details = PatientService::new(db)
        .create(create_params(customer.id, "Bugs"))
        .await?;

    assert_eq!(details.patient.name, "Bugs");
    assert_eq!(details.patient.species, Species::Rabbit);
    assert_eq!(details.owner.id, customer.id);
    assert!(details.appointments.is_empty());

    Ok(())
}

/// Tests registering for a customer that doesn't exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_customer() -> Result<(), AppError> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PatientService::new(db)
        .create(create_params(999, "Bugs"))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests a second patient with the same name for the same owner.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_duplicate_name_for_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_customer(db).await?;
    let service = PatientService::new(db);

    service.create(create_params(customer.id, "Bugs")).await?;
    let result = service.create(create_params(customer.id, "Bugs")).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests age and weight validation.
///
/// Expected: Err(AppError::BadRequest) for negative age and zero weight
#[tokio::test]
async fn rejects_invalid_measurements() -> Result<(), AppError> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::create_customer(db).await?;
    let service = PatientService::new(db);

    let negative_age = CreatePatientParams {
        age: -1,
        ..create_params(customer.id, "Bugs")
    };
    let zero_weight = CreatePatientParams {
        weight: 0.0,
        ..create_params(customer.id, "Bugs")
    };

    assert!(matches!(
        service.create(negative_age).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.create(zero_weight).await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}
