use super::*;

/// Tests deleting a patient.
///
/// Expected: Ok with the deleted patient, NotFound for an unknown ID
#[tokio::test]
async fn returns_deleted_patient() -> Result<(), AppError> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_customer, patient) = factory::helpers::create_patient_with_owner(db).await?;
    let service = PatientService::new(db);

    let deleted = service.delete(patient.id).await?;

    assert_eq!(deleted.name, patient.name);
    assert!(matches!(
        service.delete(patient.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
