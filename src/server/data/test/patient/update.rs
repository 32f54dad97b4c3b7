use super::*;

/// Tests partial update including moving the patient to another owner.
///
/// Expected: Ok(Some) with weight and owner changed, name kept
#[tokio::test]
async fn updates_fields_and_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_customer, patient) = factory::helpers::create_patient_with_owner(db).await?;
    let new_owner = factory::create_customer(db).await?;

    let updated = PatientRepository::new(db)
        .update(UpdatePatientParams {
            id: patient.id,
            name: None,
            age: None,
            weight: Some(20.0),
            sex: None,
            species: None,
            customer_id: Some(new_owner.id),
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, patient.name);
    assert_eq!(updated.weight, 20.0);
    assert_eq!(updated.customer_id, new_owner.id);

    Ok(())
}
