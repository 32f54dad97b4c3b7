use super::*;

/// Tests that deleting a patient removes its appointments but keeps the owner.
///
/// Expected: Ok(true), no appointments left, customer kept
#[tokio::test]
async fn cascades_to_appointments() -> Result<(), DbErr> {
    use sea_orm::{EntityTrait, PaginatorTrait};

    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, patient, _veterinarian, _appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;

    let deleted = PatientRepository::new(db).delete(patient.id).await?;

    assert!(deleted);
    assert_eq!(entity::prelude::Appointment::find().count(db).await?, 0);
    assert!(entity::prelude::Customer::find_by_id(customer.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}
