use super::*;

/// Tests that deleting a customer cascades to patients and appointments.
///
/// Verifies the FK cascade chain customers -> patients -> appointments while the
/// veterinarian is left in place.
///
/// Expected: Ok(true) and no remaining patient or appointment rows
#[tokio::test]
async fn cascades_to_patients_and_appointments() -> Result<(), DbErr> {
    use sea_orm::{EntityTrait, PaginatorTrait};

    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, _patient, veterinarian, _appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;

    let deleted = CustomerRepository::new(db).delete(customer.id).await?;

    assert!(deleted);
    assert_eq!(entity::prelude::Patient::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Appointment::find().count(db).await?, 0);
    assert!(entity::prelude::Veterinarian::find_by_id(veterinarian.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting a customer that doesn't exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_customer() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = CustomerRepository::new(db).delete(999).await?;

    assert!(!deleted);

    Ok(())
}
