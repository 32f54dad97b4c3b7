use super::*;

/// Tests loading an appointment with its participants.
///
/// Expected: Ok(Some) with veterinarian, patient and owner attached
#[tokio::test]
async fn loads_participants() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, patient, veterinarian, appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;

    let details = AppointmentRepository::new(db)
        .get_details(appointment.id)
        .await?
        .unwrap();

    assert_eq!(details.appointment.id, appointment.id);
    assert_eq!(details.veterinarian.id, veterinarian.id);
    assert_eq!(details.patient.id, patient.id);
    assert_eq!(details.owner.id, customer.id);

    Ok(())
}

/// Tests listing appointments by veterinarian and by customer.
///
/// Verifies each listing only contains appointments the participant is part of.
///
/// Expected: one appointment per listing, none for a customer without patients
#[tokio::test]
async fn lists_by_participant() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, _patient, veterinarian, appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;
    factory::helpers::create_appointment_with_dependencies(db).await?;
    let lonely = factory::create_customer(db).await?;

    let repo = AppointmentRepository::new(db);

    let by_vet = repo.get_details_by_veterinarian(veterinarian.id).await?;
    assert_eq!(by_vet.len(), 1);
    assert_eq!(by_vet[0].appointment.id, appointment.id);

    let by_customer = repo.get_details_by_customer(customer.id).await?;
    assert_eq!(by_customer.len(), 1);
    assert_eq!(by_customer[0].appointment.id, appointment.id);

    assert!(repo.get_details_by_customer(lonely.id).await?.is_empty());
    assert_eq!(repo.get_all_details().await?.len(), 2);

    Ok(())
}
