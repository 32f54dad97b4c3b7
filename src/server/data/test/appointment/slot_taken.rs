use super::*;

/// Tests slot checks for veterinarian and patient.
///
/// Expected: taken for the booked vet and patient at that slot, free at other times,
/// for other participants and when the booked appointment is excluded
#[tokio::test]
async fn detects_taken_slots() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_customer, patient, veterinarian, appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;
    let other_vet = factory::create_veterinarian(db).await?;

    let repo = AppointmentRepository::new(db);
    let (day, at) = (appointment.date, appointment.time);

    assert!(
        repo.veterinarian_slot_taken(day, at, veterinarian.id, None)
            .await?
    );
    assert!(repo.patient_slot_taken(day, at, patient.id, None).await?);
    assert!(!repo.veterinarian_slot_taken(day, at, other_vet.id, None).await?);
    assert!(
        !repo
            .veterinarian_slot_taken(day, time(16, 45), veterinarian.id, None)
            .await?
    );
    assert!(
        !repo
            .patient_slot_taken(day, at, patient.id, Some(appointment.id))
            .await?
    );

    Ok(())
}
