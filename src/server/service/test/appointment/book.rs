use super::*;

/// Tests booking a free slot.
///
/// Expected: Ok with participants attached
#[tokio::test]
async fn books_free_slot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, patient) = factory::helpers::create_patient_with_owner(db).await?;
    let veterinarian = factory::create_veterinarian(db).await?;

    let details = AppointmentService::new(db)
        .book(CreateAppointmentParams {
            date: date(1),
            time: time(11, 45),
            veterinarian_id: veterinarian.id,
            patient_id: patient.id,
        })
        .await?;

    assert_eq!(details.appointment.time, time(11, 45));
    assert_eq!(details.veterinarian.id, veterinarian.id);
    assert_eq!(details.patient.id, patient.id);
    assert_eq!(details.owner.id, customer.id);

    Ok(())
}

/// Tests times that are not on a quarter hour.
///
/// Expected: Err(AppError::BadRequest) with "Invalid time"
#[tokio::test]
async fn rejects_off_quarter_time() -> Result<(), AppError> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_customer, patient) = factory::helpers::create_patient_with_owner(db).await?;
    let veterinarian = factory::create_veterinarian(db).await?;

    let result = AppointmentService::new(db)
        .book(CreateAppointmentParams {
            date: date(1),
            time: time(11, 10),
            veterinarian_id: veterinarian.id,
            patient_id: patient.id,
        })
        .await;

    match result {
        Err(AppError::BadRequest(msg)) => assert_eq!(msg, "Invalid time"),
        other => panic!("Expected BadRequest, got: {:?}", other.map(|d| d.appointment)),
    }

    Ok(())
}

/// Tests booking with unknown participants.
///
/// Expected: Err(AppError::NotFound) for an unknown vet and for an unknown patient
#[tokio::test]
async fn fails_for_unknown_participants() -> Result<(), AppError> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_customer, patient) = factory::helpers::create_patient_with_owner(db).await?;
    let veterinarian = factory::create_veterinarian(db).await?;
    let service = AppointmentService::new(db);

    let unknown_vet = service
        .book(CreateAppointmentParams {
            date: date(1),
            time: time(9, 0),
            veterinarian_id: 999,
            patient_id: patient.id,
        })
        .await;
    let unknown_patient = service
        .book(CreateAppointmentParams {
            date: date(1),
            time: time(9, 0),
            veterinarian_id: veterinarian.id,
            patient_id: 999,
        })
        .await;

    assert!(matches!(unknown_vet, Err(AppError::NotFound(_))));
    assert!(matches!(unknown_patient, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests double booking the veterinarian and the patient.
///
/// Verifies that a slot is blocked both by the veterinarian's and by the patient's
/// existing appointment.
///
/// Expected: Err(AppError::Conflict) for both
#[tokio::test]
async fn rejects_taken_slots() -> Result<(), AppError> {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_customer, patient, veterinarian, appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;
    let (_other_owner, other_patient) = factory::helpers::create_patient_with_owner(db).await?;
    let other_vet = factory::create_veterinarian(db).await?;
    let service = AppointmentService::new(db);

    let vet_busy = service
        .book(CreateAppointmentParams {
            date: appointment.date,
            time: appointment.time,
            veterinarian_id: veterinarian.id,
            patient_id: other_patient.id,
        })
        .await;
    let patient_busy = service
        .book(CreateAppointmentParams {
            date: appointment.date,
            time: appointment.time,
            veterinarian_id: other_vet.id,
            patient_id: patient.id,
        })
        .await;

    assert!(matches!(vet_busy, Err(AppError::Conflict(_))));
    assert!(matches!(patient_busy, Err(AppError::Conflict(_))));

    Ok(())
}
